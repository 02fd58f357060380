use services::AppServices;
use track_core::model::ModuleId;
use track_core::quiz::{AnswerOutcome, NEXT_LOCKED_WARNING, QuizIntent};

/// Walk one module's quiz front to back the way a learner would:
/// wrong attempt, retry, unlock, revisit.
#[test]
fn quiz_flow_unlocks_a_whole_module() {
    let services = AppServices::load().unwrap();
    let mut session = services.quizzes().start_quiz(ModuleId::Handshake).unwrap();
    let total = session.total_questions();
    assert_eq!(session.unlocked_count(), 1);

    // Skipping ahead before answering is rejected.
    session.apply(QuizIntent::GoNext);
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.navigation_warning(), Some(NEXT_LOCKED_WARNING));

    // A wrong attempt keeps the lock but allows retrying.
    let wrong = (session.current_question().correct_index() + 1)
        % session.current_question().options().len();
    session.apply(QuizIntent::SelectOption(wrong));
    session.apply(QuizIntent::CheckAnswer);
    assert_eq!(
        session.last_feedback().unwrap().outcome(),
        AnswerOutcome::Incorrect
    );
    assert_eq!(session.unlocked_count(), 1);

    // Answer every question correctly in order.
    for position in 0..total {
        let correct = session.current_question().correct_index();
        session.apply(QuizIntent::SelectOption(correct));
        session.apply(QuizIntent::CheckAnswer);
        assert_eq!(
            session.last_feedback().unwrap().outcome(),
            AnswerOutcome::Correct,
            "question {position}"
        );
        session.apply(QuizIntent::GoNext);
    }
    assert_eq!(session.unlocked_count(), total);
    assert_eq!(session.current_index(), total - 1);
    assert!(session.progress().fully_unlocked);

    // Revisiting an earlier question and re-answering never loses
    // progress made further ahead.
    session.apply(QuizIntent::GoPrevious);
    session.apply(QuizIntent::GoPrevious);
    assert_eq!(session.current_index(), total.saturating_sub(3));
    let correct = session.current_question().correct_index();
    session.apply(QuizIntent::SelectOption(correct));
    session.apply(QuizIntent::CheckAnswer);
    assert_eq!(session.unlocked_count(), total);
}

/// Every authored module can run the same flow end to end.
#[test]
fn every_module_quiz_is_completable() {
    let services = AppServices::load().unwrap();
    for id in ModuleId::ALL {
        let mut session = services.quizzes().start_quiz(id).unwrap();
        for _ in 0..session.total_questions() {
            let correct = session.current_question().correct_index();
            session.apply(QuizIntent::SelectOption(correct));
            session.apply(QuizIntent::CheckAnswer);
            session.apply(QuizIntent::GoNext);
        }
        assert!(session.progress().fully_unlocked, "module {id}");
    }
}

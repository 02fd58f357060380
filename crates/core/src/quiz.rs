//! Sequential quiz-unlock engine.
//!
//! One `QuizSession` owns the state of one linear quiz: the ordered
//! questions, the position being displayed, the unlocked frontier, the
//! current selection, and the last feedback. Every user intent is a
//! synchronous, atomic transition on that state; the rendering layer
//! reads the session back after each one.

use thiserror::Error;

use crate::model::Question;

/// Fixed message shown when forward navigation is attempted past the
/// unlocked frontier.
pub const NEXT_LOCKED_WARNING: &str = "complete the question before moving on";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no questions available for quiz")]
    Empty,
}

/// Whether the last checked answer was right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
}

/// Explanation produced by the last check-answer action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    outcome: AnswerOutcome,
    text: String,
}

impl Feedback {
    #[must_use]
    pub fn outcome(&self) -> AnswerOutcome {
        self.outcome
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A user intent against the quiz. The single entry point for the
/// rendering layer is `QuizSession::apply`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    SelectOption(usize),
    CheckAnswer,
    GoPrevious,
    GoNext,
}

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub unlocked: usize,
    pub current: usize,
    pub fully_unlocked: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// State of one linear quiz.
///
/// Invariants: `current_index < questions.len()`;
/// `1 <= unlocked_count <= questions.len()` and `unlocked_count` never
/// decreases. Backward navigation is always allowed; forward
/// navigation stops at the unlocked frontier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    unlocked_count: usize,
    selected_option: Option<usize>,
    last_feedback: Option<Feedback>,
    navigation_warning: Option<&'static str>,
}

impl QuizSession {
    /// Create a session over a non-empty question list.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if no questions are provided. A
    /// malformed correct-answer index is unrepresentable here: it is
    /// rejected when the `Question` itself is validated.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }

        Ok(Self {
            questions,
            current_index: 0,
            unlocked_count: 1,
            selected_option: None,
            last_feedback: None,
            navigation_warning: None,
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    /// Number of questions the learner may view, counted from the
    /// start. Monotonically non-decreasing.
    #[must_use]
    pub fn unlocked_count(&self) -> usize {
        self.unlocked_count
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<usize> {
        self.selected_option
    }

    #[must_use]
    pub fn last_feedback(&self) -> Option<&Feedback> {
        self.last_feedback.as_ref()
    }

    #[must_use]
    pub fn navigation_warning(&self) -> Option<&'static str> {
        self.navigation_warning
    }

    #[must_use]
    pub fn at_first(&self) -> bool {
        self.current_index == 0
    }

    #[must_use]
    pub fn at_last(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.questions.len(),
            unlocked: self.unlocked_count,
            current: self.current_index,
            fully_unlocked: self.unlocked_count == self.questions.len(),
        }
    }

    /// Apply one user intent as a single atomic transition.
    pub fn apply(&mut self, intent: QuizIntent) {
        match intent {
            QuizIntent::SelectOption(index) => self.select_option(index),
            QuizIntent::CheckAnswer => self.check_answer(),
            QuizIntent::GoPrevious => self.go_previous(),
            QuizIntent::GoNext => self.go_next(),
        }
    }

    /// Record a selection for the displayed question.
    ///
    /// Out-of-range indices are ignored rather than clamped: the state
    /// stays untouched and nothing panics. Feedback and any pending
    /// warning persist until the next check or navigation.
    pub fn select_option(&mut self, index: usize) {
        if index < self.current_question().options().len() {
            self.selected_option = Some(index);
        }
    }

    /// Check the current selection against the correct answer.
    ///
    /// No-op without a selection. A correct answer on anything but the
    /// last question extends the unlocked frontier through the next
    /// question; re-answering never regresses it. Retries are
    /// unlimited.
    pub fn check_answer(&mut self) {
        let Some(selected) = self.selected_option else {
            return;
        };
        self.navigation_warning = None;

        let question = &self.questions[self.current_index];
        if question.is_correct(selected) {
            if !self.at_last() {
                self.unlocked_count = self.unlocked_count.max(self.current_index + 2);
            }
            self.last_feedback = Some(Feedback {
                outcome: AnswerOutcome::Correct,
                text: question.explanation_correct().to_string(),
            });
        } else {
            self.last_feedback = Some(Feedback {
                outcome: AnswerOutcome::Incorrect,
                text: question.explanation_incorrect().to_string(),
            });
        }
    }

    /// Step back one question. Always permitted away from the start:
    /// earlier questions stay reachable once unlocked.
    pub fn go_previous(&mut self) {
        if self.current_index == 0 {
            return;
        }
        self.move_to(self.current_index - 1);
    }

    /// Step forward one question, if the next one is unlocked.
    ///
    /// At the last question this is a no-op. Past the frontier the
    /// move is rejected and `navigation_warning` is set instead.
    pub fn go_next(&mut self) {
        if self.at_last() {
            return;
        }
        if self.current_index >= self.unlocked_count - 1 {
            self.navigation_warning = Some(NEXT_LOCKED_WARNING);
            return;
        }
        self.move_to(self.current_index + 1);
    }

    /// Jump straight to any valid index, bypassing the lock check.
    ///
    /// This mirrors the always-unlocked content-viewer pattern; the
    /// quiz UI itself only exposes previous/next so the unlock gate
    /// holds. Invalid indices are ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.questions.len() {
            self.move_to(index);
        }
    }

    fn move_to(&mut self, index: usize) {
        self.current_index = index;
        self.selected_option = None;
        self.last_feedback = None;
        self.navigation_warning = None;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionDraft;

    fn question(correct: usize, option_count: usize) -> Question {
        QuestionDraft {
            prompt: format!("Pick option {correct}"),
            options: (0..option_count).map(|i| format!("Option {i}")).collect(),
            correct_index: correct,
            explanation_correct: "That's the one.".to_string(),
            explanation_incorrect: "Not that one.".to_string(),
        }
        .validate()
        .unwrap()
    }

    fn session(shape: &[(usize, usize)]) -> QuizSession {
        let questions = shape
            .iter()
            .map(|&(correct, options)| question(correct, options))
            .collect();
        QuizSession::new(questions).unwrap()
    }

    /// Three questions with correct indices 2, 1, 3.
    fn three_question_session() -> QuizSession {
        session(&[(2, 4), (1, 4), (3, 5)])
    }

    #[test]
    fn empty_question_list_is_rejected() {
        let err = QuizSession::new(Vec::new()).unwrap_err();
        assert_eq!(err, QuizError::Empty);
    }

    #[test]
    fn fresh_session_starts_locked_at_first_question() {
        let session = three_question_session();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.unlocked_count(), 1);
        assert_eq!(session.selected_option(), None);
        assert!(session.last_feedback().is_none());
        assert!(session.navigation_warning().is_none());
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut session = three_question_session();
        session.select_option(9);
        assert_eq!(session.selected_option(), None);

        session.select_option(3);
        assert_eq!(session.selected_option(), Some(3));
        session.select_option(4);
        assert_eq!(session.selected_option(), Some(3));
    }

    #[test]
    fn select_keeps_feedback_and_warning() {
        let mut session = three_question_session();
        session.select_option(0);
        session.check_answer();
        session.go_next();
        assert!(session.navigation_warning().is_some());
        assert!(session.last_feedback().is_some());

        // Re-selecting does not wipe either; only check/navigation do.
        session.select_option(2);
        assert!(session.navigation_warning().is_some());
        assert!(session.last_feedback().is_some());
    }

    #[test]
    fn check_without_selection_changes_nothing() {
        let mut session = three_question_session();
        let before = session.clone();
        session.check_answer();
        assert_eq!(session, before);
    }

    #[test]
    fn correct_answer_unlocks_exactly_the_next_question() {
        let mut session = three_question_session();
        session.select_option(2);
        session.check_answer();

        let feedback = session.last_feedback().unwrap();
        assert_eq!(feedback.outcome(), AnswerOutcome::Correct);
        assert_eq!(feedback.text(), "That's the one.");
        assert_eq!(session.unlocked_count(), 2);
    }

    #[test]
    fn wrong_answer_keeps_the_lock() {
        let mut session = three_question_session();
        session.select_option(0);
        session.check_answer();

        let feedback = session.last_feedback().unwrap();
        assert_eq!(feedback.outcome(), AnswerOutcome::Incorrect);
        assert_eq!(session.unlocked_count(), 1);

        session.go_next();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.navigation_warning(), Some(NEXT_LOCKED_WARNING));
    }

    #[test]
    fn retry_after_wrong_answer_succeeds() {
        let mut session = three_question_session();
        session.select_option(0);
        session.check_answer();
        session.select_option(2);
        session.check_answer();
        assert_eq!(
            session.last_feedback().unwrap().outcome(),
            AnswerOutcome::Correct
        );
        assert_eq!(session.unlocked_count(), 2);
    }

    #[test]
    fn correct_answer_on_last_question_does_not_extend() {
        let mut session = session(&[(0, 2), (1, 3)]);
        session.select_option(0);
        session.check_answer();
        session.go_next();
        assert_eq!(session.current_index(), 1);

        session.select_option(1);
        session.check_answer();
        assert_eq!(
            session.last_feedback().unwrap().outcome(),
            AnswerOutcome::Correct
        );
        assert_eq!(session.unlocked_count(), 2);
    }

    #[test]
    fn next_past_frontier_is_rejected_with_warning() {
        // Scenario: answer question 0, move to 1, try to skip ahead.
        let mut session = three_question_session();
        session.select_option(2);
        session.check_answer();
        assert_eq!(session.unlocked_count(), 2);

        session.go_next();
        assert_eq!(session.current_index(), 1);
        assert!(session.navigation_warning().is_none());

        session.go_next();
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.navigation_warning(), Some(NEXT_LOCKED_WARNING));
    }

    #[test]
    fn next_at_last_question_is_a_noop() {
        let mut session = session(&[(0, 2)]);
        let before = session.clone();
        session.go_next();
        assert_eq!(session, before);
    }

    #[test]
    fn previous_at_start_is_a_noop() {
        let mut session = three_question_session();
        let before = session.clone();
        session.go_previous();
        assert_eq!(session, before);
    }

    #[test]
    fn navigation_clears_selection_feedback_and_warning() {
        let mut session = three_question_session();
        session.select_option(2);
        session.check_answer();
        session.go_next();

        assert_eq!(session.selected_option(), None);
        assert!(session.last_feedback().is_none());
        assert!(session.navigation_warning().is_none());

        session.select_option(0);
        session.check_answer();
        session.go_previous();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.selected_option(), None);
        assert!(session.last_feedback().is_none());
    }

    #[test]
    fn revisiting_and_reanswering_never_regresses_unlocks() {
        // Unlock both questions, walk back, answer again.
        let mut session = session(&[(0, 2), (1, 3)]);
        session.select_option(0);
        session.check_answer();
        session.go_next();
        assert_eq!(session.unlocked_count(), 2);

        session.go_previous();
        assert_eq!(session.current_index(), 0);
        session.select_option(0);
        session.check_answer();
        assert_eq!(session.unlocked_count(), 2);

        // Still free to move forward again.
        session.go_next();
        assert_eq!(session.current_index(), 1);
        assert!(session.navigation_warning().is_none());
    }

    #[test]
    fn repeated_correct_answers_are_idempotent_for_unlocking() {
        let mut session = three_question_session();
        for _ in 0..3 {
            session.select_option(2);
            session.check_answer();
            assert_eq!(session.unlocked_count(), 2);
        }
    }

    #[test]
    fn jump_to_bypasses_lock_and_clears_state() {
        let mut session = three_question_session();
        session.select_option(0);
        session.jump_to(2);
        assert_eq!(session.current_index(), 2);
        assert_eq!(session.selected_option(), None);
        assert!(session.last_feedback().is_none());

        session.jump_to(9);
        assert_eq!(session.current_index(), 2);
    }

    #[test]
    fn apply_routes_intents() {
        let mut session = three_question_session();
        session.apply(QuizIntent::SelectOption(2));
        session.apply(QuizIntent::CheckAnswer);
        session.apply(QuizIntent::GoNext);
        assert_eq!(session.current_index(), 1);

        session.apply(QuizIntent::GoPrevious);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn unlocked_count_is_monotonic_and_index_stays_in_bounds() {
        let mut session = three_question_session();
        let script = [
            QuizIntent::GoNext,
            QuizIntent::SelectOption(2),
            QuizIntent::CheckAnswer,
            QuizIntent::GoNext,
            QuizIntent::SelectOption(0),
            QuizIntent::CheckAnswer,
            QuizIntent::GoPrevious,
            QuizIntent::GoPrevious,
            QuizIntent::GoPrevious,
            QuizIntent::SelectOption(2),
            QuizIntent::CheckAnswer,
            QuizIntent::GoNext,
            QuizIntent::SelectOption(1),
            QuizIntent::CheckAnswer,
            QuizIntent::GoNext,
            QuizIntent::GoNext,
            QuizIntent::GoNext,
        ];

        let mut unlocked = session.unlocked_count();
        for intent in script {
            session.apply(intent);
            assert!(session.unlocked_count() >= unlocked);
            assert!(session.current_index() < session.total_questions());
            unlocked = session.unlocked_count();
        }
        assert_eq!(session.unlocked_count(), 3);
        assert_eq!(session.current_index(), 2);
    }

    #[test]
    fn progress_reflects_frontier() {
        let mut session = session(&[(0, 2), (0, 2)]);
        assert_eq!(
            session.progress(),
            QuizProgress {
                total: 2,
                unlocked: 1,
                current: 0,
                fully_unlocked: false,
            }
        );

        session.select_option(0);
        session.check_answer();
        let progress = session.progress();
        assert_eq!(progress.unlocked, 2);
        assert!(progress.fully_unlocked);
    }
}

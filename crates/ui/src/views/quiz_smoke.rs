use track_core::model::ModuleId;
use track_core::quiz::NEXT_LOCKED_WARNING;

use super::test_harness::{ViewKind, setup_view_harness};
use crate::vm::QuizIntent;

// The handshake quiz's first question has correct_index 2.

#[test]
fn correct_answer_shows_feedback_and_unlocks_the_next_question() {
    let mut harness = setup_view_harness(ViewKind::Module(ModuleId::Handshake));
    harness.rebuild();

    let dispatch = harness.quiz_handles.dispatch();
    dispatch.call(QuizIntent::SelectOption(2));
    dispatch.call(QuizIntent::CheckAnswer);
    harness.drive();

    let html = harness.render();
    assert!(html.contains("✅"), "missing success feedback in {html}");
    assert!(
        html.contains("Unlocked: 2 / 3 questions"),
        "unlock label not bumped in {html}"
    );

    dispatch.call(QuizIntent::GoNext);
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Question 2 of 3"), "did not advance: {html}");
    assert!(!html.contains("✅"), "feedback should clear on navigation");
}

#[test]
fn skipping_ahead_is_rejected_with_a_warning() {
    let mut harness = setup_view_harness(ViewKind::Module(ModuleId::Handshake));
    harness.rebuild();

    let dispatch = harness.quiz_handles.dispatch();
    dispatch.call(QuizIntent::GoNext);
    harness.drive();

    let html = harness.render();
    assert!(
        html.contains(NEXT_LOCKED_WARNING),
        "missing warning in {html}"
    );
    assert!(html.contains("Question 1 of 3"), "index moved: {html}");
}

#[test]
fn wrong_answer_keeps_the_lock_and_allows_retry() {
    let mut harness = setup_view_harness(ViewKind::Module(ModuleId::Handshake));
    harness.rebuild();

    let dispatch = harness.quiz_handles.dispatch();
    dispatch.call(QuizIntent::SelectOption(0));
    dispatch.call(QuizIntent::CheckAnswer);
    harness.drive();

    let html = harness.render();
    assert!(html.contains("❌"), "missing failure feedback in {html}");
    assert!(
        html.contains("Unlocked: 1 / 3 questions"),
        "lock should not move in {html}"
    );

    // Retry with the right option.
    dispatch.call(QuizIntent::SelectOption(2));
    dispatch.call(QuizIntent::CheckAnswer);
    harness.drive();
    let html = harness.render();
    assert!(html.contains("✅"), "retry should succeed in {html}");
    assert!(html.contains("Unlocked: 2 / 3 questions"));
}

#[test]
fn previous_returns_and_clears_transient_state() {
    let mut harness = setup_view_harness(ViewKind::Module(ModuleId::Handshake));
    harness.rebuild();

    let dispatch = harness.quiz_handles.dispatch();
    dispatch.call(QuizIntent::SelectOption(2));
    dispatch.call(QuizIntent::CheckAnswer);
    dispatch.call(QuizIntent::GoNext);
    dispatch.call(QuizIntent::SelectOption(0));
    dispatch.call(QuizIntent::CheckAnswer);
    dispatch.call(QuizIntent::GoPrevious);
    harness.drive();

    let html = harness.render();
    assert!(html.contains("Question 1 of 3"), "did not go back: {html}");
    assert!(!html.contains("❌"), "feedback should clear on navigation");
    assert!(
        html.contains("Unlocked: 2 / 3 questions"),
        "unlocks must survive going back in {html}"
    );
}

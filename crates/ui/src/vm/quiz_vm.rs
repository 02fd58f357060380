use track_core::model::Question;
use track_core::quiz::{AnswerOutcome, QuizIntent, QuizProgress, QuizSession};

/// Display-facing wrapper around one quiz session.
///
/// All mutation goes through `apply`; everything else is read-only
/// formatting for the quiz panel.
pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    pub fn apply(&mut self, intent: QuizIntent) {
        self.session.apply(intent);
    }

    #[must_use]
    pub fn question(&self) -> &Question {
        self.session.current_question()
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<usize> {
        self.session.selected_option()
    }

    /// Feedback prefixed with the outcome glyph shown to learners.
    #[must_use]
    pub fn feedback_line(&self) -> Option<String> {
        self.session.last_feedback().map(|feedback| {
            let glyph = match feedback.outcome() {
                AnswerOutcome::Correct => "✅",
                AnswerOutcome::Incorrect => "❌",
            };
            format!("{glyph} {}", feedback.text())
        })
    }

    #[must_use]
    pub fn warning(&self) -> Option<&'static str> {
        self.session.navigation_warning()
    }

    #[must_use]
    pub fn question_label(&self) -> String {
        format!(
            "Question {} of {}",
            self.session.current_index() + 1,
            self.session.total_questions()
        )
    }

    #[must_use]
    pub fn unlocked_label(&self) -> String {
        format!(
            "Unlocked: {} / {} questions",
            self.session.unlocked_count(),
            self.session.total_questions()
        )
    }

    #[must_use]
    pub fn at_first(&self) -> bool {
        self.session.at_first()
    }

    #[must_use]
    pub fn at_last(&self) -> bool {
        self.session.at_last()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        self.session.progress()
    }
}

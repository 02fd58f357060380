use serde::Deserialize;
use thiserror::Error;

/// Minimum number of answer options a question must offer.
pub const MIN_OPTIONS: usize = 2;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt is empty")]
    EmptyPrompt,

    #[error("a question needs at least {MIN_OPTIONS} options, got {len}")]
    TooFewOptions { len: usize },

    #[error("option {index} is empty")]
    EmptyOption { index: usize },

    #[error("correct_index {index} is out of range for {len} options")]
    CorrectIndexOutOfRange { index: usize, len: usize },

    #[error("missing explanation for the {0} outcome")]
    EmptyExplanation(&'static str),
}

/// Authored form of a multiple-choice question, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionDraft {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation_correct: String,
    pub explanation_incorrect: String,
}

impl QuestionDraft {
    /// Validate authored question data.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt, options, explanations, or
    /// the correct-answer index are malformed. Authoring errors are
    /// fatal at load, never recovered at runtime.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if self.options.len() < MIN_OPTIONS {
            return Err(QuestionError::TooFewOptions {
                len: self.options.len(),
            });
        }
        if let Some(index) = self.options.iter().position(|opt| opt.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { index });
        }
        if self.correct_index >= self.options.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: self.correct_index,
                len: self.options.len(),
            });
        }
        if self.explanation_correct.trim().is_empty() {
            return Err(QuestionError::EmptyExplanation("correct"));
        }
        if self.explanation_incorrect.trim().is_empty() {
            return Err(QuestionError::EmptyExplanation("incorrect"));
        }

        Ok(Question {
            prompt: self.prompt,
            options: self.options,
            correct_index: self.correct_index,
            explanation_correct: self.explanation_correct,
            explanation_incorrect: self.explanation_incorrect,
        })
    }
}

/// A validated multiple-choice question.
///
/// Invariant: `correct_index < options.len()` and `options.len() >= 2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
    explanation_correct: String,
    explanation_incorrect: String,
}

impl Question {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Whether the given option index is the correct answer.
    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }

    #[must_use]
    pub fn explanation_correct(&self) -> &str {
        &self.explanation_correct
    }

    #[must_use]
    pub fn explanation_incorrect(&self) -> &str {
        &self.explanation_incorrect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> QuestionDraft {
        QuestionDraft {
            prompt: "What does the padlock actually guarantee?".to_string(),
            options: vec![
                "That the website is honest".to_string(),
                "That the connection is encrypted to that domain".to_string(),
            ],
            correct_index: 1,
            explanation_correct: "Encrypted connection, nothing more.".to_string(),
            explanation_incorrect: "The padlock is about the connection.".to_string(),
        }
    }

    #[test]
    fn valid_draft_validates() {
        let question = draft().validate().unwrap();
        assert_eq!(question.correct_index(), 1);
        assert!(question.is_correct(1));
        assert!(!question.is_correct(0));
    }

    #[test]
    fn empty_prompt_fails() {
        let mut bad = draft();
        bad.prompt = "   ".to_string();
        assert_eq!(bad.validate().unwrap_err(), QuestionError::EmptyPrompt);
    }

    #[test]
    fn single_option_fails() {
        let mut bad = draft();
        bad.options.truncate(1);
        bad.correct_index = 0;
        assert_eq!(
            bad.validate().unwrap_err(),
            QuestionError::TooFewOptions { len: 1 }
        );
    }

    #[test]
    fn blank_option_fails() {
        let mut bad = draft();
        bad.options[0] = String::new();
        assert_eq!(
            bad.validate().unwrap_err(),
            QuestionError::EmptyOption { index: 0 }
        );
    }

    #[test]
    fn out_of_range_correct_index_fails() {
        let mut bad = draft();
        bad.correct_index = 2;
        assert_eq!(
            bad.validate().unwrap_err(),
            QuestionError::CorrectIndexOutOfRange { index: 2, len: 2 }
        );
    }

    #[test]
    fn missing_explanation_fails() {
        let mut bad = draft();
        bad.explanation_incorrect = String::new();
        assert!(matches!(
            bad.validate().unwrap_err(),
            QuestionError::EmptyExplanation("incorrect")
        ));
    }
}

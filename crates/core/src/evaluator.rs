//! Answer normalization and comparison.
//!
//! Only literal equality after normalization is checked. There is no markup
//! parser: `x^2` and `x^{2}` are different answers unless one is listed as an
//! alternative.

use crate::model::{DEFAULT_DELIMITER, Question};

pub const CORRECT_FEEDBACK: &str = "Correct! Well done.";
pub const INCORRECT_FEEDBACK: &str = "Not quite. Try again or check the hint.";

/// Feedback text shown to the learner for a judgement.
#[must_use]
pub fn feedback_message(correct: bool) -> &'static str {
    if correct {
        CORRECT_FEEDBACK
    } else {
        INCORRECT_FEEDBACK
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerEvaluator {
    delimiter: char,
}

impl Default for AnswerEvaluator {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

impl AnswerEvaluator {
    #[must_use]
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    #[must_use]
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Drop all whitespace, then strip one leading and one trailing delimiter.
    #[must_use]
    pub fn normalize(&self, text: &str) -> String {
        let compact: String = text.trim().chars().filter(|c| !c.is_whitespace()).collect();
        let stripped = compact.strip_prefix(self.delimiter).unwrap_or(compact.as_str());
        let stripped = stripped.strip_suffix(self.delimiter).unwrap_or(stripped);
        stripped.to_owned()
    }

    /// True if `submission` matches the target or any alternative.
    #[must_use]
    pub fn is_correct(&self, submission: &str, question: &Question) -> bool {
        let submitted = self.normalize(submission);
        question
            .candidates()
            .any(|candidate| self.normalize(candidate) == submitted)
    }

    /// Wrap markup in the delimiter for rendering.
    #[must_use]
    pub fn wrap(&self, markup: &str) -> String {
        format!("{d}{markup}{d}", d = self.delimiter)
    }
}

/// `AnswerEvaluator::is_correct` with the default `$` delimiter.
#[must_use]
pub fn is_correct(submission: &str, question: &Question) -> bool {
    AnswerEvaluator::default().is_correct(submission, question)
}

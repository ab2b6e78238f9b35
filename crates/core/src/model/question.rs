use thiserror::Error;

use crate::model::level::Level;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question target cannot be empty")]
    EmptyTarget,
}

//
// ─── QUESTION DRAFT ────────────────────────────────────────────────────────────
//

/// Unvalidated question input, as read from a question set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub prompt: String,
    pub target: String,
    pub hint: String,
    pub level: Level,
    pub alternatives: Vec<String>,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(prompt: impl Into<String>, target: impl Into<String>, level: Level) -> Self {
        Self {
            prompt: prompt.into(),
            target: target.into(),
            hint: String::new(),
            level,
            alternatives: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    #[must_use]
    pub fn with_alternatives<I, S>(mut self, alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternatives = alternatives.into_iter().map(Into::into).collect();
        self
    }

    /// Validate the draft into an immutable `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or the target is blank.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if self.target.trim().is_empty() {
            return Err(QuestionError::EmptyTarget);
        }

        Ok(Question {
            prompt: self.prompt,
            target: self.target,
            hint: self.hint,
            level: self.level,
            alternatives: self.alternatives,
        })
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single formula to reproduce.
///
/// Immutable once validated; the question store owns every instance for the
/// lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    target: String,
    hint: String,
    level: Level,
    alternatives: Vec<String>,
}

impl Question {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Markup the learner is asked to reproduce.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Additional accepted answers, in the order they were declared.
    #[must_use]
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// Every accepted answer: the target first, then each alternative.
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.target.as_str()).chain(self.alternatives.iter().map(String::as_str))
    }
}

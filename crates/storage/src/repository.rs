use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use trainer_core::model::{
    Level, Question, QuestionDraft, QuestionError, QuestionLocation, TrainerSettings,
};

use crate::sources::{FileSource, HttpSource};

/// Errors surfaced by question sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("request failed with status {0}")]
    HttpStatus(u16),

    #[error("invalid question at index {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

/// Wire shape of a question in a question set file.
///
/// `hint` and `alternatives` may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub prompt: String,
    pub target: String,
    #[serde(default)]
    pub hint: String,
    pub level: Level,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<String>,
}

impl QuestionRecord {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            prompt: question.prompt().to_owned(),
            target: question.target().to_owned(),
            hint: question.hint().to_owned(),
            level: question.level(),
            alternatives: question.alternatives().to_vec(),
        }
    }

    /// Convert the record into a domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or target is blank.
    pub fn into_question(self) -> Result<Question, QuestionError> {
        QuestionDraft {
            prompt: self.prompt,
            target: self.target,
            hint: self.hint,
            level: self.level,
            alternatives: self.alternatives,
        }
        .validate()
    }
}

/// Contract for anything that can produce a question set.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Load every question in the set.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the set cannot be reached or parsed.
    async fn load_questions(&self) -> Result<Vec<Question>, StorageError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Fixed in-memory question set for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemorySource {
    questions: Arc<Vec<Question>>,
}

impl InMemorySource {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: Arc::new(questions),
        }
    }
}

#[async_trait]
impl QuestionSource for InMemorySource {
    async fn load_questions(&self) -> Result<Vec<Question>, StorageError> {
        Ok(self.questions.as_ref().clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} questions)", self.questions.len())
    }
}

/// Question source behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionSource>,
}

impl Storage {
    #[must_use]
    pub fn in_memory(questions: Vec<Question>) -> Self {
        Self {
            questions: Arc::new(InMemorySource::new(questions)),
        }
    }

    /// Pick a file or HTTP source for `location`.
    #[must_use]
    pub fn from_location(location: &QuestionLocation) -> Self {
        let questions: Arc<dyn QuestionSource> = match location {
            QuestionLocation::File(path) => Arc::new(FileSource::new(path.clone())),
            QuestionLocation::Http(url) => Arc::new(HttpSource::new(url.clone())),
        };
        Self { questions }
    }

    #[must_use]
    pub fn from_settings(settings: &TrainerSettings) -> Self {
        Self::from_location(settings.source())
    }
}

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use trainer_core::model::Question;

use super::mapping::parse_question_set;
use crate::repository::{QuestionSource, StorageError};

/// Question set read from a local JSON file.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionSource for FileSource {
    async fn load_questions(&self) -> Result<Vec<Question>, StorageError> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => StorageError::NotFound,
                _ => StorageError::Connection(e.to_string()),
            })?;
        let questions = parse_question_set(&body)?;
        tracing::debug!(path = %self.path.display(), count = questions.len(), "read question file");
        Ok(questions)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

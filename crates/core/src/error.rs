use thiserror::Error;

use crate::model::{LevelError, QuestionError, SettingsError};
use crate::progression::ProgressionError;
use crate::store::StoreError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Progression(#[from] ProgressionError),
}

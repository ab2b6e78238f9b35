//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;
use trainer_core::model::SettingsError;
use trainer_core::{ProgressionError, StoreError};

/// Errors emitted by trainer sessions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TrainerError {
    #[error(transparent)]
    Dataset(#[from] StoreError),
    #[error("failed to load questions: {0}")]
    LoadFailure(#[from] StorageError),
    #[error("current question has not been answered correctly")]
    AdvanceNotAllowed,
    #[error(transparent)]
    Progression(#[from] ProgressionError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Errors reported by a `FormulaRenderer`.
///
/// Sessions log these and carry on; they never surface from a session call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RenderError {
    #[error("formula rendering failed: {0}")]
    Failed(String),
}

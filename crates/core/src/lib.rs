#![forbid(unsafe_code)]

pub mod error;
pub mod evaluator;
pub mod model;
pub mod partition;
pub mod progression;
pub mod shuffle;
pub mod store;

pub use error::Error;
pub use evaluator::{AnswerEvaluator, feedback_message, is_correct};
pub use partition::{LevelRange, LevelRanges};
pub use progression::{
    Advance, AdvanceTicket, Judgement, ProgressionController, ProgressionError, ProgressionState,
    Selection,
};
pub use store::{QuestionStore, StoreError};

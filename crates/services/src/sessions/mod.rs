mod progress;
mod service;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::TrainerError;
pub use progress::SessionProgress;
pub use service::TrainerSession;
pub use workflow::{
    LOAD_FAILED_MESSAGE, NO_QUESTIONS_MESSAGE, TrainerLoopService, is_empty_dataset,
};

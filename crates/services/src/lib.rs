#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod sessions;
pub mod view;

pub use sessions as session;

pub use error::{RenderError, TrainerError};
pub use sessions::{
    LOAD_FAILED_MESSAGE, NO_QUESTIONS_MESSAGE, SessionProgress, TrainerLoopService,
    TrainerSession, is_empty_dataset,
};
pub use view::{FormulaRenderer, NoopRenderer, QuizView, RenderSurface};

#![forbid(unsafe_code)]

pub mod repository;
pub mod sources;

pub use repository::{InMemorySource, QuestionRecord, QuestionSource, Storage, StorageError};
pub use sources::{FileSource, HttpSource, parse_question_set, to_question_set_json};

mod file;
mod http;
mod mapping;

pub use file::FileSource;
pub use http::HttpSource;
pub use mapping::{parse_question_set, to_question_set_json};

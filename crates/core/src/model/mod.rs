mod level;
mod question;
mod settings;

pub use level::{Level, LevelError};
pub use question::{Question, QuestionDraft, QuestionError};
pub use settings::{
    DEFAULT_DELIMITER, DEFAULT_SOURCE, QuestionLocation, SettingsError, TrainerSettings,
    TrainerSettingsDraft,
};

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Question set location used when none is configured.
pub const DEFAULT_SOURCE: &str = "questions.json";

/// Math delimiter stripped from answers when none is configured.
pub const DEFAULT_DELIMITER: char = '$';

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("question source cannot be empty")]
    EmptySource,
    #[error("invalid question source: {0}")]
    InvalidSource(String),
    #[error("unsupported question source scheme: {0}")]
    UnsupportedScheme(String),
    #[error("delimiter must be a single non-whitespace character, got {0:?}")]
    InvalidDelimiter(String),
    #[error("invalid value for {name}: {raw:?}")]
    InvalidValue { name: &'static str, raw: String },
}

/// Where the question set is fetched from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionLocation {
    File(PathBuf),
    Http(Url),
}

impl QuestionLocation {
    /// Parse a URL (`file://`, `http://`, `https://`) or a bare filesystem path.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` for blank input, unsupported schemes, or
    /// `file://` URLs that do not map to a local path.
    pub fn parse(raw: &str) -> Result<Self, SettingsError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(SettingsError::EmptySource);
        }

        match Url::parse(raw) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(Self::Http(url)),
                "file" => url
                    .to_file_path()
                    .map(Self::File)
                    .map_err(|()| SettingsError::InvalidSource(raw.to_owned())),
                other => Err(SettingsError::UnsupportedScheme(other.to_owned())),
            },
            Err(url::ParseError::RelativeUrlWithoutBase) => Ok(Self::File(PathBuf::from(raw))),
            Err(_) => Err(SettingsError::InvalidSource(raw.to_owned())),
        }
    }
}

/// Validated trainer configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainerSettings {
    source: QuestionLocation,
    delimiter: char,
    shuffle_on_load: bool,
    reshuffle_on_restart: bool,
    seed: Option<u64>,
}

#[derive(Clone, Debug, Default)]
pub struct TrainerSettingsDraft {
    pub source: Option<String>,
    pub delimiter: Option<String>,
    pub shuffle_on_load: Option<bool>,
    pub reshuffle_on_restart: Option<bool>,
    pub seed: Option<u64>,
}

impl TrainerSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize the draft, filling unset fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the source or delimiter is malformed.
    pub fn validate(self) -> Result<TrainerSettings, SettingsError> {
        let source = normalize_optional(self.source);
        let source = QuestionLocation::parse(source.as_deref().unwrap_or(DEFAULT_SOURCE))?;

        let delimiter = match normalize_optional(self.delimiter) {
            None => DEFAULT_DELIMITER,
            Some(raw) => {
                let mut chars = raw.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => return Err(SettingsError::InvalidDelimiter(raw)),
                }
            }
        };

        Ok(TrainerSettings {
            source,
            delimiter,
            shuffle_on_load: self.shuffle_on_load.unwrap_or(true),
            reshuffle_on_restart: self.reshuffle_on_restart.unwrap_or(true),
            seed: self.seed,
        })
    }
}

impl TrainerSettings {
    #[must_use]
    pub fn source(&self) -> &QuestionLocation {
        &self.source
    }

    #[must_use]
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    #[must_use]
    pub fn shuffle_on_load(&self) -> bool {
        self.shuffle_on_load
    }

    #[must_use]
    pub fn reshuffle_on_restart(&self) -> bool {
        self.reshuffle_on_restart
    }

    /// Fixed RNG seed, for reproducible orderings.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for TrainerSettings {
    fn default() -> Self {
        Self {
            source: QuestionLocation::File(PathBuf::from(DEFAULT_SOURCE)),
            delimiter: DEFAULT_DELIMITER,
            shuffle_on_load: true,
            reshuffle_on_restart: true,
            seed: None,
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

use std::env;

use trainer_core::model::{SettingsError, TrainerSettings, TrainerSettingsDraft};

pub const ENV_QUESTIONS: &str = "TRAINER_QUESTIONS";
pub const ENV_DELIMITER: &str = "TRAINER_DELIMITER";
pub const ENV_SHUFFLE: &str = "TRAINER_SHUFFLE";
pub const ENV_RESHUFFLE: &str = "TRAINER_RESHUFFLE";
pub const ENV_SEED: &str = "TRAINER_SEED";

/// Read trainer settings from the process environment.
///
/// # Errors
///
/// Returns `SettingsError` if any variable is set to an invalid value.
pub fn settings_from_env() -> Result<TrainerSettings, SettingsError> {
    settings_from_lookup(|name| env::var(name).ok())
}

/// Read trainer settings through `lookup`; unset variables fall back to defaults.
///
/// # Errors
///
/// Returns `SettingsError` if any variable is set to an invalid value.
pub fn settings_from_lookup<F>(lookup: F) -> Result<TrainerSettings, SettingsError>
where
    F: Fn(&str) -> Option<String>,
{
    let draft = TrainerSettingsDraft {
        source: lookup(ENV_QUESTIONS),
        delimiter: lookup(ENV_DELIMITER),
        shuffle_on_load: lookup(ENV_SHUFFLE)
            .map(|raw| parse_flag(ENV_SHUFFLE, &raw))
            .transpose()?,
        reshuffle_on_restart: lookup(ENV_RESHUFFLE)
            .map(|raw| parse_flag(ENV_RESHUFFLE, &raw))
            .transpose()?,
        seed: lookup(ENV_SEED)
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| SettingsError::InvalidValue { name: ENV_SEED, raw })
            })
            .transpose()?,
    };
    draft.validate()
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, SettingsError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SettingsError::InvalidValue {
            name,
            raw: raw.to_owned(),
        }),
    }
}

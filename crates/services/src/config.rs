use std::path::Path;

use hilo_core::{TrainerSettings, TrainerSettingsDraft};

use crate::error::ConfigError;

/// Parse a JSON settings document. Every field is optional.
///
/// ```json
/// { "deal_interval_secs": 1.25, "feedback_secs": 1.5, "seed": 7 }
/// ```
///
/// # Errors
///
/// Returns `ConfigError::Json` for malformed JSON or unknown fields.
pub fn parse_settings_json(raw: &str) -> Result<TrainerSettingsDraft, ConfigError> {
    Ok(serde_json::from_str(raw)?)
}

/// Read and parse a JSON settings file.
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file cannot be read and
/// `ConfigError::Json` if it cannot be parsed.
pub fn read_settings_file(path: &Path) -> Result<TrainerSettingsDraft, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let draft = parse_settings_json(&raw)?;
    log::debug!("loaded settings from {}", path.display());
    Ok(draft)
}

/// Layer `overrides` on top of an optional settings file and validate.
///
/// Fields set in `overrides` win; anything left unset falls back to the file
/// and then to the built-in defaults.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be loaded or a value is out of range.
pub fn resolve_settings(
    overrides: TrainerSettingsDraft,
    file: Option<&Path>,
) -> Result<TrainerSettings, ConfigError> {
    let from_file = match file {
        Some(path) => read_settings_file(path)?,
        None => TrainerSettingsDraft::new(),
    };
    Ok(overrides.or(from_file).validate()?)
}

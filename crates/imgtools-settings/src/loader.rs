//! Settings loading: defaults, then the user file, then environment.
//!
//! Loading flow:
//! 1. Start with compiled [`TelemetrySettings::default()`]
//! 2. If `~/.imgtools/telemetry.json` exists, its non-null keys replace the defaults
//! 3. Apply `IMGTOOLS_*` environment overrides (highest priority)
//! 4. Validate the result

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::errors::{Result, SettingsError};
use crate::types::{LogFormat, TelemetrySettings};

/// Overrides [`TelemetrySettings::enabled`].
pub const ENV_TELEMETRY_ENABLED: &str = "IMGTOOLS_TELEMETRY_ENABLED";
/// Overrides [`TelemetrySettings::client_type`].
pub const ENV_CLIENT_TYPE: &str = "IMGTOOLS_CLIENT_TYPE";
/// Overrides [`TelemetrySettings::log_source`].
pub const ENV_LOG_SOURCE: &str = "IMGTOOLS_LOG_SOURCE";
/// Overrides [`TelemetrySettings::log_level`].
pub const ENV_LOG_LEVEL: &str = "IMGTOOLS_LOG_LEVEL";
/// Overrides [`TelemetrySettings::log_format`].
pub const ENV_LOG_FORMAT: &str = "IMGTOOLS_LOG_FORMAT";

/// Resolve the path to the settings file (`~/.imgtools/telemetry.json`).
pub fn settings_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".imgtools").join("telemetry.json")
}

/// Load settings from the default path with env var overrides.
pub fn load_settings() -> Result<TelemetrySettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific path with env var overrides.
///
/// If the file does not exist, returns defaults. An unreadable file, a file
/// that is not a JSON object, or values failing
/// [`TelemetrySettings::validate`] are errors.
pub fn load_settings_from_path(path: &Path) -> Result<TelemetrySettings> {
    let mut settings = if path.exists() {
        debug!(?path, "loading telemetry settings from file");
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        overlay_file(&content)?
    } else {
        debug!(?path, "telemetry settings file not found, using defaults");
        TelemetrySettings::default()
    };

    apply_env_overrides(&mut settings);
    settings.validate()?;
    Ok(settings)
}

/// Apply the keys of a settings file over the compiled defaults.
///
/// The settings are flat, so each present key replaces its default
/// outright. `null` means "not set" and keeps the default. Unknown keys are
/// ignored.
pub fn overlay_file(content: &str) -> Result<TelemetrySettings> {
    let user: Map<String, Value> = serde_json::from_str(content)?;
    let mut fields = match serde_json::to_value(TelemetrySettings::default())? {
        Value::Object(fields) => fields,
        _ => Map::new(),
    };
    fields.extend(user.into_iter().filter(|(_, v)| !v.is_null()));
    Ok(serde_json::from_value(Value::Object(fields))?)
}

/// Apply `IMGTOOLS_*` environment overrides to loaded settings.
///
/// Invalid values are ignored with a warning (fall back to file/default).
pub fn apply_env_overrides(settings: &mut TelemetrySettings) {
    apply_overrides(settings, |name| std::env::var(name).ok());
}

/// Apply overrides read through `lookup`, keyed by the `ENV_*` names.
///
/// Empty values count as unset. Values that do not parse are logged and
/// skipped, leaving the current setting in place.
pub fn apply_overrides(settings: &mut TelemetrySettings, lookup: impl Fn(&str) -> Option<String>) {
    let var = |name: &'static str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(raw) = var(ENV_TELEMETRY_ENABLED) {
        match parse_bool(&raw) {
            Some(enabled) => settings.enabled = enabled,
            None => skip_invalid(ENV_TELEMETRY_ENABLED, &raw),
        }
    }
    if let Some(raw) = var(ENV_CLIENT_TYPE) {
        settings.client_type = raw;
    }
    if let Some(raw) = var(ENV_LOG_SOURCE) {
        match parse_i64_range(&raw, 1, i64::from(i32::MAX)) {
            Some(source) => settings.log_source = source,
            None => skip_invalid(ENV_LOG_SOURCE, &raw),
        }
    }
    if let Some(raw) = var(ENV_LOG_LEVEL) {
        settings.log_level = raw;
    }
    if let Some(raw) = var(ENV_LOG_FORMAT) {
        match parse_log_format(&raw) {
            Some(format) => settings.log_format = format,
            None => skip_invalid(ENV_LOG_FORMAT, &raw),
        }
    }
}

fn skip_invalid(name: &str, raw: &str) {
    warn!(key = name, value = raw, "ignoring invalid telemetry override");
}

/// Parse a string as a boolean.
///
/// Accepts (case-insensitive): `true`/`1`/`yes`/`on` or `false`/`0`/`no`/`off`.
pub fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse a string as an `i64` within an inclusive range.
pub fn parse_i64_range(val: &str, min: i64, max: i64) -> Option<i64> {
    let n: i64 = val.trim().parse().ok()?;
    (min..=max).contains(&n).then_some(n)
}

/// Parse a log format name (case-insensitive).
pub fn parse_log_format(val: &str) -> Option<LogFormat> {
    match val.trim().to_lowercase().as_str() {
        "compact" => Some(LogFormat::Compact),
        "json" => Some(LogFormat::Json),
        _ => None,
    }
}

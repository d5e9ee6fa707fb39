//! # imgtools-settings
//!
//! Configuration for the telemetry client, loaded from three layers (in
//! priority order):
//! 1. **Compiled defaults**: [`TelemetrySettings::default()`]
//! 2. **User file**: `~/.imgtools/telemetry.json` (non-null keys replace defaults)
//! 3. **Environment variables**: `IMGTOOLS_*` overrides (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use imgtools_settings::get_settings;
//!
//! let settings = get_settings();
//! println!("log source: {}", settings.log_source);
//! ```

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{apply_overrides, load_settings, load_settings_from_path, settings_path};
pub use types::{LogFormat, TelemetrySettings};

use std::sync::OnceLock;

/// Global settings singleton.
///
/// Initialized on first access via [`get_settings`].
static SETTINGS: OnceLock<TelemetrySettings> = OnceLock::new();

/// Get the global settings instance.
///
/// On first call, loads settings from `~/.imgtools/telemetry.json` with env
/// var overrides. On subsequent calls, returns the cached value. If loading
/// fails, returns compiled defaults.
pub fn get_settings() -> &'static TelemetrySettings {
    SETTINGS.get_or_init(|| match load_settings() {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(error = %e, "failed to load telemetry settings, using defaults");
            TelemetrySettings::default()
        }
    })
}

/// Initialize the global settings with a specific value.
///
/// Returns `Err(settings)` if they were already initialized.
#[allow(clippy::result_large_err)]
pub fn init_settings(settings: TelemetrySettings) -> std::result::Result<(), TelemetrySettings> {
    SETTINGS.set(settings)
}

/// Install the global tracing subscriber described by `settings`.
pub fn init_logging(settings: &TelemetrySettings) {
    match settings.log_format {
        LogFormat::Compact => imgtools_core::logging::init_subscriber(&settings.log_level),
        LogFormat::Json => imgtools_core::logging::init_json_subscriber(&settings.log_level),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_path_is_under_imgtools_dir() {
        let path = settings_path();
        assert!(path.ends_with(".imgtools/telemetry.json"), "{}", path.display());
    }

    #[test]
    fn default_settings_are_valid() {
        let settings = TelemetrySettings::default();
        assert!(settings.enabled);
        assert_eq!(settings.client_type, "DESKTOP");
        assert_eq!(settings.log_source, 1024);
        assert_eq!(settings.log_level, "warn");
        assert_eq!(settings.log_format, LogFormat::Compact);
    }

    #[test]
    fn get_settings_is_cached() {
        let a: *const TelemetrySettings = get_settings();
        let b: *const TelemetrySettings = get_settings();
        assert_eq!(a, b);
    }

    #[test]
    fn init_logging_enables_configured_level() {
        let settings = TelemetrySettings {
            log_level: "debug".into(),
            ..TelemetrySettings::default()
        };
        init_logging(&settings);
        assert!(tracing::dispatcher::has_been_set());
        // RUST_LOG takes precedence over the configured level.
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(tracing::enabled!(tracing::Level::DEBUG));
            assert!(!tracing::enabled!(tracing::Level::TRACE));
        }
    }
}

//! Structured logging with `tracing`.
//!
//! Library code logs through the `tracing` macros; binaries embedding the
//! tools call [`init_subscriber`] once at startup to route those events to
//! stderr. `RUST_LOG` takes precedence over the level passed in.

/// Initialize the global tracing subscriber with stderr output.
///
/// Call once at application startup. Subsequent calls are no-ops.
///
/// # Arguments
///
/// * `level` - Minimum log level to display when `RUST_LOG` is unset.
pub fn init_subscriber(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    // try_init fails if a global subscriber is already installed
    let _ = subscriber.try_init();
}

/// Initialize the global tracing subscriber emitting one JSON object per line.
///
/// Intended for tools running under a log collector that parses stderr.
pub fn init_json_subscriber(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .json()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_init_wins() {
        init_subscriber("warn");
        assert!(tracing::dispatcher::has_been_set());
        // later calls are no-ops
        init_subscriber("debug");
        init_json_subscriber("trace");
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(tracing::enabled!(tracing::Level::WARN));
            assert!(!tracing::enabled!(tracing::Level::DEBUG));
        }
    }
}

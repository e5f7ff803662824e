//! Tracing subscriber setup
//!
//! Logs go to a file, never stdout: the terminal is owned by the UI.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber with file logging.
///
/// Environment-based filtering (RUST_LOG) applies on top of a DEBUG
/// default. Logging is best-effort: returns false if the log file cannot
/// be created, and the viewer runs without diagnostics.
pub fn init_global(log_file_path: &Path) -> bool {
    let Ok(log_file) = File::create(log_file_path) else {
        return false;
    };
    build_subscriber(log_file).init();
    true
}

/// Build a subscriber writing to the given file.
///
/// Split out so tests can install it locally instead of globally.
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into());
    let fmt_layer = fmt::layer().with_writer(Arc::new(log_file)).with_ansi(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_subscriber_writes_to_file() {
        let log_file = NamedTempFile::new().unwrap();
        let subscriber = build_subscriber(log_file.reopen().unwrap());

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("hello from the test");
        });

        let contents = std::fs::read_to_string(log_file.path()).unwrap();
        assert!(contents.contains("hello from the test"));
    }
}

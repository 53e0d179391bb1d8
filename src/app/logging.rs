//! `tracing` subscriber setup.
//!
//! Filtering comes from `RUST_LOG`; `warn` applies only when it is unset or empty.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::{Directive, LevelFilter};

use crate::error::{AppError, EXIT_LOGGING};

fn default_directive() -> Directive {
    LevelFilter::WARN.into()
}

fn filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default_directive())
        .from_env_lossy()
}

/// Log to stderr.
pub fn init_stderr() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::new(EXIT_LOGGING, format!("Failed to install logger: {e}")))
}

/// Log to `path` (truncated), without ANSI colors.
pub fn init_file(path: &Path) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(EXIT_LOGGING, format!("Failed to create log file '{}': {e}", path.display())))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| AppError::new(EXIT_LOGGING, format!("Failed to install logger: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(directives: &str) -> String {
        EnvFilter::builder()
            .with_default_directive(default_directive())
            .parse_lossy(directives)
            .to_string()
    }

    #[test]
    fn explicit_level_is_not_capped_by_default() {
        let shown = parsed("debug");
        assert!(shown.contains("debug"), "{shown}");
        assert!(!shown.contains("warn"), "{shown}");
    }

    #[test]
    fn empty_directives_fall_back_to_warn() {
        assert_eq!(parsed(""), "warn");
    }

    #[test]
    fn target_directives_keep_their_level() {
        let shown = parsed("future_earnings=trace");
        assert!(shown.contains("future_earnings=trace"), "{shown}");
    }
}

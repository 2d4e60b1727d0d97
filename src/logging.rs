//! Diagnostic logging setup
//!
//! Logs go to stderr so frames rendered on stdout stay clean. The filter is
//! taken from `TODO_WIDGET_LOG`, then `RUST_LOG`, then [`DEFAULT_FILTER`].

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Filter used when no environment variable is set
pub const DEFAULT_FILTER: &str = "todo_widget=info";

/// Environment variable checked before `RUST_LOG`
pub const LOG_ENV: &str = "TODO_WIDGET_LOG";

/// Build the filter from a directive string, falling back to the default
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber
///
/// Fails if a subscriber is already installed.
pub fn init_logging() -> Result<()> {
    let directives = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok();

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(build_filter(None).to_string(), DEFAULT_FILTER);
    }

    #[test]
    fn test_explicit_filter() {
        assert_eq!(
            build_filter(Some("todo_widget=debug")).to_string(),
            "todo_widget=debug"
        );
    }
}

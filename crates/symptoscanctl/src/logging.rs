//! Logging for symptoscanctl
//!
//! Warnings such as an unreachable proxy go to stderr so they never mix with
//! the cards on stdout. `RUST_LOG` overrides the default `warn` level.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Filter from `RUST_LOG`-style directives, `warn` when unset or invalid
pub fn filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

pub fn init() {
    let directives = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_default_level_is_warn() {
        assert_eq!(filter(None).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_directives_override_default() {
        assert_eq!(filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(filter(Some("symptoscanctl=loud")).max_level_hint(), Some(LevelFilter::WARN));
    }
}

//! Structured logging configuration.

use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter directive.
pub const LOG_FILTER_ENV: &str = "BIBLIO_BACKUP_LOG";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}' (expected pretty or json)")),
        }
    }
}

/// Logging configuration.
#[derive(Debug)]
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,
    /// Event filter.
    pub filter: EnvFilter,
}

impl LoggingConfig {
    /// Builds a logging config from the environment.
    ///
    /// The filter comes from `BIBLIO_BACKUP_LOG`, then `RUST_LOG`, then
    /// `debug` when `verbose` is set and `warn` otherwise.
    #[must_use]
    pub fn from_env(format: LogFormat, verbose: bool) -> Self {
        let directive = std::env::var(LOG_FILTER_ENV)
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok());

        Self {
            format,
            filter: build_filter(directive.as_deref(), verbose),
        }
    }
}

/// Parses `directive`, falling back to the verbosity default when it is
/// missing, blank or invalid.
fn build_filter(directive: Option<&str>, verbose: bool) -> EnvFilter {
    let fallback = if verbose { "debug" } else { "warn" };

    directive
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("pretty".parse::<LogFormat>(), Ok(LogFormat::Pretty));
        assert_eq!("text".parse::<LogFormat>(), Ok(LogFormat::Pretty));
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_filter_fallbacks() {
        assert_eq!(build_filter(None, false).to_string(), "warn");
        assert_eq!(build_filter(None, true).to_string(), "debug");
        assert_eq!(build_filter(Some("  "), false).to_string(), "warn");
        assert_eq!(build_filter(Some("info"), false).to_string(), "info");
    }
}

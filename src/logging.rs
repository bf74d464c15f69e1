//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The filter comes from `POSTDECK_LOG` (any `EnvFilter` directive, default
//! `warn`). One-shot commands log to stderr. The browser owns the terminal, so
//! it only logs when `POSTDECK_LOG` is set, and then to a file.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{PostdeckError, Result};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "POSTDECK_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Build the filter from `POSTDECK_LOG`, falling back to `warn`
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Whether the user asked for logging explicitly
pub fn log_requested() -> bool {
    std::env::var(LOG_ENV).is_ok_and(|v| !v.is_empty())
}

/// Default log file for the browser: `<data dir>/postdeck.log`
pub fn default_log_file() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "postdeck").ok_or_else(|| {
        PostdeckError::Config("could not determine a data directory".to_string())
    })?;
    Ok(dirs.data_dir().join("postdeck.log"))
}

/// Install the global subscriber
///
/// Calling this more than once keeps the first subscriber.
pub fn init(target: LogTarget) -> Result<()> {
    let filter = env_filter();

    let installed = match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .without_time(),
            )
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false),
                )
                .try_init()
        }
    };

    if installed.is_err() {
        tracing::debug!("global subscriber already installed");
    }
    Ok(())
}

/// Set up logging for the terminal browser
///
/// No subscriber is installed unless `POSTDECK_LOG` is set.
pub fn init_for_tui() -> Result<()> {
    if !log_requested() {
        return Ok(());
    }
    init(LogTarget::File(default_log_file()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_log_requested_reads_env() {
        // SAFETY: serialized with the other env-touching tests
        unsafe { std::env::remove_var(LOG_ENV) };
        assert!(!log_requested());

        unsafe { std::env::set_var(LOG_ENV, "postdeck=debug") };
        assert!(log_requested());
        assert_eq!(env_filter().to_string(), "postdeck=debug");

        unsafe { std::env::remove_var(LOG_ENV) };
        assert_eq!(env_filter().to_string(), "warn");
    }

    #[test]
    fn test_default_log_file_name() {
        if let Ok(path) = default_log_file() {
            assert!(path.ends_with("postdeck.log"));
        }
    }
}

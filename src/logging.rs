use std::ffi::OsString;
use std::path::{Path, PathBuf};

use grandprix_tickets::AppConfig;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const FALLBACK_LOG_FILE: &str = "ticketing.log";

/// Pretty stdout plus a plain-text file at `config.log_file`, both filtered
/// by `config.log_level`. Hold the guard until exit so the file is flushed.
pub fn init_logger(config: &AppConfig) -> WorkerGuard {
    let (filter, bad_level) = match EnvFilter::try_new(&config.log_level) {
        Ok(filter) => (filter, false),
        Err(_) => (EnvFilter::new("info"), true),
    };

    let (log_dir, log_name) = split_log_path(&config.log_file);
    let file_appender = tracing_appender::rolling::never(&log_dir, &log_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stdout)
                .pretty()
                .with_file(false)
                .without_time(),
        )
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .with(filter)
        .init();

    if bad_level {
        warn!("Unusable log_level '{}', logging at info", config.log_level);
    }
    info!(
        data_dir = %config.data_dir,
        log_file = %log_dir.join(&log_name).display(),
        "Ticketing log started"
    );

    guard
}

/// Splits the configured log path into the folder the appender writes to and
/// the file name inside it.
fn split_log_path(path: &str) -> (PathBuf, OsString) {
    let path = Path::new(path);
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from(FALLBACK_LOG_FILE));
    (dir, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_nested_log_path() {
        let (dir, name) = split_log_path("./logs/ticketing.log");
        assert_eq!(dir, PathBuf::from("./logs"));
        assert_eq!(name, OsString::from("ticketing.log"));
    }

    #[test]
    fn test_split_bare_file_name() {
        let (dir, name) = split_log_path("sales.log");
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, OsString::from("sales.log"));
    }

    #[test]
    fn test_split_directory_only_uses_fallback_name() {
        let (dir, name) = split_log_path("/");
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, OsString::from(FALLBACK_LOG_FILE));
    }
}

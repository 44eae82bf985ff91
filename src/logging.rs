use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use time::UtcOffset;
use time::macros::format_description;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{self, EnvFilter, fmt, prelude::*};

use crate::wire_logger::WireLogger;

const LOG_RETENTION_DAYS: u64 = 7;

/// Get the log directory path in the user-specific OS cache directory
/// - Linux: ~/.cache/japy/japy-language-server/
/// - macOS: ~/Library/Caches/japy/japy-language-server/
/// - Windows: %LOCALAPPDATA%\japy\japy-language-server\
fn get_log_dir() -> io::Result<PathBuf> {
    let mut log_dir = dirs::cache_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "Unable to determine user cache directory")
    })?;
    log_dir.push("japy");
    log_dir.push("japy-language-server");
    fs::create_dir_all(&log_dir)?;
    Ok(log_dir)
}

/// Session and wire logs are the only files this server writes
fn is_log_artifact(name: &str) -> bool {
    (name.starts_with("session-") || name.starts_with("wire-")) && name.ends_with(".log")
}

/// Remove session and wire logs whose modification time is older than `retention`
fn cleanup_old_logs(log_dir: &Path, retention: Duration) -> io::Result<usize> {
    let now = SystemTime::now();
    let mut removed = 0;

    for entry in fs::read_dir(log_dir)?.flatten() {
        let Ok(metadata) = entry.metadata() else { continue };
        if !metadata.is_file() {
            continue;
        }
        let is_artifact = entry.file_name().to_str().is_some_and(is_log_artifact);
        let expired = metadata
            .modified()
            .ok()
            .and_then(|modified| now.duration_since(modified).ok())
            .is_some_and(|age| age > retention);

        if is_artifact && expired {
            match fs::remove_file(entry.path()) {
                Ok(()) => removed += 1,
                Err(e) => eprintln!("Failed to remove old log file {:?}: {}", entry.path(), e),
            }
        }
    }

    Ok(removed)
}

/// Identifier shared by the session log and wire log of one server process
fn session_id() -> io::Result<String> {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(format_description!("[year][month][day]-[hour][minute][second]"))
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    Ok(format!("{}-{}", timestamp, std::process::id()))
}

/// Stderr filter: `--log-level` if given, otherwise `RUST_LOG`, otherwise "info"
fn stderr_filter(log_level: Option<&str>) -> EnvFilter {
    match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    }
}

/// Initialize logger with stderr output and, optionally, a session log file
///
/// Returns a tuple of (WorkerGuard, WireLogger) that must be kept alive for the
/// duration of the program.
///
/// # Arguments
/// * `no_color` - Disable ANSI colors in stderr output
/// * `log_level` - Override log level (otherwise uses RUST_LOG or defaults to "info")
/// * `enable_file_logging` - Write a DEBUG-level session log to the cache directory (disable for tests)
/// * `enable_wire_logging` - Also log every JSON-RPC message to a separate wire log
///
/// Stdout is reserved for the LSP transport, so nothing here ever writes to it.
pub fn init_logger(
    no_color: bool,
    log_level: Option<&str>,
    enable_file_logging: bool,
    enable_wire_logging: bool,
) -> io::Result<(WorkerGuard, WireLogger)> {
    let timer = fmt::time::OffsetTime::new(
        UtcOffset::UTC,
        format_description!("[[[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z]"),
    );

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_timer(timer.clone())
        .with_ansi(!no_color)
        .with_filter(stderr_filter(log_level));

    let (file_layer, guard, wire_logger, log_path) = if enable_file_logging {
        let log_dir = get_log_dir()?;
        let retention = Duration::from_secs(LOG_RETENTION_DAYS * 24 * 60 * 60);
        cleanup_old_logs(&log_dir, retention)?;

        let session_id = session_id()?;
        let wire_logger = WireLogger::new(enable_wire_logging, Some(&log_dir), &session_id)?;

        let log_path = log_dir.join(format!("session-{}.log", session_id));
        let file = fs::OpenOptions::new().create(true).append(true).open(&log_path)?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file);

        let layer = fmt::layer()
            .with_writer(non_blocking)
            .with_timer(timer)
            .with_ansi(false)
            .with_filter(EnvFilter::new("debug"));

        (Some(layer), guard, wire_logger, Some(log_path))
    } else {
        let (_, guard) = tracing_appender::non_blocking(io::sink());
        (None, guard, WireLogger::disabled(), None)
    };

    let result = tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    // A subscriber installed earlier (e.g. by another test) is not an error
    if let Err(e) = result {
        let message = e.to_string();
        if !message.contains("already been set") && !message.contains("SetLoggerError") {
            return Err(io::Error::new(io::ErrorKind::Other, e));
        }
    }

    if let Some(path) = log_path {
        eprintln!("Logging to file: {:?}", path);
    }
    Ok((guard, wire_logger))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_artifact_names() {
        assert!(is_log_artifact("session-20260101-120000-42.log"));
        assert!(is_log_artifact("wire-20260101-120000-42.log"));
        assert!(!is_log_artifact("session-notes.txt"));
        assert!(!is_log_artifact("other.log"));
    }

    #[test]
    fn test_cleanup_keeps_fresh_logs() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("session-1.log"), "fresh").unwrap();
        fs::write(dir.path().join("notes.txt"), "keep").unwrap();

        let removed = cleanup_old_logs(dir.path(), Duration::from_secs(3600)).unwrap();
        assert_eq!(removed, 0);
        assert!(dir.path().join("session-1.log").exists());
    }

    #[test]
    fn test_cleanup_removes_only_expired_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("wire-1.log"), "old").unwrap();
        fs::write(dir.path().join("notes.txt"), "keep").unwrap();
        std::thread::sleep(Duration::from_millis(20));

        let removed = cleanup_old_logs(dir.path(), Duration::from_millis(1)).unwrap();
        assert_eq!(removed, 1);
        assert!(!dir.path().join("wire-1.log").exists());
        assert!(dir.path().join("notes.txt").exists());
    }

    #[test]
    fn test_session_id_contains_pid() {
        let id = session_id().unwrap();
        assert!(id.ends_with(&format!("-{}", std::process::id())));
    }

    #[test]
    fn test_init_logger_without_files() {
        let (_guard, wire_logger) = init_logger(true, Some("warn"), false, false).unwrap();
        assert!(!wire_logger.is_enabled());
    }
}

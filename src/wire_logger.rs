//! Wire protocol logger for LSP messages
//!
//! Records every JSON-RPC message exchanged with the client in a separate file,
//! using LSP framing so the log can be replayed or diffed:
//!
//! ```text
//! [2026-10-19T09:12:03.481Z] <<< REQUEST
//! Content-Length: 152
//!
//! {"jsonrpc":"2.0","id":4,"method":"textDocument/completion",...}
//! ```
//!
//! The wire log shares its session id with the session log, so the two can be
//! correlated by filename and timestamp.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde_json::Value;
use time::macros::format_description;

/// Direction of a logged message relative to the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Client to server
    Incoming,
    /// Server to client
    Outgoing,
}

impl Direction {
    fn arrow(self) -> &'static str {
        match self {
            Direction::Incoming => "<<<",
            Direction::Outgoing => ">>>",
        }
    }
}

/// Classifies a JSON-RPC message by the fields it carries
pub fn message_type(message: &Value) -> &'static str {
    match (message.get("method").is_some(), message.get("id").is_some()) {
        (true, true) => "REQUEST",
        (true, false) => "NOTIFICATION",
        (false, _) => "RESPONSE",
    }
}

/// Wire logger that logs all LSP messages to a separate file
#[derive(Clone)]
pub struct WireLogger {
    writer: Option<Arc<Mutex<fs::File>>>,
    path: Option<PathBuf>,
}

impl WireLogger {
    /// A logger that drops every message
    pub fn disabled() -> Self {
        WireLogger { writer: None, path: None }
    }

    /// Create a new wire logger
    ///
    /// # Arguments
    /// * `enabled` - Whether wire logging is enabled
    /// * `log_dir` - Directory where the wire log should be created
    /// * `session_id` - Session identifier used in the filename (e.g., "20261019-091203-4242")
    pub fn new(enabled: bool, log_dir: Option<&Path>, session_id: &str) -> io::Result<Self> {
        if !enabled {
            return Ok(Self::disabled());
        }

        let log_dir = log_dir.ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Log directory not provided")
        })?;

        let wire_path = log_dir.join(format!("wire-{}.log", session_id));
        let file = fs::OpenOptions::new().create(true).append(true).open(&wire_path)?;

        eprintln!("Wire logging to file: {:?}", wire_path);

        Ok(WireLogger {
            writer: Some(Arc::new(Mutex::new(file))),
            path: Some(wire_path),
        })
    }

    /// Check if wire logging is enabled
    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    /// Path of the wire log file, when enabled
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Log a message received from the client
    pub fn log_incoming(&self, message: &Value) {
        self.log(Direction::Incoming, message);
    }

    /// Log a message sent to the client
    pub fn log_outgoing(&self, message: &Value) {
        self.log(Direction::Outgoing, message);
    }

    fn log(&self, direction: Direction, message: &Value) {
        let Some(writer) = &self.writer else { return };
        let Ok(mut file) = writer.lock() else { return };

        let timestamp = time::OffsetDateTime::now_utc()
            .format(format_description!(
                "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
            ))
            .unwrap_or_else(|_| "<unknown time>".to_string());
        let body = serde_json::to_string(message).unwrap_or_else(|_| "<invalid JSON>".to_string());

        // Write errors are ignored: the wire log must never disturb the session
        let _ = write!(
            file,
            "[{}] {} {}\nContent-Length: {}\r\n\r\n{}\n\n",
            timestamp,
            direction.arrow(),
            message_type(message),
            body.len(),
            body
        );
        let _ = file.flush();
    }
}

// Implement Debug to avoid exposing internal file handle
impl std::fmt::Debug for WireLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WireLogger")
            .field("enabled", &self.is_enabled())
            .field("path", &self.path)
            .finish()
    }
}

//! Custom logging module.
//!
//! This module provides a logger that captures formatted log entries into a
//! bounded buffer shared with the application state, so the UI can show them
//! in its log panel instead of writing over the terminal.

use crate::error::{AppError, AppResult};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Maximum number of log entries kept for display.
pub const MAX_LOG_ENTRIES: usize = 200;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {:<5} {}", timestamp, level_str, record.args())
}

/// Shared, bounded buffer of formatted log lines. Cloning shares the buffer.
///
#[derive(Clone, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<String>>>,
}

impl LogBuffer {
    /// Append an entry, dropping the oldest one when full.
    ///
    pub fn push(&self, entry: String) {
        // A poisoned buffer only loses log lines.
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() == MAX_LOG_ENTRIES {
                entries.pop_front();
            }
            entries.push_back(entry);
        }
    }

    /// Return a copy of all entries, oldest first.
    ///
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// Logger that captures records into a [`LogBuffer`]
///
pub struct StateLogger {
    buffer: LogBuffer,
    level: LevelFilter,
}

impl StateLogger {
    pub fn new(buffer: LogBuffer, level: LevelFilter) -> Self {
        StateLogger { buffer, level }
    }

    /// Install a logger at the given level as the global logger and return
    /// the buffer it writes to.
    ///
    pub fn init(level: LevelFilter) -> AppResult<LogBuffer> {
        let buffer = LogBuffer::default();
        let logger: &'static StateLogger = Box::leak(Box::new(StateLogger::new(buffer.clone(), level)));
        log::set_logger(logger).map_err(|e| AppError::Logger(e.to_string()))?;
        log::set_max_level(level);
        Ok(buffer)
    }
}

impl Log for StateLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // Dependencies log through the same facade; keep only our own below Info
        metadata.level() <= self.level
            && (metadata.level() <= Level::Info || metadata.target().starts_with("bmi_tui"))
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.buffer.push(format_log(record));
        }
    }

    fn flush(&self) {
        // No-op
    }
}

// Logger - leveled message log with a bounded buffer and optional file sink.

use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// No logging
    None,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warning,
    /// Info, warnings, and errors
    Info,
    /// Verbose trace logging
    Trace,
}

/// Logger
///
/// Collects messages in memory (bounded) and optionally mirrors them to a
/// file. Messages above the configured level are dropped.
pub struct Logger {
    /// Current log level
    level: LogLevel,

    /// In-memory message buffer
    buffer: Vec<String>,

    /// Maximum number of buffered entries; older entries are evicted
    max_buffer_size: usize,

    /// Output file
    output_file: Option<File>,
}

impl Logger {
    /// Create a new logger that records nothing.
    pub fn new() -> Self {
        Logger {
            level: LogLevel::None,
            buffer: Vec::new(),
            max_buffer_size: 10_000,
            output_file: None,
        }
    }

    /// Create a logger at the given level.
    pub fn with_level(level: LogLevel) -> Self {
        let mut logger = Self::new();
        logger.level = level;
        logger
    }

    /// Set the log level.
    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    /// Current log level.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Mirror all accepted messages to a file, truncating it.
    pub fn open_file<P: AsRef<Path>>(&mut self, path: P) -> std::io::Result<()> {
        self.output_file = Some(File::create(path)?);
        Ok(())
    }

    /// Record a message at the given level.
    pub fn log(&mut self, level: LogLevel, message: &str) {
        if level == LogLevel::None || level > self.level {
            return;
        }

        if let Some(file) = &mut self.output_file {
            // Sink failures are swallowed
            let _ = writeln!(file, "{}", message);
        }

        if self.buffer.len() >= self.max_buffer_size {
            self.buffer.remove(0);
        }
        self.buffer.push(message.to_string());
    }

    /// Record an error message.
    pub fn error(&mut self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Record a warning message.
    pub fn warn(&mut self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    /// Record an informational message.
    pub fn info(&mut self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Record a trace message.
    pub fn trace(&mut self, message: &str) {
        self.log(LogLevel::Trace, message);
    }

    /// Buffered messages, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.buffer
    }

    /// Drop all buffered messages.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Severity levels accepted by `--log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Returns the canonical uppercase representation.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(LoggingError::UnknownLevel(raw.to_string())),
        }
    }
}

/// JSON-line logger writing one record per line to `sink`.
#[derive(Debug)]
pub struct JsonLineLogger<W: Write> {
    sink: W,
    current_level: LogLevel,
}

impl JsonLineLogger<io::Stderr> {
    pub fn stderr(level: LogLevel) -> Self {
        Self::new(io::stderr(), level)
    }
}

impl<W: Write> JsonLineLogger<W> {
    pub fn new(sink: W, level: LogLevel) -> Self {
        Self {
            sink,
            current_level: level,
        }
    }

    pub fn level(&self) -> LogLevel {
        self.current_level
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.current_level = level;
    }

    /// Emits a JSON-line entry stamped with the wall clock.
    pub fn log(&mut self, level: LogLevel, module: &str, message: &str) -> Result<(), LoggingError> {
        self.log_with(level, module, message, &[])
    }

    /// Emits an entry carrying extra string fields (`path`, `sha256`, ...).
    pub fn log_with(
        &mut self,
        level: LogLevel,
        module: &str,
        message: &str,
        fields: &[(&str, &str)],
    ) -> Result<(), LoggingError> {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default();
        self.log_at(ts, level, module, message, fields)
    }

    /// Emits an entry with an explicit timestamp.
    pub fn log_at(
        &mut self,
        ts_ms: u64,
        level: LogLevel,
        module: &str,
        message: &str,
        fields: &[(&str, &str)],
    ) -> Result<(), LoggingError> {
        if level < self.current_level {
            return Ok(());
        }
        let record = LogRecord {
            ts: ts_ms,
            level: level.as_str(),
            module,
            message,
            fields: fields.iter().copied().collect(),
        };
        let line = serde_json::to_string(&record)?;
        writeln!(self.sink, "{line}").map_err(LoggingError::Io)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to serialize log record: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write log record: {0}")]
    Io(io::Error),
    #[error("unknown log level {0:?} (expected trace, debug, info, warn or error)")]
    UnknownLevel(String),
}

#[derive(Debug, Serialize)]
struct LogRecord<'a> {
    ts: u64,
    level: &'a str,
    module: &'a str,
    message: &'a str,
    #[serde(flatten)]
    fields: BTreeMap<&'a str, &'a str>,
}

//! Internal logging system for the Prism pipeline
//!
//! - Customizable logger via the Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - File and line information for ERROR logs

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Implement this trait to route pipeline diagnostics somewhere else
/// (a file, an in-game console, a test capture buffer).
///
/// # Example
///
/// ```no_run
/// use prism_pipeline::prism::log::{Logger, LogEntry};
///
/// struct FileLogger {
///     file: std::fs::File,
/// }
///
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "prism::CameraPass", "prism::GraphicsState")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-frame details (buffer selection, debug markers)
    Trace,

    /// Development information
    Debug,

    /// Important informational messages
    Info,

    /// Degenerate but valid conditions
    Warn,

    /// Device errors and failed restores (with file:line details)
    Error,
}

/// Default logger: colored console output
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp,
                severity_str,
                source,
                entry.message,
                file,
                line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                timestamp,
                severity_str,
                source,
                entry.message
            );
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
///
/// ```ignore
/// prism_trace!("prism::TargetSelector", "draw/read buffer 0x{:04X}", id);
/// ```
#[macro_export]
macro_rules! prism_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::prism::Diagnostics::log(
            $crate::prism::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
#[macro_export]
macro_rules! prism_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::prism::Diagnostics::log(
            $crate::prism::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
#[macro_export]
macro_rules! prism_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::prism::Diagnostics::log(
            $crate::prism::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
///
/// ```ignore
/// prism_warn!("prism::CameraPass", "No delegate pass");
/// ```
#[macro_export]
macro_rules! prism_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::prism::Diagnostics::log(
            $crate::prism::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! prism_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::prism::Diagnostics::log_detailed(
            $crate::prism::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

/// Log an ERROR and build the matching `Error::BackendError`
///
/// ```ignore
/// let err = prism_err!("prism::GraphicsState", "device rejected {:?}", call);
/// ```
#[macro_export]
macro_rules! prism_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::prism::Diagnostics::log_detailed(
            $crate::prism::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::prism::Error::BackendError(message)
    }};
}

/// Log an ERROR and return `Err(Error::BackendError)` from the current function
#[macro_export]
macro_rules! prism_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::prism_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;

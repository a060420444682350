//! # conlog-core
//! Core utilities for conlog - severities, line formatting and console writers.

mod config;
mod format;
mod log_writer;
mod severity;

pub use config::{CONLOG_CONFIG, ConlogConfig};
pub use format::{format_line, format_line_at};
pub use log_writer::{Channel, LogCapture, LogConsole, LogWriter};
pub use severity::{ParseSeverityError, Severity};

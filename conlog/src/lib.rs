//! # conlog
//! Process-wide leveled console logger with one-time configuration.
//!
//! Lines look like `2024-05-01T12:30:05.042Z - INFO - message` and go to stdout,
//! or to stderr for severities above INFO when routing is enabled.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! conlog = "0.1.0"
//! ```
//!
//! ```rust
//! use conlog::{Severity, sink_config};
//!
//! sink_config()
//!     .with_threshold(Severity::Debug)
//!     .route_to_stderr()
//!     .init_global();
//!
//! conlog::debug("starting");
//! conlog::warn("this one goes to stderr");
//! ```
//!
//! ## Configuring once
//! The first configuration wins. Later attempts are ignored unless they ask to
//! overwrite.
//! ```rust
//! use conlog::{Severity, SinkConfig};
//!
//! let quiet = SinkConfig { threshold: Severity::Error, route_to_stderr: false };
//! assert!(conlog::configure(SinkConfig::default(), false));
//! assert!(!conlog::configure(quiet, false));
//! assert!(conlog::configure(quiet, true));
//! conlog::info("dropped");
//! ```
//!
//! ## Explicit handles
//! A [`LogSink`] can be created and passed around instead of using the
//! process-wide one.
//! ```rust
//! use conlog::{LogCapture, LogSink};
//!
//! let sink = LogSink::new(LogCapture::new());
//! sink.info("hello");
//! assert!(sink.writer().standard_lines()[0].ends_with(" - INFO - hello"));
//! ```
//!
//! ## The `log` facade
//! ```rust
//! conlog::install_log_bridge();
//! log::info!("Hello, world!");
//! ```
//!
//! ## Environment
//! `CONLOG_LEVEL`, `CONLOG_USE_STDERR` and `CONLOG_COLOR` seed the defaults of
//! the process-wide sink and of [`sink_config`].

mod bridge;
mod sink;

use std::sync::LazyLock;

pub use bridge::install_log_bridge_for;
pub use conlog_core::{
    CONLOG_CONFIG, Channel, LogCapture, LogConsole, LogWriter, ParseSeverityError, Severity,
};
pub use sink::{LogSink, SinkConfig};

/// Sink shared by the whole process, writing to stdout and stderr.
static GLOBAL_SINK: LazyLock<LogSink> = LazyLock::new(|| {
    LogSink::with_config(SinkConfig::from_env(), LogConsole).with_color(CONLOG_CONFIG.COLOR)
});

/// The process-wide sink.
pub fn global_sink() -> &'static LogSink {
    &GLOBAL_SINK
}

pub fn log(severity: Severity, message: &str) {
    GLOBAL_SINK.log(severity, message);
}

pub fn debug(message: &str) {
    log(Severity::Debug, message);
}

pub fn info(message: &str) {
    log(Severity::Info, message);
}

pub fn warn(message: &str) {
    log(Severity::Warn, message);
}

pub fn error(message: &str) {
    log(Severity::Error, message);
}

pub fn fatal(message: &str) {
    log(Severity::Fatal, message);
}

/// Configures the process-wide sink. Ignored if it was already configured,
/// unless `overwrite` is set. Returns whether the settings were applied.
pub fn configure(settings: SinkConfig, overwrite: bool) -> bool {
    GLOBAL_SINK.configure(settings, overwrite)
}

/// Routes `log::info!` and friends through the process-wide sink.
pub fn install_log_bridge() -> bool {
    install_log_bridge_for(&*GLOBAL_SINK)
}

/// Builder for sink settings.
pub struct ConfigBuilder {
    threshold: Severity,
    route_to_stderr: bool,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        let SinkConfig {
            threshold,
            route_to_stderr,
        } = SinkConfig::from_env();
        Self {
            threshold,
            route_to_stderr,
        }
    }
}

impl ConfigBuilder {
    /// Sets the minimum severity
    pub fn with_threshold(self, threshold: Severity) -> Self {
        Self { threshold, ..self }
    }
    /// Send lines above INFO to stderr
    pub fn route_to_stderr(self) -> Self {
        Self {
            route_to_stderr: true,
            ..self
        }
    }
    /// Dynamically set the stderr flag.
    pub fn with_stderr(self, yes: bool) -> Self {
        Self {
            route_to_stderr: yes,
            ..self
        }
    }
    pub fn build(self) -> SinkConfig {
        SinkConfig {
            threshold: self.threshold,
            route_to_stderr: self.route_to_stderr,
        }
    }
    /// Configure `sink`, see [`LogSink::configure`].
    pub fn init<W: LogWriter>(self, sink: &LogSink<W>, overwrite: bool) -> bool {
        sink.configure(self.build(), overwrite)
    }
    /// Configure the process-wide sink unless it was configured already.
    pub fn init_global(self) -> bool {
        configure(self.build(), false)
    }
    /// Configure the process-wide sink, replacing any earlier settings.
    pub fn init_global_overwrite(self) -> bool {
        configure(self.build(), true)
    }
}

/// Returns a ConfigBuilder seeded from the environment.
pub fn sink_config() -> ConfigBuilder {
    ConfigBuilder::default()
}

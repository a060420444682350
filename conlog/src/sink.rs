use std::sync::{Mutex, MutexGuard};

use conlog_core::{CONLOG_CONFIG, LogConsole, LogWriter, Severity, format_line};

/// Threshold and routing applied by a [`LogSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Lines below this severity are dropped.
    pub threshold: Severity,
    /// Send lines above INFO to the diagnostic channel instead of the standard one.
    pub route_to_stderr: bool,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            threshold: Severity::Info,
            route_to_stderr: false,
        }
    }
}

impl SinkConfig {
    /// Settings seeded from the `CONLOG_LEVEL` and `CONLOG_USE_STDERR` variables.
    pub fn from_env() -> Self {
        Self {
            threshold: CONLOG_CONFIG.LEVEL,
            route_to_stderr: CONLOG_CONFIG.USE_STDERR,
        }
    }
}

struct SinkState {
    config: SinkConfig,
    configured: bool,
}

/// Filters, formats and writes log lines.
///
/// A sink starts unconfigured but usable with its initial settings. The first
/// [`configure`](Self::configure) call replaces them; later calls only apply
/// when `overwrite` is set.
pub struct LogSink<W = LogConsole> {
    state: Mutex<SinkState>,
    writer: W,
    color: bool,
}

impl Default for LogSink<LogConsole> {
    fn default() -> Self {
        Self::new(LogConsole)
    }
}

impl<W: LogWriter> LogSink<W> {
    /// Sink with the default settings (INFO, no stderr routing).
    pub fn new(writer: W) -> Self {
        Self::with_config(SinkConfig::default(), writer)
    }

    /// Sink starting from `config`. It still counts as unconfigured.
    pub fn with_config(config: SinkConfig, writer: W) -> Self {
        Self {
            state: Mutex::new(SinkState {
                config,
                configured: false,
            }),
            writer,
            color: false,
        }
    }

    /// Colour the severity column.
    pub fn with_color(self, color: bool) -> Self {
        Self { color, ..self }
    }

    fn state(&self) -> MutexGuard<'_, SinkState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn config(&self) -> SinkConfig {
        self.state().config
    }

    pub fn is_configured(&self) -> bool {
        self.state().configured
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Applies `settings` unless the sink was already configured and
    /// `overwrite` is false. Returns whether the settings were applied.
    pub fn configure(&self, settings: SinkConfig, overwrite: bool) -> bool {
        let mut state = self.state();
        if state.configured && !overwrite {
            return false;
        }
        state.config = settings;
        state.configured = true;
        true
    }

    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.state().config.threshold
    }

    pub fn log(&self, severity: Severity, message: &str) {
        let config = self.config();
        if severity < config.threshold {
            return;
        }
        let line = format_line(severity, message, self.color);
        if severity.is_above_info() && config.route_to_stderr {
            self.writer.diagnostic(&line);
        } else {
            self.writer.standard(&line);
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(Severity::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }

    pub fn fatal(&self, message: &str) {
        self.log(Severity::Fatal, message);
    }
}

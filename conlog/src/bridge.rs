use conlog_core::{LogWriter, Severity};
use log::{LevelFilter, Log, Metadata, Record};

use crate::sink::LogSink;

/// Forwards `log` facade records to a sink.
struct SinkLogger<W: 'static> {
    sink: &'static LogSink<W>,
}

impl<W: LogWriter + 'static> Log for SinkLogger<W> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.sink.enabled(Severity::from(metadata.level()))
    }

    fn log(&self, record: &Record) {
        self.sink.log(Severity::from(record.level()), &record.args().to_string());
    }

    // Lines are flushed as they are written.
    fn flush(&self) {}
}

/// Installs `sink` as the global `log` logger.
///
/// The facade's max level is left fully open and the sink's threshold does the
/// filtering, so later calls to `configure` apply to facade records as well.
/// Returns `false` if a global logger was already set.
pub fn install_log_bridge_for<W: LogWriter + 'static>(sink: &'static LogSink<W>) -> bool {
    if log::set_boxed_logger(Box::new(SinkLogger { sink })).is_err() {
        return false;
    }
    log::set_max_level(LevelFilter::Trace);
    true
}

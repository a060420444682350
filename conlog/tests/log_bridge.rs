use std::sync::LazyLock;

use conlog::{LogCapture, LogSink, Severity, SinkConfig, install_log_bridge_for};

static SINK: LazyLock<LogSink<LogCapture>> = LazyLock::new(|| LogSink::new(LogCapture::new()));

#[test]
fn log_facade_goes_through_sink() {
    assert!(install_log_bridge_for(&*SINK));
    assert!(!install_log_bridge_for(&*SINK));

    log::debug!("filtered {}", 1);
    log::info!("hello {}", "world");
    assert_eq!(SINK.writer().lines().len(), 1);
    assert!(SINK.writer().standard_lines()[0].ends_with(" - INFO - hello world"));

    SINK.configure(
        SinkConfig {
            threshold: Severity::Trace,
            route_to_stderr: true,
        },
        false,
    );
    SINK.writer().clear();
    log::trace!("t");
    log::error!("e");
    assert_eq!(SINK.writer().standard_lines().len(), 1);
    assert!(SINK.writer().standard_lines()[0].ends_with(" - TRACE - t"));
    assert_eq!(SINK.writer().diagnostic_lines().len(), 1);
    assert!(SINK.writer().diagnostic_lines()[0].ends_with(" - ERROR - e"));

    SINK.configure(
        SinkConfig {
            threshold: Severity::Error,
            route_to_stderr: true,
        },
        true,
    );
    SINK.writer().clear();
    log::warn!("below the new threshold");
    log::info!("below the new threshold");
    assert!(SINK.writer().lines().is_empty());
    assert!(!log::logger().enabled(&log::Metadata::builder().level(log::Level::Warn).build()));
}

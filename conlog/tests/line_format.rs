use conlog::{LogCapture, LogSink, Severity, SinkConfig};
use regex::Regex;

#[test]
fn info_line_format() {
    let sink = LogSink::new(LogCapture::new());
    sink.info("hello");
    let lines = sink.writer().standard_lines();
    assert_eq!(lines.len(), 1);
    let re = Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z - INFO - hello$").unwrap();
    assert!(re.is_match(&lines[0]), "unexpected line {:?}", lines[0]);
}

#[test]
fn every_severity_has_a_name() {
    let sink = LogSink::with_config(
        SinkConfig {
            threshold: Severity::Trace,
            route_to_stderr: false,
        },
        LogCapture::new(),
    );
    for severity in Severity::ALL {
        sink.log(severity, "x");
    }
    let re = Regex::new(r"^\S+Z - (TRACE|DEBUG|INFO|WARN|ERROR|FATAL) - x$").unwrap();
    let names: Vec<String> = sink
        .writer()
        .standard_lines()
        .iter()
        .map(|line| re.captures(line).unwrap()[1].to_string())
        .collect();
    assert_eq!(names, ["TRACE", "DEBUG", "INFO", "WARN", "ERROR", "FATAL"]);
}

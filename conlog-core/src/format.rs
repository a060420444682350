use chrono::{DateTime, Utc};

use crate::severity::Severity;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Formats a line stamped with the current UTC time.
pub fn format_line(severity: Severity, message: &str, color: bool) -> String {
    format_line_at(Utc::now(), severity, message, color)
}

/// Formats `<timestamp> - <SEVERITY> - <message>` for the given instant.
///
/// With `color` the severity name is wrapped in ANSI escapes, which breaks the
/// plain line format. Leave it off when the output is parsed.
pub fn format_line_at(time: DateTime<Utc>, severity: Severity, message: &str, color: bool) -> String {
    let time = time.format(TIMESTAMP_FORMAT);
    if color {
        format!("{time} - {} - {message}", severity.colored_name())
    } else {
        format!("{time} - {severity} - {message}")
    }
}

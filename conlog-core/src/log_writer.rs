use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};

/// Destination of formatted log lines: a standard channel and a diagnostic one.
///
/// Writers never report failures; a line that cannot be written is lost.
pub trait LogWriter: Send + Sync {
    fn standard(&self, line: &str);
    fn diagnostic(&self, line: &str);
}

fn write_line<W: Write>(mut out: W, line: &str) {
    // Console write failures are not surfaced to callers.
    let _ = writeln!(out, "{line}");
    let _ = out.flush();
}

/// Writes to the process's stdout and stderr.
#[derive(Default, Debug, Clone, Copy)]
pub struct LogConsole;

impl LogWriter for LogConsole {
    fn standard(&self, line: &str) {
        write_line(io::stdout().lock(), line);
    }

    fn diagnostic(&self, line: &str) {
        write_line(io::stderr().lock(), line);
    }
}

/// Channel a captured line was written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Standard,
    Diagnostic,
}

/// In-memory writer keeping every line with the channel it went to.
/// Clones share the same buffer.
#[derive(Default, Debug, Clone)]
pub struct LogCapture {
    lines: Arc<Mutex<Vec<(Channel, String)>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, channel: Channel, line: &str) {
        let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        lines.push((channel, line.to_string()));
    }

    /// All captured lines in write order.
    pub fn lines(&self) -> Vec<(Channel, String)> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn standard_lines(&self) -> Vec<String> {
        self.channel_lines(Channel::Standard)
    }

    pub fn diagnostic_lines(&self) -> Vec<String> {
        self.channel_lines(Channel::Diagnostic)
    }

    fn channel_lines(&self, channel: Channel) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|(c, line)| (c == channel).then_some(line))
            .collect()
    }

    pub fn clear(&self) {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl LogWriter for LogCapture {
    fn standard(&self, line: &str) {
        self.push(Channel::Standard, line);
    }

    fn diagnostic(&self, line: &str) {
        self.push(Channel::Diagnostic, line);
    }
}

#[test]
fn test_log_capture() {
    let capture = LogCapture::new();
    let shared = capture.clone();
    capture.standard("Hello, world!");
    shared.diagnostic("rust is awesome !");
    capture.standard("test");
    assert_eq!(
        capture.lines(),
        vec![
            (Channel::Standard, "Hello, world!".to_string()),
            (Channel::Diagnostic, "rust is awesome !".to_string()),
            (Channel::Standard, "test".to_string()),
        ]
    );
    assert_eq!(shared.standard_lines(), ["Hello, world!", "test"]);
    assert_eq!(shared.diagnostic_lines(), ["rust is awesome !"]);
    shared.clear();
    assert!(capture.lines().is_empty());
}

#[test]
fn test_write_line_appends_newline() {
    let mut buf = Vec::new();
    write_line(&mut buf, "lorem ipsum");
    write_line(&mut buf, "LOREM IPSUM");
    assert_eq!(String::from_utf8(buf).unwrap(), "lorem ipsum\nLOREM IPSUM\n");
}

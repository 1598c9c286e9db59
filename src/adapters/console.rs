use crate::domain::ports::LineSink;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn emit_line(&mut self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", line) {
            tracing::warn!("Failed to write fixture line to stdout: {}", e);
        }
    }
}

/// Keeps every emitted line in memory, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedLines {
    lines: Vec<String>,
}

impl CapturedLines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl LineSink for CapturedLines {
    fn emit_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

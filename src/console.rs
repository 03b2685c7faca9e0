//! Console fallback output.
//!
//! Used whenever no backend is configured, and for the startup warnings.

use std::io::Write;
use std::sync::Mutex;

/// Which local stream a line goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Destination for plain console lines.
pub trait ConsoleSink: Send + Sync {
    /// Write `line` followed by a newline.
    fn write_line(&self, stream: Stream, line: &str);
}

/// Writes to the process stdout and stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl ConsoleSink for StdConsole {
    fn write_line(&self, stream: Stream, line: &str) {
        // Console write failures have nowhere to be reported.
        let _ = match stream {
            Stream::Stdout => writeln!(std::io::stdout().lock(), "{}", line),
            Stream::Stderr => writeln!(std::io::stderr().lock(), "{}", line),
        };
    }
}

/// In-memory console that records everything written to it.
///
/// Lets hosts and tests observe fallback output without touching the real
/// process streams.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: Mutex<Vec<(Stream, String)>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written to `stream`, each line newline-terminated.
    pub fn contents(&self, stream: Stream) -> String {
        let lines = self.lines.lock().expect("console mutex poisoned");
        lines
            .iter()
            .filter(|(s, _)| *s == stream)
            .map(|(_, line)| format!("{}\n", line))
            .collect()
    }

    pub fn stdout(&self) -> String {
        self.contents(Stream::Stdout)
    }

    pub fn stderr(&self) -> String {
        self.contents(Stream::Stderr)
    }
}

impl ConsoleSink for MemoryConsole {
    fn write_line(&self, stream: Stream, line: &str) {
        self.lines
            .lock()
            .expect("console mutex poisoned")
            .push((stream, line.to_string()));
    }
}

//! The per-call logger value and its dispatch.

use std::fmt;

use crate::backend::LogEntry;
use crate::console::Stream;
use crate::format::{sprint, sprintln, Operand};
use crate::logger::init::Logging;
use crate::observability::metrics::{self, Destination};
use crate::severity::Severity;

/// Contextualized logger for one call site.
///
/// Cheap to create and copy; it only borrows the backend handle and the
/// execution id.
#[derive(Debug, Clone, Copy)]
pub struct Logger<'a> {
    logging: &'a Logging,
    severity: Severity,
    execution_id: Option<&'a str>,
}

impl<'a> Logger<'a> {
    pub(crate) fn new(logging: &'a Logging, severity: Severity, execution_id: Option<&'a str>) -> Self {
        Self {
            logging,
            severity,
            execution_id: execution_id.filter(|id| !id.is_empty()),
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn execution_id(&self) -> Option<&'a str> {
        self.execution_id
    }

    /// Log the operands in their default formats.
    /// Spaces are added between operands when neither is a string.
    pub fn print(&self, operands: &[&dyn Operand]) {
        self.log(&sprint(operands));
    }

    /// Log the operands in their default formats.
    /// Spaces are always added between operands and a newline is appended.
    pub fn println(&self, operands: &[&dyn Operand]) {
        self.log(&sprintln(operands));
    }

    /// Log according to a format string, e.g. `printf(format_args!("code={}", 42))`.
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        match args.as_str() {
            Some(text) => self.log(text),
            None => self.log(&args.to_string()),
        }
    }

    fn log(&self, text: &str) {
        let text = text.trim_end_matches('\n');

        match &self.logging.backend {
            Some(backend) => {
                let mut entry = LogEntry::new(self.severity, text);
                if let Some(id) = self.execution_id {
                    entry = entry.with_execution_id(id);
                }
                backend.log(entry);
                metrics::record_entry(self.severity, Destination::Backend);
            }
            None => {
                let stream = if self.severity.is_error_or_above() {
                    Stream::Stderr
                } else {
                    Stream::Stdout
                };
                self.logging.console.write_line(stream, text);
                metrics::record_entry(self.severity, Destination::Console);
            }
        }
    }
}

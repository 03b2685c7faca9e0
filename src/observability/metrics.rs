//! Metrics collection.
//!
//! # Metrics
//! - `function_logging_entries_total` (counter): entries by severity and
//!   destination (`backend` or `console`)
//! - `function_logging_write_failures_total` (counter): failed remote writes
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; without an installed recorder
//!   every call is a no-op
//! - Label values are static strings

use crate::severity::Severity;

/// Where an entry ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Backend,
    Console,
}

impl Destination {
    pub fn as_str(self) -> &'static str {
        match self {
            Destination::Backend => "backend",
            Destination::Console => "console",
        }
    }
}

/// Count one dispatched entry.
pub fn record_entry(severity: Severity, destination: Destination) {
    metrics::counter!(
        "function_logging_entries_total",
        "severity" => severity.as_str(),
        "destination" => destination.as_str()
    )
    .increment(1);
}

/// Count one failed remote write.
pub fn record_write_failure() {
    metrics::counter!("function_logging_write_failures_total").increment(1);
}

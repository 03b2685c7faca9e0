//! Log severity levels.
//!
//! Levels mirror the Cloud Logging `LogSeverity` enum. The numeric values are
//! the ones the API uses, so ordering by value orders by severity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordinal log level, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// No assigned severity level.
    Default = 0,
    /// Debug or trace information.
    Debug = 100,
    /// Routine information, such as ongoing status or performance.
    Info = 200,
    /// Normal but significant events, such as start up, shut down, or configuration.
    Notice = 300,
    /// Events that might cause problems.
    Warning = 400,
    /// Events that are likely to cause problems.
    Error = 500,
    /// Events that cause more severe problems or brief outages.
    Critical = 600,
    /// A person must take an action immediately.
    Alert = 700,
    /// One or more systems are unusable.
    Emergency = 800,
}

impl Severity {
    /// All levels in ascending order.
    pub const ALL: [Severity; 9] = [
        Severity::Default,
        Severity::Debug,
        Severity::Info,
        Severity::Notice,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
        Severity::Alert,
        Severity::Emergency,
    ];

    /// Wire name used by the logging API.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Default => "DEFAULT",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Notice => "NOTICE",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
            Severity::Alert => "ALERT",
            Severity::Emergency => "EMERGENCY",
        }
    }

    /// Numeric value used by the logging API.
    pub fn value(self) -> u16 {
        self as u16
    }

    /// Whether console output for this level goes to stderr.
    pub fn is_error_or_above(self) -> bool {
        self >= Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown severity name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity: {0}")]
pub struct ParseSeverityError(String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseSeverityError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_follows_value() {
        for pair in Severity::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].value() < pair[1].value());
        }
        assert_eq!(Severity::Emergency.value(), 800);
    }

    #[test]
    fn test_error_threshold() {
        assert!(!Severity::Warning.is_error_or_above());
        assert!(Severity::Error.is_error_or_above());
        assert!(Severity::Emergency.is_error_or_above());
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("notice".parse::<Severity>(), Ok(Severity::Notice));
        assert_eq!("CRITICAL".parse::<Severity>(), Ok(Severity::Critical));
        assert!("verbose".parse::<Severity>().is_err());
    }

    #[test]
    fn test_serializes_as_api_name() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"WARNING\"");
    }
}

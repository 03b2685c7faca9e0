//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Logging dispatch and backend worker produce:
//!     → metrics.rs (entry and failure counters)
//!     → tracing events (warnings, debug diagnostics)
//!
//! Binaries install:
//!     → logging.rs (tracing subscriber, RUST_LOG filter)
//! ```

pub mod logging;
pub mod metrics;

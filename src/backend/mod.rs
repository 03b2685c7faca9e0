//! Remote logging backend.
//!
//! # Data Flow
//! ```text
//! Logger::log
//!     → CloudLogger::log (queue, non-blocking)
//!     → worker.rs (one entries:write per entry, in order)
//!     → client.rs (bearer token from auth.rs, POST)
//!     → Cloud Logging API
//!
//! Logging::flush
//!     → CloudLogger::flush (queued marker)
//!     → worker replies once earlier entries are done
//! ```
//!
//! # Design Decisions
//! - No batching and no retries: a failed write is counted and reported by
//!   the next flush
//! - Credentials are resolved lazily so client construction never blocks

pub mod auth;
pub mod client;
pub mod entry;
pub mod types;
pub mod worker;

pub use client::CloudLoggingClient;
pub use entry::{LogEntry, MonitoredResource, EXECUTION_ID_LABEL};
pub use types::{BackendError, BackendResult, FlushError};
pub use worker::CloudLogger;

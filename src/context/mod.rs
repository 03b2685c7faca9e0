//! Execution context subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP request
//!     → request.rs (Function-Execution-Id header)
//! Background event envelope
//!     → metadata.rs (platform event metadata)
//!     → execution.rs (Context: typed values, id precedence)
//!     → Logging::<severity>(Some(&ctx))
//! ```
//!
//! # Design Decisions
//! - Platform metadata is more authoritative than the header
//! - The header id is stored under a private key type
//! - Derivation is pure and never fails

pub mod execution;
pub mod metadata;
pub mod request;

pub use execution::Context;
pub use metadata::{for_event, EventResource, Metadata};
pub use request::{for_request, from_parts, EXECUTION_ID_HEADER};

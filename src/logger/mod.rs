//! Contextual logging.
//!
//! # Data Flow
//! ```text
//! startup
//!     → init.rs (Logging: env config → backend or console-only)
//! per request
//!     → factory.rs (Logging::info(Some(&ctx)) etc.)
//!     → value.rs (Logger: format → trim → dispatch)
//!     → {CloudLogger queue, or stdout/stderr}
//! ```
//!
//! # Design Decisions
//! - No global state: the `Logging` handle is passed explicitly
//! - Console fallback is an ordinary branch, not an error path
//! - Log calls never return errors; only `flush` does

pub mod factory;
pub mod init;
pub mod value;

pub use init::{Logging, INIT_FAILURE_PREFIX};
pub use value::Logger;

//! Example function hosting.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, tracing layer)
//!     → Context extractor (Function-Execution-Id header)
//!     → handlers.rs (log through the shared Logging handle)
//!     → Send response
//! ```

pub mod handlers;
pub mod server;

pub use server::{shutdown_signal, FunctionServer};

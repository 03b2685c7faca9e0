//! Example Cloud Function server.
//!
//! # Architecture Overview
//!
//! ```text
//!   Request ──▶ axum router ──▶ Context (Function-Execution-Id)
//!                                   │
//!                                   ▼
//!                        Logging::info / ::error ...
//!                                   │
//!                    ┌──────────────┴──────────────┐
//!                    ▼                             ▼
//!           Cloud Logging writer          stdout / stderr
//!         (GCP_PROJECT, FUNCTION_NAME,   (configuration missing)
//!          FUNCTION_REGION set)
//! ```
//!
//! Buffered entries are flushed on shutdown; a failed flush exits non-zero.

use std::sync::Arc;
use tokio::net::TcpListener;

use function_logging::http::{shutdown_signal, FunctionServer};
use function_logging::observability::logging::{init_tracing, DEFAULT_FILTER};
use function_logging::Logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(DEFAULT_FILTER);

    tracing::info!("function-logging v{} starting", env!("CARGO_PKG_VERSION"));

    let logging = Arc::new(Logging::init());

    let port: u16 = match std::env::var("PORT") {
        Ok(raw) => raw.parse()?,
        Err(_) => 8080,
    };
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;

    let server = FunctionServer::new(logging.clone());
    server.run(listener, shutdown_signal()).await?;

    if let Err(e) = logging.flush().await {
        tracing::error!(error = %e, "Failed to flush logs");
        return Err(e.into());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

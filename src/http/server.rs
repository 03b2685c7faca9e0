//! HTTP server hosting the example function.
//!
//! # Responsibilities
//! - Create the Axum Router with the function handlers
//! - Wire up request tracing
//! - Serve until the shutdown future resolves

use axum::{
    routing::{get, post},
    Router,
};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::http::handlers::{event_function, hello_function};
use crate::logger::Logging;

/// Server for the example functions.
pub struct FunctionServer {
    router: Router,
}

impl FunctionServer {
    /// Create a server whose handlers log through `logging`.
    pub fn new(logging: Arc<Logging>) -> Self {
        Self {
            router: Self::build_router(logging),
        }
    }

    fn build_router(logging: Arc<Logging>) -> Router {
        Router::new()
            .route("/", get(hello_function))
            .route("/event", post(event_function))
            .with_state(logging)
            .layer(TraceLayer::new_for_http())
    }

    /// The router, for embedding or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve on `listener` until `shutdown` resolves.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Function server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Function server stopped");
        Ok(())
    }
}

/// Resolves on Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        return;
    }
    tracing::info!("Shutdown signal received");
}

//! Diagnostics for the crate itself.
//!
//! # Design Decisions
//! - Uses tracing for structured diagnostics, never for user log entries
//! - Filter comes from `RUST_LOG`, with a per-binary default

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "function_logging=info,tower_http=info";

/// Install the global tracing subscriber.
///
/// Does nothing if a subscriber is already installed.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

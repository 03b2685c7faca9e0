//! Contextual logging for Cloud Functions.
//!
//! Adds log levels and execution ids to function logs. Entries go to Cloud
//! Logging when the function environment is configured, and to
//! stdout/stderr otherwise.
//!
//! ```no_run
//! use std::sync::Arc;
//! use axum::{extract::State, routing::get, Router};
//! use function_logging::{Context, Logging};
//!
//! async fn hello(State(logging): State<Arc<Logging>>, ctx: Context) -> &'static str {
//!     logging.info(Some(&ctx)).println(&[&"Hello logs"]);
//!     logging.error(Some(&ctx)).println(&[&"Hello logs"]);
//!     "ok"
//! }
//!
//! # async fn run() {
//! let logging = Arc::new(Logging::init());
//! let app: Router = Router::new().route("/", get(hello)).with_state(logging.clone());
//! # let _ = app;
//! let _ = logging.flush().await;
//! # }
//! ```

pub mod backend;
pub mod config;
pub mod console;
pub mod context;
pub mod format;
pub mod http;
pub mod logger;
pub mod observability;
pub mod severity;

pub use backend::{BackendError, FlushError, LogEntry, MonitoredResource};
pub use config::{ConfigError, LoggingConfig};
pub use console::{ConsoleSink, MemoryConsole, StdConsole, Stream};
pub use context::{for_event, for_request, Context, Metadata, EXECUTION_ID_HEADER};
pub use format::Operand;
pub use logger::{Logger, Logging};
pub use severity::Severity;

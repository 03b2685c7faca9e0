//! Process-wide backend state.
//!
//! # Responsibilities
//! - Read configuration once at startup
//! - Build the remote client, or degrade to console-only output
//! - Flush buffered entries before exit

use std::sync::Arc;

use crate::backend::{BackendResult, CloudLogger, CloudLoggingClient, FlushError, MonitoredResource};
use crate::config::{self, ConfigError, LoggingConfig};
use crate::console::{ConsoleSink, StdConsole, Stream};

/// Prefix of the startup warning printed when the backend is unavailable.
pub const INIT_FAILURE_PREFIX: &str = "Failed to create logging client:";

/// Backend handle shared by every logger.
///
/// Built exactly once at startup and read-only afterwards. Hand it to
/// request handlers by reference or inside an `Arc`.
pub struct Logging {
    pub(crate) backend: Option<CloudLogger>,
    pub(crate) console: Arc<dyn ConsoleSink>,
}

impl Logging {
    /// Initialize from the process environment, writing to the real console.
    ///
    /// Must be called inside a tokio runtime for the remote backend to start.
    pub fn init() -> Self {
        Self::from_config(config::from_env(), Arc::new(StdConsole))
    }

    /// Initialize from an already loaded configuration.
    ///
    /// A configuration error or a client construction failure prints a
    /// warning to `console`'s error stream and leaves the backend unset.
    pub fn from_config(config: Result<LoggingConfig, ConfigError>, console: Arc<dyn ConsoleSink>) -> Self {
        let backend = match config {
            Ok(config) => match connect(&config) {
                Ok(backend) => {
                    tracing::info!(
                        project_id = %config.project_id,
                        function_name = %config.function_name,
                        region = %config.function_region,
                        log_name = %backend.log_name(),
                        "Remote logging enabled"
                    );
                    Some(backend)
                }
                Err(e) => {
                    warn_degraded(console.as_ref(), &e);
                    None
                }
            },
            Err(e) => {
                warn_degraded(console.as_ref(), &e);
                None
            }
        };

        Self { backend, console }
    }

    /// Logging that only ever writes to `console`.
    pub fn console_only(console: Arc<dyn ConsoleSink>) -> Self {
        Self {
            backend: None,
            console,
        }
    }

    /// Whether entries are sent to the remote backend.
    pub fn is_remote(&self) -> bool {
        self.backend.is_some()
    }

    /// Block until all buffered entries have been transmitted.
    ///
    /// Succeeds immediately when no backend is configured.
    pub async fn flush(&self) -> Result<(), FlushError> {
        match &self.backend {
            Some(backend) => backend.flush().await,
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for Logging {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logging")
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}

fn connect(config: &LoggingConfig) -> BackendResult<CloudLogger> {
    let client = CloudLoggingClient::new(&config.project_id, &config.backend)?;
    let resource = MonitoredResource::cloud_function(&config.function_name, &config.function_region);
    client.logger(&config.backend.log_id, resource)
}

fn warn_degraded(console: &dyn ConsoleSink, error: &dyn std::error::Error) {
    tracing::warn!(error = %error, "Remote logging unavailable, using console output");
    console.write_line(Stream::Stderr, &format!("{} {}", INIT_FAILURE_PREFIX, error));
}

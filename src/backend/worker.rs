//! Background writer for a bound log.
//!
//! Entries are queued without blocking the caller and written one request
//! at a time, in order. A flush is queued behind them, so it completes only
//! once everything logged before it has been attempted.

use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

use crate::backend::client::CloudLoggingClient;
use crate::backend::entry::{LogEntry, MonitoredResource};
use crate::backend::types::{BackendError, BackendResult, FlushError};
use crate::observability::metrics;

enum Command {
    Write(LogEntry),
    Flush(oneshot::Sender<Result<(), FlushError>>),
}

/// Handle to a log bound to a fixed resource.
#[derive(Debug, Clone)]
pub struct CloudLogger {
    tx: mpsc::UnboundedSender<Command>,
    log_name: Arc<str>,
}

impl CloudLogger {
    pub(crate) fn spawn(
        client: CloudLoggingClient,
        log_name: String,
        resource: MonitoredResource,
    ) -> BackendResult<Self> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| BackendError::NoRuntime)?;
        let (tx, rx) = mpsc::unbounded_channel();
        let log_name: Arc<str> = log_name.into();

        let worker = Worker {
            client,
            log_name: log_name.clone(),
            resource,
            rx,
            failures: 0,
            last_error: None,
        };
        runtime.spawn(worker.run());

        Ok(Self { tx, log_name })
    }

    pub fn log_name(&self) -> &str {
        &self.log_name
    }

    /// Queue an entry. Never blocks and never fails the caller.
    pub fn log(&self, entry: LogEntry) {
        if self.tx.send(Command::Write(entry)).is_err() {
            tracing::debug!(log_name = %self.log_name, "Log writer gone, entry dropped");
        }
    }

    /// Wait until every entry queued so far has been written.
    ///
    /// Reports failures seen since the previous flush.
    pub async fn flush(&self) -> Result<(), FlushError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(Command::Flush(reply_tx))
            .map_err(|_| FlushError::Closed)?;
        reply_rx.await.map_err(|_| FlushError::Closed)?
    }
}

struct Worker {
    client: CloudLoggingClient,
    log_name: Arc<str>,
    resource: MonitoredResource,
    rx: mpsc::UnboundedReceiver<Command>,
    failures: u64,
    last_error: Option<String>,
}

impl Worker {
    async fn run(mut self) {
        while let Some(command) = self.rx.recv().await {
            match command {
                Command::Write(entry) => self.write(entry).await,
                Command::Flush(reply) => {
                    let _ = reply.send(self.take_errors());
                }
            }
        }
        tracing::debug!(log_name = %self.log_name, "Log writer stopped");
    }

    async fn write(&mut self, entry: LogEntry) {
        let entries = [entry];
        if let Err(e) = self
            .client
            .write_entries(&self.log_name, &self.resource, &entries)
            .await
        {
            tracing::warn!(log_name = %self.log_name, error = %e, "Failed to write log entry");
            metrics::record_write_failure();
            self.failures += 1;
            self.last_error = Some(e.to_string());
        }
    }

    fn take_errors(&mut self) -> Result<(), FlushError> {
        let count = std::mem::take(&mut self.failures);
        match self.last_error.take() {
            Some(last) if count > 0 => Err(FlushError::Failed { count, last }),
            _ => Ok(()),
        }
    }
}

//! Per-invocation execution context.

use axum::http::Extensions;

use crate::context::metadata::Metadata;

/// Values derived for one function invocation.
///
/// Values are keyed by type, so a private key type cannot collide with
/// anything a caller stores.
#[derive(Debug, Clone, Default)]
pub struct Context {
    values: Extensions,
}

/// Key for the id taken from the execution-id header.
#[derive(Debug, Clone)]
struct HeaderExecutionId(String);

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a context that also carries `value`.
    pub fn with_value<T>(mut self, value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        self.values.insert(value);
        self
    }

    /// Look up a value by type.
    pub fn value<T>(&self) -> Option<&T>
    where
        T: Send + Sync + 'static,
    {
        self.values.get::<T>()
    }

    /// Attach platform event metadata.
    pub fn with_metadata(self, metadata: Metadata) -> Self {
        self.with_value(metadata)
    }

    /// Platform event metadata, if the invocation came with any.
    pub fn metadata(&self) -> Option<&Metadata> {
        self.value::<Metadata>()
    }

    pub(crate) fn with_header_execution_id(self, id: impl Into<String>) -> Self {
        self.with_value(HeaderExecutionId(id.into()))
    }

    /// Execution id for loggers built from this context.
    ///
    /// Platform metadata wins over the header value. An empty id counts as
    /// no id.
    pub fn execution_id(&self) -> Option<&str> {
        let id = match self.metadata() {
            Some(metadata) => metadata.event_id.as_str(),
            None => self.value::<HeaderExecutionId>()?.0.as_str(),
        };
        (!id.is_empty()).then_some(id)
    }
}

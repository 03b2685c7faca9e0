//! Execution context derivation for inbound HTTP requests.
//!
//! # Responsibilities
//! - Read the execution id header set by the functions runtime
//! - Keep any context a host layer already attached to the request
//! - Expose the result as an axum extractor

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{Extensions, HeaderMap, Request};

use crate::context::execution::Context;

/// Header carrying the runtime's execution id.
pub const EXECUTION_ID_HEADER: &str = "function-execution-id";

/// Create a logging context for `request`.
pub fn for_request<B>(request: &Request<B>) -> Context {
    derive_context(request.headers(), request.extensions())
}

/// Same as [`for_request`] for already split request parts.
pub fn from_parts(parts: &Parts) -> Context {
    derive_context(&parts.headers, &parts.extensions)
}

fn derive_context(headers: &HeaderMap, extensions: &Extensions) -> Context {
    let ctx = extensions.get::<Context>().cloned().unwrap_or_default();

    match headers
        .get(EXECUTION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|id| !id.is_empty())
    {
        Some(id) => ctx.with_header_execution_id(id),
        None => ctx,
    }
}

impl<S> FromRequestParts<S> for Context
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(from_parts(parts))
    }
}

//! Configuration validation.
//!
//! Semantic checks on top of what serde already enforces. Every problem is
//! reported, not just the first.

use thiserror::Error;
use url::Url;

use crate::config::schema::BackendConfig;

/// A single semantic problem in a backend configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("invalid token URL '{url}': {reason}")]
    InvalidTokenUrl { url: String, reason: String },

    #[error("log_id must not be empty")]
    EmptyLogId,

    #[error("request_timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Validate backend settings.
pub fn validate_backend_config(config: &BackendConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(reason) = check_http_url(&config.endpoint) {
        errors.push(ValidationError::InvalidEndpoint {
            endpoint: config.endpoint.clone(),
            reason,
        });
    }

    // The token URL is irrelevant once a fixed token is configured.
    if config.auth.access_token.is_none() {
        if let Err(reason) = check_http_url(&config.auth.token_url) {
            errors.push(ValidationError::InvalidTokenUrl {
                url: config.auth.token_url.clone(),
                reason,
            });
        }
    }

    if config.log_id.trim().is_empty() {
        errors.push(ValidationError::EmptyLogId);
    }

    if config.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_http_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported scheme '{}'", other)),
    }
}

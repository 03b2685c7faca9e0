//! Bearer tokens for the logging API.

use serde::Deserialize;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::backend::types::{BackendError, BackendResult};
use crate::config::AuthConfig;

/// Tokens are refreshed this long before they expire.
const REFRESH_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: u64,
}

/// A token and the instant it should be replaced.
#[derive(Debug)]
pub struct CachedToken {
    value: String,
    refresh_at: Instant,
}

/// Source of access tokens.
#[derive(Debug)]
pub enum TokenSource {
    /// A fixed token.
    Static(String),
    /// The instance metadata server.
    MetadataServer {
        url: String,
        cached: Mutex<Option<CachedToken>>,
    },
}

impl TokenSource {
    pub fn from_config(config: &AuthConfig) -> Self {
        match &config.access_token {
            Some(token) => TokenSource::Static(token.clone()),
            None => TokenSource::MetadataServer {
                url: config.token_url.clone(),
                cached: Mutex::new(None),
            },
        }
    }

    /// Current token, fetching a fresh one when the cache is stale.
    pub async fn token(&self, http: &reqwest::Client) -> BackendResult<String> {
        match self {
            TokenSource::Static(token) => Ok(token.clone()),
            TokenSource::MetadataServer { url, cached } => {
                let mut cached = cached.lock().await;
                if let Some(token) = cached.as_ref() {
                    if Instant::now() < token.refresh_at {
                        return Ok(token.value.clone());
                    }
                }

                let fresh = fetch_token(http, url).await?;
                let value = fresh.value.clone();
                *cached = Some(fresh);
                Ok(value)
            }
        }
    }
}

async fn fetch_token(http: &reqwest::Client, url: &str) -> BackendResult<CachedToken> {
    let resp = http
        .get(url)
        .header("Metadata-Flavor", "Google")
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(BackendError::Auth(format!(
            "token endpoint returned status {}: {}",
            status, body
        )));
    }

    let token: TokenResponse = resp
        .json()
        .await
        .map_err(|e| BackendError::Auth(format!("malformed token response: {}", e)))?;

    let lifetime = Duration::from_secs(token.expires_in).saturating_sub(REFRESH_MARGIN);
    tracing::debug!(expires_in = token.expires_in, "Fetched access token");

    Ok(CachedToken {
        value: token.access_token,
        refresh_at: Instant::now() + lifetime,
    })
}

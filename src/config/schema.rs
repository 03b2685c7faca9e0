//! Configuration schema definitions.
//!
//! Function identity comes from the environment. Backend settings have
//! defaults and can be overridden from a TOML file.

use serde::{Deserialize, Serialize};

/// Default Cloud Logging API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://logging.googleapis.com";

/// Log all Cloud Functions entries are written under.
pub const DEFAULT_LOG_ID: &str = "cloudfunctions.googleapis.com/cloud-functions";

/// Metadata server endpoint handing out the default service account token.
pub const DEFAULT_TOKEN_URL: &str =
    "http://metadata.google.internal/computeMetadata/v1/instance/service-accounts/default/token";

/// Complete configuration for the remote backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Project the entries are written to.
    pub project_id: String,

    /// Resource label `function_name`.
    pub function_name: String,

    /// Resource label `region`.
    pub function_region: String,

    /// Transport settings.
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Cloud Logging transport settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the logging API.
    pub endpoint: String,

    /// Log id, URL-encoded into the entry's `logName`.
    pub log_id: String,

    /// Timeout for a single write request in seconds.
    pub request_timeout_secs: u64,

    /// Credentials.
    pub auth: AuthConfig,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            log_id: DEFAULT_LOG_ID.to_string(),
            request_timeout_secs: 10,
            auth: AuthConfig::default(),
        }
    }
}

/// How bearer tokens are obtained.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Metadata server token URL.
    pub token_url: String,

    /// Fixed token. When set, the metadata server is never contacted.
    pub access_token: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_url: DEFAULT_TOKEN_URL.to_string(),
            access_token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_defaults() {
        let config = BackendConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.log_id, DEFAULT_LOG_ID);
        assert_eq!(config.request_timeout_secs, 10);
        assert!(config.auth.access_token.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: BackendConfig = toml::from_str(
            r#"
            endpoint = "http://127.0.0.1:9000"

            [auth]
            access_token = "abc"
            "#,
        )
        .unwrap();

        assert_eq!(config.endpoint, "http://127.0.0.1:9000");
        assert_eq!(config.log_id, DEFAULT_LOG_ID);
        assert_eq!(config.auth.token_url, DEFAULT_TOKEN_URL);
        assert_eq!(config.auth.access_token.as_deref(), Some("abc"));
    }
}

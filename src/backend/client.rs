//! Cloud Logging API client.
//!
//! # Responsibilities
//! - Hold the HTTP client, project and credentials
//! - Write entries with `POST /v2/entries:write`
//! - Hand out [`CloudLogger`]s bound to a log and resource

use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::backend::auth::TokenSource;
use crate::backend::entry::{log_name, LogEntry, MonitoredResource, WriteEntriesRequest};
use crate::backend::types::{BackendError, BackendResult};
use crate::backend::worker::CloudLogger;
use crate::config::BackendConfig;

/// Client scoped to one project.
#[derive(Clone)]
pub struct CloudLoggingClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    project_id: String,
    write_url: String,
    auth: TokenSource,
}

impl CloudLoggingClient {
    /// Create a client for `project_id`.
    ///
    /// No request is made here; credentials are resolved on first write.
    pub fn new(project_id: &str, config: &BackendConfig) -> BackendResult<Self> {
        if project_id.is_empty() {
            return Err(BackendError::EmptyProject);
        }

        let endpoint = Url::parse(&config.endpoint).map_err(|e| BackendError::InvalidEndpoint {
            endpoint: config.endpoint.clone(),
            reason: e.to_string(),
        })?;
        let write_url = format!("{}/v2/entries:write", endpoint.as_str().trim_end_matches('/'));

        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.request_timeout_secs));
        // Local emulators must not be routed through a system proxy.
        if is_loopback(&endpoint) {
            builder = builder.no_proxy();
        }
        let http = builder.build()?;

        tracing::debug!(project_id, write_url = %write_url, "Cloud Logging client created");

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                project_id: project_id.to_string(),
                write_url,
                auth: TokenSource::from_config(&config.auth),
            }),
        })
    }

    pub fn project_id(&self) -> &str {
        &self.inner.project_id
    }

    /// Bind a logger to `log_id` and `resource`.
    ///
    /// Spawns the background writer, so this must run inside a tokio runtime.
    pub fn logger(&self, log_id: &str, resource: MonitoredResource) -> BackendResult<CloudLogger> {
        let log_name = log_name(&self.inner.project_id, log_id);
        CloudLogger::spawn(self.clone(), log_name, resource)
    }

    /// Write `entries` in a single request.
    pub async fn write_entries(
        &self,
        log_name: &str,
        resource: &MonitoredResource,
        entries: &[LogEntry],
    ) -> BackendResult<()> {
        let token = self.inner.auth.token(&self.inner.http).await?;
        let body = WriteEntriesRequest {
            log_name,
            resource,
            entries,
        };

        let resp = self
            .inner
            .http
            .post(&self.inner.write_url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(url::Host::Domain(domain)) => domain == "localhost",
        Some(url::Host::Ipv4(ip)) => ip.is_loopback(),
        Some(url::Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}

impl std::fmt::Debug for CloudLoggingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudLoggingClient")
            .field("project_id", &self.inner.project_id)
            .field("write_url", &self.inner.write_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_project() {
        let result = CloudLoggingClient::new("", &BackendConfig::default());
        assert!(matches!(result, Err(BackendError::EmptyProject)));
    }

    #[test]
    fn test_rejects_bad_endpoint() {
        let config = BackendConfig {
            endpoint: "::not a url".into(),
            ..BackendConfig::default()
        };
        let result = CloudLoggingClient::new("p", &config);
        assert!(matches!(result, Err(BackendError::InvalidEndpoint { .. })));
    }

    #[test]
    fn test_write_url() {
        let config = BackendConfig {
            endpoint: "http://127.0.0.1:9999/".into(),
            ..BackendConfig::default()
        };
        let client = CloudLoggingClient::new("p", &config).unwrap();
        assert_eq!(client.inner.write_url, "http://127.0.0.1:9999/v2/entries:write");
        assert_eq!(client.project_id(), "p");
    }

    #[test]
    fn test_loopback_detection() {
        assert!(is_loopback(&Url::parse("http://127.0.0.1:8080").unwrap()));
        assert!(is_loopback(&Url::parse("http://localhost/").unwrap()));
        assert!(is_loopback(&Url::parse("http://[::1]:9000").unwrap()));
        assert!(!is_loopback(&Url::parse("https://logging.googleapis.com").unwrap()));
    }

    #[test]
    fn test_logger_requires_runtime() {
        let client = CloudLoggingClient::new("p", &BackendConfig::default()).unwrap();
        let result = client.logger("log", MonitoredResource::cloud_function("f", "r"));
        assert!(matches!(result, Err(BackendError::NoRuntime)));
    }
}

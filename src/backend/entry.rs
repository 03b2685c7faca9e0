//! Log entries and the `entries:write` request body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::severity::Severity;

/// Label carrying the execution id.
pub const EXECUTION_ID_LABEL: &str = "execution_id";

/// Monitored resource type of every entry.
pub const CLOUD_FUNCTION_RESOURCE: &str = "cloud_function";

/// Resource descriptor attached to every remote entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitoredResource {
    #[serde(rename = "type")]
    pub kind: String,
    pub labels: BTreeMap<String, String>,
}

impl MonitoredResource {
    /// Descriptor for a deployed function.
    pub fn cloud_function(function_name: &str, region: &str) -> Self {
        let labels = BTreeMap::from([
            ("function_name".to_string(), function_name.to_string()),
            ("region".to_string(), region.to_string()),
        ]);
        Self {
            kind: CLOUD_FUNCTION_RESOURCE.to_string(),
            labels,
        }
    }
}

/// A single log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub severity: Severity,

    #[serde(rename = "textPayload")]
    pub payload: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    pub timestamp: DateTime<Utc>,

    pub insert_id: String,
}

impl LogEntry {
    pub fn new(severity: Severity, payload: impl Into<String>) -> Self {
        Self {
            severity,
            payload: payload.into(),
            labels: BTreeMap::new(),
            timestamp: Utc::now(),
            insert_id: Uuid::new_v4().to_string(),
        }
    }

    /// Tag the entry with an execution id. Empty ids add no label.
    pub fn with_execution_id(mut self, id: &str) -> Self {
        if !id.is_empty() {
            self.labels
                .insert(EXECUTION_ID_LABEL.to_string(), id.to_string());
        }
        self
    }

    pub fn execution_id(&self) -> Option<&str> {
        self.labels.get(EXECUTION_ID_LABEL).map(String::as_str)
    }
}

/// Body of `POST /v2/entries:write`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteEntriesRequest<'a> {
    pub log_name: &'a str,
    pub resource: &'a MonitoredResource,
    pub entries: &'a [LogEntry],
}

/// Full resource name of a log: `projects/{project}/logs/{encoded id}`.
pub fn log_name(project_id: &str, log_id: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(log_id.as_bytes()).collect();
    format!("projects/{}/logs/{}", project_id, encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_log_name_encodes_slash() {
        assert_eq!(
            log_name("my-project", "cloudfunctions.googleapis.com/cloud-functions"),
            "projects/my-project/logs/cloudfunctions.googleapis.com%2Fcloud-functions"
        );
    }

    #[test]
    fn test_execution_label() {
        let entry = LogEntry::new(Severity::Info, "hi").with_execution_id("abc");
        assert_eq!(entry.execution_id(), Some("abc"));

        let entry = LogEntry::new(Severity::Info, "hi").with_execution_id("");
        assert!(entry.labels.is_empty());
    }

    #[test]
    fn test_wire_format() {
        let resource = MonitoredResource::cloud_function("hello", "us-central1");
        let entry = LogEntry::new(Severity::Error, "failed").with_execution_id("e-1");
        let entries = [entry];
        let body = WriteEntriesRequest {
            log_name: "projects/p/logs/l",
            resource: &resource,
            entries: &entries,
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["logName"], "projects/p/logs/l");
        assert_eq!(
            value["resource"],
            json!({"type": "cloud_function", "labels": {"function_name": "hello", "region": "us-central1"}})
        );
        assert_eq!(value["entries"][0]["severity"], "ERROR");
        assert_eq!(value["entries"][0]["textPayload"], "failed");
        assert_eq!(value["entries"][0]["labels"]["execution_id"], "e-1");
        assert!(value["entries"][0]["insertId"].is_string());
    }

    #[test]
    fn test_no_labels_field_without_id() {
        let value = serde_json::to_value(LogEntry::new(Severity::Debug, "x")).unwrap();
        assert!(value.get("labels").is_none());
    }
}

//! Request and response types for the telelink REST API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use telelink_core::StartOptions;
use uuid::Uuid;

/// Generic list envelope
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
}

/// One entry of the operation catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub requires_vehicle: bool,
    pub accepts_start_options: bool,
}

/// Input kind of a credential field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "options", rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Secret,
    Options(Vec<String>),
}

/// One field of a credential record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialField {
    pub name: String,
    pub display_name: String,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `POST /v1/execute`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteRequest {
    pub operation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_options: Option<StartOptions>,
    /// Credential record name; the server default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
}

impl ExecuteRequest {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            ..Default::default()
        }
    }

    pub fn vin(mut self, vin: impl Into<String>) -> Self {
        self.vin = Some(vin.into());
        self
    }

    pub fn vehicle_index(mut self, index: i64) -> Self {
        self.vehicle_index = Some(index);
        self
    }

    pub fn start_options(mut self, options: StartOptions) -> Self {
        self.start_options = Some(options);
        self
    }

    pub fn credentials(mut self, name: impl Into<String>) -> Self {
        self.credentials = Some(name.into());
        self
    }
}

/// Result of one executed operation
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExecuteResponse {
    pub invocation_id: Uuid,
    pub operation: String,
    pub items: Vec<Map<String, Value>>,
    pub completed_at: DateTime<Utc>,
}

/// Error body returned by the server
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(default)]
    pub operation: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn execute_request_wire_format() {
        let request = ExecuteRequest::new("startEngine")
            .vehicle_index(1)
            .start_options(StartOptions {
                air_ctrl: Some(true),
                heating_temp: Some(22.0),
                ..Default::default()
            });
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "operation": "startEngine",
                "vehicleIndex": 1,
                "startOptions": {"airCtrl": true, "heatingTemp": 22.0}
            })
        );

        let request = ExecuteRequest::new("lock").vin("KMH1").credentials("work");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"operation": "lock", "vin": "KMH1", "credentials": "work"})
        );
    }

    #[test]
    fn field_kind_from_wire() {
        let kind: FieldKind = serde_json::from_value(json!({"type": "secret"})).unwrap();
        assert_eq!(kind, FieldKind::Secret);

        let kind: FieldKind =
            serde_json::from_value(json!({"type": "options", "options": ["EU", "US"]})).unwrap();
        assert_eq!(kind, FieldKind::Options(vec!["EU".into(), "US".into()]));
    }
}

//! Scripted vehicle

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use telelink_core::{
    Capability, RemoteError, RemoteResult, StartOptions, StatusOptions, Vehicle,
};
use tracing::debug;

/// How a mock vehicle answers one capability
#[derive(Debug, Clone, PartialEq)]
pub enum MockResponse {
    /// Succeed with this payload
    Payload(Value),
    /// Succeed without a payload
    Empty,
    /// Capability does not exist
    Unsupported,
    /// Fail with a transport error carrying this message
    Fail(String),
}

/// One capability invocation observed by a [`MockVehicle`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub capability: Capability,
    pub status_options: Option<StatusOptions>,
    pub start_options: Option<StartOptions>,
}

/// A fleet member with fixed identity and scripted capabilities.
///
/// Capabilities without a script succeed with no payload.
#[derive(Debug, Default)]
pub struct MockVehicle {
    vin: Option<String>,
    config_vin: Option<String>,
    id: Option<String>,
    nickname: Option<String>,
    name: Option<String>,
    responses: HashMap<Capability, MockResponse>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockVehicle {
    pub fn new(vin: impl Into<String>) -> Self {
        Self {
            vin: Some(vin.into()),
            ..Default::default()
        }
    }

    /// A vehicle whose primary VIN accessor yields nothing
    pub fn without_vin() -> Self {
        Self::default()
    }

    pub fn with_config_vin(mut self, vin: impl Into<String>) -> Self {
        self.config_vin = Some(vin.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn respond(mut self, capability: Capability, response: MockResponse) -> Self {
        self.responses.insert(capability, response);
        self
    }

    pub fn with_payload(self, capability: Capability, payload: Value) -> Self {
        self.respond(capability, MockResponse::Payload(payload))
    }

    pub fn unsupported(self, capability: Capability) -> Self {
        self.respond(capability, MockResponse::Unsupported)
    }

    pub fn failing(self, capability: Capability, message: impl Into<String>) -> Self {
        self.respond(capability, MockResponse::Fail(message.into()))
    }

    /// Every call made so far, oldest first
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self, capability: Capability) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| call.capability == capability)
            .count()
    }

    /// Options received by the most recent `start` call
    pub fn last_start_options(&self) -> Option<StartOptions> {
        self.calls
            .lock()
            .iter()
            .rev()
            .find_map(|call| call.start_options.clone())
    }

    fn answer(
        &self,
        capability: Capability,
        status_options: Option<StatusOptions>,
        start_options: Option<StartOptions>,
    ) -> RemoteResult<Option<Value>> {
        let response = self
            .responses
            .get(&capability)
            .cloned()
            .unwrap_or(MockResponse::Empty);

        // Unsupported capabilities are never reached on a real vehicle
        if response == MockResponse::Unsupported {
            return Err(RemoteError::NotSupported(capability.to_string()));
        }

        debug!(vin = ?self.vin, %capability, "Mock vehicle call");
        self.calls.lock().push(RecordedCall {
            capability,
            status_options,
            start_options,
        });

        match response {
            MockResponse::Payload(payload) => Ok(Some(payload)),
            MockResponse::Empty => Ok(None),
            MockResponse::Fail(message) => Err(RemoteError::Transport(message)),
            MockResponse::Unsupported => Err(RemoteError::NotSupported(capability.to_string())),
        }
    }
}

#[async_trait]
impl Vehicle for MockVehicle {
    fn vin(&self) -> Option<&str> {
        self.vin.as_deref()
    }

    fn config_vin(&self) -> Option<&str> {
        self.config_vin.as_deref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    async fn status(&self, options: StatusOptions) -> RemoteResult<Option<Value>> {
        self.answer(Capability::Status, Some(options), None)
    }

    async fn full_status(&self, options: StatusOptions) -> RemoteResult<Option<Value>> {
        self.answer(Capability::FullStatus, Some(options), None)
    }

    async fn location(&self) -> RemoteResult<Option<Value>> {
        self.answer(Capability::Location, None, None)
    }

    async fn odometer(&self) -> RemoteResult<Option<Value>> {
        self.answer(Capability::Odometer, None, None)
    }

    async fn lock(&self) -> RemoteResult<Option<Value>> {
        self.answer(Capability::Lock, None, None)
    }

    async fn unlock(&self) -> RemoteResult<Option<Value>> {
        self.answer(Capability::Unlock, None, None)
    }

    async fn start(&self, options: &StartOptions) -> RemoteResult<Option<Value>> {
        self.answer(Capability::Start, None, Some(options.clone()))
    }

    async fn stop(&self) -> RemoteResult<Option<Value>> {
        self.answer(Capability::Stop, None, None)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn unscripted_capability_is_empty() {
        let vehicle = MockVehicle::new("V1");
        assert_eq!(vehicle.odometer().await, Ok(None));
        assert_eq!(vehicle.call_count(Capability::Odometer), 1);
    }

    #[tokio::test]
    async fn scripted_responses() {
        let vehicle = MockVehicle::new("V1")
            .with_payload(Capability::Location, json!({"lat": 52.5}))
            .unsupported(Capability::Status)
            .failing(Capability::Lock, "PIN required");

        assert_eq!(vehicle.location().await, Ok(Some(json!({"lat": 52.5}))));
        assert_eq!(
            vehicle.status(StatusOptions::detailed()).await,
            Err(RemoteError::NotSupported("status".to_string()))
        );
        assert_eq!(
            vehicle.lock().await,
            Err(RemoteError::Transport("PIN required".to_string()))
        );
        // Unsupported calls never reach the vehicle
        assert_eq!(vehicle.call_count(Capability::Status), 0);
        assert_eq!(vehicle.call_count(Capability::Lock), 1);
    }

    #[tokio::test]
    async fn records_options() {
        let vehicle = MockVehicle::new("V1");
        let options = StartOptions {
            air_ctrl: Some(true),
            heating_temp: Some(21.5),
            ..Default::default()
        };
        vehicle.start(&options).await.unwrap();
        vehicle.full_status(StatusOptions::detailed()).await.unwrap();

        assert_eq!(vehicle.last_start_options(), Some(options));
        let calls = vehicle.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].status_options, Some(StatusOptions::detailed()));
    }
}

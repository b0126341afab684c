//! Fleet fixtures
//!
//! A fleet file lists vehicles with their identity and scripted behaviour:
//!
//! ```toml
//! [[vehicles]]
//! vin = "KMHXX00XXXX000001"
//! nickname = "Daily"
//! unsupported = ["status"]
//!
//! [vehicles.failing]
//! lock = "PIN required"
//!
//! [vehicles.payloads]
//! location = { latitude = 52.52, longitude = 13.40 }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use telelink_core::Capability;
use thiserror::Error;

use crate::vehicle::MockVehicle;

/// Errors loading a fleet file
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("Failed to read fleet file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid fleet file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One fleet member as written in a fleet file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VehicleConfig {
    pub vin: Option<String>,
    pub config_vin: Option<String>,
    pub id: Option<String>,
    pub nickname: Option<String>,
    pub name: Option<String>,
    /// Capabilities the vehicle does not offer
    #[serde(default)]
    pub unsupported: Vec<Capability>,
    /// Capabilities that fail, with the remote message
    #[serde(default)]
    pub failing: HashMap<Capability, String>,
    /// Capabilities that answer with a payload
    #[serde(default)]
    pub payloads: HashMap<Capability, serde_json::Value>,
}

impl VehicleConfig {
    pub fn into_vehicle(self) -> MockVehicle {
        let mut vehicle = match self.vin {
            Some(vin) => MockVehicle::new(vin),
            None => MockVehicle::without_vin(),
        };
        if let Some(vin) = self.config_vin {
            vehicle = vehicle.with_config_vin(vin);
        }
        if let Some(id) = self.id {
            vehicle = vehicle.with_id(id);
        }
        if let Some(nickname) = self.nickname {
            vehicle = vehicle.with_nickname(nickname);
        }
        if let Some(name) = self.name {
            vehicle = vehicle.with_name(name);
        }
        for (capability, payload) in self.payloads {
            vehicle = vehicle.with_payload(capability, payload);
        }
        for (capability, message) in self.failing {
            vehicle = vehicle.failing(capability, message);
        }
        for capability in self.unsupported {
            vehicle = vehicle.unsupported(capability);
        }
        vehicle
    }
}

/// A whole fleet file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FleetConfig {
    #[serde(default)]
    pub vehicles: Vec<VehicleConfig>,
}

impl FleetConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FleetError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| FleetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, FleetError> {
        Ok(toml::from_str(content)?)
    }

    /// Two-vehicle fleet used when no fleet file is configured.
    ///
    /// The second vehicle only reports its VIN in the configuration block and
    /// has no detailed status call.
    pub fn demo() -> Self {
        let location = serde_json::json!({
            "latitude": 52.5200,
            "longitude": 13.4050,
            "altitude": 34,
            "speed": {"value": 0, "unit": 1},
            "heading": 90
        });
        let status = serde_json::json!({
            "doorLock": true,
            "engine": false,
            "airCtrlOn": false,
            "evStatus": {"batteryStatus": 78}
        });

        Self {
            vehicles: vec![
                VehicleConfig {
                    vin: Some("KMHDEMO0000000001".to_string()),
                    id: Some("demo-1".to_string()),
                    nickname: Some("Daily".to_string()),
                    name: Some("IONIQ 5".to_string()),
                    payloads: HashMap::from([
                        (Capability::Status, status),
                        (Capability::Location, location),
                        (
                            Capability::Odometer,
                            serde_json::json!({"value": 12873, "unit": 1}),
                        ),
                    ]),
                    ..Default::default()
                },
                VehicleConfig {
                    config_vin: Some("KNADEMO0000000002".to_string()),
                    id: Some("demo-2".to_string()),
                    name: Some("Niro".to_string()),
                    unsupported: vec![Capability::Status],
                    failing: HashMap::from([(
                        Capability::Start,
                        "PIN required".to_string(),
                    )]),
                    ..Default::default()
                },
            ],
        }
    }

    pub fn into_vehicles(self) -> Vec<MockVehicle> {
        self.vehicles
            .into_iter()
            .map(VehicleConfig::into_vehicle)
            .collect()
    }
}

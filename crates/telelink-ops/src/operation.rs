//! Operation catalogue and inbound request shape

use serde::{Deserialize, Serialize};
use telelink_core::{Capability, StartOptions};
use validator::Validate;

use crate::error::{OpError, OpResult};
use crate::normalize::Placeholder;
use crate::selector::VehicleSelector;

/// The closed set of operations the dispatcher handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    ListVehicles,
    GetStatus,
    GetLocation,
    GetOdometer,
    Lock,
    Unlock,
    StartEngine,
    StopEngine,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::ListVehicles,
        Operation::GetStatus,
        Operation::GetLocation,
        Operation::GetOdometer,
        Operation::Lock,
        Operation::Unlock,
        Operation::StartEngine,
        Operation::StopEngine,
    ];

    /// Wire name (`listVehicles`, `getStatus`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::ListVehicles => "listVehicles",
            Operation::GetStatus => "getStatus",
            Operation::GetLocation => "getLocation",
            Operation::GetOdometer => "getOdometer",
            Operation::Lock => "lock",
            Operation::Unlock => "unlock",
            Operation::StartEngine => "startEngine",
            Operation::StopEngine => "stopEngine",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Operation::ListVehicles => "List Vehicles",
            Operation::GetStatus => "Get Vehicle Status",
            Operation::GetLocation => "Get Location",
            Operation::GetOdometer => "Get Odometer",
            Operation::Lock => "Lock",
            Operation::Unlock => "Unlock",
            Operation::StartEngine => "Start Engine/Climate",
            Operation::StopEngine => "Stop Engine/Climate",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Operation::ListVehicles => "Get a list of vehicles",
            Operation::GetStatus => "Fetch current vehicle status",
            Operation::GetLocation => "Fetch current vehicle location",
            Operation::GetOdometer => "Fetch current vehicle odometer",
            Operation::Lock => "Lock the vehicle",
            Operation::Unlock => "Unlock the vehicle",
            Operation::StartEngine => "Start engine or climate with options",
            Operation::StopEngine => "Stop engine or climate",
        }
    }

    /// Whether the operation targets one resolved vehicle
    pub fn requires_vehicle(&self) -> bool {
        !matches!(self, Operation::ListVehicles)
    }

    pub fn accepts_start_options(&self) -> bool {
        matches!(self, Operation::StartEngine)
    }

    /// Capabilities to probe, in precedence order. The first one that
    /// yields a payload wins.
    pub fn probes(&self) -> &'static [Capability] {
        match self {
            Operation::ListVehicles => &[],
            Operation::GetStatus => &[Capability::Status, Capability::FullStatus],
            Operation::GetLocation => &[Capability::Location],
            Operation::GetOdometer => &[Capability::Odometer],
            Operation::Lock => &[Capability::Lock],
            Operation::Unlock => &[Capability::Unlock],
            Operation::StartEngine => &[Capability::Start],
            Operation::StopEngine => &[Capability::Stop],
        }
    }

    /// Whether the operation degrades to its placeholder when none of its
    /// capabilities exist on the vehicle. Otherwise that is an error.
    pub fn tolerates_unavailable(&self) -> bool {
        matches!(self, Operation::GetStatus | Operation::GetLocation)
    }

    /// Record emitted when the remote call produced no payload
    pub fn placeholder(&self) -> Placeholder {
        match self {
            Operation::GetStatus => Placeholder::NoData("status"),
            Operation::GetLocation => Placeholder::NoData("location"),
            Operation::GetOdometer => Placeholder::NoData("odometer"),
            Operation::ListVehicles
            | Operation::Lock
            | Operation::Unlock
            | Operation::StartEngine
            | Operation::StopEngine => Placeholder::Success,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Operation {
    type Err = OpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| OpError::UnknownOperation {
                operation: s.to_string(),
            })
    }
}

/// Per-operation parameters after boundary parsing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationParams {
    pub selector: VehicleSelector,
    /// Only read by `startEngine`
    pub start_options: StartOptions,
}

/// One inbound operation request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRequest {
    pub operation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,
    /// Missing or `null` selects the first vehicle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_options: Option<StartOptions>,
}

impl OperationRequest {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            ..Default::default()
        }
    }

    pub fn with_vin(mut self, vin: impl Into<String>) -> Self {
        self.vin = Some(vin.into());
        self
    }

    pub fn with_index(mut self, index: i64) -> Self {
        self.vehicle_index = Some(index);
        self
    }

    pub fn with_start_options(mut self, options: StartOptions) -> Self {
        self.start_options = Some(options);
        self
    }

    /// Enforce the boundary schema: start option ranges.
    ///
    /// Vehicle index bounds are left to the resolver, which knows the fleet.
    pub fn check(&self) -> OpResult<()> {
        if let Some(options) = &self.start_options {
            options.validate()?;
        }
        Ok(())
    }

    pub fn params(&self) -> OperationParams {
        OperationParams {
            selector: VehicleSelector::new(self.vin.clone(), self.vehicle_index),
            start_options: self.start_options.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_names_round_trip() {
        for op in Operation::ALL {
            assert_eq!(op.as_str().parse::<Operation>(), Ok(op));
            assert_eq!(serde_json::to_value(op).unwrap(), json!(op.as_str()));
        }
    }

    #[test]
    fn unknown_operation() {
        assert_eq!(
            "selfDestruct".parse::<Operation>(),
            Err(OpError::UnknownOperation {
                operation: "selfDestruct".to_string()
            })
        );
        // Wire names are case sensitive
        assert!("GetStatus".parse::<Operation>().is_err());
    }

    #[test]
    fn status_probes_detailed_first() {
        assert_eq!(
            Operation::GetStatus.probes(),
            &[Capability::Status, Capability::FullStatus]
        );
        assert!(Operation::ListVehicles.probes().is_empty());
        assert!(!Operation::ListVehicles.requires_vehicle());
    }

    #[test]
    fn request_from_json() {
        let request: OperationRequest = serde_json::from_value(json!({
            "operation": "startEngine",
            "vin": "",
            "vehicleIndex": 2,
            "startOptions": {"airCtrl": true, "heatingTemp": 22, "igniOnDuration": 10}
        }))
        .unwrap();
        assert!(request.check().is_ok());

        let params = request.params();
        assert_eq!(params.selector, VehicleSelector::new(Some(String::new()), Some(2)));
        assert_eq!(params.start_options.heating_temp, Some(22.0));
    }

    #[test]
    fn request_defaults() {
        let request: OperationRequest =
            serde_json::from_value(json!({"operation": "lock"})).unwrap();
        assert_eq!(request.vehicle_index, None);
        assert_eq!(request.params(), OperationParams::default());

        let request: OperationRequest =
            serde_json::from_value(json!({"operation": "lock", "vehicleIndex": null})).unwrap();
        assert_eq!(request.params().selector, VehicleSelector::by_index(0));
    }

    #[test]
    fn request_rejects_out_of_range_start_options() {
        let request = OperationRequest::new("startEngine").with_start_options(StartOptions {
            heating_temp: Some(40.0),
            ..Default::default()
        });
        assert!(matches!(request.check(), Err(OpError::InvalidRequest(_))));
    }
}

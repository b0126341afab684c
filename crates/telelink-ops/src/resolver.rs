//! Vehicle resolution against an account's fleet

use telelink_core::{Vehicle, VehicleHandle};
use tracing::debug;

use crate::error::{OpError, OpResult};
use crate::selector::{Selection, VehicleSelector};

/// Pick exactly one vehicle from `fleet`.
///
/// VIN matching compares both the primary VIN and the VIN nested in the
/// vehicle configuration: older account/API versions only fill the nested
/// one, and both shapes are accepted on purpose.
pub fn resolve_vehicle(fleet: &[VehicleHandle], selector: &VehicleSelector) -> OpResult<VehicleHandle> {
    if fleet.is_empty() {
        return Err(OpError::NoVehicles);
    }

    match selector.selection() {
        Selection::Vin(vin) => {
            let found = fleet
                .iter()
                .position(|vehicle| matches_vin(vehicle.as_ref(), vin))
                .ok_or_else(|| OpError::VehicleNotFound {
                    vin: vin.to_string(),
                })?;
            debug!(vin, position = found, "Resolved vehicle by VIN");
            Ok(fleet[found].clone())
        }
        Selection::Index(index) => {
            let vehicle = usize::try_from(index)
                .ok()
                .and_then(|i| fleet.get(i))
                .ok_or(OpError::IndexOutOfBounds {
                    index,
                    fleet_size: fleet.len(),
                })?;
            debug!(index, "Resolved vehicle by index");
            Ok(vehicle.clone())
        }
    }
}

fn matches_vin(vehicle: &dyn Vehicle, vin: &str) -> bool {
    vehicle.vin() == Some(vin) || vehicle.config_vin() == Some(vin)
}

//! Result normalization
//!
//! Identity fields are reconciled through a declarative table: each canonical
//! field lists the accessors to try in order and the first one that yields a
//! value wins. Different account/API versions fill different subsets of the
//! accessors; the output record always has the same three keys.

use serde_json::{Map, Value};
use telelink_core::{Vehicle, VehicleIdentity};

/// One output record
pub type OperationResult = Map<String, Value>;

/// A source of an identity value on a vehicle handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityAccessor {
    Vin,
    ConfigVin,
    Id,
    Nickname,
    Name,
}

impl IdentityAccessor {
    pub fn read<'a>(&self, vehicle: &'a dyn Vehicle) -> Option<&'a str> {
        match self {
            IdentityAccessor::Vin => vehicle.vin(),
            IdentityAccessor::ConfigVin => vehicle.config_vin(),
            IdentityAccessor::Id => vehicle.id(),
            IdentityAccessor::Nickname => vehicle.nickname(),
            IdentityAccessor::Name => vehicle.name(),
        }
    }
}

pub const VIN_SOURCES: &[IdentityAccessor] = &[IdentityAccessor::Vin, IdentityAccessor::ConfigVin];
pub const ID_SOURCES: &[IdentityAccessor] = &[IdentityAccessor::Id];
pub const NICKNAME_SOURCES: &[IdentityAccessor] =
    &[IdentityAccessor::Nickname, IdentityAccessor::Name];

/// First accessor in `sources` that yields a value
pub fn first_present(vehicle: &dyn Vehicle, sources: &[IdentityAccessor]) -> Option<String> {
    sources
        .iter()
        .find_map(|accessor| accessor.read(vehicle))
        .map(str::to_string)
}

pub fn identity(vehicle: &dyn Vehicle) -> VehicleIdentity {
    VehicleIdentity {
        vin: first_present(vehicle, VIN_SOURCES),
        id: first_present(vehicle, ID_SOURCES),
        nickname: first_present(vehicle, NICKNAME_SOURCES),
    }
}

pub fn identity_record(vehicle: &dyn Vehicle) -> OperationResult {
    match serde_json::to_value(identity(vehicle)) {
        Ok(Value::Object(record)) => record,
        _ => Map::new(),
    }
}

/// Emit a remote payload as a record.
///
/// Objects pass through verbatim; anything else is wrapped as `{value: ...}`.
pub fn payload_record(payload: Value) -> OperationResult {
    match payload {
        Value::Object(map) => map,
        other => {
            let mut record = Map::new();
            record.insert("value".to_string(), other);
            record
        }
    }
}

/// Stand-in record for an operation whose remote call returned nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `{message: "No <thing> returned"}`
    NoData(&'static str),
    /// `{success: true}`
    Success,
}

impl Placeholder {
    pub fn record(&self) -> OperationResult {
        let mut record = Map::new();
        match self {
            Placeholder::NoData(thing) => {
                record.insert(
                    "message".to_string(),
                    Value::String(format!("No {} returned", thing)),
                );
            }
            Placeholder::Success => {
                record.insert("success".to_string(), Value::Bool(true));
            }
        }
        record
    }
}

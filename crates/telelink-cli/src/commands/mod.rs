//! Command implementations for telelink-cli

pub mod catalogue;
pub mod control;
pub mod read;
pub mod vehicles;

pub use catalogue::{operations, schema};
pub use control::{command, start, StartArgs};
pub use read::read;
pub use vehicles::list;

use telelink_client::ExecuteRequest;

/// Vehicle selection and credential record shared by every vehicle command
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Target {
    pub vin: Option<String>,
    pub index: Option<i64>,
    pub credentials: Option<String>,
}

impl Target {
    /// Build the request for `operation` against this target
    pub fn request(&self, operation: &str) -> ExecuteRequest {
        ExecuteRequest {
            operation: operation.to_string(),
            vin: self.vin.clone(),
            vehicle_index: self.index,
            start_options: None,
            credentials: self.credentials.clone(),
        }
    }

    /// Human-readable description of the selected vehicle
    pub fn describe(&self) -> String {
        match (&self.vin, self.index) {
            (Some(vin), _) if !vin.is_empty() => format!("vehicle {}", vin),
            (_, Some(index)) => format!("vehicle #{}", index),
            _ => "vehicle #0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_target() {
        let target = Target {
            vin: Some("KMH1".to_string()),
            index: None,
            credentials: Some("work".to_string()),
        };
        let request = target.request("lock");
        assert_eq!(request.operation, "lock");
        assert_eq!(request.vin.as_deref(), Some("KMH1"));
        assert_eq!(request.vehicle_index, None);
        assert_eq!(request.credentials.as_deref(), Some("work"));
    }

    #[test]
    fn describe_prefers_vin() {
        let mut target = Target::default();
        assert_eq!(target.describe(), "vehicle #0");

        target.index = Some(2);
        assert_eq!(target.describe(), "vehicle #2");

        target.vin = Some(String::new());
        assert_eq!(target.describe(), "vehicle #2");

        target.vin = Some("KMH1".to_string());
        assert_eq!(target.describe(), "vehicle KMH1");
    }
}

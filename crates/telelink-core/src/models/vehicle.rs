//! Vehicle-level models: capability options and normalized identity

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Options for the status capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusOptions {
    /// Ask the client to parse the raw payload into its typed shape
    pub parsed: bool,
    /// Force a fresh read from the vehicle instead of the cached server copy
    pub refresh: bool,
}

impl StatusOptions {
    /// Parsed, refreshed status (what the dispatcher always requests)
    pub fn detailed() -> Self {
        Self {
            parsed: true,
            refresh: true,
        }
    }
}

/// Options for the start capability.
///
/// Passed to the vehicle unmodified. The numeric ranges are only checked at
/// the request boundary via [`Validate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StartOptions {
    /// Enable climate control
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_ctrl: Option<bool>,
    /// Enable defrost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defrost: Option<bool>,
    /// Target cabin temperature in °C
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 16.0, max = 32.0))]
    pub heating_temp: Option<f64>,
    /// How long to run the engine/climate, in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1.0, max = 30.0))]
    pub igni_on_duration: Option<f64>,
}

impl StartOptions {
    /// Whether no option was set at all
    pub fn is_empty(&self) -> bool {
        self.air_ctrl.is_none()
            && self.defrost.is_none()
            && self.heating_temp.is_none()
            && self.igni_on_duration.is_none()
    }
}

/// Canonical identity record of a fleet member.
///
/// Always serializes all three keys; missing values become `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleIdentity {
    pub vin: Option<String>,
    pub id: Option<String>,
    pub nickname: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn start_options_camel_case() {
        let options: StartOptions =
            serde_json::from_value(json!({"airCtrl": true, "heatingTemp": 22, "igniOnDuration": 10}))
                .unwrap();
        assert_eq!(options.air_ctrl, Some(true));
        assert_eq!(options.defrost, None);
        assert_eq!(options.heating_temp, Some(22.0));
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({"airCtrl": true, "heatingTemp": 22.0, "igniOnDuration": 10.0})
        );
    }

    #[test]
    fn start_options_reject_unknown_keys() {
        let err = serde_json::from_value::<StartOptions>(json!({"heatTemp": 40}));
        assert!(err.is_err());
    }

    #[test]
    fn start_options_ranges() {
        let ok = StartOptions {
            heating_temp: Some(16.0),
            igni_on_duration: Some(30.0),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());

        let too_hot = StartOptions {
            heating_temp: Some(33.0),
            ..Default::default()
        };
        assert!(too_hot.validate().is_err());

        let too_short = StartOptions {
            igni_on_duration: Some(0.0),
            ..Default::default()
        };
        assert!(too_short.validate().is_err());

        assert!(StartOptions::default().validate().is_ok());
        assert!(StartOptions::default().is_empty());
    }

    #[test]
    fn identity_keeps_null_fields() {
        let identity = VehicleIdentity {
            vin: Some("KNAXX".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&identity).unwrap(),
            json!({"vin": "KNAXX", "id": null, "nickname": null})
        );
    }
}

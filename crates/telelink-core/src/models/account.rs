//! Account-level models: regions, brands, and the client configuration

use serde::{Deserialize, Serialize};

/// Telematics service region of the account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "EU")]
    Eu,
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "CA")]
    Ca,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Eu, Region::Us, Region::Ca];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Eu => "EU",
            Region::Us => "US",
            Region::Ca => "CA",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EU" => Ok(Region::Eu),
            "US" => Ok(Region::Us),
            "CA" => Ok(Region::Ca),
            _ => Err(format!("Unknown region: '{}'", s)),
        }
    }
}

/// Vehicle brand the account belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    #[default]
    Hyundai,
    Kia,
    Genesis,
}

impl Brand {
    pub const ALL: [Brand; 3] = [Brand::Hyundai, Brand::Kia, Brand::Genesis];

    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::Hyundai => "hyundai",
            Brand::Kia => "kia",
            Brand::Genesis => "genesis",
        }
    }
}

impl std::fmt::Display for Brand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Brand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hyundai" => Ok(Brand::Hyundai),
            "kia" => Ok(Brand::Kia),
            "genesis" => Ok(Brand::Genesis),
            _ => Err(format!("Unknown brand: '{}'", s)),
        }
    }
}

/// Configuration handed to a [`ClientFactory`](crate::ClientFactory).
///
/// `pin` is `None` when the account has no PIN; an empty PIN is never sent.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub username: String,
    pub password: String,
    pub region: Region,
    pub brand: Brand,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("region", &self.region)
            .field("brand", &self.brand)
            .field("language", &self.language)
            .field("pin", &self.pin.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_wire_names() {
        assert_eq!(serde_json::to_string(&Region::Eu).unwrap(), "\"EU\"");
        assert_eq!("CA".parse::<Region>(), Ok(Region::Ca));
        assert!("CN".parse::<Region>().is_err());
    }

    #[test]
    fn brand_wire_names() {
        assert_eq!(serde_json::to_string(&Brand::Genesis).unwrap(), "\"genesis\"");
        assert_eq!("kia".parse::<Brand>(), Ok(Brand::Kia));
        assert_eq!(Brand::default(), Brand::Hyundai);
    }

    #[test]
    fn debug_redacts_secrets() {
        let config = ClientConfig {
            username: "driver@example.com".to_string(),
            password: "hunter2".to_string(),
            region: Region::Eu,
            brand: Brand::Kia,
            language: "en".to_string(),
            pin: Some("1234".to_string()),
        };
        let debug = format!("{:?}", config);
        assert!(debug.contains("driver@example.com"));
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("1234"));
    }
}

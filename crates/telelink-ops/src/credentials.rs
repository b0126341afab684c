//! Credential descriptor
//!
//! [`Credentials`] is the typed record a host stores per account;
//! [`CREDENTIAL_FIELDS`] describes the same fields declaratively so hosts
//! can render a form or publish a schema without duplicating constraints.

use serde::{Deserialize, Serialize};
use telelink_core::{Brand, ClientConfig, Region};
use validator::Validate;

use crate::error::{OpError, OpResult};

/// Language used for API requests when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// Account credentials for the telematics service
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Credentials {
    /// Account e-mail
    #[serde(default)]
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    pub region: Region,
    #[serde(default)]
    pub brand: Brand,
    #[serde(default = "default_language")]
    pub language: String,
    /// Security PIN; required for some commands in some regions. Checked by
    /// the remote service, never locally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>, region: Region) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            region,
            brand: Brand::default(),
            language: default_language(),
            pin: None,
        }
    }

    pub fn with_brand(mut self, brand: Brand) -> Self {
        self.brand = brand;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_pin(mut self, pin: impl Into<String>) -> Self {
        self.pin = Some(pin.into());
        self
    }

    /// Validate the record, reporting violations as a configuration error.
    pub fn check(&self) -> OpResult<()> {
        self.validate()
            .map_err(|e| OpError::Configuration(format!("Invalid credentials: {}", e)))
    }

    /// Build the client configuration.
    ///
    /// An empty language falls back to [`DEFAULT_LANGUAGE`]; an empty PIN is
    /// omitted rather than sent.
    pub fn to_client_config(&self) -> ClientConfig {
        let language = if self.language.is_empty() {
            default_language()
        } else {
            self.language.clone()
        };

        ClientConfig {
            username: self.username.clone(),
            password: self.password.clone(),
            region: self.region,
            brand: self.brand,
            language,
            pin: self.pin.clone().filter(|pin| !pin.is_empty()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("region", &self.region)
            .field("brand", &self.brand)
            .field("language", &self.language)
            .field("pin", &self.pin.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

// =============================================================================
// Declarative field table
// =============================================================================

/// Input kind of a credential field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "options", rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text
    Text,
    /// Free text that must be masked and never echoed
    Secret,
    /// One of a fixed set of values
    Options(&'static [&'static str]),
}

/// Description of one credential field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialField {
    pub name: &'static str,
    pub display_name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

/// Every field of [`Credentials`], in presentation order
pub const CREDENTIAL_FIELDS: &[CredentialField] = &[
    CredentialField {
        name: "username",
        display_name: "Username (Email)",
        kind: FieldKind::Text,
        required: true,
        default: None,
        description: None,
    },
    CredentialField {
        name: "password",
        display_name: "Password",
        kind: FieldKind::Secret,
        required: true,
        default: None,
        description: None,
    },
    CredentialField {
        name: "region",
        display_name: "Region",
        kind: FieldKind::Options(&["EU", "US", "CA"]),
        required: true,
        default: Some("EU"),
        description: Some("Region of the telematics account"),
    },
    CredentialField {
        name: "brand",
        display_name: "Brand",
        kind: FieldKind::Options(&["hyundai", "kia", "genesis"]),
        required: true,
        default: Some("hyundai"),
        description: None,
    },
    CredentialField {
        name: "language",
        display_name: "Language",
        kind: FieldKind::Text,
        required: false,
        default: Some(DEFAULT_LANGUAGE),
        description: Some("Language used for API requests (e.g., en, de, fr)"),
    },
    CredentialField {
        name: "pin",
        display_name: "PIN",
        kind: FieldKind::Secret,
        required: false,
        default: None,
        description: Some("Security PIN; required for some actions in certain regions"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn client_config_defaults_language() {
        let creds = Credentials::new("a@b.c", "pw", Region::Eu).with_language("");
        assert_eq!(creds.to_client_config().language, "en");

        let creds = creds.with_language("de");
        assert_eq!(creds.to_client_config().language, "de");

        let creds = creds.with_language(" ");
        assert_eq!(creds.to_client_config().language, " ");
    }

    #[test]
    fn client_config_omits_empty_pin() {
        let creds = Credentials::new("a@b.c", "pw", Region::Us).with_pin("");
        assert_eq!(creds.to_client_config().pin, None);

        let creds = creds.with_pin("0000");
        assert_eq!(creds.to_client_config().pin.as_deref(), Some("0000"));
    }

    #[test]
    fn check_requires_username_and_password() {
        assert!(Credentials::new("a@b.c", "pw", Region::Ca).check().is_ok());

        let err = Credentials::new("", "pw", Region::Ca).check().unwrap_err();
        assert!(matches!(err, OpError::Configuration(ref msg) if msg.contains("username")));

        let err = Credentials::new("a@b.c", "", Region::Ca).check().unwrap_err();
        assert!(matches!(err, OpError::Configuration(ref msg) if msg.contains("password")));
    }

    #[test]
    fn deserialize_applies_defaults() {
        let creds: Credentials = serde_json::from_value(json!({
            "username": "a@b.c",
            "password": "pw",
            "region": "EU"
        }))
        .unwrap();
        assert_eq!(creds.brand, Brand::Hyundai);
        assert_eq!(creds.language, "en");
        assert_eq!(creds.pin, None);

        let missing: Credentials = serde_json::from_value(json!({"region": "US"})).unwrap();
        assert!(missing.check().is_err());
    }

    #[test]
    fn field_table_covers_record() {
        let names: Vec<&str> = CREDENTIAL_FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            ["username", "password", "region", "brand", "language", "pin"]
        );

        let region = serde_json::to_value(&CREDENTIAL_FIELDS[2]).unwrap();
        assert_eq!(region["kind"], json!({"type": "options", "options": ["EU", "US", "CA"]}));
        assert_eq!(region["default"], json!("EU"));

        let password = serde_json::to_value(&CREDENTIAL_FIELDS[1]).unwrap();
        assert_eq!(password["kind"], json!({"type": "secret"}));
    }
}

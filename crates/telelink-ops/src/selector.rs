//! Vehicle selection criteria

use serde::{Deserialize, Serialize};

/// VIN-or-index criterion used to pick one fleet member.
///
/// A non-empty VIN always wins. An empty VIN is the same as no VIN and falls
/// through to index-based selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSelector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,
    /// Position in the fleet list; negative values never resolve
    #[serde(default)]
    pub index: i64,
}

/// The resolution strategy a selector applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Vin(&'a str),
    Index(i64),
}

impl VehicleSelector {
    pub fn new(vin: Option<String>, index: Option<i64>) -> Self {
        Self {
            vin,
            index: index.unwrap_or(0),
        }
    }

    pub fn by_vin(vin: impl Into<String>) -> Self {
        Self {
            vin: Some(vin.into()),
            index: 0,
        }
    }

    pub fn by_index(index: i64) -> Self {
        Self { vin: None, index }
    }

    pub fn selection(&self) -> Selection<'_> {
        match self.vin.as_deref() {
            Some(vin) if !vin.is_empty() => Selection::Vin(vin),
            _ => Selection::Index(self.index),
        }
    }
}

impl std::fmt::Display for VehicleSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.selection() {
            Selection::Vin(vin) => write!(f, "vin={}", vin),
            Selection::Index(index) => write!(f, "index={}", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vin_takes_precedence() {
        let selector = VehicleSelector::new(Some("KMH1".to_string()), Some(3));
        assert_eq!(selector.selection(), Selection::Vin("KMH1"));
    }

    #[test]
    fn empty_vin_means_index() {
        let selector = VehicleSelector::new(Some(String::new()), Some(2));
        assert_eq!(selector.selection(), Selection::Index(2));
        assert_eq!(
            selector.selection(),
            VehicleSelector::by_index(2).selection()
        );
    }

    #[test]
    fn default_is_first_vehicle() {
        assert_eq!(
            VehicleSelector::default().selection(),
            Selection::Index(0)
        );
        assert_eq!(VehicleSelector::new(None, None).to_string(), "index=0");
    }
}

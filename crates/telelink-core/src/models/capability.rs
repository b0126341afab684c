//! Remote capability names

use serde::{Deserialize, Serialize};

/// A named remote action available on a vehicle handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    Status,
    FullStatus,
    Location,
    Odometer,
    Lock,
    Unlock,
    Start,
    Stop,
}

impl Capability {
    pub const ALL: [Capability; 8] = [
        Capability::Status,
        Capability::FullStatus,
        Capability::Location,
        Capability::Odometer,
        Capability::Lock,
        Capability::Unlock,
        Capability::Start,
        Capability::Stop,
    ];

    /// Whether invoking this capability changes the physical vehicle state
    pub fn is_command(&self) -> bool {
        matches!(
            self,
            Capability::Lock | Capability::Unlock | Capability::Start | Capability::Stop
        )
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Capability::Status => "status",
            Capability::FullStatus => "fullStatus",
            Capability::Location => "location",
            Capability::Odometer => "odometer",
            Capability::Lock => "lock",
            Capability::Unlock => "unlock",
            Capability::Start => "start",
            Capability::Stop => "stop",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for Capability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Capability::ALL
            .into_iter()
            .find(|c| c.to_string() == s)
            .ok_or_else(|| format!("Unknown capability: '{}'", s))
    }
}

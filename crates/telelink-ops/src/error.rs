//! Error taxonomy for operation dispatch

use telelink_core::RemoteError;
use thiserror::Error;

/// Result type for dispatch-layer operations
pub type OpResult<T> = Result<T, OpError>;

/// Errors raised while executing an operation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OpError {
    /// Credentials missing or invalid
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Login rejected by the remote service
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The account has no vehicles but the operation needs one
    #[error("No vehicles found for this account.")]
    NoVehicles,

    /// VIN lookup miss
    #[error("Vehicle with VIN {vin} not found.")]
    VehicleNotFound { vin: String },

    /// Index lookup miss
    #[error("Vehicle index {index} is out of bounds (found {fleet_size} vehicles).")]
    IndexOutOfBounds { index: i64, fleet_size: usize },

    /// Operation name not in the catalogue
    #[error("Unknown operation: {operation}")]
    UnknownOperation { operation: String },

    /// Request parameters violate the boundary schema
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The remote capability call failed, or is unsupported with no fallback
    #[error("{message}")]
    RemoteCapability {
        /// Capability that failed
        capability: String,
        /// Message reported by the remote client
        message: String,
        /// The capability does not exist on this vehicle
        unsupported: bool,
    },
}

impl OpError {
    /// Wrap a remote client failure for `capability`, keeping its message.
    pub fn remote(capability: impl std::fmt::Display, err: &RemoteError) -> Self {
        let unsupported = err.is_unsupported();
        OpError::RemoteCapability {
            capability: capability.to_string(),
            message: if unsupported {
                err.to_string()
            } else {
                err.message()
            },
            unsupported,
        }
    }

    /// Whether this system rejected the request, as opposed to the remote
    /// service failing it.
    pub fn is_rejection(&self) -> bool {
        !matches!(
            self,
            OpError::Authentication(_) | OpError::RemoteCapability { .. }
        )
    }
}

impl From<validator::ValidationErrors> for OpError {
    fn from(err: validator::ValidationErrors) -> Self {
        OpError::InvalidRequest(err.to_string())
    }
}

/// An [`OpError`] tagged with the operation it interrupted.
///
/// Displays the underlying message unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{error}")]
pub struct DispatchError {
    /// Operation name as received
    pub operation: String,
    /// What went wrong
    #[source]
    pub error: OpError,
}

impl DispatchError {
    pub fn new(operation: impl Into<String>, error: OpError) -> Self {
        Self {
            operation: operation.into(),
            error,
        }
    }

    pub fn kind(&self) -> &OpError {
        &self.error
    }
}

//! Common error types for telematics clients

use thiserror::Error;

/// Result type for remote client calls
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Errors raised by a telematics client or one of its vehicles
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// Capability is not offered by this vehicle / API variant
    #[error("Capability not supported: {0}")]
    NotSupported(String),

    /// Login or token refresh was rejected
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The remote service refused the command (e.g. PIN required)
    #[error("Command rejected: {0}")]
    Rejected(String),

    /// Transport/communication error
    #[error("Transport error: {0}")]
    Transport(String),

    /// Timeout waiting for the remote service
    #[error("Remote call timed out")]
    Timeout,

    /// Invalid client configuration (unsupported region/brand combination, etc.)
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RemoteError {
    /// The message reported by the remote side, without the variant prefix.
    pub fn message(&self) -> String {
        match self {
            RemoteError::NotSupported(msg)
            | RemoteError::Authentication(msg)
            | RemoteError::Rejected(msg)
            | RemoteError::Transport(msg)
            | RemoteError::Configuration(msg)
            | RemoteError::Internal(msg) => msg.clone(),
            RemoteError::Timeout => "Remote call timed out".to_string(),
        }
    }

    /// Whether this error means the capability does not exist, as opposed
    /// to a capability call that was attempted and failed.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, RemoteError::NotSupported(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_strips_prefix() {
        let err = RemoteError::Rejected("PIN required".to_string());
        assert_eq!(err.to_string(), "Command rejected: PIN required");
        assert_eq!(err.message(), "PIN required");
    }

    #[test]
    fn only_not_supported_is_unsupported() {
        assert!(RemoteError::NotSupported("status".to_string()).is_unsupported());
        assert!(!RemoteError::Transport("reset".to_string()).is_unsupported());
        assert!(!RemoteError::Timeout.is_unsupported());
    }
}

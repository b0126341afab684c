//! Capability interface implemented by telematics clients
//!
//! A vendor client is consumed through three seams:
//! - [`ClientFactory`] builds an unauthenticated client from a [`ClientConfig`]
//! - [`TelematicsClient`] logs in and lists the account's fleet
//! - [`Vehicle`] exposes identity accessors and one method per remote action
//!
//! Vehicles leave default implementations for capabilities their API variant
//! does not offer. The defaults return [`RemoteError::NotSupported`], which the
//! dispatch layer treats as "capability unavailable" rather than a failure.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{RemoteError, RemoteResult};
use crate::models::{Capability, ClientConfig, StartOptions, StatusOptions};

/// Shared handle to a fleet member
pub type VehicleHandle = Arc<dyn Vehicle>;

/// Builds telematics clients for a given account configuration.
pub trait ClientFactory: Send + Sync {
    /// Construct a client for `config`. No network traffic happens here;
    /// authentication is deferred to [`TelematicsClient::login`].
    fn connect(&self, config: ClientConfig) -> RemoteResult<Box<dyn TelematicsClient>>;
}

/// An account-level telematics session.
#[async_trait]
pub trait TelematicsClient: Send + Sync {
    /// Authenticate against the remote service
    async fn login(&mut self) -> RemoteResult<()>;

    /// Fetch every vehicle registered to the account.
    ///
    /// An account without vehicles yields an empty list.
    async fn vehicles(&self) -> RemoteResult<Vec<VehicleHandle>>;
}

fn unsupported<T>(capability: Capability) -> RemoteResult<T> {
    Err(RemoteError::NotSupported(capability.to_string()))
}

/// A single fleet member.
///
/// Capability methods return `Ok(None)` when the remote call succeeded but
/// produced no payload.
#[async_trait]
pub trait Vehicle: Send + Sync {
    // =========================================================================
    // Identity
    // =========================================================================

    /// Primary VIN field
    fn vin(&self) -> Option<&str>;

    /// VIN nested in the vehicle configuration block.
    ///
    /// Some account/API versions only populate this one.
    fn config_vin(&self) -> Option<&str> {
        None
    }

    /// Remote vehicle identifier
    fn id(&self) -> Option<&str> {
        None
    }

    /// User-assigned nickname
    fn nickname(&self) -> Option<&str> {
        None
    }

    /// Display/model name
    fn name(&self) -> Option<&str> {
        None
    }

    // =========================================================================
    // Status
    // =========================================================================

    /// Detailed vehicle status
    async fn status(&self, options: StatusOptions) -> RemoteResult<Option<Value>> {
        let _ = options;
        unsupported(Capability::Status)
    }

    /// Full status, offered by API variants without the detailed status call
    async fn full_status(&self, options: StatusOptions) -> RemoteResult<Option<Value>> {
        let _ = options;
        unsupported(Capability::FullStatus)
    }

    /// Last known location
    async fn location(&self) -> RemoteResult<Option<Value>> {
        unsupported(Capability::Location)
    }

    /// Odometer reading
    async fn odometer(&self) -> RemoteResult<Option<Value>> {
        unsupported(Capability::Odometer)
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Lock the doors
    async fn lock(&self) -> RemoteResult<Option<Value>> {
        unsupported(Capability::Lock)
    }

    /// Unlock the doors
    async fn unlock(&self) -> RemoteResult<Option<Value>> {
        unsupported(Capability::Unlock)
    }

    /// Start engine or climate control
    async fn start(&self, options: &StartOptions) -> RemoteResult<Option<Value>> {
        let _ = options;
        unsupported(Capability::Start)
    }

    /// Stop engine or climate control
    async fn stop(&self) -> RemoteResult<Option<Value>> {
        unsupported(Capability::Stop)
    }
}

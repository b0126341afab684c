//! Session initialization

use telelink_core::{ClientFactory, TelematicsClient, VehicleHandle};
use tracing::{debug, info, instrument, warn};

use crate::credentials::Credentials;
use crate::error::{OpError, OpResult};
use crate::resolver::resolve_vehicle;
use crate::selector::VehicleSelector;

/// An authenticated telematics session.
///
/// Scoped to a single invocation: created, used for one fleet
/// query/action sequence, then dropped.
pub struct Session {
    client: Box<dyn TelematicsClient>,
}

impl Session {
    /// Authenticate with `credentials`.
    ///
    /// Missing or incomplete credentials fail before the factory or the
    /// network is touched. A rejected login surfaces the remote message.
    #[instrument(skip_all)]
    pub async fn init(
        factory: &dyn ClientFactory,
        credentials: Option<&Credentials>,
    ) -> OpResult<Self> {
        let credentials = credentials
            .ok_or_else(|| OpError::Configuration("Missing telematics credentials".to_string()))?;
        credentials.check()?;

        let config = credentials.to_client_config();
        debug!(
            region = %config.region,
            brand = %config.brand,
            language = %config.language,
            pin = config.pin.is_some(),
            "Connecting telematics client"
        );

        let mut client = factory
            .connect(config)
            .map_err(|e| OpError::Configuration(e.message()))?;

        client.login().await.map_err(|e| {
            warn!(error = %e, "Telematics login failed");
            OpError::Authentication(e.message())
        })?;

        info!("Telematics session established");
        Ok(Self { client })
    }

    /// Fetch the account's fleet
    pub async fn fleet(&self) -> OpResult<Vec<VehicleHandle>> {
        let fleet = self
            .client
            .vehicles()
            .await
            .map_err(|e| OpError::remote("vehicles", &e))?;
        debug!(fleet_size = fleet.len(), "Fetched fleet");
        Ok(fleet)
    }

    /// Fetch the fleet and pick the vehicle `selector` designates
    #[instrument(skip(self), fields(selector = %selector))]
    pub async fn resolve(&self, selector: &VehicleSelector) -> OpResult<VehicleHandle> {
        let fleet = self.fleet().await?;
        resolve_vehicle(&fleet, selector)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

//! Mock client and factory

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use telelink_core::{
    ClientConfig, ClientFactory, Region, RemoteError, RemoteResult, TelematicsClient,
    VehicleHandle,
};
use tracing::debug;

use crate::vehicle::MockVehicle;

/// Account session over a fixed fleet
pub struct MockClient {
    fleet: Vec<Arc<MockVehicle>>,
    login_error: Option<String>,
    fleet_error: Option<String>,
    logged_in: bool,
    logins: Arc<AtomicUsize>,
}

#[async_trait]
impl TelematicsClient for MockClient {
    async fn login(&mut self) -> RemoteResult<()> {
        self.logins.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.login_error {
            return Err(RemoteError::Authentication(message.clone()));
        }
        self.logged_in = true;
        Ok(())
    }

    async fn vehicles(&self) -> RemoteResult<Vec<VehicleHandle>> {
        if !self.logged_in {
            return Err(RemoteError::Authentication("Not logged in".to_string()));
        }
        if let Some(message) = &self.fleet_error {
            return Err(RemoteError::Transport(message.clone()));
        }
        Ok(self
            .fleet
            .iter()
            .map(|vehicle| Arc::clone(vehicle) as VehicleHandle)
            .collect())
    }
}

/// Hands out [`MockClient`]s sharing one fleet.
///
/// Vehicles are shared between every client the factory creates, so call
/// records accumulate across invocations.
#[derive(Default)]
pub struct MockClientFactory {
    fleet: Vec<Arc<MockVehicle>>,
    login_error: Option<String>,
    fleet_error: Option<String>,
    refused_regions: Vec<Region>,
    connects: AtomicUsize,
    logins: Arc<AtomicUsize>,
    last_config: Mutex<Option<ClientConfig>>,
}

impl MockClientFactory {
    pub fn new(vehicles: Vec<MockVehicle>) -> Self {
        Self {
            fleet: vehicles.into_iter().map(Arc::new).collect(),
            ..Default::default()
        }
    }

    /// Every login attempt fails with `message`
    pub fn with_login_error(mut self, message: impl Into<String>) -> Self {
        self.login_error = Some(message.into());
        self
    }

    /// Fleet listing fails with `message` after a successful login
    pub fn with_fleet_error(mut self, message: impl Into<String>) -> Self {
        self.fleet_error = Some(message.into());
        self
    }

    /// Refuse to build clients for `region`
    pub fn refusing_region(mut self, region: Region) -> Self {
        self.refused_regions.push(region);
        self
    }

    /// Shared handle to the fleet member at `index`
    pub fn vehicle(&self, index: usize) -> Option<Arc<MockVehicle>> {
        self.fleet.get(index).cloned()
    }

    pub fn fleet_size(&self) -> usize {
        self.fleet.len()
    }

    pub fn connect_count(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn login_count(&self) -> usize {
        self.logins.load(Ordering::SeqCst)
    }

    /// Configuration passed to the most recent `connect`
    pub fn last_config(&self) -> Option<ClientConfig> {
        self.last_config.lock().clone()
    }
}

impl ClientFactory for MockClientFactory {
    fn connect(&self, config: ClientConfig) -> RemoteResult<Box<dyn TelematicsClient>> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        debug!(region = %config.region, brand = %config.brand, "Mock connect");

        if self.refused_regions.contains(&config.region) {
            return Err(RemoteError::Configuration(format!(
                "Region {} is not available for {}",
                config.region, config.brand
            )));
        }
        *self.last_config.lock() = Some(config);

        Ok(Box::new(MockClient {
            fleet: self.fleet.clone(),
            login_error: self.login_error.clone(),
            fleet_error: self.fleet_error.clone(),
            logged_in: false,
            logins: Arc::clone(&self.logins),
        }))
    }
}

impl std::fmt::Debug for MockClientFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockClientFactory")
            .field("fleet_size", &self.fleet.len())
            .field("connects", &self.connect_count())
            .field("logins", &self.login_count())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use telelink_core::{Brand, Capability, Vehicle};

    use super::*;

    fn config(region: Region) -> ClientConfig {
        ClientConfig {
            username: "driver@example.com".to_string(),
            password: "secret".to_string(),
            region,
            brand: Brand::Hyundai,
            language: "en".to_string(),
            pin: None,
        }
    }

    #[tokio::test]
    async fn fleet_requires_login() {
        let factory = MockClientFactory::new(vec![MockVehicle::new("A")]);
        let mut client = factory.connect(config(Region::Us)).unwrap();

        assert!(matches!(
            client.vehicles().await,
            Err(RemoteError::Authentication(_))
        ));
        client.login().await.unwrap();
        assert_eq!(client.vehicles().await.unwrap().len(), 1);
        assert_eq!(factory.login_count(), 1);
    }

    #[tokio::test]
    async fn clients_share_vehicles() {
        let factory = MockClientFactory::new(vec![MockVehicle::new("A")]);
        for _ in 0..2 {
            let mut client = factory.connect(config(Region::Ca)).unwrap();
            client.login().await.unwrap();
            let fleet = client.vehicles().await.unwrap();
            fleet[0].lock().await.unwrap();
        }

        let vehicle = factory.vehicle(0).unwrap();
        assert_eq!(vehicle.call_count(Capability::Lock), 2);
        assert_eq!(factory.connect_count(), 2);
    }

    #[tokio::test]
    async fn refused_region() {
        let factory = MockClientFactory::new(vec![]).refusing_region(Region::Eu);
        let err = factory.connect(config(Region::Eu)).err().unwrap();
        assert!(err.message().contains("EU"));
        assert!(factory.last_config().is_none());
        assert!(factory.connect(config(Region::Us)).is_ok());
    }

    #[tokio::test]
    async fn scripted_failures() {
        let factory = MockClientFactory::new(vec![])
            .with_login_error("Invalid username or password");
        let mut client = factory.connect(config(Region::Us)).unwrap();
        assert_eq!(
            client.login().await,
            Err(RemoteError::Authentication(
                "Invalid username or password".to_string()
            ))
        );

        let factory = MockClientFactory::new(vec![]).with_fleet_error("Service unavailable");
        let mut client = factory.connect(config(Region::Us)).unwrap();
        client.login().await.unwrap();
        assert_eq!(
            client.vehicles().await.err().map(|e| e.message()),
            Some("Service unavailable".to_string())
        );
    }
}

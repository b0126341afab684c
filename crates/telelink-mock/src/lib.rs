//! telelink-mock - In-memory telematics client
//!
//! Scripted vehicles for tests and for running the daemon without a vendor
//! account:
//! - [`MockVehicle`] answers each capability with a configured payload,
//!   nothing, "not supported", or a failure, and records every call
//! - [`MockClient`] serves a fixed fleet and can be told to fail login
//! - [`MockClientFactory`] hands out clients and remembers the configs it saw
//! - [`FleetConfig`] loads a fleet from TOML
//!
//! # Example
//!
//! ```ignore
//! use telelink_mock::{MockClientFactory, MockVehicle};
//!
//! let factory = MockClientFactory::new(vec![
//!     MockVehicle::new("KMHXX00XXXX000000").with_nickname("Daily"),
//! ]);
//! ```

mod client;
mod fleet;
mod vehicle;

pub use client::{MockClient, MockClientFactory};
pub use fleet::{FleetConfig, FleetError, VehicleConfig};
pub use vehicle::{MockResponse, MockVehicle, RecordedCall};

//! telelink-core - Core traits and types for remote vehicle telematics
//!
//! This crate provides the capability interface that a vendor telematics
//! client implements (`ClientFactory`, `TelematicsClient`, `Vehicle`) and the
//! shared models passed across it. Nothing here talks to a network; the
//! dispatch layer in `telelink-ops` is written purely against these traits.

pub mod client;
pub mod error;
pub mod models;

pub use client::{ClientFactory, TelematicsClient, Vehicle, VehicleHandle};
pub use error::{RemoteError, RemoteResult};
pub use models::*;

//! Shared data models for telematics clients

mod account;
mod capability;
mod vehicle;

pub use account::*;
pub use capability::*;
pub use vehicle::*;

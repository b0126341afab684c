//! telelink Client Library
//!
//! Typed HTTP client for the telelink daemon.
//!
//! # Example
//!
//! ```rust,no_run
//! use telelink_client::{ExecuteRequest, TelelinkClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TelelinkClient::new("http://localhost:18090")?;
//!
//!     let vehicles = client.execute(&ExecuteRequest::new("listVehicles")).await?;
//!     let location = client
//!         .execute(&ExecuteRequest::new("getLocation").vin("KMHXX00XXXX000000"))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! ```rust,ignore
//! use telelink_client::testing::TestServer;
//! use telelink_api::{create_router, AppState};
//!
//! let server = TestServer::start(create_router(state)).await?;
//! let operations = server.client.list_operations().await?;
//! ```

mod client;
mod error;
pub mod testing;
mod types;

pub use client::TelelinkClient;
pub use error::{ClientError, Result};
pub use types::*;

// Re-export core types for convenience
pub use telelink_core::StartOptions;

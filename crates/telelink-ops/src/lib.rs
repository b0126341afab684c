//! telelink-ops - Operation dispatch and vehicle resolution
//!
//! Executes exactly one remote-vehicle operation per call:
//!
//! ```text
//! OperationRequest ─▶ Session::init ─▶ dispatch ─▶ resolve_vehicle ─▶ probes ─▶ records
//!                     (credentials)     (operation)  (VIN / index)     (capabilities)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use telelink_ops::{execute, Credentials, OperationRequest};
//!
//! let request: OperationRequest = serde_json::from_value(json!({
//!     "operation": "getStatus",
//!     "vin": "KMHXX00XXXX000000",
//! }))?;
//! let records = execute(&factory, Some(&credentials), &request).await?;
//! ```

pub mod credentials;
pub mod dispatch;
pub mod error;
pub mod normalize;
pub mod operation;
pub mod probe;
pub mod resolver;
pub mod selector;
pub mod session;

pub use credentials::{CredentialField, Credentials, FieldKind, CREDENTIAL_FIELDS};
pub use dispatch::{dispatch, execute, invoke};
pub use error::{DispatchError, OpError, OpResult};
pub use normalize::{OperationResult, Placeholder};
pub use operation::{Operation, OperationParams, OperationRequest};
pub use probe::ProbeOutcome;
pub use resolver::resolve_vehicle;
pub use selector::{Selection, VehicleSelector};
pub use session::Session;

//! Operation handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use telelink_ops::{
    execute, DispatchError, OpError, Operation, OperationRequest, OperationResult,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{AppState, DEFAULT_CREDENTIALS};

#[derive(Serialize)]
pub struct OperationsResponse {
    pub items: Vec<OperationInfoResponse>,
}

#[derive(Serialize)]
pub struct OperationInfoResponse {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub requires_vehicle: bool,
    pub accepts_start_options: bool,
}

impl From<Operation> for OperationInfoResponse {
    fn from(op: Operation) -> Self {
        Self {
            id: op.as_str(),
            name: op.display_name(),
            description: op.description(),
            requires_vehicle: op.requires_vehicle(),
            accepts_start_options: op.accepts_start_options(),
        }
    }
}

/// Body of `POST /v1/execute`
#[derive(Deserialize)]
pub struct ExecuteRequest {
    /// Name of the credential record to authenticate with
    #[serde(default = "default_credentials")]
    pub credentials: String,
    #[serde(flatten)]
    pub request: OperationRequest,
}

fn default_credentials() -> String {
    DEFAULT_CREDENTIALS.to_string()
}

#[derive(Serialize)]
pub struct ExecuteResponse {
    pub invocation_id: Uuid,
    pub operation: String,
    pub items: Vec<OperationResult>,
    pub completed_at: DateTime<Utc>,
}

/// GET /v1/operations
/// List every supported operation
pub async fn list_operations() -> Json<OperationsResponse> {
    let items = Operation::ALL
        .into_iter()
        .map(OperationInfoResponse::from)
        .collect();
    Json(OperationsResponse { items })
}

/// POST /v1/execute
/// Execute one operation with a fresh telematics session
pub async fn execute_operation(
    State(state): State<AppState>,
    payload: Result<Json<ExecuteRequest>, JsonRejection>,
) -> Result<Json<ExecuteResponse>, ApiError> {
    let Json(ExecuteRequest {
        credentials,
        request,
    }) = payload?;

    let invocation_id = Uuid::new_v4();
    let record = state.credentials(&credentials).ok_or_else(|| {
        warn!(%invocation_id, %credentials, "Unknown credential record");
        DispatchError::new(
            &request.operation,
            OpError::Configuration(format!("Unknown credentials: {}", credentials)),
        )
    })?;

    let items = execute(state.factory(), Some(record), &request).await?;
    info!(
        %invocation_id,
        operation = %request.operation,
        records = items.len(),
        "Operation completed"
    );

    Ok(Json(ExecuteResponse {
        invocation_id,
        operation: request.operation,
        items,
        completed_at: Utc::now(),
    }))
}

//! Operation dispatch
//!
//! Exactly one operation per call. Failures propagate once, tagged with the
//! operation name; nothing is retried here.

use telelink_core::{ClientFactory, Vehicle};
use tracing::{info, instrument, warn};

use crate::credentials::Credentials;
use crate::error::{DispatchError, OpError, OpResult};
use crate::normalize::{
    first_present, identity_record, payload_record, OperationResult, VIN_SOURCES,
};
use crate::operation::{Operation, OperationParams, OperationRequest};
use crate::probe::{run_chain, ProbeOutcome};
use crate::session::Session;

/// Run the whole flow for one request: boundary checks, session, dispatch.
#[instrument(skip(factory, credentials, request), fields(operation = %request.operation))]
pub async fn execute(
    factory: &dyn ClientFactory,
    credentials: Option<&Credentials>,
    request: &OperationRequest,
) -> Result<Vec<OperationResult>, DispatchError> {
    let tag = |error| DispatchError::new(&request.operation, error);

    request.check().map_err(tag)?;
    let session = Session::init(factory, credentials).await.map_err(tag)?;

    dispatch(&session, &request.operation, &request.params()).await
}

/// Execute `operation` on an authenticated session.
///
/// `listVehicles` yields one record per fleet member (possibly none); every
/// other operation yields exactly one record.
#[instrument(skip(session, params))]
pub async fn dispatch(
    session: &Session,
    operation: &str,
    params: &OperationParams,
) -> Result<Vec<OperationResult>, DispatchError> {
    let op: Operation = operation
        .parse()
        .map_err(|e| DispatchError::new(operation, e))?;

    run(session, op, params)
        .await
        .map_err(|e| DispatchError::new(op.as_str(), e))
}

async fn run(
    session: &Session,
    op: Operation,
    params: &OperationParams,
) -> OpResult<Vec<OperationResult>> {
    if !op.requires_vehicle() {
        let fleet = session.fleet().await?;
        return Ok(fleet
            .iter()
            .map(|vehicle| identity_record(vehicle.as_ref()))
            .collect());
    }

    let vehicle = session.resolve(&params.selector).await?;
    let record = invoke(vehicle.as_ref(), op, params).await?;
    Ok(vec![record])
}

/// Invoke `op`'s capabilities on a resolved vehicle and normalize the result.
pub async fn invoke(
    vehicle: &dyn Vehicle,
    op: Operation,
    params: &OperationParams,
) -> OpResult<OperationResult> {
    let chain = op.probes();
    if chain.iter().any(|capability| capability.is_command()) {
        let vin = first_present(vehicle, VIN_SOURCES);
        info!(operation = %op, vin = vin.as_deref().unwrap_or("-"), "Issuing vehicle command");
    }

    match run_chain(vehicle, chain, params).await {
        Ok(ProbeOutcome::Payload(payload)) => Ok(payload_record(payload)),
        Ok(ProbeOutcome::Empty) => Ok(op.placeholder().record()),
        Ok(ProbeOutcome::Unavailable) if op.tolerates_unavailable() => {
            warn!(operation = %op, "No capability available, emitting placeholder");
            Ok(op.placeholder().record())
        }
        Ok(ProbeOutcome::Unavailable) => {
            let capability = chain
                .first()
                .map(ToString::to_string)
                .unwrap_or_else(|| op.to_string());
            Err(OpError::RemoteCapability {
                message: format!("Capability not supported: {}", capability),
                capability,
                unsupported: true,
            })
        }
        Err((capability, err)) => {
            warn!(operation = %op, %capability, error = %err, "Capability call failed");
            Err(OpError::remote(capability, &err))
        }
    }
}

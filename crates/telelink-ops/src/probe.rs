//! Capability probes
//!
//! Each operation declares an ordered list of capabilities. Every probe
//! reports one of three outcomes, and the chain stops at the first payload.
//! A remote failure (anything other than "not supported") stops the chain
//! immediately and is never masked by a later probe.

use serde_json::Value;
use telelink_core::{Capability, RemoteError, StatusOptions, Vehicle};
use tracing::debug;

use crate::operation::OperationParams;

/// Tri-state result of probing one capability
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// Capability exists and returned data
    Payload(Value),
    /// Capability exists but returned nothing
    Empty,
    /// Capability does not exist on this vehicle
    Unavailable,
}

/// Invoke one capability and classify the result.
pub async fn probe(
    vehicle: &dyn Vehicle,
    capability: Capability,
    params: &OperationParams,
) -> Result<ProbeOutcome, RemoteError> {
    let result = match capability {
        Capability::Status => vehicle.status(StatusOptions::detailed()).await,
        Capability::FullStatus => vehicle.full_status(StatusOptions::detailed()).await,
        Capability::Location => vehicle.location().await,
        Capability::Odometer => vehicle.odometer().await,
        Capability::Lock => vehicle.lock().await,
        Capability::Unlock => vehicle.unlock().await,
        Capability::Start => vehicle.start(&params.start_options).await,
        Capability::Stop => vehicle.stop().await,
    };

    match result {
        Ok(None) | Ok(Some(Value::Null)) => Ok(ProbeOutcome::Empty),
        Ok(Some(payload)) => Ok(ProbeOutcome::Payload(payload)),
        Err(err) if err.is_unsupported() => Ok(ProbeOutcome::Unavailable),
        Err(err) => Err(err),
    }
}

/// Evaluate `chain` in order.
///
/// Returns the first payload; otherwise `Empty` if any capability existed,
/// otherwise `Unavailable`. Errors carry the capability that failed.
pub async fn run_chain(
    vehicle: &dyn Vehicle,
    chain: &[Capability],
    params: &OperationParams,
) -> Result<ProbeOutcome, (Capability, RemoteError)> {
    let mut outcome = ProbeOutcome::Unavailable;

    for &capability in chain {
        match probe(vehicle, capability, params)
            .await
            .map_err(|err| (capability, err))?
        {
            ProbeOutcome::Payload(payload) => {
                debug!(%capability, "Capability returned payload");
                return Ok(ProbeOutcome::Payload(payload));
            }
            ProbeOutcome::Empty => {
                debug!(%capability, "Capability returned no data");
                outcome = ProbeOutcome::Empty;
            }
            ProbeOutcome::Unavailable => {
                debug!(%capability, "Capability unavailable");
            }
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use telelink_mock::MockVehicle;

    use super::*;

    const STATUS_CHAIN: &[Capability] = &[Capability::Status, Capability::FullStatus];

    #[tokio::test]
    async fn classifies_outcomes() {
        let vehicle = MockVehicle::new("V1")
            .with_payload(Capability::Location, json!({"lat": 1.0}))
            .with_payload(Capability::Odometer, Value::Null)
            .unsupported(Capability::Lock);
        let params = OperationParams::default();

        assert_eq!(
            probe(&vehicle, Capability::Location, &params).await,
            Ok(ProbeOutcome::Payload(json!({"lat": 1.0})))
        );
        assert_eq!(
            probe(&vehicle, Capability::Odometer, &params).await,
            Ok(ProbeOutcome::Empty)
        );
        assert_eq!(
            probe(&vehicle, Capability::Unlock, &params).await,
            Ok(ProbeOutcome::Empty)
        );
        assert_eq!(
            probe(&vehicle, Capability::Lock, &params).await,
            Ok(ProbeOutcome::Unavailable)
        );
    }

    #[tokio::test]
    async fn chain_stops_at_first_payload() {
        let vehicle = MockVehicle::new("V1")
            .with_payload(Capability::Status, json!({"source": "status"}))
            .with_payload(Capability::FullStatus, json!({"source": "full"}));

        let outcome = run_chain(&vehicle, STATUS_CHAIN, &OperationParams::default()).await;
        assert_eq!(outcome, Ok(ProbeOutcome::Payload(json!({"source": "status"}))));
        assert_eq!(vehicle.call_count(Capability::FullStatus), 0);
    }

    #[tokio::test]
    async fn chain_falls_back_when_unavailable() {
        let vehicle = MockVehicle::new("V1")
            .unsupported(Capability::Status)
            .with_payload(Capability::FullStatus, json!({"source": "full"}));

        let outcome = run_chain(&vehicle, STATUS_CHAIN, &OperationParams::default()).await;
        assert_eq!(outcome, Ok(ProbeOutcome::Payload(json!({"source": "full"}))));
    }

    #[tokio::test]
    async fn chain_falls_back_when_empty() {
        let vehicle = MockVehicle::new("V1")
            .with_payload(Capability::FullStatus, json!({"source": "full"}));

        let outcome = run_chain(&vehicle, STATUS_CHAIN, &OperationParams::default()).await;
        assert_eq!(outcome, Ok(ProbeOutcome::Payload(json!({"source": "full"}))));
        assert_eq!(vehicle.call_count(Capability::Status), 1);
    }

    #[tokio::test]
    async fn chain_reports_empty_over_unavailable() {
        let vehicle = MockVehicle::new("V1").unsupported(Capability::FullStatus);
        let outcome = run_chain(&vehicle, STATUS_CHAIN, &OperationParams::default()).await;
        assert_eq!(outcome, Ok(ProbeOutcome::Empty));

        let vehicle = MockVehicle::new("V1")
            .unsupported(Capability::Status)
            .unsupported(Capability::FullStatus);
        let outcome = run_chain(&vehicle, STATUS_CHAIN, &OperationParams::default()).await;
        assert_eq!(outcome, Ok(ProbeOutcome::Unavailable));
    }

    #[tokio::test]
    async fn failure_is_not_masked_by_fallback() {
        let vehicle = MockVehicle::new("V1")
            .failing(Capability::Status, "Vehicle asleep")
            .with_payload(Capability::FullStatus, json!({"source": "full"}));

        let outcome = run_chain(&vehicle, STATUS_CHAIN, &OperationParams::default()).await;
        assert_eq!(
            outcome,
            Err((
                Capability::Status,
                RemoteError::Transport("Vehicle asleep".to_string())
            ))
        );
        assert_eq!(vehicle.call_count(Capability::FullStatus), 0);
    }
}

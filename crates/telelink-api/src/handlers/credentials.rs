//! Credential schema handler

use axum::Json;
use serde::Serialize;
use telelink_ops::{CredentialField, CREDENTIAL_FIELDS};

#[derive(Serialize)]
pub struct CredentialSchemaResponse {
    pub items: &'static [CredentialField],
}

/// GET /v1/credentials/schema
/// Describe the fields of a credential record
pub async fn credential_schema() -> Json<CredentialSchemaResponse> {
    Json(CredentialSchemaResponse {
        items: CREDENTIAL_FIELDS,
    })
}

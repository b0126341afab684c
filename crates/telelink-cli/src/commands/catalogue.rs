//! Catalogue commands - operations and credential schema

use anyhow::Result;
use telelink_client::{FieldKind, TelelinkClient};

use crate::output::{FieldRow, OperationRow, OutputContext};

fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

/// List the operations the server can execute
pub async fn operations(client: &TelelinkClient, ctx: &OutputContext) -> Result<()> {
    let operations = client.list_operations().await?;

    let rows: Vec<OperationRow> = operations
        .into_iter()
        .map(|op| OperationRow {
            id: op.id,
            name: op.name,
            description: op.description,
            requires_vehicle: yes_no(op.requires_vehicle),
        })
        .collect();

    ctx.print(&rows);
    Ok(())
}

/// Describe the fields of a credential record
pub async fn schema(client: &TelelinkClient, ctx: &OutputContext) -> Result<()> {
    let fields = client.credential_schema().await?;

    let rows: Vec<FieldRow> = fields
        .into_iter()
        .map(|field| FieldRow {
            name: field.name,
            display_name: field.display_name,
            kind: match field.kind {
                FieldKind::Text => "text".to_string(),
                FieldKind::Secret => "secret".to_string(),
                FieldKind::Options(options) => options.join(" | "),
            },
            required: yes_no(field.required),
            default: field.default.unwrap_or_default(),
        })
        .collect();

    ctx.print(&rows);
    Ok(())
}

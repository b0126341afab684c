//! List command - show the account's vehicles

use anyhow::Result;
use serde_json::{Map, Value};
use telelink_client::TelelinkClient;

use super::Target;
use crate::output::{to_json, OutputContext, OutputFormat, VehicleRow};

fn text(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| "-".to_string())
}

/// Table rows for identity records; the index is the position in the list
fn vehicle_rows(items: &[Map<String, Value>]) -> Vec<VehicleRow> {
    items
        .iter()
        .enumerate()
        .map(|(index, record)| VehicleRow {
            index,
            vin: text(record.get("vin")),
            id: text(record.get("id")),
            nickname: text(record.get("nickname")),
        })
        .collect()
}

/// List every vehicle on the account
pub async fn list(client: &TelelinkClient, target: &Target, ctx: &OutputContext) -> Result<()> {
    let request = target.request("listVehicles");
    let response = client.execute(&request).await?;

    match ctx.format {
        // Identity records as the server sent them, nulls included
        OutputFormat::Json => println!("{}", to_json(&response.items)),
        OutputFormat::Table => ctx.print(&vehicle_rows(&response.items)),
    }
    Ok(())
}

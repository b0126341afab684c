//! Read commands - status, location, odometer

use anyhow::Result;
use telelink_client::TelelinkClient;

use super::Target;
use crate::output::OutputContext;

/// Run a read operation and print the returned record
pub async fn read(
    client: &TelelinkClient,
    operation: &str,
    target: &Target,
    ctx: &OutputContext,
) -> Result<()> {
    let response = client.execute(&target.request(operation)).await?;

    for record in &response.items {
        ctx.print_record(record);
    }
    Ok(())
}

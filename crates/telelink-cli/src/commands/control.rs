//! Control commands - lock, unlock, start, stop

use anyhow::Result;
use clap::Args;
use serde_json::Value;
use telelink_client::{ExecuteResponse, StartOptions, TelelinkClient};

use super::Target;
use crate::output::OutputContext;

/// Climate/engine start options
#[derive(Debug, Clone, Default, PartialEq, Args)]
pub struct StartArgs {
    /// Enable climate control
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub air_ctrl: Option<bool>,

    /// Enable defrost
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub defrost: Option<bool>,

    /// Target cabin temperature in °C (16-32)
    #[arg(long)]
    pub temp: Option<f64>,

    /// Run time in minutes (1-30)
    #[arg(long)]
    pub duration: Option<f64>,

    /// Fill unset options with climate on, defrost off, 22°C, 10 minutes
    #[arg(long)]
    pub defaults: bool,
}

impl StartArgs {
    pub fn to_options(&self) -> StartOptions {
        let options = StartOptions {
            air_ctrl: self.air_ctrl,
            defrost: self.defrost,
            heating_temp: self.temp,
            igni_on_duration: self.duration,
        };
        if !self.defaults {
            return options;
        }
        StartOptions {
            air_ctrl: options.air_ctrl.or(Some(true)),
            defrost: options.defrost.or(Some(false)),
            heating_temp: options.heating_temp.or(Some(22.0)),
            igni_on_duration: options.igni_on_duration.or(Some(10.0)),
        }
    }
}

fn report(response: &ExecuteResponse, done: &str, ctx: &OutputContext) {
    for record in &response.items {
        if record.len() == 1 && record.get("success") == Some(&Value::Bool(true)) {
            ctx.success(done);
        } else {
            ctx.print_record(record);
        }
    }
}

/// Run a command operation without options
pub async fn command(
    client: &TelelinkClient,
    operation: &str,
    done: &str,
    target: &Target,
    ctx: &OutputContext,
) -> Result<()> {
    ctx.info(&format!("Sending {} to {}...", operation, target.describe()));
    let response = client.execute(&target.request(operation)).await?;
    report(&response, done, ctx);
    Ok(())
}

/// Start engine/climate
pub async fn start(
    client: &TelelinkClient,
    args: &StartArgs,
    target: &Target,
    ctx: &OutputContext,
) -> Result<()> {
    let mut request = target.request("startEngine");
    let options = args.to_options();
    if !options.is_empty() {
        request.start_options = Some(options);
    }

    ctx.info(&format!("Starting {}...", target.describe()));
    let response = client.execute(&request).await?;
    report(&response, "Engine/climate started", ctx);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_options_only() {
        let args = StartArgs {
            air_ctrl: Some(true),
            temp: Some(21.0),
            ..Default::default()
        };
        assert_eq!(
            args.to_options(),
            StartOptions {
                air_ctrl: Some(true),
                heating_temp: Some(21.0),
                ..Default::default()
            }
        );
        assert!(StartArgs::default().to_options().is_empty());
    }

    #[test]
    fn defaults_fill_unset_options() {
        let args = StartArgs {
            temp: Some(18.0),
            defaults: true,
            ..Default::default()
        };
        assert_eq!(
            args.to_options(),
            StartOptions {
                air_ctrl: Some(true),
                defrost: Some(false),
                heating_temp: Some(18.0),
                igni_on_duration: Some(10.0),
            }
        );
    }
}

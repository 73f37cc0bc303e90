use anyhow::{Context, anyhow};
use clap::{Args, Parser, Subcommand};
use forecast_core::{
    Config, ForecastError, ForecastService,
    model::{check_latitude, check_longitude},
    provider_from_config,
};
use inquire::{CustomType, CustomUserError, Text, validator::Validation};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "7-day forecast and solar yield estimates")]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure the upstream API endpoint and timeout.
    Configure,

    /// Show the per-day forecast with estimated solar energy.
    Daily(Location),

    /// Show the weekly summary.
    Summary(Location),
}

#[derive(Debug, Args)]
pub struct Location {
    /// Latitude in degrees, -90..=90.
    #[arg(long, value_parser = parse_latitude, allow_negative_numbers = true)]
    pub latitude: f64,

    /// Longitude in degrees, -180..=180.
    #[arg(long, value_parser = parse_longitude, allow_negative_numbers = true)]
    pub longitude: f64,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Daily(location) => {
                let service = build_service()?;
                let forecasts = service
                    .get_daily_forecast(location.latitude, location.longitude)
                    .await
                    .map_err(report)?;

                if location.json {
                    println!("{}", output::to_json(&forecasts)?);
                } else {
                    print!("{}", output::daily_table(&forecasts));
                }
                Ok(())
            }
            Command::Summary(location) => {
                let service = build_service()?;
                let summary = service
                    .get_weekly_summary(location.latitude, location.longitude)
                    .await
                    .map_err(report)?;

                if location.json {
                    println!("{}", output::to_json(&summary)?);
                } else {
                    print!("{}", output::summary_text(&summary));
                }
                Ok(())
            }
        }
    }
}

fn build_service() -> anyhow::Result<ForecastService> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;
    Ok(ForecastService::new(provider))
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_url = Text::new("Open-Meteo forecast URL:")
        .with_default(config.api_url())
        .prompt()
        .context("Failed to read API URL")?;

    let timeout_secs = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(config.timeout().as_secs())
        .with_error_message("Please enter a whole number of seconds")
        .with_validator(validate_timeout)
        .prompt()
        .context("Failed to read request timeout")?;

    config.set_api_url(api_url.trim().to_string());
    config.set_timeout_secs(timeout_secs);

    // Reject an unusable URL before it lands on disk.
    provider_from_config(&config)?;
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

/// A zero timeout would make every request fail immediately.
fn validate_timeout(secs: &u64) -> Result<Validation, CustomUserError> {
    if *secs == 0 {
        Ok(Validation::Invalid("Timeout must be at least 1 second".into()))
    } else {
        Ok(Validation::Valid)
    }
}

/// Detail goes to the log; the user sees the public message.
fn report(err: ForecastError) -> anyhow::Error {
    tracing::error!(error = %err, "forecast request failed");
    anyhow!(err.public_message())
}

fn parse_latitude(value: &str) -> Result<f64, String> {
    let value = parse_number(value, "latitude")?;
    check_latitude(value).map_err(|e| e.to_string())
}

fn parse_longitude(value: &str) -> Result<f64, String> {
    let value = parse_number(value, "longitude")?;
    check_longitude(value).map_err(|e| e.to_string())
}

fn parse_number(value: &str, name: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid argument type. Please provide a numeric value for {name}."))
}

use crate::{Config, error::ForecastError, model::RawForecastResponse, provider::openmeteo::OpenMeteoProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openmeteo;

/// Source of raw daily forecast data: one GET per call, no retry.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch_daily(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<RawForecastResponse, ForecastError>;
}

/// Construct the Open-Meteo provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn ForecastProvider>> {
    let provider = OpenMeteoProvider::new(config.api_url(), config.timeout()).map_err(|e| {
        anyhow::anyhow!(
            "{e:#}\n\
             Hint: run `forecast configure` and enter a valid API URL."
        )
    })?;

    Ok(Box::new(provider))
}

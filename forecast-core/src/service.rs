use tracing::{info, warn};

use crate::{
    error::ForecastError,
    model::{DailyForecast, WeeklySummary},
    provider::ForecastProvider,
    transform::{daily_forecast, weekly_summary},
    validate::{ValidatedForecast, validate},
};

/// Fetch → validate → project, one upstream call per request.
#[derive(Debug)]
pub struct ForecastService {
    provider: Box<dyn ForecastProvider>,
}

impl ForecastService {
    pub fn new(provider: Box<dyn ForecastProvider>) -> Self {
        Self { provider }
    }

    pub async fn get_daily_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<DailyForecast>, ForecastError> {
        let forecast = self.fetch_validated(latitude, longitude).await?;
        Ok(daily_forecast(&forecast))
    }

    pub async fn get_weekly_summary(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeeklySummary, ForecastError> {
        let forecast = self.fetch_validated(latitude, longitude).await?;
        Ok(weekly_summary(&forecast))
    }

    async fn fetch_validated(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ValidatedForecast, ForecastError> {
        info!(latitude, longitude, "fetching forecast");

        let raw = self
            .provider
            .fetch_daily(latitude, longitude)
            .await
            .inspect_err(|e| warn!(error = %e, "upstream forecast unavailable"))?;

        Ok(validate(raw)?)
    }
}

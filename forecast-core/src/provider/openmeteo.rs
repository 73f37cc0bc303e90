use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use crate::{error::ForecastError, model::RawForecastResponse};

use super::ForecastProvider;

/// Daily variables requested from Open-Meteo, in request order.
pub const DAILY_VARIABLES: &str =
    "weather_code,temperature_2m_max,temperature_2m_min,surface_pressure_mean,sunshine_duration";

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    base_url: Url,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid Open-Meteo API URL: {base_url}"))?;

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for Open-Meteo")?;

        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// Query parameters for one forecast request. Coordinates use 4 decimals.
pub fn query_params(latitude: f64, longitude: f64) -> [(&'static str, String); 4] {
    [
        ("latitude", format!("{latitude:.4}")),
        ("longitude", format!("{longitude:.4}")),
        ("daily", DAILY_VARIABLES.to_string()),
        ("timezone", "auto".to_string()),
    ]
}

/// Decodes a successfully transported body. Empty and `null` bodies carry
/// no usable data and are reported as upstream failures.
pub fn parse_body(body: &str) -> Result<RawForecastResponse, ForecastError> {
    if body.trim().is_empty() {
        return Err(ForecastError::upstream("Open-Meteo returned an empty body"));
    }

    let parsed: Option<RawForecastResponse> = serde_json::from_str(body).map_err(|e| {
        ForecastError::upstream(format!("Failed to parse Open-Meteo forecast JSON: {e}"))
    })?;

    parsed.ok_or_else(|| ForecastError::upstream("Open-Meteo returned a null body"))
}

#[async_trait]
impl ForecastProvider for OpenMeteoProvider {
    async fn fetch_daily(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<RawForecastResponse, ForecastError> {
        let params = query_params(latitude, longitude);
        debug!(url = %self.base_url, latitude = %params[0].1, longitude = %params[1].1, "requesting forecast");

        let res = self
            .http
            .get(self.base_url.clone())
            .query(&params)
            .send()
            .await
            .map_err(|e| ForecastError::upstream(format!("Failed to send request to Open-Meteo: {e}")))?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            ForecastError::upstream(format!("Failed to read Open-Meteo response body: {e}"))
        })?;

        if !status.is_success() {
            return Err(ForecastError::upstream(format!(
                "Open-Meteo request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        parse_body(&body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoordinateError {
    #[error("Latitude must be between -90 and 90")]
    Latitude,
    #[error("Longitude must be between -180 and 180")]
    Longitude,
}

/// Range check for a latitude in degrees.
pub fn check_latitude(value: f64) -> Result<f64, CoordinateError> {
    if value.is_finite() && (-90.0..=90.0).contains(&value) {
        Ok(value)
    } else {
        Err(CoordinateError::Latitude)
    }
}

/// Range check for a longitude in degrees.
pub fn check_longitude(value: f64) -> Result<f64, CoordinateError> {
    if value.is_finite() && (-180.0..=180.0).contains(&value) {
        Ok(value)
    } else {
        Err(CoordinateError::Longitude)
    }
}

/// Open-Meteo forecast body. Only the `daily` block is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawForecastResponse {
    pub daily: Option<RawDailyData>,
}

/// The `daily` block as the provider sends it: one array per variable,
/// all indexed by day offset. Any of them may be missing or short, and
/// Open-Meteo writes `null` for a day it has no value for.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDailyData {
    #[serde(rename = "time")]
    pub dates: Option<Vec<Option<NaiveDate>>>,
    #[serde(rename = "weather_code")]
    pub weather_codes: Option<Vec<Option<i32>>>,
    #[serde(rename = "temperature_2m_min")]
    pub temp_min: Option<Vec<Option<f64>>>,
    #[serde(rename = "temperature_2m_max")]
    pub temp_max: Option<Vec<Option<f64>>>,
    #[serde(rename = "surface_pressure_mean")]
    pub pressure: Option<Vec<Option<f64>>>,
    #[serde(rename = "sunshine_duration")]
    pub sunshine_duration: Option<Vec<Option<f64>>>,
}

/// One forecast day after validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub weather_code: i32,
    pub temp_min: f64,
    pub temp_max: f64,
    /// seconds
    pub sunshine_duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub weather_code: i32,
    pub temp_min: f64,
    pub temp_max: f64,
    /// kWh
    pub estimated_generated_energy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    pub average_pressure: f64,
    pub average_sunshine_seconds: f64,
    /// `None` only when the provider sent no temperatures at all.
    pub weekly_temp_min: Option<f64>,
    pub weekly_temp_max: Option<f64>,
    pub summary: RainOutlook,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RainOutlook {
    #[serde(rename = "Rainy")]
    Rainy,
    #[serde(rename = "Not Rainy")]
    NotRainy,
}

impl RainOutlook {
    pub fn as_str(&self) -> &'static str {
        match self {
            RainOutlook::Rainy => "Rainy",
            RainOutlook::NotRainy => "Not Rainy",
        }
    }
}

impl std::fmt::Display for RainOutlook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

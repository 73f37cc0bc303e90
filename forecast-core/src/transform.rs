use std::ops::RangeInclusive;

use crate::{
    model::{DailyForecast, RainOutlook, WeeklySummary},
    rounding::round_half_up,
    validate::{FORECAST_DAYS, ValidatedForecast},
};

/// Nameplate power of the reference installation, kW.
pub const PANEL_POWER: f64 = 2.5;
pub const PANEL_EFFICIENCY: f64 = 0.2;

const ENERGY_DECIMALS: u32 = 2;
const AVERAGE_DECIMALS: u32 = 1;

/// WMO codes for drizzle, rain, snow, showers and thunderstorms.
pub const RAIN_CODES: RangeInclusive<i32> = 60..=99;
/// Rain-coded days needed for a "Rainy" week.
pub const RAINY_DAYS_THRESHOLD: usize = 4;

/// Estimated yield in kWh for a day with `sunshine_seconds` of sun.
pub fn estimated_energy(sunshine_seconds: f64) -> f64 {
    if sunshine_seconds < 0.0 {
        return 0.0;
    }
    round_half_up(
        PANEL_POWER * (sunshine_seconds / 3600.0) * PANEL_EFFICIENCY,
        ENERGY_DECIMALS,
    )
}

/// Per-day view over the first [`FORECAST_DAYS`] days.
pub fn daily_forecast(forecast: &ValidatedForecast) -> Vec<DailyForecast> {
    forecast
        .days
        .iter()
        .take(FORECAST_DAYS)
        .map(|day| DailyForecast {
            date: day.date,
            weather_code: day.weather_code,
            temp_min: day.temp_min,
            temp_max: day.temp_max,
            estimated_generated_energy: estimated_energy(day.sunshine_duration),
        })
        .collect()
}

/// Aggregate view over the full series the provider returned.
pub fn weekly_summary(forecast: &ValidatedForecast) -> WeeklySummary {
    let rainy_days = forecast
        .weather_codes
        .iter()
        .filter(|code| RAIN_CODES.contains(*code))
        .count();

    let summary = if rainy_days >= RAINY_DAYS_THRESHOLD {
        RainOutlook::Rainy
    } else {
        RainOutlook::NotRainy
    };

    WeeklySummary {
        average_pressure: round_half_up(mean(&forecast.pressure), AVERAGE_DECIMALS),
        average_sunshine_seconds: round_half_up(
            mean(&forecast.sunshine_duration),
            AVERAGE_DECIMALS,
        ),
        weekly_temp_min: forecast.temp_min.iter().copied().reduce(f64::min),
        weekly_temp_max: forecast.temp_max.iter().copied().reduce(f64::max),
        summary,
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

use std::fmt::Write;

use forecast_core::{DailyForecast, WeeklySummary};
use serde::Serialize;

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn daily_table(forecasts: &[DailyForecast]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10}  {:>4}  {:>8}  {:>8}  {:>11}",
        "Date", "Code", "Min °C", "Max °C", "Energy kWh"
    );
    for day in forecasts {
        let _ = writeln!(
            out,
            "{:<10}  {:>4}  {:>8.1}  {:>8.1}  {:>11.2}",
            day.date, day.weather_code, day.temp_min, day.temp_max, day.estimated_generated_energy
        );
    }
    out
}

pub fn summary_text(summary: &WeeklySummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Average pressure:  {:.1} hPa", summary.average_pressure);
    let _ = writeln!(
        out,
        "Average sunshine:  {:.1} s ({:.1} h)",
        summary.average_sunshine_seconds,
        summary.average_sunshine_seconds / 3600.0
    );
    let _ = writeln!(out, "Lowest minimum:    {}", temperature(summary.weekly_temp_min));
    let _ = writeln!(out, "Highest maximum:   {}", temperature(summary.weekly_temp_max));
    let _ = writeln!(out, "Outlook:           {}", summary.summary);
    out
}

fn temperature(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |t| format!("{t:.1} °C"))
}

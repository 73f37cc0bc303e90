//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Configuration handling for the upstream endpoint
//! - The Open-Meteo provider behind the `ForecastProvider` seam
//! - Validation of raw daily data into per-day records
//! - The daily forecast and weekly summary projections
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod rounding;
pub mod service;
pub mod transform;
pub mod validate;

pub use config::Config;
pub use error::{ForecastError, IncompleteData};
pub use model::{DailyForecast, RainOutlook, WeeklySummary};
pub use provider::{ForecastProvider, provider_from_config};
pub use service::ForecastService;

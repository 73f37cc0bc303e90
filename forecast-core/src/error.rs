use thiserror::Error;

/// Errors surfaced at the forecast pipeline boundary.
///
/// Both variants are reported to callers as "service unavailable"; the
/// payload is diagnostic detail for logs and tests.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Unable to fetch weather data: {0}")]
    UpstreamUnavailable(String),

    #[error("Unable to process weather data: {0}")]
    DataIncomplete(#[from] IncompleteData),
}

impl ForecastError {
    pub fn upstream(detail: impl Into<String>) -> Self {
        ForecastError::UpstreamUnavailable(detail.into())
    }

    /// Message safe to show to an end user, without upstream details.
    pub fn public_message(&self) -> &'static str {
        match self {
            ForecastError::UpstreamUnavailable(_) => "Unable to fetch weather data",
            ForecastError::DataIncomplete(_) => "Unable to process weather data",
        }
    }

    /// HTTP status a web layer should answer with.
    pub fn status_code(&self) -> u16 {
        503
    }
}

/// A named upstream daily series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Dates,
    WeatherCodes,
    TempMin,
    TempMax,
    SunshineDuration,
    Pressure,
}

impl Series {
    pub fn as_str(&self) -> &'static str {
        match self {
            Series::Dates => "date information",
            Series::WeatherCodes => "weather codes",
            Series::TempMin => "minimum temperatures",
            Series::TempMax => "maximum temperatures",
            Series::SunshineDuration => "sunshine duration data",
            Series::Pressure => "pressure data",
        }
    }
}

impl std::fmt::Display for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an upstream payload was rejected by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IncompleteData {
    #[error("weather response doesn't contain daily data")]
    MissingDaily,

    #[error("weather response doesn't contain date information")]
    MissingDates,

    #[error("weather response is missing {series} (expected at least {expected}, found {found})")]
    ShortSeries {
        series: Series,
        expected: usize,
        found: usize,
    },

    #[error("weather response has a null entry in {series} at day {index}")]
    NullValue { series: Series, index: usize },

    #[error("weather response covers {found} days, at least {required} are required")]
    TooFewDays { found: usize, required: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_kinds_share_external_status() {
        let upstream = ForecastError::upstream("timeout");
        let incomplete = ForecastError::from(IncompleteData::MissingDaily);

        assert_eq!(upstream.status_code(), incomplete.status_code());
        assert_ne!(upstream.public_message(), incomplete.public_message());
    }

    #[test]
    fn short_series_message_names_the_series() {
        let err = IncompleteData::ShortSeries {
            series: Series::Pressure,
            expected: 7,
            found: 3,
        };

        let msg = err.to_string();
        assert!(msg.contains("pressure data"));
        assert!(msg.contains("expected at least 7, found 3"));
    }

    #[test]
    fn null_value_message_names_series_and_day() {
        let err = ForecastError::from(IncompleteData::NullValue {
            series: Series::Pressure,
            index: 6,
        });

        assert_eq!(err.public_message(), "Unable to process weather data");
        assert!(err.to_string().contains("null entry in pressure data at day 6"));
    }
}

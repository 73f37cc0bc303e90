use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::{
    error::{IncompleteData, Series},
    model::{DayRecord, RawDailyData, RawForecastResponse},
};

/// Length of the daily projection.
pub const FORECAST_DAYS: usize = 7;

/// Upstream data that passed validation.
///
/// `days` holds one record per index covered by every series (at least
/// [`FORECAST_DAYS`]). The weekly summary reads the full series instead,
/// which may be longer than `days` if the provider sent uneven arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedForecast {
    pub days: Vec<DayRecord>,
    pub weather_codes: Vec<i32>,
    pub temp_min: Vec<f64>,
    pub temp_max: Vec<f64>,
    pub pressure: Vec<f64>,
    pub sunshine_duration: Vec<f64>,
}

/// Checks a raw response for completeness and assembles per-day records.
pub fn validate(response: RawForecastResponse) -> Result<ValidatedForecast, IncompleteData> {
    let result = validate_inner(response);
    match &result {
        Ok(validated) => debug!(days = validated.days.len(), "forecast response validated"),
        Err(reason) => warn!(%reason, "forecast response rejected"),
    }
    result
}

fn validate_inner(response: RawForecastResponse) -> Result<ValidatedForecast, IncompleteData> {
    let RawDailyData {
        dates,
        weather_codes,
        temp_min,
        temp_max,
        pressure,
        sunshine_duration,
    } = response.daily.ok_or(IncompleteData::MissingDaily)?;

    let dates = dates
        .filter(|d| !d.is_empty())
        .ok_or(IncompleteData::MissingDates)?;

    let expected = dates.len().min(FORECAST_DAYS);

    let weather_codes = require(weather_codes, Series::WeatherCodes, expected)?;
    let temp_min = require(temp_min, Series::TempMin, expected)?;
    let temp_max = require(temp_max, Series::TempMax, expected)?;
    let sunshine_duration = require(sunshine_duration, Series::SunshineDuration, expected)?;
    let pressure = require(pressure, Series::Pressure, expected)?;

    if dates.len() < FORECAST_DAYS {
        return Err(IncompleteData::TooFewDays {
            found: dates.len(),
            required: FORECAST_DAYS,
        });
    }

    let dates = non_null(dates, Series::Dates)?;

    let days = assemble_days(&dates, &weather_codes, &temp_min, &temp_max, &sunshine_duration);

    Ok(ValidatedForecast {
        days,
        weather_codes,
        temp_min,
        temp_max,
        pressure,
        sunshine_duration,
    })
}

fn require<T>(
    values: Option<Vec<Option<T>>>,
    series: Series,
    expected: usize,
) -> Result<Vec<T>, IncompleteData> {
    let found = values.as_ref().map_or(0, Vec::len);
    match values {
        Some(values) if values.len() >= expected => non_null(values, series),
        _ => Err(IncompleteData::ShortSeries {
            series,
            expected,
            found,
        }),
    }
}

/// The weekly summary reads every element, so a gap anywhere is rejected.
fn non_null<T>(values: Vec<Option<T>>, series: Series) -> Result<Vec<T>, IncompleteData> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| value.ok_or(IncompleteData::NullValue { series, index }))
        .collect()
}

fn assemble_days(
    dates: &[NaiveDate],
    weather_codes: &[i32],
    temp_min: &[f64],
    temp_max: &[f64],
    sunshine_duration: &[f64],
) -> Vec<DayRecord> {
    dates
        .iter()
        .zip(weather_codes)
        .zip(temp_min.iter().zip(temp_max))
        .zip(sunshine_duration)
        .map(|(((date, code), (min, max)), sunshine)| DayRecord {
            date: *date,
            weather_code: *code,
            temp_min: *min,
            temp_max: *max,
            sunshine_duration: *sunshine,
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    fn present<T>(values: Vec<T>) -> Option<Vec<Option<T>>> {
        Some(values.into_iter().map(Some).collect())
    }

    pub(crate) fn week_of_data() -> RawDailyData {
        let start = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        RawDailyData {
            dates: present(start.iter_days().take(7).collect()),
            weather_codes: present(vec![0, 1, 2, 61, 63, 80, 95]),
            temp_min: present(vec![10.0, 11.0, 9.5, 8.0, 7.0, 12.0, 13.0]),
            temp_max: present(vec![20.0, 19.0, 18.0, 21.0, 23.0, 22.0, 24.0]),
            pressure: present(vec![1012.0, 1010.0, 1008.0, 1005.0, 1007.0, 1009.0, 1011.0]),
            sunshine_duration: present(vec![3600.0, 1800.0, 0.0, 5400.0, 3600.0, 7200.0, 3600.0]),
        }
    }

    fn response(daily: RawDailyData) -> RawForecastResponse {
        RawForecastResponse { daily: Some(daily) }
    }

    #[test]
    fn accepts_full_week_and_aligns_days() {
        let validated = validate(response(week_of_data())).expect("valid week");

        assert_eq!(validated.days.len(), FORECAST_DAYS);
        let fourth = validated.days[3];
        assert_eq!(fourth.date, NaiveDate::from_ymd_opt(2024, 1, 18).unwrap());
        assert_eq!(fourth.weather_code, 61);
        assert_eq!(fourth.temp_min, 8.0);
        assert_eq!(fourth.temp_max, 21.0);
        assert_eq!(fourth.sunshine_duration, 5400.0);
        assert_eq!(validated.pressure[3], 1005.0);
    }

    #[test]
    fn rejects_missing_daily_block() {
        let err = validate(RawForecastResponse::default()).unwrap_err();
        assert_eq!(err, IncompleteData::MissingDaily);
    }

    #[test]
    fn rejects_missing_or_empty_dates() {
        let mut daily = week_of_data();
        daily.dates = None;
        assert_eq!(validate(response(daily)).unwrap_err(), IncompleteData::MissingDates);

        let mut daily = week_of_data();
        daily.dates = Some(Vec::new());
        assert_eq!(validate(response(daily)).unwrap_err(), IncompleteData::MissingDates);
    }

    #[test]
    fn series_are_checked_in_order() {
        let mut daily = week_of_data();
        daily.temp_max = None;
        daily.pressure = present(vec![1000.0]);

        let err = validate(response(daily)).unwrap_err();
        assert_eq!(
            err,
            IncompleteData::ShortSeries {
                series: Series::TempMax,
                expected: 7,
                found: 0,
            }
        );
    }

    #[test]
    fn rejects_each_short_series() {
        let cases: [(Series, fn(&mut RawDailyData)); 5] = [
            (Series::WeatherCodes, |d| d.weather_codes = present(vec![0; 6])),
            (Series::TempMin, |d| d.temp_min = present(vec![0.0; 6])),
            (Series::TempMax, |d| d.temp_max = present(vec![0.0; 6])),
            (Series::SunshineDuration, |d| d.sunshine_duration = present(vec![0.0; 6])),
            (Series::Pressure, |d| d.pressure = present(vec![0.0; 6])),
        ];

        for (series, shorten) in cases {
            let mut daily = week_of_data();
            shorten(&mut daily);
            let err = validate(response(daily)).unwrap_err();
            assert_eq!(
                err,
                IncompleteData::ShortSeries {
                    series,
                    expected: 7,
                    found: 6,
                }
            );
        }
    }

    #[test]
    fn rejects_null_values_anywhere_in_a_series() {
        let mut daily = week_of_data();
        daily.pressure.as_mut().unwrap()[6] = None;
        assert_eq!(
            validate(response(daily)).unwrap_err(),
            IncompleteData::NullValue {
                series: Series::Pressure,
                index: 6,
            }
        );

        let mut daily = week_of_data();
        daily.weather_codes.as_mut().unwrap().push(None);
        assert_eq!(
            validate(response(daily)).unwrap_err(),
            IncompleteData::NullValue {
                series: Series::WeatherCodes,
                index: 7,
            }
        );

        let mut daily = week_of_data();
        daily.dates.as_mut().unwrap()[0] = None;
        assert_eq!(
            validate(response(daily)).unwrap_err(),
            IncompleteData::NullValue {
                series: Series::Dates,
                index: 0,
            }
        );
    }

    #[test]
    fn rejects_fewer_than_seven_days() {
        let mut daily = week_of_data();
        daily.dates.as_mut().unwrap().truncate(5);
        daily.weather_codes.as_mut().unwrap().truncate(5);
        daily.temp_min.as_mut().unwrap().truncate(5);
        daily.temp_max.as_mut().unwrap().truncate(5);
        daily.pressure.as_mut().unwrap().truncate(5);
        daily.sunshine_duration.as_mut().unwrap().truncate(5);

        let err = validate(response(daily)).unwrap_err();
        assert_eq!(err, IncompleteData::TooFewDays { found: 5, required: 7 });
    }

    #[test]
    fn keeps_full_series_beyond_the_horizon() {
        let mut daily = week_of_data();
        daily.dates.as_mut().unwrap().push(NaiveDate::from_ymd_opt(2024, 1, 22));
        daily.temp_min.as_mut().unwrap().push(Some(-4.0));
        daily.weather_codes.as_mut().unwrap().push(Some(3));
        daily.temp_max.as_mut().unwrap().push(Some(2.0));
        daily.pressure.as_mut().unwrap().push(Some(1000.0));
        daily.sunshine_duration.as_mut().unwrap().push(Some(0.0));

        let validated = validate(response(daily)).expect("eight days are fine");
        assert_eq!(validated.days.len(), 8);
        assert_eq!(validated.temp_min.len(), 8);
    }
}

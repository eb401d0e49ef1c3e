//! Daily summaries of the provider's 3-hour forecast series

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};

use crate::models::{ForecastDay, WeatherCategory, round_half_up};

use super::classifier;

/// Upper bound on the days returned for one city
pub const MAX_FORECAST_DAYS: usize = 5;

/// One entry of the provider's time series
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastReading {
    pub timestamp: DateTime<Utc>,
    /// Temperature in °F
    pub temperature: f64,
    pub category: WeatherCategory,
    pub description: String,
}

/// Group readings by local calendar day and summarize each day.
///
/// Days keep the order in which they first appear in `readings`. The local
/// day is taken at `utc_offset_seconds`; an out-of-range offset falls back
/// to UTC.
#[must_use]
pub fn summarize_days(readings: &[ForecastReading], utc_offset_seconds: i32) -> Vec<ForecastDay> {
    let offset = FixedOffset::east_opt(utc_offset_seconds).unwrap_or_else(|| Utc.fix());

    let mut days: Vec<(NaiveDate, Vec<&ForecastReading>)> = Vec::new();
    for reading in readings {
        let date = reading.timestamp.with_timezone(&offset).date_naive();
        match days.iter_mut().find(|(day, _)| *day == date) {
            Some((_, entries)) => entries.push(reading),
            None => days.push((date, vec![reading])),
        }
    }

    days.into_iter()
        .take(MAX_FORECAST_DAYS)
        .filter_map(|(date, entries)| summarize_day(date, &entries))
        .collect()
}

fn summarize_day(date: NaiveDate, entries: &[&ForecastReading]) -> Option<ForecastDay> {
    let high = entries
        .iter()
        .map(|r| r.temperature)
        .fold(f64::NEG_INFINITY, f64::max);
    let low = entries
        .iter()
        .map(|r| r.temperature)
        .fold(f64::INFINITY, f64::min);

    let category = modal(entries.iter().map(|r| &r.category))?.clone();
    let description = modal(entries.iter().map(|r| r.description.as_str()))?.to_string();
    let icon = classifier::icon(&category, &description);

    Some(ForecastDay {
        date,
        day_name: date.format("%a").to_string(),
        high: round_half_up(high),
        low: round_half_up(low),
        category,
        description,
        icon,
    })
}

/// Most frequent value; on a tie the value seen first wins.
fn modal<T: PartialEq + Copy>(values: impl IntoIterator<Item = T>) -> Option<T> {
    let mut tallies: Vec<(T, usize)> = Vec::new();
    for value in values {
        match tallies.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => tallies.push((value, 1)),
        }
    }

    let mut best: Option<(T, usize)> = None;
    for (value, count) in tallies {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

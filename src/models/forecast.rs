//! Per-day forecast summary

use chrono::NaiveDate;
use serde::Serialize;

use super::WeatherCategory;

/// One calendar day of a multi-day forecast
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub date: NaiveDate,
    /// Short weekday name, e.g. "Mon"
    pub day_name: String,
    /// Rounded daily high in °F
    pub high: i64,
    /// Rounded daily low in °F
    pub low: i64,
    /// Most frequent condition of the day
    #[serde(rename = "condition")]
    pub category: WeatherCategory,
    /// Most frequent description of the day
    pub description: String,
    #[serde(rename = "emoji")]
    pub icon: &'static str,
}

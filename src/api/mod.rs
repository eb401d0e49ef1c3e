use std::sync::Arc;

use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::info;

use crate::{
    SunSeekerError,
    catalog::ReferenceCity,
    models::{ForecastDay, round_half_up},
    search::{CityReport, CitySearchService, MAX_DISTANCE_MILES, SearchOutcome, SearchReport},
    weather::WeatherGateway,
};

/// Minimum high temperature used when the request does not name a usable one
pub const DEFAULT_MIN_TEMP: i64 = 60;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn WeatherGateway>,
    pub catalog: &'static [ReferenceCity],
}

impl AppState {
    pub fn new(gateway: Arc<dyn WeatherGateway>, catalog: &'static [ReferenceCity]) -> Self {
        Self { gateway, catalog }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindSunnyCityRequest {
    #[serde(default)]
    pub zip_code: Option<Value>,
    #[serde(default)]
    pub min_temp: Option<Value>,
}

/// Weather fields shared by both successful response shapes
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCityWeather {
    pub weather: String,
    pub description: String,
    pub emoji: String,
    pub temperature: i64,
    pub high_temp: Option<i64>,
    pub distance: i64,
    pub zip_location: String,
    pub forecast: Vec<ForecastDay>,
}

impl ApiCityWeather {
    fn new(report: &CityReport, zip_location: &str) -> Self {
        let observation = &report.observation;
        Self {
            weather: observation.category.to_string(),
            description: observation.description.clone(),
            emoji: observation.icon.to_string(),
            temperature: round_half_up(observation.temperature),
            high_temp: observation.high_temp.map(round_half_up),
            distance: round_half_up(report.city.distance_miles),
            zip_location: zip_location.to_string(),
            forecast: report.forecast.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundResponse {
    pub success: bool,
    pub city: String,
    #[serde(flatten)]
    pub weather: ApiCityWeather,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackResponse {
    pub success: bool,
    pub message: String,
    pub closest_city: String,
    #[serde(flatten)]
    pub weather: ApiCityWeather,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum FindSunnyCityResponse {
    Found(FoundResponse),
    Fallback(FallbackResponse),
}

impl FindSunnyCityResponse {
    fn from_report(report: &SearchReport, min_temp: i64) -> Self {
        let zip_location = report.origin.name.as_str();
        match &report.outcome {
            SearchOutcome::Found(city) => Self::Found(FoundResponse {
                success: true,
                city: city.city.city.name.to_string(),
                weather: ApiCityWeather::new(city, zip_location),
            }),
            SearchOutcome::NotFound(city) => Self::Fallback(FallbackResponse {
                success: false,
                message: format!(
                    "No sunny cities found within {MAX_DISTANCE_MILES} miles (with high temp ≥{min_temp}°F)"
                ),
                closest_city: city.city.city.name.to_string(),
                weather: ApiCityWeather::new(city, zip_location),
            }),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/find-sunny-city", post(find_sunny_city))
        .route("/health", get(health))
        .with_state(state)
}

async fn find_sunny_city(
    State(state): State<AppState>,
    payload: Result<Json<FindSunnyCityRequest>, JsonRejection>,
) -> Result<Json<FindSunnyCityResponse>, SunSeekerError> {
    let Json(request) = payload.map_err(|rejection| SunSeekerError::invalid_request(rejection.body_text()))?;

    let zip_code = zip_code(request.zip_code.as_ref()).ok_or(SunSeekerError::MissingZipCode)?;
    let min_temp = min_temp(request.min_temp.as_ref());
    info!("Searching for sunny city near {zip_code} (high >= {min_temp}°F)");

    let report =
        CitySearchService::find_sunny_city(state.gateway.as_ref(), state.catalog, &zip_code, min_temp as f64)
            .await?;

    Ok(Json(FindSunnyCityResponse::from_report(&report, min_temp)))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Zip codes arrive as strings or bare numbers
fn zip_code(value: Option<&Value>) -> Option<String> {
    let zip = match value? {
        Value::String(zip) => zip.trim().to_string(),
        Value::Number(zip) => zip.to_string(),
        _ => return None,
    };
    (!zip.is_empty()).then_some(zip)
}

/// Read the requested minimum like JavaScript's `parseInt`, falling back to
/// [`DEFAULT_MIN_TEMP`] when no integer can be read.
fn min_temp(value: Option<&Value>) -> i64 {
    let parsed = match value {
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|n| n.is_finite()).map(|n| n.trunc() as i64)),
        Some(Value::String(text)) => parse_leading_integer(text),
        _ => None,
    };
    parsed.unwrap_or(DEFAULT_MIN_TEMP)
}

fn parse_leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

//! OpenWeatherMap implementation of [`WeatherGateway`]
//!
//! Three endpoints are used: zip geocoding, current weather and the 5-day /
//! 3-hour forecast. All temperatures are requested in °F.

use std::time::{Duration, Instant};

use anyhow::{Context, bail};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use super::WeatherGateway;
use super::forecast::{ForecastReading, summarize_days};
use crate::catalog::ReferenceCity;
use crate::config::WeatherConfig;
use crate::models::{Coordinate, ForecastDay, Location, WeatherCategory, WeatherObservation};
use crate::{Result, SunSeekerError};

const ZIP_ENDPOINT: &str = "/geo/1.0/zip";
const CURRENT_ENDPOINT: &str = "/data/2.5/weather";
const FORECAST_ENDPOINT: &str = "/data/2.5/forecast";

/// HTTP client for the OpenWeatherMap API
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenWeatherClient {
    /// Create a new client from the weather configuration
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("SunSeeker/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SunSeekerError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or(SunSeekerError::ProviderMisconfigured)
    }

    /// GET an endpoint and decode its JSON body. Errors never include the URL,
    /// which carries the API key.
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str, query: &str) -> anyhow::Result<T> {
        let url = format!(
            "{}{}?{}&appid={}",
            self.base_url,
            endpoint,
            query,
            urlencoding::encode(self.api_key()?)
        );
        let start_time = Instant::now();

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("Request to {endpoint} failed"))?;

        let status = response.status();
        if !status.is_success() {
            bail!("{endpoint} returned HTTP {status}");
        }

        let body = response
            .json::<T>()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("Failed to parse {endpoint} response"))?;

        let elapsed = start_time.elapsed();
        debug!(
            "{} answered in {:.3}s",
            endpoint,
            elapsed.as_secs_f64()
        );
        if elapsed.as_secs() > 5 {
            warn!(
                "Slow provider response from {}: {:.3}s",
                endpoint,
                elapsed.as_secs_f64()
            );
        }

        Ok(body)
    }

    async fn fetch_current(
        &self,
        city: &ReferenceCity,
        min_temp: f64,
    ) -> anyhow::Result<WeatherObservation> {
        let response: owm::CurrentResponse = self
            .get_json(CURRENT_ENDPOINT, &coordinate_query(city.coordinate))
            .await?;

        let condition = response
            .weather
            .into_iter()
            .next()
            .context("Response has no weather conditions")?;

        Ok(WeatherObservation::classify(
            city.name,
            WeatherCategory::from_label(&condition.main),
            condition.description,
            response.main.temp,
            response.main.temp_max,
            min_temp,
        ))
    }

    async fn fetch_forecast(&self, city: &ReferenceCity) -> anyhow::Result<Vec<ForecastDay>> {
        let response: owm::ForecastResponse = self
            .get_json(FORECAST_ENDPOINT, &coordinate_query(city.coordinate))
            .await?;

        let readings = response
            .list
            .into_iter()
            .map(ForecastReading::try_from)
            .collect::<anyhow::Result<Vec<_>>>()?;

        let utc_offset = response
            .city
            .and_then(|c| c.timezone)
            .and_then(|offset| i32::try_from(offset).ok())
            .unwrap_or(0);

        Ok(summarize_days(&readings, utc_offset))
    }
}

fn coordinate_query(coordinate: Coordinate) -> String {
    format!(
        "lat={}&lon={}&units=imperial",
        coordinate.latitude, coordinate.longitude
    )
}

#[async_trait]
impl WeatherGateway for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn resolve_zip(&self, zip_code: &str) -> Result<Location> {
        self.api_key()?;

        let query = format!("zip={},US", urlencoding::encode(zip_code));
        match self.get_json::<owm::ZipResponse>(ZIP_ENDPOINT, &query).await {
            Ok(response) => {
                let location = Location::from(response);
                info!(
                    "Zip {} resolved to {} ({})",
                    zip_code,
                    location.name,
                    location.coordinate.format_coordinates()
                );
                Ok(location)
            }
            Err(e) => {
                warn!("Zip lookup for {} failed: {:#}", zip_code, e);
                Err(SunSeekerError::location_not_found(zip_code))
            }
        }
    }

    #[instrument(skip(self, city), fields(city = city.name))]
    async fn current_weather(
        &self,
        city: &ReferenceCity,
        min_temp: f64,
    ) -> Option<WeatherObservation> {
        match self.fetch_current(city, min_temp).await {
            Ok(observation) => Some(observation),
            Err(e) => {
                warn!("Error fetching weather for {}: {:#}", city.name, e);
                None
            }
        }
    }

    #[instrument(skip(self, city), fields(city = city.name))]
    async fn forecast(&self, city: &ReferenceCity) -> Option<Vec<ForecastDay>> {
        match self.fetch_forecast(city).await {
            Ok(days) => Some(days),
            Err(e) => {
                warn!("Error fetching forecast for {}: {:#}", city.name, e);
                None
            }
        }
    }
}

/// OpenWeatherMap response structures
mod owm {
    use anyhow::Context;
    use chrono::DateTime;
    use serde::Deserialize;

    use crate::models::{Location, WeatherCategory};
    use crate::weather::forecast::ForecastReading;

    #[derive(Debug, Deserialize)]
    pub struct ZipResponse {
        pub name: String,
        pub lat: f64,
        pub lon: f64,
    }

    impl From<ZipResponse> for Location {
        fn from(response: ZipResponse) -> Self {
            Location::new(response.lat, response.lon, response.name)
        }
    }

    #[derive(Debug, Deserialize)]
    pub struct Condition {
        pub main: String,
        pub description: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct CurrentResponse {
        pub weather: Vec<Condition>,
        pub main: CurrentMain,
    }

    #[derive(Debug, Deserialize)]
    pub struct CurrentMain {
        pub temp: f64,
        pub temp_max: Option<f64>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub list: Vec<ForecastEntry>,
        pub city: Option<ForecastCity>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastCity {
        /// Shift in seconds from UTC
        pub timezone: Option<i64>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastEntry {
        /// Unix timestamp, seconds
        pub dt: i64,
        pub main: ForecastMain,
        pub weather: Vec<Condition>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastMain {
        pub temp: f64,
    }

    impl TryFrom<ForecastEntry> for ForecastReading {
        type Error = anyhow::Error;

        fn try_from(entry: ForecastEntry) -> anyhow::Result<Self> {
            let timestamp = DateTime::from_timestamp(entry.dt, 0)
                .with_context(|| format!("Invalid forecast timestamp {}", entry.dt))?;
            let condition = entry
                .weather
                .into_iter()
                .next()
                .context("Forecast entry has no weather conditions")?;

            Ok(ForecastReading {
                timestamp,
                temperature: entry.main.temp,
                category: WeatherCategory::from_label(&condition.main),
                description: condition.description,
            })
        }
    }
}

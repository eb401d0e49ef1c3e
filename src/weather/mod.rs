//! Weather provider access
//!
//! [`WeatherGateway`] is the seam between the city search and the network.
//! Only zip resolution reports errors; a failed probe or forecast is `None`
//! so the search can carry on with the next city.

use async_trait::async_trait;

use crate::Result;
use crate::catalog::ReferenceCity;
use crate::models::{ForecastDay, Location, WeatherObservation};

pub mod classifier;
pub mod forecast;
pub mod openweather;

pub use openweather::OpenWeatherClient;

#[async_trait]
pub trait WeatherGateway: Send + Sync {
    /// Resolve a US zip code to coordinates and a display name.
    ///
    /// Fails with `LocationNotFound` for any provider or transport problem and
    /// with `ProviderMisconfigured` when no API key is set.
    async fn resolve_zip(&self, zip_code: &str) -> Result<Location>;

    /// Current conditions for a city, classified against `min_temp`.
    async fn current_weather(
        &self,
        city: &ReferenceCity,
        min_temp: f64,
    ) -> Option<WeatherObservation>;

    /// Up to five daily summaries for a city.
    async fn forecast(&self, city: &ReferenceCity) -> Option<Vec<ForecastDay>>;
}

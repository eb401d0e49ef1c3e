//! `SunSeeker` - Find the nearest sunny city to a US zip code
//!
//! This library resolves a zip code, ranks nearby major cities by distance,
//! and probes their current weather nearest first until one is sunny and
//! warm enough.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod search;
pub mod telemetry;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use api::AppState;
pub use catalog::{MAJOR_CITIES, ReferenceCity};
pub use config::SunSeekerConfig;
pub use error::SunSeekerError;
pub use models::{Coordinate, ForecastDay, Location, WeatherCategory, WeatherObservation};
pub use search::{CitySearchService, RankedCity, SearchOutcome, SearchReport};
pub use weather::{OpenWeatherClient, WeatherGateway};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SunSeekerError>;

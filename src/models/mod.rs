//! Data models for the SunSeeker service
//!
//! This module contains the core domain models organized by concern:
//! - Location: coordinates and named places
//! - Weather: condition categories and current observations
//! - Forecast: per-day forecast summaries

pub mod forecast;
pub mod location;
pub mod weather;

// Re-export all public types for convenient access
pub use forecast::ForecastDay;
pub use location::{Coordinate, Location};
pub use weather::{WeatherCategory, WeatherObservation};

/// Round to the nearest integer with halves going toward positive infinity.
///
/// This is the rounding the web client has always displayed, so `-2.5`
/// becomes `-2` while `2.5` becomes `3`. Out-of-range values saturate and
/// NaN becomes 0.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

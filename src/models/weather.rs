//! Weather condition categories and current observations

use serde::{Serialize, Serializer};
use std::fmt;

use crate::weather::classifier;

/// Condition group reported by the provider (`weather[0].main`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherCategory {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Smoke,
    Haze,
    Dust,
    Fog,
    Sand,
    Ash,
    Squall,
    Tornado,
    /// Any label the provider sends that is not listed above
    Other(String),
}

impl WeatherCategory {
    /// Parse a provider label. Matching is exact, as the provider documents it.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "Clear" => Self::Clear,
            "Clouds" => Self::Clouds,
            "Rain" => Self::Rain,
            "Drizzle" => Self::Drizzle,
            "Thunderstorm" => Self::Thunderstorm,
            "Snow" => Self::Snow,
            "Mist" => Self::Mist,
            "Smoke" => Self::Smoke,
            "Haze" => Self::Haze,
            "Dust" => Self::Dust,
            "Fog" => Self::Fog,
            "Sand" => Self::Sand,
            "Ash" => Self::Ash,
            "Squall" => Self::Squall,
            "Tornado" => Self::Tornado,
            other => Self::Other(other.to_string()),
        }
    }

    /// The provider label for this category
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Rain => "Rain",
            Self::Drizzle => "Drizzle",
            Self::Thunderstorm => "Thunderstorm",
            Self::Snow => "Snow",
            Self::Mist => "Mist",
            Self::Smoke => "Smoke",
            Self::Haze => "Haze",
            Self::Dust => "Dust",
            Self::Fog => "Fog",
            Self::Sand => "Sand",
            Self::Ash => "Ash",
            Self::Squall => "Squall",
            Self::Tornado => "Tornado",
            Self::Other(label) => label,
        }
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for WeatherCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Current conditions for one catalog city, already classified
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    pub city: String,
    pub category: WeatherCategory,
    /// Free-text description, e.g. "scattered clouds"
    pub description: String,
    /// Current temperature in °F
    pub temperature: f64,
    /// Today's high in °F, when the provider reports one
    pub high_temp: Option<f64>,
    pub is_sunny: bool,
    pub icon: &'static str,
}

impl WeatherObservation {
    /// Build an observation and derive its sunniness verdict and icon.
    ///
    /// Without a reported high the temperature gate cannot pass, so the
    /// observation is never sunny.
    #[must_use]
    pub fn classify(
        city: impl Into<String>,
        category: WeatherCategory,
        description: impl Into<String>,
        temperature: f64,
        high_temp: Option<f64>,
        min_temp: f64,
    ) -> Self {
        let description = description.into();
        let is_sunny = high_temp
            .is_some_and(|high| classifier::is_sunny(&category, &description, high, min_temp));
        let icon = classifier::icon(&category, &description);

        Self {
            city: city.into(),
            category,
            description,
            temperature,
            high_temp,
            is_sunny,
            icon,
        }
    }
}

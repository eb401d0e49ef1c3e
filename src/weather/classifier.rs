//! Sunniness verdict and display icon for a condition report

use crate::models::WeatherCategory;

/// Cloud descriptions that still count as sunny
const PARTLY_CLOUDY: [&str; 2] = ["few clouds", "scattered clouds"];

const DEFAULT_ICON: &str = "🌤️";

/// Whether a condition report counts as sunny for the given minimum high.
///
/// Clear skies always qualify on sky condition, clouds only when the
/// description is "few" or "scattered". The high temperature gate applies to
/// both.
#[must_use]
pub fn is_sunny(
    category: &WeatherCategory,
    description: &str,
    high_temp: f64,
    min_temp: f64,
) -> bool {
    let description = description.to_lowercase();
    let sunny_sky = match category {
        WeatherCategory::Clear => true,
        WeatherCategory::Clouds => PARTLY_CLOUDY
            .iter()
            .any(|pattern| description.contains(pattern)),
        _ => false,
    };

    sunny_sky && high_temp >= min_temp
}

/// Display icon for a condition report. Never fails.
#[must_use]
pub fn icon(category: &WeatherCategory, description: &str) -> &'static str {
    let description = description.to_lowercase();
    match category {
        WeatherCategory::Clear => "☀️",
        WeatherCategory::Clouds if description.contains("few clouds") => "🌤️",
        WeatherCategory::Clouds if description.contains("scattered clouds") => "⛅",
        WeatherCategory::Clouds => "☁️",
        WeatherCategory::Rain
            if description.contains("light") || description.contains("drizzle") =>
        {
            "🌦️"
        }
        WeatherCategory::Rain => "🌧️",
        WeatherCategory::Thunderstorm => "⛈️",
        WeatherCategory::Snow => "❄️",
        WeatherCategory::Mist | WeatherCategory::Fog | WeatherCategory::Haze => "🌫️",
        WeatherCategory::Dust | WeatherCategory::Sand | WeatherCategory::Tornado => "🌪️",
        WeatherCategory::Squall => "💨",
        WeatherCategory::Drizzle
        | WeatherCategory::Smoke
        | WeatherCategory::Ash
        | WeatherCategory::Other(_) => DEFAULT_ICON,
    }
}

//! Configuration management for the SunSeeker service
//!
//! Settings come from environment variables (a `.env` file is loaded by the
//! binary before this runs) and are deserialized with serde defaults. Every
//! setting has a default except the provider API key.

use crate::{Result, SunSeekerError};
use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Environment variables as the `config` crate reports them (lowercased),
/// and the setting each one fills
const ENV_KEYS: [(&str, &str); 8] = [
    ("openweather_api_key", "weather.api_key"),
    ("openweather_base_url", "weather.base_url"),
    ("sunseeker_request_timeout_seconds", "weather.timeout_seconds"),
    ("port", "server.port"),
    ("public_url", "server.public_url"),
    ("sunseeker_static_dir", "server.static_dir"),
    ("sunseeker_log_level", "logging.level"),
    ("sunseeker_log_format", "logging.format"),
];

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SunSeekerConfig {
    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Weather provider settings
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key
    pub api_key: Option<String>,
    /// Base URL for the provider
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Per-call timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u32,
}

/// HTTP server settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Externally reachable base URL, when behind a proxy
    pub public_url: Option<String>,
    /// Serve the built client bundle alongside the API
    #[serde(default)]
    pub production: bool,
    /// Directory holding the built client bundle
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Logging settings
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_weather_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_weather_timeout() -> u32 {
    10
}

fn default_port() -> u16 {
    3001
}

fn default_static_dir() -> String {
    "public".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            timeout_seconds: default_weather_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            public_url: None,
            production: false,
            static_dir: default_static_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ServerConfig {
    /// The URL clients should use to reach this server
    #[must_use]
    pub fn public_url(&self) -> String {
        self.public_url
            .clone()
            .unwrap_or_else(|| format!("http://localhost:{}", self.port))
    }
}

impl SunSeekerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_environment(Environment::default())
    }

    fn from_environment(environment: Environment) -> Result<Self> {
        let env = Config::builder()
            .add_source(environment)
            .build()
            .map_err(config_error)?;

        // Blank values count as unset
        let value = |variable: &str| {
            env.get_string(variable)
                .ok()
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut builder = Config::builder();
        for (variable, key) in ENV_KEYS {
            builder = builder
                .set_override_option(key, value(variable))
                .map_err(config_error)?;
        }

        let production = value("sunseeker_env")
            .or_else(|| value("node_env"))
            .is_some_and(|mode| mode.eq_ignore_ascii_case("production"));
        builder = builder
            .set_override("server.production", production)
            .map_err(config_error)?;

        let mut config: SunSeekerConfig = builder
            .build()
            .map_err(config_error)?
            .try_deserialize()
            .map_err(config_error)?;

        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Lowercase the enumerated string settings
    pub fn normalize(&mut self) {
        self.logging.level.make_ascii_lowercase();
        self.logging.format.make_ascii_lowercase();
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// The key itself is optional at startup; requests fail without it
    pub fn validate_api_key(&self) -> Result<()> {
        if let Some(api_key) = &self.weather.api_key {
            if api_key.trim().is_empty() {
                return Err(SunSeekerError::config(
                    "Weather API key cannot be empty if provided. Either remove it or provide a valid key.",
                ));
            }
        }

        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.weather.timeout_seconds == 0 {
            return Err(SunSeekerError::config(
                "Weather API timeout must be at least 1 second",
            ));
        }

        if self.weather.timeout_seconds > 300 {
            return Err(SunSeekerError::config(
                "Weather API timeout cannot exceed 300 seconds",
            ));
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(SunSeekerError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            )));
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(SunSeekerError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            )));
        }

        if !self.weather.base_url.starts_with("http://")
            && !self.weather.base_url.starts_with("https://")
        {
            return Err(SunSeekerError::config(
                "Weather API base URL must be a valid HTTP or HTTPS URL",
            ));
        }

        Ok(())
    }
}

fn config_error(err: ConfigError) -> SunSeekerError {
    SunSeekerError::config(err.to_string())
}

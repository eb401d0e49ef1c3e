//! Error types and handling for the SunSeeker service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Main error type for the SunSeeker service
#[derive(Error, Debug)]
pub enum SunSeekerError {
    /// The request did not name a zip code
    #[error("Zip code is required")]
    MissingZipCode,

    /// The request body could not be read as JSON
    #[error("Invalid request body: {message}")]
    InvalidRequest { message: String },

    /// The provider could not turn the zip code into coordinates
    #[error("Could not find location for zip code {zip_code}")]
    LocationNotFound { zip_code: String },

    /// No catalog city lies inside the search radius
    #[error("No major cities found within 1000 miles of this zip code")]
    NoCitiesInRange,

    /// Every weather probe in range failed
    #[error("Could not retrieve weather data for any nearby cities")]
    AllProbesFailed,

    /// No provider API key is configured
    #[error("OPENWEATHER_API_KEY not configured")]
    ProviderMisconfigured,

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Anything else, e.g. a handler that panicked
    #[error("{message}")]
    Unexpected { message: String },
}

impl SunSeekerError {
    /// Create a new invalid request error
    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create a new location lookup error
    pub fn location_not_found<S: Into<String>>(zip_code: S) -> Self {
        Self::LocationNotFound {
            zip_code: zip_code.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new catch-all error
    pub fn unexpected<S: Into<String>>(message: S) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// HTTP status reported for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingZipCode | Self::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NoCitiesInRange => StatusCode::NOT_FOUND,
            Self::LocationNotFound { .. }
            | Self::AllProbesFailed
            | Self::ProviderMisconfigured
            | Self::Config { .. }
            | Self::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SunSeekerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::info!(error = %self, status = status.as_u16(), "Request rejected");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

use std::sync::Arc;

use anyhow::{Context, Result};
use sunseeker::{AppState, MAJOR_CITIES, OpenWeatherClient, SunSeekerConfig, VERSION, telemetry, web};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = SunSeekerConfig::from_env().context("Failed to load configuration")?;
    telemetry::init(&config.logging)?;

    tracing::info!("SunSeeker {VERSION} starting");
    if config.weather.api_key.is_none() {
        tracing::warn!("OPENWEATHER_API_KEY is not set; searches will fail until it is configured");
    }

    let client = OpenWeatherClient::new(&config.weather).context("Failed to build weather client")?;
    tracing::info!("Loaded {} reference cities", MAJOR_CITIES.len());

    let state = AppState::new(Arc::new(client), MAJOR_CITIES);
    web::run(&config, state).await
}

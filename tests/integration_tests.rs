//! End-to-end tests for the SunSeeker HTTP API

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use chrono::NaiveDate;
use serde_json::{Value, json};
use sunseeker::{
    AppState, ForecastDay, Location, ReferenceCity, SunSeekerError, WeatherCategory,
    SunSeekerConfig, WeatherGateway, WeatherObservation, config::ServerConfig, web,
};
use tower::ServiceExt;

/// Due north of the origin at roughly 10 and 50 miles, plus one far outside
/// the search radius
static CATALOG: [ReferenceCity; 3] = [
    ReferenceCity::new("Anchorage", 61.2181, -149.9003),
    ReferenceCity::new("Farville", 40.7236, -75.0),
    ReferenceCity::new("Nearby", 40.1447, -75.0),
];

type Conditions = (WeatherCategory, &'static str, f64, Option<f64>);

#[derive(Default)]
struct StubGateway {
    zip_codes: HashMap<&'static str, Location>,
    weather: HashMap<&'static str, Conditions>,
    probes: Mutex<Vec<String>>,
}

impl StubGateway {
    fn new() -> Self {
        let mut gateway = Self::default();
        gateway
            .zip_codes
            .insert("19000", Location::new(40.0, -75.0, "Origin Township"));
        gateway
    }

    fn with(mut self, city: &'static str, conditions: Conditions) -> Self {
        self.weather.insert(city, conditions);
        self
    }
}

#[async_trait]
impl WeatherGateway for StubGateway {
    async fn resolve_zip(&self, zip_code: &str) -> sunseeker::Result<Location> {
        self.zip_codes
            .get(zip_code)
            .cloned()
            .ok_or_else(|| SunSeekerError::location_not_found(zip_code))
    }

    async fn current_weather(&self, city: &ReferenceCity, min_temp: f64) -> Option<WeatherObservation> {
        self.probes.lock().unwrap().push(city.name.to_string());
        let (category, description, temperature, high) = self.weather.get(city.name)?.clone();
        Some(WeatherObservation::classify(
            city.name,
            category,
            description,
            temperature,
            high,
            min_temp,
        ))
    }

    async fn forecast(&self, _city: &ReferenceCity) -> Option<Vec<ForecastDay>> {
        let start = NaiveDate::from_ymd_opt(2024, 6, 3)?;
        Some(
            start
                .iter_days()
                .take(5)
                .map(|date| ForecastDay {
                    date,
                    day_name: date.format("%a").to_string(),
                    high: 78,
                    low: 61,
                    category: WeatherCategory::Clear,
                    description: "clear sky".to_string(),
                    icon: "☀️",
                })
                .collect(),
        )
    }
}

fn app(gateway: Arc<StubGateway>) -> Router {
    web::app(&SunSeekerConfig::default().server, AppState::new(gateway, &CATALOG))
}

/// Fails every call by panicking
struct PanickingGateway;

#[async_trait]
impl WeatherGateway for PanickingGateway {
    async fn resolve_zip(&self, _zip_code: &str) -> sunseeker::Result<Location> {
        panic!("provider client poisoned");
    }

    async fn current_weather(&self, _city: &ReferenceCity, _min_temp: f64) -> Option<WeatherObservation> {
        panic!("provider client poisoned");
    }

    async fn forecast(&self, _city: &ReferenceCity) -> Option<Vec<ForecastDay>> {
        panic!("provider client poisoned");
    }
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn production_app(bundle: &tempfile::TempDir) -> Router {
    let server = ServerConfig {
        production: true,
        static_dir: bundle.path().display().to_string(),
        ..SunSeekerConfig::default().server
    };
    web::app(&server, AppState::new(Arc::new(StubGateway::new()), &CATALOG))
}

fn client_bundle() -> tempfile::TempDir {
    let bundle = tempfile::tempdir().unwrap();
    std::fs::write(bundle.path().join("index.html"), "<html>app</html>").unwrap();
    std::fs::create_dir(bundle.path().join("assets")).unwrap();
    std::fs::write(bundle.path().join("assets/app.js"), "console.log('sun');").unwrap();
    bundle
}

async fn post_json(app: Router, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/find-sunny-city")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let response = app(Arc::new(StubGateway::new())).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_nearest_sunny_city_is_returned() {
    let gateway = Arc::new(
        StubGateway::new()
            .with("Nearby", (WeatherCategory::Rain, "moderate rain", 66.4, Some(70.0)))
            .with("Farville", (WeatherCategory::Clear, "clear sky", 74.5, Some(79.6))),
    );

    let (status, body) = post_json(app(gateway.clone()), r#"{"zipCode":"19000","minTemp":70}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["city"], "Farville");
    assert_eq!(body["weather"], "Clear");
    assert_eq!(body["description"], "clear sky");
    assert_eq!(body["emoji"], "☀️");
    assert_eq!(body["temperature"], 75);
    assert_eq!(body["highTemp"], 80);
    assert_eq!(body["distance"], 50);
    assert_eq!(body["zipLocation"], "Origin Township");
    assert!(body.get("message").is_none());

    let forecast = body["forecast"].as_array().unwrap();
    assert_eq!(forecast.len(), 5);
    assert_eq!(forecast[0]["date"], "2024-06-03");
    assert_eq!(forecast[0]["dayName"], "Mon");
    assert_eq!(forecast[0]["condition"], "Clear");

    let probes = gateway.probes.lock().unwrap().clone();
    assert_eq!(probes, ["Nearby", "Farville"]);
}

#[tokio::test]
async fn test_fallback_reports_closest_checked_city() {
    let gateway = Arc::new(
        StubGateway::new()
            .with("Nearby", (WeatherCategory::Clouds, "overcast clouds", 58.0, None))
            .with("Farville", (WeatherCategory::Clear, "clear sky", 61.0, Some(64.0))),
    );

    let (status, body) = post_json(app(gateway), r#"{"zipCode":"19000","minTemp":"65"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "No sunny cities found within 1000 miles (with high temp ≥65°F)"
    );
    assert_eq!(body["closestCity"], "Nearby");
    assert_eq!(body["weather"], "Clouds");
    assert_eq!(body["emoji"], "☁️");
    assert_eq!(body["highTemp"], Value::Null);
    assert_eq!(body["distance"], 10);
    assert!(body.get("city").is_none());
}

#[tokio::test]
async fn test_invalid_min_temp_uses_default() {
    let gateway = Arc::new(
        StubGateway::new()
            .with("Nearby", (WeatherCategory::Clear, "clear sky", 55.0, Some(59.0)))
            .with("Farville", (WeatherCategory::Clear, "clear sky", 57.0, Some(61.0))),
    );

    let (status, body) = post_json(app(gateway), r#"{"zipCode":19000,"minTemp":"balmy"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["city"], "Farville");
}

#[tokio::test]
async fn test_missing_zip_code() {
    let (status, body) = post_json(app(Arc::new(StubGateway::new())), r#"{"minTemp":70}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Zip code is required" }));
}

#[tokio::test]
async fn test_malformed_body() {
    let (status, body) = post_json(app(Arc::new(StubGateway::new())), "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_unknown_zip_code() {
    let (status, body) = post_json(app(Arc::new(StubGateway::new())), r#"{"zipCode":"99999"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": "Could not find location for zip code 99999" })
    );
}

#[tokio::test]
async fn test_no_cities_in_range() {
    let mut gateway = StubGateway::new();
    gateway
        .zip_codes
        .insert("96801", Location::new(21.3069, -157.8583, "Honolulu"));

    let (status, body) = post_json(app(Arc::new(gateway)), r#"{"zipCode":"96801"}"#).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "error": "No major cities found within 1000 miles of this zip code" })
    );
}

#[tokio::test]
async fn test_all_probes_failed() {
    let (status, body) = post_json(app(Arc::new(StubGateway::new())), r#"{"zipCode":"19000"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": "Could not retrieve weather data for any nearby cities" })
    );
}

#[tokio::test]
async fn test_handler_panic_is_json_error() {
    let app = web::app(
        &SunSeekerConfig::default().server,
        AppState::new(Arc::new(PanickingGateway), &CATALOG),
    );

    let (status, body) = post_json(app, r#"{"zipCode":"19000"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal server error" }));
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let padding = "x".repeat(32 * 1024);
    let body = format!(r#"{{"zipCode":"19000","padding":"{padding}"}}"#);

    let (status, body) = post_json(app(Arc::new(StubGateway::new())), &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_production_serves_client_routes_with_index() {
    let bundle = client_bundle();

    let (status, body) = get(production_app(&bundle), "/results/deep-link").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<html>app</html>");
}

#[tokio::test]
async fn test_production_serves_bundle_assets() {
    let bundle = client_bundle();

    let (status, body) = get(production_app(&bundle), "/assets/app.js").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "console.log('sun');");
}

#[tokio::test]
async fn test_production_keeps_api_routes() {
    let bundle = client_bundle();

    let (status, body) = get(production_app(&bundle), "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"status":"ok"}"#);
}

#[tokio::test]
async fn test_development_does_not_serve_bundle() {
    let (status, _) = get(app(Arc::new(StubGateway::new())), "/results/deep-link").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

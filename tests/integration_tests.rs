//! Integration tests for the Sahayta HTTP API
//!
//! The router runs in-process; both upstreams are wiremock servers.

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use sahayta::api::AppState;
use sahayta::config::{GeocodingConfig, WeatherConfig};
use sahayta::{GeocodeClient, WeatherClient, web};
use serde_json::Value;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_place(server: &MockServer, name: &str, lat: &str, lon: &str) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", name))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"lat": lat, "lon": lon, "display_name": name}
        ])))
        .mount(server)
        .await;
}

async fn geocoding_server() -> MockServer {
    let server = MockServer::start().await;
    mount_place(&server, "Mumbai", "19.0760", "72.8777").await;
    mount_place(&server, "Pune", "18.5204", "73.8567").await;
    // Anything else has no match
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;
    server
}

fn geocoder(server: &MockServer) -> GeocodeClient {
    GeocodeClient::new(&GeocodingConfig {
        base_url: format!("{}/search", server.uri()),
        user_agent: "SahaytaApp/1.0".to_string(),
        timeout_seconds: 2,
    })
    .unwrap()
}

fn weather_client(server: &MockServer) -> WeatherClient {
    WeatherClient::new(
        &WeatherConfig {
            api_key: Some("integration_api_key".to_string()),
            base_url: format!("{}/weather", server.uri()),
            timeout_seconds: 2,
        },
        "SahaytaApp/1.0",
    )
    .unwrap()
}

async fn get(state: AppState, uri: &str) -> (StatusCode, Value) {
    let response = web::app(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_route_plan_end_to_end() {
    let geo = geocoding_server().await;
    let state = AppState::new(geocoder(&geo), Err(sahayta::SahaytaError::config("no key")));

    let (status, body) = get(state, "/api/route?start=Mumbai&end=Pune").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["start"]["latitude"], 19.0760);
    assert_eq!(body["end"]["longitude"], 73.8567);
    let mid_lat = body["midpoint"]["latitude"].as_f64().unwrap();
    let mid_lon = body["midpoint"]["longitude"].as_f64().unwrap();
    assert!((mid_lat - 18.7982).abs() < 1e-4);
    assert!((mid_lon - 73.3672).abs() < 1e-4);
    assert_eq!(body["markers"].as_array().unwrap().len(), 2);
    assert_eq!(body["segment"].as_array().unwrap().len(), 2);
    assert_eq!(body["viewport"]["center"], body["midpoint"]);
}

#[tokio::test]
async fn test_route_unresolved_start() {
    let geo = geocoding_server().await;
    let state = AppState::new(geocoder(&geo), Err(sahayta::SahaytaError::config("no key")));

    let (status, body) = get(state, "/api/route?start=Zzzznotaplace&end=Pune").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["fields"], serde_json::json!(["start"]));
    assert!(body["error"].as_str().unwrap().contains("start"));
}

#[tokio::test]
async fn test_route_missing_input_makes_no_upstream_call() {
    let geo = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&geo)
        .await;
    let state = AppState::new(geocoder(&geo), Err(sahayta::SahaytaError::config("no key")));

    let (status, body) = get(state, "/api/route?start=&end=Pune").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"], serde_json::json!(["start"]));
}

#[tokio::test]
async fn test_route_upstream_outage_reads_as_unresolved() {
    let geo = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&geo)
        .await;
    let state = AppState::new(geocoder(&geo), Err(sahayta::SahaytaError::config("no key")));

    let (status, body) = get(state, "/api/route?start=Mumbai&end=Pune").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["fields"], serde_json::json!(["start", "end"]));
}

#[tokio::test]
async fn test_locate_single_marker() {
    let geo = geocoding_server().await;
    let state = AppState::new(geocoder(&geo), Err(sahayta::SahaytaError::config("no key")));

    let (status, body) = get(state, "/api/locate?place=Pune").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["markers"].as_array().unwrap().len(), 1);
    assert_eq!(body["segment"], Value::Null);
    assert_eq!(body["viewport"]["center"], body["location"]);
}

#[tokio::test]
async fn test_weather_end_to_end() {
    let geo = geocoding_server().await;
    let weather = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "New Delhi"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "main": {"temp": 28.5, "humidity": 60},
            "wind": {"speed": 3.2},
            "weather": [{"description": "clear sky"}]
        })))
        .mount(&weather)
        .await;
    let state = AppState::new(geocoder(&geo), Ok(weather_client(&weather)));

    let (status, body) = get(state, "/api/weather?place=New%20Delhi").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["place"], "New Delhi");
    assert_eq!(body["temperature_celsius"], 28.5);
    assert_eq!(body["humidity_percent"], 60);
    assert_eq!(body["display"]["temperature"], "28.5°C");
    assert_eq!(body["display"]["wind"], "3.2 m/s");
    assert_eq!(body["display"]["condition"], "Clear sky");
}

#[tokio::test]
async fn test_weather_unknown_city() {
    let geo = geocoding_server().await;
    let weather = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&weather)
        .await;
    let state = AppState::new(geocoder(&geo), Ok(weather_client(&weather)));

    let (status, body) = get(state, "/api/weather?place=Zzzznotaplace").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("Zzzznotaplace"));
}

#[tokio::test]
async fn test_missing_weather_key_leaves_routes_working() {
    let geo = geocoding_server().await;
    let state = AppState::new(geocoder(&geo), Err(sahayta::SahaytaError::config("no key")));

    let (weather_status, body) = get(state.clone(), "/api/weather?place=Pune").await;
    assert_eq!(weather_status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].as_str().unwrap().contains("not configured"));

    let (route_status, _) = get(state, "/api/route?start=Mumbai&end=Pune").await;
    assert_eq!(route_status, StatusCode::OK);
}

#[tokio::test]
async fn test_health() {
    let geo = MockServer::start().await;
    let state = AppState::new(geocoder(&geo), Err(sahayta::SahaytaError::config("no key")));

    let response = web::app(state)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

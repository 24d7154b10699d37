use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::{LocationField, RouteError},
    geocode::GeocodeClient,
    models::{LocationView, PlaceName, RoutePlan, WeatherReading},
    routing::RouteAssembler,
    weather::WeatherClient,
    SahaytaError,
};

/// Everything the handlers need; passed explicitly, never global
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteAssembler<GeocodeClient>>,
    /// `Err` when the weather credential is missing; the route endpoints keep working
    pub weather: Arc<Result<WeatherClient, SahaytaError>>,
}

impl AppState {
    pub fn new(geocoder: GeocodeClient, weather: Result<WeatherClient, SahaytaError>) -> Self {
        Self {
            routes: Arc::new(RouteAssembler::new(geocoder)),
            weather: Arc::new(weather),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

#[derive(Debug, Deserialize)]
pub struct PlaceQuery {
    #[serde(default)]
    pub place: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

/// Weather reading plus the strings the dashboard cards show
#[derive(Debug, Serialize)]
pub struct ApiWeather {
    pub place: String,
    pub temperature_celsius: f64,
    pub humidity_percent: u8,
    pub wind_speed_mps: f64,
    pub condition_text: String,
    pub fetched_at: DateTime<Utc>,
    pub display: ApiWeatherDisplay,
}

#[derive(Debug, Serialize)]
pub struct ApiWeatherDisplay {
    pub temperature: String,
    pub humidity: String,
    pub wind: String,
    pub condition: String,
}

impl ApiWeather {
    fn new(place: &PlaceName, reading: WeatherReading) -> Self {
        let display = ApiWeatherDisplay {
            temperature: reading.format_temperature(),
            humidity: reading.format_humidity(),
            wind: reading.format_wind(),
            condition: reading.condition_display(),
        };
        Self {
            place: place.to_string(),
            temperature_celsius: reading.temperature_celsius,
            humidity_percent: reading.humidity_percent,
            wind_speed_mps: reading.wind_speed_mps,
            condition_text: reading.condition_text,
            fetched_at: reading.fetched_at,
            display,
        }
    }
}

fn error_response(status: StatusCode, error: String, fields: &[LocationField]) -> Response {
    let body = ApiError {
        error,
        fields: fields.iter().map(ToString::to_string).collect(),
    };
    (status, Json(body)).into_response()
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let status = match self {
            RouteError::MissingInput { .. } => StatusCode::BAD_REQUEST,
            RouteError::UnresolvedLocation { .. } => StatusCode::NOT_FOUND,
        };
        error_response(status, self.user_message(), self.fields())
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/route", get(get_route))
        .route("/locate", get(get_locate))
        .route("/weather", get(get_weather))
        .with_state(state)
}

async fn get_route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RoutePlan>, RouteError> {
    let plan = state.routes.plan(&query.start, &query.end).await?;
    Ok(Json(plan))
}

async fn get_locate(
    State(state): State<AppState>,
    Query(query): Query<PlaceQuery>,
) -> Result<Json<LocationView>, RouteError> {
    let view = state.routes.locate(&query.place).await?;
    Ok(Json(view))
}

async fn get_weather(State(state): State<AppState>, Query(query): Query<PlaceQuery>) -> Response {
    let client = match state.weather.as_ref() {
        Ok(client) => client,
        Err(e) => return error_response(StatusCode::SERVICE_UNAVAILABLE, e.user_message(), &[]),
    };

    let Ok(place) = PlaceName::parse(&query.place) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Please enter a city name.".to_string(),
            &[],
        );
    };

    match client.resolve(&place).await {
        Ok(reading) => Json(ApiWeather::new(&place, reading)).into_response(),
        Err(e) => error_response(StatusCode::NOT_FOUND, e.user_message(), &[]),
    }
}

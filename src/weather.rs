//! Current weather lookups against an OpenWeatherMap-style API

use chrono::Utc;
use reqwest::Client;
use tracing::{info, instrument, warn};

use crate::config::WeatherConfig;
use crate::error::{NotFound, NotFoundCause};
use crate::http;
use crate::models::{PlaceName, WeatherReading};

/// Current-weather client for an OpenWeatherMap-style API
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    /// Fails with a configuration error when no API key is configured
    pub fn new(config: &WeatherConfig, user_agent: &str) -> Result<Self, crate::SahaytaError> {
        let api_key = config.require_api_key()?.to_string();
        let client = http::build_client(config.timeout(), user_agent)?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key,
        })
    }

    fn current_url(&self, place: &PlaceName) -> String {
        format!(
            "{}?q={}&appid={}&units=metric",
            self.base_url,
            place.url_encoded(),
            urlencoding::encode(&self.api_key)
        )
    }

    /// Get current weather for a place name
    #[instrument(skip_all, fields(place = %place))]
    pub async fn resolve(&self, place: &PlaceName) -> Result<WeatherReading, NotFound> {
        let result = http::get_json::<openweather::CurrentResponse>(
            &self.client,
            &self.current_url(place),
        )
        .await
        .and_then(openweather::CurrentResponse::into_reading);

        match result {
            Ok(reading) => {
                info!(
                    "Current weather for '{}': {:.1}°C, {}",
                    place, reading.temperature_celsius, reading.condition_text
                );
                Ok(reading)
            }
            Err(cause) => {
                // The upstream answers 404 for unknown cities
                if cause == NotFoundCause::Status(404) {
                    info!("No weather data for '{}'", place);
                } else {
                    warn!("Weather lookup failed for '{}': {}", place, cause);
                }
                Err(NotFound::new(place.as_str(), cause))
            }
        }
    }
}

/// OpenWeatherMap response structures
mod openweather {
    use super::{NotFoundCause, Utc, WeatherReading};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct CurrentResponse {
        pub main: MainBlock,
        pub wind: WindBlock,
        pub weather: Vec<Condition>,
    }

    #[derive(Debug, Deserialize)]
    pub struct MainBlock {
        pub temp: f64,
        pub humidity: u8,
    }

    #[derive(Debug, Deserialize)]
    pub struct WindBlock {
        pub speed: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct Condition {
        pub description: String,
    }

    impl CurrentResponse {
        pub fn into_reading(self) -> Result<WeatherReading, NotFoundCause> {
            let condition = self
                .weather
                .into_iter()
                .next()
                .ok_or_else(|| NotFoundCause::Malformed("empty weather list".to_string()))?;

            Ok(WeatherReading {
                temperature_celsius: self.main.temp,
                humidity_percent: self.main.humidity,
                wind_speed_mps: self.wind.speed,
                condition_text: condition.description,
                fetched_at: Utc::now(),
            })
        }
    }
}

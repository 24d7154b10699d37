//! Place-name geocoding against a Nominatim-style search API

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::config::GeocodingConfig;
use crate::error::{NotFound, NotFoundCause};
use crate::http;
use crate::models::{Coordinate, PlaceName};

/// Anything that can turn a place name into a coordinate
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn resolve(&self, place: &PlaceName) -> Result<Coordinate, NotFound>;
}

/// One match from the search endpoint; coordinates arrive as decimal strings
#[derive(Debug, Deserialize)]
struct SearchMatch {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

impl SearchMatch {
    fn to_coordinate(&self) -> Result<Coordinate, NotFoundCause> {
        let lat = self
            .lat
            .trim()
            .parse::<f64>()
            .map_err(|e| NotFoundCause::Malformed(format!("lat '{}': {e}", self.lat)))?;
        let lon = self
            .lon
            .trim()
            .parse::<f64>()
            .map_err(|e| NotFoundCause::Malformed(format!("lon '{}': {e}", self.lon)))?;
        Coordinate::new(lat, lon).map_err(|e| NotFoundCause::Malformed(e.to_string()))
    }
}

/// Geocoding client; one request per lookup, at most one match requested
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
}

impl GeocodeClient {
    pub fn new(config: &GeocodingConfig) -> Result<Self, crate::SahaytaError> {
        let client = http::build_client(config.timeout(), &config.user_agent)?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn search_url(&self, place: &PlaceName) -> String {
        format!(
            "{}?q={}&format=json&limit=1",
            self.base_url,
            place.url_encoded()
        )
    }

    async fn lookup(&self, place: &PlaceName) -> Result<Coordinate, NotFoundCause> {
        let matches: Vec<SearchMatch> = http::get_json(&self.client, &self.search_url(place)).await?;
        let first = matches.first().ok_or(NotFoundCause::NoMatch)?;
        let coordinate = first.to_coordinate()?;

        debug!(
            "Found location: {} ({})",
            first.display_name.as_deref().unwrap_or(place.as_str()),
            coordinate.format_coordinates()
        );
        Ok(coordinate)
    }
}

#[async_trait]
impl Geocoder for GeocodeClient {
    #[instrument(skip_all, fields(place = %place))]
    async fn resolve(&self, place: &PlaceName) -> Result<Coordinate, NotFound> {
        match self.lookup(place).await {
            Ok(coordinate) => Ok(coordinate),
            Err(cause) => {
                if cause.is_upstream_failure() {
                    warn!("Geocoding failed for '{}': {}", place, cause);
                } else {
                    info!("No geocoding results for '{}'", place);
                }
                Err(NotFound::new(place.as_str(), cause))
            }
        }
    }
}

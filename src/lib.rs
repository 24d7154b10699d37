//! Sahayta - location resolution, current weather and route geometry
//!
//! This library resolves free-text place names to coordinates, looks up
//! current weather, and assembles straight-line route plans that a map
//! widget can render. A small axum API exposes all three.

pub mod api;
pub mod config;
pub mod error;
pub mod geocode;
pub mod http;
pub mod logging;
pub mod models;
pub mod routing;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::SahaytaConfig;
pub use error::{LocationField, NotFound, NotFoundCause, RouteError, SahaytaError};
pub use geocode::{GeocodeClient, Geocoder};
pub use models::{Coordinate, LocationView, PlaceName, RoutePlan, ViewportHint, WeatherReading};
pub use routing::RouteAssembler;
pub use weather::WeatherClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

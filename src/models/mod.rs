//! Data models for the Sahayta core
//!
//! This module contains the request-scoped value types organized by concern:
//! - Location: coordinates and validated place names
//! - Weather: current weather readings
//! - Route: route plans and single-location views for the map widget

pub mod location;
pub mod route;
pub mod weather;

// Re-export all public types for convenient access
pub use location::{Coordinate, EmptyPlaceName, InvalidCoordinate, PlaceName};
pub use route::{LocationView, RoutePlan, ViewportHint};
pub use weather::WeatherReading;

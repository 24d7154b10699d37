//! Location model for geographic coordinates and place names

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Rejected coordinate values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidCoordinate {
    #[error("Latitude must be between -90 and 90, got: {0}")]
    Latitude(f64),
    #[error("Longitude must be between -180 and 180, got: {0}")]
    Longitude(f64),
}

/// A point on the globe in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting out-of-range or non-finite values
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        // NaN fails `contains`, so it is rejected here as well
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidCoordinate::Latitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinate::Longitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in decimal degrees
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Arithmetic mean of both axes.
    ///
    /// Not a geodesic midpoint; good enough to center a map view.
    #[must_use]
    pub fn midpoint(&self, other: &Coordinate) -> Coordinate {
        // The mean of two in-range values stays in range
        Coordinate {
            latitude: (self.latitude + other.latitude) / 2.0,
            longitude: (self.longitude + other.longitude) / 2.0,
        }
    }

    /// Great-circle distance in kilometers
    #[must_use]
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        haversine::distance(
            haversine::Location {
                latitude: self.latitude,
                longitude: self.longitude,
            },
            haversine::Location {
                latitude: other.latitude,
                longitude: other.longitude,
            },
            haversine::Units::Kilometers,
        )
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lat: {:.4}, Lon: {:.4}", self.latitude, self.longitude)
    }
}

/// Returned when a place name is blank
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Location cannot be empty")]
pub struct EmptyPlaceName;

/// A free-text place name, trimmed and guaranteed non-empty
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceName(String);

impl PlaceName {
    pub fn parse(input: &str) -> Result<Self, EmptyPlaceName> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(EmptyPlaceName);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encoded form for query strings
    #[must_use]
    pub fn url_encoded(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl fmt::Display for PlaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(90.0, 180.0)]
    #[case(-90.0, -180.0)]
    #[case(0.0, 0.0)]
    #[case(19.076, 72.8777)]
    fn test_coordinate_accepts_valid_range(#[case] lat: f64, #[case] lon: f64) {
        let coordinate = Coordinate::new(lat, lon).unwrap();
        assert_eq!(coordinate.latitude(), lat);
        assert_eq!(coordinate.longitude(), lon);
    }

    #[rstest]
    #[case(90.5, 0.0)]
    #[case(-91.0, 0.0)]
    #[case(f64::NAN, 0.0)]
    fn test_coordinate_rejects_bad_latitude(#[case] lat: f64, #[case] lon: f64) {
        assert!(matches!(
            Coordinate::new(lat, lon),
            Err(InvalidCoordinate::Latitude(_))
        ));
    }

    #[rstest]
    #[case(0.0, 180.1)]
    #[case(0.0, -181.0)]
    #[case(0.0, f64::INFINITY)]
    fn test_coordinate_rejects_bad_longitude(#[case] lat: f64, #[case] lon: f64) {
        assert!(matches!(
            Coordinate::new(lat, lon),
            Err(InvalidCoordinate::Longitude(_))
        ));
    }

    #[test]
    fn test_midpoint_is_arithmetic_mean() {
        let mumbai = Coordinate::new(19.0760, 72.8777).unwrap();
        let pune = Coordinate::new(18.5204, 73.8567).unwrap();
        let mid = mumbai.midpoint(&pune);
        assert_eq!(mid.latitude(), (19.0760 + 18.5204) / 2.0);
        assert_eq!(mid.longitude(), (72.8777 + 73.8567) / 2.0);
        assert!((mid.latitude() - 18.7982).abs() < 1e-4);
        assert!((mid.longitude() - 73.3672).abs() < 1e-4);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let pune = Coordinate::new(18.5204, 73.8567).unwrap();
        assert_eq!(pune.distance_km(&pune), 0.0);
    }

    #[test]
    fn test_distance_mumbai_pune() {
        let mumbai = Coordinate::new(19.0760, 72.8777).unwrap();
        let pune = Coordinate::new(18.5204, 73.8567).unwrap();
        let km = mumbai.distance_km(&pune);
        assert!(km > 110.0 && km < 130.0, "unexpected distance {km}");
    }

    #[test]
    fn test_format_coordinates() {
        let coordinate = Coordinate::new(46.818_234, 8.227_456).unwrap();
        assert_eq!(coordinate.format_coordinates(), "46.8182, 8.2275");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn test_place_name_rejects_blank(#[case] input: &str) {
        assert_eq!(PlaceName::parse(input), Err(EmptyPlaceName));
    }

    #[test]
    fn test_place_name_trims_and_encodes() {
        let name = PlaceName::parse("  New Delhi ").unwrap();
        assert_eq!(name.as_str(), "New Delhi");
        assert_eq!(name.url_encoded(), "New%20Delhi");
    }
}

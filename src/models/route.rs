//! Route geometry handed to the map widget

use serde::Serialize;

use super::Coordinate;

/// Where a map widget should center its camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewportHint {
    pub center: Coordinate,
}

/// Geometric description of two resolved locations and the straight segment between them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub start: Coordinate,
    pub end: Coordinate,
    pub midpoint: Coordinate,
    /// Always `[start, end]`
    pub markers: Vec<Coordinate>,
    /// Always `(start, end)`
    pub segment: (Coordinate, Coordinate),
    pub viewport: ViewportHint,
    /// Great-circle length of the segment
    pub distance_km: f64,
}

impl RoutePlan {
    /// Build the plan for two resolved endpoints.
    ///
    /// Identical endpoints give a zero-length segment, which is a valid plan.
    /// Segments crossing the antimeridian are kept as-is.
    #[must_use]
    pub fn between(start: Coordinate, end: Coordinate) -> Self {
        let midpoint = start.midpoint(&end);
        Self {
            start,
            end,
            midpoint,
            markers: vec![start, end],
            segment: (start, end),
            viewport: ViewportHint { center: midpoint },
            distance_km: start.distance_km(&end),
        }
    }

    #[must_use]
    pub fn is_zero_length(&self) -> bool {
        self.start == self.end
    }
}

/// Single-location view: one marker, no segment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationView {
    pub location: Coordinate,
    pub markers: Vec<Coordinate>,
    pub segment: Option<(Coordinate, Coordinate)>,
    pub viewport: ViewportHint,
}

impl LocationView {
    #[must_use]
    pub fn at(location: Coordinate) -> Self {
        Self {
            location,
            markers: vec![location],
            segment: None,
            viewport: ViewportHint { center: location },
        }
    }
}

//! Two-point route planning
//!
//! Resolves both endpoints through a [`Geocoder`] and projects a straight
//! segment between them. No road network is involved.

use tracing::{debug, info, instrument};

use crate::error::{LocationField, RouteError};
use crate::geocode::Geocoder;
use crate::models::{LocationView, PlaceName, RoutePlan};

/// Builds route plans and single-location views from place names
#[derive(Debug, Clone)]
pub struct RouteAssembler<G> {
    geocoder: G,
}

impl<G: Geocoder> RouteAssembler<G> {
    pub fn new(geocoder: G) -> Self {
        Self { geocoder }
    }

    /// Plan a straight-line route between two place names.
    ///
    /// Both names are validated before any lookup. Both lookups run
    /// concurrently and both are checked, so the error names every failed field.
    #[instrument(skip(self))]
    pub async fn plan(&self, start_name: &str, end_name: &str) -> Result<RoutePlan, RouteError> {
        let (start, end) = match (PlaceName::parse(start_name), PlaceName::parse(end_name)) {
            (Ok(start), Ok(end)) => (start, end),
            (start, end) => {
                let fields = [(LocationField::Start, start.is_err()), (LocationField::End, end.is_err())]
                    .into_iter()
                    .filter_map(|(field, missing)| missing.then_some(field))
                    .collect();
                return Err(RouteError::MissingInput { fields });
            }
        };

        let (start_result, end_result) =
            futures::join!(self.geocoder.resolve(&start), self.geocoder.resolve(&end));

        let (start_coordinate, end_coordinate) = match (start_result, end_result) {
            (Ok(s), Ok(e)) => (s, e),
            (s, e) => {
                let fields = [(LocationField::Start, s.is_err()), (LocationField::End, e.is_err())]
                    .into_iter()
                    .filter_map(|(field, failed)| failed.then_some(field))
                    .collect();
                return Err(RouteError::UnresolvedLocation { fields });
            }
        };

        let plan = RoutePlan::between(start_coordinate, end_coordinate);
        info!(
            "Route {} -> {}: {:.1} km, centered at {}",
            start,
            end,
            plan.distance_km,
            plan.midpoint.format_coordinates()
        );
        Ok(plan)
    }

    /// Single-location view for the weather screen: one marker, no segment
    #[instrument(skip(self))]
    pub async fn locate(&self, name: &str) -> Result<LocationView, RouteError> {
        let place = PlaceName::parse(name).map_err(|_| RouteError::MissingInput {
            fields: vec![LocationField::Start],
        })?;

        let location = self.geocoder.resolve(&place).await.map_err(|e| {
            debug!("Lookup for single view failed: {}", e);
            RouteError::UnresolvedLocation {
                fields: vec![LocationField::Start],
            }
        })?;

        Ok(LocationView::at(location))
    }
}

//! Route planning orchestration
//!
//! Ties resolution, matrix construction, and tour solving together into
//! one pure, synchronous planning call per request.

use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::LocationCatalog;
use crate::distance::DistanceMatrix;
use crate::error::RouteError;
use crate::models::Location;
use crate::resolver;
use crate::solver;

/// A planned closed route, starting (and implicitly ending) at the start
/// location
#[derive(Debug, Clone, Serialize)]
pub struct Tour {
    /// Ordered stops; index 0 is the start
    pub stops: Vec<Location>,
    /// Round-trip distance including the closing edge back to the start
    pub total_distance: f64,
}

impl Tour {
    /// The start location
    #[must_use]
    pub fn start(&self) -> &Location {
        &self.stops[0]
    }
}

/// Plan the shortest round trip from resolved locations.
pub fn plan(start: &Location, to_visit: &[Location]) -> Tour {
    let matrix = DistanceMatrix::build(start, to_visit);
    debug!("Built {0}x{0} distance matrix", matrix.size());

    let solution = solver::solve(&matrix);
    let stops = solution
        .permutation
        .iter()
        .map(|&index| matrix.location(index).clone())
        .collect();

    info!(
        "Planned {}-stop tour, round trip {:.2}",
        matrix.size(),
        solution.total_distance
    );
    Tour {
        stops,
        total_distance: solution.total_distance,
    }
}

/// Resolve abbreviated names and plan the tour in one call.
///
/// Visit queries resolve as an atomic batch, then the start query; any
/// resolution failure aborts the request with no partial tour.
pub fn plan_route(
    catalog: &LocationCatalog,
    start_query: &str,
    visit_queries: &[String],
) -> Result<Tour, RouteError> {
    let to_visit: Vec<Location> = resolver::resolve_all(catalog, visit_queries)?
        .into_iter()
        .cloned()
        .collect();
    let start = resolver::resolve(catalog, start_query)?;
    Ok(plan(start, &to_visit))
}

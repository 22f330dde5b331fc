//! Name resolution
//!
//! Resolves user-typed abbreviations against the location catalog by
//! case-insensitive prefix match over every alias of every entry.

use tracing::debug;

use crate::catalog::LocationCatalog;
use crate::error::RouteError;
use crate::models::Location;

/// Resolve one abbreviation to the unique catalog entry it prefixes.
///
/// A location matching through several of its aliases is counted once.
pub fn resolve<'a>(
    catalog: &'a LocationCatalog,
    query: &str,
) -> Result<&'a Location, RouteError> {
    let needle = query.to_lowercase();
    let mut matches = Vec::new();

    for location in catalog.iter() {
        if location
            .names()
            .any(|name| name.to_lowercase().starts_with(&needle))
        {
            matches.push(location);
        }
    }

    match matches.as_slice() {
        [unique] => {
            debug!("Resolved {:?} to {:?}", query, unique.name);
            Ok(*unique)
        }
        [] => Err(RouteError::no_match(query)),
        many => Err(RouteError::ambiguous(
            query,
            many.iter().map(|loc| loc.name.clone()).collect(),
        )),
    }
}

/// Resolve a batch of abbreviations in input order.
///
/// Fails atomically on the first abbreviation that does not resolve;
/// later entries are not examined.
pub fn resolve_all<'a, I, S>(
    catalog: &'a LocationCatalog,
    queries: I,
) -> Result<Vec<&'a Location>, RouteError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    queries
        .into_iter()
        .map(|query| resolve(catalog, query.as_ref()))
        .collect()
}

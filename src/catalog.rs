//! Location catalog loading and parsing
//!
//! The catalog is an ordered, immutable set of named map positions, read
//! once at startup from a text source. Each record has the shape
//! `<name> - X:<x>, Y:<y>`; blank lines and `#` comments are skipped.

use std::path::Path;

use tracing::{debug, info};

use crate::error::RouteError;
use crate::models::{Location, Vector2};

/// Default location map compiled into the binary
const BUILTIN_LOCATIONS: &str = include_str!("../data/locations.txt");

/// Ordered, immutable set of named locations
#[derive(Debug, Clone)]
pub struct LocationCatalog {
    locations: Vec<Location>,
}

impl LocationCatalog {
    /// Parse a catalog from raw text lines.
    ///
    /// Fails with [`RouteError::MalformedLocationLine`] on the first bad
    /// record; no partial catalog is produced.
    pub fn parse<I, S>(lines: I) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut locations = Vec::new();
        for line in lines {
            let line = line.as_ref();
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            locations.push(parse_line(line)?);
        }
        debug!("Parsed {} catalog entries", locations.len());
        Ok(Self { locations })
    }

    /// Load the catalog compiled into the binary
    pub fn builtin() -> Result<Self, RouteError> {
        Self::parse(BUILTIN_LOCATIONS.lines())
    }

    /// Load a catalog from a file on disk
    pub fn load(path: &Path) -> Result<Self, RouteError> {
        info!("Loading location catalog from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::parse(contents.lines())
    }

    /// Entries in source order
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }
}

/// Parse one `<name> - X:<x>, Y:<y>` record
fn parse_line(line: &str) -> Result<Location, RouteError> {
    let (raw_name, pos_data) = line
        .split_once('-')
        .ok_or_else(|| RouteError::malformed_line(line))?;

    let name = raw_name.trim();
    if name.is_empty() {
        return Err(RouteError::malformed_line(line));
    }

    let mut x = None;
    let mut y = None;
    for pair in pos_data.split(',') {
        let (key, value) = pair
            .split_once(':')
            .ok_or_else(|| RouteError::malformed_line(line))?;
        let value: f64 = value
            .trim()
            .parse()
            .map_err(|_| RouteError::malformed_line(line))?;
        match key.trim() {
            "X" => x = Some(value),
            "Y" => y = Some(value),
            _ => return Err(RouteError::malformed_line(line)),
        }
    }

    match (x, y) {
        (Some(x), Some(y)) => Ok(Location::new(name, Vector2::new(x, y))),
        _ => Err(RouteError::malformed_line(line)),
    }
}

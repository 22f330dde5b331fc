//! Location model for named map positions

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::models::Vector2;

/// A named, fixed position on the map.
///
/// The display name may carry several accepted aliases separated by `/`,
/// e.g. `"Transformer East/TE"`. The first alias is the render name.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Location {
    /// Full display name, possibly `/`-separated aliases
    pub name: String,
    /// Map position
    pub pos: Vector2,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new<S: Into<String>>(name: S, pos: Vector2) -> Self {
        Self {
            name: name.into(),
            pos,
        }
    }

    /// All names this location goes by
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.name.split('/')
    }

    /// The name used when rendering a route stop
    #[must_use]
    pub fn render_name(&self) -> &str {
        self.names().next().unwrap_or(&self.name)
    }

    /// Euclidean distance to another location
    #[must_use]
    pub fn distance_to(&self, other: &Location) -> f64 {
        self.pos.distance_to(&other.pos)
    }
}

// Structural equality and hashing so locations can be deduplicated in
// sets. Coordinates are compared by bit pattern.
impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.pos.to_bits() == other.pos.to_bits()
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.pos.to_bits().hash(state);
    }
}

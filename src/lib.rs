//! `roundtrip` - Shortest round-trip route planning over fixed location maps
//!
//! This library provides the core functionality for resolving abbreviated
//! location names against an immutable catalog and computing the exact
//! shortest closed tour through the selected locations, anchored at a
//! chosen base location.

pub mod catalog;
pub mod config;
pub mod distance;
pub mod error;
pub mod models;
pub mod planner;
pub mod resolver;
pub mod solver;

// Re-export core types for public API
pub use catalog::LocationCatalog;
pub use config::RoundtripConfig;
pub use distance::DistanceMatrix;
pub use error::RouteError;
pub use models::{Location, Vector2};
pub use planner::{Tour, plan, plan_route};
pub use resolver::{resolve, resolve_all};
pub use solver::{TourSolution, solve};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, RouteError>;

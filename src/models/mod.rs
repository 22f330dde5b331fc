//! Data models for the roundtrip application
//!
//! This module contains the core domain models organized by concern:
//! - Vector2: Planar coordinates
//! - Location: Named map positions with aliases

pub mod location;
pub mod vector;

// Re-export all public types for convenient access
pub use location::Location;
pub use vector::Vector2;

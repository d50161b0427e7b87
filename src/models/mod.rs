//! Data models for the LakeMap application
//!
//! This module contains the core domain models organized by concern:
//! - Location: Geographic coordinates and range checks
//! - Record: Lakes, hotels and companies shown as markers
//! - Boundary: Outline polygons and their stroke styles

pub mod boundary;
pub mod location;
pub mod record;

// Re-export all public types for convenient access
pub use boundary::{BoundaryKind, BoundaryPolygon, BoundaryStyle, Polygon, Ring};
pub use location::{Coordinates, LatLng};
pub use record::{Category, PointRecord};

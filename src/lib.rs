//! `LakeMap` - Category-filtered map of lakes, hotels and companies
//!
//! This library loads point and boundary datasets, decides which records are
//! visible under a category filter, picks marker icons and estimates lake
//! water volumes, and serves the result to a browser map.

pub mod api;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod loader;
pub mod logging;
pub mod map;
pub mod models;
pub mod store;
pub mod web;

// Re-export core types for public API
pub use config::LakeMapConfig;
pub use error::LakeMapError;
pub use loader::DatasetLoader;
pub use map::{
    CategorySelection, CategorySet, Collections, IconVariant, MapScene, SelectionState,
    estimate_volume, icon_for, render_scene, visible_records,
};
pub use models::{BoundaryKind, BoundaryPolygon, Category, Coordinates, PointRecord};
pub use store::MapStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Shared fixtures for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use lakemap::config::DataConfig;
use tempfile::TempDir;

pub const LAKES: &str = r#"[
    {"name": "Bellandur Lake", "latitude": 12.9352, "longitude": 77.6684, "area": 892},
    {"name": "Ulsoor Lake", "latitude": 12.9833, "longitude": 77.6200, "area": 123.6},
    {"name": "Sankey Tank", "latitude": 13.0093, "longitude": 77.5736, "area": 37.5},
    {"name": "Boundary Lake", "latitude": 12.95, "longitude": 77.60, "area": 100},
    {"name": "Lost Lake", "latitude": 200, "longitude": 77.60, "area": 10}
]"#;

pub const HOTELS: &str = r#"[
    {"name": "The Leela Palace", "address": "Old Airport Rd", "latitude": 12.9606, "longitude": 77.6484},
    {"name": "Taj West End", "address": "Race Course Rd", "latitude": "12.9850", "longitude": "77.5840"},
    {"name": "Nowhere Inn", "address": "?", "latitude": "unknown", "longitude": 77.5}
]"#;

pub const COMPANIES: &str = r#"[
    {"company": "Infosys", "address": "Electronic City", "latitude": 12.8456, "longitude": 77.6603}
]"#;

pub const OUTER: &str = r#"{
    "type": "GeometryCollection",
    "geometries": [
        {"type": "Polygon", "coordinates": [[[77.3, 12.7], [77.9, 12.7], [77.9, 13.2], [77.3, 13.2], [77.3, 12.7]]]}
    ]
}"#;

pub const INNER: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "properties": {}, "geometry":
            {"type": "Polygon", "coordinates": [[[77.5, 12.9], [77.7, 12.9], [77.7, 13.0], [77.5, 12.9]]]}}
    ]
}"#;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write fixture");
}

/// Temp data directory holding all five default resources
pub fn full_dataset() -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    write(dir.path(), "lakes.json", LAKES);
    write(dir.path(), "hotels.json", HOTELS);
    write(dir.path(), "company.json", COMPANIES);
    write(dir.path(), "outer-boundary.geojson", OUTER);
    write(dir.path(), "bengaluru-boundary.geojson", INNER);
    dir
}

pub fn data_config(dir: &Path) -> DataConfig {
    DataConfig {
        base_dir: dir.to_string_lossy().into_owned(),
        ..DataConfig::default()
    }
}

//! GeoJSON boundary file conversion
//!
//! Some boundary exports come as a bare `GeometryCollection`, which many map
//! libraries will not style. This wraps each geometry in its own `Feature`.

use std::path::Path;

use serde_json::{Value, json};
use tracing::info;

use crate::error::LakeMapError;

/// Turn a `GeometryCollection` into a `FeatureCollection`, one feature per
/// geometry with empty properties. Geometries are copied verbatim.
pub fn geometry_collection_to_features(document: Value) -> Result<Value, LakeMapError> {
    let Value::Object(mut object) = document else {
        return Err(LakeMapError::validation("GeoJSON document must be an object"));
    };

    let geometries = match object.remove("geometries") {
        Some(Value::Array(geometries)) => geometries,
        _ => {
            return Err(LakeMapError::validation(
                "GeoJSON document has no 'geometries' array",
            ));
        }
    };

    let features: Vec<Value> = geometries
        .into_iter()
        .map(|geometry| {
            json!({
                "type": "Feature",
                "geometry": geometry,
                "properties": {},
            })
        })
        .collect();

    Ok(json!({
        "type": "FeatureCollection",
        "features": features,
    }))
}

/// Convert `input` and write the pretty-printed result to `output`
pub fn convert_file(input: &Path, output: &Path) -> Result<usize, LakeMapError> {
    let raw = std::fs::read(input)?;
    let document: Value = serde_json::from_slice(&raw)?;

    let converted = geometry_collection_to_features(document)?;
    let count = converted["features"].as_array().map_or(0, Vec::len);

    std::fs::write(output, serde_json::to_string_pretty(&converted)?)?;

    info!("Converted {} geometries into {}", count, output.display());
    Ok(count)
}

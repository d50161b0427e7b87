//! JSON point record parsing
//!
//! Each point file is a flat array of objects. Coordinates and area may
//! arrive as numbers or numeric strings; anything else reads as NaN and the
//! record is then dropped by the coordinate check.

use serde::Deserialize;
use serde_json::Value;
use serde_json::value::RawValue;
use tracing::debug;

use crate::error::LakeMapError;
use crate::models::{Category, PointRecord};

#[derive(Debug, Deserialize)]
struct RawPoint {
    #[serde(default)]
    name: Option<String>,
    /// Company files carry the name here instead of `name`
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    latitude: Option<Value>,
    #[serde(default)]
    longitude: Option<Value>,
    #[serde(default)]
    area: Option<Value>,
    #[serde(default)]
    address: Option<String>,
}

/// Read a JSON scalar as a float the way a browser's `Number()` would
fn numeric(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

impl RawPoint {
    fn into_record(self, category: Category) -> Result<PointRecord, LakeMapError> {
        let name = match category {
            Category::Company => self.company.or(self.name),
            Category::Lake | Category::Hotel => self.name.or(self.company),
        }
        .unwrap_or_default();

        let latitude = self.latitude.as_ref().map_or(f64::NAN, numeric);
        let longitude = self.longitude.as_ref().map_or(f64::NAN, numeric);

        let record = PointRecord {
            name,
            latitude,
            longitude,
            category,
            area: match category {
                Category::Lake => self.area.as_ref().filter(|v| !v.is_null()).map(numeric),
                Category::Hotel | Category::Company => None,
            },
            address: match category {
                Category::Lake => None,
                Category::Hotel | Category::Company => self.address,
            },
        };

        if !record.coordinates().is_valid() {
            return Err(LakeMapError::invalid_record(format!(
                "{} '{}' has unusable coordinates ({}, {})",
                category, record.name, record.latitude, record.longitude
            )));
        }
        Ok(record)
    }
}

/// Parse a point file, dropping records that fail the coordinate check.
///
/// Only a document that is not a JSON array is an error. Items are kept raw
/// until decoded one by one, so a number one record cannot represent drops
/// that record alone.
pub fn parse_points(bytes: &[u8], category: Category) -> Result<Vec<PointRecord>, LakeMapError> {
    let items: Vec<Box<RawValue>> = serde_json::from_slice(bytes)?;
    let total = items.len();

    let records: Vec<PointRecord> = items
        .into_iter()
        .filter_map(|item| {
            serde_json::from_str::<RawPoint>(item.get())
                .map_err(LakeMapError::from)
                .and_then(|raw| raw.into_record(category))
                .inspect_err(|e| debug!("Skipping record: {}", e))
                .ok()
        })
        .collect();

    if records.len() < total {
        debug!(
            "Dropped {} of {} {} records with invalid data",
            total - records.len(),
            total,
            category
        );
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lakes() {
        let json = br#"[
            {"name": "Madiwala", "latitude": 12.9076, "longitude": 77.6200, "area": 114.3},
            {"name": "Yediyur", "latitude": "12.9270", "longitude": "77.5730", "area": "1.5"}
        ]"#;
        let lakes = parse_points(json, Category::Lake).unwrap();
        assert_eq!(lakes.len(), 2);
        assert_eq!(lakes[0].area, Some(114.3));
        assert_eq!(lakes[1].latitude, 12.927);
        assert_eq!(lakes[1].area, Some(1.5));
        assert!(lakes.iter().all(|l| l.category == Category::Lake));
    }

    #[test]
    fn test_out_of_range_and_non_numeric_dropped() {
        let json = br#"[
            {"name": "Ok", "latitude": 12.9, "longitude": 77.6, "address": "A"},
            {"name": "Far north", "latitude": 200, "longitude": 77.6, "address": "B"},
            {"name": "Garbage", "latitude": "n/a", "longitude": 77.6, "address": "C"},
            {"name": "Missing"},
            "not an object"
        ]"#;
        let hotels = parse_points(json, Category::Hotel).unwrap();
        assert_eq!(hotels.len(), 1);
        assert_eq!(hotels[0].name, "Ok");
        assert_eq!(hotels[0].address.as_deref(), Some("A"));
    }

    #[test]
    fn test_unrepresentable_number_drops_only_its_record() {
        let json = br#"[
            {"name": "Good", "latitude": 12.9, "longitude": 77.6, "area": 50},
            {"name": "Bad", "latitude": 1e400, "longitude": 77.6, "area": 10}
        ]"#;
        let lakes = parse_points(json, Category::Lake).unwrap();
        assert_eq!(lakes.len(), 1);
        assert_eq!(lakes[0].name, "Good");
        assert_eq!(lakes[0].area, Some(50.0));
    }

    #[test]
    fn test_company_name_field() {
        let json = br#"[{"company": "Wipro", "address": "Sarjapur Rd", "latitude": 12.91, "longitude": 77.68}]"#;
        let companies = parse_points(json, Category::Company).unwrap();
        assert_eq!(companies[0].name, "Wipro");
        assert!(companies[0].area.is_none());
    }

    #[test]
    fn test_non_numeric_area_kept_as_nan() {
        let json = br#"[{"name": "Odd", "latitude": 12.9, "longitude": 77.6, "area": "large"}]"#;
        let lakes = parse_points(json, Category::Lake).unwrap();
        assert!(lakes[0].area.unwrap().is_nan());
    }

    #[test]
    fn test_not_an_array_is_error() {
        let err = parse_points(br#"{"name": "x"}"#, Category::Lake).unwrap_err();
        assert!(matches!(err, LakeMapError::Json { .. }));
    }
}

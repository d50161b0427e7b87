//! GeoJSON boundary parsing
//!
//! Only the shapes boundaries come in are understood: polygons, lines and
//! the containers around them. Points and other geometry types are ignored.

use serde::Deserialize;

use crate::error::LakeMapError;
use crate::models::{BoundaryKind, BoundaryPolygon, Polygon, Ring};

/// GeoJSON position, `[lng, lat]` with an optional altitude
type Position = Vec<f64>;

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum GeoObject {
    FeatureCollection {
        features: Vec<GeoObject>,
    },
    Feature {
        geometry: Option<Box<GeoObject>>,
    },
    GeometryCollection {
        geometries: Vec<GeoObject>,
    },
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    #[serde(other)]
    Unsupported,
}

fn to_ring(positions: &[Position]) -> Ring {
    positions
        .iter()
        .filter(|p| p.len() >= 2)
        .map(|p| (p[1], p[0]))
        .collect()
}

fn to_polygon(rings: &[Vec<Position>]) -> Polygon {
    rings
        .iter()
        .map(|r| to_ring(r))
        .filter(|r| !r.is_empty())
        .collect()
}

impl GeoObject {
    fn collect_polygons(&self, polygons: &mut Vec<Polygon>) {
        match self {
            GeoObject::FeatureCollection { features } => {
                features.iter().for_each(|f| f.collect_polygons(polygons));
            }
            GeoObject::Feature { geometry } => {
                if let Some(geometry) = geometry {
                    geometry.collect_polygons(polygons);
                }
            }
            GeoObject::GeometryCollection { geometries } => {
                geometries.iter().for_each(|g| g.collect_polygons(polygons));
            }
            GeoObject::Polygon { coordinates } => polygons.push(to_polygon(coordinates)),
            GeoObject::MultiPolygon { coordinates } => {
                polygons.extend(coordinates.iter().map(|p| to_polygon(p)));
            }
            // Lines have no holes; each is an outline of its own
            GeoObject::LineString { coordinates } => polygons.push(vec![to_ring(coordinates)]),
            GeoObject::MultiLineString { coordinates } => {
                polygons.extend(coordinates.iter().map(|l| vec![to_ring(l)]));
            }
            GeoObject::Unsupported => {}
        }
    }
}

/// Parse a boundary document into `(lat, lng)` polygons with the default style
pub fn parse_boundary(bytes: &[u8], kind: BoundaryKind) -> Result<BoundaryPolygon, LakeMapError> {
    let document: GeoObject = serde_json::from_slice(bytes)?;

    let mut polygons = Vec::new();
    document.collect_polygons(&mut polygons);
    polygons.retain(|p| p.iter().any(|r| !r.is_empty()));

    if polygons.is_empty() {
        return Err(LakeMapError::invalid_record(format!(
            "{kind:?} boundary contains no polygon or line geometry"
        )));
    }
    Ok(BoundaryPolygon::new(kind, polygons))
}

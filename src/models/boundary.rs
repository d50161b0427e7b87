//! Boundary polygons drawn as non-interactive overlays

use serde::{Deserialize, Serialize};

use super::location::LatLng;

/// Closed sequence of `(lat, lng)` vertices
pub type Ring = Vec<LatLng>;

/// Outer ring first, any holes after it
pub type Polygon = Vec<Ring>;

/// Which of the two boundary overlays a polygon is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryKind {
    /// Outer administrative boundary
    Outer,
    /// Inner city detail boundary
    Inner,
}

impl BoundaryKind {
    #[must_use]
    pub fn default_style(self) -> BoundaryStyle {
        match self {
            BoundaryKind::Outer => BoundaryStyle {
                color: "#800020".to_string(),
                weight: 5.0,
                fill_opacity: 0.0,
            },
            BoundaryKind::Inner => BoundaryStyle {
                color: "#cccccc".to_string(),
                weight: 1.0,
                fill_opacity: 0.1,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryStyle {
    /// Stroke color as a CSS hex string
    pub color: String,
    /// Stroke weight in pixels
    pub weight: f64,
    pub fill_opacity: f64,
}

/// A boundary made of one or more polygons. Each polygon keeps its holes
/// next to its outer ring, so separate outlines never mix with holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryPolygon {
    pub kind: BoundaryKind,
    pub polygons: Vec<Polygon>,
    pub style: BoundaryStyle,
}

impl BoundaryPolygon {
    /// Create a boundary with the default style for its kind
    #[must_use]
    pub fn new(kind: BoundaryKind, polygons: Vec<Polygon>) -> Self {
        Self {
            kind,
            polygons,
            style: kind.default_style(),
        }
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.polygons.iter().flatten().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles() {
        let outer = BoundaryPolygon::new(BoundaryKind::Outer, vec![]);
        assert_eq!(outer.style.color, "#800020");
        assert_eq!(outer.style.weight, 5.0);
        assert_eq!(outer.style.fill_opacity, 0.0);

        let inner = BoundaryPolygon::new(BoundaryKind::Inner, vec![]);
        assert_eq!(inner.style.color, "#cccccc");
        assert_eq!(inner.style.fill_opacity, 0.1);
    }

    #[test]
    fn test_vertex_count_spans_polygons_and_holes() {
        let boundary = BoundaryPolygon::new(
            BoundaryKind::Inner,
            vec![
                vec![vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)], vec![(0.2, 0.2)]],
                vec![vec![(2.0, 2.0)]],
            ],
        );
        assert_eq!(boundary.vertex_count(), 5);
    }

    #[test]
    fn test_kind_usable_as_set_key() {
        let kinds: std::collections::HashSet<_> =
            [BoundaryKind::Outer, BoundaryKind::Inner, BoundaryKind::Outer].into_iter().collect();
        assert_eq!(kinds.len(), 2);
    }
}

//! Display-ready output of a render pass
//!
//! A [`MapScene`] is everything the map display needs. It has one marker per
//! visible record and one overlay per loaded boundary, and is rebuilt from
//! scratch on every pass.

use serde::Serialize;

use super::engine::{Collections, visible_records};
use super::icons::{IconVariant, icon_for};
use super::selection::CategorySelection;
use super::volume::{estimate_volume, format_volume};
use crate::models::{
    BoundaryKind, BoundaryPolygon, BoundaryStyle, Category, LatLng, PointRecord, Polygon,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerView {
    /// Stable key such as `lake-3`, the index within its own collection
    pub key: String,
    pub category: Category,
    pub position: LatLng,
    pub icon: IconVariant,
    pub label: String,
    pub popup: Vec<String>,
    /// Estimated water volume, lakes with a finite area only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_m3: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryView {
    pub kind: BoundaryKind,
    pub polygons: Vec<Polygon>,
    pub style: BoundaryStyle,
}

impl From<&BoundaryPolygon> for BoundaryView {
    fn from(boundary: &BoundaryPolygon) -> Self {
        Self {
            kind: boundary.kind,
            polygons: boundary.polygons.clone(),
            style: boundary.style.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapScene {
    pub selection: CategorySelection,
    pub boundaries: Vec<BoundaryView>,
    pub markers: Vec<MarkerView>,
}

impl MarkerView {
    fn from_record(index: usize, record: &PointRecord) -> Self {
        let volume_m3 = match record.category {
            Category::Lake => record.area.filter(|a| a.is_finite()).map(estimate_volume),
            Category::Hotel | Category::Company => None,
        };

        let mut popup = Vec::with_capacity(5);
        match record.category {
            Category::Lake => {
                if let Some(area) = record.area {
                    popup.push(format!("Area: {area} acres"));
                }
                if let Some(volume) = volume_m3 {
                    popup.push(format!("Est. volume: {}", format_volume(volume)));
                }
            }
            Category::Hotel | Category::Company => {
                if let Some(address) = &record.address {
                    popup.push(address.clone());
                }
            }
        }
        popup.push(format!("Lat: {}", record.latitude));
        popup.push(format!("Lng: {}", record.longitude));

        Self {
            key: format!("{}-{index}", record.category.key_prefix()),
            category: record.category,
            position: (record.latitude, record.longitude),
            icon: icon_for(record),
            label: record.name.clone(),
            popup,
            volume_m3,
        }
    }
}

/// Build the scene for the current collections and filter
#[must_use]
pub fn render_scene(collections: &Collections, selection: CategorySelection) -> MapScene {
    let visible = visible_records(collections, selection);
    let markers = visible
        .groups()
        .iter()
        .flat_map(|(_, records)| {
            records
                .iter()
                .enumerate()
                .map(|(index, record)| MarkerView::from_record(index, record))
        })
        .collect();

    MapScene {
        selection,
        boundaries: collections.boundaries().map(BoundaryView::from).collect(),
        markers,
    }
}

//! Point-of-interest records shown as map markers

use serde::{Deserialize, Serialize};
use std::fmt;

use super::location::Coordinates;

/// Record category. Closed so that an unhandled category fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Lake,
    Hotel,
    Company,
}

impl Category {
    /// Every category in display order
    pub const ALL: [Category; 3] = [Category::Lake, Category::Hotel, Category::Company];

    /// Prefix used for marker keys, e.g. `lake-0`
    #[must_use]
    pub fn key_prefix(self) -> &'static str {
        match self {
            Category::Lake => "lake",
            Category::Hotel => "hotel",
            Category::Company => "company",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key_prefix())
    }
}

/// One lake, hotel or company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category: Category,
    /// Surface area in acres, lakes only
    pub area: Option<f64>,
    /// Street address, hotels and companies only
    pub address: Option<String>,
}

impl PointRecord {
    #[must_use]
    pub fn lake(name: impl Into<String>, latitude: f64, longitude: f64, area: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            category: Category::Lake,
            area: Some(area),
            address: None,
        }
    }

    #[must_use]
    pub fn hotel(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            category: Category::Hotel,
            area: None,
            address: Some(address.into()),
        }
    }

    #[must_use]
    pub fn company(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            category: Category::Company,
            area: None,
            address: Some(address.into()),
        }
    }

    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

//! Marker icon table and per-record icon selection

use serde::Serialize;

use super::volume::SizeTier;
use crate::models::{Category, PointRecord};

/// Marker variants, also used as indices into [`ICON_TABLE`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconVariant {
    /// Lakes larger than the size threshold
    ThickBlue = 0,
    /// Every other lake
    LightBlue = 1,
    Hotel = 2,
    Company = 3,
}

/// Leaflet-style icon definition, sizes in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerIcon {
    pub variant: IconVariant,
    pub icon_url: &'static str,
    pub icon_size: [u16; 2],
    pub icon_anchor: [i16; 2],
    pub popup_anchor: [i16; 2],
}

pub static ICON_TABLE: [MarkerIcon; 4] = [
    MarkerIcon {
        variant: IconVariant::ThickBlue,
        icon_url: "/pin-thick-blue.png",
        icon_size: [30, 45],
        icon_anchor: [15, 45],
        popup_anchor: [0, -40],
    },
    MarkerIcon {
        variant: IconVariant::LightBlue,
        icon_url: "/pin-light-blue.png",
        icon_size: [25, 40],
        icon_anchor: [12, 40],
        popup_anchor: [0, -35],
    },
    MarkerIcon {
        variant: IconVariant::Hotel,
        icon_url: "/marker-icon-red.png",
        icon_size: [30, 45],
        icon_anchor: [15, 45],
        popup_anchor: [0, -40],
    },
    MarkerIcon {
        variant: IconVariant::Company,
        icon_url: "/placeholder.PNG",
        icon_size: [30, 45],
        icon_anchor: [15, 45],
        popup_anchor: [0, -40],
    },
];

impl IconVariant {
    #[must_use]
    pub fn icon(self) -> &'static MarkerIcon {
        &ICON_TABLE[self as usize]
    }

    /// Icon for a (category, size tier) pair. Tier only matters for lakes.
    #[must_use]
    pub fn lookup(category: Category, tier: SizeTier) -> Self {
        match (category, tier) {
            (Category::Lake, SizeTier::Large) => IconVariant::ThickBlue,
            (Category::Lake, SizeTier::Small) => IconVariant::LightBlue,
            (Category::Hotel, _) => IconVariant::Hotel,
            (Category::Company, _) => IconVariant::Company,
        }
    }
}

/// Pick the marker variant for a record
#[must_use]
pub fn icon_for(record: &PointRecord) -> IconVariant {
    let tier = match record.category {
        Category::Lake => SizeTier::for_optional_area(record.area),
        Category::Hotel | Category::Company => SizeTier::Small,
    };
    IconVariant::lookup(record.category, tier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(150.0, IconVariant::ThickBlue)]
    #[case(100.5, IconVariant::ThickBlue)]
    #[case(100.0, IconVariant::LightBlue)]
    #[case(42.0, IconVariant::LightBlue)]
    #[case(0.0, IconVariant::LightBlue)]
    #[case(f64::NAN, IconVariant::LightBlue)]
    fn test_lake_icon_by_area(#[case] area: f64, #[case] expected: IconVariant) {
        let lake = PointRecord::lake("Test Lake", 12.9, 77.6, area);
        assert_eq!(icon_for(&lake), expected);
    }

    #[test]
    fn test_lake_without_area_is_light() {
        let mut lake = PointRecord::lake("Dry", 12.9, 77.6, 500.0);
        lake.area = None;
        assert_eq!(icon_for(&lake), IconVariant::LightBlue);
    }

    #[test]
    fn test_hotel_and_company_icons_ignore_attributes() {
        let mut hotel = PointRecord::hotel("Grand", 12.9, 77.6, "Residency Rd");
        hotel.area = Some(5000.0);
        assert_eq!(icon_for(&hotel), IconVariant::Hotel);

        let company = PointRecord::company("Acme", 12.9, 77.6, "Whitefield");
        assert_eq!(icon_for(&company), IconVariant::Company);
    }

    #[test]
    fn test_table_indexed_by_variant() {
        for entry in &ICON_TABLE {
            assert_eq!(entry.variant.icon().variant, entry.variant);
        }
        assert_eq!(IconVariant::LightBlue.icon().icon_size, [25, 40]);
        assert_eq!(IconVariant::Company.icon().icon_url, "/placeholder.PNG");
    }
}

use serde::{Deserialize, Serialize};

use crate::models::Coordinates;

/// Initial viewport and tile source for the map display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    #[serde(default = "default_center")]
    pub center: Coordinates,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    #[serde(default = "default_tile_url")]
    pub tile_url: String,
    #[serde(default = "default_attribution")]
    pub attribution: String,
}

// Bengaluru city centre
fn default_center() -> Coordinates {
    Coordinates::new(12.9716, 77.5946)
}

fn default_zoom() -> u8 {
    11
}

fn default_tile_url() -> String {
    "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
}

fn default_attribution() -> String {
    "&copy; <a href=\"https://osm.org/\">OpenStreetMap</a> contributors".to_string()
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: default_center(),
            zoom: default_zoom(),
            tile_url: default_tile_url(),
            attribution: default_attribution(),
        }
    }
}

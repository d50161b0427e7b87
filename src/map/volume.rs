//! Lake size tiers and the water volume heuristic
//!
//! The estimate is a rough rule of thumb: surface area times an assumed
//! average depth. Large lakes are assumed twice as deep as small ones. The
//! same tier boundary also picks the marker icon, so both live here.

use serde::Serialize;

use crate::error::LakeMapError;

/// Square metres per acre
pub const SQ_METERS_PER_ACRE: f64 = 4046.86;

/// Lakes strictly larger than this many acres are "large"
pub const LARGE_LAKE_THRESHOLD_ACRES: f64 = 100.0;

/// Assumed mean depth of a large lake in metres
pub const LARGE_LAKE_DEPTH_M: f64 = 6.0;

/// Assumed mean depth of a small lake in metres
pub const SMALL_LAKE_DEPTH_M: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeTier {
    Small,
    Large,
}

impl SizeTier {
    /// Classify a lake by area.
    ///
    /// Strictly greater-than: exactly 100 acres is small. NaN compares false
    /// and therefore lands in `Small` as well.
    #[must_use]
    pub fn for_area(area_acres: f64) -> Self {
        if area_acres > LARGE_LAKE_THRESHOLD_ACRES {
            SizeTier::Large
        } else {
            SizeTier::Small
        }
    }

    /// Classify a lake whose area may be missing; missing counts as small
    #[must_use]
    pub fn for_optional_area(area_acres: Option<f64>) -> Self {
        area_acres.map_or(SizeTier::Small, Self::for_area)
    }

    #[must_use]
    pub fn assumed_depth_m(self) -> f64 {
        match self {
            SizeTier::Small => SMALL_LAKE_DEPTH_M,
            SizeTier::Large => LARGE_LAKE_DEPTH_M,
        }
    }
}

/// Estimate a lake's water volume in cubic metres from its area in acres.
///
/// Input is not guarded: negative area gives a negative volume and NaN
/// propagates. Use [`checked_estimate_volume`] to reject such input.
#[must_use]
pub fn estimate_volume(area_acres: f64) -> f64 {
    let area_sq_meters = area_acres * SQ_METERS_PER_ACRE;
    area_sq_meters * SizeTier::for_area(area_acres).assumed_depth_m()
}

/// [`estimate_volume`] that fails on non-finite or negative area
pub fn checked_estimate_volume(area_acres: f64) -> Result<f64, LakeMapError> {
    if !area_acres.is_finite() {
        return Err(LakeMapError::computation(format!(
            "lake area must be finite, got {area_acres}"
        )));
    }
    if area_acres < 0.0 {
        return Err(LakeMapError::computation(format!(
            "lake area must not be negative, got {area_acres}"
        )));
    }
    Ok(estimate_volume(area_acres))
}

/// Format a volume for popups, e.g. `3,642,174 m³`
#[must_use]
pub fn format_volume(volume_m3: f64) -> String {
    if !volume_m3.is_finite() {
        return "unknown".to_string();
    }
    let rounded = format!("{:.0}", volume_m3.abs());
    let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3);
    for (i, digit) in rounded.chars().enumerate() {
        if i > 0 && (rounded.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if volume_m3 < 0.0 { "-" } else { "" };
    format!("{sign}{grouped} m³")
}

//! Map filtering and presentation
//!
//! This module turns loaded collections and a category filter into what the
//! map shows:
//! - Visibility of record categories under the current filter
//! - Marker icon choice per record
//! - Estimated lake water volume
//! - The full display scene (markers and boundary overlays)
//!
//! Everything here is synchronous and borrows its input read-only.

pub mod engine;
pub mod icons;
pub mod scene;
pub mod selection;
pub mod view;
pub mod volume;

pub use engine::{Collections, VisibleRecords, visible_records};
pub use icons::{ICON_TABLE, IconVariant, MarkerIcon, icon_for};
pub use scene::{BoundaryView, MapScene, MarkerView, render_scene};
pub use selection::{CategorySelection, CategorySet, SelectionState};
pub use view::MapView;
pub use volume::{SizeTier, checked_estimate_volume, estimate_volume, format_volume};

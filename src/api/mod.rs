use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::{
    map::{
        CategorySelection, CategorySet, ICON_TABLE, MapScene, MapView, MarkerIcon, SizeTier,
        estimate_volume,
    },
    store::MapStore,
};

/// Shared state behind every API handler
#[derive(Clone)]
pub struct AppState {
    pub store: MapStore,
    pub categories: CategorySet,
    pub view: MapView,
}

#[derive(Deserialize)]
pub struct MapQuery {
    pub category: Option<String>,
}

#[derive(Deserialize)]
pub struct VolumeQuery {
    pub area: f64,
}

#[derive(Serialize)]
pub struct ApiCategoryChoice {
    pub value: CategorySelection,
    pub label: &'static str,
}

#[derive(Serialize)]
pub struct ApiCategories {
    pub initial: CategorySelection,
    pub choices: Vec<ApiCategoryChoice>,
}

#[derive(Serialize)]
pub struct ApiVolume {
    pub area_acres: f64,
    pub depth_m: f64,
    pub volume_m3: f64,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/map", get(get_map))
        .route("/categories", get(get_categories))
        .route("/view", get(get_view))
        .route("/volume", get(get_volume))
        .route("/icons", get(get_icons))
        .with_state(state)
}

async fn get_map(
    State(state): State<AppState>,
    Query(query): Query<MapQuery>,
) -> Result<Json<MapScene>, StatusCode> {
    let selection = match query.category.as_deref() {
        Some(raw) => raw.parse::<CategorySelection>().map_err(|e| {
            tracing::debug!("Rejected map query: {}", e);
            StatusCode::BAD_REQUEST
        })?,
        None => state.categories.initial(),
    };

    if !state.categories.offers(selection) {
        tracing::debug!("Category {} not offered by {:?}", selection, state.categories);
        return Err(StatusCode::BAD_REQUEST);
    }

    Ok(Json(state.store.render(selection).await))
}

async fn get_categories(State(state): State<AppState>) -> Json<ApiCategories> {
    Json(ApiCategories {
        initial: state.categories.initial(),
        choices: state
            .categories
            .choices()
            .iter()
            .map(|&value| ApiCategoryChoice {
                value,
                label: value.label(),
            })
            .collect(),
    })
}

async fn get_view(State(state): State<AppState>) -> Json<MapView> {
    Json(state.view)
}

async fn get_volume(Query(query): Query<VolumeQuery>) -> Result<Json<ApiVolume>, StatusCode> {
    // NaN or infinity cannot be represented in the JSON response
    if !query.area.is_finite() {
        return Err(StatusCode::BAD_REQUEST);
    }
    Ok(Json(ApiVolume {
        area_acres: query.area,
        depth_m: SizeTier::for_area(query.area).assumed_depth_m(),
        volume_m3: estimate_volume(query.area),
    }))
}

async fn get_icons() -> Json<&'static [MarkerIcon]> {
    Json(ICON_TABLE.as_slice())
}

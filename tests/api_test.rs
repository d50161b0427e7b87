//! HTTP API behaviour over a pre-loaded store

mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use lakemap::api::{self, AppState};
use lakemap::map::MapView;
use lakemap::{CategorySet, Collections, DatasetLoader, MapStore};

async fn loaded_state(categories: CategorySet) -> AppState {
    let dir = common::full_dataset();
    let collections: Collections = DatasetLoader::new(common::data_config(dir.path()))
        .load_all()
        .await;
    AppState {
        store: MapStore::with_collections(collections),
        categories,
        view: MapView::default(),
    }
}

async fn get(state: AppState, uri: &str) -> (StatusCode, Value) {
    let response = api::router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_map_defaults_to_all() {
    let (status, body) = get(loaded_state(CategorySet::Full).await, "/map").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selection"], "all");
    assert_eq!(body["markers"].as_array().unwrap().len(), 7);
    assert_eq!(body["boundaries"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_map_filters_lakes() {
    let (status, body) = get(loaded_state(CategorySet::Full).await, "/map?category=lakes").await;
    assert_eq!(status, StatusCode::OK);
    let markers = body["markers"].as_array().unwrap();
    assert_eq!(markers.len(), 4);
    assert!(markers.iter().all(|m| m["category"] == "lake"));
    assert_eq!(markers[0]["icon"], "thick_blue");
    assert_eq!(markers[0]["key"], "lake-0");
}

#[tokio::test]
async fn test_unknown_category_is_bad_request() {
    let (status, _) = get(loaded_state(CategorySet::Full).await, "/map?category=boats").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reduced_set() {
    let state = loaded_state(CategorySet::Reduced).await;

    let (status, body) = get(state.clone(), "/map").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selection"], "lakes");

    let (status, _) = get(state.clone(), "/map?category=companies").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = get(state, "/categories").await;
    assert_eq!(body["initial"], "lakes");
    assert_eq!(body["choices"].as_array().unwrap().len(), 2);
    assert_eq!(body["choices"][1]["label"], "Show Hotels");
}

#[tokio::test]
async fn test_volume_endpoint() {
    let state = loaded_state(CategorySet::Full).await;

    let (status, body) = get(state.clone(), "/volume?area=150").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["depth_m"], 6.0);
    assert!((body["volume_m3"].as_f64().unwrap() - 3_642_174.0).abs() < 1e-6);

    let (_, body) = get(state, "/volume?area=50").await;
    assert_eq!(body["depth_m"], 3.0);
    assert!((body["volume_m3"].as_f64().unwrap() - 607_029.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_view_and_icons() {
    let state = loaded_state(CategorySet::Full).await;

    let (_, view) = get(state.clone(), "/view").await;
    assert_eq!(view["zoom"], 11);
    assert_eq!(view["center"]["latitude"], 12.9716);

    let (_, icons) = get(state, "/icons").await;
    let icons = icons.as_array().unwrap();
    assert_eq!(icons.len(), 4);
    assert_eq!(icons[1]["variant"], "light_blue");
    assert_eq!(icons[1]["icon_url"], "/pin-light-blue.png");
}

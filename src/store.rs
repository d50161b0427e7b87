//! Shared, progressively filled collection store
//!
//! Loads finish in any order and publish into the store as they complete.
//! Readers always see whatever has arrived so far.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::map::{CategorySelection, Collections, MapScene, render_scene};
use crate::models::{BoundaryKind, BoundaryPolygon, Category, PointRecord};

#[derive(Debug, Clone, Default)]
pub struct MapStore {
    collections: Arc<RwLock<Collections>>,
}

impl MapStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with already loaded collections
    #[must_use]
    pub fn with_collections(collections: Collections) -> Self {
        Self {
            collections: Arc::new(RwLock::new(collections)),
        }
    }

    #[tracing::instrument(level = "debug", skip(self, records), fields(count = records.len()))]
    pub async fn publish_records(&self, category: Category, records: Vec<PointRecord>) {
        self.collections.write().await.set_records(category, records);
    }

    #[tracing::instrument(level = "debug", skip(self, boundary))]
    pub async fn publish_boundary(&self, kind: BoundaryKind, boundary: Option<BoundaryPolygon>) {
        self.collections.write().await.set_boundary(kind, boundary);
    }

    /// Render a scene from the current contents
    pub async fn render(&self, selection: CategorySelection) -> MapScene {
        render_scene(&*self.collections.read().await, selection)
    }

    /// Copy of the current contents
    pub async fn snapshot(&self) -> Collections {
        self.collections.read().await.clone()
    }
}

//! Dataset loading
//!
//! This module fetches the five map resources (three point files and two
//! boundary files) from local paths or URLs. Every resource loads on its
//! own: a failure is logged and leaves that collection empty, and never
//! stops the others.

pub mod geojson;
pub mod points;
pub mod source;

pub use geojson::parse_boundary;
pub use points::parse_points;
pub use source::{DataSource, Resource};

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::DataConfig;
use crate::map::Collections;
use crate::models::{BoundaryKind, BoundaryPolygon, Category, PointRecord};
use crate::store::MapStore;

/// Service for loading the map datasets
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    client: reqwest::Client,
    config: DataConfig,
}

impl DatasetLoader {
    #[must_use]
    pub fn new(config: DataConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn source(&self, resource: Resource) -> DataSource {
        DataSource::resolve(self.config.location(resource), &self.config.base_dir)
    }

    /// Load every resource concurrently and wait for all of them
    pub async fn load_all(&self) -> Collections {
        let (lakes, hotels, companies, outer_boundary, inner_boundary) = futures::join!(
            self.load_points(Category::Lake),
            self.load_points(Category::Hotel),
            self.load_points(Category::Company),
            self.load_boundary(BoundaryKind::Outer),
            self.load_boundary(BoundaryKind::Inner),
        );

        let collections = Collections {
            lakes,
            hotels,
            companies,
            outer_boundary,
            inner_boundary,
        };
        info!(
            "Loaded {} records and {} boundaries",
            collections.record_count(),
            collections.boundaries().count()
        );
        collections
    }

    /// Start one task per resource, each publishing into `store` when done
    pub fn spawn_into(&self, store: &MapStore) -> Vec<JoinHandle<()>> {
        Resource::ALL
            .into_iter()
            .map(|resource| {
                let loader = self.clone();
                let store = store.clone();
                tokio::spawn(async move {
                    match resource {
                        Resource::Points(category) => {
                            let records = loader.load_points(category).await;
                            store.publish_records(category, records).await;
                        }
                        Resource::Boundary(kind) => {
                            let boundary = loader.load_boundary(kind).await;
                            store.publish_boundary(kind, boundary).await;
                        }
                    }
                })
            })
            .collect()
    }

    /// Load one point file; empty on any failure
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn load_points(&self, category: Category) -> Vec<PointRecord> {
        let resource = Resource::Points(category);
        let source = self.source(resource);

        let result = match source.fetch(&self.client, resource).await {
            Ok(bytes) => parse_points(&bytes, category),
            Err(e) => Err(e),
        };

        match result {
            Ok(records) => {
                debug!("Loaded {} {} records from {}", records.len(), category, source);
                records
            }
            Err(e) => {
                warn!("Failed to load {} from {}: {}", resource, source, e);
                Vec::new()
            }
        }
    }

    /// Load one boundary file; `None` on any failure
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn load_boundary(&self, kind: BoundaryKind) -> Option<BoundaryPolygon> {
        let resource = Resource::Boundary(kind);
        let source = self.source(resource);

        let result = match source.fetch(&self.client, resource).await {
            Ok(bytes) => parse_boundary(&bytes, kind),
            Err(e) => Err(e),
        };

        match result {
            Ok(boundary) => {
                debug!(
                    "Loaded {} with {} vertices from {}",
                    resource,
                    boundary.vertex_count(),
                    source
                );
                Some(boundary)
            }
            Err(e) => {
                warn!("Failed to load {} from {}: {}", resource, source, e);
                None
            }
        }
    }
}

//! Where a dataset comes from and how to fetch its bytes

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::LakeMapError;
use crate::models::{BoundaryKind, Category};

/// The five resources the map is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Points(Category),
    Boundary(BoundaryKind),
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::Points(Category::Lake),
        Resource::Points(Category::Hotel),
        Resource::Points(Category::Company),
        Resource::Boundary(BoundaryKind::Outer),
        Resource::Boundary(BoundaryKind::Inner),
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Resource::Points(Category::Lake) => "lakes",
            Resource::Points(Category::Hotel) => "hotels",
            Resource::Points(Category::Company) => "companies",
            Resource::Boundary(BoundaryKind::Outer) => "outer boundary",
            Resource::Boundary(BoundaryKind::Inner) => "inner boundary",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A local file or a remote URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

impl DataSource {
    /// Resolve a configured location against the data base directory.
    ///
    /// Absolute URLs and absolute paths are taken as-is. Anything else is
    /// relative to `base`, which may itself be a directory or a URL prefix.
    #[must_use]
    pub fn resolve(location: &str, base: &str) -> Self {
        if is_url(location) {
            return DataSource::Url(location.to_string());
        }
        if is_url(base) {
            return DataSource::Url(format!(
                "{}/{}",
                base.trim_end_matches('/'),
                location.trim_start_matches('/')
            ));
        }
        let path = Path::new(location);
        if path.is_absolute() || base.is_empty() {
            DataSource::File(path.to_path_buf())
        } else {
            DataSource::File(Path::new(base).join(path))
        }
    }

    /// Fetch the raw bytes of this source
    pub async fn fetch(
        &self,
        client: &reqwest::Client,
        resource: Resource,
    ) -> Result<Vec<u8>, LakeMapError> {
        match self {
            DataSource::File(path) => {
                debug!("Reading {} from {}", resource, path.display());
                tokio::fs::read(path).await.map_err(|e| {
                    LakeMapError::load(resource.name(), format!("{}: {e}", path.display()))
                })
            }
            DataSource::Url(url) => {
                debug!("Fetching {} from {}", resource, url);
                let response = client
                    .get(url)
                    .send()
                    .await
                    .and_then(reqwest::Response::error_for_status)
                    .map_err(|e| LakeMapError::load(resource.name(), e.to_string()))?;
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| LakeMapError::load(resource.name(), e.to_string()))?;
                Ok(bytes.to_vec())
            }
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => f.write_str(url),
        }
    }
}

//! Configuration management for the `LakeMap` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::LakeMapError;
use crate::loader::Resource;
use crate::map::{CategorySet, MapView};
use crate::models::{BoundaryKind, Category};
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `LakeMap` application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LakeMapConfig {
    /// Dataset locations
    #[serde(default)]
    pub data: DataConfig,
    /// Web server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Filter buttons and initial viewport
    #[serde(default)]
    pub map: MapConfig,
}

/// Where the five datasets are read from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory or URL prefix that relative locations are resolved against
    #[serde(default = "default_base_dir")]
    pub base_dir: String,
    #[serde(default = "default_lakes")]
    pub lakes: String,
    #[serde(default = "default_hotels")]
    pub hotels: String,
    #[serde(default = "default_companies")]
    pub companies: String,
    #[serde(default = "default_outer_boundary")]
    pub outer_boundary: String,
    #[serde(default = "default_inner_boundary")]
    pub inner_boundary: String,
}

/// Web server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory of frontend files served for non-API paths
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapConfig {
    /// `full` (all/lakes/hotels/companies) or `reduced` (lakes/hotels)
    #[serde(default)]
    pub categories: CategorySet,
    #[serde(default)]
    pub view: MapView,
}

// Default value functions
fn default_base_dir() -> String {
    "public/data".to_string()
}

fn default_lakes() -> String {
    "lakes.json".to_string()
}

fn default_hotels() -> String {
    "hotels.json".to_string()
}

fn default_companies() -> String {
    "company.json".to_string()
}

fn default_outer_boundary() -> String {
    "outer-boundary.geojson".to_string()
}

fn default_inner_boundary() -> String {
    "bengaluru-boundary.geojson".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "public".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            lakes: default_lakes(),
            hotels: default_hotels(),
            companies: default_companies(),
            outer_boundary: default_outer_boundary(),
            inner_boundary: default_inner_boundary(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl DataConfig {
    /// Configured location of a resource, before resolution
    #[must_use]
    pub fn location(&self, resource: Resource) -> &str {
        match resource {
            Resource::Points(Category::Lake) => &self.lakes,
            Resource::Points(Category::Hotel) => &self.hotels,
            Resource::Points(Category::Company) => &self.companies,
            Resource::Boundary(BoundaryKind::Outer) => &self.outer_boundary,
            Resource::Boundary(BoundaryKind::Inner) => &self.inner_boundary,
        }
    }
}

impl LakeMapConfig {
    /// Load configuration from the given file, or the default location when
    /// none is given, then apply environment overrides.
    ///
    /// An explicitly named file must exist; the default one is optional.
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = match config_path {
            Some(path) if !path.exists() => {
                return Err(LakeMapError::config(format!(
                    "Config file not found: {}",
                    path.display()
                ))
                .into());
            }
            Some(path) => path,
            None => Self::get_config_path()
                .filter(|p| p.exists())
                .unwrap_or_else(|| PathBuf::from("config.toml")),
        };

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. LAKEMAP__SERVER__PORT=8080
        builder = builder.add_source(
            Environment::with_prefix("LAKEMAP")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: LakeMapConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lakemap").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        let data = &mut self.data;
        for (value, default) in [
            (&mut data.lakes, default_lakes as fn() -> String),
            (&mut data.hotels, default_hotels),
            (&mut data.companies, default_companies),
            (&mut data.outer_boundary, default_outer_boundary),
            (&mut data.inner_boundary, default_inner_boundary),
        ] {
            if value.is_empty() {
                *value = default();
            }
        }
        if self.server.port == 0 {
            self.server.port = default_port();
        }
        if self.server.static_dir.is_empty() {
            self.server.static_dir = default_static_dir();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_string_values()?;
        self.validate_view()?;
        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(LakeMapError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(LakeMapError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        let tile_url = &self.map.view.tile_url;
        if !tile_url.starts_with("http://") && !tile_url.starts_with("https://") {
            return Err(
                LakeMapError::config("Map tile URL must be a valid HTTP or HTTPS URL").into(),
            );
        }

        Ok(())
    }

    fn validate_view(&self) -> Result<()> {
        if !self.map.view.center.is_valid() {
            return Err(LakeMapError::config(format!(
                "Map center {} is not a valid coordinate",
                self.map.view.center.format_coordinates()
            ))
            .into());
        }

        if self.map.view.zoom > 19 {
            return Err(LakeMapError::config("Map zoom cannot exceed 19").into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = LakeMapConfig::default();
        assert_eq!(config.data.base_dir, "public/data");
        assert_eq!(config.data.companies, "company.json");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.map.categories, CategorySet::Full);
        assert_eq!(config.map.view.zoom, 11);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = LakeMapConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_bad_center() {
        let mut config = LakeMapConfig::default();
        config.map.view.center.latitude = 200.0;
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("not a valid coordinate"));
    }

    #[test]
    fn test_apply_defaults_fills_empty_values() {
        let mut config = LakeMapConfig::default();
        config.data.lakes.clear();
        config.server.port = 0;
        config.logging.format.clear();
        config.apply_defaults();
        assert_eq!(config.data.lakes, "lakes.json");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[data]
base_dir = "/srv/lakemap"

[server]
port = 8080

[map]
categories = "reduced"
"#
        )
        .unwrap();

        let config = LakeMapConfig::load_from_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.data.base_dir, "/srv/lakemap");
        assert_eq!(config.data.hotels, "hotels.json");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.map.categories, CategorySet::Reduced);
        assert_eq!(config.map.view.zoom, 11);
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = LakeMapConfig::load_from_path(Some(missing)).unwrap_err();
        let err = err.downcast_ref::<LakeMapError>().unwrap();
        assert!(matches!(err, LakeMapError::Config { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_config_path_generation() {
        let path = LakeMapConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("lakemap"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}

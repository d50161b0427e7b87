//! Error types and handling for the `LakeMap` application

use thiserror::Error;

/// Main error type for the `LakeMap` application
#[derive(Error, Debug)]
pub enum LakeMapError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A dataset resource could not be fetched or parsed
    #[error("Failed to load {resource}: {message}")]
    Load { resource: String, message: String },

    /// A record with unusable coordinates or fields
    #[error("Invalid record: {message}")]
    InvalidRecord { message: String },

    /// Non-finite or out-of-domain input reaching a derived computation
    #[error("Computation error: {message}")]
    Computation { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON decoding errors
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl LakeMapError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new load error for the named resource
    pub fn load<R: Into<String>, S: Into<String>>(resource: R, message: S) -> Self {
        Self::Load {
            resource: resource.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid record error
    pub fn invalid_record<S: Into<String>>(message: S) -> Self {
        Self::InvalidRecord {
            message: message.into(),
        }
    }

    /// Create a new computation error
    pub fn computation<S: Into<String>>(message: S) -> Self {
        Self::Computation {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            LakeMapError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            LakeMapError::Load { resource, .. } => {
                format!("Could not load {resource}. Check the data location in your config.")
            }
            LakeMapError::InvalidRecord { message } => format!("Invalid record: {message}"),
            LakeMapError::Computation { message } => format!("Cannot compute: {message}"),
            LakeMapError::Validation { message } => format!("Invalid input: {message}"),
            LakeMapError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            LakeMapError::Json { .. } => {
                "Malformed JSON. Please check the input file.".to_string()
            }
        }
    }
}

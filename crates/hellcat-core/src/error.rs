//! Error types for roaming operations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that abort a roaming run.
#[derive(Debug, Error)]
pub enum RoamError {
    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl RoamError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Whether this error means the node does not exist.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Path the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::NotFound { path } | Self::PermissionDenied { path } | Self::Io { path, .. } => {
                Some(path)
            }
            Self::InvalidConfig { .. } => None,
        }
    }
}

impl From<derive_builder::UninitializedFieldError> for RoamError {
    fn from(e: derive_builder::UninitializedFieldError) -> Self {
        Self::config(format!("Missing field: {}", e.field_name()))
    }
}

/// Kind of roaming warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// A directory could not be enumerated; its siblings were still visited.
    Unreadable,
    /// The neighborhood of an entry could not be computed and defaulted to 1.
    Neighborhood,
}

/// Non-fatal condition reported while roaming.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoamWarning {
    /// Path where the warning occurred.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl RoamWarning {
    /// Create a new warning.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Create an unreadable directory warning.
    pub fn unreadable(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        Self::new(path, format!("Read error: {error}"), WarningKind::Unreadable)
    }

    /// Create a degraded neighborhood warning.
    pub fn neighborhood(path: impl Into<PathBuf>, error: &RoamError) -> Self {
        Self::new(path, error.to_string(), WarningKind::Neighborhood)
    }
}

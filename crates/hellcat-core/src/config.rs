//! Traversal configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::RoamError;

/// Release version reported by `hh -v`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration for a single roaming run.
///
/// Built once at startup and only read afterwards.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(
    setter(into),
    build_fn(validate = "Self::validate", error = "RoamError")
)]
pub struct RoamConfig {
    /// Absolute working directory relative top-level paths resolve against.
    pub working: PathBuf,

    /// Files and directories to inspect, in order.
    #[builder(default = "vec![PathBuf::from(\".\")]")]
    #[serde(default = "default_toplevels")]
    pub toplevels: Vec<PathBuf>,

    /// Hex dump text files as well as binary ones.
    #[builder(default = "false")]
    #[serde(default)]
    pub force_dump: bool,

    /// Descend into directories and print file contents.
    #[builder(default = "false")]
    #[serde(default)]
    pub recurse: bool,

    /// Bytes read per chunk. The first chunk is also the sniffing window.
    #[builder(default = "1024")]
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Bytes per hex dump row.
    #[builder(default = "8")]
    #[serde(default = "default_hex_width")]
    pub hex_width: usize,

    /// How the owner/group column is rendered.
    #[builder(default)]
    #[serde(default)]
    pub identity: IdentityMode,
}

/// Rendering of the owner/group column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityMode {
    /// Names from the host user/group databases, numeric when unknown.
    #[default]
    Names,
    /// Raw numeric ids.
    Numeric,
    /// No owner/group column.
    Hidden,
}

fn default_toplevels() -> Vec<PathBuf> {
    vec![PathBuf::from(".")]
}

fn default_chunk_size() -> usize {
    1024
}

fn default_hex_width() -> usize {
    8
}

impl RoamConfigBuilder {
    fn validate(&self) -> Result<(), RoamError> {
        match self.working {
            Some(ref working) if working.as_os_str().is_empty() => {
                return Err(RoamError::config("Working directory cannot be empty"));
            }
            Some(ref working) if !working.is_absolute() => {
                return Err(RoamError::config(format!(
                    "Working directory must be absolute: {}",
                    working.display()
                )));
            }
            Some(_) => {}
            None => return Err(RoamError::config("Working directory is required")),
        }
        if self.chunk_size == Some(0) {
            return Err(RoamError::config("Chunk size must be positive"));
        }
        if self.hex_width == Some(0) {
            return Err(RoamError::config("Hex width must be positive"));
        }
        Ok(())
    }
}

impl RoamConfig {
    /// Create a new config builder.
    pub fn builder() -> RoamConfigBuilder {
        RoamConfigBuilder::default()
    }

    /// Create a config that lists the working directory itself.
    pub fn new(working: impl Into<PathBuf>) -> Self {
        Self {
            working: working.into(),
            toplevels: default_toplevels(),
            force_dump: false,
            recurse: false,
            chunk_size: default_chunk_size(),
            hex_width: default_hex_width(),
            identity: IdentityMode::Names,
        }
    }

    /// Top-level paths to visit, falling back to `.` when none were given.
    pub fn toplevels(&self) -> Vec<PathBuf> {
        if self.toplevels.is_empty() {
            default_toplevels()
        } else {
            self.toplevels.clone()
        }
    }
}

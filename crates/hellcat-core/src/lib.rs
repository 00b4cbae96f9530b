//! Core types for hellcat.
//!
//! This crate provides the plain data structures shared by the roaming
//! engine and the command line front end: traversal configuration,
//! error and warning types, directory entries, file modes and the
//! compact formatting helpers used on every listing line.

mod config;
mod error;
mod format;
mod mode;
mod node;
mod paths;

pub use config::{IdentityMode, RoamConfig, RoamConfigBuilder, VERSION};
pub use error::{RoamError, RoamWarning, WarningKind};
pub use format::{Magnitude, abbreviate, format_neighbors, format_size};
pub use mode::FileMode;
pub use node::{Entry, EntryKind, Ownership, RoamStats};
pub use paths::{clean_path, resolve_toplevel};

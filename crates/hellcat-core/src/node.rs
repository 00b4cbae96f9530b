//! Directory entry types.

use std::path::PathBuf;
use std::time::SystemTime;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::error::RoamWarning;
use crate::mode::FileMode;

/// Numeric owner and group of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ownership {
    /// Owning user id.
    pub uid: u32,
    /// Owning group id.
    pub gid: u32,
}

impl Ownership {
    /// Create new ownership info.
    pub fn new(uid: u32, gid: u32) -> Self {
        Self { uid, gid }
    }
}

/// Type of file system node, as seen without following links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// Regular file.
    File {
        /// Whether the file is executable.
        executable: bool,
    },
    /// Directory.
    Directory,
    /// Symbolic link.
    Symlink {
        /// Link target, as stored in the link.
        target: CompactString,
    },
    /// Other file types (sockets, devices, fifos).
    Other,
}

impl EntryKind {
    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }

    /// Check if this is a regular file.
    pub fn is_file(&self) -> bool {
        matches!(self, EntryKind::File { .. })
    }

    /// Check if this is a symlink.
    pub fn is_symlink(&self) -> bool {
        matches!(self, EntryKind::Symlink { .. })
    }
}

/// One listed child of a directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// File name (not full path).
    pub name: CompactString,

    /// Absolute path of the entry.
    pub path: PathBuf,

    /// Cleaned path relative to the top-level root, used for display.
    pub relative: PathBuf,

    /// Node type and associated metadata.
    pub kind: EntryKind,

    /// Type and permission bits.
    pub mode: FileMode,

    /// Size in bytes (of the link itself for symlinks).
    pub size: u64,

    /// Last modification time.
    pub modified: SystemTime,

    /// Owner and group, where the platform exposes them.
    pub ownership: Option<Ownership>,
}

impl Entry {
    /// Check if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Name column: the relative path, plus `-> target` for symlinks.
    pub fn display_name(&self) -> String {
        match &self.kind {
            EntryKind::Symlink { target } => {
                format!("{} -> {}", self.relative.display(), target)
            }
            _ => self.relative.display().to_string(),
        }
    }
}

/// Summary of a roaming run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoamStats {
    /// Listing lines printed.
    pub entries_listed: u64,
    /// Directories enumerated.
    pub directories_walked: u64,
    /// Files whose content was reported.
    pub files_reported: u64,
    /// Top-level or reported paths that did not exist.
    pub missing: u64,
    /// Non-fatal conditions, in the order they occurred.
    pub warnings: Vec<RoamWarning>,
}

impl RoamStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a non-fatal condition.
    pub fn warn(&mut self, warning: RoamWarning) {
        self.warnings.push(warning);
    }
}

//! Directory listing and depth-first traversal.

use std::fs::Metadata;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::MetadataExt;

use chrono::{DateTime, SecondsFormat, Utc};
use compact_str::CompactString;

use hellcat_core::{
    Entry, EntryKind, FileMode, Ownership, RoamError, RoamStats, RoamWarning, clean_path,
    format_neighbors, format_size,
};

use crate::console::Console;
use crate::identity::IdentityResolver;
use crate::neighborhood::neighborhood;
use crate::report::FileReporter;

/// Lists directories one line per entry, optionally descending.
pub struct DirectoryWalker<'a> {
    identity: &'a dyn IdentityResolver,
    reporter: FileReporter,
    recurse: bool,
}

impl<'a> DirectoryWalker<'a> {
    /// Create a walker.
    pub fn new(identity: &'a dyn IdentityResolver, reporter: FileReporter, recurse: bool) -> Self {
        Self {
            identity,
            reporter,
            recurse,
        }
    }

    /// List the entries of `current`, naming them relative to `toplevel`.
    ///
    /// A directory that is missing or unreadable is reported on the
    /// error stream and skipped, as is any single child that cannot be
    /// inspected. With recursion enabled, directories are walked and
    /// other entries reported immediately after their own listing line.
    pub fn walk<W: Write, E: Write>(
        &self,
        toplevel: &Path,
        current: &Path,
        console: &mut Console<W, E>,
        stats: &mut RoamStats,
    ) -> Result<(), RoamError> {
        let (entries, skipped) = match read_entries(toplevel, current) {
            Ok(listing) => listing,
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::PermissionDenied) => {
                let warning = RoamWarning::unreadable(current, &e);
                console.warn(&warning)?;
                stats.warn(warning);
                return Ok(());
            }
            Err(e) => return Err(RoamError::io(current, e)),
        };

        stats.directories_walked += 1;
        tracing::debug!(path = %current.display(), entries = entries.len(), "walking");

        for warning in skipped {
            console.warn(&warning)?;
            stats.warn(warning);
        }

        for entry in entries {
            let line = self.listing_line(&entry, console, stats)?;
            console.line(&entry.path, &line)?;
            stats.entries_listed += 1;

            if !self.recurse {
                continue;
            }
            match entry.kind {
                EntryKind::Directory => self.walk(toplevel, &entry.path, console, stats)?,
                EntryKind::File { .. } | EntryKind::Symlink { .. } => {
                    self.reporter.report(&entry.path, console, stats)?;
                }
                EntryKind::Other => {}
            }
        }

        Ok(())
    }

    /// Format the listing line for one entry.
    ///
    /// Neighborhood failures degrade to 1 with a warning.
    fn listing_line<W: Write, E: Write>(
        &self,
        entry: &Entry,
        console: &mut Console<W, E>,
        stats: &mut RoamStats,
    ) -> Result<String, RoamError> {
        let neighbors = match neighborhood(&entry.path) {
            Ok(n) => n,
            Err(e) => {
                let warning = RoamWarning::neighborhood(&entry.path, &e);
                console.warn(&warning)?;
                stats.warn(warning);
                1
            }
        };

        Ok(format_listing(
            entry,
            neighbors,
            &self.identity.column(entry.ownership),
        ))
    }
}

/// `<mode> <neighbors><ids> <size> <timestamp> <name>`
pub fn format_listing(entry: &Entry, neighbors: u64, ids: &str) -> String {
    let modified: DateTime<Utc> = entry.modified.into();
    format!(
        "{} {:>4}{} {:>4} {} {}",
        entry.mode,
        format_neighbors(neighbors),
        ids,
        format_size(entry.size),
        modified.to_rfc3339_opts(SecondsFormat::Secs, true),
        entry.display_name()
    )
}

/// Enumerate the immediate children of `current`, sorted by name.
///
/// Children that vanish or cannot be inspected are left out and come
/// back as warnings.
fn read_entries(
    toplevel: &Path,
    current: &Path,
) -> std::io::Result<(Vec<Entry>, Vec<RoamWarning>)> {
    let mut entries = Vec::new();
    let mut skipped = Vec::new();

    for dir_entry in std::fs::read_dir(current)? {
        let path = dir_entry?.path();
        let relative = clean_path(path.strip_prefix(toplevel).unwrap_or(path.as_path()));
        match build_entry(&path, relative) {
            Ok(entry) => entries.push(entry),
            Err(e) => skipped.push(RoamWarning::unreadable(path, &e)),
        }
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    skipped.sort_by(|a, b| a.path.cmp(&b.path));
    Ok((entries, skipped))
}

fn build_entry(path: &Path, relative: PathBuf) -> std::io::Result<Entry> {
    let metadata = std::fs::symlink_metadata(path)?;
    let mode = FileMode::from_metadata(&metadata);
    let file_type = metadata.file_type();

    let kind = if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_symlink() {
        let target = std::fs::read_link(path)?;
        EntryKind::Symlink {
            target: CompactString::new(target.to_string_lossy()),
        }
    } else if file_type.is_file() {
        EntryKind::File {
            executable: mode.is_executable(),
        }
    } else {
        EntryKind::Other
    };

    let name = path
        .file_name()
        .map(|n| CompactString::new(n.to_string_lossy()))
        .unwrap_or_default();

    Ok(Entry {
        name,
        path: path.to_path_buf(),
        relative,
        kind,
        mode,
        size: metadata.len(),
        modified: metadata.modified().unwrap_or(std::time::UNIX_EPOCH),
        ownership: get_ownership(&metadata),
    })
}

/// Owner and group ids from metadata.
#[cfg(unix)]
fn get_ownership(metadata: &Metadata) -> Option<Ownership> {
    Some(Ownership::new(metadata.uid(), metadata.gid()))
}

#[cfg(not(unix))]
fn get_ownership(_metadata: &Metadata) -> Option<Ownership> {
    None
}

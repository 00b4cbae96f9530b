//! Lexical path helpers.

use std::path::{Component, Path, PathBuf};

/// Normalize a path without touching the filesystem.
///
/// `.` segments are dropped and `..` removes the preceding normal
/// segment. A `..` directly under the root is dropped; leading `..`
/// segments of a relative path are kept. An empty result becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Resolve a user-supplied path against the working directory.
pub fn resolve_toplevel(working: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        clean_path(path)
    } else {
        clean_path(&working.join(path))
    }
}

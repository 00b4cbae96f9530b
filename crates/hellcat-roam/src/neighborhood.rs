//! Neighborhood metric: nodes within one edge of a path.

use std::path::Path;

use hellcat_core::RoamError;

/// Count the nodes within one edge of `path`.
///
/// Missing paths and non-directories count as one. A directory counts
/// its self link and parent link plus one per immediate child. The
/// path is stat'ed following symlinks; children are enumerated afresh
/// on every call.
pub fn neighborhood(path: &Path) -> Result<u64, RoamError> {
    let metadata = match std::fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(1),
        Err(e) => return Err(RoamError::io(path, e)),
    };

    if !metadata.is_dir() {
        return Ok(1);
    }

    let mut children: u64 = 0;
    for entry in std::fs::read_dir(path).map_err(|e| RoamError::io(path, e))? {
        entry.map_err(|e| RoamError::io(path, e))?;
        children += 1;
    }

    Ok(2 + children)
}

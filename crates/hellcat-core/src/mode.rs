//! File mode rendering for listing lines.

use std::fmt;
use std::fs::Metadata;

use serde::{Deserialize, Serialize};

const S_IFMT: u32 = 0o170000;
const S_IFSOCK: u32 = 0o140000;
const S_IFLNK: u32 = 0o120000;
const S_IFBLK: u32 = 0o060000;
const S_IFDIR: u32 = 0o040000;
const S_IFCHR: u32 = 0o020000;
const S_IFIFO: u32 = 0o010000;
const S_ISUID: u32 = 0o4000;
const S_ISGID: u32 = 0o2000;
const S_ISVTX: u32 = 0o1000;

/// Type and permission bits of a node, in the POSIX `st_mode` layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileMode(pub u32);

impl FileMode {
    /// Read the mode from `lstat`-style metadata.
    #[cfg(unix)]
    pub fn from_metadata(metadata: &Metadata) -> Self {
        use std::os::unix::fs::PermissionsExt;
        Self(metadata.permissions().mode())
    }

    /// Synthesize a mode from the file type and read-only flag.
    #[cfg(not(unix))]
    pub fn from_metadata(metadata: &Metadata) -> Self {
        let file_type = metadata.file_type();
        let kind = if file_type.is_dir() {
            S_IFDIR
        } else if file_type.is_symlink() {
            S_IFLNK
        } else {
            0o100000
        };
        let perm = if metadata.permissions().readonly() {
            0o444
        } else {
            0o666
        };
        let exec = if file_type.is_dir() { 0o111 } else { 0 };
        Self(kind | perm | exec)
    }

    /// Check if this is a directory.
    pub fn is_dir(self) -> bool {
        self.0 & S_IFMT == S_IFDIR
    }

    /// Check if this is a symbolic link.
    pub fn is_symlink(self) -> bool {
        self.0 & S_IFMT == S_IFLNK
    }

    /// Permission bits only.
    pub fn permissions(self) -> u32 {
        self.0 & 0o777
    }

    /// Check if any execute bit is set.
    pub fn is_executable(self) -> bool {
        self.0 & 0o111 != 0
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.0 & S_IFMT;
        let flags = [
            ('d', kind == S_IFDIR),
            ('L', kind == S_IFLNK),
            ('D', kind == S_IFBLK || kind == S_IFCHR),
            ('p', kind == S_IFIFO),
            ('S', kind == S_IFSOCK),
            ('u', self.0 & S_ISUID != 0),
            ('g', self.0 & S_ISGID != 0),
            ('c', kind == S_IFCHR),
            ('t', self.0 & S_ISVTX != 0),
        ];

        let mut out = String::with_capacity(12);
        out.extend(flags.iter().filter(|(_, set)| *set).map(|(c, _)| *c));
        if out.is_empty() {
            out.push('-');
        }

        const RWX: &[u8; 9] = b"rwxrwxrwx";
        for (i, c) in RWX.iter().enumerate() {
            if self.0 & (1 << (8 - i)) != 0 {
                out.push(*c as char);
            } else {
                out.push('-');
            }
        }

        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_file() {
        assert_eq!(FileMode(0o100644).to_string(), "-rw-r--r--");
        assert_eq!(FileMode(0o100755).to_string(), "-rwxr-xr-x");
    }

    #[test]
    fn test_directory() {
        let mode = FileMode(0o040755);
        assert!(mode.is_dir());
        assert!(!mode.is_symlink());
        assert_eq!(mode.to_string(), "drwxr-xr-x");
    }

    #[test]
    fn test_symlink() {
        let mode = FileMode(0o120777);
        assert!(mode.is_symlink());
        assert_eq!(mode.to_string(), "Lrwxrwxrwx");
    }

    #[test]
    fn test_special_files() {
        assert_eq!(FileMode(0o020666).to_string(), "Dcrw-rw-rw-");
        assert_eq!(FileMode(0o010644).to_string(), "prw-r--r--");
        assert_eq!(FileMode(0o140755).to_string(), "Srwxr-xr-x");
        assert_eq!(FileMode(0o041777).to_string(), "dtrwxrwxrwx");
        assert_eq!(FileMode(0o104755).to_string(), "urwxr-xr-x");
    }

    #[test]
    fn test_permission_helpers() {
        let mode = FileMode(0o100750);
        assert_eq!(mode.permissions(), 0o750);
        assert!(mode.is_executable());
        assert!(!FileMode(0o100644).is_executable());
    }
}

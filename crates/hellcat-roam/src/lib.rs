//! Directory walking, content sniffing and hex rendering for hellcat.
//!
//! # Overview
//!
//! `hellcat-roam` prints an `ls -l` style report of files and
//! directories and, for files, either their text or a hex dump:
//!
//! - **Neighborhood** counts the nodes one edge away from a path
//! - **Sniffing** classifies a file's leading bytes as text or binary
//! - **Hex rendering** formats bytes as offset-prefixed rows
//! - **Walking** lists a directory and recurses depth-first
//! - **Roaming** dispatches each top-level path and tolerates missing ones
//!
//! # Example
//!
//! ```rust,no_run
//! use hellcat_roam::{Console, RoamConfig, Roamer};
//!
//! let config = RoamConfig::builder()
//!     .working("/home/user")
//!     .recurse(true)
//!     .build()
//!     .unwrap();
//!
//! let stats = Roamer::new(config).roam(&mut Console::stdio()).unwrap();
//! eprintln!("{} entries listed", stats.entries_listed);
//! ```

mod console;
mod hex;
mod identity;
mod neighborhood;
mod report;
mod roamer;
mod sniff;
mod walker;

pub use console::Console;
pub use hex::render_hex;
#[cfg(unix)]
pub use identity::SystemIdentity;
pub use identity::{IdentityResolver, NoIdentity, NumericIdentity, default_resolver};
pub use neighborhood::neighborhood;
pub use report::{FileReporter, Report};
pub use roamer::Roamer;
pub use sniff::{Classification, SNIFF_LEN, sniff};
pub use walker::{DirectoryWalker, format_listing};

// Re-export core types for convenience
pub use hellcat_core::{
    Entry, EntryKind, IdentityMode, RoamConfig, RoamError, RoamStats, RoamWarning, VERSION,
    WarningKind,
};

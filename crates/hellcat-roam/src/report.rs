//! File content reporting: verbatim text or hex dump.

use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use hellcat_core::{RoamConfig, RoamError, RoamStats, RoamWarning};

use crate::console::Console;
use crate::hex::render_hex;
use crate::sniff::Classification;

/// How a file's content was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    /// The file did not exist; `(Missing)` was printed.
    Missing,
    /// The file could not be opened for lack of permission; a warning
    /// was printed.
    Unreadable,
    /// The path is a directory; nothing was printed.
    Directory,
    /// The file was empty; nothing was printed.
    Empty,
    /// Bytes were streamed verbatim.
    Text { bytes: u64 },
    /// Bytes were hex dumped.
    Hex { bytes: u64 },
}

/// Prints file contents, hex dumping binary content.
#[derive(Debug, Clone, Copy)]
pub struct FileReporter {
    chunk_size: usize,
    hex_width: usize,
    force_dump: bool,
}

impl FileReporter {
    /// Create a reporter.
    pub fn new(chunk_size: usize, hex_width: usize, force_dump: bool) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
            hex_width: hex_width.max(1),
            force_dump,
        }
    }

    /// Create a reporter from a run configuration.
    pub fn from_config(config: &RoamConfig) -> Self {
        Self::new(config.chunk_size, config.hex_width, config.force_dump)
    }

    /// Print the content of the file at `path` and tally the outcome.
    ///
    /// The first chunk decides between text and hex for the whole file.
    /// Hex offsets count from the start of the file. A missing file
    /// prints `(Missing)` and an unreadable one a warning; neither is an
    /// error. The file is closed on every return path.
    pub fn report<W: Write, E: Write>(
        &self,
        path: &Path,
        console: &mut Console<W, E>,
        stats: &mut RoamStats,
    ) -> Result<Report, RoamError> {
        let report = self.print(path, console, stats)?;
        match report {
            Report::Missing => stats.missing += 1,
            Report::Unreadable | Report::Directory => {}
            Report::Empty | Report::Text { .. } | Report::Hex { .. } => stats.files_reported += 1,
        }
        Ok(report)
    }

    fn print<W: Write, E: Write>(
        &self,
        path: &Path,
        console: &mut Console<W, E>,
        stats: &mut RoamStats,
    ) -> Result<Report, RoamError> {
        let mut file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                console.missing(path)?;
                return Ok(Report::Missing);
            }
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                let warning = RoamWarning::unreadable(path, &e);
                console.warn(&warning)?;
                stats.warn(warning);
                return Ok(Report::Unreadable);
            }
            Err(e) => return Err(RoamError::io(path, e)),
        };

        if file.metadata().map_err(|e| RoamError::io(path, e))?.is_dir() {
            return Ok(Report::Directory);
        }

        let mut buf = vec![0u8; self.chunk_size];
        let mut count = read_chunk(&mut file, &mut buf).map_err(|e| RoamError::io(path, e))?;
        if count == 0 {
            return Ok(Report::Empty);
        }

        let classification = Classification::of(&buf[..count]);
        let dump = self.force_dump || classification.is_binary();
        tracing::trace!(path = %path.display(), ?classification, dump, "classified");

        let mut offset: u64 = 0;
        while count > 0 {
            let chunk = &buf[..count];
            if dump {
                for line in render_hex(chunk, offset, self.hex_width) {
                    console.line(path, &line)?;
                }
            } else {
                console.raw(path, chunk)?;
            }
            offset += count as u64;
            count = read_chunk(&mut file, &mut buf).map_err(|e| RoamError::io(path, e))?;
        }

        Ok(if dump {
            Report::Hex { bytes: offset }
        } else {
            Report::Text { bytes: offset }
        })
    }
}

/// Read once, retrying interrupted reads. Zero means end of input.
fn read_chunk(file: &mut File, buf: &mut [u8]) -> std::io::Result<usize> {
    loop {
        match file.read(buf) {
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            other => return other,
        }
    }
}

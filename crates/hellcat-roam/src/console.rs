//! Output and error streams for a run.

use std::io::{self, Stderr, Stdout, Write};
use std::path::Path;

use hellcat_core::{RoamError, RoamWarning};

/// Report stream plus diagnostic stream.
///
/// Listing lines and file content go to `out`; path loading problems go
/// to `err`.
#[derive(Debug)]
pub struct Console<W, E> {
    /// Report output.
    pub out: W,
    /// Diagnostic output.
    pub err: E,
}

impl Console<Stdout, Stderr> {
    /// Console bound to the process's standard streams.
    pub fn stdio() -> Self {
        Self {
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

impl Console<Vec<u8>, Vec<u8>> {
    /// Console capturing both streams in memory.
    pub fn buffered() -> Self {
        Self {
            out: Vec::new(),
            err: Vec::new(),
        }
    }

    /// Captured report output, lossily decoded.
    pub fn out_string(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }

    /// Captured diagnostics, lossily decoded.
    pub fn err_string(&self) -> String {
        String::from_utf8_lossy(&self.err).into_owned()
    }
}

impl<W: Write, E: Write> Console<W, E> {
    /// Create a console over arbitrary writers.
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    /// Write one report line.
    pub fn line(&mut self, path: &Path, line: &str) -> Result<(), RoamError> {
        writeln!(self.out, "{line}").map_err(|e| RoamError::io(path, e))
    }

    /// Write raw report bytes.
    pub fn raw(&mut self, path: &Path, bytes: &[u8]) -> Result<(), RoamError> {
        self.out.write_all(bytes).map_err(|e| RoamError::io(path, e))
    }

    /// Print the placeholder for a node that does not exist.
    pub fn missing(&mut self, path: &Path) -> Result<(), RoamError> {
        self.line(path, "(Missing)")
    }

    /// Report a non-fatal problem loading `warning.path`.
    pub fn warn(&mut self, warning: &RoamWarning) -> Result<(), RoamError> {
        tracing::debug!(path = %warning.path.display(), kind = ?warning.kind, "{}", warning.message);
        writeln!(self.err, "Error loading path: {}", warning.path.display())
            .map_err(|e| RoamError::io(&warning.path, e))
    }

    /// Flush the report stream.
    pub fn flush(&mut self) -> Result<(), RoamError> {
        self.out.flush().map_err(|e| RoamError::io("<stdout>", e))
    }
}

//! Top-level dispatch over the configured paths.

use std::io::{ErrorKind, Write};

use hellcat_core::{RoamConfig, RoamError, RoamStats, resolve_toplevel};

use crate::console::Console;
use crate::identity::{IdentityResolver, default_resolver};
use crate::report::FileReporter;
use crate::walker::DirectoryWalker;

/// Walks or reports each configured top-level path in order.
pub struct Roamer {
    config: RoamConfig,
    identity: Box<dyn IdentityResolver>,
}

impl Roamer {
    /// Create a roamer using the identity resolver the config asks for.
    pub fn new(config: RoamConfig) -> Self {
        let identity = default_resolver(config.identity);
        Self { config, identity }
    }

    /// Replace the identity resolver.
    pub fn with_identity(mut self, identity: Box<dyn IdentityResolver>) -> Self {
        self.identity = identity;
        self
    }

    /// Roam every top-level path, writing the report to `console`.
    ///
    /// Missing top-levels print `(Missing)` and are skipped; unreadable
    /// files are reported as warnings. The first fatal error stops the
    /// run.
    pub fn roam<W: Write, E: Write>(
        &self,
        console: &mut Console<W, E>,
    ) -> Result<RoamStats, RoamError> {
        let reporter = FileReporter::from_config(&self.config);
        let walker = DirectoryWalker::new(self.identity.as_ref(), reporter, self.config.recurse);
        let mut stats = RoamStats::new();

        for toplevel in self.config.toplevels() {
            let path = resolve_toplevel(&self.config.working, &toplevel);

            let metadata = match std::fs::metadata(&path) {
                Ok(m) => m,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    tracing::debug!(path = %path.display(), "missing toplevel");
                    console.missing(&path)?;
                    stats.missing += 1;
                    continue;
                }
                Err(e) => return Err(RoamError::io(&path, e)),
            };

            if metadata.is_dir() {
                tracing::debug!(path = %path.display(), "walking toplevel");
                walker.walk(&path, &path, console, &mut stats)?;
            } else {
                tracing::debug!(path = %path.display(), "reporting toplevel");
                reporter.report(&path, console, &mut stats)?;
            }
        }

        console.flush()?;
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hellcat_core::IdentityMode;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config(working: &std::path::Path, toplevels: &[&str]) -> RoamConfig {
        RoamConfig::builder()
            .working(working)
            .toplevels(toplevels.iter().map(PathBuf::from).collect::<Vec<_>>())
            .identity(IdentityMode::Hidden)
            .build()
            .unwrap()
    }

    #[test]
    fn test_missing_toplevel() {
        let temp = TempDir::new().unwrap();
        let mut console = Console::buffered();
        let stats = Roamer::new(config(temp.path(), &["nope"]))
            .roam(&mut console)
            .unwrap();

        assert_eq!(console.out_string(), "(Missing)\n");
        assert_eq!(stats.missing, 1);
    }

    #[test]
    fn test_forced_dump_of_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "hello").unwrap();

        let mut cfg = config(temp.path(), &["a.txt"]);
        cfg.force_dump = true;
        let mut console = Console::buffered();
        Roamer::new(cfg).roam(&mut console).unwrap();

        assert_eq!(console.out_string(), "00000000 68 65 6c 6c 6f\n");
    }

    #[test]
    fn test_missing_does_not_stop_later_toplevels() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "hello").unwrap();

        let mut console = Console::buffered();
        let stats = Roamer::new(config(temp.path(), &["nope", "a.txt", "also-nope"]))
            .roam(&mut console)
            .unwrap();

        assert_eq!(console.out_string(), "(Missing)\nhello(Missing)\n");
        assert_eq!(stats.missing, 2);
        assert_eq!(stats.files_reported, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_does_not_stop_later_toplevels() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let secret = temp.path().join("secret");
        fs::write(&secret, "classified").unwrap();
        fs::write(temp.path().join("z.txt"), "last").unwrap();
        fs::set_permissions(&secret, fs::Permissions::from_mode(0o000)).unwrap();
        if fs::File::open(&secret).is_ok() {
            // Permission bits do not apply to this user.
            return;
        }

        let mut console = Console::buffered();
        let stats = Roamer::new(config(temp.path(), &["secret", "z.txt"]))
            .roam(&mut console)
            .unwrap();

        assert_eq!(console.out_string(), "last");
        assert_eq!(
            console.err_string(),
            format!("Error loading path: {}\n", secret.display())
        );
        assert_eq!(stats.warnings.len(), 1);
        assert_eq!(stats.files_reported, 1);
    }

    #[test]
    fn test_directory_toplevel_lists_relative_names() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub/a.txt"), "hello").unwrap();

        let mut console = Console::buffered();
        Roamer::new(config(temp.path(), &["sub"]))
            .roam(&mut console)
            .unwrap();

        let out = console.out_string();
        assert_eq!(out.lines().count(), 1);
        assert!(out.trim_end().ends_with(" a.txt"));
    }

    #[test]
    fn test_default_toplevel_is_working_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("only"), "").unwrap();

        let mut cfg = config(temp.path(), &[]);
        cfg.toplevels.clear();
        let mut console = Console::buffered();
        let stats = Roamer::new(cfg).roam(&mut console).unwrap();

        assert_eq!(stats.entries_listed, 1);
        assert!(console.out_string().trim_end().ends_with(" only"));
    }

    #[test]
    fn test_custom_identity_resolver() {
        struct Everyone;
        impl IdentityResolver for Everyone {
            fn user_name(&self, _uid: u32) -> Option<String> {
                Some("everyone".into())
            }
            fn group_name(&self, _gid: u32) -> Option<String> {
                Some("all".into())
            }
        }

        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("f"), "").unwrap();

        let mut console = Console::buffered();
        Roamer::new(config(temp.path(), &["."]))
            .with_identity(Box::new(Everyone))
            .roam(&mut console)
            .unwrap();

        let out = console.out_string();
        if cfg!(unix) {
            assert!(out.contains(" everyone      all "));
        } else {
            assert!(!out.contains("everyone"));
        }
    }
}

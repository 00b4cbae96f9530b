//! hh - ls, cat and hexdump in one.
//!
//! Usage:
//!   hh [PATH]...        List directories, print files
//!   hh -r [PATH]...     Recurse, printing every file's content
//!   hh -x [PATH]...     Hex dump text files too
//!   hh -h               Show help
//!   hh -v               Show version

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use hellcat_core::VERSION;
use hellcat_roam::{Console, IdentityMode, RoamConfig, Roamer};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "HELLCAT_LOG";

#[derive(Parser)]
#[command(
    name = "hh",
    about = "Inspect files and directories: listings, text and hex dumps",
    disable_version_flag = true
)]
struct Cli {
    /// Files and directories to inspect (defaults to current directory)
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Force hexadecimal dump for text files
    #[arg(short = 'x')]
    examine: bool,

    /// Recurse over directories
    #[arg(short = 'r')]
    recurse: bool,

    /// Print numeric owner and group ids
    #[arg(short = 'n', long = "numeric-ids")]
    numeric_ids: bool,

    /// Omit the owner and group columns
    #[arg(long = "no-ids", conflicts_with = "numeric_ids")]
    no_ids: bool,

    /// Show version information
    #[arg(short = 'v')]
    version: bool,
}

impl Cli {
    fn identity_mode(&self) -> IdentityMode {
        if self.no_ids {
            IdentityMode::Hidden
        } else if self.numeric_ids {
            IdentityMode::Numeric
        } else {
            IdentityMode::Names
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();

    if cli.version {
        println!("{VERSION}");
        return Ok(());
    }

    let working = std::env::current_dir().context("Cannot determine working directory")?;
    let identity = cli.identity_mode();

    let config = RoamConfig::builder()
        .working(working)
        .toplevels(cli.paths)
        .force_dump(cli.examine)
        .recurse(cli.recurse)
        .identity(identity)
        .build()?;

    let mut console = Console::stdio();

    match Roamer::new(config).roam(&mut console) {
        Ok(stats) => {
            tracing::debug!(
                entries = stats.entries_listed,
                files = stats.files_reported,
                missing = stats.missing,
                warnings = stats.warnings.len(),
                "done"
            );
            Ok(())
        }
        Err(e) if e.is_missing() => {
            console.flush().ok();
            if let Some(path) = e.path() {
                eprintln!("Error loading path: {}", path.display());
            }
            std::process::exit(1);
        }
        Err(e) => Err(e).context("Roaming failed"),
    }
}

/// Log to stderr, filtered by `HELLCAT_LOG`. Silent by default.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

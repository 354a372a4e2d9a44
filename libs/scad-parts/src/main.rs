//! Renders catalog parts to `.scad` files.
//!
//! ```text
//! scad-parts washer keystone          # into $SCAD_DIRECTORY or .
//! scad-parts --all --dir build/
//! scad-parts coffee-cover -o lid.scad
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use config::constants::RenderConfig;
use scad_parts::{OutputDir, Part, PartError};
use scad_tree::TreeStats;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scad-parts")]
#[command(about = "Render parametric parts to OpenSCAD source", long_about = None)]
#[command(version)]
struct Cli {
    /// Parts to render
    #[arg(value_enum, required_unless_present = "all")]
    parts: Vec<Part>,

    /// Render every part in the catalog
    #[arg(long, conflicts_with = "parts")]
    all: bool,

    /// Output directory (overrides SCAD_DIRECTORY)
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Output file name, only valid with a single part
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Spaces per nesting level
    #[arg(long, default_value_t = config::constants::DEFAULT_INDENT)]
    indent: usize,

    /// Fixed decimal places for numbers (shortest form when omitted)
    #[arg(long)]
    decimal_places: Option<usize>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] config::constants::ConfigError),

    #[error("{0} part(s) failed")]
    Failed(usize),

    #[error("--output needs exactly one part, got {0}")]
    AmbiguousOutput(usize),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let parts = if cli.all { Part::ALL.to_vec() } else { cli.parts };

    let mut config = RenderConfig::new(cli.indent)?;
    if let Some(places) = cli.decimal_places {
        config = config.with_decimal_places(places)?;
    }

    if cli.output.is_some() && parts.len() != 1 {
        return Err(CliError::AmbiguousOutput(parts.len()));
    }

    let dir = OutputDir::with_override(cli.dir);
    let mut failed = 0;
    for part in parts {
        let file_name = cli.output.clone().unwrap_or_else(|| PathBuf::from(part.file_name()));
        if let Err(err) = write_part(part, &dir, file_name, &config) {
            error!(part = ?part, "{err}");
            failed += 1;
        }
    }

    match failed {
        0 => Ok(()),
        n => Err(CliError::Failed(n)),
    }
}

/// Build one part and save it under `dir`.
fn write_part(
    part: Part,
    dir: &OutputDir,
    file_name: PathBuf,
    config: &RenderConfig,
) -> Result<(), PartError> {
    let node = part.build()?;
    let path = dir.save(&node, file_name, config)?;

    let stats = TreeStats::of(&node);
    info!(
        path = %path.display(),
        nodes = stats.nodes,
        primitives = stats.primitives,
        depth = stats.depth,
        "wrote {part:?}"
    );
    Ok(())
}

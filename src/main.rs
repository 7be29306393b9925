//! Main entry point for the `memtree` demonstration binary.
//!
//! Builds the sample tree from [`memtree::sample`] and prints it.
//!
//! # Output Modes
//! - Text (default): root size, root item count, the hierarchy, then the size
//!   and item count of the directory reached through a link to `/home/tim`
//! - CSV export via `--format csv [--output <file.csv>]`
//! - JSON export via `--format json [--output <file.json>]`

use anyhow::{Context, Result};
use clap::Parser;
use memtree::cli::{Args, OutputFormat};
use memtree::{logging, output, sample};
use std::io;
use tracing::info;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose)?;

    let sample = sample::build().context("Failed to build sample tree")?;
    info!(nodes = sample.tree.node_count(), "sample tree built");

    match args.format {
        OutputFormat::Text => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            output::render_terminal(&sample.tree, &sample.link, &args, &mut out)?;
        }
        OutputFormat::Csv => {
            let entries = sample.tree.entries(sample.tree.root())?;
            output::render_csv(&entries, &args)?;
        }
        OutputFormat::Json => {
            let entries = sample.tree.entries(sample.tree.root())?;
            output::render_json(&entries, &args)?;
        }
    }

    Ok(())
}

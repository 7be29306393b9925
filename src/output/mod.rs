//! Output formatters for the `memtree` demo.
//!
//! # Available Formatters
//!
//! - **Terminal**: root size, item count, the indented hierarchy and the
//!   directory reached through the sample link
//! - **CSV**: one record per node, for spreadsheets and scripts
//! - **JSON**: the same records as a JSON array
//!
//! The CSV and JSON formatters work on the flat [`TreeEntry`](crate::data::TreeEntry)
//! list produced by [`Tree::entries`](crate::tree::Tree::entries).

pub mod csv;
pub mod json;
pub mod terminal;

use crate::cli::Args;
use anyhow::{Context, Result};
use std::fs::File;
use std::io;

/// Opens `--output` if given, stdout otherwise.
pub(crate) fn open_writer(args: &Args) -> Result<Box<dyn io::Write>> {
    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

// Re-export the main render functions for convenience

/// CSV output renderer function.
///
/// See [`csv::render`] for full documentation.
pub use self::csv::render as render_csv;

/// JSON output renderer function.
///
/// See [`json::render`] for full documentation.
pub use self::json::render as render_json;

/// Terminal output renderer function.
///
/// See [`terminal::render`] for full documentation.
pub use self::terminal::render as render_terminal;

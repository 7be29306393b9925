//! CLI interface definitions for the `memtree` demonstration binary.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`Args`]: the main struct parsed from CLI inputs
//! - [`OutputFormat`]: an enum selecting text, CSV or JSON output
//!
//! # Example
//!
//! ```bash
//! memtree --format csv --output tree.csv -v
//! ```

use clap::{Parser, ValueEnum};

/// Command-line arguments for the `memtree` demo.
///
/// The binary always builds the same sample tree; these flags only control
/// how it is printed and how much is logged.
#[derive(Parser, Debug)]
#[command(name = "memtree", version, about)]
pub struct Args {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write CSV or JSON output to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub output: Option<String>,

    /// Show file sizes in human-readable units (text output only)
    #[arg(long, default_value_t = false)]
    pub human: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Enum for selecting the output format.
///
/// # Variants
/// * `Text` - Size, item count and indented hierarchy
/// * `Csv` - One CSV record per node
/// * `Json` - A JSON array of node records
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["memtree"]);
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.output, None);
        assert!(!args.human);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from(["memtree", "--format", "csv", "--output", "t.csv", "-vv"]);
        assert_eq!(args.format, OutputFormat::Csv);
        assert_eq!(args.output.as_deref(), Some("t.csv"));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Args::try_parse_from(["memtree", "--format", "xml"]).is_err());
    }
}

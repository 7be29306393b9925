//! Terminal output formatter.
//!
//! Prints, one per line: the root size, the root item count, the rendered
//! hierarchy, then the size and item count of the directory reached by
//! resolving the sample link.

use crate::cli::Args;
use crate::item::SymLink;
use crate::tree::Tree;
use anyhow::{Context, Result};
use humansize::{format_size, DECIMAL};
use std::io;

/// Writes the text report for `tree` and `link` to `out`.
///
/// # Arguments
/// * `tree` - The tree to report on, starting at its root
/// * `link` - A link expected to point at a directory of `tree`
/// * `args` - Command line arguments; `human` switches to `humansize` units
/// * `out` - Destination, usually stdout
///
/// # Errors
/// Fails if the link does not resolve to a directory or `out` cannot be written.
pub fn render<W: io::Write>(tree: &Tree, link: &SymLink, args: &Args, out: &mut W) -> Result<()> {
    let size = |bytes: u64| {
        if args.human {
            format_size(bytes, DECIMAL)
        } else {
            bytes.to_string()
        }
    };

    let root = tree.root();
    writeln!(out, "{}", size(tree.size(root)?))?;
    writeln!(out, "{}", tree.number_of_items(root)?)?;
    write!(out, "{}", tree.render_with(root, size)?)?;

    let target = tree
        .resolve_directory(link)
        .with_context(|| format!("Failed to resolve link '{}'", link.name()))?;
    writeln!(out, "{}", size(tree.size(target)?))?;
    writeln!(out, "{}", tree.number_of_items(target)?)?;
    out.flush()?;
    Ok(())
}

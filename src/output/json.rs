//! JSON output formatter for flattened tree entries.

use crate::cli::Args;
use crate::data::TreeEntry;
use anyhow::{Context, Result};
use std::io;

/// Renders entries as a pretty-printed JSON array to `--output` or stdout.
pub fn render(entries: &[TreeEntry], args: &Args) -> Result<()> {
    write(entries, super::open_writer(args)?)?;

    if let Some(output_file) = &args.output {
        eprintln!("JSON output written to: {}", output_file);
    }

    Ok(())
}

pub fn write<W: io::Write>(entries: &[TreeEntry], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, entries).context("Failed to serialize entries")?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::EntryType;

    #[test]
    fn test_write_json() {
        let entries = vec![TreeEntry {
            entry_type: EntryType::Link,
            path: "/up".to_string(),
            size: 0,
            items: None,
        }];

        let mut buf = Vec::new();
        write(&entries, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["entry_type"], "link");
        assert_eq!(value[0]["path"], "/up");
        assert_eq!(value[0]["size"], 0);
        assert!(value[0]["items"].is_null());
    }
}

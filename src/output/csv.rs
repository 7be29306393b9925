//! CSV output formatter for flattened tree entries.

use crate::cli::Args;
use crate::data::TreeEntry;
use anyhow::Result;
use csv::Writer;
use std::io;

/// Renders entries as CSV to `--output` or stdout.
///
/// # Arguments
/// * `entries` - Entries in the order they should be written
/// * `args` - Command line arguments; only `output` is used
pub fn render(entries: &[TreeEntry], args: &Args) -> Result<()> {
    write(entries, super::open_writer(args)?)?;

    if let Some(output_file) = &args.output {
        eprintln!("CSV output written to: {}", output_file);
    }

    Ok(())
}

/// Serializes entries with a header row into `writer`.
pub fn write<W: io::Write>(entries: &[TreeEntry], writer: W) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);

    for entry in entries {
        csv_writer.serialize(entry)?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::EntryType;

    #[test]
    fn test_write_csv() {
        let entries = vec![
            TreeEntry {
                entry_type: EntryType::Dir,
                path: "/home".to_string(),
                size: 100,
                items: Some(1),
            },
            TreeEntry {
                entry_type: EntryType::File,
                path: "/home/info.txt".to_string(),
                size: 100,
                items: None,
            },
        ];

        let mut buf = Vec::new();
        write(&entries, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "entry_type,path,size,items\ndir,/home,100,1\nfile,/home/info.txt,100,\n"
        );
    }
}

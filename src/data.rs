//! Flattened records of a tree, used by the CSV and JSON exporters.
//!
//! A [`TreeEntry`] describes one node of a [`Tree`](crate::tree::Tree) by its
//! path from the starting directory, so a whole subtree can be written out as
//! a flat list.

use crate::item::ItemKind;

/// One node of the tree, as produced by [`Tree::entries`](crate::tree::Tree::entries).
///
/// # Fields
/// * `entry_type` - Type of entry (file, directory or link)
/// * `path` - Names joined with `/` from the starting directory down to the node
/// * `size` - File size, recursive size for directories, zero for links
/// * `items` - Number of immediate children for directories
///
/// Names are joined verbatim, so a name containing `/` stays inside its parent.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TreeEntry {
    pub entry_type: EntryType,
    pub path: String,
    pub size: u64,
    pub items: Option<usize>,
}

/// Represents the type of a flattened entry.
///
/// # Variants
/// * `File` - A file
/// * `Dir` - A directory
/// * `Link` - A symbolic link
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Dir,
    Link,
}

impl From<ItemKind> for EntryType {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::File => EntryType::File,
            ItemKind::Directory => EntryType::Dir,
            ItemKind::SymLink => EntryType::Link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_entry_creation() {
        let entry = TreeEntry {
            entry_type: EntryType::File,
            path: "/home/tim/info.txt".to_string(),
            size: 100,
            items: None,
        };

        assert_eq!(entry.size, 100);
        assert_eq!(entry.items, None);
        assert_eq!(entry.entry_type, EntryType::File);
    }

    #[test]
    fn test_entry_type_from_item_kind() {
        assert_eq!(EntryType::from(ItemKind::File), EntryType::File);
        assert_eq!(EntryType::from(ItemKind::Directory), EntryType::Dir);
        assert_eq!(EntryType::from(ItemKind::SymLink), EntryType::Link);
    }
}

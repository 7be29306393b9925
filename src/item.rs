//! Node types stored in a [`Tree`](crate::tree::Tree).
//!
//! Every node is an [`Item`]: a [`File`], a [`Directory`] or a [`SymLink`].
//! Callers narrow an item to a concrete variant with [`Item::as_file`],
//! [`Item::as_directory`] and [`Item::as_symlink`] instead of downcasting.

use std::fmt;

/// Handle of a node inside a [`Tree`](crate::tree::Tree).
///
/// A handle carries the id of the tree that issued it next to the node's
/// arena position. Looking it up in any other tree yields
/// [`TreeError::DanglingReference`](crate::error::TreeError::DanglingReference).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    tree: u64,
    index: usize,
}

impl NodeId {
    pub(crate) fn new(tree: u64, index: usize) -> Self {
        NodeId { tree, index }
    }

    /// Id of the tree that issued this handle.
    pub fn tree(&self) -> u64 {
        self.tree
    }

    /// Position of the node in the tree's arena.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}@{}", self.index, self.tree)
    }
}

/// Type tag of an item.
///
/// # Variants
/// * `File` - A leaf with a size and an extension
/// * `Directory` - A container of other items
/// * `SymLink` - A non-owning reference to another item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    File,
    Directory,
    SymLink,
}

impl ItemKind {
    /// Returns `"file"`, `"directory"` or `"symlink"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::File => "file",
            ItemKind::Directory => "directory",
            ItemKind::SymLink => "symlink",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A leaf entry. Immutable once built; copies are made with `clone()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    name: String,
    extension: String,
    size: u64,
}

impl File {
    /// Creates an empty file (size zero).
    pub fn new(name: impl Into<String>, extension: impl Into<String>) -> Self {
        Self::with_size(name, extension, 0)
    }

    pub fn with_size(name: impl Into<String>, extension: impl Into<String>, size: u64) -> Self {
        File {
            name: name.into(),
            extension: extension.into(),
            size,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// `name.extension`, or just `name` when the extension is empty.
    pub fn file_name(&self) -> String {
        if self.extension.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.name, self.extension)
        }
    }
}

/// A container entry.
///
/// The child list holds handles into the owning tree and can only be grown by
/// the tree, so a freshly constructed `Directory` is always empty. It is not
/// `Clone`: a copy would share its children with the original.
#[derive(Debug, PartialEq, Eq)]
pub struct Directory {
    name: String,
    items: Vec<NodeId>,
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Directory {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Immediate children in insertion order.
    pub fn items(&self) -> &[NodeId] {
        &self.items
    }

    pub(crate) fn push(&mut self, id: NodeId) {
        self.items.push(id);
    }
}

/// A reference to another item that does not own it.
///
/// Built with [`Tree::symlink`](crate::tree::Tree::symlink), which records the
/// target's name and kind at creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymLink {
    name: String,
    target: NodeId,
    item_kind: ItemKind,
}

impl SymLink {
    pub(crate) fn new(target: NodeId, name: impl Into<String>, item_kind: ItemKind) -> Self {
        SymLink {
            name: name.into(),
            target,
            item_kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Kind of the target when the link was created.
    pub fn item_kind(&self) -> ItemKind {
        self.item_kind
    }
}

/// Any node of the tree.
#[derive(Debug, PartialEq, Eq)]
pub enum Item {
    File(File),
    Directory(Directory),
    SymLink(SymLink),
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::File(file) => file.name(),
            Item::Directory(dir) => dir.name(),
            Item::SymLink(link) => link.name(),
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Item::File(_) => ItemKind::File,
            Item::Directory(_) => ItemKind::Directory,
            Item::SymLink(_) => ItemKind::SymLink,
        }
    }

    pub fn as_file(&self) -> Option<&File> {
        match self {
            Item::File(file) => Some(file),
            _ => None,
        }
    }

    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            Item::Directory(dir) => Some(dir),
            _ => None,
        }
    }

    pub fn as_symlink(&self) -> Option<&SymLink> {
        match self {
            Item::SymLink(link) => Some(link),
            _ => None,
        }
    }

    pub(crate) fn as_directory_mut(&mut self) -> Option<&mut Directory> {
        match self {
            Item::Directory(dir) => Some(dir),
            _ => None,
        }
    }
}

impl From<File> for Item {
    fn from(file: File) -> Self {
        Item::File(file)
    }
}

impl From<Directory> for Item {
    fn from(dir: Directory) -> Self {
        Item::Directory(dir)
    }
}

impl From<SymLink> for Item {
    fn from(link: SymLink) -> Self {
        Item::SymLink(link)
    }
}

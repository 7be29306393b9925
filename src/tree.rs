//! The in-memory tree.
//!
//! A [`Tree`] is an arena that owns every node. Directories refer to their
//! children by [`NodeId`], and since only the tree creates nodes, each node
//! (apart from the root) sits in exactly one directory's child list. Dropping
//! the tree drops all of its nodes.
//!
//! Sizes are aggregated by walking directory children recursively. Symbolic
//! links are never followed during a walk, so a link pointing at one of its
//! own ancestors cannot cause a loop; a link is only dereferenced explicitly
//! through [`Tree::resolve`] and friends.

use crate::data::TreeEntry;
use crate::error::{Result, TreeError};
use crate::item::{Directory, File, Item, ItemKind, NodeId, SymLink};
use std::fmt::{self, Write as _};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace};

// Source of per-tree ids stamped into every NodeId.
static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(0);

/// Arena owning a root directory and all of its descendants.
#[derive(Debug)]
pub struct Tree {
    id: u64,
    nodes: Vec<Item>,
}

impl Tree {
    /// Creates a tree whose root is an empty directory called `root_name`.
    pub fn new(root_name: impl Into<String>) -> Self {
        Tree {
            id: NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed),
            nodes: vec![Item::Directory(Directory::new(root_name))],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::new(self.id, 0)
    }

    /// Total number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Looks a node up by handle.
    ///
    /// # Errors
    /// [`TreeError::DanglingReference`] if the handle does not belong to this tree.
    pub fn get(&self, id: NodeId) -> Result<&Item> {
        if id.tree() != self.id {
            return Err(TreeError::DanglingReference(id));
        }
        self.nodes
            .get(id.index())
            .ok_or(TreeError::DanglingReference(id))
    }

    /// Looks a node up and narrows it to a directory.
    pub fn directory(&self, id: NodeId) -> Result<&Directory> {
        let item = self.get(id)?;
        item.as_directory().ok_or(TreeError::TypeMismatch {
            expected: ItemKind::Directory,
            found: item.kind(),
        })
    }

    /// Looks a node up and narrows it to a file.
    pub fn file(&self, id: NodeId) -> Result<&File> {
        let item = self.get(id)?;
        item.as_file().ok_or(TreeError::TypeMismatch {
            expected: ItemKind::File,
            found: item.kind(),
        })
    }

    fn directory_mut(&mut self, id: NodeId) -> Result<&mut Directory> {
        if id.tree() != self.id {
            return Err(TreeError::DanglingReference(id));
        }
        let item = self
            .nodes
            .get_mut(id.index())
            .ok_or(TreeError::DanglingReference(id))?;
        let found = item.kind();
        item.as_directory_mut().ok_or(TreeError::TypeMismatch {
            expected: ItemKind::Directory,
            found,
        })
    }

    /// Appends `item` to the children of directory `dir` and returns its handle.
    ///
    /// The handle can be kept to navigate back to the item or to link to it
    /// later with [`Tree::symlink`].
    pub fn add_item(&mut self, dir: NodeId, item: impl Into<Item>) -> Result<NodeId> {
        let item = item.into();
        // Validate the parent before the node enters the arena.
        self.directory(dir)?;

        let id = NodeId::new(self.id, self.nodes.len());
        debug!(
            parent = %dir,
            child = %id,
            kind = %item.kind(),
            name = item.name(),
            "adding item"
        );
        self.nodes.push(item);
        self.directory_mut(dir)?.push(id);
        Ok(id)
    }

    pub fn add_file(&mut self, dir: NodeId, file: File) -> Result<NodeId> {
        self.add_item(dir, file)
    }

    /// Creates an empty directory called `name` inside `dir`.
    pub fn add_directory(&mut self, dir: NodeId, name: impl Into<String>) -> Result<NodeId> {
        self.add_item(dir, Directory::new(name))
    }

    /// Creates a link to `target` and stores it as a child of `dir`.
    pub fn add_symlink(
        &mut self,
        dir: NodeId,
        target: NodeId,
        name: impl Into<String>,
    ) -> Result<NodeId> {
        let link = self.symlink(target, name)?;
        self.add_item(dir, link)
    }

    /// Builds a link to `target` without placing it in the tree.
    ///
    /// The link records the target's current kind; the target itself stays
    /// owned by its directory.
    pub fn symlink(&self, target: NodeId, name: impl Into<String>) -> Result<SymLink> {
        let kind = self.get(target)?.kind();
        Ok(SymLink::new(target, name, kind))
    }

    /// Returns the first immediate child of `dir` that is a directory named
    /// `name`, or `None`. Files and links with that name are skipped.
    pub fn navigate_to(&self, dir: NodeId, name: &str) -> Result<Option<NodeId>> {
        let directory = self.directory(dir)?;
        for &child in directory.items() {
            if let Item::Directory(candidate) = self.get(child)? {
                if candidate.name() == name {
                    return Ok(Some(child));
                }
            }
        }
        trace!(%dir, name, "no such directory");
        Ok(None)
    }

    /// Follows `names` one directory at a time starting at `dir`.
    ///
    /// # Errors
    /// [`TreeError::DirectoryNotFound`] naming the first component that is missing.
    pub fn navigate_path<I, S>(&self, dir: NodeId, names: I) -> Result<NodeId>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().try_fold(dir, |current, name| {
            let name = name.as_ref();
            self.navigate_to(current, name)?
                .ok_or_else(|| TreeError::DirectoryNotFound(name.to_string()))
        })
    }

    /// Sum of the sizes of all files below `dir`. Links contribute nothing.
    ///
    /// # Errors
    /// [`TreeError::SizeOverflow`] if the sum does not fit in a `u64`.
    pub fn size(&self, dir: NodeId) -> Result<u64> {
        let mut total: u64 = 0;
        for &child in self.directory(dir)?.items() {
            let size = match self.get(child)? {
                Item::File(file) => file.size(),
                Item::Directory(_) => self.size(child)?,
                Item::SymLink(_) => 0,
            };
            total = total
                .checked_add(size)
                .ok_or(TreeError::SizeOverflow(dir))?;
        }
        Ok(total)
    }

    /// Number of immediate children of `dir`.
    pub fn number_of_items(&self, dir: NodeId) -> Result<usize> {
        Ok(self.directory(dir)?.items().len())
    }

    /// Dereferences a link.
    ///
    /// # Errors
    /// [`TreeError::DanglingReference`] if the target is not part of this tree.
    pub fn resolve(&self, link: &SymLink) -> Result<&Item> {
        trace!(link = link.name(), target = %link.target(), "resolving link");
        self.get(link.target())
    }

    /// Dereferences a link that must point at a directory.
    ///
    /// # Errors
    /// [`TreeError::TypeMismatch`] if the target is not a directory.
    pub fn resolve_directory(&self, link: &SymLink) -> Result<NodeId> {
        self.resolve(link)?;
        self.directory(link.target())?;
        Ok(link.target())
    }

    /// Dereferences a link that must point at a file.
    ///
    /// # Errors
    /// [`TreeError::TypeMismatch`] if the target is not a file.
    pub fn resolve_file(&self, link: &SymLink) -> Result<&File> {
        self.resolve(link)?;
        self.file(link.target())
    }

    /// Writes the children of `dir`, one per line, indented by `level`.
    ///
    /// Entries at level zero start with `|-`, deeper ones with two spaces per
    /// level followed by `|_`. Files are written as `name.extension size`,
    /// directories as their name followed by their own children. Links are
    /// not written.
    pub fn show_hierarchy<W: fmt::Write>(
        &self,
        out: &mut W,
        level: usize,
        dir: NodeId,
    ) -> Result<()> {
        self.write_hierarchy(out, level, dir, &|size: u64| size.to_string())
    }

    fn write_hierarchy<W, F>(
        &self,
        out: &mut W,
        level: usize,
        dir: NodeId,
        format_size: &F,
    ) -> Result<()>
    where
        W: fmt::Write,
        F: Fn(u64) -> String,
    {
        let start = if level == 0 { "|-" } else { "|_" };
        let prefix = "  ".repeat(level);
        for &child in self.directory(dir)?.items() {
            match self.get(child)? {
                Item::File(file) => writeln!(
                    out,
                    "{}{}{}.{} {}",
                    prefix,
                    start,
                    file.name(),
                    file.extension(),
                    format_size(file.size())
                )?,
                Item::Directory(sub) => {
                    writeln!(out, "{}{}{}", prefix, start, sub.name())?;
                    self.write_hierarchy(out, level + 1, child, format_size)?;
                }
                Item::SymLink(_) => {}
            }
        }
        Ok(())
    }

    /// The name of `dir` on its own line followed by its hierarchy.
    pub fn render(&self, dir: NodeId) -> Result<String> {
        self.render_with(dir, |size: u64| size.to_string())
    }

    /// Like [`Tree::render`], with file sizes formatted by `format_size`.
    pub fn render_with<F>(&self, dir: NodeId, format_size: F) -> Result<String>
    where
        F: Fn(u64) -> String,
    {
        let mut out = String::new();
        writeln!(out, "{}", self.directory(dir)?.name())?;
        self.write_hierarchy(&mut out, 0, dir, &format_size)?;
        Ok(out)
    }

    /// Every node below `dir` in depth-first pre-order, as flat records.
    ///
    /// Paths start with the name of `dir` and join names with `/`. A starting
    /// directory named `/` is not doubled, so its children read `/bin`.
    pub fn entries(&self, dir: NodeId) -> Result<Vec<TreeEntry>> {
        let base = self.directory(dir)?.name();
        let base = if base == "/" { "" } else { base };
        let mut entries = Vec::new();
        self.collect_entries(dir, base, &mut entries)?;
        Ok(entries)
    }

    /// Appends the records below `dir` and returns their total size, so each
    /// directory's size is summed once on the way back up.
    fn collect_entries(
        &self,
        dir: NodeId,
        base: &str,
        entries: &mut Vec<TreeEntry>,
    ) -> Result<u64> {
        let mut total: u64 = 0;
        for &child in self.directory(dir)?.items() {
            let item = self.get(child)?;
            let name = match item {
                Item::File(file) => file.file_name(),
                _ => item.name().to_string(),
            };
            let position = entries.len();
            entries.push(TreeEntry {
                entry_type: item.kind().into(),
                path: format!("{}/{}", base, name),
                size: 0,
                items: None,
            });

            let size = match item {
                Item::File(file) => file.size(),
                Item::Directory(sub) => {
                    let path = entries[position].path.clone();
                    let size = self.collect_entries(child, &path, entries)?;
                    entries[position].items = Some(sub.items().len());
                    size
                }
                Item::SymLink(_) => 0,
            };
            entries[position].size = size;
            total = total
                .checked_add(size)
                .ok_or(TreeError::SizeOverflow(dir))?;
        }
        Ok(total)
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.render(self.root()).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

//! Library crate for memtree
//!
//! An in-memory filesystem tree made of files, directories and symbolic links,
//! with size aggregation and an indented hierarchy view.
//!
//! # Features
//!
//! - **Tree Arena**: a [`Tree`] owns every node; directories refer to children by [`NodeId`]
//! - **Polymorphic Items**: [`Item`] is a sum type narrowed with `as_file`/`as_directory`
//! - **Symbolic Links**: non-owning handles resolved through the tree, never followed implicitly
//! - **Rendering**: indented hierarchy as a `String`, plus CSV and JSON export
//!
//! # Modules
//!
//! - [`item`]: Node types (`Item`, `File`, `Directory`, `SymLink`)
//! - [`tree`]: The `Tree` arena and all tree operations
//! - [`error`]: `TreeError`
//! - [`data`]: Flattened entries (`TreeEntry`, `EntryType`)
//! - [`output`]: Terminal, CSV and JSON formatters
//! - [`sample`]: The demo tree
//! - [`cli`]: Command-line interface definitions
//! - [`logging`]: `tracing` subscriber setup
//!
//! # Example
//!
//! ```rust
//! use memtree::{File, Tree};
//!
//! let mut tree = Tree::new("/");
//! let home = tree.add_directory(tree.root(), "home").unwrap();
//! tree.add_file(home, File::with_size("notes", "md", 42)).unwrap();
//!
//! assert_eq!(tree.size(tree.root()).unwrap(), 42);
//! assert_eq!(tree.render(tree.root()).unwrap(), "/\n|-home\n  |_notes.md 42\n");
//! ```

pub mod cli;
pub mod data;
pub mod error;
pub mod item;
pub mod logging;
pub mod output;
pub mod sample;
pub mod tree;

pub use cli::Args;
pub use data::{EntryType, TreeEntry};
pub use error::TreeError;
pub use item::{Directory, File, Item, ItemKind, NodeId, SymLink};
pub use tree::Tree;

//! Error type for tree operations.

use crate::item::{ItemKind, NodeId};
use thiserror::Error;

/// Errors returned by [`Tree`](crate::tree::Tree) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The handle does not point at a node of this tree.
    #[error("dangling reference: node {0} does not exist in this tree")]
    DanglingReference(NodeId),

    /// The node exists but is of a different variant than the caller needed.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: ItemKind, found: ItemKind },

    /// A path component could not be found while navigating.
    #[error("directory not found: {0}")]
    DirectoryNotFound(String),

    /// The total size below a directory does not fit in a `u64`.
    #[error("size overflow: total size below node {0} exceeds u64::MAX")]
    SizeOverflow(NodeId),

    #[error("failed to write hierarchy")]
    Format(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TreeError::TypeMismatch {
            expected: ItemKind::Directory,
            found: ItemKind::File,
        };
        assert_eq!(err.to_string(), "type mismatch: expected directory, found file");

        let err = TreeError::DanglingReference(NodeId::new(3, 7));
        assert_eq!(
            err.to_string(),
            "dangling reference: node #7@3 does not exist in this tree"
        );

        let err = TreeError::SizeOverflow(NodeId::new(1, 0));
        assert_eq!(
            err.to_string(),
            "size overflow: total size below node #0@1 exceeds u64::MAX"
        );
    }
}

//! Error handling and result types for BstMap operations.
//!
//! Looking up a missing key and finding a broken invariant are the only
//! failures the tree itself can report. `remove` on a missing key is not an
//! error; it returns [`RemoveOutcome::NotFound`](crate::RemoveOutcome).

use thiserror::Error;

/// Error type for tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Key not found in the tree.
    #[error("Key not found in tree: {0}")]
    KeyNotFound(String),
    /// Ordering, uniqueness or size bookkeeping violated.
    #[error("Data integrity error: {0}")]
    DataIntegrityError(String),
    /// A parent back-reference disagrees with the child links.
    #[error("Parent link error: {0}")]
    ParentLinkError(String),
    /// Arena operation failed.
    #[error("Arena error: {0}")]
    ArenaError(String),
    /// Tree corruption detected.
    #[error("Corrupted tree: {0}")]
    CorruptedTree(String),
}

impl TreeError {
    /// Create a KeyNotFound error for `key`
    pub fn key_not_found(key: &str) -> Self {
        Self::KeyNotFound(key.to_string())
    }

    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Create a ParentLinkError for a specific node
    pub fn parent_link(node_id: u32, details: &str) -> Self {
        Self::ParentLinkError(format!("node {}: {}", node_id, details))
    }

    /// Create an ArenaError with context
    pub fn arena_error(operation: &str, details: &str) -> Self {
        Self::ArenaError(format!("{} failed: {}", operation, details))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// True for every variant that signals a broken invariant.
    pub fn is_integrity_error(&self) -> bool {
        !matches!(self, Self::KeyNotFound(_))
    }
}

/// Result type for tree operations that may fail
pub type TreeResult<T> = Result<T, TreeError>;

/// Result type for key lookup operations
pub type KeyResult<T> = Result<T, TreeError>;

/// Result type for validated tree modifications
pub type ModifyResult<T> = Result<T, TreeError>;

/// Result extension trait for layering context onto tree errors
pub trait TreeResultExt<T> {
    /// Prefix the error message with `context`
    fn with_context(self, context: &str) -> TreeResult<T>;

    /// Prefix the error message with the name of the failing operation
    fn with_operation(self, operation: &str) -> TreeResult<T>;
}

impl<T> TreeResultExt<T> for Result<T, TreeError> {
    fn with_context(self, context: &str) -> TreeResult<T> {
        self.map_err(|e| match e {
            TreeError::KeyNotFound(key) => TreeError::KeyNotFound(key),
            TreeError::DataIntegrityError(msg) => TreeError::data_integrity(context, &msg),
            TreeError::ParentLinkError(msg) => {
                TreeError::ParentLinkError(format!("{}: {}", context, msg))
            }
            TreeError::ArenaError(msg) => TreeError::arena_error(context, &msg),
            TreeError::CorruptedTree(msg) => TreeError::corrupted_tree(context, &msg),
        })
    }

    fn with_operation(self, operation: &str) -> TreeResult<T> {
        self.with_context(&format!("Operation '{}'", operation))
    }
}

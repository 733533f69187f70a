//! Core types and data structures for BstMap.
//!
//! This module contains the node record, the tree itself, the identifiers
//! used to link nodes inside the arena, and the outcome enums returned by
//! the mutating operations.

use crate::compact_arena::CompactArena;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Node ID type for arena-based allocation
pub type NodeId = u32;

/// Marks an absent child or parent link.
pub const NULL_NODE: NodeId = u32::MAX;

/// Payload stored with every key.
pub type Value = i32;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Unbalanced binary search tree keyed by strings, ordered lexicographically.
///
/// Nodes live in a `CompactArena` and refer to each other by `NodeId`.
/// The `left` and `right` links own their subtrees; the `parent` link is a
/// back-reference used only to describe the tree's shape.
///
/// No rebalancing is performed: inserting keys in sorted order produces a
/// chain whose depth equals the number of keys. Every operation walks the
/// tree with an explicit stack, so such chains do not exhaust the call stack.
///
/// # Examples
///
/// ```
/// use bst_report::{BstMap, InsertOutcome};
///
/// let mut tree = BstMap::new();
/// assert_eq!(tree.insert("Bob", 2), InsertOutcome::Inserted);
/// assert_eq!(tree.insert("Bob", 99), InsertOutcome::DuplicateIgnored);
/// assert_eq!(tree.get("Bob"), Some(2));
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(h)
/// - **Lookup**: O(h)
/// - **Deletion**: O(h)
/// - **Iteration / reporting**: O(n)
///
/// where `h` is the current height, between `log2(n)` and `n`.
#[derive(Debug)]
pub struct BstMap {
    /// Root node, or `NULL_NODE` when the tree is empty.
    pub(crate) root: NodeId,
    /// Number of nodes reachable from the root.
    pub(crate) len: usize,
    /// Storage for every live node.
    pub(crate) arena: CompactArena<Node>,
}

/// A single key/value record with its three links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) key: String,
    pub(crate) value: Value,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
    pub(crate) parent: NodeId,
}

node_links!(left, right, parent);

impl Node {
    /// The node's key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The node's value.
    pub fn value(&self) -> Value {
        self.value
    }

    /// Returns the child link on the given side.
    #[inline]
    pub fn child(&self, side: ChildSide) -> NodeId {
        match side {
            ChildSide::Left => self.left,
            ChildSide::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, side: ChildSide, id: NodeId) {
        match side {
            ChildSide::Left => self.set_left(id),
            ChildSide::Right => self.set_right(id),
        }
    }

    /// Number of present child links (0, 1 or 2).
    pub fn child_count(&self) -> usize {
        usize::from(self.has_left()) + usize::from(self.has_right())
    }
}

// ============================================================================
// ENUMS AND RESULT TYPES
// ============================================================================

/// Which child link of a parent a node hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildSide {
    Left,
    Right,
}

/// Result of [`BstMap::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new node was created for the key.
    Inserted,
    /// The key was already present; the existing value was left untouched.
    DuplicateIgnored,
}

/// Result of [`BstMap::remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The key existed and is gone.
    Removed,
    /// The key did not exist; the tree is unchanged.
    NotFound,
}

impl RemoveOutcome {
    pub fn is_removed(self) -> bool {
        matches!(self, RemoveOutcome::Removed)
    }
}

/// Result of removing a key from one subtree: the subtree's (possibly new)
/// root and whether anything was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Removal {
    pub(crate) root: NodeId,
    pub(crate) outcome: RemoveOutcome,
}

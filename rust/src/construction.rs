//! Construction and initialization logic for BstMap and nodes.

use crate::compact_arena::CompactArena;
use crate::types::{BstMap, Node, NodeId, Value, NULL_NODE};

impl BstMap {
    /// Create an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_report::BstMap;
    ///
    /// let tree = BstMap::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty tree whose arena has room for `capacity` nodes before
    /// it reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            root: NULL_NODE,
            len: 0,
            arena: CompactArena::with_capacity(capacity),
        }
    }
}

impl Default for BstMap {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for BstMap {
    /// Builds a tree by inserting the pairs in iteration order; later
    /// duplicates are ignored.
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut tree = BstMap::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Into<String>> Extend<(K, Value)> for BstMap {
    fn extend<I: IntoIterator<Item = (K, Value)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl Node {
    /// Creates a detached-children node hanging under `parent`.
    pub(crate) fn new(key: String, value: Value, parent: NodeId) -> Self {
        Self {
            key,
            value,
            left: NULL_NODE,
            right: NULL_NODE,
            parent,
        }
    }
}

impl Default for Node {
    // Freed arena slots hold this value.
    fn default() -> Self {
        Self::new(String::new(), 0, NULL_NODE)
    }
}

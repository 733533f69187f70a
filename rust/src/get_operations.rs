//! GET operations for BstMap.
//!
//! Read-only lookups, size queries and the small navigation helpers shared
//! by the mutating operations.

use std::cmp::Ordering;

use crate::error::{KeyResult, TreeError};
use crate::compact_arena::CompactArenaStats;
use crate::types::{BstMap, NodeId, Value, NULL_NODE};

impl BstMap {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Get the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_report::BstMap;
    ///
    /// let mut tree = BstMap::new();
    /// tree.insert("Ethan", 1);
    /// assert_eq!(tree.get("Ethan"), Some(1));
    /// assert_eq!(tree.get("Tom"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<Value> {
        self.find_node(key).map(|id| self.arena[id].value())
    }

    /// Check if key exists in the tree.
    pub fn contains_key(&self, key: &str) -> bool {
        self.find_node(key).is_some()
    }

    /// Get the value for `key`, or a `KeyNotFound` error.
    pub fn get_item(&self, key: &str) -> KeyResult<Value> {
        self.get(key).ok_or_else(|| TreeError::key_not_found(key))
    }

    /// The entry with the smallest key.
    pub fn first(&self) -> Option<(&str, Value)> {
        self.entry(self.leftmost(self.root))
    }

    /// The entry with the largest key.
    pub fn last(&self) -> Option<(&str, Value)> {
        self.entry(self.rightmost(self.root))
    }

    /// The entry stored at the root.
    pub fn root_entry(&self) -> Option<(&str, Value)> {
        self.entry(self.root)
    }

    /// The entry of the parent of the node holding `key`.
    ///
    /// Returns `None` if the key is absent or its node is the root.
    pub fn parent_of(&self, key: &str) -> Option<(&str, Value)> {
        let id = self.find_node(key)?;
        self.entry(self.arena[id].parent())
    }

    /// Returns the number of entries in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root == NULL_NODE
    }

    /// Number of nodes on the longest root-to-leaf path; 0 for an empty tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = Vec::new();
        if self.root != NULL_NODE {
            stack.push((self.root, 1));
        }
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.arena[id];
            for child in [node.left(), node.right()] {
                if child != NULL_NODE {
                    stack.push((child, depth + 1));
                }
            }
        }
        height
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = NULL_NODE;
        self.len = 0;
    }

    /// Slot usage of the node arena.
    pub fn arena_stats(&self) -> CompactArenaStats {
        self.arena.stats()
    }

    // ============================================================================
    // NODE ACCESS
    // ============================================================================

    fn entry(&self, id: NodeId) -> Option<(&str, Value)> {
        self.arena.get(id).map(|node| (node.key(), node.value()))
    }

    /// Id of the node holding `key`.
    pub(crate) fn find_node(&self, key: &str) -> Option<NodeId> {
        let mut current = self.root;
        while current != NULL_NODE {
            let node = &self.arena[current];
            current = match key.cmp(node.key()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(current),
            };
        }
        None
    }

    /// Follow left links from `id` until none remain.
    pub(crate) fn leftmost(&self, mut id: NodeId) -> NodeId {
        if id == NULL_NODE {
            return NULL_NODE;
        }
        while self.arena[id].has_left() {
            id = self.arena[id].left();
        }
        id
    }

    /// Follow right links from `id` until none remain.
    pub(crate) fn rightmost(&self, mut id: NodeId) -> NodeId {
        if id == NULL_NODE {
            return NULL_NODE;
        }
        while self.arena[id].has_right() {
            id = self.arena[id].right();
        }
        id
    }
}

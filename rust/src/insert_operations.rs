//! INSERT operations for BstMap.

use std::cmp::Ordering;

use log::trace;

use crate::types::{BstMap, ChildSide, InsertOutcome, Node, NodeId, Value, NULL_NODE};

impl BstMap {
    /// Insert `key` with `value` unless the key is already present.
    ///
    /// The new node is placed at the empty position reached by descending
    /// from the root, and its parent link points at the node it hangs from.
    /// An existing key is left untouched, value included: this is not an
    /// update.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_report::{BstMap, InsertOutcome};
    ///
    /// let mut tree = BstMap::new();
    /// tree.insert("Gabriel", 3);
    /// assert_eq!(tree.insert("Bob", 2), InsertOutcome::Inserted);
    /// assert_eq!(tree.parent_of("Bob"), Some(("Gabriel", 3)));
    ///
    /// assert_eq!(tree.insert("Bob", 99), InsertOutcome::DuplicateIgnored);
    /// assert_eq!(tree.get("Bob"), Some(2));
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> InsertOutcome {
        let key = key.into();

        if self.root == NULL_NODE {
            trace!("insert {:?}: new root", key);
            self.root = self.allocate_node(Node::new(key, value, NULL_NODE));
            return InsertOutcome::Inserted;
        }

        let mut current = self.root;
        loop {
            let node = &self.arena[current];
            let side = match key.as_str().cmp(node.key()) {
                Ordering::Less => ChildSide::Left,
                Ordering::Greater => ChildSide::Right,
                Ordering::Equal => {
                    trace!("insert {:?}: duplicate ignored", key);
                    return InsertOutcome::DuplicateIgnored;
                }
            };

            let next = node.child(side);
            if next == NULL_NODE {
                trace!("insert {:?}: {:?} child of {:?}", key, side, node.key());
                let id = self.allocate_node(Node::new(key, value, current));
                self.arena[current].set_child(side, id);
                return InsertOutcome::Inserted;
            }
            current = next;
        }
    }

    /// Allocate a node in the arena and count it.
    pub(crate) fn allocate_node(&mut self, node: Node) -> NodeId {
        self.len += 1;
        self.arena.allocate(node)
    }
}

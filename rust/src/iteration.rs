//! Iterator implementations for BstMap.
//!
//! All iterators walk the tree in order (left subtree, node, right subtree)
//! with an explicit stack of pending ancestors.

use crate::report::{Placement, ReportLine};
use crate::types::{BstMap, NodeId, Value, NULL_NODE};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// In-order walk over node ids.
#[derive(Debug, Clone)]
struct InOrder<'a> {
    tree: &'a BstMap,
    stack: Vec<NodeId>,
}

/// Iterator over entries in ascending key order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: InOrder<'a>,
}

/// Iterator over keys in ascending order.
#[derive(Debug, Clone)]
pub struct Keys<'a> {
    inner: InOrder<'a>,
}

/// Iterator over every entry together with its position relative to its
/// parent, in ascending key order.
#[derive(Debug, Clone)]
pub struct Placements<'a> {
    inner: InOrder<'a>,
}

// ============================================================================
// BSTMAP ITERATOR METHODS
// ============================================================================

impl BstMap {
    /// Returns an iterator over all entries in sorted order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: InOrder::new(self),
        }
    }

    /// Returns an iterator over all keys in sorted order.
    pub fn keys(&self) -> Keys<'_> {
        Keys {
            inner: InOrder::new(self),
        }
    }

    /// Returns an iterator describing where every entry hangs.
    ///
    /// The position is read from each node's parent link at the time the
    /// entry is yielded.
    pub fn placements(&self) -> Placements<'_> {
        Placements {
            inner: InOrder::new(self),
        }
    }
}

impl<'a> IntoIterator for &'a BstMap {
    type Item = (&'a str, Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// ITERATOR IMPLEMENTATIONS
// ============================================================================

impl<'a> InOrder<'a> {
    fn new(tree: &'a BstMap) -> Self {
        let mut walk = Self {
            tree,
            stack: Vec::new(),
        };
        walk.push_left_spine(tree.root);
        walk
    }

    fn push_left_spine(&mut self, mut id: NodeId) {
        while id != NULL_NODE {
            self.stack.push(id);
            id = self.tree.arena[id].left();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.push_left_spine(self.tree.arena[id].right());
        Some(id)
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, Value);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.inner.tree;
        self.inner.next().map(|id| {
            let node = &tree.arena[id];
            (node.key(), node.value())
        })
    }
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.inner.tree;
        self.inner.next().map(|id| tree.arena[id].key())
    }
}

impl<'a> Iterator for Placements<'a> {
    type Item = ReportLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.inner.tree;
        let id = self.inner.next()?;
        let node = &tree.arena[id];

        let placement = match tree.arena.get(node.parent()) {
            None => Placement::Root,
            Some(parent) if parent.left() == id => {
                Placement::LeftChildOf(parent.key(), parent.value())
            }
            Some(parent) => Placement::RightChildOf(parent.key(), parent.value()),
        };

        Some(ReportLine {
            key: node.key(),
            value: node.value(),
            placement,
        })
    }
}

//! DELETE operations for BstMap.
//!
//! Removal is a restructuring walk: each level of the descent hands the
//! (possibly different) root of its subtree back to the level above, which
//! re-links it as its child and points that root's parent link back at
//! itself. The walk keeps its levels on an explicit stack instead of the call
//! stack, so a degenerate chain of any length can be handled.

use std::cmp::Ordering;

use log::trace;

use crate::types::{BstMap, ChildSide, NodeId, Removal, RemoveOutcome, NULL_NODE};

/// One level of the descent: `node` was left through its `side` child.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeId,
    side: ChildSide,
}

impl BstMap {
    /// Remove `key` from the tree.
    ///
    /// A node with two children is not unlinked itself: it takes over the
    /// key and value of its in-order successor (the minimum of its right
    /// subtree), and the successor node is removed instead. Removing an
    /// absent key returns [`RemoveOutcome::NotFound`] and changes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_report::{BstMap, RemoveOutcome};
    ///
    /// let mut tree: BstMap = vec![("Gabriel", 3), ("Bob", 2), ("Henry", 4)]
    ///     .into_iter()
    ///     .collect();
    ///
    /// assert_eq!(tree.remove("Gabriel"), RemoveOutcome::Removed);
    /// assert_eq!(tree.root_entry(), Some(("Henry", 4)));
    /// assert_eq!(tree.remove("Gabriel"), RemoveOutcome::NotFound);
    /// ```
    pub fn remove(&mut self, key: &str) -> RemoveOutcome {
        let removal = self.remove_from(self.root, key);
        self.root = removal.root;
        if self.root != NULL_NODE {
            self.arena[self.root].set_parent(NULL_NODE);
        }
        removal.outcome
    }

    /// Remove `key` from the subtree rooted at `subtree` and return the
    /// subtree's new root.
    ///
    /// The caller owns the position `subtree` hangs from and must re-link the
    /// returned root there, including its parent link.
    fn remove_from(&mut self, subtree: NodeId, key: &str) -> Removal {
        let mut path: Vec<Frame> = Vec::new();
        let mut current = subtree;

        loop {
            if current == NULL_NODE {
                trace!("remove {:?}: not found", key);
                return Removal {
                    root: subtree,
                    outcome: RemoveOutcome::NotFound,
                };
            }
            let node = &self.arena[current];
            let side = match key.cmp(node.key()) {
                Ordering::Less => ChildSide::Left,
                Ordering::Greater => ChildSide::Right,
                Ordering::Equal => break,
            };
            path.push(Frame { node: current, side });
            current = node.child(side);
        }

        let replacement = self.unlink(current);
        let root = path.into_iter().rev().fold(replacement, |child, frame| {
            self.reattach(frame.node, frame.side, child);
            frame.node
        });

        Removal {
            root,
            outcome: RemoveOutcome::Removed,
        }
    }

    /// Take `target` out of its position and return what replaces it there.
    fn unlink(&mut self, target: NodeId) -> NodeId {
        let node = &self.arena[target];
        let (left, right) = (node.left(), node.right());

        match (left != NULL_NODE, right != NULL_NODE) {
            (false, false) => {
                trace!("remove {:?}: leaf", node.key());
                self.release(target);
                NULL_NODE
            }
            (true, false) => {
                trace!("remove {:?}: splice left child", node.key());
                self.release(target);
                left
            }
            (false, true) => {
                trace!("remove {:?}: splice right child", node.key());
                self.release(target);
                right
            }
            (true, true) => {
                let successor = self.leftmost(right);
                let (successor_key, successor_value) = {
                    let successor = &self.arena[successor];
                    (successor.key.clone(), successor.value)
                };
                trace!(
                    "remove {:?}: promote successor {:?}",
                    self.arena[target].key(),
                    successor_key
                );

                let node = &mut self.arena[target];
                node.key.clone_from(&successor_key);
                node.value = successor_value;

                // The successor has no left child, so this stops at a
                // leaf or a single splice.
                let removal = self.remove_from(right, &successor_key);
                debug_assert!(removal.outcome.is_removed());
                self.reattach(target, ChildSide::Right, removal.root);
                target
            }
        }
    }

    /// Hang `child` from `parent` on `side` and point its parent link back.
    fn reattach(&mut self, parent: NodeId, side: ChildSide, child: NodeId) {
        self.arena[parent].set_child(side, child);
        if child != NULL_NODE {
            self.arena[child].set_parent(parent);
        }
    }

    /// Free a node that is no longer linked into the tree.
    fn release(&mut self, id: NodeId) {
        if self.arena.deallocate(id).is_some() {
            self.len -= 1;
        }
    }
}

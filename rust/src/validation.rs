//! Validation and debugging utilities for BstMap.
//!
//! The invariant checks walk the child links with an explicit stack and
//! verify, for every reachable node:
//!
//! - its key lies strictly between the bounds inherited from its ancestors
//!   (ordering and uniqueness);
//! - its parent link names the node whose child link led to it, and the root
//!   alone has no parent;
//! - no node is reached twice.
//!
//! Finally the number of reachable nodes must match both the tree's length
//! and the number of live arena slots.

use log::{log_enabled, trace, Level};

use crate::error::{ModifyResult, TreeError, TreeResult, TreeResultExt};
use crate::types::{BstMap, InsertOutcome, NodeId, RemoveOutcome, Value, NULL_NODE};

/// A node waiting to be checked, with what its ancestors require of it.
struct Pending<'a> {
    id: NodeId,
    expected_parent: NodeId,
    lower: Option<&'a str>,
    upper: Option<&'a str>,
}

impl BstMap {
    // ============================================================================
    // VALIDATION METHODS
    // ============================================================================

    /// Check if the tree maintains its invariants.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants, reporting the first violation found.
    pub fn check_invariants_detailed(&self) -> TreeResult<()> {
        let reachable = self.check_structure()?;
        self.check_arena_tree_consistency(reachable)
    }

    /// Alias for check_invariants_detailed.
    pub fn validate(&self) -> TreeResult<()> {
        self.check_invariants_detailed()
    }

    fn check_structure(&self) -> TreeResult<usize> {
        if self.root == NULL_NODE {
            return Ok(0);
        }

        let mut visited = vec![false; self.arena.slot_count()];
        let mut reachable = 0;
        let mut stack = vec![Pending {
            id: self.root,
            expected_parent: NULL_NODE,
            lower: None,
            upper: None,
        }];

        while let Some(pending) = stack.pop() {
            let id = pending.id;
            let node = self.arena.get(id).ok_or_else(|| {
                TreeError::corrupted_tree("Child links", &format!("link to free slot {}", id))
            })?;

            let seen = &mut visited[id as usize];
            if *seen {
                return Err(TreeError::corrupted_tree(
                    "Child links",
                    &format!("node {} ({:?}) is reachable twice", id, node.key()),
                ));
            }
            *seen = true;
            reachable += 1;

            if node.parent() != pending.expected_parent {
                let details = if pending.expected_parent == NULL_NODE {
                    format!("root has parent link {}", node.parent())
                } else {
                    format!(
                        "parent link is {} but node hangs from {}",
                        node.parent(),
                        pending.expected_parent
                    )
                };
                return Err(TreeError::parent_link(id, &details));
            }

            if let Some(lower) = pending.lower {
                if node.key() <= lower {
                    return Err(TreeError::data_integrity(
                        "Ordering",
                        &format!("{:?} is not greater than ancestor {:?}", node.key(), lower),
                    ));
                }
            }
            if let Some(upper) = pending.upper {
                if node.key() >= upper {
                    return Err(TreeError::data_integrity(
                        "Ordering",
                        &format!("{:?} is not less than ancestor {:?}", node.key(), upper),
                    ));
                }
            }

            if node.has_left() {
                stack.push(Pending {
                    id: node.left(),
                    expected_parent: id,
                    lower: pending.lower,
                    upper: Some(node.key()),
                });
            }
            if node.has_right() {
                stack.push(Pending {
                    id: node.right(),
                    expected_parent: id,
                    lower: Some(node.key()),
                    upper: pending.upper,
                });
            }
        }

        Ok(reachable)
    }

    /// Check that arena allocation matches tree structure
    fn check_arena_tree_consistency(&self, reachable: usize) -> TreeResult<()> {
        if reachable != self.len {
            return Err(TreeError::data_integrity(
                "Length",
                &format!("{} reachable nodes but len is {}", reachable, self.len),
            ));
        }
        let allocated = self.arena.len();
        if reachable != allocated {
            return Err(TreeError::arena_error(
                "Consistency check",
                &format!("{} in tree vs {} in arena", reachable, allocated),
            ));
        }
        Ok(())
    }

    // ============================================================================
    // CHECKED OPERATIONS
    // ============================================================================

    /// Insert, then verify every invariant.
    pub fn checked_insert(
        &mut self,
        key: impl Into<String>,
        value: Value,
    ) -> ModifyResult<InsertOutcome> {
        let outcome = self.insert(key, value);
        self.check_invariants_detailed().with_operation("insert")?;
        Ok(outcome)
    }

    /// Remove, then verify every invariant.
    pub fn checked_remove(&mut self, key: &str) -> ModifyResult<RemoveOutcome> {
        let outcome = self.remove(key);
        self.check_invariants_detailed().with_operation("remove")?;
        Ok(outcome)
    }

    // ============================================================================
    // DEBUGGING UTILITIES
    // ============================================================================

    /// Log an indented dump of the tree at trace level.
    pub fn debug_dump(&self) {
        if !log_enabled!(Level::Trace) {
            return;
        }
        trace!("Tree structure ({} nodes):", self.len);
        let mut stack = Vec::new();
        if self.root != NULL_NODE {
            stack.push((self.root, 0usize, "root"));
        }
        while let Some((id, depth, label)) = stack.pop() {
            let node = &self.arena[id];
            trace!(
                "{}{} [id={}, parent={}]: ({}, {})",
                "  ".repeat(depth),
                label,
                id,
                node.parent(),
                node.key(),
                node.value()
            );
            if node.has_right() {
                stack.push((node.right(), depth + 1, "R"));
            }
            if node.has_left() {
                stack.push((node.left(), depth + 1, "L"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BstMap {
        vec![("m", 1), ("f", 2), ("t", 3), ("a", 4), ("h", 5)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_valid_tree_passes() {
        let tree = sample();
        assert!(tree.check_invariants());
        assert_eq!(tree.validate(), Ok(()));
        tree.debug_dump();
    }

    #[test]
    fn test_detects_wrong_parent_link() {
        let mut tree = sample();
        let h = tree.find_node("h").unwrap();
        let root = tree.root;
        tree.arena[h].set_parent(root);
        assert!(matches!(
            tree.check_invariants_detailed(),
            Err(TreeError::ParentLinkError(_))
        ));
    }

    #[test]
    fn test_detects_root_with_parent() {
        let mut tree = sample();
        let root = tree.root;
        let t = tree.find_node("t").unwrap();
        tree.arena[root].set_parent(t);
        assert!(matches!(
            tree.check_invariants_detailed(),
            Err(TreeError::ParentLinkError(_))
        ));
    }

    #[test]
    fn test_detects_ordering_violation() {
        let mut tree = sample();
        let h = tree.find_node("h").unwrap();
        // "z" sits in m's left subtree
        tree.arena[h].key = "z".to_string();
        assert!(matches!(
            tree.check_invariants_detailed(),
            Err(TreeError::DataIntegrityError(_))
        ));
    }

    #[test]
    fn test_detects_shared_child() {
        let mut tree = sample();
        let t = tree.find_node("t").unwrap();
        let a = tree.find_node("a").unwrap();
        tree.arena[t].set_left(a);
        assert!(!tree.check_invariants());
    }

    #[test]
    fn test_detects_leaked_arena_slot() {
        let mut tree = sample();
        let h = tree.find_node("h").unwrap();
        let f = tree.find_node("f").unwrap();
        tree.arena[f].set_right(NULL_NODE);
        tree.arena[h].set_parent(NULL_NODE);
        tree.len -= 1;
        assert!(matches!(
            tree.check_invariants_detailed(),
            Err(TreeError::ArenaError(_))
        ));
    }

    #[test]
    fn test_checked_operations() {
        let mut tree = sample();
        assert_eq!(tree.checked_insert("b", 6), Ok(InsertOutcome::Inserted));
        assert_eq!(tree.checked_remove("m"), Ok(RemoveOutcome::Removed));
        assert_eq!(tree.checked_remove("m"), Ok(RemoveOutcome::NotFound));
    }
}

//! Compact arena storing tree nodes in a `Vec<T>` with a separate free list.
//!
//! Slots are addressed by [`NodeId`]. Freed slots are reused before the
//! backing vector grows, and an allocation mask tells live slots from freed
//! ones so that a stale id is detected instead of silently aliasing a new node.

use std::convert::TryFrom;
use std::ops::{Index, IndexMut};

use crate::types::{NodeId, NULL_NODE};

/// Statistics for a compact arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompactArenaStats {
    pub total_capacity: usize,
    pub allocated_count: usize,
    pub free_count: usize,
    pub utilization: f64,
    pub fragmentation: f64,
}

/// Slot allocator backing the tree's nodes.
#[derive(Debug)]
pub struct CompactArena<T> {
    /// Direct storage without Option wrapper
    storage: Vec<T>,
    /// Free slot indices for reuse
    free_list: Vec<usize>,
    /// Track which slots are actually allocated
    allocated_mask: Vec<bool>,
    /// Number of `true` entries in `allocated_mask`
    allocated: usize,
}

impl<T> CompactArena<T> {
    /// Create a new compact arena with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            allocated_mask: Vec::with_capacity(capacity),
            allocated: 0,
        }
    }

    /// Allocate a new item in the arena and return its ID.
    ///
    /// # Panics
    ///
    /// Panics if the arena already holds `u32::MAX` slots.
    #[inline]
    pub fn allocate(&mut self, item: T) -> NodeId {
        let index = if let Some(free_index) = self.free_list.pop() {
            self.storage[free_index] = item;
            self.allocated_mask[free_index] = true;
            free_index
        } else {
            let index = self.storage.len();
            self.storage.push(item);
            self.allocated_mask.push(true);
            index
        };
        self.allocated += 1;

        match NodeId::try_from(index) {
            Ok(id) if id != NULL_NODE => id,
            _ => panic!("arena exhausted: slot {} does not fit in a NodeId", index),
        }
    }

    /// Deallocate an item from the arena and return it.
    ///
    /// Returns `None` if `id` is `NULL_NODE`, out of range, or already free.
    #[inline]
    pub fn deallocate(&mut self, id: NodeId) -> Option<T>
    where
        T: Default,
    {
        let index = self.live_index(id)?;

        self.allocated_mask[index] = false;
        self.free_list.push(index);
        self.allocated -= 1;

        Some(std::mem::take(&mut self.storage[index]))
    }

    /// Get a reference to an item in the arena
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.live_index(id).map(|index| &self.storage[index])
    }

    fn live_index(&self, id: NodeId) -> Option<usize> {
        if id == NULL_NODE {
            return None;
        }
        let index = usize::try_from(id).ok()?;
        if self.allocated_mask.get(index).copied().unwrap_or(false) {
            Some(index)
        } else {
            None
        }
    }

    /// Get arena statistics
    pub fn stats(&self) -> CompactArenaStats {
        let total_capacity = self.storage.capacity();
        let allocated_count = self.allocated;
        let free_count = self.free_list.len();
        let utilization = if total_capacity > 0 {
            allocated_count as f64 / total_capacity as f64
        } else {
            0.0
        };
        let fragmentation = if allocated_count > 0 {
            free_count as f64 / (allocated_count + free_count) as f64
        } else {
            0.0
        };

        CompactArenaStats {
            total_capacity,
            allocated_count,
            free_count,
            utilization,
            fragmentation,
        }
    }

    /// Get the number of allocated items
    pub fn len(&self) -> usize {
        self.allocated
    }

    /// Number of slots ever handed out, live or free.
    pub fn slot_count(&self) -> usize {
        self.storage.len()
    }

    /// Clear all items from the arena
    pub fn clear(&mut self) {
        self.storage.clear();
        self.allocated_mask.clear();
        self.free_list.clear();
        self.allocated = 0;
    }
}

impl<T> Default for CompactArena<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<T> Index<NodeId> for CompactArena<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `id` does not refer to a live slot.
    #[inline]
    fn index(&self, id: NodeId) -> &T {
        match self.get(id) {
            Some(item) => item,
            None => panic!("arena slot {} is not allocated", id),
        }
    }
}

impl<T> IndexMut<NodeId> for CompactArena<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match self.live_index(id) {
            Some(index) => &mut self.storage[index],
            None => panic!("arena slot {} is not allocated", id),
        }
    }
}

//! An indexed binary min-heap: [`IndexedMinHeap`].
//!
//! A plain `BinaryHeap` cannot reprioritise an element in place, which an
//! A* open list needs every time a queued node's cost is relaxed. This
//! heap hands out opaque [`NodeId`] handles on insertion and tracks each
//! item's heap position internally, so insertion, removal of the minimum,
//! and in-place reprioritisation are all O(log n).
//!
//! Items are kept in an internal arena and remain readable through their
//! handle after being popped; only their queue membership ends. The
//! position bookkeeping lives in a queue-private field that no caller can
//! observe or corrupt.

use crate::errors::HeapError;

/// Sentinel position for items not currently queued.
const NOT_QUEUED: usize = usize::MAX;

/// Opaque handle to an item stored in an [`IndexedMinHeap`].
///
/// Handles are only minted by [`IndexedMinHeap::insert`] and stay valid
/// for the lifetime of the heap that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

struct Slot<T> {
    item: T,
    /// Current position in `heap`, or [`NOT_QUEUED`]. Queue-private.
    pos: usize,
}

/// A binary min-heap ordered by `T: Ord` (smallest first), with O(log n)
/// in-place updates through [`NodeId`] handles.
pub struct IndexedMinHeap<T> {
    slots: Vec<Slot<T>>,
    /// Slot indices in heap order; `heap[0]` is the minimum.
    heap: Vec<usize>,
}

impl<T: Ord> IndexedMinHeap<T> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            heap: Vec::new(),
        }
    }

    /// Create an empty heap with room for `cap` items.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            slots: Vec::with_capacity(cap),
            heap: Vec::with_capacity(cap),
        }
    }

    /// Number of items currently queued (popped items do not count).
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no items are currently queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether the item behind `id` is currently queued.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.slots[id.0].pos != NOT_QUEUED
    }

    /// Read access to the item behind `id`, queued or not.
    #[inline]
    pub fn get(&self, id: NodeId) -> &T {
        &self.slots[id.0].item
    }

    /// Insert an item and return its handle. O(log n).
    pub fn insert(&mut self, item: T) -> NodeId {
        let slot = self.slots.len();
        let pos = self.heap.len();
        self.slots.push(Slot { item, pos });
        self.heap.push(slot);
        self.sift_up(pos);
        NodeId(slot)
    }

    /// Remove and return the handle of the minimum item. O(log n).
    pub fn pop_min(&mut self) -> Result<NodeId, HeapError> {
        let last = self.heap.len().checked_sub(1).ok_or(HeapError::Empty)?;
        self.swap(0, last);
        let slot = self.heap.pop().ok_or(HeapError::Empty)?;
        self.slots[slot].pos = NOT_QUEUED;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(NodeId(slot))
    }

    /// Mutate the item behind `id` and restore heap order. O(log n).
    ///
    /// The closure may change the item's ordering freely; the item is
    /// re-sifted up or down from its current position as needed. If the
    /// item is not currently queued, only the mutation is applied.
    pub fn update(&mut self, id: NodeId, f: impl FnOnce(&mut T)) {
        f(&mut self.slots[id.0].item);
        let pos = self.slots[id.0].pos;
        if pos == NOT_QUEUED {
            return;
        }
        self.sift_up(pos);
        self.sift_down(self.slots[id.0].pos);
    }

    /// Whether the item at heap position `a` orders before the one at `b`.
    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.slots[self.heap[a]].item < self.slots[self.heap[b]].item
    }

    /// Swap two heap positions, keeping slot positions in sync.
    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots[self.heap[a]].pos = a;
        self.slots[self.heap[b]].pos = b;
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;
            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<T: Ord> Default for IndexedMinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pop the minimum and read its value through the returned handle.
    fn pop_value(h: &mut IndexedMinHeap<i32>) -> i32 {
        let id = h.pop_min().unwrap();
        *h.get(id)
    }

    #[test]
    fn empty_heap() {
        let mut h: IndexedMinHeap<i32> = IndexedMinHeap::new();
        assert!(h.is_empty());
        assert_eq!(h.len(), 0);
        assert_eq!(h.pop_min(), Err(HeapError::Empty));
    }

    #[test]
    fn pops_in_ascending_order() {
        let mut h = IndexedMinHeap::new();
        for v in [5, 1, 4, 2, 3] {
            h.insert(v);
        }
        let mut out = Vec::new();
        while let Ok(id) = h.pop_min() {
            out.push(*h.get(id));
        }
        assert_eq!(out, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn duplicate_keys_all_come_out() {
        let mut h = IndexedMinHeap::new();
        for v in [2, 1, 2, 1, 2] {
            h.insert(v);
        }
        let mut out = Vec::new();
        while let Ok(id) = h.pop_min() {
            out.push(*h.get(id));
        }
        assert_eq!(out, vec![1, 1, 2, 2, 2]);
    }

    #[test]
    fn items_readable_after_pop() {
        let mut h = IndexedMinHeap::new();
        let a = h.insert(10);
        let b = h.insert(20);
        let popped = h.pop_min().unwrap();
        assert_eq!(popped, a);
        assert!(!h.contains(a));
        assert!(h.contains(b));
        // The popped slot keeps its value.
        assert_eq!(*h.get(a), 10);
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn update_decrease_moves_to_front() {
        let mut h = IndexedMinHeap::new();
        h.insert(10);
        h.insert(20);
        let c = h.insert(30);
        h.update(c, |v| *v = 5);
        let min = h.pop_min().unwrap();
        assert_eq!(min, c);
        assert_eq!(*h.get(min), 5);
    }

    #[test]
    fn update_increase_moves_back() {
        let mut h = IndexedMinHeap::new();
        let a = h.insert(10);
        h.insert(20);
        h.insert(30);
        h.update(a, |v| *v = 99);
        assert_eq!(pop_value(&mut h), 20);
        assert_eq!(pop_value(&mut h), 30);
        assert_eq!(pop_value(&mut h), 99);
    }

    #[test]
    fn update_after_pop_only_mutates() {
        let mut h = IndexedMinHeap::new();
        let a = h.insert(1);
        h.insert(2);
        h.pop_min().unwrap();
        h.update(a, |v| *v = 0);
        assert_eq!(*h.get(a), 0);
        assert!(!h.contains(a));
        // The remaining queued item is unaffected.
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn interleaved_insert_pop_update() {
        let mut h = IndexedMinHeap::new();
        let a = h.insert(50);
        h.insert(30);
        assert_eq!(pop_value(&mut h), 30);
        h.insert(40);
        h.update(a, |v| *v = 10);
        assert_eq!(pop_value(&mut h), 10);
        assert_eq!(pop_value(&mut h), 40);
        assert!(h.is_empty());
    }

    #[test]
    fn many_updates_keep_order() {
        let mut h = IndexedMinHeap::new();
        let ids: Vec<_> = (0..100).map(|i| h.insert((i * 997) % 100)).collect();
        // Rewrite every priority, forcing sifts in both directions.
        for (i, &id) in ids.iter().enumerate() {
            h.update(id, |v| *v = (i as i32 * 31) % 50);
        }
        let mut prev = i32::MIN;
        while let Ok(id) = h.pop_min() {
            let v = *h.get(id);
            assert!(v >= prev, "heap order violated: {v} after {prev}");
            prev = v;
        }
    }
}

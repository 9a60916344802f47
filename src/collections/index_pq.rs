//! Indexed binary min-heap
//!
//! Associates a key with each index in `[0, capacity)` and keeps the present
//! indices in heap order by key. Keys can be changed in place, which is what
//! Dijkstra and eager Prim need for decrease-key relaxation.
//!
//! # Layout
//!
//! ```text
//! keys:     [Some(0.5), None, Some(0.2), Some(0.9)]   // by index
//! heap:     [2, 0, 3]                                 // indices in heap order
//! position: [Some(1), None, Some(0), Some(2)]         // index → heap slot
//! ```
//!
//! Invariant: `position[heap[slot]] == Some(slot)` for every occupied slot,
//! and `heap[0]` holds an index with the least key.

use crate::error::{GraphError, KeyChange, Result};

/// Min-priority queue over a bounded universe of integer indices
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<K> {
    /// Key slot per index (`None` when the index is absent)
    keys: Vec<Option<K>>,

    /// Present indices in heap order (0-based: children of `i` are `2i+1`, `2i+2`)
    heap: Vec<usize>,

    /// Heap slot per index
    position: Vec<Option<usize>>,
}

impl<K: PartialOrd + Clone> IndexedPriorityQueue<K> {
    /// Create an empty queue accepting indices in `[0, capacity)`
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            keys: vec![None; capacity],
            heap: Vec::with_capacity(capacity),
            position: vec![None; capacity],
        }
    }

    /// Largest index + 1 the queue accepts
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.keys.len()
    }

    /// Number of indices present
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True when no index is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// True if `index` currently has a key
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::IndexOutOfBounds`] for an index outside `[0, capacity)`.
    pub fn contains(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.position[index].is_some())
    }

    /// Associate `key` with `index`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::IndexOutOfBounds`] or
    /// [`GraphError::DuplicateIndex`] if the index is already present.
    pub fn insert(&mut self, index: usize, key: K) -> Result<()> {
        if self.contains(index)? {
            return Err(GraphError::DuplicateIndex(index));
        }

        let slot = self.heap.len();
        self.heap.push(index);
        self.position[index] = Some(slot);
        self.keys[index] = Some(key);
        self.swim(slot);
        Ok(())
    }

    /// Index with the least key
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Underflow`] if the queue is empty.
    pub fn min_index(&self) -> Result<usize> {
        self.heap.first().copied().ok_or(GraphError::Underflow)
    }

    /// Least key
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Underflow`] if the queue is empty.
    pub fn min_key(&self) -> Result<&K> {
        let index = self.min_index()?;
        self.key_of(index)
    }

    /// Remove the index with the least key and return it
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Underflow`] if the queue is empty.
    pub fn delete_min(&mut self) -> Result<usize> {
        let index = self.min_index()?;
        self.detach(index);
        Ok(index)
    }

    /// Key currently associated with `index`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::IndexOutOfBounds`] or [`GraphError::MissingIndex`].
    pub fn key_of(&self, index: usize) -> Result<&K> {
        self.check_index(index)?;
        self.keys[index]
            .as_ref()
            .ok_or(GraphError::MissingIndex(index))
    }

    /// Replace the key of `index` with no ordering requirement
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::IndexOutOfBounds`] or [`GraphError::MissingIndex`].
    pub fn change_key(&mut self, index: usize, key: K) -> Result<()> {
        let slot = self.slot_of(index)?;
        self.keys[index] = Some(key);
        self.swim(slot);
        if let Some(slot) = self.position[index] {
            self.sink(slot);
        }
        Ok(())
    }

    /// Lower the key of `index` to `key`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::IndexOutOfBounds`], [`GraphError::MissingIndex`],
    /// or [`GraphError::NonStrictKeyChange`] if `key` is not strictly less than
    /// the current key. The queue is unchanged on error.
    pub fn decrease_key(&mut self, index: usize, key: K) -> Result<()> {
        let slot = self.slot_of(index)?;
        if !self.keys[index].as_ref().is_some_and(|current| key < *current) {
            return Err(GraphError::NonStrictKeyChange {
                index,
                direction: KeyChange::Decrease,
            });
        }

        self.keys[index] = Some(key);
        self.swim(slot);
        Ok(())
    }

    /// Raise the key of `index` to `key`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::IndexOutOfBounds`], [`GraphError::MissingIndex`],
    /// or [`GraphError::NonStrictKeyChange`] if `key` is not strictly greater
    /// than the current key. The queue is unchanged on error.
    pub fn increase_key(&mut self, index: usize, key: K) -> Result<()> {
        let slot = self.slot_of(index)?;
        if !self.keys[index].as_ref().is_some_and(|current| key > *current) {
            return Err(GraphError::NonStrictKeyChange {
                index,
                direction: KeyChange::Increase,
            });
        }

        self.keys[index] = Some(key);
        self.sink(slot);
        Ok(())
    }

    /// Remove `index` and return its key
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::IndexOutOfBounds`] or [`GraphError::MissingIndex`].
    pub fn remove(&mut self, index: usize) -> Result<K> {
        self.slot_of(index)?;
        self.detach(index).ok_or(GraphError::MissingIndex(index))
    }

    /// Indices in ascending key order, drained from a copy of the queue
    #[must_use]
    pub fn iter(&self) -> IntoIter<K> {
        self.clone().into_iter()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.capacity() {
            return Err(GraphError::IndexOutOfBounds {
                index,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    fn slot_of(&self, index: usize) -> Result<usize> {
        self.check_index(index)?;
        self.position[index].ok_or(GraphError::MissingIndex(index))
    }

    /// Take a present `index` out of the heap, restoring heap order
    fn detach(&mut self, index: usize) -> Option<K> {
        let slot = self.position[index]?;
        let last = self.heap.len() - 1;
        self.exchange(slot, last);
        self.heap.pop();
        self.position[index] = None;

        // The former last entry now sits in `slot` and may need to move either way
        if slot < self.heap.len() {
            let moved = self.heap[slot];
            self.swim(slot);
            if let Some(moved_slot) = self.position[moved] {
                self.sink(moved_slot);
            }
        }
        self.keys[index].take()
    }

    fn greater(&self, a: usize, b: usize) -> bool {
        match (&self.keys[self.heap[a]], &self.keys[self.heap[b]]) {
            (Some(left), Some(right)) => left > right,
            _ => false,
        }
    }

    fn exchange(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = Some(a);
        self.position[self.heap[b]] = Some(b);
    }

    fn swim(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.greater(parent, slot) {
                break;
            }
            self.exchange(slot, parent);
            slot = parent;
        }
    }

    fn sink(&mut self, mut slot: usize) {
        let len = self.heap.len();
        while 2 * slot + 1 < len {
            let mut child = 2 * slot + 1;
            if child + 1 < len && self.greater(child, child + 1) {
                child += 1;
            }
            if !self.greater(slot, child) {
                break;
            }
            self.exchange(slot, child);
            slot = child;
        }
    }
}

/// Draining iterator yielding indices in ascending key order
#[derive(Debug)]
pub struct IntoIter<K> {
    queue: IndexedPriorityQueue<K>,
}

impl<K: PartialOrd + Clone> Iterator for IntoIter<K> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.queue.delete_min().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<K: PartialOrd + Clone> ExactSizeIterator for IntoIter<K> {}

impl<K: PartialOrd + Clone> IntoIterator for IndexedPriorityQueue<K> {
    type Item = usize;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> IntoIter<K> {
        IntoIter { queue: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IndexedPriorityQueue<f64> {
        let mut queue = IndexedPriorityQueue::new(8);
        for (index, key) in [(3, 0.5), (0, 0.9), (5, 0.1), (7, 0.7), (1, 0.3)] {
            queue.insert(index, key).unwrap();
        }
        queue
    }

    fn assert_consistent<K: PartialOrd + Clone>(queue: &IndexedPriorityQueue<K>) {
        for (slot, &index) in queue.heap.iter().enumerate() {
            assert_eq!(queue.position[index], Some(slot));
            if slot > 0 {
                assert!(!queue.greater((slot - 1) / 2, slot));
            }
        }
    }

    #[test]
    fn test_min_after_inserts() {
        let queue = sample();
        assert_eq!(queue.len(), 5);
        assert_eq!(queue.min_index().unwrap(), 5);
        assert_eq!(*queue.min_key().unwrap(), 0.1);
        assert_consistent(&queue);
    }

    #[test]
    fn test_delete_min_order() {
        let mut queue = sample();
        let mut order = Vec::new();
        while !queue.is_empty() {
            order.push(queue.delete_min().unwrap());
            assert_consistent(&queue);
        }
        assert_eq!(order, vec![5, 1, 3, 7, 0]);
        assert_eq!(queue.delete_min(), Err(GraphError::Underflow));
        assert_eq!(queue.min_key(), Err(GraphError::Underflow));
    }

    #[test]
    fn test_insert_errors() {
        let mut queue = sample();
        assert_eq!(queue.insert(3, 0.2), Err(GraphError::DuplicateIndex(3)));
        assert_eq!(
            queue.insert(8, 0.2),
            Err(GraphError::IndexOutOfBounds {
                index: 8,
                capacity: 8
            })
        );
        assert!(queue.contains(9).is_err());
    }

    #[test]
    fn test_decrease_key() {
        let mut queue = sample();
        queue.decrease_key(0, 0.05).unwrap();
        assert_eq!(queue.min_index().unwrap(), 0);
        assert_consistent(&queue);
    }

    #[test]
    fn test_decrease_key_not_strict() {
        let mut queue = sample();
        let err = queue.decrease_key(3, 0.5).unwrap_err();
        assert_eq!(
            err,
            GraphError::NonStrictKeyChange {
                index: 3,
                direction: KeyChange::Decrease
            }
        );
        assert_eq!(*queue.key_of(3).unwrap(), 0.5);

        assert!(queue.decrease_key(3, 0.8).is_err());
        assert!(queue.decrease_key(2, 0.0).is_err());
    }

    #[test]
    fn test_increase_key() {
        let mut queue = sample();
        queue.increase_key(5, 2.0).unwrap();
        assert_eq!(queue.min_index().unwrap(), 1);
        assert_consistent(&queue);

        assert!(queue.increase_key(5, 2.0).is_err());
        assert_eq!(*queue.key_of(5).unwrap(), 2.0);
    }

    #[test]
    fn test_change_key_both_directions() {
        let mut queue = sample();
        queue.change_key(5, 1.5).unwrap();
        queue.change_key(0, 0.0).unwrap();
        assert_consistent(&queue);
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![0, 1, 3, 7, 5]);
        assert_eq!(queue.change_key(4, 1.0), Err(GraphError::MissingIndex(4)));
    }

    #[test]
    fn test_remove() {
        let mut queue = sample();
        assert_eq!(queue.remove(3).unwrap(), 0.5);
        assert!(!queue.contains(3).unwrap());
        assert_eq!(queue.len(), 4);
        assert_consistent(&queue);
        assert_eq!(queue.remove(3), Err(GraphError::MissingIndex(3)));

        // Index can be reused after removal
        queue.insert(3, 0.0).unwrap();
        assert_eq!(queue.min_index().unwrap(), 3);
    }

    #[test]
    fn test_remove_every_position() {
        for victim in [3, 0, 5, 7, 1] {
            let mut queue = sample();
            queue.remove(victim).unwrap();
            assert_consistent(&queue);
            assert!(!queue.iter().any(|index| index == victim));
        }
    }

    #[test]
    fn test_iter_leaves_queue_untouched() {
        let queue = sample();
        let sorted: Vec<usize> = queue.iter().collect();
        assert_eq!(sorted, vec![5, 1, 3, 7, 0]);
        assert_eq!(queue.len(), 5);
        assert_eq!(queue.iter().len(), 5);
    }

    #[test]
    fn test_zero_capacity() {
        let mut queue: IndexedPriorityQueue<u32> = IndexedPriorityQueue::new(0);
        assert!(queue.is_empty());
        assert!(queue.insert(0, 1).is_err());
    }
}

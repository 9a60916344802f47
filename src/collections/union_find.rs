//! Disjoint-set forest: weighted quick-union with path compression

use crate::error::{GraphError, Result};

/// Partition of `[0, len)` into disjoint components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionFind {
    parent: Vec<usize>,
    /// Tree size, meaningful for roots only
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// `len` singleton components
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            count: len,
        }
    }

    /// Number of elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// True for the empty partition
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of components
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Root of `element`'s component, compressing the path to it
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::IndexOutOfBounds`] for an element outside `[0, len)`.
    pub fn find(&mut self, element: usize) -> Result<usize> {
        if element >= self.len() {
            return Err(GraphError::IndexOutOfBounds {
                index: element,
                capacity: self.len(),
            });
        }

        let mut root = element;
        while root != self.parent[root] {
            root = self.parent[root];
        }

        let mut current = element;
        while current != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        Ok(root)
    }

    /// True if `a` and `b` share a component
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::IndexOutOfBounds`] for an element outside `[0, len)`.
    pub fn connected(&mut self, a: usize, b: usize) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Merge the components of `a` and `b`; returns false if already merged
    ///
    /// The smaller tree is attached under the larger tree's root.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::IndexOutOfBounds`] for an element outside `[0, len)`.
    pub fn union(&mut self, a: usize, b: usize) -> Result<bool> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;
        if root_a == root_b {
            return Ok(false);
        }

        let (small, large) = if self.size[root_a] < self.size[root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        self.count -= 1;
        Ok(true)
    }
}

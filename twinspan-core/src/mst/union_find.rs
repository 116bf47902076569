//! Union-find (disjoint set union) backing Kruskal's engine.
//!
//! `find` uses path halving. `union` hangs the second root under the first
//! without rank or size balancing; balancing would change performance only,
//! never which edges Kruskal's engine accepts.

/// Partition of `0..len` into disjoint components.
///
/// # Examples
/// ```
/// use twinspan_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1));
/// assert!(sets.union(2, 3));
/// assert!(!sets.union(1, 0));
/// assert_eq!(sets.component_count(), 2);
/// assert_ne!(sets.find(0), sets.find(3));
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Creates `len` singleton components.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            components: len,
        }
    }

    /// Returns the number of elements tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when no elements are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint components remaining.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the root of `node`'s component, halving the path walked.
    ///
    /// # Panics
    /// Panics if `node >= self.len()`.
    pub fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            let grandparent = self.parent[self.parent[node]];
            self.parent[node] = grandparent;
            node = grandparent;
        }
        node
    }

    /// Merges the components of `left` and `right`.
    ///
    /// Returns `false` when they already share a root.
    ///
    /// # Panics
    /// Panics if either argument is `>= self.len()`.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }
        self.parent[right_root] = left_root;
        self.components = self.components.saturating_sub(1);
        true
    }

    /// Returns `true` when `left` and `right` share a component.
    ///
    /// # Panics
    /// Panics if either argument is `>= self.len()`.
    pub fn connected(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }
}

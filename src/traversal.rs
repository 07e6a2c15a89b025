//! # Traversals
//!
//! Breadth-first and depth-first walks over a [`RelationGraph`], each in an iterative
//! and a recursive form. All four share one contract:
//!
//! - Walks start from every [root](RelationGraph::roots) in ascending order, and a
//!   root already reached from an earlier root is skipped.
//! - Out-edges are always expanded in ascending order of their destination.
//! - A vertex is reported the first time it is discovered, and only once.
//!
//! The iterative forms are backed by the lazy [`BfsIter`] and [`DfsIter`]. Each
//! recursive form yields exactly the order of its iterative counterpart: the
//! depth-first walks are ascending pre-orders, and the recursive breadth-first walk
//! recurses across layers, one root after another.

use ahash::{HashSet, HashSetExt};
use tracing::{debug, trace};

use crate::{graph::RelationGraph, vertex::Vertex};

pub mod iter;
pub use iter::{BfsIter, DfsIter};

/// The four traversal strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Traversal {
    #[display(fmt = "iterative BFS")]
    IterativeBfs,
    #[display(fmt = "iterative DFS")]
    IterativeDfs,
    #[display(fmt = "recursive BFS")]
    RecursiveBfs,
    #[display(fmt = "recursive DFS")]
    RecursiveDfs,
}

impl Traversal {
    pub const ALL: [Traversal; 4] = [
        Traversal::IterativeBfs,
        Traversal::IterativeDfs,
        Traversal::RecursiveBfs,
        Traversal::RecursiveDfs,
    ];
}

/// Discovery bookkeeping shared by the recursive walks.
struct Walk<V> {
    visited: HashSet<V>,
    order: Vec<V>,
}

impl<V: Vertex> Walk<V> {
    fn with_capacity(capacity: usize) -> Self {
        Walk {
            visited: HashSet::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Records `vertex` unless it was already discovered.
    fn discover(&mut self, vertex: &V) -> bool {
        if self.visited.contains(vertex) {
            return false;
        }
        self.visited.insert(vertex.clone());
        self.order.push(vertex.clone());
        true
    }
}

impl<V: Vertex> RelationGraph<V> {
    pub fn traverse(&self, traversal: Traversal) -> Vec<V> {
        let order = match traversal {
            Traversal::IterativeBfs => self.iterative_bfs(),
            Traversal::IterativeDfs => self.iterative_dfs(),
            Traversal::RecursiveBfs => self.recursive_bfs(),
            Traversal::RecursiveDfs => self.recursive_dfs(),
        };
        debug!(%traversal, visited = order.len(), "traversal finished");
        order
    }

    pub fn bfs_iter(&self) -> BfsIter<'_, V> {
        BfsIter::new(self, self.roots())
    }

    pub fn dfs_iter(&self) -> DfsIter<'_, V> {
        DfsIter::new(self, self.roots())
    }

    pub fn iterative_bfs(&self) -> Vec<V> {
        self.bfs_iter().collect()
    }

    pub fn iterative_dfs(&self) -> Vec<V> {
        self.dfs_iter().collect()
    }

    pub fn recursive_bfs(&self) -> Vec<V> {
        let mut walk = Walk::with_capacity(self.n_vertices());
        for root in self.roots() {
            if walk.discover(&root) {
                trace!(root = ?root, "breadth-first walk from root");
                self.bfs_layer(vec![root], &mut walk);
            }
        }
        walk.order
    }

    fn bfs_layer(&self, layer: Vec<V>, walk: &mut Walk<V>) {
        if layer.is_empty() {
            return;
        }
        let mut next = Vec::new();
        for v in &layer {
            for d in self.successors(v) {
                if walk.discover(d) {
                    next.push(d.clone());
                }
            }
        }
        trace!(layer = layer.len(), next = next.len(), "expanded layer");
        self.bfs_layer(next, walk);
    }

    pub fn recursive_dfs(&self) -> Vec<V> {
        let mut walk = Walk::with_capacity(self.n_vertices());
        for root in self.roots() {
            self.dfs_visit(&root, &mut walk);
        }
        walk.order
    }

    fn dfs_visit(&self, vertex: &V, walk: &mut Walk<V>) {
        if !walk.discover(vertex) {
            return;
        }
        trace!(vertex = ?vertex, "depth-first visit");
        for d in self.successors(vertex) {
            self.dfs_visit(d, walk);
        }
    }
}

#[cfg(test)]
mod tests;

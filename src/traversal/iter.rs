//! Lazy iterators behind the iterative traversals.

use std::collections::{btree_set, BTreeSet, VecDeque};

use ahash::{HashSet, HashSetExt};
use tracing::trace;

use crate::{graph::RelationGraph, vertex::Vertex};

/// A breadth-first walk from each root in turn.
///
/// Vertices are marked when enqueued, so the queue never holds a vertex twice and
/// the yield order is the enqueue order.
pub struct BfsIter<'a, V: Vertex> {
    graph: &'a RelationGraph<V>,
    roots: btree_set::IntoIter<V>,
    queue: VecDeque<V>,
    visited: HashSet<V>,
}

impl<'a, V: Vertex> BfsIter<'a, V> {
    pub fn new(graph: &'a RelationGraph<V>, roots: BTreeSet<V>) -> Self {
        BfsIter {
            graph,
            roots: roots.into_iter(),
            queue: VecDeque::new(),
            visited: HashSet::with_capacity(graph.n_vertices()),
        }
    }

    fn next_root(&mut self) -> Option<V> {
        let visited = &self.visited;
        let root = self.roots.find(|r| !visited.contains(r))?;
        trace!(root = ?root, "breadth-first walk from root");
        self.visited.insert(root.clone());
        Some(root)
    }
}

impl<V: Vertex> Iterator for BfsIter<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        if self.queue.is_empty() {
            let root = self.next_root()?;
            self.queue.push_back(root);
        }

        let current = self.queue.pop_front()?;
        for d in self.graph.successors(&current) {
            if !self.visited.contains(d) {
                self.visited.insert(d.clone());
                self.queue.push_back(d.clone());
            }
        }
        Some(current)
    }
}

/// A depth-first walk from each root in turn.
///
/// A vertex is reported when it is popped. Its undiscovered successors are pushed in
/// descending order, so the smallest is popped next and the yield order is the
/// ascending pre-order of [`RelationGraph::recursive_dfs`]. A vertex may sit on the
/// stack more than once; later copies are skipped when popped.
pub struct DfsIter<'a, V: Vertex> {
    graph: &'a RelationGraph<V>,
    roots: btree_set::IntoIter<V>,
    stack: Vec<V>,
    visited: HashSet<V>,
}

impl<'a, V: Vertex> DfsIter<'a, V> {
    pub fn new(graph: &'a RelationGraph<V>, roots: BTreeSet<V>) -> Self {
        DfsIter {
            graph,
            roots: roots.into_iter(),
            stack: Vec::new(),
            visited: HashSet::with_capacity(graph.n_vertices()),
        }
    }
}

impl<V: Vertex> Iterator for DfsIter<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(current) = self.stack.pop() else {
                let visited = &self.visited;
                let root = self.roots.find(|r| !visited.contains(r))?;
                trace!(root = ?root, "depth-first walk from root");
                self.stack.push(root);
                continue;
            };

            if !self.visited.insert(current.clone()) {
                continue;
            }
            for d in self.graph.successors(&current).rev() {
                if !self.visited.contains(d) {
                    self.stack.push(d.clone());
                }
            }
            return Some(current);
        }
    }
}

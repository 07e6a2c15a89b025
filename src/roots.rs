//! # Root Selection
//!
//! Roots are the vertices every traversal starts from. A vertex `v` is a root when
//!
//! 1. it has an out-edge to another vertex and no edge at all ends at it,
//! 2. its only out-edge is its self-loop and no other vertex points at it, or
//! 3. it is an endpoint of no edge.
//!
//! When none of these apply and the graph is an equivalence relation, the smallest
//! member of the equivalence class of `v` is a root instead. Classes share their
//! minimum, so each class contributes a single root.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::{graph::RelationGraph, vertex::Vertex};

impl<V: Vertex> RelationGraph<V> {
    /// The canonical starting vertices, ascending.
    pub fn roots(&self) -> BTreeSet<V> {
        let mut roots = BTreeSet::new();
        if self.is_empty() {
            return roots;
        }

        let equivalence = self.is_equivalence();
        for v in self.vertices() {
            if !self.touches_edge(v) {
                trace!(vertex = ?v, "isolated root");
                roots.insert(v.clone());
            } else if self.successors(v).any(|d| d != v) && !self.is_destination(v) {
                trace!(vertex = ?v, "source root");
                roots.insert(v.clone());
            } else if self.has_only_self_loop(v) && !self.has_foreign_predecessor(v) {
                trace!(vertex = ?v, "self-loop root");
                roots.insert(v.clone());
            } else if equivalence {
                // Under an equivalence relation the class is exactly the paired
                // successors, so the check does not need repeating.
                if let Some(min) = self.paired_successors(v).first() {
                    trace!(vertex = ?v, class_min = ?min, "class root");
                    roots.insert(min.clone());
                }
            }
        }

        debug!(roots = roots.len(), equivalence, "selected roots");
        roots
    }

    fn has_only_self_loop(&self, vertex: &V) -> bool {
        self.out_degree(vertex) == 1 && self.contains_edge(vertex, vertex)
    }
}

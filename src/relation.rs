//! # Relation Properties
//!
//! Predicates that read the edge set of a [`RelationGraph`] as a binary relation
//! `R ⊆ V × V`, with `(a, b) ∈ R` whenever the edge `a -> b` exists.
//!
//! The symmetric and anti-symmetric checks are tallies rather than direct
//! quantifier checks. They compare two counts accumulated over the edge set, and
//! the anti-symmetric tally counts a mutual pair `a -> b`, `b -> a` once from each
//! side while a self-loop mirrors itself exactly once. Reflexivity and symmetry
//! only walk vertices of the vertex set, which matters for graphs built with
//! [`Validation::Tolerant`](crate::graph::Validation::Tolerant).
//!
//! [`equivalence_class`](RelationGraph::equivalence_class) collects the vertices
//! mutually related to a vertex through paired edges. A vertex only belongs to its
//! own class through its self-loop.

use std::{collections::BTreeSet, fmt::Display};

use itertools::Itertools;
use tracing::debug;

use crate::{graph::RelationGraph, vertex::Vertex};

/// The relation properties of a graph, evaluated once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelationProperties {
    pub reflexive: bool,
    pub symmetric: bool,
    pub transitive: bool,
    pub anti_symmetric: bool,
}

impl RelationProperties {
    pub fn is_equivalence(&self) -> bool {
        self.reflexive && self.symmetric && self.transitive
    }
}

impl Display for RelationProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let held = [
            ("reflexive", self.reflexive),
            ("symmetric", self.symmetric),
            ("transitive", self.transitive),
            ("anti-symmetric", self.anti_symmetric),
            ("equivalence", self.is_equivalence()),
        ]
        .into_iter()
        .filter_map(|(name, holds)| holds.then_some(name))
        .join(", ");

        if held.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{held}")
        }
    }
}

impl<V: Vertex> RelationGraph<V> {
    /// Every vertex has a self-loop.
    ///
    /// Counts the self-loops of the vertices in the vertex set and compares the
    /// count with the number of vertices. The edge set holds each self-loop at most
    /// once, so the count cannot overshoot.
    pub fn is_reflexive(&self) -> bool {
        let count = self
            .vertices()
            .iter()
            .filter(|v| self.contains_edge(v, v))
            .count();
        let reflexive = count == self.n_vertices();
        debug!(count, vertices = self.n_vertices(), reflexive, "reflexivity");
        reflexive
    }

    /// Every edge `a -> b` has a matching `b -> a`.
    ///
    /// Tallies, per vertex acting as a source, its out-edges and the out-edges that
    /// have a reverse edge, and compares the two totals.
    pub fn is_symmetric(&self) -> bool {
        let mut count = 0;
        let mut number_of_edges = 0;
        for v in self.vertices() {
            for d in self.successors(v) {
                number_of_edges += 1;
                if self.contains_edge(d, v) {
                    count += 1;
                }
            }
        }
        let symmetric = count == number_of_edges;
        debug!(count, number_of_edges, symmetric, "symmetry");
        symmetric
    }

    /// For every `a -> b` and `b -> c` there is an `a -> c`.
    pub fn is_transitive(&self) -> bool {
        for e in self.edges() {
            for c in self.successors(&e.destination) {
                if !self.contains_edge(&e.source, c) {
                    debug!(
                        from = ?e.source,
                        via = ?e.destination,
                        to = ?c,
                        "missing composed edge"
                    );
                    return false;
                }
            }
        }
        true
    }

    /// `a -> b` and `b -> a` together imply `a == b`.
    ///
    /// Every ordered pair of mutually reversed edges bumps `count`; those where the
    /// edge is a self-loop also bump `check_count`. A mutual pair between distinct
    /// vertices adds two to `count` and nothing to `check_count`.
    pub fn is_anti_symmetric(&self) -> bool {
        let mut count = 0;
        let mut check_count = 0;
        for e in self.edges() {
            for other in self.edges() {
                if e.mirrors(other) {
                    count += 1;
                    if e.is_self_loop() {
                        check_count += 1;
                    }
                }
            }
        }
        let anti_symmetric = count == check_count;
        debug!(count, check_count, anti_symmetric, "anti-symmetry");
        anti_symmetric
    }

    pub fn is_equivalence(&self) -> bool {
        self.is_reflexive() && self.is_symmetric() && self.is_transitive()
    }

    pub fn properties(&self) -> RelationProperties {
        RelationProperties {
            reflexive: self.is_reflexive(),
            symmetric: self.is_symmetric(),
            transitive: self.is_transitive(),
            anti_symmetric: self.is_anti_symmetric(),
        }
    }

    /// The vertices `u` with both `vertex -> u` and `u -> vertex`.
    ///
    /// Empty unless the graph is an equivalence relation.
    pub fn equivalence_class(&self, vertex: &V) -> BTreeSet<V> {
        if !self.is_equivalence() {
            return BTreeSet::new();
        }
        self.paired_successors(vertex)
    }

    pub(crate) fn paired_successors(&self, vertex: &V) -> BTreeSet<V> {
        self.successors(vertex)
            .filter(|d| self.contains_edge(d, vertex))
            .cloned()
            .collect()
    }
}

//! # Relation Graphs
//!
//! [`RelationGraph`] is a finite directed graph whose edge set is read as a binary
//! relation over its vertices. It is built once, from a vertex set and an edge set,
//! and is never mutated afterwards: every query in [`relation`](crate::relation),
//! [`roots`](crate::roots) and [`traversal`](crate::traversal) takes `&self`.
//!
//! Next to the two sets the graph keeps a successor index, mapping each source to
//! its destinations in ascending order. Neighbour expansion in every traversal reads
//! from this index, which is what makes the visitation order independent of how the
//! caller happened to list its edges.
//!
//! ## Construction
//!
//! - [`RelationGraph::new`] accepts whatever it is given. Edges whose endpoints are
//!   missing from the vertex set are kept as is.
//! - [`RelationGraph::try_new`] rejects such edges with [`GraphError::UnknownVertex`].
//! - [`RelationGraphBuilder`] collects vertices and edges one at a time and applies a
//!   [`Validation`] policy when built.
//!
//! Both sets are ordered sets, so duplicate vertices and duplicate edges collapse at
//! construction.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;
use tracing::debug;

use crate::{edge::Edge, vertex::Vertex};

pub mod builder;
pub use builder::{RelationGraphBuilder, Validation};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<V: std::fmt::Debug> {
    #[error("Edge {from:?} -> {to:?} references vertex {missing:?}, which is not in the vertex set")]
    UnknownVertex { from: V, to: V, missing: V },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationGraph<V> {
    vertices: BTreeSet<V>,
    edges: BTreeSet<Edge<V>>,
    successors: BTreeMap<V, BTreeSet<V>>,
}

impl<V: Vertex> RelationGraph<V> {
    /// Builds a graph without checking that edges stay inside the vertex set.
    pub fn new<I, J, E>(vertices: I, edges: J) -> Self
    where
        I: IntoIterator<Item = V>,
        J: IntoIterator<Item = E>,
        E: Into<Edge<V>>,
    {
        let vertices: BTreeSet<V> = vertices.into_iter().collect();
        let edges: BTreeSet<Edge<V>> = edges.into_iter().map(Into::into).collect();

        let mut successors: BTreeMap<V, BTreeSet<V>> = BTreeMap::new();
        for e in &edges {
            successors
                .entry(e.source.clone())
                .or_default()
                .insert(e.destination.clone());
        }

        debug!(
            vertices = vertices.len(),
            edges = edges.len(),
            "built relation graph"
        );

        RelationGraph {
            vertices,
            edges,
            successors,
        }
    }

    /// Builds a graph, rejecting the first edge (in ascending order) with an endpoint
    /// outside the vertex set.
    pub fn try_new<I, J, E>(vertices: I, edges: J) -> Result<Self, GraphError<V>>
    where
        I: IntoIterator<Item = V>,
        J: IntoIterator<Item = E>,
        E: Into<Edge<V>>,
    {
        let graph = Self::new(vertices, edges);
        graph.validate()?;
        Ok(graph)
    }

    /// Checks that every edge endpoint belongs to the vertex set.
    pub fn validate(&self) -> Result<(), GraphError<V>> {
        for e in &self.edges {
            for endpoint in [&e.source, &e.destination] {
                if !self.vertices.contains(endpoint) {
                    return Err(GraphError::UnknownVertex {
                        from: e.source.clone(),
                        to: e.destination.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn vertices(&self) -> &BTreeSet<V> {
        &self.vertices
    }

    pub fn edges(&self) -> &BTreeSet<Edge<V>> {
        &self.edges
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Destinations of the out-edges of `vertex`, ascending.
    pub fn successors<'a>(&'a self, vertex: &V) -> impl DoubleEndedIterator<Item = &'a V> + 'a {
        self.successors.get(vertex).into_iter().flatten()
    }

    pub fn out_degree(&self, vertex: &V) -> usize {
        self.successors.get(vertex).map_or(0, BTreeSet::len)
    }

    pub fn contains_edge(&self, source: &V, destination: &V) -> bool {
        self.successors
            .get(source)
            .is_some_and(|d| d.contains(destination))
    }

    /// Whether any edge, self-loops included, ends at `vertex`.
    pub fn is_destination(&self, vertex: &V) -> bool {
        self.edges.iter().any(|e| &e.destination == vertex)
    }

    /// Whether an edge from some other vertex ends at `vertex`.
    pub fn has_foreign_predecessor(&self, vertex: &V) -> bool {
        self.edges
            .iter()
            .any(|e| &e.destination == vertex && &e.source != vertex)
    }

    /// Whether `vertex` is an endpoint of any edge.
    pub fn touches_edge(&self, vertex: &V) -> bool {
        self.edges
            .iter()
            .any(|e| &e.source == vertex || &e.destination == vertex)
    }
}

use std::collections::BTreeSet;

use crate::{edge::Edge, vertex::Vertex};

use super::{GraphError, RelationGraph};

/// How strictly a [`RelationGraphBuilder`] checks its edges when built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validation {
    /// Keep edges whose endpoints are not in the vertex set.
    #[default]
    Tolerant,
    /// Reject edges whose endpoints are not in the vertex set.
    Strict,
    /// Add missing endpoints to the vertex set.
    Complete,
}

#[derive(Clone, Debug)]
pub struct RelationGraphBuilder<V> {
    vertices: BTreeSet<V>,
    edges: BTreeSet<Edge<V>>,
    validation: Validation,
}

impl<V: Vertex> RelationGraphBuilder<V> {
    pub fn new() -> Self {
        RelationGraphBuilder {
            vertices: BTreeSet::new(),
            edges: BTreeSet::new(),
            validation: Validation::default(),
        }
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Returns `false` if the vertex was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.vertices.insert(vertex)
    }

    /// Returns `false` if the edge was already present.
    pub fn add_edge(&mut self, source: V, destination: V) -> bool {
        self.edges.insert(Edge::new(source, destination))
    }

    pub fn extend_vertices(&mut self, vertices: impl IntoIterator<Item = V>) {
        self.vertices.extend(vertices);
    }

    pub fn extend_edges<E: Into<Edge<V>>>(&mut self, edges: impl IntoIterator<Item = E>) {
        self.edges.extend(edges.into_iter().map(Into::into));
    }

    pub fn build(self) -> Result<RelationGraph<V>, GraphError<V>> {
        match self.validation {
            Validation::Tolerant => Ok(RelationGraph::new(self.vertices, self.edges)),
            Validation::Strict => RelationGraph::try_new(self.vertices, self.edges),
            Validation::Complete => {
                let mut vertices = self.vertices;
                for e in &self.edges {
                    vertices.insert(e.source.clone());
                    vertices.insert(e.destination.clone());
                }
                Ok(RelationGraph::new(vertices, self.edges))
            }
        }
    }
}

impl<V: Vertex> Default for RelationGraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> From<RelationGraph<V>> for RelationGraphBuilder<V> {
    fn from(graph: RelationGraph<V>) -> Self {
        RelationGraphBuilder {
            vertices: graph.vertices,
            edges: graph.edges,
            validation: Validation::default(),
        }
    }
}

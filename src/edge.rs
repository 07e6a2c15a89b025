use std::fmt::Display;

/// A directed edge, read as the pair `(source, destination)` of a relation.
///
/// Edges are compared structurally, first by source and then by destination, so an
/// ordered edge set lists the out-edges of each vertex contiguously and with
/// ascending destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<V> {
    pub source: V,
    pub destination: V,
}

impl<V> Edge<V> {
    pub fn new(source: V, destination: V) -> Self {
        Edge {
            source,
            destination,
        }
    }

    pub fn is_self_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.source == self.destination
    }

    /// The edge pointing the other way.
    pub fn reversed(&self) -> Self
    where
        V: Clone,
    {
        Edge::new(self.destination.clone(), self.source.clone())
    }

    /// Whether `other` is the reverse of `self`.
    pub fn mirrors(&self, other: &Self) -> bool
    where
        V: PartialEq,
    {
        self.source == other.destination && self.destination == other.source
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from((source, destination): (V, V)) -> Self {
        Edge::new(source, destination)
    }
}

impl<V: Display> Display for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

//! # Relgraph
//!
//! Relgraph is a Rust library for finite relations viewed as directed graphs.
//! A [`RelationGraph`](graph::RelationGraph) is built once from a vertex set and an
//! edge set, and then answers two kinds of questions:
//!
//! - which relation properties its edge set has (reflexive, symmetric, transitive,
//!   anti-symmetric, equivalence) and what the equivalence classes are, and
//! - in which order breadth-first and depth-first searches visit its vertices.
//!
//! Every traversal starts from the graph's [roots](graph::RelationGraph::roots) and
//! expands neighbours in ascending vertex order, so visitation sequences are fully
//! determined by the graph.
//!
//! ```
//! use relgraph::graph;
//!
//! let g = graph!(1 -> 2; 2 -> 3).unwrap();
//! let order: Vec<u64> = g.iterative_bfs().iter().map(|v| v.value()).collect();
//! assert_eq!(order, vec![1, 2, 3]);
//! ```

pub mod dot;
pub mod edge;
pub mod graph;
pub mod parser;
pub mod relation;
pub mod roots;
pub mod traversal;
pub mod vertex;

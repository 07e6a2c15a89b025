//! # Edge-List Parser
//!
//! Reads a [`RelationGraph<Label>`] from a small textual format:
//!
//! ```text
//! 1 -> 2; 2 -> 3
//! 4
//! 5 -> 5 -> 6
//! ```
//!
//! Statements are separated by `;` or newlines. A statement is either a lone vertex
//! or a chain `a -> b -> c`, which adds the edges `a -> b` and `b -> c`. A line that
//! ends with `->`, or one that starts with it, continues the chain of the line before. Endpoints of
//! edges join the vertex set, so the parsed graph always passes
//! [`validate`](RelationGraph::validate).
//!
//! The [`graph!`](crate::graph!) macro stringifies its tokens and parses them, which
//! keeps test fixtures short:
//!
//! ```
//! use relgraph::graph;
//!
//! let g = graph!(1 -> 2; 2 -> 3).unwrap();
//! assert_eq!(g.n_edges(), 2);
//! ```

use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::{
    graph::{GraphError, RelationGraph, RelationGraphBuilder, Validation},
    vertex::{Label, LabelError},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Malformed statement {index}: {statement:?}")]
    MalformedStatement { index: usize, statement: String },
    #[error("Invalid vertex in statement {index}: {source}")]
    Label {
        index: usize,
        #[source]
        source: LabelError,
    },
    #[error(transparent)]
    Graph(#[from] GraphError<Label>),
}

impl RelationGraph<Label> {
    pub fn from_edge_list(s: impl AsRef<str>) -> Result<Self, ParseError> {
        let mut builder = RelationGraphBuilder::new().with_validation(Validation::Complete);

        let statements = statements(s.as_ref());
        for (index, statement) in statements.iter().enumerate() {
            let labels = statement
                .split("->")
                .map(|part| {
                    let part = part.trim();
                    if part.is_empty() || part.contains(char::is_whitespace) {
                        return Err(ParseError::MalformedStatement {
                            index,
                            statement: statement.clone(),
                        });
                    }
                    part.parse::<Label>()
                        .map_err(|source| ParseError::Label { index, source })
                })
                .collect::<Result<Vec<_>, _>>()?;

            if let [vertex] = labels.as_slice() {
                builder.add_vertex(*vertex);
            }
            for pair in labels.windows(2) {
                builder.add_edge(pair[0], pair[1]);
            }
        }

        debug!(statements = statements.len(), "parsed edge list");
        Ok(builder.build()?)
    }
}

/// Splits the input into trimmed, non-empty statements, joining lines broken
/// around an arrow.
fn statements(s: &str) -> Vec<String> {
    let mut statements = Vec::new();
    for chunk in s.split(';') {
        let mut current = String::new();
        for line in chunk.lines().map(str::trim).filter(|line| !line.is_empty()) {
            if !current.is_empty() && !current.ends_with("->") && !line.starts_with("->") {
                statements.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(line);
        }
        if !current.is_empty() {
            statements.push(current);
        }
    }
    statements
}

impl FromStr for RelationGraph<Label> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_edge_list(s)
    }
}

#[macro_export]
macro_rules! graph {
    ($($t:tt)*) => {
        $crate::graph::RelationGraph::<$crate::vertex::Label>::from_edge_list(stringify!($($t)*))
    };
}

//! # Graphviz Output
//!
//! Serializes a [`RelationGraph`] as a DOT `digraph`. Vertices are written first and
//! edges second, both in ascending order, so the output is stable for a given graph.
//! Each vertex line carries the attributes returned by a caller supplied closure;
//! [`to_dot`](RelationGraph::to_dot) uses it to draw roots as double circles.

use std::fmt::Display;

use crate::{graph::RelationGraph, vertex::Vertex};

fn quoted(value: &impl Display) -> String {
    format!("\"{}\"", value.to_string().replace('"', "\\\""))
}

impl<V: Vertex + Display> RelationGraph<V> {
    pub fn dot_serialize_fmt(
        &self,
        writer: &mut impl std::fmt::Write,
        node_map: &impl Fn(&V) -> Option<String>,
    ) -> Result<(), std::fmt::Error> {
        writeln!(writer, "digraph {{")?;

        for v in self.vertices() {
            match node_map(v) {
                Some(attrs) => writeln!(writer, "  {} [{attrs}];", quoted(v))?,
                None => writeln!(writer, "  {};", quoted(v))?,
            }
        }

        for e in self.edges() {
            writeln!(
                writer,
                "  {} -> {};",
                quoted(&e.source),
                quoted(&e.destination)
            )?;
        }
        writeln!(writer, "}}")?;
        Ok(())
    }

    pub fn dot_serialize_io(
        &self,
        writer: &mut impl std::io::Write,
        node_map: &impl Fn(&V) -> Option<String>,
    ) -> Result<(), std::io::Error> {
        let mut out = String::new();
        self.dot_serialize_fmt(&mut out, node_map)
            .map_err(std::io::Error::other)?;
        writer.write_all(out.as_bytes())
    }

    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        let roots = self.roots();
        let mut out = String::new();
        self.dot_serialize_fmt(&mut out, &|v| {
            roots.contains(v).then(|| "shape=doublecircle".to_owned())
        })?;
        Ok(out)
    }
}

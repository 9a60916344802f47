//! Plain-text graph formats
//!
//! All formats are whitespace-separated token streams, so line breaks are
//! not significant:
//!
//! ```text
//! Graph / Digraph            Weighted graphs / flow networks
//! 4        (vertices)        4 3      (vertices, edges)
//! 3        (edges)           0 1 0.5  (u v weight) or (from to capacity)
//! 0 1                        1 2 0.25
//! 1 2                        2 3 1.0
//! 2 3
//! ```
//!
//! `parse_text` is always available; `from_path` needs the `io` feature and
//! reports the offending path through [`anyhow::Context`].

use super::{Digraph, EdgeWeightedDigraph, EdgeWeightedGraph, FlowNetwork, Graph};
use crate::error::{GraphError, Result};
use std::str::{FromStr, SplitWhitespace};

#[cfg(feature = "io")]
use anyhow::Context;
#[cfg(feature = "io")]
use std::path::Path;

/// Whitespace token reader with position-aware errors
pub(crate) struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    consumed: usize,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
            consumed: 0,
        }
    }

    /// Next token parsed as `T`, naming `what` in the error
    pub(crate) fn next<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let token = self.inner.next().ok_or_else(|| {
            GraphError::Malformed(format!(
                "expected {what} after {} tokens, found end of input",
                self.consumed
            ))
        })?;
        self.consumed += 1;

        token.parse().map_err(|_| {
            GraphError::Malformed(format!(
                "expected {what} at token {}, found {token:?}",
                self.consumed
            ))
        })
    }
}

/// Read `path` to a string, then parse it
#[cfg(feature = "io")]
pub(crate) fn load<T>(path: &Path, parse: impl FnOnce(&str) -> Result<T>) -> anyhow::Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read graph from {}", path.display()))?;
    parse(&text).with_context(|| format!("Failed to read graph from {}", path.display()))
}

impl Graph {
    /// Parse the `V`, `E`, then `E` pairs of `u v` format
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Malformed`] for missing or non-numeric tokens and
    /// [`GraphError::VertexOutOfBounds`] for an endpoint outside `[0, V)`.
    pub fn parse_text(text: &str) -> Result<Self> {
        let mut tokens = Tokens::new(text);
        let num_vertices = tokens.next("vertex count")?;
        let num_edges: usize = tokens.next("edge count")?;

        let mut edges = Vec::with_capacity(num_edges);
        for _ in 0..num_edges {
            edges.push((tokens.next("vertex")?, tokens.next("vertex")?));
        }
        Self::from_edges(num_vertices, &edges)
    }

    /// Load a graph file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is malformed
    #[cfg(feature = "io")]
    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        load(path.as_ref(), Self::parse_text)
    }
}

impl Digraph {
    /// Parse the same format as [`Graph::parse_text`], reading pairs as `from to`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Malformed`] for missing or non-numeric tokens and
    /// [`GraphError::VertexOutOfBounds`] for an endpoint outside `[0, V)`.
    pub fn parse_text(text: &str) -> Result<Self> {
        let mut tokens = Tokens::new(text);
        let num_vertices = tokens.next("vertex count")?;
        let num_edges: usize = tokens.next("edge count")?;

        let mut edges = Vec::with_capacity(num_edges);
        for _ in 0..num_edges {
            edges.push((tokens.next("vertex")?, tokens.next("vertex")?));
        }
        Self::from_edges(num_vertices, &edges)
    }

    /// Load a digraph file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is malformed
    #[cfg(feature = "io")]
    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        load(path.as_ref(), Self::parse_text)
    }
}

/// `V E` followed by `E` triples of `(vertex, vertex, number)`
fn weighted_triples(text: &str, third: &str) -> Result<(usize, Vec<(usize, usize, f64)>)> {
    let mut tokens = Tokens::new(text);
    let num_vertices = tokens.next("vertex count")?;
    let num_edges: usize = tokens.next("edge count")?;

    let mut triples = Vec::with_capacity(num_edges);
    for _ in 0..num_edges {
        triples.push((
            tokens.next("vertex")?,
            tokens.next("vertex")?,
            tokens.next(third)?,
        ));
    }
    Ok((num_vertices, triples))
}

impl EdgeWeightedGraph {
    /// Parse `V E` then `E` lines of `u v weight`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Malformed`] for missing or non-numeric tokens and
    /// [`GraphError::VertexOutOfBounds`] for an endpoint outside `[0, V)`.
    pub fn parse_text(text: &str) -> Result<Self> {
        let (num_vertices, triples) = weighted_triples(text, "weight")?;
        Self::from_edges(num_vertices, &triples)
    }

    /// Load an edge-weighted graph file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is malformed
    #[cfg(feature = "io")]
    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        load(path.as_ref(), Self::parse_text)
    }
}

impl EdgeWeightedDigraph {
    /// Parse `V E` then `E` lines of `from to weight`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Malformed`] for missing or non-numeric tokens and
    /// [`GraphError::VertexOutOfBounds`] for an endpoint outside `[0, V)`.
    pub fn parse_text(text: &str) -> Result<Self> {
        let (num_vertices, triples) = weighted_triples(text, "weight")?;
        Self::from_edges(num_vertices, &triples)
    }

    /// Load an edge-weighted digraph file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is malformed
    #[cfg(feature = "io")]
    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        load(path.as_ref(), Self::parse_text)
    }
}

impl FlowNetwork {
    /// Parse `V`, `E`, then `E` lines of `from to capacity`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Malformed`] for missing or non-numeric tokens,
    /// [`GraphError::VertexOutOfBounds`] for an endpoint outside `[0, V)` and
    /// [`GraphError::InvalidCapacity`] for a negative capacity.
    pub fn parse_text(text: &str) -> Result<Self> {
        let (num_vertices, triples) = weighted_triples(text, "capacity")?;
        Self::from_edges(num_vertices, &triples)
    }

    /// Load a flow network file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is malformed
    #[cfg(feature = "io")]
    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        load(path.as_ref(), Self::parse_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_errors() {
        let mut tokens = Tokens::new("3 x");
        assert_eq!(tokens.next::<usize>("vertex count").unwrap(), 3);

        let err = tokens.next::<usize>("edge count").unwrap_err();
        assert!(err.to_string().contains("\"x\""));

        let err = tokens.next::<usize>("vertex").unwrap_err();
        assert!(err.to_string().contains("end of input"));
    }

    #[test]
    fn test_parse_graph() {
        let graph = Graph::parse_text("4\n3\n0 1\n1 2\n2 3\n").unwrap();
        assert_eq!(graph.num_vertices(), 4);
        assert_eq!(graph.num_edges(), 3);
        assert_eq!(graph.adjacent_to(1).unwrap(), &[0, 2]);
    }

    #[test]
    fn test_parse_digraph() {
        let digraph = Digraph::parse_text("3 2 0 1 2 0").unwrap();
        assert_eq!(digraph.edges(), vec![(0, 1), (2, 0)]);
    }

    #[test]
    fn test_parse_truncated() {
        let err = Graph::parse_text("3\n2\n0 1\n").unwrap_err();
        assert!(matches!(err, GraphError::Malformed(_)));
    }

    #[test]
    fn test_parse_out_of_bounds_vertex() {
        let err = Digraph::parse_text("2\n1\n0 2\n").unwrap_err();
        assert!(matches!(err, GraphError::VertexOutOfBounds { vertex: 2, .. }));
    }

    #[test]
    fn test_parse_weighted() {
        let graph = EdgeWeightedGraph::parse_text("3 2\n0 1 0.5\n1 2 0.25\n").unwrap();
        assert_eq!(graph.num_edges(), 2);

        let digraph = EdgeWeightedDigraph::parse_text("2 1\n1 0 -1.5\n").unwrap();
        assert_eq!(digraph.adjacent_to(1).unwrap()[0].weight(), -1.5);
    }

    #[test]
    fn test_parse_flow_network() {
        let network = FlowNetwork::parse_text("2\n1\n0 1 3.0\n").unwrap();
        assert_eq!(network.edge(0).unwrap().capacity(), 3.0);

        let err = FlowNetwork::parse_text("2\n1\n0 1 -3.0\n").unwrap_err();
        assert_eq!(err, GraphError::InvalidCapacity(-3.0));
    }
}

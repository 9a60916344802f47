//! Graphs over string labels
//!
//! Each input line holds an anchor label followed by its neighbors' labels,
//! separated by a delimiter. Labels are mapped to dense vertex indices in
//! order of first appearance.
//!
//! ```
//! use classic_graph::SymbolGraph;
//!
//! let routes = SymbolGraph::parse_text("JFK MCO\nORD DEN HOU\nDEN PHX\n", " ").unwrap();
//! assert_eq!(routes.index_of("ORD"), Some(2));
//! assert_eq!(routes.name_of(3), "DEN");
//! assert_eq!(routes.graph().num_edges(), 4);
//! ```

use super::{Digraph, Graph, Vertex};
use crate::algorithms::BreadthFirstPaths;
use crate::error::{GraphError, Result};
use std::collections::HashMap;

#[cfg(feature = "io")]
use anyhow::Context;
#[cfg(feature = "io")]
use std::path::Path;

/// Delimiter for whitespace-free labels
pub const DEFAULT_SYMBOL_DELIMITER: &str = " ";

/// Label ↔ index mapping
#[derive(Debug, Clone, Default, PartialEq)]
struct SymbolTable {
    index: HashMap<String, Vertex>,
    names: Vec<String>,
}

impl SymbolTable {
    /// Two passes: collect distinct labels, then connect each anchor to the
    /// rest of its line. Blank lines and empty fields are skipped.
    fn scan(text: &str, delimiter: &str) -> Result<(Self, Vec<(Vertex, Vertex)>)> {
        if delimiter.is_empty() {
            return Err(GraphError::Malformed("empty symbol delimiter".to_string()));
        }

        let lines: Vec<Vec<&str>> = text
            .lines()
            .map(|line| {
                line.split(delimiter)
                    .map(|field| field.trim_end_matches('\r'))
                    .filter(|field| !field.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|fields| !fields.is_empty())
            .collect();

        let mut table = Self::default();
        for label in lines.iter().flatten() {
            if !table.index.contains_key(*label) {
                table.index.insert((*label).to_string(), table.names.len());
                table.names.push((*label).to_string());
            }
        }

        let mut edges = Vec::new();
        for fields in &lines {
            let anchor = table.index[fields[0]];
            edges.extend(fields[1..].iter().map(|label| (anchor, table.index[*label])));
        }

        Ok((table, edges))
    }

    fn lookup(&self, label: &str) -> Result<Vertex> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::UnknownSymbol(label.to_string()))
    }
}

#[cfg(feature = "io")]
fn read_symbols(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read graph from {}", path.display()))
}

/// Undirected graph whose vertices carry string labels
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolGraph {
    symbols: SymbolTable,
    graph: Graph,
}

impl SymbolGraph {
    /// Build from delimited lines of `anchor neighbor neighbor ...`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Malformed`] if `delimiter` is empty.
    pub fn parse_text(text: &str, delimiter: &str) -> Result<Self> {
        let (symbols, edges) = SymbolTable::scan(text, delimiter)?;
        let graph = Graph::from_edges(symbols.names.len(), &edges)?;
        Ok(Self { symbols, graph })
    }

    /// Load a symbol graph file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or `delimiter` is empty
    #[cfg(feature = "io")]
    pub fn from_path<P: AsRef<Path>>(path: P, delimiter: &str) -> anyhow::Result<Self> {
        let path = path.as_ref();
        Self::parse_text(&read_symbols(path)?, delimiter)
            .with_context(|| format!("Failed to read graph from {}", path.display()))
    }

    /// True if `label` names a vertex
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.symbols.index.contains_key(label)
    }

    /// Vertex index for `label`
    #[must_use]
    pub fn index_of(&self, label: &str) -> Option<Vertex> {
        self.symbols.index.get(label).copied()
    }

    /// Label of `vertex`
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    #[must_use]
    pub fn name_of(&self, vertex: Vertex) -> &str {
        &self.symbols.names[vertex]
    }

    /// Underlying index graph
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Fewest-hop chain of labels from `source` to `target`
    ///
    /// Returns `Ok(None)` when the two labels are not connected.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownSymbol`] if either label is absent.
    pub fn degrees_of_separation(&self, source: &str, target: &str) -> Result<Option<Vec<&str>>> {
        let from = self.symbols.lookup(source)?;
        let to = self.symbols.lookup(target)?;

        let search = BreadthFirstPaths::new(&self.graph, from)?;
        Ok(search
            .path_to(to)
            .map(|path| path.into_iter().map(|v| self.name_of(v)).collect()))
    }
}

/// Directed graph whose vertices carry string labels
///
/// Each line's anchor gets an edge to every other label on the line.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolDigraph {
    symbols: SymbolTable,
    digraph: Digraph,
}

impl SymbolDigraph {
    /// Build from delimited lines of `anchor successor successor ...`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Malformed`] if `delimiter` is empty.
    pub fn parse_text(text: &str, delimiter: &str) -> Result<Self> {
        let (symbols, edges) = SymbolTable::scan(text, delimiter)?;
        let digraph = Digraph::from_edges(symbols.names.len(), &edges)?;
        Ok(Self { symbols, digraph })
    }

    /// Load a symbol digraph file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or `delimiter` is empty
    #[cfg(feature = "io")]
    pub fn from_path<P: AsRef<Path>>(path: P, delimiter: &str) -> anyhow::Result<Self> {
        let path = path.as_ref();
        Self::parse_text(&read_symbols(path)?, delimiter)
            .with_context(|| format!("Failed to read graph from {}", path.display()))
    }

    /// True if `label` names a vertex
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.symbols.index.contains_key(label)
    }

    /// Vertex index for `label`
    #[must_use]
    pub fn index_of(&self, label: &str) -> Option<Vertex> {
        self.symbols.index.get(label).copied()
    }

    /// Label of `vertex`
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of bounds.
    #[must_use]
    pub fn name_of(&self, vertex: Vertex) -> &str {
        &self.symbols.names[vertex]
    }

    /// Underlying index digraph
    #[must_use]
    pub const fn digraph(&self) -> &Digraph {
        &self.digraph
    }
}

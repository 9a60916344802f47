//! Error type shared by graph storage, collections and algorithms

use thiserror::Error;

/// Direction of a strict key change on an indexed priority queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyChange {
    /// `decrease_key` was asked for a key that is not strictly smaller
    Decrease,
    /// `increase_key` was asked for a key that is not strictly larger
    Increase,
}

impl std::fmt::Display for KeyChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decrease => f.write_str("decrease"),
            Self::Increase => f.write_str("increase"),
        }
    }
}

/// Graph and collection errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// Vertex outside `[0, num_vertices)`
    #[error("Vertex {vertex} out of bounds (graph has {num_vertices} vertices)")]
    VertexOutOfBounds {
        /// Offending vertex
        vertex: usize,
        /// Vertex count of the graph
        num_vertices: usize,
    },

    /// Priority queue index outside `[0, capacity)`
    #[error("Index {index} out of bounds (capacity {capacity})")]
    IndexOutOfBounds {
        /// Offending index
        index: usize,
        /// Maximum number of elements
        capacity: usize,
    },

    /// `delete_min` or `min_*` on an empty priority queue
    #[error("Priority queue underflow")]
    Underflow,

    /// Index already present in the priority queue
    #[error("Index {0} is already in the priority queue")]
    DuplicateIndex(usize),

    /// Index not present in the priority queue
    #[error("Index {0} is not in the priority queue")]
    MissingIndex(usize),

    /// `decrease_key`/`increase_key` would not strictly change the key
    #[error("Key change for index {index} would not strictly {direction} the key")]
    NonStrictKeyChange {
        /// Index whose key was to change
        index: usize,
        /// Requested direction
        direction: KeyChange,
    },

    /// Vertex is not an endpoint of the edge it was asked about
    #[error("Inconsistent edge: vertex {vertex} is not incident to edge {edge}")]
    InconsistentEdge {
        /// Vertex used for navigation
        vertex: usize,
        /// Rendered edge
        edge: String,
    },

    /// Negative or NaN flow capacity
    #[error("Invalid edge capacity {0}")]
    InvalidCapacity(f64),

    /// Residual flow update larger than the residual capacity in that direction
    #[error("Cannot push {delta} toward vertex {vertex}: residual capacity is {residual}")]
    FlowOverflow {
        /// Direction of the push
        vertex: usize,
        /// Requested amount
        delta: f64,
        /// Available residual capacity
        residual: f64,
    },

    /// Max-flow requested between a vertex and itself
    #[error("Source and sink are the same vertex ({0})")]
    SameSourceAndSink(usize),

    /// Text input does not follow the expected graph format
    #[error("Malformed graph input: {0}")]
    Malformed(String),

    /// Job precedence constraints that can never all be met
    #[error("Precedence constraints form a cycle through job {0}")]
    CyclicPrecedence(usize),

    /// Label not present in a symbol graph
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),
}

/// Crate result type
pub type Result<T, E = GraphError> = std::result::Result<T, E>;

/// Check `vertex` against a vertex count
pub(crate) fn check_vertex(vertex: usize, num_vertices: usize) -> Result<()> {
    if vertex >= num_vertices {
        return Err(GraphError::VertexOutOfBounds {
            vertex,
            num_vertices,
        });
    }
    Ok(())
}

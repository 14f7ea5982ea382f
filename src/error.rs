//! Errors reported by the graph engine and by the interactive sessions.

use thiserror::Error;

/// Errors raised while building a [`Graph`][crate::graph::Graph] or while
/// reconstructing an Eulerian walk from it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A graph needs at least one vertex.
    #[error("a graph needs at least one vertex")]
    InvalidVertexCount,

    /// The adjacency matrix for this many vertices would be too large.
    #[error("a graph can have at most {max} vertices, not {vertex_count}")]
    TooManyVertices {
        /// The requested vertex count.
        vertex_count: usize,
        /// The largest accepted vertex count.
        max: usize,
    },

    /// An edge endpoint does not name a vertex of the graph.
    #[error("vertex {vertex} is out of range (the graph has {vertex_count} vertices)")]
    VertexOutOfRange {
        /// The offending endpoint.
        vertex: usize,
        /// How many vertices the graph has.
        vertex_count: usize,
    },

    /// The edge is already present. The adjacency matrix cannot hold parallel edges.
    #[error("edge {from} -> {to} already exists")]
    DuplicateEdge {
        /// Source endpoint.
        from: usize,
        /// Target endpoint.
        to: usize,
    },

    /// An undirected graph has more than two odd-degree vertices.
    #[error("graph is not Eulerian: {count} vertices have odd degree")]
    TooManyOddVertices {
        /// Number of odd-degree vertices found.
        count: usize,
    },

    /// A directed graph has more than two vertices whose in- and out-degree differ.
    #[error("graph is not Eulerian: {count} vertices are unbalanced")]
    TooManyUnbalanced {
        /// Number of unbalanced vertices found.
        count: usize,
    },

    /// A directed graph has a vertex whose imbalance is not exactly one.
    #[error(
        "graph is not Eulerian: vertex {vertex} has in-degree {in_degree} and out-degree {out_degree}"
    )]
    Unbalanced {
        /// The offending vertex.
        vertex: usize,
        /// Its in-degree.
        in_degree: usize,
        /// Its out-degree.
        out_degree: usize,
    },

    /// The edges do not all belong to one connected component.
    #[error("graph is not Eulerian: its edges are not connected")]
    Disconnected,
}

impl GraphError {
    /// Whether this error is a "not Eulerian" verdict rather than bad input.
    pub fn is_not_eulerian(&self) -> bool {
        matches!(
            self,
            Self::TooManyOddVertices { .. }
                | Self::TooManyUnbalanced { .. }
                | Self::Unbalanced { .. }
                | Self::Disconnected
        )
    }
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading the console or writing to it failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The graph could not be built.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// The tree construction mode was neither file (1) nor keyboard (2).
    #[error("invalid choice {choice}: only 1 or 2 are allowed")]
    InvalidChoice {
        /// What the user entered.
        choice: i64,
    },

    /// Input ran out while a prompt was waiting for an answer.
    #[error("input ended while waiting for: {prompt}")]
    UnexpectedEof {
        /// The prompt that went unanswered.
        prompt: String,
    },

    /// The logger could not be started.
    #[error("logger setup failed: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}

use thiserror::Error;

use crate::color::VertexId;

/// Errors raised at the boundaries of the crate (reading instances and solutions,
/// installing external colorings, exporting results).
///
/// Search failure is not an error: it is reported as a normal outcome by the solvers.
#[derive(Error, Debug)]
pub enum ColoringError {
    /// unable to read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// the text does not follow the expected format
    #[error("parse error in {format} input: {message}")]
    Parse {
        /// format being read (edge list, dimacs, solution)
        format: &'static str,
        /// what went wrong
        message: String,
    },

    /// an edge refers to a vertex that does not exist
    #[error("edge {edge} refers to vertex {vertex} (graph has {nb_vertices} vertices)")]
    VertexOutOfRange {
        /// position of the edge in the input
        edge: usize,
        /// offending vertex id
        vertex: VertexId,
        /// number of vertices declared
        nb_vertices: usize,
    },

    /// an edge connects a vertex to itself (no proper coloring can exist)
    #[error("edge {edge} is a self-loop on vertex {vertex}")]
    SelfLoop {
        /// position of the edge in the input
        edge: usize,
        /// vertex id
        vertex: VertexId,
    },

    /// a coloring does not have one color per vertex
    #[error("coloring has {found} colors but the graph has {expected} vertices")]
    ColoringLength {
        /// number of vertices of the graph
        expected: usize,
        /// number of colors given
        found: usize,
    },

    /// unable to serialize statistics
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// invalid command line value
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ColoringError {
    /// helper to build a parse error
    pub fn parse(format: &'static str, message: impl Into<String>) -> Self {
        ColoringError::Parse { format, message: message.into() }
    }
}

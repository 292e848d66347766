use thiserror::Error;

use crate::color::VertexId;

/// result type used by the fallible operations of the crate
pub type CspResult<T> = Result<T, CspError>;

/**
errors that prevent the solver from running.

An infeasible instance is not an error: it is reported as a normal outcome by the solver.
*/
#[derive(Error, Debug)]
pub enum CspError {
    /// the instance or the solution file could not be read or written
    #[error("IO error, more details: {0}")]
    Io(#[from] std::io::Error),
    /// the `colors = <int>` line is malformed (or given twice)
    #[error("invalid colors line {line}: \"{content}\"")]
    InvalidColorsLine {
        /// line number (starting at 1)
        line: usize,
        /// content of the line
        content: String,
    },
    /// an edge line is not of the form `<int>,<int>`
    #[error("invalid edge line {line}: \"{content}\"")]
    InvalidEdgeLine {
        /// line number (starting at 1)
        line: usize,
        /// content of the line
        content: String,
    },
    /// the instance does not define the number of colors
    #[error("the instance does not contain a \"colors = <int>\" line")]
    MissingColors,
    /// an edge refers to a vertex outside of the graph
    #[error("vertex {vertex} is out of range (the graph has {nb_vertices} vertices)")]
    VertexOutOfRange {
        /// vertex given
        vertex: VertexId,
        /// number of vertices of the graph
        nb_vertices: usize,
    },
    /// a vertex id is too large to infer the number of vertices (id + 1 overflows)
    #[error("vertex id {vertex} is too large")]
    VertexIdTooLarge {
        /// vertex given
        vertex: VertexId,
    },
    /// a solution file could not be (de)serialized
    #[error("invalid solution file, more details: {0}")]
    Json(#[from] serde_json::Error),
}

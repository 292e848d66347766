//! Graph coloring as a Constraint Satisfaction Problem (arc consistency + LCV + backtracking)

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// vertices, colors, colorings and checker
pub mod color;

/// error types
pub mod error;

/// read CSP instances (colors + edge list)
pub mod instance;

/// constraint graph (adjacency and domains)
pub mod constraint_graph;

/// search procedures for the coloring CSP
pub mod search;

/// solve procedure (pruning + search)
pub mod solver;

/// helper and utility methods for executables
pub mod util;

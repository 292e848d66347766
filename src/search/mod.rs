//! Search procedures for the graph coloring CSP.

/// domain pruning (restricted AC-3)
pub mod arc_consistency;

/// least constraining value ordering
pub mod lcv;

/// chronological backtracking search
pub mod backtracking;

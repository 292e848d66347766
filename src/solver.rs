use log::info;
use serde::Serialize;

use crate::color::{Coloring, VertexId};
use crate::constraint_graph::ConstraintGraph;
use crate::error::CspResult;
use crate::instance::CspInstance;
use crate::search::arc_consistency::{arc_consistency, PropagationStatistics};
use crate::search::backtracking::{backtracking_search, SearchStatistics};

/** outcome of the solver */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SolveStatus {
    /// a coloring was found
    Satisfiable,
    /// the search space was exhausted
    Unsatisfiable,
}

/** result of a solver run */
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// coloring found (None if unsatisfiable)
    pub coloring: Option<Coloring>,
    /// number of distinct edges of the constraint graph
    pub nb_edges: usize,
    /// arc-consistency counters
    pub propagation: PropagationStatistics,
    /// backtracking counters
    pub search: SearchStatistics,
}

impl SolveReport {
    /// status of the run
    pub fn status(&self) -> SolveStatus {
        match self.coloring {
            Some(_) => SolveStatus::Satisfiable,
            None => SolveStatus::Unsatisfiable,
        }
    }
}

/**
solves the coloring CSP and returns the statistics of both phases.
    1. builds the constraint graph with domains [1..colors]
    2. prunes the domains once (arc consistency)
    3. runs the backtracking search on the pruned domains
*/
pub fn solve_with_statistics(
    nb_vertices:usize, edges:&[(VertexId,VertexId)], colors:usize
) -> CspResult<SolveReport> {
    let mut graph = ConstraintGraph::from_edges(nb_vertices, edges)?;
    graph.display_statistics();
    graph.set_domains(colors);
    let propagation = arc_consistency(&mut graph);
    // domains are frozen from now on
    let (coloring, search) = backtracking_search(&graph);
    let res = SolveReport { coloring, nb_edges: graph.nb_edges(), propagation, search };
    info!("status: {:?}", res.status());
    Ok(res)
}

/**
colors a graph with nb_vertices vertices using colors in [1, colors].
returns Ok(None) if no coloring exists, and an error if an edge refers to a vertex out of range.
*/
pub fn solve(
    nb_vertices:usize, edges:&[(VertexId,VertexId)], colors:usize
) -> CspResult<Option<Coloring>> {
    Ok(solve_with_statistics(nb_vertices, edges, colors)?.coloring)
}

/// solves an instance read from a file (the number of vertices is inferred from the edges)
pub fn solve_instance(inst:&CspInstance) -> CspResult<SolveReport> {
    solve_with_statistics(inst.nb_vertices(), inst.edges(), inst.colors())
}

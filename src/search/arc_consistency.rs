use std::collections::VecDeque;

use log::{debug, trace};
use serde::Serialize;

use crate::color::VertexId;
use crate::constraint_graph::ConstraintGraph;

/** arc (x,y): constrain domain(x) using domain(y) */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arc {
    /// vertex whose domain is revised
    pub x: VertexId,
    /// vertex whose domain is used to revise x
    pub y: VertexId,
}

/** counters of a propagation pass */
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PropagationStatistics {
    /// number of arcs popped from the worklist
    pub nb_arcs_processed: usize,
    /// number of values removed from the domains
    pub nb_values_removed: usize,
    /// number of domains that became empty
    pub nb_emptied_domains: usize,
}

/**
revises the domain of x with respect to y.
A color c is removed from domain(x) iff domain(y) is exactly {c}.

returns true if domain(x) changed. If domain(x) becomes empty, returns false
(dependents of x are then not re-enqueued).
*/
pub fn revise(graph:&mut ConstraintGraph, arc:Arc, stats:&mut PropagationStatistics) -> bool {
    let singleton = match graph.domain(arc.y) {
        [c] => *c,
        _ => return false,
    };
    let domain = graph.domain_mut(arc.x);
    let mut removed = false;
    let mut i = 0;
    while i < domain.len() {
        if domain[i] == singleton {
            domain.remove(i);
            removed = true;
            stats.nb_values_removed += 1;
            if domain.is_empty() {
                stats.nb_emptied_domains += 1;
                return false;
            }
        } else {
            i += 1;
        }
    }
    removed
}

/// arcs (x,y) for every vertex x and every neighbor y of x
pub fn initial_arcs(graph:&ConstraintGraph) -> VecDeque<Arc> {
    let mut res = VecDeque::with_capacity(2*graph.nb_edges());
    for x in 0..graph.nb_vertices() {
        for y in graph.neighbors(x) {
            res.push_back(Arc { x, y });
        }
    }
    res
}

/**
restricted AC-3. prunes the domains of the graph once, before the search.
    1. seed the worklist with all arcs
    2. pop an arc (x,y) (FIFO) and revise domain(x)
    3. if domain(x) changed, enqueue (n,x) for each neighbor n of x (n != y)
    4. stop when the worklist is empty

No failure is reported: an emptied domain is discovered by the search.
*/
pub fn arc_consistency(graph:&mut ConstraintGraph) -> PropagationStatistics {
    let mut stats = PropagationStatistics::default();
    let mut worklist = initial_arcs(graph);
    while let Some(arc) = worklist.pop_front() {
        stats.nb_arcs_processed += 1;
        if revise(graph, arc, &mut stats) {
            trace!("domain of {} revised using {}: {:?}", arc.x, arc.y, graph.domain(arc.x));
            let dependents:Vec<VertexId> = graph.neighbors(arc.x)
                .filter(|n| *n != arc.y)
                .collect();
            for n in dependents {
                worklist.push_back(Arc { x: n, y: arc.x });
            }
        }
    }
    debug!(
        "arc consistency: {} arcs processed, {} values removed, {} emptied domains",
        stats.nb_arcs_processed, stats.nb_values_removed, stats.nb_emptied_domains
    );
    stats
}

use crate::color::{Color, VertexId};
use crate::constraint_graph::ConstraintGraph;

/// number of neighbors of v whose domain still contains color c
pub fn nb_constrained_neighbors(graph:&ConstraintGraph, v:VertexId, c:Color) -> usize {
    // not Filter::count: the bit-set iterator reports a wrong upper bound
    graph.neighbors(v).fold(0, |nb, n| {
        if graph.domain(n).contains(&c) { nb + 1 } else { nb }
    })
}

/**
least constraining value ordering.
returns the domain of v sorted by the number of neighbors that still have each color in their
domain (fewest first). The sort is stable: ties keep the domain order.
*/
pub fn lcv_order(graph:&ConstraintGraph, v:VertexId) -> Vec<Color> {
    let mut res = graph.domain(v).to_vec();
    res.sort_by_cached_key(|c| nb_constrained_neighbors(graph, v, *c));
    res
}

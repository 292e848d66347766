use log::{debug, trace};
use serde::Serialize;

use crate::color::{Color, Coloring, VertexId};
use crate::constraint_graph::ConstraintGraph;
use crate::search::lcv::lcv_order;

/** represents a decision (assigning color c to vertex v) */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Decision {
    v: VertexId,
    c: Color,
}

/// either a decision to apply, either a decision to undo
#[derive(Debug)]
enum BacktrackEvent {
    Commit(Decision), // decision to commit
    Restore(Decision) // decision taken
}

/** counters of a backtracking search */
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStatistics {
    /// number of expanded nodes
    pub nb_expanded: usize,
    /// number of decisions undone
    pub nb_backtracks: usize,
}

/**
Implements a chronological backtracking search over the (already pruned) domains.
Vertices are colored in index order (0, 1, ..., n-1), candidate colors in LCV order.

The domains are only read: the graph is borrowed immutably for the whole search.
The coloring is the only mutable state. Each commit is preceded on the stack by its restore
event, so every decision is undone exactly once when backtracking over it.
*/
#[derive(Debug)]
pub struct BacktrackingSearch<'a> {
    /// constraint graph (with pruned domains)
    graph: &'a ConstraintGraph,
    /// current (partial) coloring
    coloring: Coloring,
    /// pending events
    decisions: Vec<BacktrackEvent>,
    /// number of colored vertices (also the next vertex to color)
    nb_colored: usize,
    /// statistics
    stats: SearchStatistics,
}

impl<'a> BacktrackingSearch<'a> {
    /** creates a new search where no vertex is colored */
    pub fn new(graph:&'a ConstraintGraph) -> Self {
        let n = graph.nb_vertices();
        Self {
            graph,
            coloring: Coloring::new(n, graph.nb_colors()),
            decisions: Vec::with_capacity(n),
            nb_colored: 0,
            stats: SearchStatistics::default(),
        }
    }

    /// current coloring
    pub fn coloring(&self) -> &Coloring { &self.coloring }

    /// search statistics
    pub fn statistics(&self) -> SearchStatistics { self.stats }

    /// true iff no colored neighbor of v has color c
    pub fn is_safe(&self, v:VertexId, c:Color) -> bool {
        self.graph.neighbors(v).all(|n| self.coloring.get(n) != c)
    }

    /// applies a decision to the search state
    fn commit(&mut self, decision:Decision) {
        trace!("commit: {:?}", decision);
        debug_assert_eq!(decision.v, self.nb_colored);
        debug_assert!(self.is_safe(decision.v, decision.c));
        self.coloring.assign(decision.v, decision.c);
        self.nb_colored += 1;
    }

    /// restores the search state from a decision (does not pop self.decisions)
    fn restore(&mut self, decision:Decision) {
        trace!("restore: {:?}", decision);
        debug_assert_eq!(decision.v + 1, self.nb_colored);
        self.coloring.unassign(decision.v);
        self.nb_colored -= 1;
        self.stats.nb_backtracks += 1;
    }

    /// pushes the safe colors of the next vertex (the best one ends on top of the stack).
    /// siblings are undone before the next one is committed, so a color safe now is still safe
    /// when its commit event is popped.
    fn push_next_decisions(&mut self) {
        let v = self.nb_colored;
        let candidates:Vec<Color> = lcv_order(self.graph, v).into_iter()
            .filter(|c| self.is_safe(v, *c))
            .collect();
        for c in candidates.iter().rev() {
            let decision = Decision { v, c:*c };
            self.decisions.push(BacktrackEvent::Restore(decision)); // prepare to backtrack
            self.decisions.push(BacktrackEvent::Commit(decision)); // decision to apply
        }
        self.stats.nb_expanded += 1;
    }

    /// backtracking search
    ///
    /// Stores the decisions to be taken in a stack.
    /// pops each decision, applies it (or undoes it)
    /// returns true as soon as all vertices are colored, false if the search space is exhausted
    pub fn dfs_search(&mut self) -> bool {
        let n = self.graph.nb_vertices();
        let mut found = self.nb_colored == n;
        if !found {
            self.push_next_decisions();
        }
        while !found {
            match self.decisions.pop() {
                None => break,
                Some(BacktrackEvent::Restore(decision)) => { // restore the state
                    self.restore(decision);
                },
                Some(BacktrackEvent::Commit(decision)) => { // apply the decision and generate children
                    self.commit(decision);
                    if self.nb_colored == n {
                        found = true;
                    } else {
                        self.push_next_decisions();
                    }
                }
            }
        }
        self.decisions.clear(); // the solution (if any) is kept
        debug!(
            "backtracking: {} nodes expanded, {} backtracks, solution found: {}",
            self.stats.nb_expanded, self.stats.nb_backtracks, found
        );
        found
    }
}

/**
colors the graph by backtracking (the domains must be initialized).
returns the coloring if one is found, and the search statistics.
*/
pub fn backtracking_search(graph:&ConstraintGraph) -> (Option<Coloring>, SearchStatistics) {
    let mut search = BacktrackingSearch::new(graph);
    let found = search.dfs_search();
    let stats = search.statistics();
    if found {
        (Some(search.coloring.clone()), stats)
    } else {
        (None, stats)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::{checker, CheckerResult};

    fn prepared_graph(n:usize, edges:&[(VertexId,VertexId)], colors:usize) -> ConstraintGraph {
        let mut g = ConstraintGraph::from_edges(n, edges).unwrap();
        g.set_domains(colors);
        g
    }

    #[test]
    fn test_triangle_two_colors() {
        let g = prepared_graph(3, &[(0,1),(0,2),(1,2)], 2);
        let (sol, stats) = backtracking_search(&g);
        assert!(sol.is_none());
        assert!(stats.nb_backtracks > 0);
    }

    #[test]
    fn test_triangle_three_colors() {
        let edges = [(0,1),(0,2),(1,2)];
        let g = prepared_graph(3, &edges, 3);
        let sol = backtracking_search(&g).0.unwrap();
        assert_eq!(sol.colors(), &[1,2,3]);
        assert_eq!(checker(3, &edges, &sol), CheckerResult::Ok(3));
    }

    #[test]
    fn test_path() {
        let edges = [(0,1),(1,2)];
        let g = prepared_graph(3, &edges, 2);
        let sol = backtracking_search(&g).0.unwrap();
        assert_eq!(sol.colors(), &[1,2,1]);
    }

    #[test]
    fn test_isolated_vertex() {
        let g = prepared_graph(1, &[], 1);
        let sol = backtracking_search(&g).0.unwrap();
        assert_eq!(sol.colors(), &[1]);
    }

    #[test]
    fn test_no_vertex() {
        let g = prepared_graph(0, &[], 0);
        let (sol, stats) = backtracking_search(&g);
        assert_eq!(sol.unwrap().nb_vertices(), 0);
        assert_eq!(stats.nb_expanded, 0);
    }

    #[test]
    fn test_empty_domain_fails() {
        let mut g = prepared_graph(2, &[], 2);
        g.domain_mut(1).clear();
        assert!(backtracking_search(&g).0.is_none());
    }

    #[test]
    fn test_self_loop_is_not_checked() {
        // a self-loop only fails through an empty domain
        let g = prepared_graph(1, &[(0,0)], 2);
        let sol = backtracking_search(&g).0.unwrap();
        assert_eq!(sol.colors(), &[1]);
    }

    #[test]
    fn test_diamond_with_chord() {
        // 0-1, 0-2, 1-3, 2-3, 1-2: vertex 3 must match 0
        let edges = [(0,1),(0,2),(1,3),(2,3),(1,2)];
        let g = prepared_graph(4, &edges, 3);
        let sol = backtracking_search(&g).0.unwrap();
        assert_eq!(checker(3, &edges, &sol), CheckerResult::Ok(3));
        assert_eq!(sol.get(0), sol.get(3));
    }

    #[test]
    fn test_complete_graphs() {
        for k in 1..6 {
            let mut edges = Vec::new();
            for i in 0..k {
                for j in 0..i { edges.push((j,i)); }
            }
            for m in 1..7 {
                let g = prepared_graph(k, &edges, m);
                let (sol, _) = backtracking_search(&g);
                assert_eq!(sol.is_some(), m >= k, "k:{} m:{}", k, m);
                if let Some(coloring) = sol {
                    assert_eq!(checker(m, &edges, &coloring), CheckerResult::Ok(k));
                }
            }
        }
    }

    #[test]
    fn test_state_restored_after_failure() {
        let g = prepared_graph(3, &[(0,1),(0,2),(1,2)], 2);
        let mut search = BacktrackingSearch::new(&g);
        assert!(!search.dfs_search());
        assert!((0..3).all(|v| !search.coloring().is_assigned(v)));
    }
}

use bit_set::BitSet;
use log::info;

use crate::color::{Color, VertexId};
use crate::error::{CspError, CspResult};

/** models the constraint graph of a coloring CSP.
Each vertex is a variable, each edge a "different color" constraint.
*/
#[derive(Debug, Clone)]
pub struct ConstraintGraph {
    /// nb vertices
    n: usize,
    /// nb edges (without duplicates)
    m: usize,
    /// adj[i]: set of vertices adjacent to i (symmetric)
    adj: Vec<BitSet>,
    /// domains[i]: colors still possible for vertex i
    domains: Vec<Vec<Color>>,
    /// number of colors given by the last call to set_domains
    nb_colors: usize,
}

impl ConstraintGraph {

    /** creates a graph with n isolated vertices and empty domains */
    pub fn new(n:usize) -> Self {
        Self {
            n,
            m: 0,
            adj: vec![BitSet::default() ; n],
            domains: vec![Vec::new() ; n],
            nb_colors: 0,
        }
    }

    /** creates a graph with n vertices from an edge list */
    pub fn from_edges(n:usize, edges:&[(VertexId,VertexId)]) -> CspResult<Self> {
        let mut res = Self::new(n);
        for (v,w) in edges {
            res.add_edge(*v, *w)?;
        }
        Ok(res)
    }

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.n }

    /// number of (distinct) edges
    pub fn nb_edges(&self) -> usize { self.m }

    /// number of colors of the initial domains
    pub fn nb_colors(&self) -> usize { self.nb_colors }

    /// vertices adjacent to v (ascending order)
    pub fn neighbors(&self, v:VertexId) -> impl Iterator<Item=VertexId> + '_ {
        self.adj[v].iter()
    }

    /// degree of v
    pub fn degree(&self, v:VertexId) -> usize { self.adj[v].len() }

    /// true iff v and w are adjacent
    pub fn are_adjacent(&self, v:VertexId, w:VertexId) -> bool { self.adj[v].contains(w) }

    /// current domain of v
    pub fn domain(&self, v:VertexId) -> &[Color] { &self.domains[v] }

    /// mutable domain of v (reserved to the pruning phase)
    pub(crate) fn domain_mut(&mut self, v:VertexId) -> &mut Vec<Color> { &mut self.domains[v] }

    /**
    adds the edge (v,w) if not already present. The insertion is symmetric, and a duplicate
    edge leaves the graph unchanged. A self-loop (v,v) is inserted as any other edge.
    returns true iff the edge was inserted.
    */
    pub fn add_edge(&mut self, v:VertexId, w:VertexId) -> CspResult<bool> {
        for u in [v, w].iter() {
            if *u >= self.n {
                return Err(CspError::VertexOutOfRange { vertex: *u, nb_vertices: self.n });
            }
        }
        if self.adj[v].contains(w) { return Ok(false); }
        self.adj[v].insert(w);
        self.adj[w].insert(v);
        self.m += 1;
        Ok(true)
    }

    /** resets the domain of every vertex to [1, 2, ..., colors] (discards any pruning) */
    pub fn set_domains(&mut self, colors:usize) {
        self.nb_colors = colors;
        for d in self.domains.iter_mut() {
            *d = (1..=colors).collect();
        }
    }

    /// displays some statistics of the graph
    pub fn display_statistics(&self) {
        info!("\t{} \t vertices", self.nb_vertices());
        info!("\t{} \t edges", self.nb_edges());
        let degrees:Vec<usize> = (0..self.nb_vertices()).map(|i| self.degree(i)).collect();
        if let (Some(dmin), Some(dmax)) = (degrees.iter().min(), degrees.iter().max()) {
            info!("\t{} \t min degree", dmin);
            info!("\t{} \t max degree", dmax);
        }
    }
}

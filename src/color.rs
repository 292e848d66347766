use std::fs;

use serde::{Serialize, Deserialize};

use crate::error::CspResult;

/** Vertex Id */
pub type VertexId = usize;

/** Color (colors are numbered from 1 to the number of colors) */
pub type Color = usize;

/** value of an unassigned vertex in a coloring (never a valid color) */
pub const UNASSIGNED:Color = 0;

/** Coloring of a graph (possibly partial).
colors[v]: color of vertex v (UNASSIGNED if not colored yet)
*/
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coloring {
    /// number of colors available
    nb_colors: usize,
    /// colors[v]: color assigned to v
    colors: Vec<Color>,
}

impl Coloring {
    /** creates a coloring where no vertex is assigned */
    pub fn new(nb_vertices:usize, nb_colors:usize) -> Self {
        Self { nb_colors, colors: vec![UNASSIGNED ; nb_vertices] }
    }

    /** creates a coloring from the color of each vertex */
    pub fn from_colors(nb_colors:usize, colors:Vec<Color>) -> Self {
        Self { nb_colors, colors }
    }

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.colors.len() }

    /// number of colors available
    pub fn nb_colors(&self) -> usize { self.nb_colors }

    /// color of vertex v (UNASSIGNED if not colored)
    pub fn get(&self, v:VertexId) -> Color { self.colors[v] }

    /// true iff v is colored
    pub fn is_assigned(&self, v:VertexId) -> bool { self.colors[v] != UNASSIGNED }

    /// colors of every vertex
    pub fn colors(&self) -> &[Color] { &self.colors }

    /// assigns color c to vertex v
    pub fn assign(&mut self, v:VertexId, c:Color) {
        debug_assert_ne!(c, UNASSIGNED);
        debug_assert!(!self.is_assigned(v));
        self.colors[v] = c;
    }

    /// removes the color of vertex v
    pub fn unassign(&mut self, v:VertexId) {
        debug_assert!(self.is_assigned(v));
        self.colors[v] = UNASSIGNED;
    }

    /** (vertex,color) pairs restricted to some vertices */
    pub fn restricted_to(&self, vertices:&[VertexId]) -> Vec<(VertexId,Color)> {
        vertices.iter().map(|v| (*v, self.colors[*v])).collect()
    }

    /** writes a string encoding the coloring as {v: c, ...} for the given vertices */
    pub fn to_string_restricted(&self, vertices:&[VertexId]) -> String {
        let entries:Vec<String> = self.restricted_to(vertices).iter()
            .map(|(v,c)| format!("{}: {}", v, c))
            .collect();
        format!("{{{}}}", entries.join(", "))
    }

    /** writes the coloring into a json file */
    pub fn write_to_file(&self, filename:&str) -> CspResult<()> {
        fs::write(filename, serde_json::to_string(self)?)?;
        Ok(())
    }

    /** reads a coloring from a json file */
    pub fn from_file(filename:&str) -> CspResult<Self> {
        let s = fs::read_to_string(filename)?;
        Ok(serde_json::from_str(&s)?)
    }
}


/** result of the checker */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckerResult {
    /// the coloring is valid, returns the number of distinct colors used
    Ok(usize),
    /// some vertex incident to an edge is not colored
    VertexNotColored(VertexId),
    /// some vertex is colored outside [1, nb_colors]
    ColorOutOfRange(VertexId, Color),
    /// both endpoints of an edge share the same color
    ConflictingEdge(VertexId, VertexId),
}

/**
checks a coloring against an edge list (independently of the solver data-structures).
 - every vertex of the coloring is colored with a color in [1,nb_colors]
 - every endpoint of an edge is colored
 - the endpoints of every edge have a different color
*/
pub fn checker(nb_colors:usize, edges:&[(VertexId,VertexId)], coloring:&Coloring) -> CheckerResult {
    for (v,c) in coloring.colors().iter().enumerate() {
        if *c == UNASSIGNED { return CheckerResult::VertexNotColored(v); }
        if *c > nb_colors { return CheckerResult::ColorOutOfRange(v, *c); }
    }
    for (a,b) in edges {
        for u in [*a, *b].iter() {
            if *u >= coloring.nb_vertices() { return CheckerResult::VertexNotColored(*u); }
        }
        if coloring.get(*a) == coloring.get(*b) {
            return CheckerResult::ConflictingEdge(*a, *b);
        }
    }
    // distinct colors used (independent of the size of the palette)
    let mut used_colors = coloring.colors().to_vec();
    used_colors.sort_unstable();
    used_colors.dedup();
    CheckerResult::Ok(used_colors.len())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checker_valid() {
        let coloring = Coloring::from_colors(2, vec![1,2,1]);
        assert_eq!(checker(2, &[(0,1),(1,2)], &coloring), CheckerResult::Ok(2));
    }

    #[test]
    fn test_checker_conflict() {
        let coloring = Coloring::from_colors(3, vec![1,2,1]);
        assert_eq!(
            checker(3, &[(0,1),(0,2)], &coloring),
            CheckerResult::ConflictingEdge(0,2)
        );
    }

    #[test]
    fn test_checker_uncolored() {
        let coloring = Coloring::new(2, 2);
        assert_eq!(checker(2, &[(0,1)], &coloring), CheckerResult::VertexNotColored(0));
        let short = Coloring::from_colors(2, vec![1,2]);
        assert_eq!(checker(2, &[(0,5)], &short), CheckerResult::VertexNotColored(5));
    }

    #[test]
    fn test_checker_out_of_range() {
        let coloring = Coloring::from_colors(2, vec![1,3]);
        assert_eq!(checker(2, &[(0,1)], &coloring), CheckerResult::ColorOutOfRange(1,3));
    }

    #[test]
    fn test_checker_huge_palette() {
        let coloring = Coloring::from_colors(usize::MAX, vec![1,usize::MAX,1]);
        assert_eq!(checker(usize::MAX, &[(0,1),(1,2)], &coloring), CheckerResult::Ok(2));
    }

    #[test]
    fn test_assign_unassign() {
        let mut coloring = Coloring::new(3, 2);
        coloring.assign(1, 2);
        assert!(coloring.is_assigned(1));
        assert_eq!(coloring.get(1), 2);
        coloring.unassign(1);
        assert_eq!(coloring.get(1), UNASSIGNED);
    }

    #[test]
    fn test_restricted_string() {
        let coloring = Coloring::from_colors(2, vec![1,2,1,2]);
        assert_eq!(coloring.to_string_restricted(&[0,2,3]), "{0: 1, 2: 1, 3: 2}");
    }
}

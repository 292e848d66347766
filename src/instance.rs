/*
Implements:
 - procedures to read a coloring CSP instance. Format:
    # comment
    colors = 3
    0,1
    1,2
 - vertex count inference (largest vertex id + 1)
*/
use std::fs;

use log::info;
use nom::IResult;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, digit1, space0};
use nom::combinator::{all_consuming, map_res};
use nom::sequence::{delimited, preceded, separated_pair, tuple};

use crate::color::VertexId;
use crate::error::{CspError, CspResult};

/** models a coloring CSP instance as given in the input file */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CspInstance {
    /// number of colors available
    colors: usize,
    /// edges of the graph (in file order, duplicates kept)
    edges: Vec<(VertexId,VertexId)>,
    /// number of vertices (largest vertex id + 1, 0 if no edges)
    nb_vertices: usize,
}

impl CspInstance {
    /** creates an instance from a number of colors and an edge list.
    fails if the largest vertex id cannot be turned into a number of vertices */
    pub fn new(colors:usize, edges:Vec<(VertexId,VertexId)>) -> CspResult<Self> {
        let mut nb_vertices = 0;
        for (a,b) in &edges {
            let vertex = std::cmp::max(*a, *b);
            let n = vertex.checked_add(1).ok_or(CspError::VertexIdTooLarge { vertex })?;
            nb_vertices = std::cmp::max(nb_vertices, n);
        }
        Ok(Self { colors, edges, nb_vertices })
    }

    /** reads an instance from a file */
    pub fn from_file(filename:&str) -> CspResult<Self> {
        let s = fs::read_to_string(filename)?;
        parse_instance(&s)
    }

    /// number of colors
    pub fn colors(&self) -> usize { self.colors }

    /// edge list
    pub fn edges(&self) -> &[(VertexId,VertexId)] { &self.edges }

    /// number of vertices (largest vertex id + 1, 0 if no edges)
    pub fn nb_vertices(&self) -> usize { self.nb_vertices }

    /// vertices appearing in at least one edge (ascending order)
    pub fn vertices(&self) -> Vec<VertexId> {
        let mut res:Vec<VertexId> = self.edges.iter()
            .flat_map(|(a,b)| vec![*a, *b])
            .collect();
        res.sort_unstable();
        res.dedup();
        res
    }

    /** displays some statistics of the instance */
    pub fn display_statistics(&self) {
        info!("\t{:>25}{:>10}", "nb colors:", self.colors());
        info!("\t{:>25}{:>10}", "nb vertices:", self.nb_vertices());
        info!("\t{:>25}{:>10}", "nb edge lines:", self.edges.len());
    }
}


/// reads an instance from its textual representation
pub fn parse_instance(s:&str) -> CspResult<CspInstance> {
    let mut colors:Option<usize> = None;
    let mut edges = Vec::new();
    for (i, raw_line) in s.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        if line.to_lowercase().starts_with("colors") {
            match (colors, read_colors(line)) {
                (None, Ok((_, nb_colors))) => colors = Some(nb_colors),
                _ => return Err(CspError::InvalidColorsLine {
                    line: i+1, content: line.to_string()
                }),
            }
        } else {
            match read_edge(line) {
                Ok((_, edge)) => edges.push(edge),
                Err(_) => return Err(CspError::InvalidEdgeLine {
                    line: i+1, content: line.to_string()
                }),
            }
        }
    }
    match colors {
        None => Err(CspError::MissingColors),
        Some(c) => CspInstance::new(c, edges),
    }
}

/// reads a non-negative integer
fn read_uint(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads a line "colors = <int>"
pub fn read_colors(s:&str) -> IResult<&str, usize> {
    all_consuming(preceded(
        tuple((tag_no_case("colors"), space0, char('='), space0)),
        read_uint
    ))(s)
}

/// reads an edge line "<int>,<int>"
pub fn read_edge(s:&str) -> IResult<&str, (VertexId,VertexId)> {
    all_consuming(separated_pair(
        read_uint,
        delimited(space0, char(','), space0),
        read_uint
    ))(s)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_colors() {
        assert_eq!(read_colors("colors = 3").unwrap().1, 3);
        assert_eq!(read_colors("colors=12").unwrap().1, 12);
        assert_eq!(read_colors("Colors =  4").unwrap().1, 4);
        assert!(read_colors("colors = x").is_err());
        assert!(read_colors("colors = 3 4").is_err());
    }

    #[test]
    fn test_read_edge() {
        assert_eq!(read_edge("1,2").unwrap().1, (1,2));
        assert_eq!(read_edge("10 , 7").unwrap().1, (10,7));
        assert!(read_edge("1;2").is_err());
        assert!(read_edge("1,2,3").is_err());
        assert!(read_edge("-1,2").is_err());
    }

    #[test]
    fn test_parse_instance() {
        let s = "# a comment\n\ncolors = 3\n0,1\n# another one\n1,4\n";
        let inst = parse_instance(s).unwrap();
        assert_eq!(inst.colors(), 3);
        assert_eq!(inst.edges(), &[(0,1),(1,4)]);
        assert_eq!(inst.nb_vertices(), 5);
        assert_eq!(inst.vertices(), vec![0,1,4]);
    }

    #[test]
    fn test_parse_crlf() {
        let inst = parse_instance("colors = 2\r\n0,1\r\n").unwrap();
        assert_eq!(inst.colors(), 2);
        assert_eq!(inst.edges(), &[(0,1)]);
    }

    #[test]
    fn test_missing_colors() {
        match parse_instance("0,1\n1,2\n") {
            Err(CspError::MissingColors) => {},
            res => panic!("unexpected result: {:?}", res),
        }
    }

    #[test]
    fn test_invalid_lines() {
        match parse_instance("colors = 2\n0,1\n1 2\n") {
            Err(CspError::InvalidEdgeLine { line, content }) => {
                assert_eq!(line, 3);
                assert_eq!(content, "1 2");
            },
            res => panic!("unexpected result: {:?}", res),
        }
        match parse_instance("colors = two\n0,1\n") {
            Err(CspError::InvalidColorsLine { line, .. }) => assert_eq!(line, 1),
            res => panic!("unexpected result: {:?}", res),
        }
        match parse_instance("colors = 2\ncolors = 3\n") {
            Err(CspError::InvalidColorsLine { line, .. }) => assert_eq!(line, 2),
            res => panic!("unexpected result: {:?}", res),
        }
    }

    #[test]
    fn test_vertex_id_too_large() {
        match parse_instance("colors = 2\n0,18446744073709551615\n") {
            Err(CspError::VertexIdTooLarge { vertex }) => assert_eq!(vertex, usize::MAX),
            res => panic!("unexpected result: {:?}", res),
        }
        // largest usable id
        let inst = parse_instance("colors = 2\n0,18446744073709551614\n").unwrap();
        assert_eq!(inst.nb_vertices(), usize::MAX);
    }

    #[test]
    fn test_huge_colors_value() {
        let inst = parse_instance("colors = 18446744073709551615\n0,1\n").unwrap();
        assert_eq!(inst.colors(), usize::MAX);
    }

    #[test]
    fn test_no_edges() {
        let inst = parse_instance("colors = 1\n").unwrap();
        assert_eq!(inst.nb_vertices(), 0);
        assert!(inst.vertices().is_empty());
    }

    #[test]
    fn test_read_instance_file() {
        let inst = CspInstance::from_file("insts/triangle.txt").unwrap();
        assert_eq!(inst.colors(), 2);
        assert_eq!(inst.nb_vertices(), 3);
        assert_eq!(inst.edges().len(), 3);
    }
}

// Copyright The Arboretum Developers
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the undirected graph container shared by the example
//! problems, along with a reader for DIMACS (.col) instance files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::ParseIntError;
use std::ops::Index;
use std::path::Path;

use bit_set::BitSet;
use regex::Regex;

/// This enumeration groups the kinds of errors that might occur when building
/// a graph or reading one from a DIMACS instance file. There can be io errors
/// (file unavailable ?), parse int errors (the parser expected an integer
/// number but got ... something else), or structural errors in the edge data
/// itself.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The parser expected to read an integer but got some garbage
    #[error("parse int {0}")]
    ParseInt(#[from] ParseIntError),
    /// An edge connects a vertex to itself
    #[error("self loop on vertex {0}")]
    SelfLoop(usize),
    /// The same edge was declared twice
    #[error("duplicate edge ({0}, {1})")]
    DuplicateEdge(usize, usize),
    /// An edge endpoint does not fit the declared vertex count
    #[error("vertex {0} out of range for a graph on {1} vertices")]
    VertexOutOfRange(usize, usize),
    /// A DIMACS edge endpoint falls outside the 1-based declared range
    #[error("dimacs vertex {found} out of range 1..={max}")]
    DimacsVertex { found: usize, max: usize },
    /// The instance declared more than one problem line
    #[error("more than one problem line")]
    DuplicateHeader,
    /// An edge line was met before the problem line (or there was none)
    #[error("missing problem line")]
    MissingHeader,
    /// The number of edge lines does not match the problem line
    #[error("declared {declared} edges but found {found}")]
    EdgeCountMismatch { declared: usize, found: usize },
}

/// An undirected graph on `n` vertices numbered `0..n`, stored as one sorted
/// adjacency list per vertex. Adjacency queries are answered by binary
/// search, degree queries by the row length, and indexing a vertex yields its
/// neighbour slice.
///
/// # Example
/// ```
/// # use arboretum::UndirectedGraph;
/// let graph = UndirectedGraph::new(3, &[(0, 1), (1, 2)]).unwrap();
/// assert!(graph.adjacent(0, 1));
/// assert!(!graph.adjacent(0, 2));
/// assert_eq!(2, graph.degree(1));
/// assert_eq!(&[0, 2], &graph[1]);
/// ```
#[derive(Debug, Clone)]
pub struct UndirectedGraph {
    adjacency: Vec<Vec<usize>>,
    nb_edges: usize,
}

impl UndirectedGraph {
    /// Builds a graph from a vertex count and an edge list. Self loops and
    /// repeated pairs (in either orientation) are rejected.
    pub fn new(n: usize, edges: &[(usize, usize)]) -> Result<UndirectedGraph, GraphError> {
        let mut seen = vec![BitSet::with_capacity(n); n];
        let mut adjacency = vec![vec![]; n];
        for &(i, j) in edges {
            if i >= n {
                return Err(GraphError::VertexOutOfRange(i, n));
            }
            if j >= n {
                return Err(GraphError::VertexOutOfRange(j, n));
            }
            if i == j {
                return Err(GraphError::SelfLoop(i));
            }
            if seen[i].contains(j) {
                return Err(GraphError::DuplicateEdge(i, j));
            }
            seen[i].insert(j);
            seen[j].insert(i);
            adjacency[i].push(j);
            adjacency[j].push(i);
        }
        for row in adjacency.iter_mut() {
            row.sort_unstable();
        }
        Ok(UndirectedGraph {
            adjacency,
            nb_edges: edges.len(),
        })
    }

    /// Returns the number of vertices of this graph.
    pub fn vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges of this graph.
    pub fn edges(&self) -> usize {
        self.nb_edges
    }

    /// Returns true iff an edge exists between `i` and `j`.
    pub fn adjacent(&self, i: usize, j: usize) -> bool {
        self.adjacency[i].binary_search(&j).is_ok()
    }

    /// Returns the number of neighbours of vertex `i`.
    pub fn degree(&self, i: usize) -> usize {
        self.adjacency[i].len()
    }

    /// Reads a graph from a DIMACS instance file. The expected format is
    /// line oriented:
    ///
    /// ```plain
    /// p edges N M
    /// e i j
    /// ...
    /// ```
    ///
    /// where the problem line occurs exactly once, the `M` edge lines use
    /// 1-based vertex numbers, and lines starting with anything else are
    /// ignored.
    pub fn read_dimacs<P: AsRef<Path>>(fname: P) -> Result<UndirectedGraph, GraphError> {
        let f = File::open(fname)?;
        Self::parse_dimacs(BufReader::new(f))
    }

    /// Parses DIMACS content out of any buffered reader; see `read_dimacs`.
    pub fn parse_dimacs<R: BufRead>(input: R) -> Result<UndirectedGraph, GraphError> {
        let pb_decl = Regex::new(r"^p\s+edges?\s+(?P<vars>\d+)\s+(?P<edges>\d+)").unwrap();
        let edge_decl = Regex::new(r"^e\s+(?P<src>\d+)\s+(?P<dst>\d+)").unwrap();

        let mut header: Option<(usize, usize)> = None;
        let mut edges = vec![];
        for line in input.lines() {
            let line = line?;
            let line = line.trim();

            if let Some(caps) = pb_decl.captures(line) {
                if header.is_some() {
                    return Err(GraphError::DuplicateHeader);
                }
                let n = caps["vars"].parse::<usize>()?;
                let m = caps["edges"].parse::<usize>()?;
                header = Some((n, m));
                continue;
            }

            if let Some(caps) = edge_decl.captures(line) {
                let (n, _) = header.ok_or(GraphError::MissingHeader)?;
                let src = caps["src"].parse::<usize>()?;
                let dst = caps["dst"].parse::<usize>()?;
                if src == 0 || src > n {
                    return Err(GraphError::DimacsVertex { found: src, max: n });
                }
                if dst == 0 || dst > n {
                    return Err(GraphError::DimacsVertex { found: dst, max: n });
                }
                edges.push((src - 1, dst - 1));
                continue;
            }

            // any other line (comments included) is ignored
        }

        let (n, declared) = header.ok_or(GraphError::MissingHeader)?;
        if edges.len() != declared {
            return Err(GraphError::EdgeCountMismatch {
                declared,
                found: edges.len(),
            });
        }
        UndirectedGraph::new(n, &edges)
    }
}

/// Indexing a graph by a vertex yields the sorted slice of its neighbours.
impl Index<usize> for UndirectedGraph {
    type Output = [usize];

    fn index(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod tests {
    use crate::graph::{GraphError, UndirectedGraph};

    #[test]
    fn adjacency_is_symmetric() {
        let graph = UndirectedGraph::new(4, &[(0, 1), (2, 1), (3, 0)]).unwrap();
        for (i, j) in [(0, 1), (1, 2), (0, 3)] {
            assert!(graph.adjacent(i, j));
            assert!(graph.adjacent(j, i));
        }
        assert!(!graph.adjacent(0, 2));
        assert!(!graph.adjacent(1, 3));
    }

    #[test]
    fn neighbour_lists_are_sorted() {
        let graph = UndirectedGraph::new(5, &[(3, 0), (3, 4), (1, 3), (3, 2)]).unwrap();
        assert_eq!(&[0, 1, 2, 4], &graph[3]);
        assert_eq!(4, graph.degree(3));
        assert_eq!(1, graph.degree(0));
    }

    #[test]
    fn an_empty_graph_has_no_vertices_and_no_edges() {
        let graph = UndirectedGraph::new(0, &[]).unwrap();
        assert_eq!(0, graph.vertices());
        assert_eq!(0, graph.edges());
    }

    #[test]
    fn self_loops_are_rejected() {
        assert!(matches!(
            UndirectedGraph::new(3, &[(1, 1)]),
            Err(GraphError::SelfLoop(1))
        ));
    }

    #[test]
    fn duplicate_edges_are_rejected_in_both_orientations() {
        assert!(matches!(
            UndirectedGraph::new(3, &[(0, 1), (0, 1)]),
            Err(GraphError::DuplicateEdge(0, 1))
        ));
        assert!(matches!(
            UndirectedGraph::new(3, &[(0, 1), (1, 0)]),
            Err(GraphError::DuplicateEdge(1, 0))
        ));
    }

    #[test]
    fn out_of_range_endpoints_are_rejected() {
        assert!(matches!(
            UndirectedGraph::new(3, &[(0, 3)]),
            Err(GraphError::VertexOutOfRange(3, 3))
        ));
    }

    #[test]
    fn a_wellformed_dimacs_instance_parses() {
        let input = "c a triangle plus a pendant vertex\n\
                     p edges 4 4\n\
                     e 1 2\n\
                     e 2 3\n\
                     e 3 1\n\
                     e 3 4\n";
        let graph = UndirectedGraph::parse_dimacs(input.as_bytes()).unwrap();
        assert_eq!(4, graph.vertices());
        assert_eq!(4, graph.edges());
        assert!(graph.adjacent(0, 1));
        assert!(graph.adjacent(2, 3));
        assert!(!graph.adjacent(0, 3));
    }

    #[test]
    fn the_singular_edge_keyword_is_accepted_too() {
        let input = "p edge 2 1\ne 1 2\n";
        let graph = UndirectedGraph::parse_dimacs(input.as_bytes()).unwrap();
        assert!(graph.adjacent(0, 1));
    }

    #[test]
    fn unknown_lines_are_ignored() {
        let input = "c comment\nx whatever\np edges 2 1\nn 1 0\ne 1 2\n";
        let graph = UndirectedGraph::parse_dimacs(input.as_bytes()).unwrap();
        assert_eq!(2, graph.vertices());
    }

    #[test]
    fn a_missing_header_is_an_error() {
        assert!(matches!(
            UndirectedGraph::parse_dimacs("e 1 2\n".as_bytes()),
            Err(GraphError::MissingHeader)
        ));
        assert!(matches!(
            UndirectedGraph::parse_dimacs("c nothing here\n".as_bytes()),
            Err(GraphError::MissingHeader)
        ));
    }

    #[test]
    fn a_repeated_header_is_an_error() {
        let input = "p edges 2 1\np edges 2 1\ne 1 2\n";
        assert!(matches!(
            UndirectedGraph::parse_dimacs(input.as_bytes()),
            Err(GraphError::DuplicateHeader)
        ));
    }

    #[test]
    fn an_edge_count_mismatch_is_an_error() {
        let input = "p edges 3 2\ne 1 2\n";
        assert!(matches!(
            UndirectedGraph::parse_dimacs(input.as_bytes()),
            Err(GraphError::EdgeCountMismatch {
                declared: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn dimacs_vertices_are_one_based() {
        let input = "p edges 2 1\ne 0 1\n";
        assert!(matches!(
            UndirectedGraph::parse_dimacs(input.as_bytes()),
            Err(GraphError::DimacsVertex { found: 0, max: 2 })
        ));
        let input = "p edges 2 1\ne 1 3\n";
        assert!(matches!(
            UndirectedGraph::parse_dimacs(input.as_bytes()),
            Err(GraphError::DimacsVertex { found: 3, max: 2 })
        ));
    }
}

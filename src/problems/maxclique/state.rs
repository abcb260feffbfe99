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

//! The reversible search state of the maximum clique problem.

use std::fmt;

use crate::{Solution, State, UndirectedGraph};

/// A maximum clique solution: the set of pairwise adjacent vertices found at
/// some leaf of the search. Its objective value is its cardinality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaximumCliqueSol {
    vertices: Vec<usize>,
}

impl MaximumCliqueSol {
    /// Returns the vertices of the clique.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }
    /// Returns true iff the given vertex belongs to the clique.
    pub fn contains(&self, vertex: usize) -> bool {
        self.vertices.contains(&vertex)
    }
}

impl Solution for MaximumCliqueSol {
    type Obj = usize;
    fn objective_value(&self) -> usize {
        self.vertices.len()
    }
}

impl fmt::Display for MaximumCliqueSol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for vertex in self.vertices.iter() {
            write!(f, "{} ", vertex)?;
        }
        write!(f, "]")
    }
}

/// Stores how far the two cursors were moved by an include branch so that
/// the branch can be backtracked with pure cursor arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncludeResult {
    clique_move: usize,
    neighbours_move: usize,
}

/// Stores how far the clique cursor was moved (by implied inclusions) during
/// an exclude branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExcludeResult {
    clique_move: usize,
}

/// Maximum clique state representation. e.g.
///
/// ```plain
///  vertices = [  1  4  5  8  2  6  7  3  0  9  ]
///                B        C           N        E
/// ```
///
/// The `vertices` array contains the set of vertices over which we are
/// searching for a maximum clique, partitioned by two cursors `clique_end`
/// (C) and `neighbours_end` (N). All vertices to the left of C are currently
/// in the clique: in the above example it has been verified that {1, 4, 5}
/// form a clique in the target graph. Vertices in the range `[C, N)` are
/// candidates to be added to the clique: each of {8, 2, 6, 7} is adjacent to
/// every vertex of {1, 4, 5}, but it has not been checked whether they are
/// adjacent to one another. Vertices at and to the right of N cannot be added
/// to the clique at this branch, since some previous step determined they are
/// not neighbours of some vertex in {1, 4, 5}.
///
/// To transition to an *include* state, the vertex at position C enters the
/// clique by advancing C, and the new candidate range is partitioned into
/// neighbours and non-neighbours of that vertex:
///
/// ```plain
///  vertices = [  1  4  5  8  7  6  2  3  0  9  ]
///                B           C     N           E
/// ```
///
/// The opposing *exclude* branch swaps the branch vertex into the excluded
/// tail `[N, E)` so it is never considered below this state:
///
/// ```plain
///  vertices = [  1  4  5  7  2  6  8  3  0  9  ]
///                B        C        N           E
/// ```
#[derive(Clone)]
pub struct MaximumCliqueState<'a> {
    graph: &'a UndirectedGraph,
    vertices: Vec<usize>,
    clique_end: usize,
    neighbours_end: usize,
}

impl<'a> MaximumCliqueState<'a> {
    /// Creates the root state searching the whole graph, with vertices in
    /// identity order.
    pub fn new(graph: &'a UndirectedGraph) -> Self {
        Self::with_order(graph, (0..graph.vertices()).collect())
    }

    /// Creates a state searching for a maximum clique among the given
    /// vertices only, branching in the given initial order.
    pub fn with_order(graph: &'a UndirectedGraph, vertices: Vec<usize>) -> Self {
        let len = vertices.len();
        MaximumCliqueState {
            graph,
            vertices,
            clique_end: 0,
            neighbours_end: len,
        }
    }

    /// Brings the next vertex to be branched on to the first candidate
    /// position, and includes it by implication when possible: while the
    /// smallest-degree candidate is adjacent to every other candidate, every
    /// maximum clique below this node contains it, so its inclusion prunes
    /// nothing and the clique cursor advances without branching.
    pub fn sort_and_imply(&mut self) {
        while self.clique_end != self.neighbours_end {
            let mut smallest = self.clique_end;
            for i in self.clique_end + 1..self.neighbours_end {
                if self.graph.degree(self.vertices[i]) < self.graph.degree(self.vertices[smallest])
                {
                    smallest = i;
                }
            }
            self.vertices.swap(self.clique_end, smallest);
            let vertex = self.vertices[self.clique_end];
            if self.vertices[self.clique_end + 1..self.neighbours_end]
                .iter()
                .any(|&other| !self.graph.adjacent(vertex, other))
            {
                break;
            }
            self.clique_end += 1;
        }
    }
}

impl State for MaximumCliqueState<'_> {
    type Obj = usize;
    type Sol = MaximumCliqueSol;
    type Rule = usize;
    type First = IncludeResult;
    type Second = ExcludeResult;

    fn is_feasible(&self) -> bool {
        true
    }

    /// A leaf has been reached when there are no more candidates to check
    /// below this state.
    fn is_leaf(&self) -> bool {
        self.clique_end == self.neighbours_end
    }

    fn solution(&self) -> MaximumCliqueSol {
        MaximumCliqueSol {
            vertices: self.vertices[..self.clique_end].to_vec(),
        }
    }

    /// The best case below this node keeps the current clique and adds every
    /// remaining candidate.
    fn dual_bound(&self) -> usize {
        self.neighbours_end
    }

    /// Alters the state to check the include(v) branch. The result records
    /// how far the partitioning and implication steps moved the two cursors
    /// (i.e. how many vertices were rejected as a consequence of including
    /// the branch vertex) to allow backtracking.
    fn branch(&mut self) -> (usize, IncludeResult) {
        let prev_clique_end = self.clique_end;
        let prev_neighbours_end = self.neighbours_end;
        let vertex = self.vertices[self.clique_end];
        // Add the branch vertex to the clique and update the candidate set.
        self.clique_end += 1;
        let mut kept = self.clique_end;
        for i in self.clique_end..self.neighbours_end {
            if self.graph.adjacent(vertex, self.vertices[i]) {
                self.vertices.swap(kept, i);
                kept += 1;
            }
        }
        self.neighbours_end = kept;
        // Look for implied inclusions, record cursor movements.
        self.sort_and_imply();
        (
            vertex,
            IncludeResult {
                clique_move: self.clique_end - prev_clique_end,
                neighbours_move: prev_neighbours_end - self.neighbours_end,
            },
        )
    }

    /// Alters the state to check the exclude(v) branch.
    fn branch_alternate(&mut self, vertex: &usize) -> ExcludeResult {
        assert_eq!(self.vertices[self.clique_end], *vertex);
        let prev_clique_end = self.clique_end;
        // Move the branch vertex into the excluded set.
        self.neighbours_end -= 1;
        self.vertices.swap(self.clique_end, self.neighbours_end);
        // Look for implied inclusions, record the cursor movement.
        self.sort_and_imply();
        ExcludeResult {
            clique_move: self.clique_end - prev_clique_end,
        }
    }

    /// Reverts a call to `branch`, transitioning to the parent state.
    fn backtrack(&mut self, vertex: &usize, result: &IncludeResult) {
        self.clique_end -= result.clique_move;
        self.neighbours_end += result.neighbours_move;
        assert_eq!(self.vertices[self.clique_end], *vertex);
    }

    /// Reverts a call to `branch_alternate`, transitioning to the parent
    /// state.
    fn backtrack_alternate(&mut self, vertex: &usize, result: &ExcludeResult) {
        assert_eq!(self.vertices[self.neighbours_end], *vertex);
        self.clique_end -= result.clique_move;
        self.neighbours_end += 1;
    }
}

/// Structural equality on the partition. Backtracking restores the cursors
/// with pure arithmetic and never un-permutes the candidate region, so two
/// states are equal when their cursors agree, their clique prefixes agree
/// (that region is never reordered by a subtree), and their candidate and
/// excluded regions hold the same vertex sets.
impl PartialEq for MaximumCliqueState<'_> {
    fn eq(&self, other: &Self) -> bool {
        fn sorted(region: &[usize]) -> Vec<usize> {
            let mut copy = region.to_vec();
            copy.sort_unstable();
            copy
        }
        self.clique_end == other.clique_end
            && self.neighbours_end == other.neighbours_end
            && self.vertices[..self.clique_end] == other.vertices[..other.clique_end]
            && sorted(&self.vertices[self.clique_end..self.neighbours_end])
                == sorted(&other.vertices[other.clique_end..other.neighbours_end])
            && sorted(&self.vertices[self.neighbours_end..])
                == sorted(&other.vertices[other.neighbours_end..])
    }
}
impl Eq for MaximumCliqueState<'_> {}

/// Renders the partition with its cursor markers, e.g. `[1 4 5 | 8 2 | 0 9]`
/// for a clique {1, 4, 5} with candidates {8, 2} and excluded tail {0, 9}.
impl fmt::Debug for MaximumCliqueState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i == self.clique_end {
                write!(f, "|")?;
            }
            if i == self.neighbours_end {
                write!(f, "|")?;
            }
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", vertex)?;
        }
        if self.vertices.len() == self.clique_end {
            write!(f, "|")?;
        }
        if self.vertices.len() == self.neighbours_end {
            write!(f, "|")?;
        }
        write!(f, "]")
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

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

//! The graph builders shared by the unit tests of this crate.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::UndirectedGraph;

/// The complete graph on `n` vertices.
pub fn complete(n: usize) -> UndirectedGraph {
    let mut edges = vec![];
    for i in 0..n {
        for j in i + 1..n {
            edges.push((i, j));
        }
    }
    UndirectedGraph::new(n, &edges).unwrap()
}

/// The graph on `n` vertices with no edge at all.
pub fn edgeless(n: usize) -> UndirectedGraph {
    UndirectedGraph::new(n, &[]).unwrap()
}

/// The cycle 0 - 1 - ... - (n-1) - 0.
pub fn cycle(n: usize) -> UndirectedGraph {
    let edges: Vec<(usize, usize)> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    UndirectedGraph::new(n, &edges).unwrap()
}

/// The complete bipartite graph on `a + b` vertices: every one of the first
/// `a` vertices is adjacent to every one of the last `b`.
pub fn complete_bipartite(a: usize, b: usize) -> UndirectedGraph {
    let mut edges = vec![];
    for i in 0..a {
        for j in a..a + b {
            edges.push((i, j));
        }
    }
    UndirectedGraph::new(a + b, &edges).unwrap()
}

/// Two vertex-disjoint triangles: {0, 1, 2} and {3, 4, 5}.
pub fn disjoint_triangles() -> UndirectedGraph {
    UndirectedGraph::new(6, &[(0, 1), (0, 2), (1, 2), (3, 4), (3, 5), (4, 5)]).unwrap()
}

/// A 10-vertex toy instance with clique number 4 ({0, 1, 5, 9}), two
/// isolated vertices and a sparse remainder.
pub fn toy_instance() -> UndirectedGraph {
    UndirectedGraph::new(
        10,
        &[
            (0, 1),
            (0, 5),
            (0, 6),
            (0, 9),
            (0, 7),
            (1, 5),
            (1, 9),
            (1, 8),
            (1, 7),
            (9, 5),
            (2, 5),
            (2, 8),
            (5, 8),
        ],
    )
    .unwrap()
}

/// A seeded Erdos-Renyi graph: every one of the `n (n-1) / 2` candidate
/// edges is present independently with probability `density`. Seeding keeps
/// the tests deterministic.
pub fn random_graph(n: usize, density: f64, seed: u64) -> UndirectedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = vec![];
    for i in 0..n {
        for j in i + 1..n {
            if rng.gen_bool(density) {
                edges.push((i, j));
            }
        }
    }
    UndirectedGraph::new(n, &edges).unwrap()
}

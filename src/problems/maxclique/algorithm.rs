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

//! The solver entry points of the maximum clique problem.

use crate::implementation::solver::recursion;
use crate::problems::maxclique::{MaximumCliqueSol, MaximumCliqueState};
use crate::{Maximize, StaticSolver, UndirectedGraph};

/// Searches the graph for a maximum clique with the recursive driver.
/// Returns `None` on an empty graph: a zero-vertex clique cannot strictly
/// improve on the worst-case primal bound, which is what the driver demands
/// of a solution; callers treat `None` as the empty clique.
pub fn solve_recursive(graph: &UndirectedGraph) -> Option<MaximumCliqueSol> {
    let mut state = MaximumCliqueState::new(graph);
    state.sort_and_imply();
    recursion::solve_recursive::<_, Maximize>(&mut state)
}

/// Searches the graph for a maximum clique with the iterative driver,
/// logging every `log_frequency` nodes. Returns the pool of incumbents in
/// order of discovery: the last one (if any) is a maximum clique.
pub fn solve_backtrack(graph: &UndirectedGraph, log_frequency: usize) -> Vec<MaximumCliqueSol> {
    let mut state = MaximumCliqueState::new(graph);
    state.sort_and_imply();
    let mut solver = StaticSolver::<_, Maximize>::new(&mut state);
    solver.solve(log_frequency);
    solver.into_solutions()
}

/// Searches for a maximum clique among the given vertices only, and returns
/// the `(clique, rest)` split of that vertex set.
pub fn solve_subgraph(
    graph: &UndirectedGraph,
    vertices: Vec<usize>,
) -> (Vec<usize>, Vec<usize>) {
    if vertices.is_empty() {
        return (vec![], vec![]);
    }
    let mut state = MaximumCliqueState::with_order(graph, vertices.clone());
    state.sort_and_imply();
    let solution = recursion::solve_recursive::<_, Maximize>(&mut state)
        .expect("a non-empty vertex set always contains a clique");
    vertices
        .into_iter()
        .partition(|&vertex| solution.contains(vertex))
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod tests {
    use crate::problems::maxclique::{solve_backtrack, solve_recursive, solve_subgraph};
    use crate::test_utils::{
        complete, complete_bipartite, cycle, disjoint_triangles, edgeless, random_graph,
        toy_instance,
    };
    use crate::{Solution, UndirectedGraph};

    fn recursive_objective(graph: &UndirectedGraph) -> usize {
        solve_recursive(graph)
            .map(|s| s.objective_value())
            .unwrap_or(0)
    }
    fn backtrack_objective(graph: &UndirectedGraph) -> usize {
        solve_backtrack(graph, 0)
            .last()
            .map(|s| s.objective_value())
            .unwrap_or(0)
    }

    #[test]
    fn the_empty_graph_has_the_empty_clique() {
        let graph = edgeless(0);
        assert!(solve_recursive(&graph).is_none());
        assert_eq!(0, backtrack_objective(&graph));
    }

    #[test]
    fn an_edgeless_graph_has_cliques_of_one_vertex() {
        let graph = edgeless(3);
        assert_eq!(1, recursive_objective(&graph));
        assert_eq!(1, backtrack_objective(&graph));
    }

    #[test]
    fn the_complete_graph_is_its_own_maximum_clique() {
        let graph = complete(4);
        let solution = solve_recursive(&graph).unwrap();
        assert_eq!(4, solution.objective_value());
        assert_eq!(4, backtrack_objective(&graph));
    }

    #[test]
    fn the_five_cycle_has_clique_number_two() {
        let graph = cycle(5);
        assert_eq!(2, recursive_objective(&graph));
        assert_eq!(2, backtrack_objective(&graph));
    }

    #[test]
    fn a_bipartite_graph_has_clique_number_two() {
        let graph = complete_bipartite(3, 3);
        assert_eq!(2, recursive_objective(&graph));
        assert_eq!(2, backtrack_objective(&graph));
    }

    #[test]
    fn disjoint_triangles_have_clique_number_three() {
        let graph = disjoint_triangles();
        assert_eq!(3, recursive_objective(&graph));
        assert_eq!(3, backtrack_objective(&graph));
    }

    #[test]
    fn the_toy_instance_has_clique_number_four() {
        // {0, 1, 5, 9} is pairwise adjacent and no vertex extends it
        let graph = toy_instance();
        assert_eq!(4, recursive_objective(&graph));
        assert_eq!(4, backtrack_objective(&graph));
    }

    #[test]
    fn the_solution_is_pairwise_adjacent() {
        let graph = toy_instance();
        let solution = solve_recursive(&graph).unwrap();
        let vertices = solution.vertices();
        for (i, &u) in vertices.iter().enumerate() {
            for &v in vertices[i + 1..].iter() {
                assert!(graph.adjacent(u, v));
            }
        }
    }

    #[test]
    fn both_drivers_agree_on_random_graphs() {
        for seed in 0..15 {
            let graph = random_graph(14, 0.5, seed);
            assert_eq!(recursive_objective(&graph), backtrack_objective(&graph));
        }
    }

    #[test]
    fn the_iterative_pool_strictly_improves() {
        let graph = random_graph(14, 0.6, 42);
        let pool = solve_backtrack(&graph, 0);
        assert!(!pool.is_empty());
        for pair in pool.windows(2) {
            assert!(pair[0].objective_value() < pair[1].objective_value());
        }
    }

    #[test]
    fn a_subgraph_solve_splits_the_vertex_set() {
        let graph = toy_instance();
        // {0, 1, 5, 8}: 8 is adjacent to 1 and 5 but not to 0
        let (clique, rest) = solve_subgraph(&graph, vec![0, 1, 5, 8]);
        assert_eq!(3, clique.len());
        assert_eq!(1, rest.len());
        for (i, &u) in clique.iter().enumerate() {
            for &v in clique[i + 1..].iter() {
                assert!(graph.adjacent(u, v));
            }
        }
    }

    #[test]
    fn a_subgraph_solve_of_nothing_is_empty() {
        let graph = toy_instance();
        let (clique, rest) = solve_subgraph(&graph, vec![]);
        assert!(clique.is_empty());
        assert!(rest.is_empty());
    }
}

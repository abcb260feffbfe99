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

//! The solver entry points of the vertex colouring problem.

use crate::implementation::solver::recursion;
use crate::problems::coloring::{CliqueCoverState, ColoringSol};
use crate::{Minimize, StaticSolver, UndirectedGraph};

/// Computes the chromatic number of the graph with the recursive driver.
pub fn solve_recursive(graph: &UndirectedGraph) -> Option<ColoringSol> {
    let mut root = CliqueCoverState::new(graph);
    root.initialise();
    recursion::solve_recursive::<_, Minimize>(&mut root)
}

/// Computes the chromatic number of the graph with the iterative driver,
/// logging every `log_frequency` nodes. Returns the pool of incumbent
/// colourings in order of discovery: the last one uses the optimal number of
/// colours.
pub fn solve_backtrack(graph: &UndirectedGraph, log_frequency: usize) -> Vec<ColoringSol> {
    let mut root = CliqueCoverState::new(graph);
    root.initialise();
    let mut solver = StaticSolver::<_, Minimize>::new(&mut root);
    solver.solve(log_frequency);
    solver.into_solutions()
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod tests {
    use crate::problems::coloring::{solve_backtrack, solve_recursive};
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
    fn the_empty_graph_needs_no_colors() {
        let graph = edgeless(0);
        assert_eq!(0, recursive_objective(&graph));
        assert_eq!(0, backtrack_objective(&graph));
    }

    #[test]
    fn an_edgeless_graph_needs_one_color() {
        let graph = edgeless(3);
        assert_eq!(1, recursive_objective(&graph));
        assert_eq!(1, backtrack_objective(&graph));
    }

    #[test]
    fn the_complete_graph_needs_a_color_per_vertex() {
        let graph = complete(4);
        assert_eq!(4, recursive_objective(&graph));
        assert_eq!(4, backtrack_objective(&graph));
    }

    #[test]
    fn odd_cycles_need_three_colors() {
        let graph = cycle(5);
        assert_eq!(3, recursive_objective(&graph));
        assert_eq!(3, backtrack_objective(&graph));
    }

    #[test]
    fn bipartite_graphs_need_two_colors() {
        let graph = complete_bipartite(3, 3);
        assert_eq!(2, recursive_objective(&graph));
        assert_eq!(2, backtrack_objective(&graph));
    }

    #[test]
    fn disjoint_triangles_need_three_colors() {
        let graph = disjoint_triangles();
        assert_eq!(3, recursive_objective(&graph));
        assert_eq!(3, backtrack_objective(&graph));
    }

    #[test]
    fn the_toy_instance_needs_four_colors() {
        // its maximum clique {0, 1, 5, 9} forces four colours, and four are
        // enough for the rest of the graph
        let graph = toy_instance();
        assert_eq!(4, recursive_objective(&graph));
        assert_eq!(4, backtrack_objective(&graph));
    }

    #[test]
    fn the_chromatic_number_is_at_least_the_clique_number() {
        for seed in 0..10 {
            let graph = random_graph(9, 0.5, seed);
            let chi = recursive_objective(&graph);
            let omega = crate::problems::maxclique::solve_recursive(&graph)
                .map(|s| s.objective_value())
                .unwrap_or(0);
            assert!(chi >= omega);
            assert!(chi <= graph.vertices().max(1));
        }
    }

    #[test]
    fn both_drivers_agree_on_random_graphs() {
        for seed in 0..10 {
            let graph = random_graph(9, 0.5, seed);
            assert_eq!(recursive_objective(&graph), backtrack_objective(&graph));
        }
    }

    #[test]
    fn the_iterative_pool_strictly_improves() {
        let graph = random_graph(9, 0.3, 7);
        let pool = solve_backtrack(&graph, 0);
        assert!(!pool.is_empty());
        for pair in pool.windows(2) {
            assert!(pair[0].objective_value() > pair[1].objective_value());
        }
    }
}

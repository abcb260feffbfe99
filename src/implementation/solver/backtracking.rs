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

//! This module provides the iterative search driver: a depth-first
//! exploration of the branching tree carried on an explicit stack of frames,
//! with no recursion involved.

use std::marker::PhantomData;
use std::time::Instant;

use crate::{DynamicFrame, Frame, Sense, Solution, State, StaticFrame};

/// The iterative depth-first solver. It owns a mutable borrow of the root
/// state, an explicit stack of [`Frame`]s standing for the path from the
/// root to the current node, and the pool of incumbent solutions found so
/// far. Every solution appended to the pool strictly improves on its
/// predecessor, and the last one is optimal once `solve` returns.
///
/// The frame strategy `F` is selected structurally from the state's types:
/// use [`StaticSolver`] when the two branches of the problem carry distinct
/// undo types, and [`DynamicSolver`] when they share one.
///
/// # Example
/// ```
/// # use arboretum::*;
/// # struct Nothing;
/// # struct NothingSol;
/// # impl Solution for NothingSol {
/// #     type Obj = usize;
/// #     fn objective_value(&self) -> usize { 0 }
/// # }
/// # impl State for Nothing {
/// #     type Obj = usize;
/// #     type Sol = NothingSol;
/// #     type Rule = ();
/// #     type First = ();
/// #     type Second = ();
/// #     fn is_feasible(&self) -> bool { false }
/// #     fn is_leaf(&self) -> bool { false }
/// #     fn solution(&self) -> NothingSol { NothingSol }
/// #     fn dual_bound(&self) -> usize { 0 }
/// #     fn branch(&mut self) -> ((), ()) { unreachable!() }
/// #     fn branch_alternate(&mut self, _: &()) {}
/// #     fn backtrack(&mut self, _: &(), _: &()) {}
/// #     fn backtrack_alternate(&mut self, _: &(), _: &()) {}
/// # }
/// let mut root = Nothing;
/// let mut solver = StaticSolver::<_, Maximize>::new(&mut root);
/// solver.solve(0);
/// assert!(solver.solutions().is_empty());
/// ```
pub struct Solver<'a, S, Sn, F>
where
    S: State,
    Sn: Sense,
    F: Frame<S>,
{
    state: &'a mut S,
    stack: Vec<F>,
    solutions: Vec<S::Sol>,
    primal_bound: S::Obj,
    _sense: PhantomData<Sn>,
}

/// The iterative solver over static frames (distinct undo types).
pub type StaticSolver<'a, S, Sn> = Solver<'a, S, Sn, StaticFrame<S>>;
/// The iterative solver over dynamic frames (one shared undo type).
pub type DynamicSolver<'a, S, Sn> = Solver<'a, S, Sn, DynamicFrame<S>>;

impl<'a, S, Sn, F> Solver<'a, S, Sn, F>
where
    S: State,
    Sn: Sense,
    F: Frame<S>,
{
    /// Creates a solver rooted at the given state, with the primal bound
    /// initialized to the worst representable objective for the sense.
    pub fn new(state: &'a mut S) -> Self {
        Solver {
            state,
            stack: vec![],
            solutions: vec![],
            primal_bound: Sn::initial_primal_bound(),
            _sense: PhantomData,
        }
    }

    /// Returns the pool of incumbent solutions found so far, in order of
    /// discovery. Each member strictly improves on its predecessor.
    pub fn solutions(&self) -> &[S::Sol] {
        &self.solutions
    }

    /// Consumes the solver, releasing the borrow of the state, and returns
    /// the pool of incumbent solutions.
    pub fn into_solutions(self) -> Vec<S::Sol> {
        self.solutions
    }

    /// Returns the current primal bound: the objective of the last incumbent
    /// if any solution was found, and the worst representable objective
    /// otherwise.
    pub fn primal_bound(&self) -> S::Obj {
        self.primal_bound
    }

    /// Runs the search to completion. A progress line is printed every
    /// `log_frequency` nodes (pass 0 to disable the periodic lines) and
    /// whenever a new incumbent is found; a summary block is printed at the
    /// end.
    pub fn solve(&mut self, log_frequency: usize) {
        let mut nodes: usize = 0;
        let start = Instant::now();
        loop {
            nodes += 1;
            let mut incumbent = false;
            if !self.state.is_feasible() || Sn::can_be_pruned(self.state, self.primal_bound) {
                // No solution below this node, or not worth exploring.
                self.unwind_and_branch_alternate();
            } else if self.state.is_leaf() {
                // Feasible complete solution: pool it, tighten the primal.
                let solution = self.state.solution();
                assert!(Sn::is_improvement(
                    solution.objective_value(),
                    self.primal_bound
                ));
                self.primal_bound = solution.objective_value();
                self.solutions.push(solution);
                incumbent = true;
                self.log_progress(true, nodes, &start);
                self.unwind_and_branch_alternate();
            } else {
                // Subproblem is incomplete, still improving and still
                // feasible: branch and record the decision on the stack.
                let frame = F::open(self.state);
                self.stack.push(frame);
            }
            if !incumbent && log_frequency > 0 && nodes % log_frequency == 0 {
                self.log_progress(false, nodes, &start);
            }
            if self.stack.is_empty() {
                break;
            }
        }
        self.log_summary(nodes, &start);
    }

    /// Pops every frame whose node is exhausted (or whose alternate branch
    /// cannot improve the incumbent), stopping as soon as a frame opens its
    /// alternate branch. On return, either the stack is empty, or the top
    /// frame has its alternate evaluated and the state stands at that
    /// freshly-opened alternate child.
    fn unwind_and_branch_alternate(&mut self) {
        while let Some(top) = self.stack.last_mut() {
            if top.unwind_step::<Sn>(self.state, self.primal_bound) {
                self.stack.pop();
            } else {
                break;
            }
        }
    }

    fn log_progress(&self, incumbent: bool, nodes: usize, start: &Instant) {
        // Left depth counts the frames whose node is fully explored; they
        // form a contiguous prefix at the bottom of any DFS stack.
        let left_depth = self
            .stack
            .iter()
            .take_while(|frame| frame.alternate_evaluated())
            .count();
        let right_depth = self.stack.len() - left_depth;
        println!(
            "{}  TIME: {:.3}s  NODES: {}  PRIMAL: {}  LDEPTH: {}  RDEPTH: {}",
            if incumbent { "*" } else { " " },
            start.elapsed().as_secs_f64(),
            nodes,
            self.primal_bound,
            left_depth,
            right_depth
        );
    }

    fn log_summary(&self, nodes: usize, start: &Instant) {
        let runtime = start.elapsed().as_secs_f64();
        println!("====== COMPLETE ======");
        println!("Status:      Optimal");
        println!("Nodes:       {}", nodes);
        println!("Solutions:   {}", self.solutions.len());
        println!("Time:        {:.3} seconds", runtime);
        println!("Objective:   {}", self.primal_bound);
        println!("Rate:        {:.0} nodes/second", nodes as f64 / runtime);
        println!("======================");
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

/// Unlike the rest of the library, the solver is not easily unit-tested in
/// isolation, so these tests drive it end to end on a small knapsack whose
/// two branches share one undo token -- which also exercises the dynamic
/// frame strategy. The static strategy works on the very same state, since
/// distinctness of the undo types is never *required*.

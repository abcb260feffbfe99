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


//! # Arboretum
//! Arboretum is a generic engine to develop exact branch-and-bound and
//! backtracking solvers in Rust. Its goal is to let you describe your
//! optimization problem as a mutable *search state* (see `State`) obeying a
//! reversible branch/backtrack protocol. In that setup, the engine never
//! copies your state from one node of the search tree to the next: each
//! branching step mutates the state in place and returns a compact undo
//! token which restores the parent exactly when handed back.
//!
//! Two interchangeable drivers explore the tree depth first: a recursive one
//! ([`solve_recursive`]) carried on the program stack, and an iterative one
//! ([`Solver`]) carried on an explicit stack of frames, which additionally
//! maintains a pool of incumbent solutions and prunes alternate branches
//! pre-emptively while it unwinds.
//!
//! ## Quick Example
//! The following presents a minimalistic use of arboretum. It implements a
//! solver for a tiny packing problem: pick as many items as possible from a
//! list without exceeding a weight budget.
//!
//! #### Describe the problem as a search state
//! The state records, for each item decided so far, whether it was picked.
//! The first branch picks the current item (picking is the promising move:
//! branches must be ordered from most to least promising), the alternate
//! skips it, and both moves are undone by popping what they pushed.
//! ```
//! use arboretum::*;
//!
//! /// Picks items so as to maximize how many fit within the budget.
//! struct Packing {
//!     /// the weight of each item
//!     weights: Vec<isize>,
//!     /// the remaining budget (negative when infeasible)
//!     budget: isize,
//!     /// how many of the decided items were picked
//!     picked: usize,
//!     /// the number of items decided so far
//!     depth: usize,
//! }
//!
//! /// A complete selection; its objective is the number of picked items.
//! struct PackingSol(usize);
//!
//! impl Solution for PackingSol {
//!     type Obj = usize;
//!     fn objective_value(&self) -> usize {
//!         self.0
//!     }
//! }
//!
//! /// The undo token shared by both branches.
//! struct Chose(bool);
//!
//! impl State for Packing {
//!     type Obj = usize;
//!     type Sol = PackingSol;
//!     // the rule is the index of the item the two children disagree on
//!     type Rule = usize;
//!     type First = Chose;
//!     type Second = Chose;
//!
//!     fn is_feasible(&self) -> bool {
//!         self.budget >= 0
//!     }
//!     fn is_leaf(&self) -> bool {
//!         self.depth == self.weights.len()
//!     }
//!     fn solution(&self) -> PackingSol {
//!         PackingSol(self.picked)
//!     }
//!     // at best, every undecided item still fits
//!     fn dual_bound(&self) -> usize {
//!         self.picked + (self.weights.len() - self.depth)
//!     }
//!     fn branch(&mut self) -> (usize, Chose) {
//!         let item = self.depth;
//!         self.budget -= self.weights[item];
//!         self.picked += 1;
//!         self.depth += 1;
//!         (item, Chose(true))
//!     }
//!     fn branch_alternate(&mut self, item: &usize) -> Chose {
//!         assert_eq!(*item, self.depth);
//!         self.depth += 1;
//!         Chose(false)
//!     }
//!     fn backtrack(&mut self, item: &usize, result: &Chose) {
//!         self.backtrack_alternate(item, result)
//!     }
//!     fn backtrack_alternate(&mut self, item: &usize, result: &Chose) {
//!         self.depth -= 1;
//!         assert_eq!(*item, self.depth);
//!         if result.0 {
//!             self.budget += self.weights[self.depth];
//!             self.picked -= 1;
//!         }
//!     }
//! }
//!
//! // three of these items fit within a budget of 5, four do not
//! let mut state = Packing {
//!     weights: vec![3, 1, 4, 1],
//!     budget: 5,
//!     picked: 0,
//!     depth: 0,
//! };
//!
//! // the recursive driver returns the optimum...
//! let best = solve_recursive::<_, Maximize>(&mut state).unwrap();
//! assert_eq!(3, best.objective_value());
//!
//! // ...and the iterative driver agrees, remembering every incumbent on
//! // the way (both branches share one undo type: dynamic frames apply)
//! let mut solver = DynamicSolver::<_, Maximize>::new(&mut state);
//! solver.solve(0);
//! assert_eq!(3, solver.primal_bound());
//! ```
//!
//! ## Going further
//! The `problems` module contains two complete solvers built on this
//! protocol -- maximum clique and vertex colouring -- which are good
//! starting points for writing your own: they demonstrate undo tokens made
//! of cursor deltas, append-only list updates undone by pops, and the
//! static frame strategy for branches with structurally distinct undo
//! information.

mod abstraction;
mod common;
mod graph;
mod implementation;
pub mod problems;

#[cfg(test)]
mod test_utils;

pub use abstraction::*;
pub use common::*;
pub use graph::*;
pub use implementation::*;

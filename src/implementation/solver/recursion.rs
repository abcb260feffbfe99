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

//! This module provides the recursive search driver: a plain depth-first
//! exploration of the branching tree carried on the program stack.

use crate::{Sense, Solution, State};

/// Explores the subtree rooted at `state` and returns an optimal solution
/// with a strictly better objective than the initial (worst-case) primal
/// bound, or `None` if no such solution exists.
pub fn solve_recursive<S, Sn>(state: &mut S) -> Option<S::Sol>
where
    S: State,
    Sn: Sense,
{
    solve_recursive_with_primal::<S, Sn>(state, Sn::initial_primal_bound())
}

/// Explores the subtree rooted at `state` and returns an optimal solution
/// with a strictly better objective than the given `primal_bound`, or `None`
/// if no such solution exists. On return, the state stands at the very node
/// it stood at when the call was made.
pub fn solve_recursive_with_primal<S, Sn>(state: &mut S, mut primal_bound: S::Obj) -> Option<S::Sol>
where
    S: State,
    Sn: Sense,
{
    if Sn::can_be_pruned(state, primal_bound) {
        return None;
    }
    if !state.is_feasible() {
        return None;
    }
    if state.is_leaf() {
        return Some(state.solution());
    }
    // Subproblem is incomplete, still improving and still feasible.
    // Explore the first branch, backtrack and tighten the primal bound.
    let (rule, first) = state.branch();
    let best = solve_recursive_with_primal::<S, Sn>(state, primal_bound);
    state.backtrack(&rule, &first);
    if let Some(solution) = &best {
        // guaranteed by the pruning test at the top of the recursion
        assert!(Sn::is_improvement(solution.objective_value(), primal_bound));
        primal_bound = solution.objective_value();
        if Sn::can_be_pruned(state, primal_bound) {
            return best;
        }
    }
    // Explore the alternate branch, backtrack and return the better result.
    let second = state.branch_alternate(&rule);
    let other = solve_recursive_with_primal::<S, Sn>(state, primal_bound);
    state.backtrack_alternate(&rule, &second);
    if best.is_none() {
        return other;
    }
    if let Some(solution) = &other {
        if Sn::is_improvement(solution.objective_value(), primal_bound) {
            return other;
        }
    }
    best
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

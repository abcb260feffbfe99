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

//! This module defines the basic abstractions one will manipulate when
//! implementing a branch-and-bound solver for some problem with this library.
//!
//! The most important abstraction that should be provided by a client is
//! `State`: the representation of one node of the search tree, together with
//! the reversible mutations that move it to a child node and back.

use crate::Objective;

/// A complete feasible solution to the problem being solved. The drivers only
/// ever need to read one thing off a solution: the value it realizes for the
/// objective function.
pub trait Solution {
    /// The type of the objective value realized by this solution.
    type Obj: Objective;

    /// Returns the value which this solution realizes for the objective
    /// function of the problem.
    fn objective_value(&self) -> Self::Obj;
}

/// This is the main abstraction that should be provided by any user of our
/// library. A `State` is a *mutable* object standing for one node of the
/// search tree. Rather than copying itself for each child node (which is
/// deliberately avoided, for performance), a state mutates *in place* when
/// the driver descends along a branch, and every such mutation returns a
/// compact undo token which the driver later hands back to restore the
/// parent node exactly.
///
/// # The branching protocol
/// Branching is always binary. On a feasible non-leaf state, the driver calls
/// [`branch`](State::branch), which picks a branching rule, mutates the state
/// into the *first* (most promising) child and returns the rule together
/// with the undo token of that move. Once the subtree below the first child
/// has been explored, the driver restores the parent with
/// [`backtrack`](State::backtrack) and may then descend into the *second*
/// child with [`branch_alternate`](State::branch_alternate), undone by
/// [`backtrack_alternate`](State::backtrack_alternate). The two children must
/// cover every completion consistent with the current partial assignment.
///
/// The undo tokens of the two children may have the same type (*dynamic
/// branching*: two symmetric outcomes of one shape) or two distinct types
/// (*static branching*: structurally different moves, dispatched without any
/// discriminator flag). See the frame strategies of the iterative solver.
///
/// # Contract
/// The drivers rely on the following invariants and will produce wrong
/// answers if an implementation violates them:
/// * `is_feasible` is a pure query; `false` implies that no descendant
///   yields a feasible solution.
/// * `is_leaf` is a pure query; `true` implies that `solution` is defined
///   and returns a complete feasible solution.
/// * `dual_bound` is *valid*: no descendant's objective may strictly exceed
///   it when maximizing, nor strictly fall below it when minimizing.
/// * a `backtrack*` call given the rule and token of the matching `branch*`
///   call restores the parent state exactly, as witnessed by every query
///   and by the state's own structural equality.
pub trait State {
    /// The type of the objective values of this problem.
    type Obj: Objective;
    /// The type of the complete solutions of this problem.
    type Sol: Solution<Obj = Self::Obj>;
    /// The description of a branching decision: which variable/element the
    /// two children of a node disagree on.
    type Rule;
    /// The undo token returned when descending into the first child.
    type First;
    /// The undo token returned when descending into the second child.
    type Second;

    /// Returns false iff it is certain that no feasible solution exists in
    /// the subtree rooted at this state.
    fn is_feasible(&self) -> bool;

    /// Returns true iff this state requires no further branching, in which
    /// case `solution` returns the complete feasible solution it stands for.
    fn is_leaf(&self) -> bool;

    /// Returns the complete solution standing at this leaf state. Only
    /// callable when `is_leaf` returns true.
    fn solution(&self) -> Self::Sol;

    /// Returns a valid optimistic bound on the objective of any solution in
    /// the subtree rooted at this state: an upper bound when maximizing, a
    /// lower bound when minimizing.
    fn dual_bound(&self) -> Self::Obj;

    /// Picks a branching rule, mutates the state into the first child and
    /// returns the rule along with the undo token of that move. Only
    /// callable on a feasible non-leaf state. The first child must be the
    /// more promising of the two: the pruning machinery of the drivers
    /// assumes that branches are ordered from most to least promising.
    fn branch(&mut self) -> (Self::Rule, Self::First);

    /// Given the rule returned by a matching `branch` call -- and a state
    /// which has since been restored to the parent -- mutates the state into
    /// the second child and returns the undo token of that move.
    fn branch_alternate(&mut self, rule: &Self::Rule) -> Self::Second;

    /// Restores the state to what it was immediately before the matching
    /// `branch` call.
    fn backtrack(&mut self, rule: &Self::Rule, result: &Self::First);

    /// Restores the state to what it was immediately before the matching
    /// `branch_alternate` call.
    fn backtrack_alternate(&mut self, rule: &Self::Rule, result: &Self::Second);
}

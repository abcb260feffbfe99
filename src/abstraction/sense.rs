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

//! This module defines the optimization *sense*: the compile-time tag which
//! selects the bound semantics of a search. The drivers are generic over the
//! sense, so the very same code maximizes or minimizes depending on a type
//! parameter -- there is no runtime dispatch involved.

use crate::{Objective, State};

/// The optimization direction of a problem. The two implementors of this
/// trait, [`Maximize`] and [`Minimize`], are zero-sized tags meant to be used
/// as type parameters of the search drivers.
pub trait Sense {
    /// Returns true iff `objective` is *strictly* better than the incumbent
    /// `primal_bound`: strictly greater when maximizing, strictly smaller
    /// when minimizing.
    fn is_improvement<O: Objective>(objective: O, primal_bound: O) -> bool;

    /// Returns true iff the subtree rooted at `state` cannot contain any
    /// solution strictly better than `primal_bound`, i.e. when the state's
    /// dual bound fails to strictly improve on the incumbent. Note that the
    /// comparison is *non-strict*: a subtree whose bound merely equals the
    /// primal bound is pruned, since a branch is only worth keeping if it
    /// might strictly improve.
    fn can_be_pruned<S: State>(state: &S, primal_bound: S::Obj) -> bool;

    /// Returns the worst representable objective value for this sense: the
    /// primal bound to start from when no feasible solution is known yet.
    fn initial_primal_bound<O: Objective>() -> O;
}

/// The tag of maximization problems: bigger objectives are better, and the
/// dual bound of a state is an *upper* bound.
pub struct Maximize;

/// The tag of minimization problems: smaller objectives are better, and the
/// dual bound of a state is a *lower* bound.
pub struct Minimize;

impl Sense for Maximize {
    fn is_improvement<O: Objective>(objective: O, primal_bound: O) -> bool {
        objective > primal_bound
    }
    fn can_be_pruned<S: State>(state: &S, primal_bound: S::Obj) -> bool {
        state.dual_bound() <= primal_bound
    }
    fn initial_primal_bound<O: Objective>() -> O {
        O::WORST_MAXIMIZE
    }
}

impl Sense for Minimize {
    fn is_improvement<O: Objective>(objective: O, primal_bound: O) -> bool {
        objective < primal_bound
    }
    fn can_be_pruned<S: State>(state: &S, primal_bound: S::Obj) -> bool {
        state.dual_bound() >= primal_bound
    }
    fn initial_primal_bound<O: Objective>() -> O {
        O::WORST_MINIMIZE
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod tests {
    use crate::{Maximize, Minimize, Sense, Solution, State};

    /// A state whose dual bound is the wrapped value; everything else is
    /// irrelevant to these tests.
    struct Bounded(usize);
    struct BoundedSol(usize);

    impl Solution for BoundedSol {
        type Obj = usize;
        fn objective_value(&self) -> usize {
            self.0
        }
    }
    impl State for Bounded {
        type Obj = usize;
        type Sol = BoundedSol;
        type Rule = ();
        type First = ();
        type Second = ();

        fn is_feasible(&self) -> bool {
            true
        }
        fn is_leaf(&self) -> bool {
            true
        }
        fn solution(&self) -> Self::Sol {
            BoundedSol(self.0)
        }
        fn dual_bound(&self) -> usize {
            self.0
        }
        fn branch(&mut self) -> (Self::Rule, Self::First) {
            unimplemented!()
        }
        fn branch_alternate(&mut self, _: &Self::Rule) -> Self::Second {
            unimplemented!()
        }
        fn backtrack(&mut self, _: &Self::Rule, _: &Self::First) {
            unimplemented!()
        }
        fn backtrack_alternate(&mut self, _: &Self::Rule, _: &Self::Second) {
            unimplemented!()
        }
    }

    #[test]
    fn an_improvement_is_strict_when_maximizing() {
        assert!(Maximize::is_improvement(5_usize, 4));
        assert!(!Maximize::is_improvement(5_usize, 5));
        assert!(!Maximize::is_improvement(4_usize, 5));
    }
    #[test]
    fn an_improvement_is_strict_when_minimizing() {
        assert!(Minimize::is_improvement(4_usize, 5));
        assert!(!Minimize::is_improvement(5_usize, 5));
        assert!(!Minimize::is_improvement(5_usize, 4));
    }

    #[test]
    fn a_bound_equal_to_the_primal_prunes_when_maximizing() {
        assert!(Maximize::can_be_pruned(&Bounded(5), 5));
        assert!(Maximize::can_be_pruned(&Bounded(4), 5));
        assert!(!Maximize::can_be_pruned(&Bounded(6), 5));
    }
    #[test]
    fn a_bound_equal_to_the_primal_prunes_when_minimizing() {
        assert!(Minimize::can_be_pruned(&Bounded(5), 5));
        assert!(Minimize::can_be_pruned(&Bounded(6), 5));
        assert!(!Minimize::can_be_pruned(&Bounded(4), 5));
    }

    #[test]
    fn the_initial_primal_bound_is_the_worst_representable_value() {
        assert_eq!(usize::MIN, Maximize::initial_primal_bound::<usize>());
        assert_eq!(usize::MAX, Minimize::initial_primal_bound::<usize>());
        assert_eq!(isize::MIN, Maximize::initial_primal_bound::<isize>());
        assert_eq!(isize::MAX, Minimize::initial_primal_bound::<isize>());
    }
}

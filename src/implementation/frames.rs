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

//! This module provides the two stack-frame strategies of the iterative
//! solver. Both implement the same `Frame` contract; they only differ in how
//! they store the undo token of the branch currently being explored.

use crate::{Frame, Sense, State};

/// The exploration status of a static frame. The tag is the discriminator:
/// it tells at once which child is being explored and which `backtrack`
/// method must be dispatched to undo it.
enum Explored<S: State> {
    /// The first child has been opened; its undo token is stored here.
    FirstDone(S::First),
    /// Both children have been opened; the undo token of the second one is
    /// stored here (the first child's token is no longer needed, it was
    /// consumed when the solver climbed back through it).
    BothDone(S::Second),
}

/// The frame strategy for *static* branching: the two children of a node
/// carry structurally distinct undo types, so a sum over the two types is
/// enough to know both where the exploration stands and how to undo it. No
/// separate discriminator flag is stored, and there is no chance of handing
/// an undo token to the wrong `backtrack` overload.
pub struct StaticFrame<S: State> {
    rule: S::Rule,
    explored: Explored<S>,
}

impl<S: State> Frame<S> for StaticFrame<S> {
    fn open(state: &mut S) -> Self {
        let (rule, first) = state.branch();
        StaticFrame {
            rule,
            explored: Explored::FirstDone(first),
        }
    }

    fn unwind_step<Sn: Sense>(&mut self, state: &mut S, primal_bound: S::Obj) -> bool {
        let StaticFrame { rule, explored } = self;
        match explored {
            Explored::BothDone(result) => {
                // Both branches have been pursued, discard the node.
                state.backtrack_alternate(rule, result);
                true
            }
            Explored::FirstDone(result) => {
                // The first branch has been pursued, the alternate is next.
                state.backtrack(rule, result);
                if Sn::can_be_pruned(state, primal_bound) {
                    // Pre-emptively prune the alternate branch.
                    true
                } else {
                    *explored = Explored::BothDone(state.branch_alternate(rule));
                    false
                }
            }
        }
    }

    fn alternate_evaluated(&self) -> bool {
        matches!(self.explored, Explored::BothDone(_))
    }
}

/// The frame strategy for *dynamic* branching: the two children of a node
/// share one undo type, so the frame keeps a single result slot plus an
/// explicit "alternate evaluated" flag telling which child the slot belongs
/// to.
pub struct DynamicFrame<S: State> {
    rule: S::Rule,
    result: S::First,
    alternate_evaluated: bool,
}

impl<S, R> Frame<S> for DynamicFrame<S>
where
    S: State<First = R, Second = R>,
{
    fn open(state: &mut S) -> Self {
        let (rule, first) = state.branch();
        DynamicFrame {
            rule,
            result: first,
            alternate_evaluated: false,
        }
    }

    fn unwind_step<Sn: Sense>(&mut self, state: &mut S, primal_bound: S::Obj) -> bool {
        if self.alternate_evaluated {
            state.backtrack_alternate(&self.rule, &self.result);
            true
        } else {
            state.backtrack(&self.rule, &self.result);
            if Sn::can_be_pruned(state, primal_bound) {
                true
            } else {
                self.result = state.branch_alternate(&self.rule);
                self.alternate_evaluated = true;
                false
            }
        }
    }

    fn alternate_evaluated(&self) -> bool {
        self.alternate_evaluated
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod tests {
    use crate::{DynamicFrame, Frame, Maximize, Solution, State, StaticFrame};

    /// A little search state picking a subsequence of `n` items: `path[d]`
    /// tells whether item `d` was kept. The first branch keeps the item, the
    /// alternate drops it; undoing either move pops the path.
    struct Subset {
        n: usize,
        path: Vec<bool>,
    }
    struct SubsetSol(usize);

    impl Subset {
        fn new(n: usize) -> Self {
            Subset { n, path: vec![] }
        }
        fn kept(&self) -> usize {
            self.path.iter().filter(|&&kept| kept).count()
        }
    }
    impl Solution for SubsetSol {
        type Obj = usize;
        fn objective_value(&self) -> usize {
            self.0
        }
    }

    /// The static flavour: the two undo tokens have distinct types.
    struct Kept;
    struct Dropped;

    impl State for Subset {
        type Obj = usize;
        type Sol = SubsetSol;
        type Rule = usize;
        type First = Kept;
        type Second = Dropped;

        fn is_feasible(&self) -> bool {
            true
        }
        fn is_leaf(&self) -> bool {
            self.path.len() == self.n
        }
        fn solution(&self) -> SubsetSol {
            SubsetSol(self.kept())
        }
        fn dual_bound(&self) -> usize {
            self.kept() + (self.n - self.path.len())
        }
        fn branch(&mut self) -> (usize, Kept) {
            let rule = self.path.len();
            self.path.push(true);
            (rule, Kept)
        }
        fn branch_alternate(&mut self, rule: &usize) -> Dropped {
            assert_eq!(*rule, self.path.len());
            self.path.push(false);
            Dropped
        }
        fn backtrack(&mut self, rule: &usize, _: &Kept) {
            assert_eq!(Some(true), self.path.pop());
            assert_eq!(*rule, self.path.len());
        }
        fn backtrack_alternate(&mut self, rule: &usize, _: &Dropped) {
            assert_eq!(Some(false), self.path.pop());
            assert_eq!(*rule, self.path.len());
        }
    }

    /// The dynamic flavour of the same search: one shared undo token.
    struct DynSubset(Subset);

    impl State for DynSubset {
        type Obj = usize;
        type Sol = SubsetSol;
        type Rule = usize;
        type First = ();
        type Second = ();

        fn is_feasible(&self) -> bool {
            true
        }
        fn is_leaf(&self) -> bool {
            self.0.is_leaf()
        }
        fn solution(&self) -> SubsetSol {
            SubsetSol(self.0.kept())
        }
        fn dual_bound(&self) -> usize {
            self.0.dual_bound()
        }
        fn branch(&mut self) -> (usize, ()) {
            (self.0.branch().0, ())
        }
        fn branch_alternate(&mut self, rule: &usize) {
            self.0.branch_alternate(rule);
        }
        fn backtrack(&mut self, rule: &usize, _: &()) {
            self.0.backtrack(rule, &Kept);
        }
        fn backtrack_alternate(&mut self, rule: &usize, _: &()) {
            self.0.backtrack_alternate(rule, &Dropped);
        }
    }

    #[test]
    fn opening_a_static_frame_descends_into_the_first_child() {
        let mut state = Subset::new(3);
        let frame = StaticFrame::open(&mut state);
        assert_eq!(vec![true], state.path);
        assert!(!frame.alternate_evaluated());
    }

    #[test]
    fn a_static_unwind_step_opens_the_alternate_when_it_cannot_be_pruned() {
        let mut state = Subset::new(3);
        let mut frame = StaticFrame::open(&mut state);
        // nothing can be pruned against the worst possible primal bound
        let popped = frame.unwind_step::<Maximize>(&mut state, 0);
        assert!(!popped);
        assert!(frame.alternate_evaluated());
        assert_eq!(vec![false], state.path);
    }

    #[test]
    fn a_static_unwind_step_pops_once_both_branches_are_done() {
        let mut state = Subset::new(3);
        let mut frame = StaticFrame::open(&mut state);
        assert!(!frame.unwind_step::<Maximize>(&mut state, 0));
        let popped = frame.unwind_step::<Maximize>(&mut state, 0);
        assert!(popped);
        assert!(state.path.is_empty());
    }

    #[test]
    fn a_static_unwind_step_preemptively_prunes_the_alternate() {
        let mut state = Subset::new(3);
        let mut frame = StaticFrame::open(&mut state);
        // the root bound is 3: an incumbent of 3 makes the alternate useless
        let popped = frame.unwind_step::<Maximize>(&mut state, 3);
        assert!(popped);
        assert!(!frame.alternate_evaluated());
        assert!(state.path.is_empty());
    }

    #[test]
    fn opening_a_dynamic_frame_descends_into_the_first_child() {
        let mut state = DynSubset(Subset::new(3));
        let frame = DynamicFrame::open(&mut state);
        assert_eq!(vec![true], state.0.path);
        assert!(!frame.alternate_evaluated());
    }

    #[test]
    fn a_dynamic_unwind_step_opens_the_alternate_when_it_cannot_be_pruned() {
        let mut state = DynSubset(Subset::new(3));
        let mut frame = DynamicFrame::open(&mut state);
        let popped = frame.unwind_step::<Maximize>(&mut state, 0);
        assert!(!popped);
        assert!(frame.alternate_evaluated());
        assert_eq!(vec![false], state.0.path);
    }

    #[test]
    fn a_dynamic_unwind_step_pops_once_both_branches_are_done() {
        let mut state = DynSubset(Subset::new(3));
        let mut frame = DynamicFrame::open(&mut state);
        assert!(!frame.unwind_step::<Maximize>(&mut state, 0));
        assert!(frame.unwind_step::<Maximize>(&mut state, 0));
        assert!(state.0.path.is_empty());
    }

    #[test]
    fn a_dynamic_unwind_step_preemptively_prunes_the_alternate() {
        let mut state = DynSubset(Subset::new(3));
        let mut frame = DynamicFrame::open(&mut state);
        let popped = frame.unwind_step::<Maximize>(&mut state, 3);
        assert!(popped);
        assert!(!frame.alternate_evaluated());
        assert!(state.0.path.is_empty());
    }
}

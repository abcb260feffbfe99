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

//! This module defines the contract of the stack frames manipulated by the
//! iterative solver. A frame remembers one branching decision on the path
//! from the root to the current state, along with whatever undo information
//! is needed to climb back up through it.

use crate::{Sense, State};

/// One element of the iterative solver's explicit stack. A frame is *opened*
/// by branching from an interior node (which leaves the state standing at
/// the first child), and is later asked to perform *unwind steps* when the
/// solver climbs back up the tree.
///
/// Two interchangeable implementations exist, sharing this contract: the
/// static strategy (distinct undo types for the two children, dispatched by
/// the tag of a sum type) and the dynamic strategy (one shared undo type
/// plus an explicit flag). The solver selects the strategy structurally from
/// the state's associated types; its main loop is identical either way.
pub trait Frame<S: State>: Sized {
    /// Branches from the (feasible, interior) node the state currently
    /// stands at, leaving the state mutated into the first child, and
    /// returns the frame recording that decision.
    fn open(state: &mut S) -> Self;

    /// Performs one step of the unwind loop and reports whether this frame
    /// must be popped:
    ///
    /// * if the frame's alternate branch has already been evaluated, both
    ///   children are exhausted: the state is restored to the parent and
    ///   `true` is returned;
    /// * otherwise the state is restored to the parent, and the alternate
    ///   branch is considered. If the parent can be pruned against
    ///   `primal_bound`, the alternate is abandoned without mutating the
    ///   state and `true` is returned (pre-emptive pruning). Otherwise the
    ///   state is mutated into the alternate child, the frame records its
    ///   undo token, and `false` is returned so the solver stops unwinding
    ///   and descends from the newly-opened branch.
    fn unwind_step<Sn: Sense>(&mut self, state: &mut S, primal_bound: S::Obj) -> bool;

    /// Returns true iff both children of this frame's node have been
    /// visited. Used by the solver's depth instrumentation.
    fn alternate_evaluated(&self) -> bool;
}

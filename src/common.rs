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

//! This module defines the most basic data types that are used throughout all
//! the code of our library: essentially, the contract obeyed by the objective
//! values which the search drivers compare, tighten and report.

use std::fmt::{Debug, Display};

/// The trait obeyed by any type usable as an objective value. An objective
/// value must be totally ordered (so that the search can compare a candidate
/// solution against the incumbent), cheap to copy, printable in log lines,
/// and it must know its own representable extremes. These extremes are what
/// gives a meaning to the *initial primal bound*: before any feasible
/// solution is known, the incumbent value of a maximization is the smallest
/// representable objective, and that of a minimization is the largest one.
///
/// # Example
/// ```
/// # use arboretum::Objective;
/// assert_eq!(0,         <usize as Objective>::WORST_MAXIMIZE);
/// assert_eq!(usize::MAX, <usize as Objective>::WORST_MINIMIZE);
/// ```
pub trait Objective: Copy + Ord + Debug + Display {
    /// The worst value a maximization problem can start from: the smallest
    /// representable objective.
    const WORST_MAXIMIZE: Self;
    /// The worst value a minimization problem can start from: the largest
    /// representable objective.
    const WORST_MINIMIZE: Self;
}

/// Implements `Objective` for the primitive integer types.
macro_rules! objective {
    ($($t:ty),*) => {
        $(
            impl Objective for $t {
                const WORST_MAXIMIZE: Self = <$t>::MIN;
                const WORST_MINIMIZE: Self = <$t>::MAX;
            }
        )*
    };
}

objective!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod tests {
    use crate::Objective;

    #[test]
    fn the_worst_maximization_objective_is_the_representable_minimum() {
        assert_eq!(u32::MIN, <u32 as Objective>::WORST_MAXIMIZE);
        assert_eq!(usize::MIN, <usize as Objective>::WORST_MAXIMIZE);
        assert_eq!(isize::MIN, <isize as Objective>::WORST_MAXIMIZE);
    }

    #[test]
    fn the_worst_minimization_objective_is_the_representable_maximum() {
        assert_eq!(u32::MAX, <u32 as Objective>::WORST_MINIMIZE);
        assert_eq!(usize::MAX, <usize as Objective>::WORST_MINIMIZE);
        assert_eq!(isize::MAX, <isize as Objective>::WORST_MINIMIZE);
    }
}

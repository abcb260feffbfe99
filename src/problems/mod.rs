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

//! The concrete problems shipping with the library. They exercise the two
//! search drivers end to end and double as usage examples: `maxclique` shows
//! a static-branching partition-pointer state, `coloring` a merge/difference
//! state which composes with the maximum clique solver.

use std::str::FromStr;

pub mod coloring;
pub mod maxclique;

/// The tree search mode selected on the command line of the problem
/// front-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Use the recursive driver.
    Recursion,
    /// Use the iterative (explicit stack) driver.
    Backtrack,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Mode, String> {
        match s {
            "recursion" => Ok(Mode::Recursion),
            "backtrack" => Ok(Mode::Backtrack),
            other => Err(format!("unrecognised mode '{}'", other)),
        }
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

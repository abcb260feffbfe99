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

//! The reversible search state of the vertex colouring problem, expressed as
//! a clique cover search.
//!
//! The trick is to search for a colouring *of the complement relation*
//! implicitly: a colour class is witnessed by merging its vertices into one
//! representative, and a growing clique of representatives gives the lower
//! bound. Branching picks a clique vertex `u` and an unassigned vertex `v`
//! which may legally share a colour, and either *merges* v into u (they get
//! the same colour) or asserts their *difference* (v gains u as a forbidden
//! colour).

use crate::problems::maxclique;
use crate::{Solution, State, UndirectedGraph};

/// The assignment marker of a vertex that is neither in the clique nor
/// merged into a clique vertex yet.
pub const NON_CLIQUE: usize = usize::MAX;

/// A vertex colouring solution; it only carries the number of colours used,
/// which is the objective value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColoringSol {
    colors: usize,
}

impl Solution for ColoringSol {
    type Obj = usize;
    fn objective_value(&self) -> usize {
        self.colors
    }
}

/// The branching rule: clique vertex `u` and unassigned vertex `v` may share
/// a colour (the edge (u, v) is not in the graph). The first branch merges v
/// into u; the alternate asserts that their colours differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchChoice {
    pub u: usize,
    pub v: usize,
}

/// The undo information of a merge branch, computed *before* the state is
/// mutated. Both lists are only ever appended to during the merge, so the
/// whole branch is undone with pops, never with scans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergePlan {
    /// Unassigned vertices which gain `u` as a clique neighbour.
    make_neighbours_of_u: Vec<usize>,
    /// Unassigned vertices promoted to new clique vertices by this merge.
    add_to_clique: Vec<usize>,
}

/// The undo information of a difference branch. The branch is undone by
/// inspecting the state itself, so nothing needs to be recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DifferenceResult;

/// The clique cover state over a fixed graph on `n` vertices:
///
/// * `assignment[u] == u` -- u is a clique vertex (a colour representative);
/// * `assignment[u] == w` -- u is merged into the clique vertex w;
/// * `assignment[u] == NON_CLIQUE` -- u is not assigned yet.
///
/// For each unassigned vertex, `neighbours[u]` lists the clique vertices
/// adjacent to u: the colours u can *not* take. The state is a leaf when
/// every vertex is a clique vertex or merged into one, at which point the
/// clique size is the number of colours of the witnessed colouring. The
/// clique is kept *maximal* at all times: any vertex adjacent to every
/// clique vertex is promoted immediately, so `neighbours[u].len() <
/// clique_size` holds for every unassigned u.
#[derive(Clone)]
pub struct CliqueCoverState<'a> {
    graph: &'a UndirectedGraph,
    assignment: Vec<usize>,
    neighbours: Vec<Vec<usize>>,
    clique_size: usize,
    merge_count: usize,
}

impl<'a> CliqueCoverState<'a> {
    /// Creates the blank state: every vertex unassigned, no clique.
    pub fn new(graph: &'a UndirectedGraph) -> Self {
        CliqueCoverState {
            graph,
            assignment: vec![NON_CLIQUE; graph.vertices()],
            neighbours: vec![vec![]; graph.vertices()],
            clique_size: 0,
            merge_count: 0,
        }
    }

    /// Seeds the root: solves maximum clique on the graph, makes each clique
    /// member its own colour representative, and records, for every other
    /// vertex, which representatives it is adjacent to. The clique size is a
    /// valid lower bound on the chromatic number and a good skeleton to grow
    /// the cover from.
    pub fn initialise(&mut self) {
        assert!(self.assignment.iter().all(|&a| a == NON_CLIQUE));
        let clique = maxclique::solve_recursive(self.graph)
            .map(|solution| solution.vertices().to_vec())
            .unwrap_or_default();
        for &u in clique.iter() {
            self.assignment[u] = u;
        }
        self.clique_size = clique.len();
        for &u in clique.iter() {
            for &v in self.graph[u].iter() {
                if self.assignment[v] == NON_CLIQUE {
                    self.neighbours[v].push(u);
                }
            }
        }
        self.check_invariants();
    }

    /// Returns the number of colours currently committed to.
    pub fn clique_size(&self) -> usize {
        self.clique_size
    }

    /// Picks the branching pair: the unassigned vertex with the most clique
    /// neighbours (the most saturated one, DSATUR-like) and the first clique
    /// vertex whose colour that vertex may still take.
    pub fn branch_decision(&self) -> BranchChoice {
        let v = self.max_saturation_vertex();
        let u = self.merge_candidate(v);
        BranchChoice { u, v }
    }

    /// Returns the unassigned vertex with the most clique neighbours, ties
    /// broken towards the smallest vertex number.
    fn max_saturation_vertex(&self) -> usize {
        let mut best: Option<usize> = None;
        for (u, &assignment) in self.assignment.iter().enumerate() {
            if assignment == NON_CLIQUE {
                let better = match best {
                    None => true,
                    Some(b) => self.neighbours[u].len() > self.neighbours[b].len(),
                };
                if better {
                    best = Some(u);
                }
            }
        }
        best.expect("branching requires an unassigned vertex")
    }

    /// Returns the first clique vertex which is not a clique neighbour of
    /// `v`. One always exists: the clique-maximality invariant keeps
    /// `neighbours[v]` strictly smaller than the clique.
    fn merge_candidate(&self, v: usize) -> usize {
        let excluded = &self.neighbours[v];
        for (u, &assignment) in self.assignment.iter().enumerate() {
            if assignment == u && !excluded.contains(&u) {
                return u;
            }
        }
        unreachable!("vertex {} has every colour among its neighbours", v)
    }

    fn branch_choice_is_valid(&self, choice: &BranchChoice) -> bool {
        choice.u < self.assignment.len()
            && choice.v < self.assignment.len()
            && self.assignment[choice.u] == choice.u
            && self.assignment[choice.v] == NON_CLIQUE
            && !self.neighbours[choice.v].contains(&choice.u)
    }

    /// Computes the consequences of merging v into u, without mutating the
    /// state. Unassigned graph-neighbours of v which do not yet count u
    /// among their clique neighbours either gain it, or -- when u was the
    /// single colour they could still take -- become clique candidates. When
    /// several candidates arise they cannot all join the clique (only a
    /// pairwise adjacent subset can), so a maximum clique among them is
    /// promoted and the rest fall back to the gain-a-neighbour list.
    fn plan_merge(&self, choice: &BranchChoice) -> MergePlan {
        let mut plan = MergePlan::default();
        for &w in self.graph[choice.v].iter() {
            if self.assignment[w] == NON_CLIQUE {
                let nw = &self.neighbours[w];
                if !nw.contains(&choice.u) {
                    if nw.len() == self.clique_size - 1 {
                        plan.add_to_clique.push(w);
                    } else {
                        plan.make_neighbours_of_u.push(w);
                    }
                }
            }
        }
        if plan.add_to_clique.len() > 1 {
            let (clique, rest) =
                maxclique::solve_subgraph(self.graph, std::mem::take(&mut plan.add_to_clique));
            plan.add_to_clique = clique;
            plan.make_neighbours_of_u.extend(rest);
        }
        plan
    }

    fn execute_merge(&mut self, choice: &BranchChoice, plan: &MergePlan) {
        self.assignment[choice.v] = choice.u;
        self.merge_count += 1;
        for &w in plan.make_neighbours_of_u.iter() {
            self.neighbours[w].push(choice.u);
        }
        // Vertex assignments must be updated before the clique neighbours,
        // so that the assignment[x] == NON_CLIQUE test below is consistent
        // with what its reverse will see on backtrack.
        self.clique_size += plan.add_to_clique.len();
        for &w in plan.add_to_clique.iter() {
            self.assignment[w] = w;
        }
        for &w in plan.add_to_clique.iter() {
            for &x in self.graph[w].iter() {
                if self.assignment[x] == NON_CLIQUE {
                    self.neighbours[x].push(w);
                }
            }
        }
        self.check_invariants();
    }

    /// Checks the structural invariants of the state; compiled away in
    /// release builds.
    pub fn check_invariants(&self) {
        #[cfg(debug_assertions)]
        {
            let mut expected_clique_size = 0;
            let mut expected_complete = true;
            for (u, &assignment) in self.assignment.iter().enumerate() {
                if assignment == NON_CLIQUE {
                    expected_complete = false;
                    for &w in self.neighbours[u].iter() {
                        debug_assert!(
                            self.assignment[w] == w,
                            "neighbour does not point to a clique vertex"
                        );
                    }
                } else if assignment == u {
                    expected_clique_size += 1;
                } else {
                    debug_assert!(
                        self.assignment[assignment] == assignment,
                        "merge vertex does not point to a clique vertex"
                    );
                }
                debug_assert!(
                    self.neighbours[u].len() < self.clique_size,
                    "clique is not maximal"
                );
            }
            debug_assert!(
                self.clique_size == expected_clique_size,
                "clique size value is incorrect"
            );
            debug_assert!(
                self.is_leaf() == expected_complete,
                "complete flag value is incorrect"
            );
        }
    }
}

impl State for CliqueCoverState<'_> {
    type Obj = usize;
    type Sol = ColoringSol;
    type Rule = BranchChoice;
    type First = MergePlan;
    type Second = DifferenceResult;

    fn is_feasible(&self) -> bool {
        true
    }

    fn is_leaf(&self) -> bool {
        self.clique_size + self.merge_count == self.assignment.len()
    }

    fn solution(&self) -> ColoringSol {
        ColoringSol {
            colors: self.clique_size,
        }
    }

    /// The committed colours themselves: the clique of representatives is a
    /// valid lower bound on any completion of this cover.
    fn dual_bound(&self) -> usize {
        self.clique_size
    }

    /// Merges v into the clique vertex u.
    fn branch(&mut self) -> (BranchChoice, MergePlan) {
        let choice = self.branch_decision();
        debug_assert!(self.branch_choice_is_valid(&choice));
        let plan = self.plan_merge(&choice);
        self.execute_merge(&choice, &plan);
        (choice, plan)
    }

    /// Asserts the colouring constraint that v must differ from u: either v
    /// just ran out of alternatives and becomes a clique vertex itself, or
    /// it simply gains u as a clique neighbour.
    fn branch_alternate(&mut self, choice: &BranchChoice) -> DifferenceResult {
        if self.neighbours[choice.v].len() == self.clique_size - 1 {
            self.assignment[choice.v] = choice.v;
            self.clique_size += 1;
            for &w in self.graph[choice.v].iter() {
                if self.assignment[w] == NON_CLIQUE {
                    self.neighbours[w].push(choice.v);
                }
            }
        } else {
            self.neighbours[choice.v].push(choice.u);
        }
        self.check_invariants();
        DifferenceResult
    }

    /// Reverts a call to `branch` with the same arguments. The neighbour
    /// lists of the promoted vertices are popped before any assignment
    /// reverts, so every loop here sees exactly the assignments its forward
    /// counterpart saw.
    fn backtrack(&mut self, choice: &BranchChoice, plan: &MergePlan) {
        for &w in plan.add_to_clique.iter() {
            for &x in self.graph[w].iter() {
                if self.assignment[x] == NON_CLIQUE {
                    self.neighbours[x].pop();
                }
            }
        }
        for &w in plan.add_to_clique.iter() {
            self.assignment[w] = NON_CLIQUE;
        }
        self.clique_size -= plan.add_to_clique.len();
        for &w in plan.make_neighbours_of_u.iter() {
            self.neighbours[w].pop();
        }
        self.assignment[choice.v] = NON_CLIQUE;
        self.merge_count -= 1;
        self.check_invariants();
    }

    /// Reverts a call to `branch_alternate` with the same arguments.
    fn backtrack_alternate(&mut self, choice: &BranchChoice, _result: &DifferenceResult) {
        if self.assignment[choice.v] == choice.v {
            self.assignment[choice.v] = NON_CLIQUE;
            self.clique_size -= 1;
            for &w in self.graph[choice.v].iter() {
                if self.assignment[w] == NON_CLIQUE {
                    self.neighbours[w].pop();
                }
            }
        } else {
            self.neighbours[choice.v].pop();
        }
        self.check_invariants();
    }
}

/// Structural equality on the cover only (the graph is fixed anyway).
impl PartialEq for CliqueCoverState<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.assignment == other.assignment
            && self.neighbours == other.neighbours
            && self.clique_size == other.clique_size
            && self.merge_count == other.merge_count
    }
}
impl Eq for CliqueCoverState<'_> {}

impl std::fmt::Debug for CliqueCoverState<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliqueCoverState")
            .field("assignment", &self.assignment)
            .field("neighbours", &self.neighbours)
            .field("clique_size", &self.clique_size)
            .field("merge_count", &self.merge_count)
            .finish()
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

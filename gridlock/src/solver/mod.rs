//! Exhaustive backtracking search
//!
//! Searches every grid assignment by:
//! 1. Taking the first category as the anchor
//! 2. For each remaining category in turn, trying every bijection between
//!    the anchor's items and that category's items
//! 3. Propagating each new link across the anchor item's whole row, so every
//!    item on the row agrees on every category assigned so far
//! 4. Evaluating all clues once every category is assigned
//!
//! Nothing is undone when a branch fails: the next bijection overwrites the
//! same link slots and re-runs propagation for the whole row. Slots for
//! categories not yet assigned on the current branch may hold stale links,
//! but they are overwritten before any clue is evaluated.

pub mod permutations;
pub mod timeout;

use crate::puzzle::{CategoryId, ItemId, Puzzle};
use crate::semantic::Clue;
use crate::solution::{SearchReport, SearchStats, Solution, SolveOutcome};
use crate::{GridlockError, GridlockResult, ResourceLimits};
use permutations::Bijections;
use timeout::TimeoutTracker;
use tracing::{debug, trace};

/// Whether to stop at the first solution or walk the whole search space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    FirstSolution,
    Exhaustive,
}

/// Find the first assignment that satisfies every clue.
///
/// Takes ownership of the puzzle: search mutates its links in place.
pub fn solve(
    puzzle: Puzzle,
    clues: &[Clue],
    limits: &ResourceLimits,
) -> GridlockResult<SolveOutcome> {
    let report = Solver::new(clues, limits, SearchMode::FirstSolution).run(puzzle)?;
    Ok(match report.first {
        Some(solution) => SolveOutcome::Solved(solution),
        None => SolveOutcome::NoSolution,
    })
}

/// Walk every assignment and count those that satisfy every clue
pub fn count_solutions(
    puzzle: Puzzle,
    clues: &[Clue],
    limits: &ResourceLimits,
) -> GridlockResult<SearchReport> {
    Solver::new(clues, limits, SearchMode::Exhaustive).run(puzzle)
}

/// Search state for a single call; built fresh every time
struct Solver<'a> {
    clues: &'a [Clue],
    limits: &'a ResourceLimits,
    mode: SearchMode,
    tracker: TimeoutTracker,
    assignments: u64,
    solutions: u64,
    first: Option<Puzzle>,
}

impl<'a> Solver<'a> {
    fn new(clues: &'a [Clue], limits: &'a ResourceLimits, mode: SearchMode) -> Self {
        Self {
            clues,
            limits,
            mode,
            tracker: TimeoutTracker::new(),
            assignments: 0,
            solutions: 0,
            first: None,
        }
    }

    fn run(mut self, mut puzzle: Puzzle) -> GridlockResult<SearchReport> {
        let categories: Vec<CategoryId> = puzzle.categories().iter().map(|c| c.id()).collect();
        let Some((&anchor, remaining)) = categories.split_first() else {
            return Err(GridlockError::InvalidPuzzle(
                "Puzzle has no categories".to_string(),
            ));
        };

        let anchor_items = puzzle.category_by_id(anchor).items().to_vec();
        debug!(
            categories = categories.len(),
            size = anchor_items.len(),
            clues = self.clues.len(),
            search_space = ?permutations::search_space(anchor_items.len(), categories.len()),
            mode = ?self.mode,
            "starting search"
        );

        puzzle.clear_links();
        let mut assigned = vec![anchor];
        self.search(&mut puzzle, &anchor_items, remaining, &mut assigned)?;

        let stats = SearchStats {
            assignments_explored: self.assignments,
            elapsed_ms: self.tracker.elapsed_ms(),
        };
        debug!(
            assignments = stats.assignments_explored,
            solutions = self.solutions,
            elapsed_ms = stats.elapsed_ms,
            "search finished"
        );

        Ok(SearchReport {
            solutions: self.solutions,
            first: self
                .first
                .take()
                .map(|solved| Solution::new(solved, stats.clone())),
            stats,
        })
    }

    /// Returns `Ok(true)` when the search should stop
    fn search(
        &mut self,
        puzzle: &mut Puzzle,
        anchor_items: &[ItemId],
        remaining: &[CategoryId],
        assigned: &mut Vec<CategoryId>,
    ) -> GridlockResult<bool> {
        self.tracker.check_timeout(self.limits)?;

        let Some((&category, rest)) = remaining.split_first() else {
            return self.visit_assignment(puzzle);
        };

        let targets = puzzle.category_by_id(category).items().to_vec();
        assigned.push(category);

        for bijection in Bijections::new(anchor_items.len()) {
            for (x, y) in bijection.pairs() {
                link_row(puzzle, anchor_items[x], targets[y], assigned);
            }
            if self.search(puzzle, anchor_items, rest, assigned)? {
                assigned.pop();
                return Ok(true);
            }
        }

        assigned.pop();
        Ok(false)
    }

    fn visit_assignment(&mut self, puzzle: &Puzzle) -> GridlockResult<bool> {
        self.assignments += 1;
        if let Some(max) = self.limits.max_assignments {
            if self.assignments > max {
                return Err(GridlockError::ResourceLimitExceeded {
                    limit_name: "max_assignments".to_string(),
                    limit_value: max.to_string(),
                    actual_value: self.assignments.to_string(),
                    suggestion: "Add clues, shrink the puzzle, or raise the limit".to_string(),
                });
            }
        }

        if !puzzle.is_solved(self.clues)? {
            trace!(assignment = self.assignments, "assignment rejected");
            return Ok(false);
        }

        self.solutions += 1;
        trace!(assignment = self.assignments, "assignment satisfies every clue");
        if self.first.is_none() {
            self.first = Some(puzzle.clone());
        }
        Ok(self.mode == SearchMode::FirstSolution)
    }
}

/// Link `anchor` to `target`, then make every item on the anchor's row
/// agree with the anchor on all categories assigned so far.
fn link_row(puzzle: &mut Puzzle, anchor: ItemId, target: ItemId, assigned: &[CategoryId]) {
    puzzle.set_link(anchor, target);
    for &category in assigned {
        let Some(member) = puzzle.item_by_id(anchor).link(category) else {
            continue;
        };
        if member != anchor {
            puzzle.copy_links(anchor, member, assigned);
        }
    }
}

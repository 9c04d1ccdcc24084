use crate::puzzle::Puzzle;
use crate::GridlockResult;
use serde::Serialize;

/// Counters collected while searching
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Full grid assignments the clues were evaluated against
    pub assignments_explored: u64,
    pub elapsed_ms: u64,
}

/// A fully linked puzzle that satisfies every clue
#[derive(Debug, Clone)]
pub struct Solution {
    puzzle: Puzzle,
    stats: SearchStats,
}

impl Solution {
    pub(crate) fn new(puzzle: Puzzle, stats: SearchStats) -> Self {
        Self { puzzle, stats }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Name of the item that `category.item` is linked to in `other`
    pub fn linked(&self, category: &str, item: &str, other: &str) -> GridlockResult<&str> {
        let item = self.puzzle.item_id(category, item)?;
        let other = self.puzzle.category_id(other)?;
        let target = self.puzzle.linked_item(item, other)?;
        Ok(self.puzzle.item_by_id(target).name())
    }

    /// One row per item of `category`, one column per category in insertion order
    pub fn rows(&self, category: &str) -> GridlockResult<Vec<Vec<String>>> {
        let category = self.puzzle.category(category)?;
        category
            .items()
            .iter()
            .map(|&item| {
                self.puzzle
                    .categories()
                    .iter()
                    .map(|column| {
                        self.puzzle
                            .linked_item(item, column.id())
                            .map(|target| self.puzzle.item_by_id(target).name().to_string())
                    })
                    .collect::<GridlockResult<Vec<String>>>()
            })
            .collect()
    }

    /// The solution grid keyed by the first category
    pub fn table(&self) -> GridlockResult<SolutionTable> {
        let categories: Vec<String> = self
            .puzzle
            .categories()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        let rows = match categories.first() {
            Some(anchor) => self.rows(anchor)?,
            None => Vec::new(),
        };
        Ok(SolutionTable { categories, rows })
    }
}

/// Printable view of a solution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionTable {
    pub categories: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Result of a search: a solution, or proof by exhaustion that none exists
#[derive(Debug, Clone)]
pub enum SolveOutcome {
    Solved(Solution),
    NoSolution,
}

impl SolveOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved(_))
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SolveOutcome::Solved(solution) => Some(solution),
            SolveOutcome::NoSolution => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            SolveOutcome::Solved(solution) => Some(solution),
            SolveOutcome::NoSolution => None,
        }
    }
}

/// Result of walking the whole search space
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub solutions: u64,
    pub stats: SearchStats,
    /// First solution in enumeration order
    pub first: Option<Solution>,
}

impl SearchReport {
    /// Exactly one assignment satisfies the clues
    pub fn is_unique(&self) -> bool {
        self.solutions == 1
    }
}

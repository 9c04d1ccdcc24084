use crate::semantic::Clue;
use crate::solution::{SearchReport, SolveOutcome};
use crate::{parse_clue, solver, GridlockError, GridlockResult, Puzzle, ResourceLimits, Validator};
use tracing::debug;

/// The Gridlock solving engine.
///
/// Holds a validated puzzle and the clues added to it. Clues are parsed and
/// checked against the puzzle when added, so `solve` only fails on contract
/// violations or resource limits.
#[derive(Debug)]
pub struct Engine {
    puzzle: Puzzle,
    clues: Vec<Clue>,
    validator: Validator,
    limits: ResourceLimits,
}

impl Engine {
    pub fn new(puzzle: Puzzle) -> GridlockResult<Self> {
        Self::with_limits(puzzle, ResourceLimits::default())
    }

    /// Create an engine with custom resource limits
    pub fn with_limits(puzzle: Puzzle, limits: ResourceLimits) -> GridlockResult<Self> {
        let validator = Validator;
        validator.validate_puzzle(&puzzle)?;
        validator.validate_limits(&puzzle, &limits)?;
        Ok(Self {
            puzzle,
            clues: Vec::new(),
            validator,
            limits,
        })
    }

    /// Get the current resource limits
    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// Parse a clue and check its references against the puzzle
    pub fn add_clue(&mut self, text: &str, required_true: usize) -> GridlockResult<()> {
        let clue = self.prepare_clue(text, required_true)?;
        debug!(clue = %clue, "added clue");
        self.clues.push(clue);
        Ok(())
    }

    /// Add several clues at once.
    ///
    /// Every clue is parsed before any is added; if any fail, none are
    /// added and all failures are reported together.
    pub fn add_clues<'c, I>(&mut self, clues: I) -> GridlockResult<()>
    where
        I: IntoIterator<Item = (&'c str, usize)>,
    {
        let mut parsed = Vec::new();
        let mut errors = Vec::new();
        for (text, required_true) in clues {
            match self.prepare_clue(text, required_true) {
                Ok(clue) => parsed.push(clue),
                Err(e) => errors.push(e),
            }
        }

        match errors.len() {
            0 => {
                debug!(count = parsed.len(), "added clues");
                self.clues.extend(parsed);
                Ok(())
            }
            1 => Err(errors.remove(0)),
            _ => Err(GridlockError::MultipleErrors(errors)),
        }
    }

    fn prepare_clue(&self, text: &str, required_true: usize) -> GridlockResult<Clue> {
        let clue = parse_clue(text, required_true, &self.limits)?;
        self.validator.validate_clue(&clue, &self.puzzle)?;
        Ok(clue)
    }

    /// Search for the first assignment that satisfies every clue.
    ///
    /// The search runs on its own copy of the puzzle; the engine's puzzle
    /// keeps its setup links.
    pub fn solve(&self) -> GridlockResult<SolveOutcome> {
        solver::solve(self.puzzle.clone(), &self.clues, &self.limits)
    }

    /// Walk the whole search space and count every solution
    pub fn count_solutions(&self) -> GridlockResult<SearchReport> {
        solver::count_solutions(self.puzzle.clone(), &self.clues, &self.limits)
    }
}

//! # Gridlock Engine
//!
//! **Logic grid puzzles, solved by brute force**
//!
//! A logic grid puzzle has N categories of N items each. The answer links
//! every item in one category to exactly one item in every other category.
//! Gridlock takes the categories plus a list of clues written in a small
//! clue language and searches every assignment until one satisfies them all.
//!
//! ## Quick Start
//!
//! ```rust
//! use gridlock::{Engine, GridlockResult, Puzzle, SolveOutcome};
//!
//! fn main() -> GridlockResult<()> {
//!     let puzzle = Puzzle::from_categories([
//!         ("I", vec!["a", "b", "c"]),
//!         ("J", vec!["d", "e", "f"]),
//!         ("K", vec!["g", "h", "i"]),
//!     ])?;
//!
//!     let mut engine = Engine::new(puzzle)?;
//!     engine.add_clue("I.a=J.e", 1)?;
//!     engine.add_clue("J.d!=I.b", 1)?;
//!     engine.add_clue("I.a=K.g", 1)?;
//!     engine.add_clue("J.f=K.i", 1)?;
//!
//!     match engine.solve()? {
//!         SolveOutcome::Solved(solution) => {
//!             assert_eq!(solution.linked("I", "b", "K")?, "i");
//!         }
//!         SolveOutcome::NoSolution => unreachable!(),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Clue language
//!
//! A clue is one or more sub-tests separated by commas, plus the number of
//! sub-tests that must hold. Each sub-test is `left COMPARATOR right`:
//!
//! - `I.a = J.e`: item `a` of `I` is linked to item `e` of `J`
//! - `J.d != I.b`: it is not
//! - `team.oddballs.score # == color.lime.score # +12`: follow links into
//!   `score`, read both item names as numbers, then compare
//!
//! The comparators `=` and `!=` look up the left item's link in the right
//! operand's category. Swapping the operands of `=` changes which link is
//! read, so write the item whose link you mean on the left.

pub mod ast;
pub mod definition;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod puzzle;
pub mod resource_limits;
pub mod semantic;
pub mod solution;
pub mod solver;
pub mod validator;

pub use ast::Span;
pub use definition::{CategoryDefinition, ClueDefinition, PuzzleDefinition};
pub use engine::Engine;
pub use error::{ErrorDetails, GridlockError};
pub use evaluator::Evaluator;
pub use parser::parse_clue;
pub use puzzle::{Category, CategoryId, Item, ItemId, Puzzle};
pub use resource_limits::ResourceLimits;
pub use semantic::*;
pub use solution::{SearchReport, SearchStats, Solution, SolutionTable, SolveOutcome};
pub use validator::Validator;

/// Result type for Gridlock operations
pub type GridlockResult<T> = Result<T, GridlockError>;

#[cfg(test)]
mod tests;

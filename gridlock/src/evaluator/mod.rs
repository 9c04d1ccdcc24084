//! Clue evaluation
//!
//! Evaluates a parsed clue against a puzzle's current links by:
//! 1. Resolving both operand paths of every sub-test to items
//! 2. Applying the link test (`=`, `!=`) or the operation chains and value
//!    comparison (`==`, `<`, `>`, `<=`, `>=`)
//! 3. Counting true sub-tests against the clue's required count
//!
//! Evaluation never mutates the puzzle, so repeated calls on the same links
//! return the same answer.

pub mod operations;
pub mod resolve;

use crate::ast::Span;
use crate::puzzle::{ItemId, Puzzle};
use crate::semantic::{Clue, Comparator, Operand, Test};
use crate::{GridlockError, GridlockResult};
use resolve::{resolve, Referent};

/// Evaluates clues against a puzzle
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// True when exactly `clue.required_true` sub-tests hold.
    ///
    /// Stops early once more sub-tests are true than required.
    pub fn evaluate(&self, clue: &Clue, puzzle: &Puzzle) -> GridlockResult<bool> {
        let mut true_count = 0;
        for test in &clue.tests {
            if self.evaluate_test(test, clue, puzzle)? {
                true_count += 1;
                if true_count > clue.required_true {
                    return Ok(false);
                }
            }
        }
        Ok(true_count == clue.required_true)
    }

    /// Evaluate a single sub-test
    pub fn evaluate_test(&self, test: &Test, clue: &Clue, puzzle: &Puzzle) -> GridlockResult<bool> {
        let left = self.resolve_item(&test.left, clue, puzzle)?;

        match test.comparator {
            Comparator::Is => self.is_linked(left, &test.right, puzzle),
            Comparator::IsNot => self.is_linked(left, &test.right, puzzle).map(|linked| !linked),
            comparator => {
                let right = self.resolve_item(&test.right, clue, puzzle)?;
                let left_value = operations::apply_operations(
                    puzzle.item_by_id(left).name(),
                    &test.left.operations,
                )?;
                let right_value = operations::apply_operations(
                    puzzle.item_by_id(right).name(),
                    &test.right.operations,
                )?;
                operations::compare_values(&left_value, comparator, &right_value)
            }
        }
    }

    /// Is `item` linked, in the right operand's category, to the right operand?
    ///
    /// The lookup goes through the left item's link, so `I.a = J.e` and
    /// `J.e = I.a` only agree once links are symmetric.
    fn is_linked(&self, item: ItemId, right: &Operand, puzzle: &Puzzle) -> GridlockResult<bool> {
        match resolve(&right.path, puzzle)? {
            Referent::Item(target) => {
                let category = puzzle.item_by_id(target).category();
                Ok(puzzle.linked_item(item, category)? == target)
            }
            Referent::Category(category) => Ok(puzzle.item_by_id(item).link(category).is_some()),
        }
    }

    fn resolve_item(
        &self,
        operand: &Operand,
        clue: &Clue,
        puzzle: &Puzzle,
    ) -> GridlockResult<ItemId> {
        match resolve(&operand.path, puzzle)? {
            Referent::Item(item) => Ok(item),
            Referent::Category(_) => Err(GridlockError::malformed_clue(
                format!("'{}' names a category where an item is needed", operand.path),
                operand.span.unwrap_or_else(|| Span::whole(&clue.source)),
                &clue.source,
            )),
        }
    }
}

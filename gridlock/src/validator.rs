//! Setup-time validation
//!
//! Catches puzzle shape problems and clue references to categories or items
//! that do not exist, so that search never starts on input it cannot
//! evaluate.

use crate::semantic::{Clue, OperandPath};
use crate::{GridlockError, GridlockResult, Puzzle, ResourceLimits};

#[derive(Debug, Default, Clone, Copy)]
pub struct Validator;

impl Validator {
    /// Every category must be non-empty and hold the same number of items
    pub fn validate_puzzle(&self, puzzle: &Puzzle) -> GridlockResult<()> {
        let Some(first) = puzzle.categories().first() else {
            return Err(GridlockError::InvalidPuzzle(
                "Puzzle has no categories".to_string(),
            ));
        };

        let size = first.len();
        for category in puzzle.categories() {
            if category.is_empty() {
                return Err(GridlockError::InvalidPuzzle(format!(
                    "Category '{}' has no items",
                    category.name()
                )));
            }
            if category.len() != size {
                return Err(GridlockError::InvalidPuzzle(format!(
                    "Category '{}' has {} items but '{}' has {}; all categories need the same number",
                    category.name(),
                    category.len(),
                    first.name(),
                    size
                )));
            }
        }
        Ok(())
    }

    pub fn validate_limits(&self, puzzle: &Puzzle, limits: &ResourceLimits) -> GridlockResult<()> {
        let categories = puzzle.categories().len();
        if categories > limits.max_categories {
            return Err(GridlockError::ResourceLimitExceeded {
                limit_name: "max_categories".to_string(),
                limit_value: limits.max_categories.to_string(),
                actual_value: categories.to_string(),
                suggestion: "Reduce the number of categories".to_string(),
            });
        }

        let size = puzzle.size();
        if size > limits.max_items_per_category {
            return Err(GridlockError::ResourceLimitExceeded {
                limit_name: "max_items_per_category".to_string(),
                limit_value: limits.max_items_per_category.to_string(),
                actual_value: size.to_string(),
                suggestion: "Reduce the number of items per category".to_string(),
            });
        }
        Ok(())
    }

    /// Every category and item a clue names must exist in `puzzle`
    pub fn validate_clue(&self, clue: &Clue, puzzle: &Puzzle) -> GridlockResult<()> {
        let mut errors = Vec::new();
        for test in &clue.tests {
            for operand in [&test.left, &test.right] {
                if let Err(e) = self.validate_path(&operand.path, puzzle) {
                    errors.push(e);
                }
            }
        }

        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(GridlockError::MultipleErrors(errors)),
        }
    }

    fn validate_path(&self, path: &OperandPath, puzzle: &Puzzle) -> GridlockResult<()> {
        match path {
            OperandPath::Category(category) => puzzle.category_id(category).map(|_| ()),
            OperandPath::Item { category, item } => puzzle.item_id(category, item).map(|_| ()),
            OperandPath::Linked {
                category,
                item,
                via,
            } => {
                puzzle.item_id(category, item)?;
                puzzle.category_id(via).map(|_| ())
            }
        }
    }
}

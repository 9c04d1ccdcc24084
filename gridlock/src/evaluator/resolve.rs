//! Operand path resolution
//!
//! Turns `category`, `category.item` and `category.item.other` into arena
//! ids against the puzzle's current links.

use crate::puzzle::{CategoryId, ItemId, Puzzle};
use crate::semantic::OperandPath;
use crate::GridlockResult;

/// What an operand path points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Referent {
    Item(ItemId),
    Category(CategoryId),
}

pub fn resolve(path: &OperandPath, puzzle: &Puzzle) -> GridlockResult<Referent> {
    match path {
        OperandPath::Category(category) => puzzle.category_id(category).map(Referent::Category),
        OperandPath::Item { category, item } => puzzle.item_id(category, item).map(Referent::Item),
        OperandPath::Linked {
            category,
            item,
            via,
        } => {
            let start = puzzle.item_id(category, item)?;
            let via = puzzle.category_id(via)?;
            puzzle.linked_item(start, via).map(Referent::Item)
        }
    }
}

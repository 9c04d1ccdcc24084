//! Puzzle definitions as data
//!
//! ```json
//! {
//!   "categories": [
//!     { "name": "I", "items": ["a", "b", "c"] },
//!     { "name": "J", "items": ["d", "e", "f"] }
//!   ],
//!   "clues": [
//!     { "clue": "I.a=J.e" },
//!     { "clue": "I.a=J.d,I.b=J.d", "count": 1 }
//!   ]
//! }
//! ```

use crate::{Engine, GridlockError, GridlockResult, Puzzle, ResourceLimits};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleDefinition {
    pub categories: Vec<CategoryDefinition>,
    #[serde(default)]
    pub clues: Vec<ClueDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueDefinition {
    pub clue: String,
    /// Number of sub-tests that must hold
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_count() -> usize {
    1
}

impl PuzzleDefinition {
    pub fn from_json(json: &str) -> GridlockResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            GridlockError::InvalidPuzzle(format!("Could not read puzzle definition: {}", e))
        })
    }

    pub fn build_puzzle(&self) -> GridlockResult<Puzzle> {
        Puzzle::from_categories(
            self.categories
                .iter()
                .map(|c| (c.name.clone(), c.items.clone())),
        )
    }

    /// Build the puzzle and load every clue into a new engine
    pub fn into_engine(self, limits: ResourceLimits) -> GridlockResult<Engine> {
        let mut engine = Engine::with_limits(self.build_puzzle()?, limits)?;
        engine.add_clues(self.clues.iter().map(|c| (c.clue.as_str(), c.count)))?;
        Ok(engine)
    }

    pub fn item_count(&self) -> usize {
        self.categories.first().map_or(0, |c| c.items.len())
    }
}

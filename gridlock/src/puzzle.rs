//! Puzzle data model
//!
//! Items live in a single arena owned by the [`Puzzle`] and are addressed by
//! [`ItemId`]. Every item keeps one link slot per category, indexed by
//! [`CategoryId`]; the slot for its own category always points at itself.
//! Structure (categories and items) is fixed once set up, only link slots
//! change while searching.

use crate::evaluator::Evaluator;
use crate::semantic::Clue;
use crate::{GridlockError, GridlockResult};
use std::collections::HashMap;
use std::fmt;

/// Stable index of a category within its puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(usize);

impl CategoryId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Stable index of an item within its puzzle's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(usize);

impl ItemId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    category: CategoryId,
    links: Vec<Option<ItemId>>,
}

impl Item {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    /// The item this one is linked to in `category`, if any
    pub fn link(&self, category: CategoryId) -> Option<ItemId> {
        self.links.get(category.0).copied().flatten()
    }

    /// Link slots indexed by category
    pub fn links(&self) -> &[Option<ItemId>] {
        &self.links
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    id: CategoryId,
    items: Vec<ItemId>,
    by_name: HashMap<String, ItemId>,
}

impl Category {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    /// Items in insertion order
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn find(&self, name: &str) -> Option<ItemId> {
        self.by_name.get(name).copied()
    }
}

/// A logic grid puzzle: categories of items plus the links between them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Puzzle {
    categories: Vec<Category>,
    items: Vec<Item>,
    by_name: HashMap<String, CategoryId>,
}

impl Puzzle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a puzzle from `(category, items)` pairs and validate its shape.
    ///
    /// Every category must hold the same number of items, and names must be
    /// unique within their scope.
    pub fn from_categories<I, C, J, S>(categories: I) -> GridlockResult<Self>
    where
        I: IntoIterator<Item = (C, J)>,
        C: Into<String>,
        J: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut puzzle = Self::new();
        for (category, items) in categories {
            let category = category.into();
            puzzle.add_category(category.clone())?;
            for item in items {
                puzzle.add_item(&category, item)?;
            }
        }
        crate::Validator.validate_puzzle(&puzzle)?;
        Ok(puzzle)
    }

    pub fn add_category(&mut self, name: impl Into<String>) -> GridlockResult<CategoryId> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(GridlockError::InvalidPuzzle(format!(
                "Duplicate category name '{}'",
                name
            )));
        }

        let id = CategoryId(self.categories.len());
        for item in &mut self.items {
            item.links.push(None);
        }
        self.by_name.insert(name.clone(), id);
        self.categories.push(Category {
            name,
            id,
            items: Vec::new(),
            by_name: HashMap::new(),
        });
        Ok(id)
    }

    /// Add an item to an existing category, seeded with its self-link
    pub fn add_item(&mut self, category: &str, name: impl Into<String>) -> GridlockResult<ItemId> {
        let category_id = self.category_id(category)?;
        let name = name.into();
        if self.categories[category_id.0].find(&name).is_some() {
            return Err(GridlockError::InvalidPuzzle(format!(
                "Duplicate item name '{}' in category '{}'",
                name, category
            )));
        }

        let id = ItemId(self.items.len());
        let mut links = vec![None; self.categories.len()];
        links[category_id.0] = Some(id);
        self.items.push(Item {
            name: name.clone(),
            category: category_id,
            links,
        });

        let category = &mut self.categories[category_id.0];
        category.items.push(id);
        category.by_name.insert(name, id);
        Ok(id)
    }

    /// Categories in insertion order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> GridlockResult<&Category> {
        self.category_id(name).map(|id| &self.categories[id.0])
    }

    pub fn category_id(&self, name: &str) -> GridlockResult<CategoryId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| GridlockError::UnknownCategory(name.to_string()))
    }

    pub fn category_by_id(&self, id: CategoryId) -> &Category {
        &self.categories[id.0]
    }

    pub fn item(&self, category: &str, name: &str) -> GridlockResult<&Item> {
        self.item_id(category, name).map(|id| &self.items[id.0])
    }

    pub fn item_id(&self, category: &str, name: &str) -> GridlockResult<ItemId> {
        let category_id = self.category_id(category)?;
        self.find_item(category_id, name)
    }

    pub fn find_item(&self, category: CategoryId, name: &str) -> GridlockResult<ItemId> {
        let category = &self.categories[category.0];
        category.find(name).ok_or_else(|| GridlockError::UnknownItem {
            category: category.name.clone(),
            item: name.to_string(),
        })
    }

    pub fn item_by_id(&self, id: ItemId) -> &Item {
        &self.items[id.0]
    }

    /// Number of items per category (taken from the first category)
    pub fn size(&self) -> usize {
        self.categories.first().map_or(0, Category::len)
    }

    /// Follow `item`'s link into `category`
    pub fn linked_item(&self, item: ItemId, category: CategoryId) -> GridlockResult<ItemId> {
        let source = &self.items[item.0];
        source.link(category).ok_or_else(|| GridlockError::BrokenLink {
            category: self.categories[source.category.0].name.clone(),
            item: source.name.clone(),
            target: self.categories[category.0].name.clone(),
        })
    }

    /// Link two items to each other
    pub fn set_link(&mut self, item: ItemId, target: ItemId) {
        let item_category = self.items[item.0].category;
        let target_category = self.items[target.0].category;
        self.items[item.0].links[target_category.0] = Some(target);
        self.items[target.0].links[item_category.0] = Some(item);
    }

    /// Copy `from`'s links for the given categories onto `to`
    pub(crate) fn copy_links(&mut self, from: ItemId, to: ItemId, categories: &[CategoryId]) {
        for category in categories {
            let link = self.items[from.0].links[category.0];
            self.items[to.0].links[category.0] = link;
        }
    }

    /// Drop every link except each item's self-link
    pub fn clear_links(&mut self) {
        for (index, item) in self.items.iter_mut().enumerate() {
            item.links.iter_mut().for_each(|link| *link = None);
            item.links[item.category.0] = Some(ItemId(index));
        }
    }

    /// Every item has a link into every category
    pub fn is_complete(&self) -> bool {
        self.items
            .iter()
            .all(|item| item.links.iter().all(Option::is_some))
    }

    /// Links are symmetric: if A links to B in B's category, B links back to
    /// A in A's category. Links may be missing, but never one-sided.
    pub fn is_consistent(&self) -> bool {
        self.items.iter().enumerate().all(|(index, item)| {
            item.links.iter().flatten().all(|target| {
                self.items[target.0].links[item.category.0] == Some(ItemId(index))
            })
        })
    }

    /// Check all clues against the current links; every clue must hold
    pub fn is_solved(&self, clues: &[Clue]) -> GridlockResult<bool> {
        let evaluator = Evaluator::new();
        for clue in clues {
            if !evaluator.evaluate(clue, self)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl fmt::Display for Puzzle {
    /// One line per item of the first category, `a : e : g`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(anchor) = self.categories.first() else {
            return Ok(());
        };
        for item_id in &anchor.items {
            let item = &self.items[item_id.0];
            let names: Vec<&str> = item
                .links
                .iter()
                .map(|link| link.map_or("?", |id| self.items[id.0].name.as_str()))
                .collect();
            writeln!(f, "{}", names.join(" : "))?;
        }
        Ok(())
    }
}

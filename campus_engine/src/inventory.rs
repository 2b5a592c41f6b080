//! Player inventory and the carrying-weight rules.

use std::collections::HashMap;

use crate::{Id, Item, ItemHolder};

pub use campus_data::MAX_WEIGHT_TO_CARRY;

/// Total mass of a collection of items, saturating at `u32::MAX`.
pub fn current_weight<'a>(items: impl IntoIterator<Item = &'a Item>) -> u32 {
    items.into_iter().fold(0_u32, |total, item| total.saturating_add(item.mass))
}

/// Items carried by the player, in pickup order, with a weight cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    pub items: Vec<Id>,
    pub max_weight: u32,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            max_weight: MAX_WEIGHT_TO_CARRY,
        }
    }
}

impl Inventory {
    pub fn new(max_weight: u32) -> Self {
        Self {
            items: Vec::new(),
            max_weight,
        }
    }

    /// Resolve carried ids against the item catalog, skipping unknown ids.
    pub fn resolve<'a>(&'a self, catalog: &'a HashMap<Id, Item>) -> impl Iterator<Item = &'a Item> + 'a {
        self.items.iter().filter_map(|id| catalog.get(id))
    }

    pub fn weight(&self, catalog: &HashMap<Id, Item>) -> u32 {
        current_weight(self.resolve(catalog))
    }

    /// True if `item` can be added without going over `max_weight`.
    pub fn can_accept(&self, catalog: &HashMap<Id, Item>, item: &Item) -> bool {
        self.weight(catalog)
            .checked_add(item.mass)
            .is_some_and(|total| total <= self.max_weight)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemHolder for Inventory {
    fn add_item(&mut self, item_id: Id) {
        self.items.push(item_id);
    }

    fn remove_item(&mut self, item_id: &str) {
        self.items.retain(|id| id != item_id);
    }

    fn contains_item(&self, item_id: &str) -> bool {
        self.items.iter().any(|id| id == item_id)
    }
}

//! Items and the things that hold them.

use crate::Id;

/// Something the player can carry. Where it is lies with its holder: a room's
/// contents or the player's inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: Id,
    pub name: String,
    /// Mass in kilograms.
    pub mass: u32,
}

/// Anything that keeps an ordered list of item ids.
pub trait ItemHolder {
    fn add_item(&mut self, item_id: Id);
    fn remove_item(&mut self, item_id: &str);
    fn contains_item(&self, item_id: &str) -> bool;
}

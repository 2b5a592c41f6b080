//! Player -- the single adventurer wandering the campus.
use crate::Id;
use crate::inventory::Inventory;

#[derive(Debug, Clone, Default)]
pub struct Player {
    /// Id of the room the player is standing in.
    pub location: Id,
    pub inventory: Inventory,
}

impl Player {
    pub fn new(start_room: impl Into<Id>, max_weight: u32) -> Self {
        Self {
            location: start_room.into(),
            inventory: Inventory::new(max_weight),
        }
    }
}

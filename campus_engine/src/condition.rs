//! World-state predicates.
//!
//! A [`Condition`] is a pure check over the current world. The same type
//! drives flag rules, room overlays and the win predicate.

use crate::{CampusWorld, Id, ItemHolder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    FlagSet { flag: String },
    FlagUnset { flag: String },
    ItemInRoom { item: Id, room: Id },
    PlayerHasItem { item: Id },
    PlayerMissingItem { item: Id },
    PlayerInRoom { room: Id },
}

impl Condition {
    /// Returns true if this condition currently holds.
    pub fn holds(&self, world: &CampusWorld) -> bool {
        match self {
            Condition::FlagSet { flag } => world.flags.contains(flag),
            Condition::FlagUnset { flag } => !world.flags.contains(flag),
            Condition::ItemInRoom { item, room } => {
                world.rooms.get(room).is_some_and(|r| r.contains_item(item))
            },
            Condition::PlayerHasItem { item } => world.player.inventory.contains_item(item),
            Condition::PlayerMissingItem { item } => !world.player.inventory.contains_item(item),
            Condition::PlayerInRoom { room } => world.player.location == *room,
        }
    }
}

/// True when every condition holds (vacuously true for an empty list).
pub fn all_hold(conditions: &[Condition], world: &CampusWorld) -> bool {
    conditions.iter().all(|cond| cond.holds(world))
}

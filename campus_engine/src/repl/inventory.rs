//! `repl::inventory` module
//!
//! Handlers for commands that move items between the current room and the
//! player's inventory.

use crate::view::{View, ViewItem};
use crate::{ActionError, CampusWorld, ItemHolder};

use anyhow::{Result, anyhow};
use log::info;

/// Move an item from the current room into the inventory.
///
/// The item stays where it is unless it is in the room and light enough to
/// carry; the room and inventory are only touched once both checks pass.
///
/// # Errors
/// - `ItemNotHere` if the room has no item with that id
/// - `OverWeight` if carrying it would exceed the weight limit
pub fn take_item(world: &mut CampusWorld, item_id: &str) -> Result<(), ActionError> {
    if !world.player_room_ref()?.contains_item(item_id) {
        return Err(ActionError::ItemNotHere);
    }
    let item = world
        .items
        .get(item_id)
        .ok_or_else(|| anyhow!("item ({item_id}) is in a room but not in the item catalog"))?;
    if !world.player.inventory.can_accept(&world.items, item) {
        return Err(ActionError::OverWeight);
    }

    world.player_room_mut()?.remove_item(item_id);
    world.player.inventory.add_item(item_id.to_string());
    Ok(())
}

/// Move an item from the inventory into the current room. Never fails on weight.
///
/// # Errors
/// - `ItemNotCarried` if the player isn't holding an item with that id
pub fn drop_item(world: &mut CampusWorld, item_id: &str) -> Result<(), ActionError> {
    if !world.player.inventory.contains_item(item_id) {
        return Err(ActionError::ItemNotCarried);
    }
    let room = world.player_room_mut()?;
    room.add_item(item_id.to_string());
    world.player.inventory.remove_item(item_id);
    Ok(())
}

/// Removes an item from current room and adds it to inventory.
///
/// # Errors
/// Only for inconsistent world data; ordinary failures are reported to the player.
pub fn take_handler(world: &mut CampusWorld, view: &mut View, item_id: &str) -> Result<()> {
    match take_item(world, item_id) {
        Ok(()) => {
            info!(
                "player took '{item_id}' in {} (now carrying {} kg)",
                world.player.location,
                world.player.inventory.weight(&world.items)
            );
            Ok(())
        },
        Err(err) => {
            info!("player failed to take '{item_id}': {err}");
            super::report(view, err)
        },
    }
}

/// Drops an item from inventory in the current room.
///
/// # Errors
/// Only for inconsistent world data; ordinary failures are reported to the player.
pub fn drop_handler(world: &mut CampusWorld, view: &mut View, item_id: &str) -> Result<()> {
    match drop_item(world, item_id) {
        Ok(()) => {
            info!("player dropped '{item_id}' in {}", world.player.location);
            Ok(())
        },
        Err(err) => {
            info!("player failed to drop '{item_id}': {err}");
            super::report(view, err)
        },
    }
}

/// Push the player's inventory and carried weight.
pub fn show_inventory(world: &CampusWorld, view: &mut View) {
    let inventory = &world.player.inventory;
    view.push(ViewItem::Inventory {
        items: inventory.resolve(&world.items).map(|item| item.name.clone()).collect(),
        weight: inventory.weight(&world.items),
    });
}

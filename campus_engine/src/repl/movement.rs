//! `repl::movement` module
//!
//! Handlers that change the player's location: ordinary moves through an
//! exit, and the room-entry guard that runs at the start of every turn.

use crate::view::{View, ViewItem};
use crate::{ActionError, CampusWorld, Id, ItemHolder};

use anyhow::{Result, bail};
use log::{info, warn};

/// Move the player through the exit labeled `direction`.
///
/// Returns the id of the room the player ends up in. Entry rules are not
/// checked here; see [`check_room_entry`].
///
/// # Errors
/// - `InvalidExit` if the current room has no such exit (player stays put)
pub fn move_player(world: &mut CampusWorld, direction: &str) -> Result<Id, ActionError> {
    let destination = world
        .player_room_ref()?
        .exit(direction)
        .map(|exit| exit.to.clone())
        .ok_or(ActionError::InvalidExit)?;
    // exits are validated at load, but don't strand the player if one dangles
    world.room_ref(&destination)?;
    world.player.location = destination.clone();
    Ok(destination)
}

/// Move the player to a neighboring room and report the result.
///
/// # Errors
/// Only for inconsistent world data; a bad direction is reported to the player.
pub fn move_to_handler(world: &mut CampusWorld, view: &mut View, direction: &str) -> Result<()> {
    let leaving = world.player.location.clone();
    match move_player(world, direction) {
        Ok(destination) => {
            let room_name = world.room_ref(&destination)?.name.clone();
            info!("player moved {direction} from {leaving} to {room_name} ({destination})");
            view.push(ViewItem::Transition(format!("Moving into {room_name}.")));
            Ok(())
        },
        Err(err) => {
            info!("player tried invalid exit '{direction}' from {leaving}");
            super::report(view, err)
        },
    }
}

/// Enforce the current room's entry rule, if any.
///
/// A player standing in a room without the item its entry rule requires is
/// moved to the rule's fallback room and shown its message. Repeats if the
/// fallback room has a rule of its own. Returns true if the player was moved.
///
/// # Errors
/// - if the fallback rooms form a loop the player can never get out of
/// - if the player's room or a fallback room doesn't exist
pub fn check_room_entry(world: &mut CampusWorld, view: &mut View) -> Result<bool> {
    let mut redirected = false;
    // each hop lands in a different room unless the rules form a loop
    for _ in 0..=world.rooms.len() {
        let room = world.player_room_ref()?;
        let Some(rule) = &room.entry else {
            return Ok(redirected);
        };
        if world.player.inventory.contains_item(&rule.requires) {
            return Ok(redirected);
        }
        let (fallback, message) = (rule.fallback.clone(), rule.message.clone());
        warn!(
            "player in {} without '{}'; sending them to {fallback}",
            room.id, rule.requires
        );
        world.room_ref(&fallback)?;
        world.player.location = fallback;
        view.push(ViewItem::Warning(message));
        redirected = true;
    }
    bail!("entry rules send the player around in circles (last room: {})", world.player.location)
}

//! WorldDef loader and conversion helpers.
//!
//! Converts the serialized `WorldDef` data model into runtime engine structs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use campus_data::{ConditionDef, EntryRuleDef, FlagDef, ItemDef, OverlayDef, RoomDef, WorldDef};

use crate::condition::Condition;
use crate::flags::FlagRule;
use crate::room::{EntryRule, Exit, Room, RoomOverlay};
use crate::{CampusWorld, Item, ItemHolder, Player};

/// Load a `WorldDef` from a RON file.
///
/// # Errors
/// - if the file can't be read or isn't valid RON for a `WorldDef`
pub fn load_worlddef(path: &Path) -> Result<WorldDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading worlddef from '{}'", path.display()))?;
    ron::from_str(&text).with_context(|| format!("parsing worlddef RON from '{}'", path.display()))
}

/// Convert a validated `WorldDef` into a populated `CampusWorld`.
///
/// # Errors
/// - if an item placed in a room or the inventory is missing from the catalog
pub fn build_world_from_def(def: &WorldDef) -> Result<CampusWorld> {
    let mut world = CampusWorld::new_empty();
    world.title = def.game.title.clone();
    world.intro = def.game.intro.clone();
    world.ending = def.game.ending.clone();

    for item_def in &def.items {
        let item = item_from_def(item_def);
        world.items.insert(item.id.clone(), item);
    }

    for room_def in &def.rooms {
        let room = room_from_def(room_def);
        for item_id in &room.contents {
            ensure!(
                world.items.contains_key(item_id),
                "placing unknown item '{item_id}' in room '{}'",
                room.id
            );
        }
        world.rooms.insert(room.id.clone(), room);
    }

    let player_def = &def.game.player;
    let mut player = Player::new(player_def.start_room.clone(), player_def.max_weight);
    for item_id in &player_def.inventory {
        ensure!(
            world.items.contains_key(item_id),
            "placing unknown item '{item_id}' in starting inventory"
        );
        player.inventory.add_item(item_id.clone());
    }
    world.player = player;

    world.flag_rules = def.flags.iter().map(flag_from_def).collect();
    world.win_conditions = def.win.iter().map(condition_from_def).collect();

    Ok(world)
}

fn item_from_def(def: &ItemDef) -> Item {
    Item {
        id: def.id.clone(),
        name: def.name.clone(),
        mass: def.mass,
    }
}

fn room_from_def(def: &RoomDef) -> Room {
    Room {
        id: def.id.clone(),
        name: def.name.clone(),
        description: def.desc.clone(),
        exits: def
            .exits
            .iter()
            .map(|exit| Exit {
                direction: exit.direction.clone(),
                to: exit.to.clone(),
            })
            .collect(),
        contents: def.items.clone(),
        entry: def.entry.as_ref().map(entry_from_def),
        overlays: def.overlays.iter().map(overlay_from_def).collect(),
    }
}

fn entry_from_def(def: &EntryRuleDef) -> EntryRule {
    EntryRule {
        requires: def.requires.clone(),
        fallback: def.fallback.clone(),
        message: def.message.clone(),
    }
}

fn overlay_from_def(def: &OverlayDef) -> RoomOverlay {
    RoomOverlay {
        conditions: def.conditions.iter().map(condition_from_def).collect(),
        text: def.text.clone(),
    }
}

fn flag_from_def(def: &FlagDef) -> FlagRule {
    FlagRule {
        name: def.name.clone(),
        when: condition_from_def(&def.when),
        sticky: def.sticky,
    }
}

fn condition_from_def(def: &ConditionDef) -> Condition {
    match def {
        ConditionDef::FlagSet { flag } => Condition::FlagSet { flag: flag.clone() },
        ConditionDef::FlagUnset { flag } => Condition::FlagUnset { flag: flag.clone() },
        ConditionDef::ItemInRoom { item, room } => Condition::ItemInRoom {
            item: item.clone(),
            room: room.clone(),
        },
        ConditionDef::PlayerHasItem { item } => Condition::PlayerHasItem { item: item.clone() },
        ConditionDef::PlayerMissingItem { item } => Condition::PlayerMissingItem { item: item.clone() },
        ConditionDef::PlayerInRoom { room } => Condition::PlayerInRoom { room: room.clone() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_data::{ExitDef, GameDef, PlayerDef};

    fn small_def() -> WorldDef {
        WorldDef {
            game: GameDef {
                title: "Small".into(),
                intro: "Hi.".into(),
                ending: "Bye.".into(),
                player: PlayerDef {
                    start_room: "hall".into(),
                    inventory: vec!["key".into()],
                    max_weight: 4,
                },
            },
            rooms: vec![RoomDef {
                id: "hall".into(),
                name: "Hall".into(),
                desc: "A hall.".into(),
                exits: vec![ExitDef {
                    direction: "north".into(),
                    to: "hall".into(),
                }],
                items: vec!["pen".into()],
                entry: None,
                overlays: Vec::new(),
            }],
            items: vec![
                ItemDef {
                    id: "key".into(),
                    name: "a key".into(),
                    mass: 1,
                },
                ItemDef {
                    id: "pen".into(),
                    name: "a pen".into(),
                    mass: 1,
                },
            ],
            flags: vec![FlagDef {
                name: "pen_in_hall".into(),
                when: ConditionDef::ItemInRoom {
                    item: "pen".into(),
                    room: "hall".into(),
                },
                sticky: true,
            }],
            win: vec![ConditionDef::PlayerHasItem { item: "pen".into() }],
        }
    }

    #[test]
    fn build_places_items_and_player() {
        let world = build_world_from_def(&small_def()).unwrap();
        assert_eq!(world.player.location, "hall");
        assert_eq!(world.player.inventory.items, vec!["key".to_string()]);
        assert_eq!(world.player.inventory.max_weight, 4);
        assert_eq!(world.rooms["hall"].contents, vec!["pen".to_string()]);
        assert!(world.flags.is_empty());
        assert!(world.flag_rules[0].sticky);
        assert_eq!(world.win_conditions.len(), 1);
    }

    #[test]
    fn unknown_placed_item_is_an_error() {
        let mut def = small_def();
        def.rooms[0].items.push("ghost".into());
        let err = build_world_from_def(&def).unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn conditions_convert_one_to_one() {
        let def = ConditionDef::ItemInRoom {
            item: "pen".into(),
            room: "hall".into(),
        };
        assert_eq!(
            condition_from_def(&def),
            Condition::ItemInRoom {
                item: "pen".into(),
                room: "hall".into()
            }
        );
    }
}

use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a WorldDef.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a WorldDef.
///
/// ```
/// use campus_data::{ConditionDef, GameDef, PlayerDef, RoomDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         player: PlayerDef {
///             start_room: "start".into(),
///             ..PlayerDef::default()
///         },
///         ..GameDef::default()
///     },
///     rooms: vec![RoomDef {
///         id: "start".into(),
///         name: "Start".into(),
///         desc: "A room.".into(),
///         exits: Vec::new(),
///         items: Vec::new(),
///         entry: None,
///         overlays: Vec::new(),
///     }],
///     win: vec![ConditionDef::PlayerInRoom { room: "start".into() }],
///     ..WorldDef::default()
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut rooms = HashSet::new();
    let mut items = HashSet::new();
    let mut flags = HashSet::new();

    track_ids("room", world.rooms.iter().map(|r| r.id.as_str()), &mut rooms, &mut errors);
    track_ids("item", world.items.iter().map(|i| i.id.as_str()), &mut items, &mut errors);
    track_ids("flag", world.flags.iter().map(|f| f.name.as_str()), &mut flags, &mut errors);

    let ids = IdSets {
        rooms: &rooms,
        items: &items,
        flags: &flags,
    };

    let player = &world.game.player;
    if player.start_room.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "player start room missing".to_string(),
        });
    } else {
        check_ref("room", &player.start_room, ids.rooms, "player start room".to_string(), &mut errors);
    }

    // every item lives in at most one place
    let mut placed = HashSet::new();
    for item in &player.inventory {
        check_ref("item", item, ids.items, "player inventory".to_string(), &mut errors);
        track_placement(item, "player inventory", &mut placed, &mut errors);
    }

    // summed wide so huge masses are reported rather than overflowing
    let start_weight: u64 = player
        .inventory
        .iter()
        .filter_map(|id| world.items.iter().find(|item| &item.id == id))
        .map(|item| u64::from(item.mass))
        .sum();
    if start_weight > u64::from(player.max_weight) {
        errors.push(ValidationError::InvalidValue {
            context: format!(
                "starting inventory weighs {start_weight} kg, more than max_weight {}",
                player.max_weight
            ),
        });
    }

    for item in &world.items {
        check_command_word("item id", &item.id, &mut errors);
    }

    for room in &world.rooms {
        let mut directions = HashSet::new();
        for exit in &room.exits {
            check_command_word("exit direction", &exit.direction, &mut errors);
            if !directions.insert(exit.direction.as_str()) {
                errors.push(ValidationError::DuplicateId {
                    kind: "exit",
                    id: format!("{}.{}", room.id, exit.direction),
                });
            }
            check_ref(
                "room",
                &exit.to,
                ids.rooms,
                format!("exit '{}' from room '{}'", exit.direction, room.id),
                &mut errors,
            );
        }
        for item in &room.items {
            check_ref("item", item, ids.items, format!("contents of room '{}'", room.id), &mut errors);
            track_placement(item, &room.id, &mut placed, &mut errors);
        }
        if let Some(entry) = &room.entry {
            let context = format!("entry rule of room '{}'", room.id);
            check_ref("item", &entry.requires, ids.items, context.clone(), &mut errors);
            check_ref("room", &entry.fallback, ids.rooms, context.clone(), &mut errors);
            if entry.fallback == room.id {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{context} falls back to itself"),
                });
            } else if let Some(stuck) = fallback_loop(world, &room.id) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{context} leads into a fallback loop through room '{stuck}'"),
                });
            }
        }
        for overlay in &room.overlays {
            for cond in &overlay.conditions {
                validate_condition(cond, &ids, &format!("overlay in room '{}'", room.id), &mut errors);
            }
        }
    }

    for flag in &world.flags {
        validate_condition(&flag.when, &ids, &format!("flag '{}'", flag.name), &mut errors);
    }

    if world.win.is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "no win conditions defined".to_string(),
        });
    }
    for cond in &world.win {
        validate_condition(cond, &ids, "win condition", &mut errors);
    }

    errors
}

struct IdSets<'a> {
    rooms: &'a HashSet<String>,
    items: &'a HashSet<String>,
    flags: &'a HashSet<String>,
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    set: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !set.insert(id.to_string()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn track_placement(item: &str, holder: &str, placed: &mut HashSet<String>, errors: &mut Vec<ValidationError>) {
    if !placed.insert(item.to_string()) {
        errors.push(ValidationError::InvalidValue {
            context: format!("item '{item}' placed more than once (again in '{holder}')"),
        });
    }
}

/// Follow entry-rule fallbacks from `start`. Returns the first room seen
/// twice, if the chain never reaches a room without an entry rule.
fn fallback_loop<'a>(world: &'a WorldDef, start: &'a str) -> Option<&'a str> {
    let mut seen = HashSet::from([start]);
    let mut current = entry_rule_of(world, start)?.fallback.as_str();
    while let Some(rule) = entry_rule_of(world, current) {
        if !seen.insert(current) {
            return Some(current);
        }
        current = rule.fallback.as_str();
    }
    None
}

fn entry_rule_of<'a>(world: &'a WorldDef, room_id: &str) -> Option<&'a EntryRuleDef> {
    world
        .rooms
        .iter()
        .find(|room| room.id == room_id)
        .and_then(|room| room.entry.as_ref())
}

fn check_command_word(kind: &'static str, word: &str, errors: &mut Vec<ValidationError>) {
    if !is_command_word(word) {
        errors.push(ValidationError::InvalidValue {
            context: format!("{kind} '{word}' can't be typed by the player (use one lowercase word, not a filler word)"),
        });
    }
}

fn check_ref(kind: &'static str, id: &str, set: &HashSet<String>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}

fn validate_condition(cond: &ConditionDef, ids: &IdSets<'_>, context: &str, errors: &mut Vec<ValidationError>) {
    match cond {
        ConditionDef::FlagSet { flag } | ConditionDef::FlagUnset { flag } => {
            check_ref("flag", flag, ids.flags, context.to_string(), errors);
        },
        ConditionDef::ItemInRoom { item, room } => {
            check_ref("item", item, ids.items, context.to_string(), errors);
            check_ref("room", room, ids.rooms, context.to_string(), errors);
        },
        ConditionDef::PlayerHasItem { item } | ConditionDef::PlayerMissingItem { item } => {
            check_ref("item", item, ids.items, context.to_string(), errors);
        },
        ConditionDef::PlayerInRoom { room } => {
            check_ref("room", room, ids.rooms, context.to_string(), errors);
        },
    }
}

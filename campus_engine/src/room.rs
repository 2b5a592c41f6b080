//! Room definitions.
//!
//! Captures room metadata, exits, entry rules and overlays along with the
//! helpers used during movement and rendering.

use crate::condition::{Condition, all_hold};
use crate::view::{MenuLine, View, ViewItem};
use crate::{CampusWorld, Id, ItemHolder};

use anyhow::{Result, anyhow};

/// A directed, labeled exit from one room to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    pub direction: String,
    pub to: Id,
}

/// Item the player must hold to stay in a room. Without it they are sent to
/// `fallback` and shown `message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRule {
    pub requires: Id,
    pub fallback: Id,
    pub message: String,
}

/// Conditional text that may be part of a room description, depending on some state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomOverlay {
    pub conditions: Vec<Condition>,
    pub text: String,
}

impl RoomOverlay {
    /// Returns true if all of the overlay's conditions are met.
    pub fn applies(&self, world: &CampusWorld) -> bool {
        all_hold(&self.conditions, world)
    }
}

/// Any visitable location in the game world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub exits: Vec<Exit>,
    /// Items lying here, in the order they were put down.
    pub contents: Vec<Id>,
    pub entry: Option<EntryRule>,
    pub overlays: Vec<RoomOverlay>,
}

impl ItemHolder for Room {
    fn add_item(&mut self, item_id: Id) {
        self.contents.push(item_id);
    }

    fn remove_item(&mut self, item_id: &str) {
        self.contents.retain(|id| id != item_id);
    }

    fn contains_item(&self, item_id: &str) -> bool {
        self.contents.iter().any(|id| id == item_id)
    }
}

impl Room {
    /// Find the exit with exactly this direction label.
    pub fn exit(&self, direction: &str) -> Option<&Exit> {
        self.exits.iter().find(|exit| exit.direction == direction)
    }

    /// Displays name, description, items and any applicable overlays.
    pub fn show(&self, world: &CampusWorld, view: &mut View) {
        view.push(ViewItem::RoomDescription {
            name: self.name.clone(),
            description: self.description.clone(),
        });

        let item_names: Vec<String> = self
            .contents
            .iter()
            .filter_map(|id| world.items.get(id).map(|item| item.name.clone()))
            .collect();
        if !item_names.is_empty() {
            view.push(ViewItem::RoomItems(item_names));
        }

        let overlay_text: Vec<String> = self
            .overlays
            .iter()
            .filter(|o| o.applies(world))
            .map(|o| o.text.clone())
            .collect();
        if !overlay_text.is_empty() {
            view.push(ViewItem::RoomOverlays(overlay_text));
        }
    }

    /// Menu lines for leaving this room and picking up what's in it.
    ///
    /// # Errors
    /// Returns an error if an exit points at a room that doesn't exist.
    pub fn menu_lines(&self, world: &CampusWorld) -> Result<Vec<MenuLine>> {
        let mut lines = Vec::new();
        for exit in &self.exits {
            let target = world.rooms.get(&exit.to).ok_or_else(|| {
                anyhow!(
                    "Room({}) not found ({} exit from Room({}))",
                    exit.to,
                    exit.direction,
                    self.id
                )
            })?;
            lines.push(MenuLine::Go {
                direction: exit.direction.clone(),
                destination: target.name.clone(),
            });
        }
        for item in self.contents.iter().filter_map(|id| world.items.get(id)) {
            lines.push(MenuLine::Take {
                id: item.id.clone(),
                name: item.name.clone(),
            });
        }
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_room() -> Room {
        Room {
            id: "hall".into(),
            name: "Hall".into(),
            description: "A test room for testing".into(),
            exits: vec![Exit {
                direction: "north".into(),
                to: "yard".into(),
            }],
            contents: vec!["pen".into(), "cup".into()],
            entry: None,
            overlays: Vec::new(),
        }
    }

    #[test]
    fn exit_lookup_is_exact() {
        let room = create_test_room();
        assert_eq!(room.exit("north").map(|e| e.to.as_str()), Some("yard"));
        assert!(room.exit("nor").is_none());
        assert!(room.exit("North").is_none());
    }

    #[test]
    fn item_holder_keeps_order() {
        let mut room = create_test_room();
        room.add_item("book".into());
        room.remove_item("pen");
        assert_eq!(room.contents, vec!["cup".to_string(), "book".to_string()]);
        assert!(room.contains_item("book"));
        assert!(!room.contains_item("pen"));
    }
}

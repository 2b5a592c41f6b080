//! Data structures representing the game world.
//!
//! This module defines [`CampusWorld`] and related types used at runtime to
//! track the current state of the adventure.

use std::collections::{HashMap, HashSet};

use anyhow::{Result, anyhow};
use log::info;

use crate::condition::Condition;
use crate::flags::FlagRule;
use crate::{Id, Item, Player, Room};

/// Complete state of the running game.
///
/// The room graph and item catalog are fixed after loading; what changes
/// during play is where items are, where the player is, and which flags are set.
#[derive(Debug, Clone, Default)]
pub struct CampusWorld {
    pub title: String,
    pub intro: String,
    pub ending: String,
    pub rooms: HashMap<Id, Room>,
    pub items: HashMap<Id, Item>,
    pub player: Player,
    pub flag_rules: Vec<FlagRule>,
    /// Names of the flags currently set.
    pub flags: HashSet<String>,
    pub win_conditions: Vec<Condition>,
    pub turn_count: usize,
}

impl CampusWorld {
    /// Create a new empty world with a default player.
    pub fn new_empty() -> CampusWorld {
        let world = Self::default();
        info!("new, empty 'CampusWorld' created");
        world
    }

    /// Obtain a reference to the room the player occupies.
    /// # Errors
    /// - if the player's room id is not found
    pub fn player_room_ref(&self) -> Result<&Room> {
        self.rooms
            .get(&self.player.location)
            .ok_or_else(|| anyhow!("player's room ({}) not found in world", self.player.location))
    }

    /// Obtain a mutable reference to the room the player occupies.
    /// # Errors
    /// - if the player's room id is not found
    pub fn player_room_mut(&mut self) -> Result<&mut Room> {
        let location = &self.player.location;
        self.rooms
            .get_mut(location)
            .ok_or_else(|| anyhow!("player's room ({location}) not found in world"))
    }

    /// Look up a room by id.
    /// # Errors
    /// - if no room has that id
    pub fn room_ref(&self, room_id: &str) -> Result<&Room> {
        self.rooms
            .get(room_id)
            .ok_or_else(|| anyhow!("room ({room_id}) not found in world"))
    }

    pub fn flag_is_set(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }
}

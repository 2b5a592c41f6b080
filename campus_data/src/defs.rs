use serde::{Deserialize, Serialize};

/// Stable identifier used across WorldDef references.
pub type Id = String;

/// Default carrying capacity (kg) when the world file doesn't set one.
pub const MAX_WEIGHT_TO_CARRY: u32 = 10;

/// Top-level world data loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
    #[serde(default)]
    pub flags: Vec<FlagDef>,
    #[serde(default)]
    pub win: Vec<ConditionDef>,
}

/// Game-level metadata and startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub ending: String,
    pub player: PlayerDef,
}

/// Player starting state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDef {
    pub start_room: Id,
    #[serde(default)]
    pub inventory: Vec<Id>,
    #[serde(default = "default_max_weight")]
    pub max_weight: u32,
}

impl Default for PlayerDef {
    fn default() -> Self {
        Self {
            start_room: String::new(),
            inventory: Vec::new(),
            max_weight: default_max_weight(),
        }
    }
}

fn default_max_weight() -> u32 {
    MAX_WEIGHT_TO_CARRY
}

/// Room definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub exits: Vec<ExitDef>,
    /// Items lying in the room at startup, in display order.
    #[serde(default)]
    pub items: Vec<Id>,
    #[serde(default)]
    pub entry: Option<EntryRuleDef>,
    #[serde(default)]
    pub overlays: Vec<OverlayDef>,
}

/// A directed, labeled exit to another room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitDef {
    pub direction: String,
    pub to: Id,
}

/// Item required to remain in a room, and where the player ends up without it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRuleDef {
    pub requires: Id,
    pub fallback: Id,
    pub message: String,
}

/// A room overlay with optional conditions and text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayDef {
    #[serde(default)]
    pub conditions: Vec<ConditionDef>,
    pub text: String,
}

/// Item definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub mass: u32,
}

/// A named world flag derived from item placement each turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlagDef {
    pub name: String,
    pub when: ConditionDef,
    /// Sticky flags stay set once their condition has been observed.
    #[serde(default)]
    pub sticky: bool,
}

/// World-state predicates shared by flags, overlays and the win condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConditionDef {
    FlagSet { flag: String },
    FlagUnset { flag: String },
    ItemInRoom { item: Id, room: Id },
    PlayerHasItem { item: Id },
    PlayerMissingItem { item: Id },
    PlayerInRoom { room: Id },
}

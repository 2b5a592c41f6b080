#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

// Core modules
pub mod command;
pub mod condition;
pub mod data_paths;
pub mod error;
pub mod flags;
pub mod goal;
pub mod inventory;
pub mod item;
pub mod loader;
pub mod player;
pub mod repl;
pub mod room;
pub mod style;
pub mod view;
pub mod world;

/// Stable identifier for rooms, items and flags, taken from the world file.
pub use campus_data::Id;

// Re-exports for convenience
pub use error::ActionError;
pub use item::{Item, ItemHolder};
pub use loader::{load_world, load_world_from};
pub use player::Player;
pub use repl::{GameStatus, run_repl};
pub use room::Room;
pub use view::{View, ViewItem};
pub use world::CampusWorld;

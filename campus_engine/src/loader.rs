//! Loader utilities for building a `CampusWorld` from serialized data.
//!
//! World content lives in a RON encoding of [`campus_data::WorldDef`]. It is
//! validated as a whole before anything is built from it.

pub mod worlddef;

use std::path::Path;

use anyhow::{Context, Result, bail};
use campus_data::WorldDef;
use log::info;

use crate::CampusWorld;
use crate::data_paths::data_path;
use crate::loader::worlddef::{build_world_from_def, load_worlddef};

/// Load the `CampusWorld` shipped in the data directory.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or validation.
pub fn load_world() -> Result<CampusWorld> {
    load_world_from(&data_path("world.ron"))
}

/// Load, validate and build a `CampusWorld` from a RON world file.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or validation.
pub fn load_world_from(path: &Path) -> Result<CampusWorld> {
    let worlddef = load_worlddef(path).context("while loading worlddef from file")?;
    validate_worlddef(&worlddef)?;
    let world = build_world_from_def(&worlddef).context("while building world from worlddef")?;
    info!("{} rooms added to CampusWorld", world.rooms.len());
    info!("{} items added to CampusWorld", world.items.len());
    info!("{} flag rules added to CampusWorld", world.flag_rules.len());
    info!("{} win conditions added to CampusWorld", world.win_conditions.len());
    info!(
        "player starts in {} carrying {} item(s), limit {} kg",
        world.player.location,
        world.player.inventory.items.len(),
        world.player.inventory.max_weight
    );
    Ok(world)
}

/// Validate the WorldDef and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = campus_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("worlddef validation failed:\n{details}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TINY_WORLD: &str = r#"(
        game: (
            title: "Tiny",
            player: (start_room: "hall", inventory: ["key"]),
        ),
        rooms: [
            (id: "hall", name: "Hall", desc: "A hall.", items: ["pen"]),
        ],
        items: [
            (id: "key", name: "a key", mass: 1),
            (id: "pen", name: "a pen", mass: 1),
        ],
        win: [playerHasItem(item: "pen")],
    )"#;

    fn write_ron(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_world_from_ron_file() {
        let file = write_ron(TINY_WORLD);
        let world = load_world_from(file.path()).unwrap();
        assert_eq!(world.title, "Tiny");
        assert_eq!(world.player.location, "hall");
        assert_eq!(world.player.inventory.max_weight, campus_data::MAX_WEIGHT_TO_CARRY);
        assert!(world.rooms["hall"].contents.contains(&"pen".to_string()));
    }

    #[test]
    fn validation_errors_are_reported_together() {
        let broken = TINY_WORLD
            .replace(r#"start_room: "hall""#, r#"start_room: "attic""#)
            .replace(r#"playerHasItem(item: "pen")"#, r#"playerHasItem(item: "quill")"#);
        let file = write_ron(&broken);
        let err = load_world_from(file.path()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("worlddef validation failed"));
        assert!(msg.contains("attic"));
        assert!(msg.contains("quill"));
    }

    #[test]
    fn malformed_ron_is_an_error() {
        let file = write_ron("( game: ");
        assert!(load_world_from(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_world_from(&dir.path().join("nope.ron")).is_err());
    }
}

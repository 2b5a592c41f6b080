//! REPL and turn sequencing.
//!
//! The game runs in a read-eval-print loop. Each turn has two halves:
//! [`begin_turn`] enforces entry rules and describes the situation, and
//! [`resolve_turn`] carries out one command, re-derives world flags and
//! checks whether the game has been won.

mod input;
pub mod inventory;
pub mod movement;

pub use inventory::*;
pub use movement::*;

use crate::command::{Command, normalize_input, parse_command};
use crate::flags::recompute_flags;
use crate::goal::{is_won, progress};
use crate::style::GameStyle;
use crate::view::{MenuLine, View, ViewItem};
use crate::{ActionError, CampusWorld};

use anyhow::{Context, Result};
use log::info;

use input::{InputEvent, InputManager};

/// Where the game stands after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
}

/// Run the main read-eval-print loop until the game is won or input runs out.
///
/// # Errors
/// - Propagates failures from handlers caused by inconsistent world data.
/// - Returns an error if reading input fails.
pub fn run_repl(world: &mut CampusWorld) -> Result<()> {
    let mut view = View::new();
    let mut input_manager = InputManager::new().context("while setting up the input prompt")?;
    let prompt = "> ".prompt_style().to_string();

    view.push(ViewItem::Intro {
        title: world.title.clone(),
        text: world.intro.clone(),
    });
    loop {
        begin_turn(world, &mut view)?;
        view.flush();

        let line = match input_manager.read_line(&prompt).context("while reading player input")? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => {
                info!("input closed after {} turns; leaving the game", world.turn_count);
                break;
            },
            InputEvent::Interrupted => {
                view.push(ViewItem::Error("Command canceled.".to_string()));
                continue;
            },
        };

        let status = resolve_turn(world, &mut view, &normalize_input(&line))?;
        view.flush();
        if status == GameStatus::Won {
            break;
        }
    }
    Ok(())
}

/// Start of a turn: entry guard, then room, inventory and the action menu.
///
/// # Errors
/// - if the player's room (or a room it links to) can't be found
pub fn begin_turn(world: &mut CampusWorld, view: &mut View) -> Result<()> {
    check_room_entry(world, view)?;

    let room = world.player_room_ref()?;
    room.show(world, view);
    show_inventory(world, view);

    let mut menu = room.menu_lines(world)?;
    menu.extend(world.player.inventory.resolve(&world.items).map(|item| MenuLine::Drop {
        id: item.id.clone(),
        name: item.name.clone(),
    }));
    view.push(ViewItem::Menu(menu));
    Ok(())
}

/// Carry out one command and advance the game by a turn.
///
/// Flags are recomputed after the command and the win predicate is checked
/// last. On a win the ending is pushed to the view.
///
/// # Errors
/// - if a handler hits inconsistent world data
pub fn resolve_turn<S: AsRef<str>>(world: &mut CampusWorld, view: &mut View, tokens: &[S]) -> Result<GameStatus> {
    world.turn_count += 1;
    info!("================> TURN {} <================", world.turn_count);

    let command = parse_command(tokens);
    if command.is_unrecognized() {
        let words: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();
        info!("unrecognized input: {words:?}");
    }
    match &command {
        Command::Go(direction) => move_to_handler(world, view, direction)?,
        Command::Take(item_id) => take_handler(world, view, item_id)?,
        Command::Drop(item_id) => drop_handler(world, view, item_id)?,
        Command::NoOp => {},
        Command::MissingArgument(verb) => report(view, ActionError::MissingArgument(*verb))?,
        Command::Unrecognized => report(view, ActionError::UnrecognizedCommand)?,
    }

    recompute_flags(world);

    let (met, total) = progress(world);
    info!("win conditions met: {met}/{total}");
    if is_won(world) {
        info!("player won on turn {}", world.turn_count);
        view.push(ViewItem::Ending(world.ending.clone()));
        return Ok(GameStatus::Won);
    }
    Ok(GameStatus::Playing)
}

/// Show a recoverable failure to the player; pass anything else up.
///
/// # Errors
/// - if `err` is not something the player can recover from
pub(crate) fn report(view: &mut View, err: ActionError) -> Result<()> {
    match err {
        ActionError::World(err) => Err(err),
        other => {
            view.push(ViewItem::Error(other.to_string()));
            Ok(())
        },
    }
}

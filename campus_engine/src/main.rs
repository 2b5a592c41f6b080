#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Campus **
//! Errand-running adventure around a university building

use campus_engine::{load_world, run_repl};

use anyhow::{Context, Result};

use log::info;

use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading campus world...");
    let mut world = load_world().context("while loading CampusWorld")?;
    info!("CampusWorld '{}' loaded successfully.", world.title);

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush()?;
    info!("Starting the game!");

    run_repl(&mut world)
}

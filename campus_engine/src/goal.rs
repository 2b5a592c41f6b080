//! module: goal
//!
//! The win predicate: every win condition in the world must hold at once.

use crate::CampusWorld;
use crate::condition::all_hold;

/// True when the player has won. Pure; calling it twice in a row gives the same answer.
pub fn is_won(world: &CampusWorld) -> bool {
    !world.win_conditions.is_empty() && all_hold(&world.win_conditions, world)
}

/// Number of win conditions currently met, out of the total.
pub fn progress(world: &CampusWorld) -> (usize, usize) {
    let met = world.win_conditions.iter().filter(|c| c.holds(world)).count();
    (met, world.win_conditions.len())
}

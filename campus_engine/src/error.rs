//! Player-facing failure outcomes.
//!
//! Every variant except [`ActionError::World`] is a recoverable, same-turn
//! outcome: it carries a fixed message and leaves the world untouched.

use thiserror::Error;

use crate::command::Verb;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("You cannot go there.")]
    InvalidExit,
    #[error("You cannot take that.")]
    ItemNotHere,
    #[error("You cannot drop that.")]
    ItemNotCarried,
    #[error("You can't carry more weight. Drop another item first.")]
    OverWeight,
    #[error("{}", .0.missing_argument_prompt())]
    MissingArgument(Verb),
    #[error("This makes no sense.")]
    UnrecognizedCommand,
    /// World data is inconsistent; not something the player can fix.
    #[error(transparent)]
    World(#[from] anyhow::Error),
}

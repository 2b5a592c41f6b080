//! Shared data model for campus world content.

pub mod defs;
pub mod validate;
pub mod words;

pub use defs::*;
pub use validate::{ValidationError, validate_world};
pub use words::{FILLER_WORDS, is_command_word};

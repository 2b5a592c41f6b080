//! Command module
//!
//! Turns a line of player input into a [`Command`]. Normalization strips
//! punctuation, case and filler words; interpretation maps the resulting
//! tokens onto the closed set of commands the game understands.
use std::collections::HashSet;

use lazy_static::lazy_static;
use variantly::Variantly;

lazy_static! {
    /// Words dropped during normalization ("go to the east" -> "go east").
    static ref FILLER_WORDS: HashSet<&'static str> = campus_data::FILLER_WORDS.iter().copied().collect();
}

/// Verbs that take a single argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Go,
    Take,
    Drop,
}

impl Verb {
    /// All verbs, in the order they're offered to the player.
    pub const ALL: [Verb; 3] = [Verb::Go, Verb::Take, Verb::Drop];

    pub fn from_token(token: &str) -> Option<Verb> {
        match token {
            "go" => Some(Verb::Go),
            "take" => Some(Verb::Take),
            "drop" => Some(Verb::Drop),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Go => "go",
            Verb::Take => "take",
            Verb::Drop => "drop",
        }
    }

    /// Question asked when the verb arrives without an argument.
    pub fn missing_argument_prompt(self) -> &'static str {
        match self {
            Verb::Go => "Go where?",
            Verb::Take => "Take what?",
            Verb::Drop => "Drop what?",
        }
    }
}

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    Go(String),
    Take(String),
    Drop(String),
    /// Blank input.
    NoOp,
    MissingArgument(Verb),
    Unrecognized,
}

/// Lowercase the input, remove punctuation and filler words, and split it into tokens.
pub fn normalize_input(input: &str) -> Vec<String> {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect::<String>()
        .to_lowercase();
    cleaned
        .split_whitespace()
        .filter(|word| !FILLER_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}

/// Interpret a normalized token sequence. Tokens past the second are ignored.
pub fn parse_command<S: AsRef<str>>(tokens: &[S]) -> Command {
    let Some(first) = tokens.first() else {
        return Command::NoOp;
    };
    let Some(verb) = Verb::from_token(first.as_ref()) else {
        return Command::Unrecognized;
    };
    match tokens.get(1) {
        None => Command::MissingArgument(verb),
        Some(arg) => {
            let arg = arg.as_ref().to_string();
            match verb {
                Verb::Go => Command::Go(arg),
                Verb::Take => Command::Take(arg),
                Verb::Drop => Command::Drop(arg),
            }
        },
    }
}

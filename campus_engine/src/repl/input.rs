//! Line input for the game REPL.
//!
//! A single rustyline editor with verb completion. Rustyline reads plain
//! lines by itself when stdin isn't a terminal, so piped scripts work too.
//! History persists between sessions in the user's data directory.

use std::fs;
use std::path::PathBuf;

use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Config, Context, Editor, Helper};

use crate::command::Verb;

/// Outcome of reading a line from the REPL input.
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

#[derive(Default)]
struct CampusHelper;

impl Helper for CampusHelper {}

impl Completer for CampusHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = current_prefix(line, pos);
        // only the first word is a verb
        if prefix.is_empty() || prefix.contains(char::is_whitespace) {
            return Ok((start, Vec::new()));
        }
        Ok((start, verb_completions(&prefix.to_lowercase())))
    }
}

impl Hinter for CampusHelper {
    type Hint = String;
}

impl Highlighter for CampusHelper {}

impl Validator for CampusHelper {}

fn current_prefix(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let trimmed = slice.trim_start_matches(char::is_whitespace);
    let start = pos - trimmed.len();
    (start, trimmed.to_string())
}

fn verb_completions(lower: &str) -> Vec<Pair> {
    Verb::ALL
        .iter()
        .map(|verb| verb.as_str())
        .filter(|verb| verb.starts_with(lower))
        .map(|verb| Pair {
            display: verb.to_string(),
            replacement: format!("{verb} "),
        })
        .collect()
}

/// The player's prompt: reads one line per turn.
pub struct InputManager {
    editor: Editor<CampusHelper, DefaultHistory>,
    history: Option<PathBuf>,
}

impl InputManager {
    /// # Errors
    /// - if the terminal can't be set up for line editing
    pub fn new() -> rustyline::Result<Self> {
        let config = Config::builder().auto_add_history(true).build();
        let mut editor: Editor<CampusHelper, DefaultHistory> = Editor::with_config(config)?;
        editor.set_helper(Some(CampusHelper));

        let history = history_path();
        if let Some(path) = &history {
            match editor.load_history(path) {
                Ok(()) => info!("loaded input history from {}", path.display()),
                Err(err) => info!("starting without input history ({}: {err})", path.display()),
            }
        }
        Ok(Self { editor, history })
    }

    /// # Errors
    /// - if reading from the terminal or stdin fails
    pub fn read_line(&mut self, prompt: &str) -> rustyline::Result<InputEvent> {
        to_event(self.editor.readline(prompt))
    }
}

impl Drop for InputManager {
    fn drop(&mut self) {
        let Some(path) = &self.history else {
            return;
        };
        if let Some(dir) = path.parent()
            && let Err(err) = fs::create_dir_all(dir)
        {
            warn!("can't create history directory {}: {err}", dir.display());
            return;
        }
        if let Err(err) = self.editor.save_history(path) {
            warn!("can't save input history to {}: {err}", path.display());
        }
    }
}

/// Ctrl-C and Ctrl-D are ordinary events at the prompt, not failures.
fn to_event(read: rustyline::Result<String>) -> rustyline::Result<InputEvent> {
    match read {
        Ok(line) => Ok(InputEvent::Line(line)),
        Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
        Err(ReadlineError::Eof) => Ok(InputEvent::Eof),
        Err(err) => Err(err),
    }
}

fn history_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("campus_engine").join("history.txt"))
}

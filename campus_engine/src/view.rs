//! View module.
//!
//! Handlers don't print. They push [`ViewItem`]s describing what happened,
//! and the REPL flushes the collected items to the terminal at the end of
//! each phase of the turn.
use std::fmt;

use colored::Colorize;
use textwrap::{fill, termwidth};

use crate::style::GameStyle;

/// Widest we'll wrap prose, even on very wide terminals.
const MAX_TEXT_WIDTH: usize = 80;

/// One line of the "You can:" action menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuLine {
    Go { direction: String, destination: String },
    Take { id: String, name: String },
    Drop { id: String, name: String },
}

impl fmt::Display for MenuLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuLine::Go { direction, destination } => {
                write!(f, "GO {} to {destination}.", direction.to_uppercase())
            },
            MenuLine::Take { id, name } => write!(f, "TAKE {} to take {name}.", id.to_uppercase()),
            MenuLine::Drop { id, name } => write!(f, "DROP {} to drop {name}.", id.to_uppercase()),
        }
    }
}

/// Everything the game can tell the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewItem {
    Intro { title: String, text: String },
    /// Player was turned away from a room.
    Warning(String),
    /// Successful move ("Moving into ...").
    Transition(String),
    RoomDescription { name: String, description: String },
    RoomItems(Vec<String>),
    RoomOverlays(Vec<String>),
    Inventory { items: Vec<String>, weight: u32 },
    Menu(Vec<MenuLine>),
    /// A command that failed or couldn't be understood.
    Error(String),
    Ending(String),
}

/// Comma-separated list of item names: "a pen, a student handbook".
pub fn list_of_items(names: &[String]) -> String {
    names.join(", ")
}

/// Collects the output of a turn and writes it out on `flush`.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewItem>,
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    pub fn new() -> Self {
        Self {
            width: termwidth().min(MAX_TEXT_WIDTH),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Messages from failed commands pushed since the last flush.
    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            ViewItem::Error(msg) => Some(msg.as_str()),
            _ => None,
        })
    }

    /// Print and clear everything collected so far.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = termwidth().min(MAX_TEXT_WIDTH);
        for item in &self.items {
            println!("{}", self.render(item));
        }
        self.items.clear();
    }

    fn render(&self, item: &ViewItem) -> String {
        match item {
            ViewItem::Intro { title, text } => {
                format!("\n{}\n\n{}\n", title.banner_style(), fill(text, self.width))
            },
            ViewItem::Warning(msg) => msg.denied_style().to_string(),
            ViewItem::Transition(msg) => msg.transition_style().to_string(),
            ViewItem::RoomDescription { name, description } => format!(
                "\n{}\n\n{}\n",
                name.to_uppercase().room_titlebar_style(),
                fill(description, self.width).description_style()
            ),
            ViewItem::RoomItems(names) => {
                format!("There is {} here.\n", list_of_items(names).item_style())
            },
            ViewItem::RoomOverlays(texts) => texts
                .iter()
                .map(|text| fill(text, self.width).overlay_style().to_string())
                .collect::<Vec<_>>()
                .join("\n"),
            ViewItem::Inventory { items, weight } => {
                let mut out = String::new();
                if !items.is_empty() {
                    out.push_str(&format!("You have {}.\n\n", list_of_items(items).item_style()));
                }
                out.push_str(&format!("You carry {weight} kg"));
                out
            },
            ViewItem::Menu(lines) => {
                let mut out = String::from("\nYou can:\n");
                for line in lines {
                    out.push_str(&format!("{}\n", line.to_string().menu_style()));
                }
                out.push_str("What do you want to do?");
                out
            },
            ViewItem::Error(msg) => msg.error_style().to_string(),
            ViewItem::Ending(text) => format!("\n{}\n", text.banner_style().bold()),
        }
    }
}

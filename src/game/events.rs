//! # Game Events
//!
//! Events produced by the view layer and consumed by the game loop.

use std::fmt;

/// Everything the view can ask the game to do.
///
/// The game loop matches on this exhaustively, so a new kind of input is a
/// new variant here plus a new arm in [`crate::GameState::apply_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Move the player by a relative offset
    Movement { off_x: i32, off_y: i32 },
    /// A key with no bound action yet
    KeyPress { key: char },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::Movement { off_x, off_y } => write!(f, "move({off_x:+}, {off_y:+})"),
            GameEvent::KeyPress { key } => write!(f, "key({key})"),
        }
    }
}

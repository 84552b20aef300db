//! # YASP
//!
//! A small roguelike prototype: a tile-coded dungeon map, a player that walks
//! on it, and a quest log narrating what happened.
//!
//! ## Architecture Overview
//!
//! - **World**: immutable tile-code grid with bounds and neighbourhood queries
//! - **Game State**: owns the map, the player and the quest log, and exposes
//!   lock-protected read accessors
//! - **Event Loop**: a single background task draining a bounded channel of
//!   [`GameEvent`]s, so every mutation is serialized
//! - **Generation**: seeded random-fill maps and fixed ASCII layouts
//! - **Rendering**: a macroquad window that turns key presses into events and
//!   redraws from the accessors every frame

pub mod config;
pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;

pub use config::*;
pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;

/// Core error type for YASP.
#[derive(thiserror::Error, Debug)]
pub enum YaspError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid YAML
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The configuration parsed but holds unusable values
    #[error("{0}")]
    Config(String),

    /// A map query fell outside the map extents
    #[error("provided x,y ({x},{y}) is outside of map bounds ({width}, {height})")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    /// A quest log index was past the end of the log
    #[error("bad index ({index}) must be >= 0 and < {len}")]
    Index { index: usize, len: usize },

    /// A map could not be built from the given tiles
    #[error("Invalid map: {0}")]
    InvalidMap(String),

    /// The game loop has exited and no longer accepts events
    #[error("Game loop is not running")]
    LoopStopped,

    /// An asset could not be decoded
    #[error("Asset error: {0}")]
    Asset(String),
}

/// Result type used throughout the YASP codebase.
pub type YaspResult<T> = Result<T, YaspError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Window title shown by the renderer.
pub const TITLE: &str = "Y A S P";

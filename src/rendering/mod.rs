//! # Rendering Module
//!
//! Windowed rendering with macroquad: glyph or sprite tiles, the quest log,
//! the inventory panel and the status bars.

pub mod assets;
pub mod display;
pub mod ui;

pub use display::*;
pub use ui::*;

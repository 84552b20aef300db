//! # User Interface Elements
//!
//! Colours and the text content of the side and bottom panels.
//!
//! Everything here is plain data so it can be checked without a window.

use crate::{QuestLog, Tile};
use macroquad::prelude::*;
use std::collections::HashMap;

/// Placeholder inventory contents; there is no inventory system yet.
pub const INVENTORY_ITEMS: [&str; 3] = ["An egg", "A sword", "Low-quality meats"];

/// Glyph colours used by the dungeon panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub log_text: Color,
    pub highlight: Color,
    glyphs: HashMap<char, Color>,
}

impl Palette {
    /// Colour for a tile, falling back to the text colour.
    pub fn tile_color(&self, tile: Tile) -> Color {
        self.glyphs.get(&tile.glyph()).copied().unwrap_or(self.text)
    }

    /// Overrides the colour of one glyph.
    pub fn set(&mut self, glyph: char, color: Color) {
        self.glyphs.insert(glyph, color);
    }
}

impl Default for Palette {
    fn default() -> Self {
        let glyphs = HashMap::from([
            (Tile::GROUND.glyph(), GREEN),
            // chocolate
            (Tile::WALL.glyph(), Color::from_rgba(210, 105, 30, 255)),
            // pale green
            (Tile::MOSS.glyph(), Color::from_rgba(152, 251, 152, 255)),
            // brown
            (Tile::STUMP.glyph(), Color::from_rgba(165, 42, 42, 255)),
            (Tile::PLAYER.glyph(), YELLOW),
        ]);

        Self {
            background: BLACK,
            text: WHITE,
            log_text: GREEN,
            highlight: Color::new(1.0, 1.0, 0.0, 0.35),
            glyphs,
        }
    }
}

/// Quest log lines for a panel `rows` tall, newest at the top.
pub fn quest_log_rows(log: &QuestLog, rows: usize) -> Vec<String> {
    log.latest(rows).iter().map(ToString::to_string).collect()
}

/// Key help shown in the menu bar.
pub fn keybar_text(highlight_player: bool) -> String {
    let highlight = if highlight_player {
        "Un-highlight player"
    } else {
        "Highlight player"
    };
    format!("[Q] Quit  [H] {highlight}")
}

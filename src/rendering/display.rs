//! # Display Management
//!
//! The macroquad window: polls input, forwards game events to the game loop,
//! and redraws every frame from the game state's read accessors.

use crate::input::{InputHandler, PlayerInput};
use crate::rendering::assets::Tilemap;
use crate::rendering::ui::{keybar_text, quest_log_rows, Palette, INVENTORY_ITEMS};
use crate::{GameHandle, GameState, Tile, YaspResult, TITLE, VERSION};
use log::info;
use macroquad::prelude::*;
use std::collections::HashMap;

const BAR_HEIGHT: f32 = 22.0;
const LINE_HEIGHT: f32 = 18.0;
const FONT_SIZE: f32 = 18.0;

/// A sprite sheet uploaded to the GPU plus the glyph each sprite stands for.
pub struct SpriteSheet {
    texture: Texture2D,
    tilemap: Tilemap,
    glyph_sprites: HashMap<char, usize>,
}

impl SpriteSheet {
    /// Uploads the tilemap. Needs a live window.
    pub fn new(tilemap: Tilemap, glyph_sprites: HashMap<char, usize>) -> Self {
        let texture = Texture2D::from_image(&tilemap.image);
        texture.set_filter(FilterMode::Nearest);
        Self {
            texture,
            tilemap,
            glyph_sprites,
        }
    }

    /// Sprite indices for the built-in tiles: ground, wall, moss, stump,
    /// player.
    pub fn default_glyph_sprites() -> HashMap<char, usize> {
        [Tile::GROUND, Tile::WALL, Tile::MOSS, Tile::STUMP, Tile::PLAYER]
            .iter()
            .enumerate()
            .map(|(index, tile)| (tile.glyph(), index))
            .collect()
    }

    fn source(&self, tile: Tile) -> Option<Rect> {
        let index = *self.glyph_sprites.get(&tile.glyph())?;
        self.tilemap.tiles.get(index).map(|region| region.rect)
    }
}

/// Macroquad display manager for the game.
pub struct MacroquadDisplay {
    /// Tile size in pixels
    pub tile_size: f32,
    /// Inventory panel width in pixels
    pub ui_panel_width: f32,
    /// Whether to draw a highlight under the player
    pub highlight_player: bool,
    pub palette: Palette,
    sprites: Option<SpriteSheet>,
}

impl Default for MacroquadDisplay {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

impl MacroquadDisplay {
    pub fn new(palette: Palette) -> Self {
        Self {
            tile_size: 24.0,
            ui_panel_width: 220.0,
            highlight_player: false,
            palette,
            sprites: None,
        }
    }

    /// Draws tiles from a sprite sheet instead of glyphs.
    pub fn with_sprites(mut self, sprites: SpriteSheet) -> Self {
        self.sprites = Some(sprites);
        self
    }

    /// Runs the frame loop until the player quits or the game loop stops.
    pub async fn run(&mut self, handle: &GameHandle, input: &mut InputHandler) -> YaspResult<()> {
        info!("Display loop started");
        loop {
            for player_input in input.poll() {
                match player_input {
                    PlayerInput::Quit => {
                        info!("Player quit the game");
                        return Ok(());
                    }
                    PlayerInput::ToggleHighlight => {
                        self.highlight_player = !self.highlight_player;
                    }
                    PlayerInput::Game(event) => handle.blocking_send(event)?,
                }
            }

            self.render(handle.state());
            next_frame().await;
        }
    }

    /// Renders the complete screen.
    pub fn render(&self, game: &GameState) {
        clear_background(self.palette.background);

        let width = screen_width();
        let height = screen_height();

        self.render_title(width);
        draw_text(
            &keybar_text(self.highlight_player),
            6.0,
            BAR_HEIGHT * 2.0 - 6.0,
            FONT_SIZE,
            LIGHTGRAY,
        );

        let top = BAR_HEIGHT * 2.0;
        let dungeon_width = (width - self.ui_panel_width).max(self.tile_size);
        let columns = (dungeon_width / self.tile_size) as i32;
        let (_, map_height) = game.get_map_dimensions();
        let available_rows = ((height - top - BAR_HEIGHT) / 2.0 / self.tile_size) as i32;
        let rows = map_height.min(available_rows).max(1);

        self.render_dungeon(game, top, columns, rows);
        self.render_inventory(dungeon_width + 10.0, top);

        let log_top = top + rows as f32 * self.tile_size + 8.0;
        self.render_quest_log(game, log_top, height - BAR_HEIGHT);
        self.render_status(game, width, height);
    }

    fn render_title(&self, width: f32) {
        draw_rectangle(0.0, 0.0, width, BAR_HEIGHT, DARKGRAY);
        let title = measure_text(TITLE, None, FONT_SIZE as u16, 1.0);
        draw_text(
            TITLE,
            (width - title.width) / 2.0,
            BAR_HEIGHT - 6.0,
            FONT_SIZE,
            WHITE,
        );
        draw_text("HP: 0", width - 60.0, BAR_HEIGHT - 6.0, FONT_SIZE, WHITE);
    }

    fn render_dungeon(&self, game: &GameState, top: f32, columns: i32, rows: i32) {
        let player = game.get_player_pos();
        let (origin_x, origin_y) =
            viewport_origin(player, game.get_map_dimensions(), (columns, rows));

        for screen_y in 0..rows {
            for screen_x in 0..columns {
                let x = origin_x + screen_x;
                let y = origin_y + screen_y;
                let pixel_x = screen_x as f32 * self.tile_size;
                let pixel_y = top + screen_y as f32 * self.tile_size;

                if self.highlight_player && (x, y) == player {
                    draw_rectangle(
                        pixel_x,
                        pixel_y,
                        self.tile_size,
                        self.tile_size,
                        self.palette.highlight,
                    );
                }

                // Cells outside the map stay blank.
                if let Ok(tile) = game.get_map_tile(x, y) {
                    self.render_tile(tile, pixel_x, pixel_y);
                }
            }
        }
    }

    fn render_tile(&self, tile: Tile, x: f32, y: f32) {
        if let Some(sprites) = &self.sprites {
            if let Some(source) = sprites.source(tile) {
                draw_texture_ex(
                    &sprites.texture,
                    x,
                    y,
                    WHITE,
                    DrawTextureParams {
                        source: Some(source),
                        dest_size: Some(vec2(self.tile_size, self.tile_size)),
                        ..Default::default()
                    },
                );
                return;
            }
        }

        draw_text(
            &tile.to_string(),
            x + self.tile_size * 0.25,
            y + self.tile_size * 0.8,
            self.tile_size,
            self.palette.tile_color(tile),
        );
    }

    fn render_inventory(&self, x: f32, top: f32) {
        let mut line_y = top + LINE_HEIGHT;
        draw_text("Inventory", x, line_y, FONT_SIZE, SKYBLUE);
        line_y += LINE_HEIGHT * 1.5;

        for item in INVENTORY_ITEMS {
            draw_text(item, x, line_y, FONT_SIZE - 2.0, self.palette.text);
            line_y += LINE_HEIGHT;
        }
    }

    fn render_quest_log(&self, game: &GameState, top: f32, bottom: f32) {
        let rows = ((bottom - top) / LINE_HEIGHT).max(0.0) as usize;
        draw_rectangle(0.0, top, screen_width(), bottom - top, Color::new(0.2, 0.2, 0.2, 1.0));

        for (i, line) in quest_log_rows(game.quest_log(), rows).iter().enumerate() {
            let y = top + (i + 1) as f32 * LINE_HEIGHT - 4.0;
            draw_text(line, 6.0, y, FONT_SIZE - 2.0, self.palette.log_text);
        }
    }

    fn render_status(&self, game: &GameState, width: f32, height: f32) {
        let top = height - BAR_HEIGHT;
        draw_rectangle(0.0, top, width, BAR_HEIGHT, BLUE);
        draw_text(&game.player_summary(), 6.0, height - 6.0, FONT_SIZE, YELLOW);

        let version = format!("v{VERSION}");
        let size = measure_text(&version, None, FONT_SIZE as u16, 1.0);
        draw_text(&version, width - size.width - 6.0, height - 6.0, FONT_SIZE, YELLOW);
    }
}

/// Top-left map cell of a `view`-sized window that keeps the player centred
/// without scrolling past the map edges.
pub fn viewport_origin(player: (i32, i32), map: (i32, i32), view: (i32, i32)) -> (i32, i32) {
    let axis = |pos: i32, map: i32, view: i32| (pos - view / 2).min(map - view).max(0);
    (axis(player.0, map.0, view.0), axis(player.1, map.1, view.1))
}

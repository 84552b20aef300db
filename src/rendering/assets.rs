//! # Sprite Assets
//!
//! Loads a sprite sheet and slices it into fixed-size tiles.

use crate::{YaspError, YaspResult};
use macroquad::prelude::*;
use std::path::Path;

/// Width of one sprite in pixels.
pub const SPRITE_WIDTH: f32 = 16.0;
/// Height of one sprite in pixels.
pub const SPRITE_HEIGHT: f32 = 16.0;

/// A named region of a sprite sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct TileRegion {
    pub name: String,
    pub rect: Rect,
}

/// A decoded sprite sheet and its tiles in raster order.
#[derive(Clone)]
pub struct Tilemap {
    pub name: String,
    pub image: Image,
    pub tiles: Vec<TileRegion>,
}

impl Tilemap {
    /// Decodes image bytes (PNG) and slices the image into 16x16 tiles.
    pub fn load(name: &str, png: &[u8]) -> YaspResult<Self> {
        let image = Image::from_file_with_format(png, None)
            .map_err(|e| YaspError::Asset(format!("cannot decode tilemap {name}: {e:?}")))?;
        let tiles = Self::slice(name, image.width() as f32, image.height() as f32);
        log::debug!("Loaded tilemap {name} with {} tiles", tiles.len());

        Ok(Self {
            name: name.to_string(),
            image,
            tiles,
        })
    }

    /// Reads and decodes a PNG file.
    pub fn load_file(name: &str, path: impl AsRef<Path>) -> YaspResult<Self> {
        let png = std::fs::read(path)?;
        Self::load(name, &png)
    }

    /// Cuts a `width` x `height` pixel area into whole 16x16 tiles, row by row
    /// from the top-left, naming each `"<name>_<index>"`. Partial tiles at the
    /// right and bottom edges are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use yasp::rendering::assets::Tilemap;
    ///
    /// let tiles = Tilemap::slice("dungeon", 32.0, 16.0);
    /// assert_eq!(tiles.len(), 2);
    /// assert_eq!(tiles[1].name, "dungeon_1");
    /// assert_eq!(tiles[1].rect.x, 16.0);
    /// ```
    pub fn slice(name: &str, width: f32, height: f32) -> Vec<TileRegion> {
        let columns = (width / SPRITE_WIDTH).floor().max(0.0) as usize;
        let rows = (height / SPRITE_HEIGHT).floor().max(0.0) as usize;

        (0..rows)
            .flat_map(|row| (0..columns).map(move |column| (row, column)))
            .enumerate()
            .map(|(index, (row, column))| TileRegion {
                name: format!("{name}_{index}"),
                rect: Rect::new(
                    column as f32 * SPRITE_WIDTH,
                    row as f32 * SPRITE_HEIGHT,
                    SPRITE_WIDTH,
                    SPRITE_HEIGHT,
                ),
            })
            .collect()
    }
}

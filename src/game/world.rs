//! # World Representation
//!
//! Tile codes, the tiles they stand for, and the fixed-size dungeon map.
//!
//! A [`Map`] stores one [`TileCode`] per cell in row-major order
//! (`index = x + y * width`). Codes are resolved to display [`Tile`]s through
//! a [`TileSet`] handed to the map at construction, so tests and alternate
//! renderers can swap the table without touching global state.

use crate::{Direction, Position, YaspError, YaspResult};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Small integer identifying a terrain kind.
pub type TileCode = u8;

pub const GROUND: TileCode = 0;
pub const WALL: TileCode = 1;
pub const MOSS: TileCode = 2;
pub const STUMP: TileCode = 3;

/// Display representation of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    repr: char,
}

impl Tile {
    pub const GROUND: Tile = Tile::new('.');
    pub const WALL: Tile = Tile::new('#');
    pub const MOSS: Tile = Tile::new('~');
    pub const STUMP: Tile = Tile::new('=');
    pub const PLAYER: Tile = Tile::new('@');

    pub const fn new(repr: char) -> Self {
        Self { repr }
    }

    /// The glyph drawn for this tile.
    pub fn glyph(&self) -> char {
        self.repr
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.repr)
    }
}

/// Lookup table between tile codes and tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSet {
    tiles: HashMap<TileCode, Tile>,
    codes: HashMap<char, TileCode>,
}

impl TileSet {
    /// Builds a tile set from `(code, tile)` pairs.
    ///
    /// Every code and every glyph may appear only once, so that parsing a
    /// drawn layout is unambiguous.
    pub fn new(entries: impl IntoIterator<Item = (TileCode, Tile)>) -> YaspResult<Self> {
        let mut tiles = HashMap::new();
        let mut codes = HashMap::new();
        for (code, tile) in entries {
            if tiles.insert(code, tile).is_some() {
                return Err(YaspError::InvalidMap(format!("tile code {code} mapped twice")));
            }
            if let Some(other) = codes.insert(tile.glyph(), code) {
                return Err(YaspError::InvalidMap(format!(
                    "glyph '{tile}' used by codes {other} and {code}"
                )));
            }
        }
        Ok(Self { tiles, codes })
    }

    /// Resolves a code to its tile.
    pub fn tile(&self, code: TileCode) -> Option<Tile> {
        self.tiles.get(&code).copied()
    }

    /// Resolves a glyph back to its code.
    pub fn code(&self, glyph: char) -> Option<TileCode> {
        self.codes.get(&glyph).copied()
    }

    pub fn contains(&self, code: TileCode) -> bool {
        self.tiles.contains_key(&code)
    }
}

impl Default for TileSet {
    fn default() -> Self {
        let entries = [
            (GROUND, Tile::GROUND),
            (WALL, Tile::WALL),
            (MOSS, Tile::MOSS),
            (STUMP, Tile::STUMP),
        ];
        Self {
            tiles: entries.into_iter().collect(),
            codes: entries
                .into_iter()
                .map(|(code, tile)| (tile.glyph(), code))
                .collect(),
        }
    }
}

/// A map cell returned by the neighbourhood queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbour {
    pub tile: Tile,
    pub x: i32,
    pub y: i32,
}

impl fmt::Display for Neighbour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:3}, {:3}) {}", self.x, self.y, self.tile)
    }
}

/// Fixed-size grid of tile codes.
///
/// Immutable once built: there is no API to change a cell or resize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    width: i32,
    height: i32,
    tiles: Vec<TileCode>,
    tileset: Arc<TileSet>,
}

impl Map {
    /// Builds a map from a row-major list of codes.
    ///
    /// Fails if the dimensions are not positive, the code count is not
    /// `width * height`, or a code has no entry in the tile set.
    pub fn new(
        width: i32,
        height: i32,
        tiles: Vec<TileCode>,
        tileset: Arc<TileSet>,
    ) -> YaspResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(YaspError::InvalidMap(format!(
                "dimensions must be positive, got {width}x{height}"
            )));
        }
        let expected = width as usize * height as usize;
        if tiles.len() != expected {
            return Err(YaspError::InvalidMap(format!(
                "expected {expected} tiles for {width}x{height}, got {}",
                tiles.len()
            )));
        }
        if let Some(code) = tiles.iter().find(|code| !tileset.contains(**code)) {
            return Err(YaspError::InvalidMap(format!("unknown tile code {code}")));
        }

        Ok(Self {
            width,
            height,
            tiles,
            tileset,
        })
    }

    /// Builds a map from codes known to be valid, such as a built-in layout.
    pub(crate) fn from_trusted(
        width: i32,
        height: i32,
        tiles: Vec<TileCode>,
        tileset: Arc<TileSet>,
    ) -> Self {
        debug_assert_eq!(tiles.len(), (width * height) as usize);
        debug_assert!(tiles.iter().all(|code| tileset.contains(*code)));
        Self {
            width,
            height,
            tiles,
            tileset,
        }
    }

    /// Parses a map from rows of glyphs, one row per line.
    ///
    /// Rows are taken verbatim, so a tile set may use `' '` as a glyph. A
    /// trailing newline and `\r\n` line endings are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use yasp::{Map, Tile, TileSet};
    ///
    /// let map = Map::from_ascii(Arc::new(TileSet::default()), "###\n#.#\n###").unwrap();
    /// assert_eq!(map.dimensions(), (3, 3));
    /// assert_eq!(map.get_tile(1, 1), Tile::GROUND);
    /// ```
    pub fn from_ascii(tileset: Arc<TileSet>, layout: &str) -> YaspResult<Self> {
        let rows: Vec<&str> = layout.lines().collect();
        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(YaspError::InvalidMap("empty layout".to_string()));
        }

        let mut tiles = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(YaspError::InvalidMap(format!(
                    "row {y} has {} columns, expected {width}",
                    row.chars().count()
                )));
            }
            for glyph in row.chars() {
                let code = tileset.code(glyph).ok_or_else(|| {
                    YaspError::InvalidMap(format!("unknown glyph '{glyph}' in row {y}"))
                })?;
                tiles.push(code);
            }
        }

        Self::new(width as i32, rows.len() as i32, tiles, tileset)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn tileset(&self) -> &TileSet {
        &self.tileset
    }

    /// The raw codes in row-major order.
    pub fn codes(&self) -> &[TileCode] {
        &self.tiles
    }

    /// Whether `(x, y)` lies inside the map.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    /// Flat index of `(x, y)`, or `None` when out of bounds.
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y).then(|| (x + y * self.width) as usize)
    }

    /// Tile at `(x, y)`.
    ///
    /// Callers bounds-check first; this sits on the per-frame draw path and
    /// does not return a `Result`. Out-of-range coordinates are a caller bug.
    pub fn get_tile(&self, x: i32, y: i32) -> Tile {
        debug_assert!(self.contains(x, y), "({x}, {y}) outside map");
        self.get_tile_index((x + y * self.width) as usize)
    }

    /// Tile at a flat index.
    pub fn get_tile_index(&self, index: usize) -> Tile {
        let code = self.tiles[index];
        match self.tileset.tile(code) {
            Some(tile) => tile,
            // Map::new rejects unmapped codes and maps are never mutated.
            None => unreachable!("tile code {code} missing from tile set"),
        }
    }

    /// The up-to-8 Moore neighbours of `(x, y)` that lie inside the map,
    /// clockwise from the north-west. Out-of-bounds cells are omitted.
    pub fn get_neighbours(&self, x: i32, y: i32) -> Vec<Neighbour> {
        Position::new(x, y)
            .adjacent_positions()
            .into_iter()
            .filter_map(|pos| {
                self.index_of(pos.x, pos.y).map(|index| Neighbour {
                    tile: self.get_tile_index(index),
                    x: pos.x,
                    y: pos.y,
                })
            })
            .collect()
    }

    /// All 8 neighbours of `(x, y)` on a torus: coordinates past an edge wrap
    /// around to the opposite edge.
    pub fn get_surrounding_tiles(&self, x: i32, y: i32) -> [Neighbour; 8] {
        Direction::clockwise().map(|direction| {
            let delta = direction.to_delta();
            let nx = (x + delta.x).rem_euclid(self.width);
            let ny = (y + delta.y).rem_euclid(self.height);
            Neighbour {
                tile: self.get_tile(nx, ny),
                x: nx,
                y: ny,
            }
        })
    }
}

impl fmt::Display for Map {
    /// Debug dump: a header of hex column digits, then one line per row
    /// prefixed by the last decimal digit of its row number. Both labels are
    /// a single character so the grid stays aligned on any map size.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for x in 0..self.width {
            write!(f, "{:X}", x % 16)?;
        }
        writeln!(f)?;

        for y in 0..self.height {
            write!(f, "{}", y % 10)?;
            for x in 0..self.width {
                write!(f, "{}", self.get_tile(x, y))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

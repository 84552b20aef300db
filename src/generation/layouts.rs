//! # Fixed Layouts
//!
//! Hand-drawn maps used as the default dungeon and in tests.

use crate::game::{Map, TileCode, TileSet, GROUND, MOSS, STUMP, WALL};
use crate::YaspResult;
use std::sync::Arc;

/// Glyph drawing of [`ONE`], kept in sync by a test.
pub const ONE_ASCII: &str = "\
~#=#~
#...#
=...=
#...#
~#=#~";

/// A 5x5 room: wall border with moss corners and a stump in the middle of
/// each side, ground inside.
#[rustfmt::skip]
pub const ONE: [TileCode; 25] = [
    MOSS,  WALL,   STUMP,  WALL,   MOSS,
    WALL,  GROUND, GROUND, GROUND, WALL,
    STUMP, GROUND, GROUND, GROUND, STUMP,
    WALL,  GROUND, GROUND, GROUND, WALL,
    MOSS,  WALL,   STUMP,  WALL,   MOSS,
];

/// The 5x5 starting room with the default tile set.
pub fn one() -> Map {
    // The default set maps every terrain code used by ONE.
    Map::from_trusted(5, 5, ONE.to_vec(), Arc::new(TileSet::default()))
}

/// The 5x5 starting room resolved through `tileset`. Fails if the set does
/// not map every terrain code.
pub fn one_with(tileset: Arc<TileSet>) -> YaspResult<Map> {
    Map::new(5, 5, ONE.to_vec(), tileset)
}

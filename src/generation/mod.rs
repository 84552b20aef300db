//! # Generation Module
//!
//! Map generation: seeded random fill and fixed hand-drawn layouts.
//!
//! Random maps are a per-cell coin flip. The same seed and dimensions always
//! produce the same map, which is what the tests rely on.

pub mod layouts;

use crate::config::{DEFAULT_DUNGEON_HEIGHT, DEFAULT_DUNGEON_WIDTH};
use crate::game::{Map, TileSet, GROUND, WALL};
use crate::{YaspError, YaspResult};
use rand::rngs::StdRng;
use rand::Rng;
use std::sync::Arc;

/// Configuration for map generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Map width in tiles
    pub width: i32,
    /// Map height in tiles
    pub height: i32,
    /// Rolls in `[0, 100)` below this value become walls
    pub wall_threshold: u32,
}

impl GenerationConfig {
    /// Creates a configuration with the default dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use yasp::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(42);
    /// assert_eq!(config.wall_threshold, 45);
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            width: DEFAULT_DUNGEON_WIDTH,
            height: DEFAULT_DUNGEON_HEIGHT,
            wall_threshold: 45,
        }
    }

    /// Sets the map dimensions.
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Core trait for generation systems.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> YaspResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> YaspResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Fills every cell independently: wall below the threshold, ground otherwise.
#[derive(Debug, Clone)]
pub struct RandomFillGenerator {
    tileset: Arc<TileSet>,
}

impl RandomFillGenerator {
    pub fn new(tileset: Arc<TileSet>) -> Self {
        Self { tileset }
    }
}

impl Default for RandomFillGenerator {
    fn default() -> Self {
        Self::new(Arc::new(TileSet::default()))
    }
}

impl Generator<Map> for RandomFillGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> YaspResult<Map> {
        if config.width <= 0 || config.height <= 0 {
            return Err(YaspError::InvalidMap(format!(
                "cannot generate a {}x{} map",
                config.width, config.height
            )));
        }

        let cells = config.width as usize * config.height as usize;
        let tiles = (0..cells)
            .map(|_| {
                let roll: u32 = rng.gen_range(0..100);
                if roll >= config.wall_threshold {
                    GROUND
                } else {
                    WALL
                }
            })
            .collect();

        let map = Map::new(config.width, config.height, tiles, Arc::clone(&self.tileset))?;
        self.validate(&map, config)?;
        log::debug!(
            "{} generated a {}x{} map from seed {}",
            self.generator_type(),
            config.width,
            config.height,
            config.seed
        );
        Ok(map)
    }

    fn validate(&self, content: &Map, config: &GenerationConfig) -> YaspResult<()> {
        if content.dimensions() != (config.width, config.height) {
            return Err(YaspError::InvalidMap(format!(
                "generated {:?}, expected {}x{}",
                content.dimensions(),
                config.width,
                config.height
            )));
        }
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "RandomFill"
    }
}

/// Generates a random-fill map from a seed with the default tile set.
///
/// # Examples
///
/// ```
/// use yasp::generate_map;
///
/// let a = generate_map(7, 16, 8).unwrap();
/// let b = generate_map(7, 16, 8).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn generate_map(seed: u64, width: i32, height: i32) -> YaspResult<Map> {
    let config = GenerationConfig::new(seed).with_size(width, height);
    let mut rng = utils::create_rng(&config);
    RandomFillGenerator::default().generate(&config, &mut rng)
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;
    use rand::SeedableRng;

    /// Creates a seeded random number generator from a config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }
}

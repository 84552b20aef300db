//! # Game Module
//!
//! Core game state: the dungeon map, the player, the quest log and the event
//! loop that ties them together.

pub mod events;
pub mod player;
pub mod questlog;
pub mod state;
pub mod world;

pub use events::*;
pub use player::*;
pub use questlog::*;
pub use state::*;
pub use world::*;

/// Represents a 2D coordinate in the game world.
///
/// # Examples
///
/// ```
/// use yasp::Position;
///
/// let pos = Position::new(10, 5);
/// assert_eq!(pos.x, 10);
/// assert_eq!(pos.y, 5);
///
/// let adjacent = pos.adjacent_positions();
/// assert_eq!(adjacent.len(), 8); // All 8 surrounding positions
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns all 8 adjacent positions, clockwise from the north-west corner.
    pub fn adjacent_positions(self) -> [Position; 8] {
        Direction::clockwise().map(|direction| self + direction.to_delta())
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

/// Directions for movement and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

impl Direction {
    /// Converts a direction to a position delta.
    ///
    /// # Examples
    ///
    /// ```
    /// use yasp::{Direction, Position};
    ///
    /// let delta = Direction::North.to_delta();
    /// assert_eq!(delta, Position::new(0, -1));
    /// ```
    pub fn to_delta(self) -> Position {
        match self {
            Direction::North => Position::new(0, -1),
            Direction::South => Position::new(0, 1),
            Direction::East => Position::new(1, 0),
            Direction::West => Position::new(-1, 0),
            Direction::Northeast => Position::new(1, -1),
            Direction::Northwest => Position::new(-1, -1),
            Direction::Southeast => Position::new(1, 1),
            Direction::Southwest => Position::new(-1, 1),
        }
    }

    /// All 8 directions in neighbour-query order: NW, N, NE, E, SE, S, SW, W.
    pub fn clockwise() -> [Direction; 8] {
        [
            Direction::Northwest,
            Direction::North,
            Direction::Northeast,
            Direction::East,
            Direction::Southeast,
            Direction::South,
            Direction::Southwest,
            Direction::West,
        ]
    }

    /// Converts the direction into a movement event.
    pub fn to_movement(self) -> GameEvent {
        let delta = self.to_delta();
        GameEvent::Movement {
            off_x: delta.x,
            off_y: delta.y,
        }
    }
}

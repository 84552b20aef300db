//! # Player
//!
//! The player's position on the map.

use std::fmt;

/// The player character.
///
/// Positions are not checked against the map here. Every mutation must be
/// followed by [`Player::clamp`] with the map dimensions; the game state does
/// this for every movement event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Player {
    x: i32,
    y: i32,
}

impl Player {
    /// Creates a player at the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Current position.
    pub fn pos(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Adds the offsets to the current position and returns the new position.
    pub fn move_by(&mut self, off_x: i32, off_y: i32) -> (i32, i32) {
        self.x = self.x.saturating_add(off_x);
        self.y = self.y.saturating_add(off_y);
        self.pos()
    }

    /// Sets the position and returns the position it replaced.
    pub fn move_to(&mut self, x: i32, y: i32) -> (i32, i32) {
        let previous = self.pos();
        self.x = x;
        self.y = y;
        previous
    }

    /// Restricts the position to `[0, max_x)` and `[0, max_y)` and returns the
    /// clamped position.
    ///
    /// # Examples
    ///
    /// ```
    /// use yasp::Player;
    ///
    /// let mut player = Player::new(-3, 12);
    /// assert_eq!(player.clamp(5, 5), (0, 4));
    /// assert_eq!(player.clamp(5, 5), (0, 4));
    /// ```
    pub fn clamp(&mut self, max_x: i32, max_y: i32) -> (i32, i32) {
        self.x = self.x.min(max_x - 1).max(0);
        self.y = self.y.min(max_y - 1).max(0);
        self.pos()
    }

    /// Whether the position lies inside `[0, max_x) × [0, max_y)`.
    pub fn is_within(&self, max_x: i32, max_y: i32) -> bool {
        (0..max_x).contains(&self.x) && (0..max_y).contains(&self.y)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player: x={:4} y={:4}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_by_returns_new_position() {
        let mut player = Player::new(1, 1);
        assert_eq!(player.move_by(2, -3), (3, -2));
        assert_eq!(player.pos(), (3, -2));
    }

    #[test]
    fn test_move_to_returns_previous_position() {
        let mut player = Player::new(1, 1);
        assert_eq!(player.move_to(4, 2), (1, 1));
        assert_eq!(player.pos(), (4, 2));
        assert_eq!(player.move_to(4, 2), (4, 2));
    }

    #[test]
    fn test_clamp_low_and_high() {
        let mut player = Player::new(-1, -1);
        assert_eq!(player.clamp(5, 5), (0, 0));

        player.move_to(9, 7);
        assert_eq!(player.clamp(5, 5), (4, 4));
        assert!(player.is_within(5, 5));
    }

    #[test]
    fn test_clamp_leaves_inside_positions_alone() {
        let mut player = Player::new(2, 3);
        assert_eq!(player.clamp(5, 5), (2, 3));
    }

    #[test]
    fn test_display() {
        let player = Player::new(1, 12);
        assert_eq!(player.to_string(), "Player: x=   1 y=  12");
    }
}

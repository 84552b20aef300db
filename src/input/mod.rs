//! # Input Module
//!
//! Turns key presses into game events and view commands.
//!
//! Named keys (arrows, escape, enter) arrive as [`KeyCode`]s; printable
//! characters arrive as `char`s. Both are translated here, and anything that
//! is not bound to a view command or a movement becomes a
//! [`GameEvent::KeyPress`].

use crate::config::REDRAW_TICK;
use crate::{Direction, GameEvent};
use macroquad::prelude::*;
use std::time::{Duration, Instant};

/// How long a movement key must be held before it starts repeating.
pub const REPEAT_DELAY: Duration = Duration::from_millis(250);

/// Input after translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Forward to the game loop
    Game(GameEvent),
    /// Close the window
    Quit,
    /// Toggle the highlight drawn around the player
    ToggleHighlight,
}

/// Input handler for processing player commands.
pub struct InputHandler {
    /// Whether to move on WASD and the yubn diagonals
    pub letter_movement: bool,
    held: Option<HeldKey>,
}

#[derive(Debug, Clone, Copy)]
struct HeldKey {
    key: KeyCode,
    since: Instant,
    last_repeat: Instant,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use yasp::{InputHandler, PlayerInput, GameEvent};
    ///
    /// let input_handler = InputHandler::new();
    /// assert_eq!(
    ///     input_handler.translate_char('x'),
    ///     Some(PlayerInput::Game(GameEvent::KeyPress { key: 'x' }))
    /// );
    /// ```
    pub fn new() -> Self {
        Self {
            letter_movement: true,
            held: None,
        }
    }

    /// Translates a named key. Printable keys return `None`; they are handled
    /// through [`InputHandler::translate_char`].
    pub fn translate_key(&self, key: KeyCode) -> Option<PlayerInput> {
        match key {
            KeyCode::Escape | KeyCode::Enter | KeyCode::KpEnter => Some(PlayerInput::Quit),
            _ => arrow_direction(key).map(|d| PlayerInput::Game(d.to_movement())),
        }
    }

    /// Translates a typed character.
    pub fn translate_char(&self, c: char) -> Option<PlayerInput> {
        if c.is_control() {
            return None;
        }
        match c {
            'q' | 'Q' => Some(PlayerInput::Quit),
            'h' | 'H' => Some(PlayerInput::ToggleHighlight),
            _ => {
                if self.letter_movement {
                    if let Some(direction) = letter_direction(c) {
                        return Some(PlayerInput::Game(direction.to_movement()));
                    }
                }
                Some(PlayerInput::Game(GameEvent::KeyPress { key: c }))
            }
        }
    }

    /// Collects this frame's input from macroquad.
    pub fn poll(&mut self) -> Vec<PlayerInput> {
        let mut inputs: Vec<PlayerInput> = get_keys_pressed()
            .into_iter()
            .filter_map(|key| self.translate_key(key))
            .collect();

        while let Some(c) = get_char_pressed() {
            if let Some(input) = self.translate_char(c) {
                inputs.push(input);
            }
        }

        let held = [KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right]
            .into_iter()
            .find(|key| is_key_down(*key));
        if let Some(input) = self.repeat(held, Instant::now()) {
            inputs.push(input);
        }

        inputs
    }

    /// Tracks the held arrow key and emits a repeated movement once per
    /// [`REDRAW_TICK`] after [`REPEAT_DELAY`].
    pub fn repeat(&mut self, held: Option<KeyCode>, now: Instant) -> Option<PlayerInput> {
        let Some(key) = held else {
            self.held = None;
            return None;
        };

        match self.held {
            Some(ref mut state) if state.key == key => {
                if now.duration_since(state.since) >= REPEAT_DELAY
                    && now.duration_since(state.last_repeat) >= REDRAW_TICK
                {
                    state.last_repeat = now;
                    return arrow_direction(key).map(|d| PlayerInput::Game(d.to_movement()));
                }
                None
            }
            _ => {
                // The initial press was already reported by get_keys_pressed.
                self.held = Some(HeldKey {
                    key,
                    since: now,
                    last_repeat: now,
                });
                None
            }
        }
    }
}

fn arrow_direction(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Up => Some(Direction::North),
        KeyCode::Down => Some(Direction::South),
        KeyCode::Left => Some(Direction::West),
        KeyCode::Right => Some(Direction::East),
        _ => None,
    }
}

fn letter_direction(c: char) -> Option<Direction> {
    match c.to_ascii_lowercase() {
        'w' => Some(Direction::North),
        's' => Some(Direction::South),
        'a' => Some(Direction::West),
        'd' => Some(Direction::East),
        'y' => Some(Direction::Northwest),
        'u' => Some(Direction::Northeast),
        'b' => Some(Direction::Southwest),
        'n' => Some(Direction::Southeast),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movement(off_x: i32, off_y: i32) -> Option<PlayerInput> {
        Some(PlayerInput::Game(GameEvent::Movement { off_x, off_y }))
    }

    #[test]
    fn test_arrow_keys_move() {
        let input = InputHandler::new();
        assert_eq!(input.translate_key(KeyCode::Up), movement(0, -1));
        assert_eq!(input.translate_key(KeyCode::Down), movement(0, 1));
        assert_eq!(input.translate_key(KeyCode::Left), movement(-1, 0));
        assert_eq!(input.translate_key(KeyCode::Right), movement(1, 0));
    }

    #[test]
    fn test_quit_keys() {
        let input = InputHandler::new();
        assert_eq!(input.translate_key(KeyCode::Escape), Some(PlayerInput::Quit));
        assert_eq!(input.translate_key(KeyCode::Enter), Some(PlayerInput::Quit));
        assert_eq!(input.translate_char('q'), Some(PlayerInput::Quit));
        assert_eq!(input.translate_char('Q'), Some(PlayerInput::Quit));
    }

    #[test]
    fn test_printable_keys_are_left_to_chars() {
        let input = InputHandler::new();
        assert_eq!(input.translate_key(KeyCode::W), None);
        assert_eq!(input.translate_key(KeyCode::Space), None);
    }

    #[test]
    fn test_letter_movement() {
        let mut input = InputHandler::new();
        assert_eq!(input.translate_char('w'), movement(0, -1));
        assert_eq!(input.translate_char('Y'), movement(-1, -1));
        assert_eq!(input.translate_char('n'), movement(1, 1));

        input.letter_movement = false;
        assert_eq!(
            input.translate_char('w'),
            Some(PlayerInput::Game(GameEvent::KeyPress { key: 'w' }))
        );
    }

    #[test]
    fn test_highlight_and_unbound_chars() {
        let input = InputHandler::new();
        assert_eq!(input.translate_char('h'), Some(PlayerInput::ToggleHighlight));
        assert_eq!(
            input.translate_char('i'),
            Some(PlayerInput::Game(GameEvent::KeyPress { key: 'i' }))
        );
        assert_eq!(input.translate_char('\r'), None);
    }

    #[test]
    fn test_held_key_repeats_after_delay() {
        let mut input = InputHandler::new();
        let start = Instant::now();

        assert_eq!(input.repeat(Some(KeyCode::Right), start), None);
        assert_eq!(
            input.repeat(Some(KeyCode::Right), start + Duration::from_millis(100)),
            None
        );

        let first = start + REPEAT_DELAY;
        assert_eq!(input.repeat(Some(KeyCode::Right), first), movement(1, 0));
        // Rate-limited to one repeat per tick.
        assert_eq!(
            input.repeat(Some(KeyCode::Right), first + Duration::from_millis(10)),
            None
        );
        assert_eq!(
            input.repeat(Some(KeyCode::Right), first + REDRAW_TICK),
            movement(1, 0)
        );
    }

    #[test]
    fn test_release_resets_repeat() {
        let mut input = InputHandler::new();
        let start = Instant::now();

        input.repeat(Some(KeyCode::Up), start);
        assert_eq!(input.repeat(None, start + REPEAT_DELAY), None);
        // Pressing again restarts the delay.
        assert_eq!(input.repeat(Some(KeyCode::Up), start + REPEAT_DELAY), None);
    }
}

//! # Configuration
//!
//! Window configuration read from a YAML file at startup, plus the fixed
//! tuning constants of the game loop.

use crate::{YaspError, YaspResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Capacity of the bounded event channel feeding the game loop.
pub const DEFAULT_EVENT_BUFFER: usize = 16;

/// Minimum interval between repeated movement events for a held key.
pub const REDRAW_TICK: Duration = Duration::from_millis(50);

/// Default width of a generated dungeon in tiles
pub const DEFAULT_DUNGEON_WIDTH: i32 = 32;

/// Default height of a generated dungeon in tiles
pub const DEFAULT_DUNGEON_HEIGHT: i32 = 16;

/// Exit status used when the configuration cannot be loaded.
pub const CONFIG_ERROR_EXIT_CODE: i32 = 78;

/// Window configuration read from disk.
///
/// # Examples
///
/// ```
/// use yasp::Config;
///
/// let config = Config::from_yaml("winwidth: 10\nwinheight: 20\n").unwrap();
/// assert_eq!(config.win_width, 10);
/// assert_eq!(config.win_height, 20);
/// assert!(!config.vsync);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Window width in pixels
    #[serde(rename = "winwidth", default)]
    pub win_width: i32,
    /// Window height in pixels
    #[serde(rename = "winheight", default)]
    pub win_height: i32,
    /// Whether to synchronise buffer swaps with the display refresh
    #[serde(default)]
    pub vsync: bool,
}

impl Config {
    /// Checks that the window dimensions are usable.
    pub fn valid(&self) -> YaspResult<()> {
        if self.win_width <= 0 {
            return Err(YaspError::Config("invalid WinWidth".to_string()));
        }
        if self.win_height <= 0 {
            return Err(YaspError::Config("invalid WinHeight".to_string()));
        }
        Ok(())
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml(yaml: &str) -> YaspResult<Self> {
        // An empty document deserializes to unit, not to a mapping.
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.valid()?;
        Ok(config)
    }
}

/// Loads the configuration from the given YAML text.
pub fn load_config(yaml: &str) -> YaspResult<Config> {
    Config::from_yaml(yaml)
}

/// Loads the configuration from a YAML file on disk.
pub fn load_config_file(path: impl AsRef<Path>) -> YaspResult<Config> {
    let path = path.as_ref();
    log::debug!("Loading config from {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    load_config(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_rejects_bad_width() {
        let config = Config {
            win_width: -1,
            win_height: 1,
            vsync: false,
        };
        let err = config.valid().unwrap_err();
        assert_eq!(err.to_string(), "invalid WinWidth");
    }

    #[test]
    fn test_valid_rejects_bad_height() {
        let config = Config {
            win_width: 1,
            win_height: -1,
            vsync: false,
        };
        let err = config.valid().unwrap_err();
        assert_eq!(err.to_string(), "invalid WinHeight");
    }

    #[test]
    fn test_valid_accepts_positive_dimensions() {
        let config = Config {
            win_width: 1,
            win_height: 1,
            vsync: false,
        };
        assert!(config.valid().is_ok());
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let err = load_config("winwidth: 0\nwinheight: 20\n").unwrap_err();
        assert!(matches!(err, YaspError::Config(ref msg) if msg == "invalid WinWidth"));
    }

    #[test]
    fn test_empty_document_fails_validation() {
        let err = load_config("").unwrap_err();
        assert_eq!(err.to_string(), "invalid WinWidth");
    }

    #[test]
    fn test_bad_yaml_is_a_parse_error() {
        let err = load_config("[").unwrap_err();
        assert!(matches!(err, YaspError::Yaml(_)));
    }

    #[test]
    fn test_vsync_flag() {
        let config = load_config("winwidth: 640\nwinheight: 480\nvsync: true\n").unwrap();
        assert!(config.vsync);
    }
}

//! # Quest Log
//!
//! Append-only narrative of what happened to the player.

use crate::{YaspError, YaspResult};
use chrono::{DateTime, Local};
use std::fmt;
use std::sync::{PoisonError, RwLock};

/// Icon used for movement entries.
pub const MOVEMENT_ICON: char = '*';

/// One timestamped line of the quest log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestLogItem {
    time: DateTime<Local>,
    icon: char,
    msg: String,
}

impl QuestLogItem {
    /// Creates an item stamped with the current local time.
    pub fn new(icon: char, msg: impl Into<String>) -> Self {
        Self::at(Local::now(), icon, msg)
    }

    /// Creates an item with an explicit timestamp.
    pub fn at(time: DateTime<Local>, icon: char, msg: impl Into<String>) -> Self {
        Self {
            time,
            icon,
            msg: msg.into(),
        }
    }

    pub fn time(&self) -> DateTime<Local> {
        self.time
    }

    pub fn icon(&self) -> char {
        self.icon
    }

    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for QuestLogItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {}",
            self.icon,
            self.time.format("%H:%M:%S"),
            self.msg
        )
    }
}

/// Thread-safe, append-only list of [`QuestLogItem`]s.
///
/// Every accessor takes the same lock, so readers always see a consistent,
/// monotonically growing log. Items are handed out by value; there is no
/// iterator that could race with an append.
#[derive(Debug, Default)]
pub struct QuestLog {
    items: RwLock<Vec<QuestLogItem>>,
}

impl QuestLog {
    /// Creates an empty quest log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items recorded so far.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends an item.
    pub fn add_item(&self, item: QuestLogItem) {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(item);
    }

    /// Returns a copy of the item at `index`.
    pub fn get_item(&self, index: usize) -> YaspResult<QuestLogItem> {
        let items = self.read();
        items.get(index).cloned().ok_or(YaspError::Index {
            index,
            len: items.len(),
        })
    }

    /// Returns up to `count` items, newest first, taken under a single lock.
    pub fn latest(&self, count: usize) -> Vec<QuestLogItem> {
        self.read().iter().rev().take(count).cloned().collect()
    }

    /// Records that the player moved from `(old_x, old_y)` to `(x, y)`.
    pub fn record_player_movement(&self, x: i32, y: i32, old_x: i32, old_y: i32) {
        self.add_item(QuestLogItem::new(
            MOVEMENT_ICON,
            format!("You move from ({old_x:3},{old_y:3}) to ({x:3},{y:3})"),
        ));
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<QuestLogItem>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }
}

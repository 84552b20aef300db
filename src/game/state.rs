//! # Game State Module
//!
//! Central game state and the event loop that mutates it.
//!
//! [`GameState`] owns the map, the player and the quest log. Views read it
//! through the `get_*` accessors, which only take shared locks. All mutations
//! go through [`GameState::apply_event`], which the [`EventLoop`] calls for
//! each event it pulls off the bounded channel. There is exactly one consumer,
//! so mutations are applied strictly in the order they were sent.

use crate::config::DEFAULT_EVENT_BUFFER;
use crate::{GameEvent, Map, Player, QuestLog, Tile, YaspError, YaspResult};
use log::{debug, error, info};
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Central game state shared between the event loop and the view.
#[derive(Debug)]
pub struct GameState {
    /// Immutable after construction, so read without locking
    map: Map,
    /// Only written by the event loop
    player: RwLock<Player>,
    quest_log: QuestLog,
    player_tile: Tile,
}

impl GameState {
    /// Creates a game on the given map with the player at `start`.
    ///
    /// The start position is clamped into the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use yasp::{layouts, GameState};
    ///
    /// let game = GameState::new(layouts::one(), (1, 1));
    /// assert_eq!(game.get_player_pos(), (1, 1));
    /// assert_eq!(game.get_map_dimensions(), (5, 5));
    /// ```
    pub fn new(map: Map, start: (i32, i32)) -> Self {
        let mut player = Player::new(start.0, start.1);
        let (width, height) = map.dimensions();
        player.clamp(width, height);

        Self {
            map,
            player: RwLock::new(player),
            quest_log: QuestLog::new(),
            player_tile: Tile::PLAYER,
        }
    }

    /// Replaces the tile drawn at the player's position.
    pub fn with_player_tile(mut self, tile: Tile) -> Self {
        self.player_tile = tile;
        self
    }

    /// Current player position.
    pub fn get_player_pos(&self) -> (i32, i32) {
        self.player().pos()
    }

    /// `(width, height)` of the map.
    pub fn get_map_dimensions(&self) -> (i32, i32) {
        self.map.dimensions()
    }

    /// Tile to draw at `(x, y)`: the player tile where the player stands,
    /// otherwise the terrain.
    pub fn get_map_tile(&self, x: i32, y: i32) -> YaspResult<Tile> {
        let (width, height) = self.map.dimensions();
        if !self.map.contains(x, y) {
            return Err(YaspError::OutOfBounds {
                x,
                y,
                width,
                height,
            });
        }

        if self.player().pos() == (x, y) {
            Ok(self.player_tile)
        } else {
            Ok(self.map.get_tile(x, y))
        }
    }

    /// Status-bar summary of the player.
    pub fn player_summary(&self) -> String {
        self.player().to_string()
    }

    pub fn quest_log(&self) -> &QuestLog {
        &self.quest_log
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    /// Applies one event. Returns `true` if a quest log entry was appended.
    pub fn apply_event(&self, event: GameEvent) -> bool {
        match event {
            GameEvent::Movement { off_x, off_y } => self.move_player(off_x, off_y),
            GameEvent::KeyPress { key } => {
                debug!("Pressed {key}");
                false
            }
        }
    }

    /// Moves the player and logs the move if it changed anything.
    ///
    /// The write lock is held across the move, the clamp and the log append so
    /// that readers never observe a position without its log entry.
    fn move_player(&self, off_x: i32, off_y: i32) -> bool {
        let (width, height) = self.map.dimensions();
        let mut player = self.player.write().unwrap_or_else(PoisonError::into_inner);

        let (old_x, old_y) = player.pos();
        player.move_by(off_x, off_y);
        let (x, y) = player.clamp(width, height);

        if !player.is_within(width, height) {
            error!("Player at ({x}, {y}) escaped the {width}x{height} map after clamping");
        }
        debug_assert!(player.is_within(width, height));

        if (x, y) == (old_x, old_y) {
            debug!("Move ({off_x:+}, {off_y:+}) blocked at ({x}, {y})");
            return false;
        }

        self.quest_log.record_player_movement(x, y, old_x, old_y);
        debug!("Player moved from ({old_x}, {old_y}) to ({x}, {y})");
        true
    }

    fn player(&self) -> std::sync::RwLockReadGuard<'_, Player> {
        self.player.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts the event loop on the current tokio runtime with the default
    /// channel capacity.
    pub fn spawn(self: Arc<Self>) -> GameHandle {
        self.spawn_with_capacity(DEFAULT_EVENT_BUFFER)
    }

    /// Starts the event loop on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime, or if `capacity` is zero.
    pub fn spawn_with_capacity(self: Arc<Self>, capacity: usize) -> GameHandle {
        let (events_tx, events_rx) = mpsc::channel(capacity);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let event_loop = EventLoop::new(Arc::clone(&self), events_rx, shutdown_rx);
        let task = tokio::spawn(event_loop.run());

        GameHandle {
            state: self,
            events: events_tx,
            shutdown: shutdown_tx,
            task,
        }
    }
}

/// Single consumer of the game's event channel.
pub struct EventLoop {
    state: Arc<GameState>,
    events: mpsc::Receiver<GameEvent>,
    shutdown: watch::Receiver<bool>,
}

impl EventLoop {
    pub fn new(
        state: Arc<GameState>,
        events: mpsc::Receiver<GameEvent>,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            state,
            events,
            shutdown,
        }
    }

    /// Runs until a shutdown is signalled or every sender is dropped.
    ///
    /// Returns the number of events processed.
    pub async fn run(mut self) -> u64 {
        info!("Game loop started");
        let mut processed = 0;

        loop {
            tokio::select! {
                biased;

                // A dropped shutdown sender counts as a shutdown request.
                _ = self.shutdown.changed() => {
                    debug!("Game loop received shutdown signal");
                    break;
                }
                event = self.events.recv() => match event {
                    Some(event) => {
                        self.state.apply_event(event);
                        processed += 1;
                    }
                    None => {
                        debug!("All event senders dropped");
                        break;
                    }
                },
            }
        }

        info!("Game loop stopped after {processed} events");
        processed
    }
}

/// Owner-side handle to a running game loop.
pub struct GameHandle {
    state: Arc<GameState>,
    events: mpsc::Sender<GameEvent>,
    shutdown: watch::Sender<bool>,
    task: JoinHandle<u64>,
}

impl GameHandle {
    /// The state the loop is mutating.
    pub fn state(&self) -> &Arc<GameState> {
        &self.state
    }

    /// A producer for the event channel.
    pub fn sender(&self) -> mpsc::Sender<GameEvent> {
        self.events.clone()
    }

    /// Enqueues an event, waiting while the channel is full.
    pub async fn send(&self, event: GameEvent) -> YaspResult<()> {
        self.events
            .send(event)
            .await
            .map_err(|_| YaspError::LoopStopped)
    }

    /// Enqueues an event from synchronous code, blocking while the channel is
    /// full. Must not be called from inside an async context.
    pub fn blocking_send(&self, event: GameEvent) -> YaspResult<()> {
        self.events
            .blocking_send(event)
            .map_err(|_| YaspError::LoopStopped)
    }

    /// Signals the loop to stop and waits for it. Events still queued are
    /// dropped. Returns the number of events the loop processed.
    pub async fn shutdown(self) -> u64 {
        // The loop may already have exited, in which case nobody is listening.
        let _ = self.shutdown.send(true);
        match self.task.await {
            Ok(processed) => processed,
            Err(e) => {
                error!("Game loop task failed: {e}");
                0
            }
        }
    }

    /// Drops the producer side and waits for the loop to drain every queued
    /// event. Other clones of the sender keep the loop alive.
    pub async fn drain(self) -> u64 {
        let GameHandle {
            events,
            shutdown,
            task,
            ..
        } = self;
        drop(events);
        let processed = match task.await {
            Ok(processed) => processed,
            Err(e) => {
                error!("Game loop task failed: {e}");
                0
            }
        };
        drop(shutdown);
        processed
    }
}

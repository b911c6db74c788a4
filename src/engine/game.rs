//! Game aggregate: board, overlay, fuses, players and the action queue.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::blast::FuseTracker;
use crate::board::{Board, Marker, MarkerGrid};
use crate::core::{
    Action, ActionRecord, GameConfig, GameId, GameRng, Player, PlayerId, PlayerMap, Position,
    QueuedAction, PLAYER_SLOTS,
};
use crate::error::{GameError, Result};
use crate::rules::{self, Outcome};
use crate::snapshot::StatusSnapshot;

/// Lifecycle state of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    NotStarted,
    Ongoing,
    /// Terminal.
    Ended,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            GamePhase::NotStarted => "not started",
            GamePhase::Ongoing => "ongoing",
            GamePhase::Ended => "ended",
        })
    }
}

/// Summary of the most recent frame resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameReport {
    /// Frame number reached by the advance.
    pub frame: u32,
    /// Cells whose bomb detonated.
    pub detonated: Vec<Position>,
    /// Cells converted to Land by expiring explosions.
    pub converted: Vec<Position>,
    /// Players killed this frame.
    pub killed: Vec<PlayerId>,
}

/// A two-player game instance.
///
/// Single-threaded and fully isolated: run several games by creating several
/// instances. Cloning is cheap enough for branching searches; histories are
/// persistent vectors.
#[derive(Clone, Debug)]
pub struct Game {
    pub(super) id: GameId,
    pub(super) config: GameConfig,

    pub(super) board: Board,
    pub(super) markers: MarkerGrid,
    pub(super) fuses: FuseTracker,
    pub(super) spawns: [Position; PLAYER_SLOTS],

    pub(super) players: PlayerMap<Player>,
    pub(super) names: FxHashMap<String, PlayerId>,
    pub(super) queue: PlayerMap<Option<QueuedAction>>,

    pub(super) frame: u32,
    pub(super) phase: GamePhase,
    pub(super) action_log: Vector<ActionRecord>,
    pub(super) last_report: FrameReport,
}

impl Game {
    /// Build a game from its configuration.
    ///
    /// Fails with `Configuration` when the scheme's layout is invalid.
    pub fn new(config: GameConfig) -> Result<Self> {
        let layout = config.scheme.layout()?;
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let (rows, cols) = layout.board.dimensions();

        Ok(Self {
            id: rng.game_id(),
            config,
            board: layout.board,
            markers: MarkerGrid::new(rows, cols),
            fuses: FuseTracker::new(rows, cols),
            spawns: layout.spawns,
            players: PlayerMap::default(),
            names: FxHashMap::default(),
            queue: PlayerMap::default(),
            frame: 0,
            phase: GamePhase::NotStarted,
            action_log: Vector::new(),
            last_report: FrameReport::default(),
        })
    }

    /// Build a game from a scheme name (`"standard"`, `"IBM"`).
    pub fn named(scheme: &str) -> Result<Self> {
        Self::new(GameConfig::named(scheme)?)
    }

    // === Setup ===

    /// Register a player in the next free slot.
    ///
    /// The first player spawns top-left, the second bottom-right.
    pub fn register_player(&mut self, name: impl Into<String>) -> Result<PlayerId> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(GameError::DuplicateName { name });
        }
        if self.players.player_count() >= PLAYER_SLOTS {
            return Err(GameError::Capacity {
                capacity: PLAYER_SLOTS,
            });
        }

        let slot = self.spawns[self.players.player_count()];
        let id = PlayerId::new(self.players.player_count() as u8);
        self.players.push(Player::new(id, name.clone(), slot));
        self.queue.push(None);
        self.markers.add(slot, Marker::PlayerOccupant(id));
        debug!(game = %self.id, player = %id, %name, position = %slot, "player registered");
        self.names.insert(name, id);

        Ok(id)
    }

    /// Start the game, moving from frame 0 to frame 1.
    pub fn start(&mut self) -> Result<bool> {
        if self.phase != GamePhase::NotStarted {
            return Err(GameError::invalid_state(
                "start the game",
                format!("the game is already {}", self.phase),
            ));
        }
        if self.players.player_count() < PLAYER_SLOTS {
            return Err(GameError::invalid_state(
                "start the game",
                format!(
                    "only {} of {} players are registered",
                    self.players.player_count(),
                    PLAYER_SLOTS
                ),
            ));
        }

        self.frame = 1;
        self.phase = GamePhase::Ongoing;
        info!(game = %self.id, scheme = self.config.scheme.name(), "game started");
        Ok(true)
    }

    // === Actions ===

    /// Queue `action` for `player` for the next frame.
    ///
    /// Moves are checked against the current board: an illegal move is queued
    /// as staying in place. Queuing again before the frame advances replaces
    /// the previous entry. Every request is appended to the player's history.
    pub fn queue_action(&mut self, player: PlayerId, action: Action) -> Result<()> {
        if self.phase == GamePhase::NotStarted {
            return Err(GameError::invalid_state(
                "queue an action",
                "the game has not started",
            ));
        }
        let Some(record) = self.players.get_mut(player) else {
            return Err(GameError::UnknownPlayer { player });
        };

        let queued = rules::normalize(&self.board, &self.markers, record.position, action);
        record.history.push_back(action);
        self.queue[player] = Some(queued);
        self.action_log
            .push_back(ActionRecord::new(player, action, self.frame));
        trace!(game = %self.id, %player, %action, ?queued, "action queued");

        Ok(())
    }

    // === Queries ===

    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn frame(&self) -> u32 {
        self.frame
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phase != GamePhase::NotStarted
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn markers(&self) -> &MarkerGrid {
        &self.markers
    }

    #[must_use]
    pub fn fuses(&self) -> &FuseTracker {
        &self.fuses
    }

    /// Spawn slots in registration order.
    #[must_use]
    pub fn spawns(&self) -> [Position; PLAYER_SLOTS] {
        self.spawns
    }

    /// Registered players in registration order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&Player> {
        self.players.get(player)
    }

    #[must_use]
    pub fn player_id(&self, name: &str) -> Option<PlayerId> {
        self.names.get(name).copied()
    }

    /// The entry queued for `player`, if any.
    #[must_use]
    pub fn queued(&self, player: PlayerId) -> Option<QueuedAction> {
        self.queue.get(player).copied().flatten()
    }

    /// Every action requested so far, in request order.
    #[must_use]
    pub fn action_log(&self) -> &Vector<ActionRecord> {
        &self.action_log
    }

    /// What happened in the most recent frame advance.
    #[must_use]
    pub fn last_report(&self) -> &FrameReport {
        &self.last_report
    }

    /// Number of players still alive.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.players.values().filter(|p| p.alive).count()
    }

    /// Current outcome: ongoing until ended, then draw or the sole survivor.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome::from_alive(
            self.is_ended(),
            self.players.iter().map(|(id, p)| (id, p.alive)),
        )
    }

    /// Read-only projection of the whole game state.
    #[must_use]
    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot::capture(self)
    }
}

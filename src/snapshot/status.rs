//! Status snapshot: the read-only projection handed to collaborators.

use serde::{Deserialize, Serialize};

use crate::blast::BlastStage;
use crate::board::Terrain;
use crate::core::{PlayerId, Position};
use crate::engine::Game;
use crate::error::Result;
use crate::rules::Outcome;

/// One player as seen in a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatus {
    pub id: PlayerId,
    /// `player_1`, `player_2`.
    pub label: String,
    pub name: String,
    pub position: Position,
    pub alive: bool,
}

/// An active bomb and its fuse stage (`1..=4`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BombStatus {
    pub position: Position,
    pub fuse: u8,
}

/// Full projection of a game at one frame.
///
/// Cell lists are row-major. Taking a snapshot never changes the game, so two
/// snapshots taken without an intervening mutation are equal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub game_id: String,
    pub scheme: String,
    /// `(rows, cols)`.
    pub dimensions: (usize, usize),
    pub frame: u32,
    pub outcome: Outcome,
    /// In registration order.
    pub players: Vec<PlayerStatus>,
    pub void: Vec<Position>,
    pub land: Vec<Position>,
    pub block: Vec<Position>,
    pub bombs: Vec<BombStatus>,
    /// Blast cells bucketed by stage, `Kindled` first.
    pub blasts: [Vec<Position>; 4],
}

impl StatusSnapshot {
    pub(crate) fn capture(game: &Game) -> Self {
        let board = game.board();

        let mut blasts: [Vec<Position>; 4] = Default::default();
        for (pos, cell) in game.markers().iter() {
            for stage in cell.blast_stages() {
                blasts[usize::from(stage.level() - 1)].push(pos);
            }
        }

        Self {
            game_id: game.id().to_string(),
            scheme: game.config().scheme.name().to_string(),
            dimensions: board.dimensions(),
            frame: game.frame(),
            outcome: game.outcome(),
            players: game
                .players()
                .map(|p| PlayerStatus {
                    id: p.id,
                    label: p.id.label(),
                    name: p.name.clone(),
                    position: p.position,
                    alive: p.alive,
                })
                .collect(),
            void: board.positions_of(Terrain::Void),
            land: board.positions_of(Terrain::Land),
            block: board.positions_of(Terrain::Block),
            bombs: game
                .fuses()
                .armed()
                .into_iter()
                .map(|(position, fuse)| BombStatus { position, fuse })
                .collect(),
            blasts,
        }
    }

    /// Persistence key for collaborators storing per-frame snapshots.
    #[must_use]
    pub fn key(&self) -> (String, u32) {
        (self.game_id.clone(), self.frame)
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&PlayerStatus> {
        self.players.iter().find(|p| p.id == player)
    }

    /// Cells currently at `stage`.
    #[must_use]
    pub fn blast_cells(&self, stage: BlastStage) -> &[Position] {
        &self.blasts[usize::from(stage.level() - 1)]
    }

    /// Fuse stage of the bomb at `pos`, if any.
    #[must_use]
    pub fn bomb_at(&self, pos: Position) -> Option<u8> {
        self.bombs.iter().find(|b| b.position == pos).map(|b| b.fuse)
    }

    /// Terrain at `pos` according to the classified cell lists.
    #[must_use]
    pub fn terrain_at(&self, pos: Position) -> Option<Terrain> {
        if self.land.binary_search(&pos).is_ok() {
            Some(Terrain::Land)
        } else if self.block.binary_search(&pos).is_ok() {
            Some(Terrain::Block)
        } else if self.void.binary_search(&pos).is_ok() {
            Some(Terrain::Void)
        } else {
            None
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

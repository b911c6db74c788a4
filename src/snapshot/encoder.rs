//! Observation encoding for learning agents.
//!
//! Turns a snapshot into a stack of `rows x cols` planes from one player's
//! perspective. Rewards and training loops live outside the crate.

use serde::{Deserialize, Serialize};

use super::status::StatusSnapshot;
use crate::blast::{BlastStage, FUSE_DETONATE};
use crate::core::{Action, PlayerId, Position};

/// Flat row-major tensor with its shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedObservation {
    pub tensor: Vec<f32>,
    /// `[channels, rows, cols]`.
    pub shape: Vec<usize>,
}

impl EncodedObservation {
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// Value at `(channel, row, col)`.
    #[must_use]
    pub fn at(&self, channel: usize, pos: Position) -> Option<f32> {
        let &[_, rows, cols] = self.shape.as_slice() else {
            return None;
        };
        if pos.row >= rows || pos.col >= cols {
            return None;
        }
        self.tensor
            .get(channel * rows * cols + pos.row * cols + pos.col)
            .copied()
    }
}

/// Encodes snapshots into tensors.
pub trait ObservationEncoder: Send + Sync {
    /// Encode `snapshot` as seen by `perspective`.
    fn encode(&self, snapshot: &StatusSnapshot, perspective: PlayerId) -> EncodedObservation;

    /// Shape of the encoded tensor for a board of `dimensions`.
    fn output_shape(&self, dimensions: (usize, usize)) -> Vec<usize>;

    /// Number of distinct actions an agent can choose from.
    fn action_space_size(&self) -> usize {
        Action::ALL.len()
    }
}

/// Plane layout used by [`GridEncoder`].
pub mod channel {
    pub const VOID: usize = 0;
    pub const LAND: usize = 1;
    pub const BLOCK: usize = 2;
    /// Fuse stage divided by the detonation stage.
    pub const FUSE: usize = 3;
    /// First of four blast planes, `Kindled` to `Explosion`.
    pub const BLAST: usize = 4;
    pub const SELF: usize = 8;
    pub const OPPONENT: usize = 9;
    pub const COUNT: usize = 10;
}

/// One binary plane per terrain kind, blast stage and player side, plus a
/// normalized fuse plane. Dead players are left off their plane.
#[derive(Clone, Copy, Debug, Default)]
pub struct GridEncoder;

impl GridEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl ObservationEncoder for GridEncoder {
    fn encode(&self, snapshot: &StatusSnapshot, perspective: PlayerId) -> EncodedObservation {
        let (rows, cols) = snapshot.dimensions;
        let mut out = EncodedObservation::zeros(self.output_shape(snapshot.dimensions));
        let plane = rows * cols;
        let mut mark = |channel: usize, pos: Position, value: f32| {
            if pos.row < rows && pos.col < cols {
                out.tensor[channel * plane + pos.row * cols + pos.col] = value;
            }
        };

        for &pos in &snapshot.void {
            mark(channel::VOID, pos, 1.0);
        }
        for &pos in &snapshot.land {
            mark(channel::LAND, pos, 1.0);
        }
        for &pos in &snapshot.block {
            mark(channel::BLOCK, pos, 1.0);
        }
        for bomb in &snapshot.bombs {
            mark(
                channel::FUSE,
                bomb.position,
                f32::from(bomb.fuse) / f32::from(FUSE_DETONATE),
            );
        }
        for (offset, stage) in BlastStage::ALL.into_iter().enumerate() {
            for &pos in snapshot.blast_cells(stage) {
                mark(channel::BLAST + offset, pos, 1.0);
            }
        }
        for player in snapshot.players.iter().filter(|p| p.alive) {
            let side = if player.id == perspective {
                channel::SELF
            } else {
                channel::OPPONENT
            };
            mark(side, player.position, 1.0);
        }

        out
    }

    fn output_shape(&self, (rows, cols): (usize, usize)) -> Vec<usize> {
        vec![channel::COUNT, rows, cols]
    }
}

//! Frame resolution.
//!
//! One advance is one atomic transition, in this order:
//! 1. frame counter
//! 2. fuse and blast pass over the whole board
//! 3. queued actions, in registration order
//! 4. queue cleared
//! 5. deaths and end-of-game
//!
//! Every precondition is checked before the first mutation, so a rejected
//! advance leaves the game untouched.

use tracing::{debug, info, trace, warn};

use super::game::{FrameReport, Game, GamePhase};
use crate::blast::{self, BlastStage};
use crate::board::Marker;
use crate::core::{PlayerId, QueuedAction, BLAST_RANGE};
use crate::error::{GameError, Result};

impl Game {
    /// Advance the game by one frame.
    ///
    /// Returns `Ok(false)` without touching anything when the game has
    /// already ended. Fails with `InvalidState` before `start` and with
    /// `IncompleteTurn` while any player has no queued action.
    pub fn advance_frame(&mut self) -> Result<bool> {
        match self.phase {
            GamePhase::NotStarted => {
                return Err(GameError::invalid_state(
                    "advance the frame",
                    "the game has not started",
                ))
            }
            GamePhase::Ended => {
                warn!(game = %self.id, frame = self.frame, "the game has already ended");
                return Ok(false);
            }
            GamePhase::Ongoing => {}
        }

        let missing: Vec<String> = self
            .players
            .iter()
            .filter(|&(id, _)| self.queue[id].is_none())
            .map(|(_, p)| p.name.clone())
            .collect();
        if !missing.is_empty() {
            return Err(GameError::IncompleteTurn { missing });
        }

        self.frame += 1;
        let hazards = blast::advance_hazards(&mut self.board, &mut self.markers, &mut self.fuses);

        for id in self.players.player_ids().collect::<Vec<_>>() {
            if let Some(action) = self.queue[id].take() {
                self.apply(id, action);
            }
        }

        let killed = self.update_alive();
        debug!(
            game = %self.id,
            frame = self.frame,
            detonated = hazards.detonated.len(),
            converted = hazards.converted.len(),
            killed = killed.len(),
            "frame resolved"
        );

        self.last_report = FrameReport {
            frame: self.frame,
            detonated: hazards.detonated,
            converted: hazards.converted,
            killed,
        };

        if self.alive_count() <= 1 {
            self.phase = GamePhase::Ended;
            info!(game = %self.id, frame = self.frame, outcome = %self.outcome(), "game over");
        }

        Ok(true)
    }

    fn apply(&mut self, id: PlayerId, action: QueuedAction) {
        let position = self.players[id].position;
        match action {
            QueuedAction::MoveTo(target) => {
                self.markers.remove(position, Marker::PlayerOccupant(id));
                self.markers.add(target, Marker::PlayerOccupant(id));
                self.players[id].position = target;
                trace!(game = %self.id, player = %id, from = %position, to = %target, "moved");
            }
            QueuedAction::PlaceBomb => {
                let cells = blast::place_bomb(
                    &self.board,
                    &mut self.markers,
                    &mut self.fuses,
                    position,
                    BLAST_RANGE,
                );
                trace!(game = %self.id, player = %id, at = %position, cells = cells.len(), "bomb placed");
            }
        }
    }

    /// Kill every living player standing in an explosion. Returns the newly
    /// killed players.
    fn update_alive(&mut self) -> Vec<PlayerId> {
        let lethal = Marker::Blast(BlastStage::Explosion);
        let mut killed = Vec::new();
        for (id, player) in self.players.iter_mut() {
            if player.alive && self.markers.contains(player.position, lethal) {
                player.alive = false;
                killed.push(id);
            }
        }
        killed
    }
}

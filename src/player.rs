//! Players: a named board owner, optionally computer controlled.

use log::debug;
use rand::Rng;

use crate::ai::HuntTarget;
use crate::board::Gameboard;
use crate::common::{AttackOutcome, GameError};
use crate::config::{FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship};

/// One side of a match. A computer player carries live targeting state; a
/// human player's targeting state stays untouched.
#[derive(Debug)]
pub struct Player {
    name: String,
    is_computer: bool,
    board: Gameboard,
    targeting: HuntTarget,
}

impl Player {
    /// Create a player with a fresh empty board.
    pub fn new(name: impl Into<String>, is_computer: bool) -> Self {
        Player {
            name: name.into(),
            is_computer,
            board: Gameboard::new(),
            targeting: HuntTarget::new(),
        }
    }

    /// Attack `opponent`, resolving at `coord` when given.
    ///
    /// A computer derives the coordinate from its targeting state when none
    /// is supplied and feeds the outcome back into that state either way. A
    /// human without a coordinate gets `MissingCoordinate`.
    pub fn attack<R: Rng>(
        &mut self,
        opponent: &mut Gameboard,
        coord: Option<(usize, usize)>,
        rng: &mut R,
    ) -> Result<AttackOutcome, GameError> {
        let (row, col) = match coord {
            Some(coord) => coord,
            None if self.is_computer => self
                .targeting
                .next_target(opponent, rng)
                .ok_or(GameError::MissingCoordinate)?,
            None => return Err(GameError::MissingCoordinate),
        };
        let outcome = opponent.receive_attack(row, col)?;
        self.note_outcome(&outcome, opponent);
        Ok(outcome)
    }

    /// Feed an attack outcome into the targeting state. No-op for humans.
    pub fn note_outcome(&mut self, outcome: &AttackOutcome, opponent: &Gameboard) {
        if self.is_computer {
            self.targeting.observe(outcome, opponent);
        }
    }

    /// Next coordinate the computer would attack on `opponent`. Pops the
    /// targeting queue, so the caller must resolve the returned coordinate.
    pub(crate) fn next_target<R: Rng>(
        &mut self,
        opponent: &Gameboard,
        rng: &mut R,
    ) -> Option<(usize, usize)> {
        self.targeting.next_target(opponent, rng)
    }

    /// Place the whole catalog fleet at random legal positions.
    ///
    /// Each ship samples a uniform orientation and origin over the whole
    /// board and retries rejected placements. Running out of attempts aborts
    /// the operation with `PlacementExhausted`.
    pub fn place_ships_randomly<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        for ship_type in FLEET {
            let mut attempts = 0;
            loop {
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                let row = rng.random_range(0..self.board.size());
                let col = rng.random_range(0..self.board.size());
                match self
                    .board
                    .place_ship(Ship::new(ship_type), row, col, orientation)
                {
                    Ok(()) => break,
                    Err(_) => {
                        attempts += 1;
                        if attempts >= MAX_PLACEMENT_ATTEMPTS {
                            debug!(
                                "gave up placing {} after {} attempts",
                                ship_type.name(),
                                attempts
                            );
                            return Err(GameError::PlacementExhausted(ship_type.name()));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Whether this player's whole fleet is sunk.
    pub fn has_lost(&self) -> bool {
        self.board.all_sunk()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_computer(&self) -> bool {
        self.is_computer
    }

    pub fn board(&self) -> &Gameboard {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Gameboard {
        &mut self.board
    }

    /// Pending computer follow-up targets, oldest first.
    pub fn target_queue(&self) -> Vec<(usize, usize)> {
        self.targeting.queue()
    }

    /// Most recent attack outcome recorded by the targeting state.
    pub fn last_hit(&self) -> Option<&AttackOutcome> {
        self.targeting.last_hit()
    }
}

//! Hunt/target strategy for the computer opponent.

use std::collections::VecDeque;

use rand::Rng;

use crate::board::Gameboard;
use crate::common::{AttackOutcome, AttackResult};

/// Targeting state: the most recent attack outcome plus a FIFO backlog of
/// coordinates adjacent to confirmed hits.
///
/// While the backlog is empty the strategy hunts at random; once a hit
/// lands it works through the hit's orthogonal neighbors until the ship
/// goes down, then falls back to hunting.
#[derive(Debug, Clone, Default)]
pub struct HuntTarget {
    last_hit: Option<AttackOutcome>,
    queue: VecDeque<(usize, usize)>,
}

impl HuntTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the next coordinate to attack on `board`.
    ///
    /// Queued follow-ups drain first, oldest first. A still-live hit
    /// re-seeds the queue from its neighbors. Failing both, the choice is a
    /// uniformly random unattacked coordinate, decided within this call so a
    /// caller never needs a second round-trip.
    pub fn next_target<R: Rng>(
        &mut self,
        board: &Gameboard,
        rng: &mut R,
    ) -> Option<(usize, usize)> {
        if let Some(coord) = self.queue.pop_front() {
            return Some(coord);
        }
        if let Some(last) = self.last_hit {
            if last.result == AttackResult::Hit {
                self.enqueue_neighbors(last.row, last.col, board);
                if let Some(coord) = self.queue.pop_front() {
                    return Some(coord);
                }
            }
        }
        board.random_unattacked(rng)
    }

    /// Fold an attack outcome into the targeting state.
    pub fn observe(&mut self, outcome: &AttackOutcome, board: &Gameboard) {
        self.last_hit = Some(*outcome);
        match outcome.result {
            AttackResult::Hit => self.enqueue_neighbors(outcome.row, outcome.col, board),
            AttackResult::Sunk(_) => {
                // the hunted ship is gone, so no residual lead is valid
                self.queue.clear();
                self.last_hit = None;
            }
            AttackResult::Miss | AttackResult::AlreadyAttacked => {}
        }
    }

    /// Enqueue the orthogonal neighbors of (`row`, `col`) that are on the
    /// board, not already queued and not already attacked.
    fn enqueue_neighbors(&mut self, row: usize, col: usize, board: &Gameboard) {
        let size = board.size();
        let mut push = |r: usize, c: usize| {
            if r < size && c < size && !self.queue.contains(&(r, c)) && !board.is_attacked(r, c) {
                self.queue.push_back((r, c));
            }
        };
        if row > 0 {
            push(row - 1, col);
        }
        push(row + 1, col);
        if col > 0 {
            push(row, col - 1);
        }
        push(row, col + 1);
    }

    /// Pending follow-up targets, oldest first.
    pub fn queue(&self) -> Vec<(usize, usize)> {
        self.queue.iter().copied().collect()
    }

    /// Most recent attack outcome, cleared when a ship sinks.
    pub fn last_hit(&self) -> Option<&AttackOutcome> {
        self.last_hit.as_ref()
    }
}

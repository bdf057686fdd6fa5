//! Game board state: ship placement, attack resolution and histories.

use log::{debug, trace};
use rand::Rng;

use crate::common::{AttackOutcome, AttackResult, GameError};
use crate::config::BOARD_SIZE;
use crate::ship::{Orientation, Ship};

/// A ship committed to the board along with the cells it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedShip {
    ship: Ship,
    cells: Vec<(usize, usize)>,
    orientation: Orientation,
}

impl PlacedShip {
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Occupied cells in placement order.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

/// Per-player board: cell grid, placed ships and attack histories.
///
/// Grid cells hold indices into the ships list rather than ships themselves;
/// the list is the canonical owner and a cell is an O(1) occupancy lookup.
#[derive(Debug, Clone)]
pub struct Gameboard {
    grid: [[Option<usize>; BOARD_SIZE]; BOARD_SIZE],
    ships: Vec<PlacedShip>,
    misses: Vec<(usize, usize)>,
    hits: Vec<(usize, usize)>,
}

impl Gameboard {
    /// Create an empty board (no ships placed, no attacks recorded).
    pub fn new() -> Self {
        Gameboard {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
            ships: Vec::new(),
            misses: Vec::new(),
            hits: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    fn in_bounds(row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    /// Cells `ship` would occupy anchored at (`row`, `col`), or
    /// `InvalidPlacement` if the run leaves the board.
    fn projected_cells(
        ship: &Ship,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<Vec<(usize, usize)>, GameError> {
        (0..ship.length())
            .map(|i| {
                let (r, c) = orientation.cell(row, col, i);
                if Self::in_bounds(r, c) {
                    Ok((r, c))
                } else {
                    Err(GameError::InvalidPlacement)
                }
            })
            .collect()
    }

    /// Validate and commit a ship placement. Nothing is mutated on failure.
    /// Touching ships are legal; only overlap and leaving the board are not.
    pub fn place_ship(
        &mut self,
        ship: Ship,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        debug!(
            "placing {} at ({}, {}) {:?}",
            ship.name(),
            row,
            col,
            orientation
        );
        let cells = Self::projected_cells(&ship, row, col, orientation).inspect_err(|_| {
            debug!("rejected {}: runs off the board", ship.name());
        })?;
        if cells.iter().any(|&(r, c)| self.grid[r][c].is_some()) {
            debug!("rejected {}: overlaps an existing ship", ship.name());
            return Err(GameError::InvalidPlacement);
        }
        let index = self.ships.len();
        for &(r, c) in &cells {
            self.grid[r][c] = Some(index);
        }
        self.ships.push(PlacedShip {
            ship,
            cells,
            orientation,
        });
        Ok(())
    }

    /// Resolve an attack at (`row`, `col`).
    ///
    /// A coordinate that was already resolved yields the `AlreadyAttacked`
    /// outcome and mutates nothing, so repeat queries are idempotent.
    pub fn receive_attack(&mut self, row: usize, col: usize) -> Result<AttackOutcome, GameError> {
        if !Self::in_bounds(row, col) {
            return Err(GameError::OutOfBounds(row, col));
        }
        if self.is_attacked(row, col) {
            trace!("repeat attack at ({}, {})", row, col);
            return Ok(AttackOutcome {
                row,
                col,
                result: AttackResult::AlreadyAttacked,
            });
        }
        let result = match self.grid[row][col] {
            None => {
                self.misses.push((row, col));
                AttackResult::Miss
            }
            Some(index) => {
                let placed = &mut self.ships[index];
                placed.ship.hit();
                self.hits.push((row, col));
                if placed.ship.is_sunk() {
                    AttackResult::Sunk(placed.ship.name())
                } else {
                    AttackResult::Hit
                }
            }
        };
        trace!("attack at ({}, {}) resolved as {:?}", row, col, result);
        Ok(AttackOutcome { row, col, result })
    }

    /// `true` once every placed ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|placed| placed.ship.is_sunk())
    }

    /// Ship occupying (`row`, `col`), if any.
    pub fn ship_at(&self, row: usize, col: usize) -> Option<&Ship> {
        if !Self::in_bounds(row, col) {
            return None;
        }
        self.grid[row][col].map(|index| &self.ships[index].ship)
    }

    /// Whether (`row`, `col`) appears in either attack history.
    pub fn is_attacked(&self, row: usize, col: usize) -> bool {
        self.misses.contains(&(row, col)) || self.hits.contains(&(row, col))
    }

    /// Missed attacks in the order they landed. Owned copy.
    pub fn missed_attacks(&self) -> Vec<(usize, usize)> {
        self.misses.clone()
    }

    /// Successful attacks in the order they landed. Owned copy.
    pub fn hit_attacks(&self) -> Vec<(usize, usize)> {
        self.hits.clone()
    }

    /// Placement records for every committed ship.
    pub fn ships(&self) -> &[PlacedShip] {
        &self.ships
    }

    /// Uniformly random coordinate absent from both attack histories, or
    /// `None` once the whole board has been attacked.
    pub fn random_unattacked<R: Rng>(&self, rng: &mut R) -> Option<(usize, usize)> {
        let mut candidates = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if !self.is_attacked(row, col) {
                    candidates.push((row, col));
                }
            }
        }
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[rng.random_range(0..candidates.len())])
    }
}

impl Default for Gameboard {
    fn default() -> Self {
        Self::new()
    }
}

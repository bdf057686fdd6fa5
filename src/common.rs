//! Common types: attack outcomes and the error taxonomy.

use thiserror::Error;

/// What an attack did to the defending board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackResult {
    /// Struck an undepleted ship segment.
    Hit,
    /// Struck open water.
    Miss,
    /// Struck the last intact segment of the named ship.
    Sunk(&'static str),
    /// Coordinate was resolved by an earlier attack; nothing changed.
    AlreadyAttacked,
}

/// An attack result together with the coordinate it resolved at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    pub row: usize,
    pub col: usize,
    pub result: AttackResult,
}

/// Errors returned by board, player and game operations. All are synchronous
/// and recoverable by the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Placement runs off the board or overlaps another ship.
    #[error("ship placement is out of bounds or overlaps another ship")]
    InvalidPlacement,
    /// Attack coordinate outside the grid.
    #[error("coordinate ({0}, {1}) is outside the board")]
    OutOfBounds(usize, usize),
    /// A human attack was issued without a coordinate.
    #[error("an attack coordinate is required")]
    MissingCoordinate,
    /// Random placement exhausted its attempt budget for the named ship.
    #[error("could not place {0} within the attempt budget")]
    PlacementExhausted(&'static str),
    /// Move issued after the match ended.
    #[error("the game has already ended")]
    GameOver,
    /// Computer move requested while a human holds the turn.
    #[error("the active player is not computer controlled")]
    NotComputersTurn,
}

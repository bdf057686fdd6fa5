//! Turn orchestration and win detection between two players.

use log::info;
use rand::Rng;

use crate::common::{AttackOutcome, AttackResult, GameError};
use crate::player::Player;

/// Lifecycle of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Ended,
}

/// Two players, a turn pointer and the end-of-game record.
#[derive(Debug)]
pub struct Game {
    players: [Player; 2],
    current: usize,
    status: GameStatus,
    winner: Option<usize>,
}

impl Game {
    /// Start a match between two pre-built players. Player 1 moves first.
    pub fn new(player1: Player, player2: Player) -> Self {
        Game {
            players: [player1, player2],
            current: 0,
            status: GameStatus::InProgress,
            winner: None,
        }
    }

    /// Resolve the active player's attack at (`row`, `col`).
    ///
    /// An `AlreadyAttacked` outcome is surfaced as-is and leaves the turn
    /// with the attacker. A `Sunk` outcome also keeps the turn: landing the
    /// finishing blow grants another move. Hits and misses pass the turn.
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<AttackOutcome, GameError> {
        if self.status == GameStatus::Ended {
            return Err(GameError::GameOver);
        }
        let outcome = {
            let [p1, p2] = &mut self.players;
            let (attacker, defender) = if self.current == 0 { (p1, p2) } else { (p2, p1) };
            let outcome = defender.board_mut().receive_attack(row, col)?;
            attacker.note_outcome(&outcome, defender.board());
            outcome
        };
        if outcome.result == AttackResult::AlreadyAttacked {
            return Ok(outcome);
        }
        self.check_game_end();
        if self.status == GameStatus::InProgress
            && !matches!(outcome.result, AttackResult::Sunk(_))
        {
            self.current = 1 - self.current;
        }
        Ok(outcome)
    }

    /// Derive the active computer player's move and resolve it.
    pub fn make_computer_move<R: Rng>(&mut self, rng: &mut R) -> Result<AttackOutcome, GameError> {
        if self.status == GameStatus::Ended {
            return Err(GameError::GameOver);
        }
        let (row, col) = {
            let [p1, p2] = &mut self.players;
            let (attacker, defender) = if self.current == 0 { (p1, p2) } else { (p2, p1) };
            if !attacker.is_computer() {
                return Err(GameError::NotComputersTurn);
            }
            attacker
                .next_target(defender.board(), rng)
                .ok_or(GameError::MissingCoordinate)?
        };
        self.make_move(row, col)
    }

    fn check_game_end(&mut self) {
        let loser = if self.players[0].has_lost() {
            Some(0)
        } else if self.players[1].has_lost() {
            Some(1)
        } else {
            None
        };
        if let Some(loser) = loser {
            let winner = 1 - loser;
            info!("{} wins", self.players[winner].name());
            self.status = GameStatus::Ended;
            self.winner = Some(winner);
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Player whose move it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Player waiting for the active player's attack.
    pub fn opponent(&self) -> &Player {
        &self.players[1 - self.current]
    }

    pub fn player(&self, index: usize) -> &Player {
        &self.players[index]
    }

    /// Winning player once the match has ended.
    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|index| &self.players[index])
    }
}

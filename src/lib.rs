//! Core of a turn-based grid battle game: ships, boards, players and a
//! hunt/target computer opponent.
//!
//! The binaries under `src/main.rs` and `src/bin/` are thin presentation
//! collaborators; everything they do goes through the public surface of the
//! modules below.

mod ai;
mod board;
mod common;
mod config;
mod game;
mod logging;
mod player;
pub mod render;
mod ship;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::init_logging;
pub use player::*;
pub use ship::*;

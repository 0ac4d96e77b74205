//! Core Connect Four game logic: board representation, player types, and the
//! engine that runs turns, win detection and the game lifecycle.

mod board;
mod engine;
mod player;

pub use board::{Board, DropError, Occupant, DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_CELLS};
pub use engine::{DropResult, GameEngine, Lifecycle, Outcome, WIN_LENGTH};
pub use player::{Player, PlayerNames};

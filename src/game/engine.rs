use tracing::{debug, info};

use super::board::{Board, DropError, Occupant, DEFAULT_COLUMNS, DEFAULT_ROWS};
use super::player::{Player, PlayerNames};
use crate::config::GameConfig;
use crate::error::{ConfigError, GameError};

/// Pieces in a row needed to win
pub const WIN_LENGTH: usize = 4;

/// Cells scanned on each side of the placed piece
const REACH: isize = WIN_LENGTH as isize - 1;

/// Row/column steps for the four lines: vertical, horizontal, rising
/// diagonal (scanned from top-right to bottom-left), falling diagonal.
const LINES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, -1), (1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Lifecycle {
    InProgress,
    MoveInFlight,
    Finished(Player),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    Continue,
    Win,
}

/// What a single accepted drop did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DropResult {
    pub row: usize,
    pub column: usize,
    pub player: Player,
    pub outcome: Outcome,
}

impl DropResult {
    pub fn is_win(&self) -> bool {
        self.outcome == Outcome::Win
    }
}

/// Owns the board, whose turn it is, and where the game is in its lifecycle.
///
/// A drop can be applied in one step with [`GameEngine::drop_piece`], or in
/// two steps with [`GameEngine::begin_drop`] and [`GameEngine::complete_drop`]
/// when the caller animates the falling piece in between. While a drop is in
/// flight every further drop is rejected.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    names: PlayerNames,
    current_player: Player,
    lifecycle: Lifecycle,
    pending: Option<DropResult>,
    moves_played: usize,
    last_move: Option<(usize, usize)>,
}

impl GameEngine {
    /// # Panics
    ///
    /// Panics if the board would exceed [`super::MAX_CELLS`] cells; use
    /// [`GameEngine::from_config`] for dimensions that are not known to fit.
    pub fn new(rows: usize, columns: usize, names: PlayerNames) -> Self {
        GameEngine {
            board: Board::new(rows, columns),
            names,
            current_player: Player::One, // Player One starts
            lifecycle: Lifecycle::InProgress,
            pending: None,
            moves_played: 0,
            last_move: None,
        }
    }

    /// Build an engine from a config, validating it first.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.rows, config.columns, config.player_names()))
    }

    /// Player whose piece the next drop places
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn winner(&self) -> Option<Player> {
        match self.lifecycle {
            Lifecycle::Finished(player) => Some(player),
            _ => None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn occupant_at(&self, row: isize, column: isize) -> Occupant {
        self.board.occupant_at(row, column)
    }

    /// No column accepts another piece. The engine never declares a draw on
    /// its own; callers that want one check this after a non-winning drop.
    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    pub fn player_name(&self, player: Player) -> &str {
        self.names.name(player)
    }

    /// Replace the display names. Allowed at any point of the game.
    pub fn set_player_names(&mut self, names: PlayerNames) {
        self.names = names;
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// (row, column) of the most recently landed piece
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Drop the current player's piece and apply the result immediately.
    pub fn drop_piece(&mut self, column: usize) -> Result<DropResult, GameError> {
        self.begin_drop(column)?;
        self.complete_drop()
    }

    /// Land the current player's piece and decide the outcome, leaving the
    /// game in `MoveInFlight` until [`GameEngine::complete_drop`] is called.
    pub fn begin_drop(&mut self, column: usize) -> Result<DropResult, GameError> {
        if self.lifecycle != Lifecycle::InProgress {
            debug!(column, lifecycle = ?self.lifecycle, "drop rejected");
            return Err(GameError::NotAcceptingMoves {
                lifecycle: self.lifecycle,
            });
        }

        let player = self.current_player;
        let row = self
            .board
            .drop_column(column, player.to_occupant())
            .map_err(|e| {
                debug!(column, error = %e, "drop rejected");
                match e {
                    DropError::InvalidColumn { column, columns } => {
                        GameError::InvalidColumn { column, columns }
                    }
                    DropError::ColumnFull { column } => GameError::ColumnFull { column },
                }
            })?;

        let outcome = if self.check_win(row, column, player) {
            Outcome::Win
        } else {
            Outcome::Continue
        };
        let result = DropResult {
            row,
            column,
            player,
            outcome,
        };

        self.moves_played += 1;
        self.last_move = Some((row, column));
        self.pending = Some(result);
        self.lifecycle = Lifecycle::MoveInFlight;
        debug!(row, column, player = ?player, ?outcome, "piece landed");

        Ok(result)
    }

    /// Apply the drop started by [`GameEngine::begin_drop`]: finish the game
    /// on a win, otherwise hand the turn to the other player.
    pub fn complete_drop(&mut self) -> Result<DropResult, GameError> {
        let result = self.pending.take().ok_or(GameError::NoMoveInFlight)?;

        match result.outcome {
            Outcome::Win => {
                self.lifecycle = Lifecycle::Finished(result.player);
                info!(
                    winner = self.player_name(result.player),
                    moves = self.moves_played,
                    "game won"
                );
            }
            Outcome::Continue => {
                self.current_player = result.player.other();
                self.lifecycle = Lifecycle::InProgress;
            }
        }

        Ok(result)
    }

    /// Check whether `player` has four in a row through (row, column).
    ///
    /// Each line is a window of seven cells centred on the placed piece. A
    /// run counts only strictly consecutive cells owned by `player`; any
    /// other cell, including off-board ones, breaks it.
    pub fn check_win(&self, row: usize, column: usize, player: Player) -> bool {
        let target = player.to_occupant();
        let (row, column) = (row as isize, column as isize);

        LINES.iter().any(|&(dr, dc)| {
            let mut chain = 0;
            for k in -REACH..=REACH {
                if self.board.occupant_at(row + k * dr, column + k * dc) == target {
                    chain += 1;
                    if chain == WIN_LENGTH {
                        return true;
                    }
                } else {
                    chain = 0;
                }
            }
            false
        })
    }

    /// Start a new game on an empty board with Player One to move. Names are kept.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::One;
        self.lifecycle = Lifecycle::InProgress;
        self.pending = None;
        self.moves_played = 0;
        self.last_move = None;
        info!("game reset");
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLUMNS, PlayerNames::default())
    }
}

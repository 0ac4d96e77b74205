use std::path::PathBuf;

use crate::game::Lifecycle;

/// Errors returned by the game engine. All of them are recoverable and leave
/// the game state exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("column {column} is out of range (board has {columns} columns)")]
    InvalidColumn { column: usize, columns: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is not accepting moves (state: {lifecycle:?})")]
    NotAcceptingMoves { lifecycle: Lifecycle },

    #[error("no drop is in flight")]
    NoMoveInFlight,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_game_error_display() {
        let err = GameError::InvalidColumn {
            column: 9,
            columns: 7,
        };
        assert_eq!(
            err.to_string(),
            "column 9 is out of range (board has 7 columns)"
        );
        assert_eq!(GameError::ColumnFull { column: 2 }.to_string(), "column 2 is full");
    }

    #[test]
    fn test_not_accepting_moves_display() {
        let err = GameError::NotAcceptingMoves {
            lifecycle: Lifecycle::Finished(Player::Two),
        };
        assert_eq!(
            err.to_string(),
            "game is not accepting moves (state: Finished(Two))"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("rows must be >= 1".to_string());
        assert_eq!(err.to_string(), "config validation error: rows must be >= 1");
    }
}

//! Game engine error types
//!
//! Rejected events and invalid lookups. Wrong tiles and timeouts are game
//! outcomes, not errors, and never show up here.

use thiserror::Error;

use super::types::GameStatus;

/// Errors returned by [`GameMachine::dispatch`](super::GameMachine::dispatch)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The event is not accepted in the current status
    #[error("cannot {event} while {status}")]
    InvalidTransition {
        event: &'static str,
        status: GameStatus,
    },

    /// Pressed tile does not exist on the current board
    #[error("tile {tile} is out of range (board has {tile_count} tiles)")]
    TileOutOfRange { tile: usize, tile_count: usize },

    /// Difficulty label did not match any known setting
    #[error("unknown difficulty: {0} (expected easy, medium or hard)")]
    UnknownDifficulty(String),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GameError::InvalidTransition {
            event: "press a tile",
            status: GameStatus::Revealing,
        };
        assert_eq!(err.to_string(), "cannot press a tile while revealing");

        let err = GameError::TileOutOfRange {
            tile: 7,
            tile_count: 4,
        };
        assert_eq!(
            err.to_string(),
            "tile 7 is out of range (board has 4 tiles)"
        );
    }

    #[test]
    fn test_unknown_difficulty_display() {
        let err = GameError::UnknownDifficulty("insane".to_string());
        assert!(err.to_string().contains("insane"));
    }
}

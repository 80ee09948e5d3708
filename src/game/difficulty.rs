//! Difficulty settings
//!
//! Static lookup from a difficulty label to board size, reveal speed and
//! starting sequence length.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::GameError;

/// Difficulty label chosen before a run starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Parameters for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DifficultySetting {
    /// Number of tiles on the board
    pub tile_count: usize,
    /// How long each tile stays lit during the reveal (ms)
    pub reveal_interval_ms: u64,
    /// Sequence length at level 1
    pub initial_sequence_length: usize,
}

impl Difficulty {
    /// All difficulties in ascending order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Look up the setting for this difficulty
    pub fn setting(&self) -> DifficultySetting {
        match self {
            Difficulty::Easy => DifficultySetting {
                tile_count: 4,
                reveal_interval_ms: 1000,
                initial_sequence_length: 3,
            },
            Difficulty::Medium => DifficultySetting {
                tile_count: 6,
                reveal_interval_ms: 800,
                initial_sequence_length: 4,
            },
            Difficulty::Hard => DifficultySetting {
                tile_count: 6,
                reveal_interval_ms: 600,
                initial_sequence_length: 5,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl DifficultySetting {
    /// Sequence length for a given level (levels start at 1)
    pub fn sequence_length(&self, level: u32) -> usize {
        self.initial_sequence_length + level.saturating_sub(1) as usize
    }

    /// Grid columns used to lay the board out
    pub fn columns(&self) -> usize {
        if self.tile_count == 4 {
            2
        } else {
            3
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(GameError::UnknownDifficulty(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::MAX_TILES;

    #[test]
    fn test_easy_setting() {
        let setting = Difficulty::Easy.setting();
        assert_eq!(setting.tile_count, 4);
        assert_eq!(setting.reveal_interval_ms, 1000);
        assert_eq!(setting.initial_sequence_length, 3);
        assert_eq!(setting.columns(), 2);
    }

    #[test]
    fn test_sequence_length_grows_with_level() {
        let setting = Difficulty::Hard.setting();
        assert_eq!(setting.sequence_length(1), 5);
        assert_eq!(setting.sequence_length(2), 6);
        assert_eq!(setting.sequence_length(10), 14);
    }

    #[test]
    fn test_boards_fit_palette() {
        for difficulty in Difficulty::ALL {
            assert!(difficulty.setting().tile_count <= MAX_TILES);
        }
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!("Medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!(" hard ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!(matches!(
            "expert".parse::<Difficulty>(),
            Err(GameError::UnknownDifficulty(_))
        ));
    }

    #[test]
    fn test_display_round_trips_label() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse::<Difficulty>().unwrap(), difficulty);
        }
    }
}

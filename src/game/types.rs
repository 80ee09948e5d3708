//! Core game types
//!
//! Defines the game state snapshot, status values and tile naming.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a tile on the board, `0..tile_count`
pub type TileIndex = usize;

/// Display names for tiles, in board order
pub const TILE_NAMES: [&str; 6] = ["Red", "Blue", "Green", "Yellow", "Purple", "Orange"];

/// Largest board any difficulty may use
pub const MAX_TILES: usize = TILE_NAMES.len();

/// Name of a tile, or `"?"` for an index past the palette
pub fn tile_name(tile: TileIndex) -> &'static str {
    TILE_NAMES.get(tile).copied().unwrap_or("?")
}

/// Parse a tile from a colour name (case-insensitive)
pub fn tile_from_name(name: &str) -> Option<TileIndex> {
    TILE_NAMES
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(name.trim()))
}

/// Phase of the memory pattern game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    /// Nothing running; waiting for a start
    #[default]
    Idle,
    /// Sequence is being shown one tile at a time
    Revealing,
    /// Player is replaying the sequence
    AwaitingInput,
    /// Level replayed correctly; pausing before the next level
    Correct,
    /// Wrong tile or timeout; run is over until restarted
    Incorrect,
    /// Every level completed
    Finished,
}

impl GameStatus {
    /// Whether a run is in progress (start and difficulty changes are locked)
    pub fn is_playing(&self) -> bool {
        matches!(
            self,
            GameStatus::Revealing
                | GameStatus::AwaitingInput
                | GameStatus::Correct
                | GameStatus::Finished
        )
    }

    /// Short label for status badges
    pub fn label(&self) -> &'static str {
        match self {
            GameStatus::Idle => "Ready to start?",
            GameStatus::Revealing => "Watch the pattern...",
            GameStatus::AwaitingInput => "Your turn! Repeat the pattern",
            GameStatus::Correct => "Correct! Well done!",
            GameStatus::Incorrect => "Try again!",
            GameStatus::Finished => "Game Complete!",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Idle => "idle",
            GameStatus::Revealing => "revealing",
            GameStatus::AwaitingInput => "awaiting input",
            GameStatus::Correct => "correct",
            GameStatus::Incorrect => "incorrect",
            GameStatus::Finished => "finished",
        };
        f.write_str(s)
    }
}

/// Snapshot of a game in progress
///
/// Replaced wholesale on every new level and on reset. While `status` is
/// [`GameStatus::AwaitingInput`], `player_input` is a strict prefix of
/// `sequence`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Target order of tiles for the current level
    pub sequence: Vec<TileIndex>,
    /// Tiles pressed so far in the current level
    pub player_input: Vec<TileIndex>,
    /// Position in `sequence` currently highlighted, if any
    pub reveal_cursor: Option<usize>,
    /// Current level, starting at 1
    pub level: u32,
    /// Accumulated score across levels
    pub score: u64,
    pub status: GameStatus,
    /// Seconds left on the input countdown
    pub time_left: u32,
}

impl GameState {
    /// Fresh state: level 1, no score, idle
    pub fn new() -> Self {
        Self {
            sequence: Vec::new(),
            player_input: Vec::new(),
            reveal_cursor: None,
            level: 1,
            score: 0,
            status: GameStatus::Idle,
            time_left: 0,
        }
    }

    /// Tile currently lit during the reveal phase
    pub fn highlighted_tile(&self) -> Option<TileIndex> {
        if self.status != GameStatus::Revealing {
            return None;
        }
        self.reveal_cursor.and_then(|i| self.sequence.get(i).copied())
    }

    /// Replay progress as a fraction in `[0, 1]`
    pub fn progress(&self) -> f64 {
        if self.sequence.is_empty() {
            return 0.0;
        }
        self.player_input.len() as f64 / self.sequence.len() as f64
    }

    pub fn is_playing(&self) -> bool {
        self.status.is_playing()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

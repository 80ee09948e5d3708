//! Tunable game rules
//!
//! Reward formula, level cap and timing constants. These are presentation
//! choices, so they live in one configurable struct instead of being baked
//! into the state machine.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timing and scoring constants for a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    /// Completing this level ends the run
    pub max_level: u32,
    /// Points per level number awarded on completion
    pub level_reward: u64,
    /// Delay before the first tile lights up (ms)
    pub lead_in_ms: u64,
    /// Blank gap after each highlighted tile (ms)
    pub reveal_gap_ms: u64,
    /// Countdown tick period (ms)
    pub tick_ms: u64,
    /// Pause between a completed level and the next reveal (ms)
    pub advance_delay_ms: u64,
    /// Fixed part of the input countdown (seconds)
    pub countdown_base_secs: u32,
    /// Countdown seconds added per sequence element
    pub countdown_secs_per_tile: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            max_level: 10,
            level_reward: 10,
            lead_in_ms: 500,
            reveal_gap_ms: 200,
            tick_ms: 1000,
            advance_delay_ms: 1500,
            countdown_base_secs: 5,
            countdown_secs_per_tile: 2,
        }
    }
}

impl GameRules {
    /// Points for completing `level` with `time_left` seconds remaining
    pub fn reward(&self, level: u32, time_left: u32) -> u64 {
        u64::from(level) * self.level_reward + u64::from(time_left)
    }

    /// Seconds allowed to replay a sequence of `len` tiles
    pub fn countdown_budget(&self, len: usize) -> u32 {
        let len = u32::try_from(len).unwrap_or(u32::MAX);
        len.saturating_mul(self.countdown_secs_per_tile)
            .saturating_add(self.countdown_base_secs)
    }

    pub fn lead_in(&self) -> Duration {
        Duration::from_millis(self.lead_in_ms)
    }

    pub fn reveal_gap(&self) -> Duration {
        Duration::from_millis(self.reveal_gap_ms)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }
}

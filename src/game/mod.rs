//! Memory Pattern Game
//!
//! A short, fixed state machine: draw a random sequence of tiles, reveal it
//! one tile at a time, then judge the player's replay against it.
//!
//! # Architecture
//!
//! ```text
//!   GameEvent ──► GameMachine::dispatch ──► Vec<Effect>
//!                    │                         │
//!                    ├─ GameState (owned)      ├─ Schedule / CancelTimer
//!                    ├─ RevealPlan             └─ Notify
//!                    └─ one armed TimerId
//! ```
//!
//! Hosts (the tokio session, the web frontend) own the single timer the
//! machine asks for and feed `TimerFired` back in when it elapses.

pub mod difficulty;
pub mod error;
pub mod machine;
pub mod reveal;
pub mod rules;
pub mod sequence;
pub mod types;

pub use difficulty::{Difficulty, DifficultySetting};
pub use error::{GameError, GameResult};
pub use machine::{Effect, GameEvent, GameMachine, TimerId};
pub use reveal::{RevealPlan, RevealStep, ScheduledStep};
pub use rules::GameRules;
pub use sequence::generate_sequence;
pub use types::{tile_from_name, tile_name, GameState, GameStatus, TileIndex, MAX_TILES, TILE_NAMES};

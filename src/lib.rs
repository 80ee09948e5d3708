//! # NeuroGrow
//!
//! Cognitive training engine: a memory pattern game, the mock data behind
//! the cognitive profile dashboard, and a real-time session driver.
//!
//! ## Features
//!
//! - **Pure state machine**: one `dispatch` entry point returning effects,
//!   testable without timers or a rendering surface
//! - **Single cancellable timer**: reveal, countdown and level advance all
//!   go through one armed timer that a reset clears
//! - **Configurable rules**: reward formula, level cap and timings
//! - **Terminal front end**: play from the command line
//!
//! ## Modules
//!
//! - [`game`]: difficulty table, rules, reveal plan and the state machine
//! - [`notify`]: notification contract shared by all frontends
//! - [`dashboard`]: constant dashboard data
//! - `session`: tokio driver (requires the `runtime` feature)
//! - `config`: TOML configuration (requires the `runtime` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use neurogrow::game::*;
//!
//! let mut machine = GameMachine::seeded(Difficulty::Easy, GameRules::default(), 7);
//! machine.dispatch(GameEvent::Start).unwrap();
//!
//! // Drive the reveal by firing the armed timer until input is expected
//! while machine.state().status == GameStatus::Revealing {
//!     let id = machine.armed_timer().unwrap();
//!     machine.dispatch(GameEvent::TimerFired(id)).unwrap();
//! }
//!
//! for tile in machine.state().sequence.clone() {
//!     machine.dispatch(GameEvent::PressTile(tile)).unwrap();
//! }
//! assert_eq!(machine.state().status, GameStatus::Correct);
//! ```

pub mod dashboard;
pub mod game;
pub mod notify;

#[cfg(feature = "runtime")]
pub mod config;
#[cfg(feature = "runtime")]
pub mod logging;
#[cfg(feature = "runtime")]
pub mod session;

// Re-export top-level types for convenience
pub use game::{
    Difficulty, DifficultySetting, Effect, GameError, GameEvent, GameMachine, GameResult,
    GameRules, GameState, GameStatus, TileIndex, TimerId,
};

pub use notify::{Notification, Notifier, Severity, TracingNotifier};

pub use dashboard::{DashboardSnapshot, SkillScore, SkillTier};

#[cfg(feature = "runtime")]
pub use config::{Config, ConfigError, GameConfig, LoggingConfig};

#[cfg(feature = "runtime")]
pub use session::{Command, GameSession, RunSummary, Snapshot};

//! Game Session
//!
//! Drives a [`GameMachine`](crate::game::GameMachine) in real time on a
//! single tokio task. The session owns the machine, the notifier and one
//! pending timer; player commands arrive over an mpsc channel and state
//! snapshots go out over a watch channel.

pub mod driver;

pub use driver::{GameSession, RunSummary, Snapshot};

use tokio::sync::mpsc;

use crate::game::{Difficulty, GameEvent, TileIndex};
use crate::notify::{Notification, Notifier};

/// Player command sent to a running session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Press(TileIndex),
    Reset,
    SelectDifficulty(Difficulty),
    /// End the session
    Quit,
}

impl Command {
    /// Machine event for this command, `None` for [`Command::Quit`]
    pub fn into_event(self) -> Option<GameEvent> {
        match self {
            Command::Start => Some(GameEvent::Start),
            Command::Press(tile) => Some(GameEvent::PressTile(tile)),
            Command::Reset => Some(GameEvent::Reset),
            Command::SelectDifficulty(d) => Some(GameEvent::SelectDifficulty(d)),
            Command::Quit => None,
        }
    }
}

/// Forwards notifications to another task; dropped silently once the
/// receiver is gone
impl Notifier for mpsc::UnboundedSender<Notification> {
    fn notify(&mut self, notification: Notification) {
        if self.send(notification).is_err() {
            tracing::trace!("notification receiver dropped");
        }
    }
}

//! Session driver
//!
//! Event loop around the state machine. The machine asks for at most one
//! timer at a time, so the driver keeps exactly one deadline: `Schedule`
//! replaces it and `CancelTimer` clears it. A reset therefore stops an
//! in-flight reveal before its next step can fire.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{mpsc, watch};
use tokio::time::{sleep_until, Instant};
use uuid::Uuid;

use super::Command;
use crate::game::{Difficulty, Effect, GameEvent, GameMachine, GameState, GameStatus, TimerId};
use crate::notify::Notifier;

/// The one pending timer
#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    id: TimerId,
    deadline: Instant,
}

/// State published to observers after every change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub difficulty: Difficulty,
    pub state: GameState,
}

/// Outcome of a finished session
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub session_id: String,
    pub difficulty: Difficulty,
    pub level: u32,
    pub score: u64,
    pub status: GameStatus,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
}

/// Real-time driver for one game
pub struct GameSession<N> {
    id: Uuid,
    machine: GameMachine,
    notifier: N,
    timer: Option<PendingTimer>,
    state_tx: watch::Sender<Snapshot>,
    started_at: DateTime<Utc>,
}

impl<N: Notifier> GameSession<N> {
    /// Create a session and a receiver for its state snapshots
    pub fn new(machine: GameMachine, notifier: N) -> (Self, watch::Receiver<Snapshot>) {
        let (state_tx, state_rx) = watch::channel(Self::snapshot_of(&machine));
        let session = Self {
            id: Uuid::new_v4(),
            machine,
            notifier,
            timer: None,
            state_tx,
            started_at: Utc::now(),
        };
        (session, state_rx)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &GameState {
        self.machine.state()
    }

    /// Run until `Quit` arrives or the command channel closes
    pub async fn run(mut self, mut commands: mpsc::Receiver<Command>) -> RunSummary {
        tracing::info!(
            session_id = %self.id,
            difficulty = %self.machine.difficulty(),
            "session started"
        );

        loop {
            let deadline = self.timer.map(|t| t.deadline);
            // Evaluated even when the branch is disabled, so never unwrap here
            let sleep = sleep_until(deadline.unwrap_or_else(Instant::now));

            tokio::select! {
                command = commands.recv() => match command {
                    Some(Command::Quit) | None => break,
                    Some(command) => self.handle(command),
                },
                _ = sleep, if deadline.is_some() => self.fire_timer(),
            }
        }

        let summary = self.summary();
        tracing::info!(
            session_id = %summary.session_id,
            level = summary.level,
            score = summary.score,
            status = %summary.status,
            "session ended"
        );
        summary
    }

    /// Apply a single command immediately
    pub fn handle(&mut self, command: Command) {
        if let Some(event) = command.into_event() {
            self.dispatch(event);
        }
    }

    fn fire_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            self.dispatch(GameEvent::TimerFired(timer.id));
        }
    }

    fn dispatch(&mut self, event: GameEvent) {
        match self.machine.dispatch(event) {
            Ok(effects) => self.apply(effects),
            Err(e) => tracing::debug!(session_id = %self.id, "command ignored: {}", e),
        }
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Schedule { id, after } => {
                    self.timer = Some(PendingTimer {
                        id,
                        deadline: Instant::now() + after,
                    });
                }
                Effect::CancelTimer => self.timer = None,
                Effect::Notify(notification) => self.notifier.notify(notification),
            }
        }
        self.state_tx.send_replace(Self::snapshot_of(&self.machine));
    }

    fn snapshot_of(machine: &GameMachine) -> Snapshot {
        Snapshot {
            difficulty: machine.difficulty(),
            state: machine.state().clone(),
        }
    }

    fn summary(&self) -> RunSummary {
        let state = self.machine.state();
        RunSummary {
            session_id: self.id.to_string(),
            difficulty: self.machine.difficulty(),
            level: state.level,
            score: state.score,
            status: state.status,
            started_at: self.started_at,
            ended_at: Utc::now(),
        }
    }
}

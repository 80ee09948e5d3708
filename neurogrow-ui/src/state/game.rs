//! Game Controller
//!
//! Hosts the memory pattern state machine in the browser. The machine asks
//! for at most one timer at a time and the controller keeps exactly one
//! pending `Timeout` for it. Replacing or dropping that handle cancels the
//! browser timer, so a reset or leaving the page stops an in-flight reveal.
//!
//! A `Timeout` cannot be dropped from inside its own callback. The handle
//! that just fired is parked instead and released when the next one fires.

use gloo_timers::callback::Timeout;
use leptos::*;
use neurogrow::game::{
    Difficulty, DifficultySetting, Effect, GameEvent, GameMachine, GameRules, GameState,
    GameStatus, TileIndex, TimerId,
};
use neurogrow::notify::Notifier;
use std::time::Duration;

use super::global::GlobalState;

/// Timer handles owned by the controller
struct TimerSlots<H> {
    pending: Option<(TimerId, H)>,
    fired: Option<H>,
}

impl<H> Default for TimerSlots<H> {
    fn default() -> Self {
        Self {
            pending: None,
            fired: None,
        }
    }
}

impl<H> TimerSlots<H> {
    /// Install a new pending handle, returning the one it replaces
    fn arm(&mut self, id: TimerId, handle: H) -> Option<H> {
        self.pending.replace((id, handle)).map(|(_, h)| h)
    }

    /// Take the pending handle. A parked handle may still be running.
    fn cancel(&mut self) -> Option<H> {
        self.pending.take().map(|(_, h)| h)
    }

    /// Park the pending handle if `id` is the one that fired
    ///
    /// Returns the previously parked handle, which is safe to drop now.
    fn fired(&mut self, id: TimerId) -> Option<H> {
        match self.pending.take() {
            Some((armed, handle)) if armed == id => self.fired.replace(handle),
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Take every handle
    fn clear(&mut self) -> (Option<H>, Option<H>) {
        (self.cancel(), self.fired.take())
    }

    fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

/// Reactive wrapper around [`GameMachine`]
#[derive(Clone, Copy)]
pub struct GameController {
    machine: StoredValue<GameMachine>,
    timers: StoredValue<TimerSlots<Timeout>>,
    /// Latest machine state
    pub state: RwSignal<GameState>,
    /// Currently selected difficulty
    pub difficulty: RwSignal<Difficulty>,
    notifier: GlobalState,
}

impl GameController {
    pub fn new(notifier: GlobalState) -> Self {
        let machine = GameMachine::from_entropy(Difficulty::default(), GameRules::default());
        let state = create_rw_signal(machine.state().clone());
        let difficulty = create_rw_signal(machine.difficulty());

        Self {
            machine: store_value(machine),
            timers: store_value(TimerSlots::default()),
            state,
            difficulty,
            notifier,
        }
    }

    pub fn start(&self) {
        self.dispatch(GameEvent::Start);
    }

    pub fn press(&self, tile: TileIndex) {
        self.dispatch(GameEvent::PressTile(tile));
    }

    pub fn select_difficulty(&self, difficulty: Difficulty) {
        self.dispatch(GameEvent::SelectDifficulty(difficulty));
    }

    pub fn reset(&self) {
        self.dispatch(GameEvent::Reset);
    }

    pub fn setting(&self) -> DifficultySetting {
        self.difficulty.get().setting()
    }

    /// Cancel the pending timer; call when the game leaves the page
    pub fn dispose(&self) {
        self.timers.try_update_value(|timers| timers.clear());
    }

    fn dispatch(&self, event: GameEvent) {
        match self.machine.try_update_value(|machine| machine.dispatch(event)) {
            Some(Ok(effects)) => self.apply(effects),
            Some(Err(e)) => {
                web_sys::console::debug_1(&format!("Game event ignored: {}", e).into());
            }
            None => {}
        }
    }

    fn apply(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Schedule { id, after } => self.schedule(id, after),
                Effect::CancelTimer => {
                    self.timers.try_update_value(|timers| timers.cancel());
                }
                Effect::Notify(notification) => {
                    let mut notifier = self.notifier;
                    notifier.notify(notification);
                }
            }
        }

        let snapshot = self
            .machine
            .try_with_value(|machine| (machine.state().clone(), machine.difficulty()));
        if let Some((state, difficulty)) = snapshot {
            self.state.set(state);
            self.difficulty.set(difficulty);
        }
    }

    fn schedule(&self, id: TimerId, after: Duration) {
        let controller = *self;
        let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
        let handle = Timeout::new(millis, move || controller.fire(id));

        // Dropping the previous handle clears its browser timer
        self.timers.try_update_value(|timers| timers.arm(id, handle));
    }

    fn fire(&self, id: TimerId) {
        let released = self.timers.try_update_value(|timers| timers.fired(id));
        drop(released);
        self.dispatch(GameEvent::TimerFired(id));
    }
}

/// Label and badge classes for a status
pub fn status_badge(status: GameStatus) -> (&'static str, &'static str) {
    match status {
        GameStatus::Idle => ("Ready to start?", "border border-gray-300 text-gray-700"),
        GameStatus::Revealing => ("Watch the pattern...", "bg-primary text-white"),
        GameStatus::AwaitingInput => ("Your turn! Repeat the pattern", "bg-gray-200 text-gray-900"),
        GameStatus::Correct => ("Correct! Well done!", "bg-green-500 text-white"),
        GameStatus::Incorrect => ("Try again!", "bg-red-600 text-white"),
        GameStatus::Finished => (
            "🏆 Game Complete!",
            "bg-gradient-to-r from-yellow-400 to-orange-500 text-white",
        ),
    }
}

/// Text on the start button, shown only while no run is in progress
pub fn start_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Idle => "Start Game",
        _ => "Next Level",
    }
}

/// Base and highlighted colour classes for a tile
pub fn tile_colors(tile: TileIndex) -> (&'static str, &'static str) {
    match tile {
        0 => ("bg-red-500", "bg-red-300"),
        1 => ("bg-blue-500", "bg-blue-300"),
        2 => ("bg-green-500", "bg-green-300"),
        3 => ("bg-yellow-500", "bg-yellow-300"),
        4 => ("bg-purple-500", "bg-purple-300"),
        _ => ("bg-orange-500", "bg-orange-300"),
    }
}

/// Full class list for a tile button
pub fn tile_class(tile: TileIndex, state: &GameState) -> String {
    let (base, active) = tile_colors(tile);
    let mut class = String::from(
        "aspect-square rounded-lg border-4 transition-all duration-200 transform ",
    );

    if state.highlighted_tile() == Some(tile) {
        class.push_str(active);
        class.push_str(" border-white scale-110 shadow-lg");
    } else {
        class.push_str(base);
        class.push_str(" border-gray-300 hover:scale-105");
    }

    match state.status {
        GameStatus::AwaitingInput => class.push_str(" hover:shadow-md cursor-pointer"),
        GameStatus::Revealing => {}
        _ => class.push_str(" opacity-70"),
    }
    class
}

/// Grid class for a board with the given number of columns
pub fn grid_class(columns: usize) -> &'static str {
    if columns == 2 {
        "grid grid-cols-2 gap-4 max-w-md mx-auto"
    } else {
        "grid grid-cols-3 gap-4 max-w-md mx-auto"
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::state::global::{provide_global_state, use_global_state};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_reset_drops_pending_timer() {
        let runtime = create_runtime();
        provide_global_state();
        let game = GameController::new(use_global_state());

        game.start();
        assert_eq!(game.state.get_untracked().status, GameStatus::Revealing);
        assert!(game.timers.with_value(|timers| timers.is_armed()));
        assert_eq!(use_global_state().toasts.get_untracked().len(), 1);

        game.select_difficulty(Difficulty::Hard);
        assert_eq!(game.difficulty.get_untracked(), Difficulty::Easy);

        game.reset();
        assert!(!game.timers.with_value(|timers| timers.is_armed()));
        assert_eq!(game.state.get_untracked(), GameState::new());

        runtime.dispose();
    }
}

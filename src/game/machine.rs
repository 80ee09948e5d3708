//! Memory pattern state machine
//!
//! [`GameMachine`] owns the game state and a single armed timer. Every
//! change goes through [`GameMachine::dispatch`], which returns the side
//! effects the host must perform: arm or cancel its one timer, and show
//! notifications. The machine never sleeps or spawns anything itself, so
//! it runs the same under tokio, in the browser, or in a plain test.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use super::difficulty::{Difficulty, DifficultySetting};
use super::error::{GameError, GameResult};
use super::reveal::{RevealPlan, RevealStep};
use super::rules::GameRules;
use super::sequence::generate_sequence;
use super::types::{GameState, GameStatus, TileIndex};
use crate::notify::Notification;

/// Identifies one scheduled timer
///
/// Ids are never reused within a machine; a firing whose id is not the
/// currently armed one is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId(u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

/// Input to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Begin a run, or retry the current level after a failure
    Start,
    /// Player pressed a tile
    PressTile(TileIndex),
    /// The armed timer elapsed
    TimerFired(TimerId),
    /// Choose a difficulty (only while not playing)
    SelectDifficulty(Difficulty),
    /// Clear everything and return to idle
    Reset,
}

impl GameEvent {
    fn action(&self) -> &'static str {
        match self {
            GameEvent::Start => "start",
            GameEvent::PressTile(_) => "press a tile",
            GameEvent::TimerFired(_) => "handle a timer",
            GameEvent::SelectDifficulty(_) => "change difficulty",
            GameEvent::Reset => "reset",
        }
    }
}

/// Side effect requested by the machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Arm the timer, replacing any pending one
    Schedule { id: TimerId, after: Duration },
    /// Drop the pending timer, if any
    CancelTimer,
    /// Show a notification
    Notify(Notification),
}

/// What the armed timer does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerPurpose {
    Reveal(RevealStep),
    Countdown,
    Advance,
}

/// The memory pattern game
pub struct GameMachine<R = StdRng> {
    state: GameState,
    difficulty: Difficulty,
    rules: GameRules,
    rng: R,
    reveal: Option<RevealPlan>,
    armed: Option<(TimerId, TimerPurpose)>,
    next_timer: u64,
}

impl GameMachine<StdRng> {
    /// Machine seeded from OS entropy
    pub fn from_entropy(difficulty: Difficulty, rules: GameRules) -> Self {
        Self::with_rng(difficulty, rules, StdRng::from_entropy())
    }

    /// Machine with a fixed seed, for reproducible runs
    pub fn seeded(difficulty: Difficulty, rules: GameRules, seed: u64) -> Self {
        Self::with_rng(difficulty, rules, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameMachine<R> {
    pub fn with_rng(difficulty: Difficulty, rules: GameRules, rng: R) -> Self {
        Self {
            state: GameState::new(),
            difficulty,
            rules,
            rng,
            reveal: None,
            armed: None,
            next_timer: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn setting(&self) -> DifficultySetting {
        self.difficulty.setting()
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Id of the timer the host should currently have pending
    pub fn armed_timer(&self) -> Option<TimerId> {
        self.armed.map(|(id, _)| id)
    }

    /// Apply one event and return the effects to perform
    ///
    /// Rejected events leave the state untouched.
    pub fn dispatch(&mut self, event: GameEvent) -> GameResult<Vec<Effect>> {
        let result = match event {
            GameEvent::Start => self.start(),
            GameEvent::PressTile(tile) => self.press(tile),
            GameEvent::TimerFired(id) => Ok(self.fire(id)),
            GameEvent::SelectDifficulty(difficulty) => self.select_difficulty(difficulty),
            GameEvent::Reset => Ok(self.reset()),
        };

        if let Err(e) = &result {
            tracing::debug!(action = event.action(), error = %e, "event rejected");
        }
        result
    }

    fn start(&mut self) -> GameResult<Vec<Effect>> {
        match self.state.status {
            GameStatus::Idle | GameStatus::Incorrect => {}
            status => {
                return Err(GameError::InvalidTransition {
                    event: GameEvent::Start.action(),
                    status,
                })
            }
        }

        let mut effects = Vec::new();
        self.begin_level(&mut effects);
        effects.insert(
            0,
            Effect::Notify(Notification::run_started(
                self.state.level,
                self.state.sequence.len(),
            )),
        );
        Ok(effects)
    }

    fn press(&mut self, tile: TileIndex) -> GameResult<Vec<Effect>> {
        if self.state.status != GameStatus::AwaitingInput {
            return Err(GameError::InvalidTransition {
                event: GameEvent::PressTile(tile).action(),
                status: self.state.status,
            });
        }

        let tile_count = self.setting().tile_count;
        if tile >= tile_count {
            return Err(GameError::TileOutOfRange { tile, tile_count });
        }

        let position = self.state.player_input.len();
        self.state.player_input.push(tile);

        let mut effects = Vec::new();

        if self.state.sequence.get(position) != Some(&tile) {
            tracing::debug!(position, tile, "wrong tile");
            self.fail(Notification::wrong_tile(), &mut effects);
            return Ok(effects);
        }

        if self.state.player_input.len() == self.state.sequence.len() {
            let level = self.state.level;
            self.disarm(&mut effects);
            self.state.score += self.rules.reward(level, self.state.time_left);
            self.state.status = GameStatus::Correct;

            tracing::info!(
                level,
                score = self.state.score,
                time_left = self.state.time_left,
                "level completed"
            );

            effects.push(Effect::Notify(Notification::level_complete(
                level,
                level >= self.rules.max_level,
            )));
            self.arm(TimerPurpose::Advance, self.rules.advance_delay(), &mut effects);
        }

        Ok(effects)
    }

    fn fire(&mut self, id: TimerId) -> Vec<Effect> {
        let purpose = match self.armed {
            Some((armed, purpose)) if armed == id => purpose,
            _ => {
                tracing::debug!(timer = %id, "ignoring stale timer");
                return Vec::new();
            }
        };
        self.armed = None;

        let mut effects = Vec::new();
        match purpose {
            TimerPurpose::Reveal(step) => self.apply_reveal_step(step, &mut effects),
            TimerPurpose::Countdown => self.tick(&mut effects),
            TimerPurpose::Advance => self.advance(&mut effects),
        }
        effects
    }

    fn select_difficulty(&mut self, difficulty: Difficulty) -> GameResult<Vec<Effect>> {
        if self.state.is_playing() {
            return Err(GameError::InvalidTransition {
                event: GameEvent::SelectDifficulty(difficulty).action(),
                status: self.state.status,
            });
        }
        self.difficulty = difficulty;
        tracing::debug!(%difficulty, "difficulty selected");
        Ok(Vec::new())
    }

    fn reset(&mut self) -> Vec<Effect> {
        self.state = GameState::new();
        self.reveal = None;
        self.armed = None;
        tracing::debug!("game reset");
        vec![Effect::CancelTimer]
    }

    /// Draw a sequence for the current level and start revealing it
    fn begin_level(&mut self, effects: &mut Vec<Effect>) {
        let setting = self.setting();
        let len = setting.sequence_length(self.state.level);
        let sequence = generate_sequence(&mut self.rng, len, setting.tile_count);

        self.state = GameState {
            sequence,
            player_input: Vec::new(),
            reveal_cursor: None,
            level: self.state.level,
            score: self.state.score,
            status: GameStatus::Revealing,
            time_left: 0,
        };

        let mut plan = RevealPlan::new(len, &setting, &self.rules);
        if let Some(first) = plan.next_step() {
            self.arm(TimerPurpose::Reveal(first.step), first.after, effects);
        }
        self.reveal = Some(plan);

        tracing::debug!(
            level = self.state.level,
            len,
            difficulty = %self.difficulty,
            "revealing sequence"
        );
    }

    fn apply_reveal_step(&mut self, step: RevealStep, effects: &mut Vec<Effect>) {
        match step {
            RevealStep::Show(index) => self.state.reveal_cursor = Some(index),
            RevealStep::Hide => self.state.reveal_cursor = None,
            RevealStep::Complete => {
                self.reveal = None;
                self.state.reveal_cursor = None;
                self.state.status = GameStatus::AwaitingInput;
                self.state.time_left = self.rules.countdown_budget(self.state.sequence.len());
                tracing::debug!(time_left = self.state.time_left, "awaiting input");
                if self.state.time_left == 0 {
                    self.fail(Notification::timed_out(), effects);
                } else {
                    self.arm(TimerPurpose::Countdown, self.rules.tick(), effects);
                }
                return;
            }
        }

        if let Some(next) = self.reveal.as_mut().and_then(RevealPlan::next_step) {
            self.arm(TimerPurpose::Reveal(next.step), next.after, effects);
        }
    }

    fn tick(&mut self, effects: &mut Vec<Effect>) {
        self.state.time_left = self.state.time_left.saturating_sub(1);
        if self.state.time_left == 0 {
            self.fail(Notification::timed_out(), effects);
        } else {
            self.arm(TimerPurpose::Countdown, self.rules.tick(), effects);
        }
    }

    fn advance(&mut self, effects: &mut Vec<Effect>) {
        let level = self.state.level;
        if level >= self.rules.max_level {
            self.state.status = GameStatus::Finished;
            tracing::info!(level, score = self.state.score, "all levels completed");
            effects.push(Effect::Notify(Notification::all_levels_complete()));
        } else {
            self.state.level += 1;
            self.begin_level(effects);
        }
    }

    fn fail(&mut self, notification: Notification, effects: &mut Vec<Effect>) {
        self.disarm(effects);
        self.state.status = GameStatus::Incorrect;
        tracing::info!(
            level = self.state.level,
            score = self.state.score,
            reason = %notification.title,
            "run failed"
        );
        effects.push(Effect::Notify(notification));
    }

    fn arm(&mut self, purpose: TimerPurpose, after: Duration, effects: &mut Vec<Effect>) {
        let id = TimerId(self.next_timer);
        self.next_timer += 1;
        self.armed = Some((id, purpose));
        effects.push(Effect::Schedule { id, after });
    }

    fn disarm(&mut self, effects: &mut Vec<Effect>) {
        if self.armed.take().is_some() {
            effects.push(Effect::CancelTimer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(difficulty: Difficulty) -> GameMachine {
        GameMachine::seeded(difficulty, GameRules::default(), 1234)
    }

    fn fire_armed(m: &mut GameMachine) -> Vec<Effect> {
        let id = m.armed_timer().expect("no timer armed");
        m.dispatch(GameEvent::TimerFired(id)).unwrap()
    }

    /// Fire reveal timers until input is expected, returning the tiles lit
    fn finish_reveal(m: &mut GameMachine) -> Vec<TileIndex> {
        let mut shown = Vec::new();
        while m.state().status == GameStatus::Revealing {
            fire_armed(m);
            if let Some(tile) = m.state().highlighted_tile() {
                shown.push(tile);
            }
        }
        shown
    }

    fn replay(m: &mut GameMachine) -> Vec<Effect> {
        let sequence = m.state().sequence.clone();
        let mut last = Vec::new();
        for tile in sequence {
            last = m.dispatch(GameEvent::PressTile(tile)).unwrap();
        }
        last
    }

    fn notifications(effects: &[Effect]) -> Vec<&Notification> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Notify(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    fn assert_cleared(state: &GameState) {
        assert_eq!(state, &GameState::new());
    }

    #[test]
    fn test_easy_level_one_then_two() {
        let mut m = machine(Difficulty::Easy);
        let effects = m.dispatch(GameEvent::Start).unwrap();

        assert_eq!(m.state().status, GameStatus::Revealing);
        assert_eq!(m.state().sequence.len(), 3);
        assert!(m.state().sequence.iter().all(|&t| t < 4));
        assert_eq!(notifications(&effects)[0].title, "Watch closely!");

        let shown = finish_reveal(&mut m);
        assert_eq!(shown, m.state().sequence);
        assert_eq!(m.state().status, GameStatus::AwaitingInput);
        assert_eq!(m.state().time_left, 11);

        let effects = replay(&mut m);
        assert_eq!(m.state().status, GameStatus::Correct);
        assert_eq!(m.state().score, 10 + 11);
        assert!(effects.contains(&Effect::CancelTimer));
        assert_eq!(notifications(&effects)[0].title, "Excellent!");

        fire_armed(&mut m);
        assert_eq!(m.state().level, 2);
        assert_eq!(m.state().status, GameStatus::Revealing);
        assert_eq!(m.state().sequence.len(), 4);
        assert!(m.state().player_input.is_empty());
    }

    #[test]
    fn test_sequence_length_per_level() {
        for difficulty in Difficulty::ALL {
            let mut m = machine(difficulty);
            let setting = difficulty.setting();
            m.dispatch(GameEvent::Start).unwrap();

            for level in 1..=10 {
                assert_eq!(m.state().level, level);
                assert_eq!(
                    m.state().sequence.len(),
                    setting.initial_sequence_length + (level as usize - 1)
                );
                assert!(m.state().sequence.iter().all(|&t| t < setting.tile_count));

                finish_reveal(&mut m);
                replay(&mut m);
                fire_armed(&mut m);
            }
            assert_eq!(m.state().status, GameStatus::Finished);
        }
    }

    #[test]
    fn test_correct_only_after_full_replay() {
        let mut m = machine(Difficulty::Medium);
        m.dispatch(GameEvent::Start).unwrap();
        finish_reveal(&mut m);

        let sequence = m.state().sequence.clone();
        for (i, &tile) in sequence.iter().enumerate() {
            assert_eq!(m.state().status, GameStatus::AwaitingInput);
            m.dispatch(GameEvent::PressTile(tile)).unwrap();
            assert_eq!(m.state().player_input, sequence[..=i].to_vec());
        }
        assert_eq!(m.state().status, GameStatus::Correct);
    }

    #[test]
    fn test_divergence_fails_immediately() {
        let setting = Difficulty::Easy.setting();
        for k in 0..3 {
            let mut m = machine(Difficulty::Easy);
            m.dispatch(GameEvent::Start).unwrap();
            finish_reveal(&mut m);

            let sequence = m.state().sequence.clone();
            for &tile in &sequence[..k] {
                m.dispatch(GameEvent::PressTile(tile)).unwrap();
            }
            let wrong = (sequence[k] + 1) % setting.tile_count;
            let effects = m.dispatch(GameEvent::PressTile(wrong)).unwrap();

            assert_eq!(m.state().status, GameStatus::Incorrect);
            assert_eq!(m.armed_timer(), None);
            let notes = notifications(&effects);
            assert_eq!(notes[0].title, "Oops!");
            assert!(notes[0].is_destructive());

            // No press is accepted after the divergence
            let err = m.dispatch(GameEvent::PressTile(sequence[k])).unwrap_err();
            assert!(matches!(err, GameError::InvalidTransition { .. }));
            assert_eq!(m.state().player_input.len(), k + 1);
        }
    }

    #[test]
    fn test_countdown_expiry_fails() {
        let mut m = machine(Difficulty::Easy);
        m.dispatch(GameEvent::Start).unwrap();
        finish_reveal(&mut m);
        let first = m.state().sequence[0];
        m.dispatch(GameEvent::PressTile(first)).unwrap();

        let budget = m.state().time_left;
        let mut ticks = 0;
        let mut last = Vec::new();
        while m.state().status == GameStatus::AwaitingInput {
            last = fire_armed(&mut m);
            ticks += 1;
        }

        assert_eq!(ticks, budget);
        assert_eq!(m.state().status, GameStatus::Incorrect);
        assert_eq!(m.state().time_left, 0);
        assert_eq!(notifications(&last)[0].title, "Time's up!");
        assert_eq!(m.armed_timer(), None);
    }

    #[test]
    fn test_zero_countdown_fails_when_reveal_ends() {
        let rules = GameRules {
            countdown_base_secs: 0,
            countdown_secs_per_tile: 0,
            ..GameRules::default()
        };
        let mut m = GameMachine::seeded(Difficulty::Easy, rules, 5);
        m.dispatch(GameEvent::Start).unwrap();

        let mut last = Vec::new();
        while m.state().status == GameStatus::Revealing {
            last = fire_armed(&mut m);
        }

        assert_eq!(m.state().status, GameStatus::Incorrect);
        assert_eq!(m.state().time_left, 0);
        assert_eq!(m.armed_timer(), None);
        assert_eq!(notifications(&last)[0].title, "Time's up!");
        assert!(!last.iter().any(|e| matches!(e, Effect::Schedule { .. })));
    }

    #[test]
    fn test_score_uses_remaining_time() {
        let mut m = machine(Difficulty::Easy);
        m.dispatch(GameEvent::Start).unwrap();
        finish_reveal(&mut m);
        fire_armed(&mut m);
        fire_armed(&mut m);
        assert_eq!(m.state().time_left, 9);

        replay(&mut m);
        assert_eq!(m.state().score, m.rules().reward(1, 9));
    }

    #[test]
    fn test_reset_from_every_status() {
        let rules = GameRules {
            max_level: 1,
            ..GameRules::default()
        };

        let reach: [fn(&mut GameMachine); 6] = [
            |_| {},
            |m| {
                m.dispatch(GameEvent::Start).unwrap();
                fire_armed(m);
            },
            |m| {
                m.dispatch(GameEvent::Start).unwrap();
                finish_reveal(m);
            },
            |m| {
                m.dispatch(GameEvent::Start).unwrap();
                finish_reveal(m);
                replay(m);
            },
            |m| {
                m.dispatch(GameEvent::Start).unwrap();
                finish_reveal(m);
                let wrong = (m.state().sequence[0] + 1) % 4;
                m.dispatch(GameEvent::PressTile(wrong)).unwrap();
            },
            |m| {
                m.dispatch(GameEvent::Start).unwrap();
                finish_reveal(m);
                replay(m);
                fire_armed(m);
            },
        ];

        let mut seen = Vec::new();
        for go in reach {
            let mut m = GameMachine::seeded(Difficulty::Easy, rules.clone(), 5);
            go(&mut m);
            seen.push(m.state().status);

            let effects = m.dispatch(GameEvent::Reset).unwrap();
            assert_eq!(effects, vec![Effect::CancelTimer]);
            assert_cleared(m.state());
            assert_eq!(m.armed_timer(), None);
        }
        assert_eq!(
            seen,
            vec![
                GameStatus::Idle,
                GameStatus::Revealing,
                GameStatus::AwaitingInput,
                GameStatus::Correct,
                GameStatus::Incorrect,
                GameStatus::Finished,
            ]
        );
    }

    #[test]
    fn test_stale_timer_is_ignored() {
        let mut m = machine(Difficulty::Easy);
        m.dispatch(GameEvent::Start).unwrap();
        let stale = m.armed_timer().unwrap();

        m.dispatch(GameEvent::Reset).unwrap();
        m.dispatch(GameEvent::Start).unwrap();
        let before = m.state().clone();

        let effects = m.dispatch(GameEvent::TimerFired(stale)).unwrap();
        assert!(effects.is_empty());
        assert_eq!(m.state(), &before);
        assert_ne!(m.armed_timer(), Some(stale));
    }

    #[test]
    fn test_schedule_replaces_single_timer() {
        let mut m = machine(Difficulty::Easy);
        let effects = m.dispatch(GameEvent::Start).unwrap();
        let schedules: Vec<_> = effects
            .iter()
            .filter(|e| matches!(e, Effect::Schedule { .. }))
            .collect();
        assert_eq!(schedules.len(), 1);
        assert_eq!(
            schedules[0],
            &Effect::Schedule {
                id: m.armed_timer().unwrap(),
                after: Duration::from_millis(500),
            }
        );
    }

    #[test]
    fn test_difficulty_locked_while_playing() {
        let mut m = machine(Difficulty::Easy);
        m.dispatch(GameEvent::SelectDifficulty(Difficulty::Hard)).unwrap();
        assert_eq!(m.difficulty(), Difficulty::Hard);

        m.dispatch(GameEvent::Start).unwrap();
        let err = m
            .dispatch(GameEvent::SelectDifficulty(Difficulty::Easy))
            .unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidTransition {
                event: "change difficulty",
                status: GameStatus::Revealing,
            }
        );
        assert_eq!(m.difficulty(), Difficulty::Hard);
        assert_eq!(m.state().sequence.len(), 5);
    }

    #[test]
    fn test_reset_keeps_difficulty() {
        let mut m = machine(Difficulty::Medium);
        m.dispatch(GameEvent::Start).unwrap();
        m.dispatch(GameEvent::Reset).unwrap();
        assert_eq!(m.difficulty(), Difficulty::Medium);
    }

    #[test]
    fn test_start_rejected_mid_run() {
        let mut m = machine(Difficulty::Easy);
        m.dispatch(GameEvent::Start).unwrap();
        let sequence = m.state().sequence.clone();

        assert!(m.dispatch(GameEvent::Start).is_err());
        assert_eq!(m.state().sequence, sequence);
    }

    #[test]
    fn test_restart_after_failure_keeps_level_and_score() {
        let mut m = machine(Difficulty::Easy);
        m.dispatch(GameEvent::Start).unwrap();
        finish_reveal(&mut m);
        replay(&mut m);
        fire_armed(&mut m);
        let score = m.state().score;

        finish_reveal(&mut m);
        let wrong = (m.state().sequence[0] + 1) % 4;
        m.dispatch(GameEvent::PressTile(wrong)).unwrap();
        assert_eq!(m.state().status, GameStatus::Incorrect);

        m.dispatch(GameEvent::Start).unwrap();
        assert_eq!(m.state().status, GameStatus::Revealing);
        assert_eq!(m.state().level, 2);
        assert_eq!(m.state().score, score);
        assert_eq!(m.state().sequence.len(), 4);
    }

    #[test]
    fn test_press_rejected_during_reveal() {
        let mut m = machine(Difficulty::Easy);
        m.dispatch(GameEvent::Start).unwrap();
        let err = m.dispatch(GameEvent::PressTile(0)).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidTransition {
                status: GameStatus::Revealing,
                ..
            }
        ));
        assert!(m.state().player_input.is_empty());
    }

    #[test]
    fn test_tile_out_of_range() {
        let mut m = machine(Difficulty::Easy);
        m.dispatch(GameEvent::Start).unwrap();
        finish_reveal(&mut m);
        let err = m.dispatch(GameEvent::PressTile(4)).unwrap_err();
        assert_eq!(
            err,
            GameError::TileOutOfRange {
                tile: 4,
                tile_count: 4
            }
        );
        assert_eq!(m.state().status, GameStatus::AwaitingInput);
    }

    #[test]
    fn test_finishing_the_last_level() {
        let rules = GameRules {
            max_level: 2,
            ..GameRules::default()
        };
        let mut m = GameMachine::seeded(Difficulty::Easy, rules, 77);
        m.dispatch(GameEvent::Start).unwrap();

        finish_reveal(&mut m);
        replay(&mut m);
        fire_armed(&mut m);
        assert_eq!(m.state().level, 2);

        finish_reveal(&mut m);
        let effects = replay(&mut m);
        assert_eq!(
            notifications(&effects)[0].description,
            "Level 2 completed!"
        );

        let effects = fire_armed(&mut m);
        assert_eq!(m.state().status, GameStatus::Finished);
        assert_eq!(m.state().level, 2);
        assert_eq!(notifications(&effects)[0].title, "Congratulations!");
        assert_eq!(m.armed_timer(), None);
        assert!(m.dispatch(GameEvent::Start).is_err());
    }
}

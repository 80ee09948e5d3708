//! Reveal plan
//!
//! The reveal phase as an explicit list of timed steps. The machine pops one
//! step per timer firing, so cancelling the single timer stops the reveal
//! wherever it is.

use std::collections::VecDeque;
use std::time::Duration;

use super::difficulty::DifficultySetting;
use super::rules::GameRules;

/// One action of the reveal phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    /// Light the tile at this position of the sequence
    Show(usize),
    /// Clear the highlight
    Hide,
    /// Reveal finished; hand over to the player
    Complete,
}

/// A step and the delay after which it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledStep {
    pub after: Duration,
    pub step: RevealStep,
}

/// Remaining steps of a reveal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealPlan {
    steps: VecDeque<ScheduledStep>,
}

impl RevealPlan {
    /// Build the plan for a sequence of `len` tiles
    ///
    /// Lead-in, then for every tile a highlight held for the reveal
    /// interval followed by a blank gap, then completion.
    pub fn new(len: usize, setting: &DifficultySetting, rules: &GameRules) -> Self {
        let interval = Duration::from_millis(setting.reveal_interval_ms);
        let mut steps = VecDeque::with_capacity(len * 2 + 1);
        let mut wait = rules.lead_in();

        for index in 0..len {
            steps.push_back(ScheduledStep {
                after: wait,
                step: RevealStep::Show(index),
            });
            steps.push_back(ScheduledStep {
                after: interval,
                step: RevealStep::Hide,
            });
            wait = rules.reveal_gap();
        }

        steps.push_back(ScheduledStep {
            after: wait,
            step: RevealStep::Complete,
        });

        Self { steps }
    }

    /// Take the next step to schedule
    pub fn next_step(&mut self) -> Option<ScheduledStep> {
        self.steps.pop_front()
    }

    pub fn remaining(&self) -> usize {
        self.steps.len()
    }

    /// Time from now until the plan completes
    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.after).sum()
    }
}

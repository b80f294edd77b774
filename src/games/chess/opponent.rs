//! Scripted opponents for the chess environment.

use crate::board::Color;
use crate::core::{EnvError, RolloutRng};
use crate::env::Environment;
use crate::training::StepHook;

use super::env::ChessEnvironment;

/// Replies to every agent move with a uniformly random legal move.
#[derive(Clone, Copy, Debug)]
pub struct RandomOpponent {
    color: Color,
}

impl RandomOpponent {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new(Color::Black)
    }
}

impl StepHook<ChessEnvironment> for RandomOpponent {
    fn on_step_end(&self, env: &mut ChessEnvironment, rng: &mut RolloutRng) -> Result<(), EnvError> {
        if env.is_end_state() {
            return Ok(());
        }
        let actions = env.legal_actions_for(self.color);
        if let Some(action) = rng.choose(&actions) {
            env.play(action)?;
        }
        Ok(())
    }
}

//! Single rollouts.
//!
//! An episode alternates action selection, execution and learning until the
//! environment ends or the step budget runs out. Opponents and other
//! scripted actors plug in through `StepHook`.

use crate::core::{EnvError, RolloutRng};
use crate::env::Environment;
use crate::qlearning::{select_action, ExploitRate, Learner};

/// Callbacks run at step boundaries of a rollout.
///
/// Hooks may mutate the environment (an opponent reply is the usual case)
/// and draw from the episode RNG. Both default to doing nothing.
pub trait StepHook<E: Environment> {
    /// Before the agent picks an action.
    fn on_step_start(&self, _env: &mut E, _rng: &mut RolloutRng) -> Result<(), EnvError> {
        Ok(())
    }

    /// After the agent's action has been executed and learned from.
    fn on_step_end(&self, _env: &mut E, _rng: &mut RolloutRng) -> Result<(), EnvError> {
        Ok(())
    }
}

/// A hook that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHook;

impl<E: Environment> StepHook<E> for NoHook {}

/// One rollout over an environment at a fixed exploit rate.
pub struct Episode<E> {
    env: E,
    exploit_rate: ExploitRate,
}

impl<E: Environment> Episode<E> {
    pub fn new(env: E, exploit_rate: ExploitRate) -> Self {
        Self { env, exploit_rate }
    }

    /// The environment in its current state.
    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn into_env(self) -> E {
        self.env
    }

    /// Run until the environment ends, no action is legal, or `max_steps`
    /// steps have been taken. Returns the number of steps taken.
    ///
    /// Every executed action is fed to `learner` as `(old, action, new,
    /// reward)`, where `new` is the state right after the action and before
    /// `on_step_end` runs.
    pub fn run<L, H>(
        &mut self,
        learner: &mut L,
        hook: &H,
        rng: &mut RolloutRng,
        max_steps: usize,
    ) -> Result<usize, EnvError>
    where
        L: Learner<E::State, E::Action> + ?Sized,
        H: StepHook<E> + ?Sized,
    {
        let mut steps = 0;
        while steps < max_steps && !self.env.is_end_state() {
            hook.on_step_start(&mut self.env, rng)?;

            let Some(action) = select_action(&*learner, &self.env, self.exploit_rate, rng) else {
                break;
            };

            let old = self.env.state();
            let reward = self.env.execute(&action)?;
            let new = self.env.state();
            learner.learn(&old, &action, &new, reward);

            hook.on_step_end(&mut self.env, rng)?;
            steps += 1;
        }
        Ok(steps)
    }
}

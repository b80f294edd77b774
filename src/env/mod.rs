//! Environment contract shared by every game the trainer can learn.
//!
//! An environment is a mutable state machine:
//! - What the current state is (a hashable snapshot used as a table key)
//! - Which actions are legal from it
//! - How an action changes it, and the reward that change earns
//! - Whether the episode has ended, and how
//!
//! The trainer never interprets game-specific concepts directly.

use std::fmt::Debug;
use std::hash::Hash;

use crate::core::EnvError;

/// Environment trait.
///
/// ## Implementation Notes
///
/// - `state`: must return an immutable snapshot; two snapshots are the same
///   table key iff they compare equal
/// - `legal_actions`: return an empty vec if the agent cannot act
/// - `execute`: mutate the environment and return the reward it earned
/// - `is_end_state`: defaults to win, tie or loss
pub trait Environment {
    /// Snapshot of the environment, used as a Q-table key.
    type State: Clone + Eq + Hash + Debug;

    /// An action the learning agent can take.
    type Action: Clone + Eq + Hash + Debug;

    /// Snapshot of the current state.
    fn state(&self) -> Self::State;

    /// Actions the learning agent may take right now.
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// Apply `action` and return its reward.
    fn execute(&mut self, action: &Self::Action) -> Result<f64, EnvError>;

    /// The agent has won.
    fn is_win_state(&self) -> bool;

    /// The agent has lost.
    fn is_lose_state(&self) -> bool {
        false
    }

    /// The episode ended without a winner.
    fn is_tie_state(&self) -> bool {
        false
    }

    /// No further steps should be taken.
    fn is_end_state(&self) -> bool {
        self.is_win_state() || self.is_tie_state() || self.is_lose_state()
    }
}

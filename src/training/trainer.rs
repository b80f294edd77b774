//! Batched training.
//!
//! Each batch runs a training phase at a ramping exploit rate, then a test
//! phase at a fixed rate, and reports one `BatchMetrics` row. Only the
//! policy persists across rollouts: every rollout gets a fresh environment
//! from the factory.
//!
//! ## Determinism
//!
//! Rollout seeds are drawn up front from the trainer's RNG, so a run is
//! reproducible from `TrainerConfig::seed`. In parallel mode the training
//! rollouts read a frozen snapshot of the table and their traces are merged
//! in rollout order, so the result does not depend on thread scheduling or
//! on the number of workers.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{EnvError, RolloutRng, TrainError};
use crate::env::Environment;
use crate::qlearning::{ExploitRate, Policy, TraceRecorder, Transition};

use super::config::TrainerConfig;
use super::episode::{Episode, StepHook};

/// Aggregates of one batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchMetrics {
    pub batch: usize,

    /// Exploit rate of the training phase.
    pub exploit_rate: f64,

    /// Test rollouts that ended in a win.
    pub wins: usize,

    pub win_rate: f64,

    /// Mean steps per test rollout.
    pub avg_steps: f64,

    /// Mean cached-best value of the final test states.
    pub avg_max_reward: f64,

    /// Table size after the batch.
    pub known_states: usize,
}

/// Per-batch metrics of a run, in batch order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingHistory {
    batches: Vec<BatchMetrics>,
}

impl TrainingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, metrics: BatchMetrics) {
        self.batches.push(metrics);
    }

    pub fn batches(&self) -> &[BatchMetrics] {
        &self.batches
    }

    pub fn last(&self) -> Option<&BatchMetrics> {
        self.batches.last()
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn wins(&self) -> Vec<usize> {
        self.batches.iter().map(|m| m.wins).collect()
    }

    pub fn win_rates(&self) -> Vec<f64> {
        self.batches.iter().map(|m| m.win_rate).collect()
    }

    pub fn exploit_rates(&self) -> Vec<f64> {
        self.batches.iter().map(|m| m.exploit_rate).collect()
    }

    pub fn known_states(&self) -> Vec<usize> {
        self.batches.iter().map(|m| m.known_states).collect()
    }

    pub fn avg_steps(&self) -> Vec<f64> {
        self.batches.iter().map(|m| m.avg_steps).collect()
    }

    pub fn avg_max_rewards(&self) -> Vec<f64> {
        self.batches.iter().map(|m| m.avg_max_reward).collect()
    }
}

/// Trains a `Policy` on environments produced by a factory.
pub struct Trainer<E: Environment, F> {
    config: TrainerConfig,
    test_rate: ExploitRate,
    factory: F,
    policy: Policy<E::State, E::Action>,
    rng: RolloutRng,
    pool: Option<rayon::ThreadPool>,
}

impl<E, F> Trainer<E, F>
where
    E: Environment + Send,
    E::State: Send + Sync,
    E::Action: Send + Sync,
    F: Fn() -> E + Sync,
{
    /// Validate `config` and start from an empty table.
    ///
    /// A worker pool is built only when `config.workers > 1`.
    pub fn new(config: TrainerConfig, factory: F) -> Result<Self, TrainError> {
        let test_rate = config.validate()?;
        let pool = if config.workers > 1 {
            Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(config.workers)
                    .build()?,
            )
        } else {
            None
        };
        Ok(Self {
            policy: Policy::new(config.learning.clone()),
            rng: RolloutRng::new(config.seed),
            config,
            test_rate,
            factory,
            pool,
        })
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn policy(&self) -> &Policy<E::State, E::Action> {
        &self.policy
    }

    pub fn into_policy(self) -> Policy<E::State, E::Action> {
        self.policy
    }

    /// Run every batch and return the metrics series.
    ///
    /// An error aborts the run; batches completed before it stay learned.
    pub fn train<H>(&mut self, hook: &H) -> Result<TrainingHistory, TrainError>
    where
        H: StepHook<E> + Sync + ?Sized,
    {
        let num_batches = self.config.num_batches;
        let bar = if self.config.show_progress {
            ProgressBar::new(num_batches as u64)
        } else {
            ProgressBar::hidden()
        };
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} batches ({eta}) {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
        );

        let mut history = TrainingHistory::new();
        for batch in 0..num_batches {
            let metrics = self.run_batch(batch, hook)?;
            bar.set_message(format!(
                "wins {}/{} states {}",
                metrics.wins, self.config.num_test_episodes, metrics.known_states
            ));
            bar.inc(1);
            history.push(metrics);
        }
        bar.finish_with_message("training done");
        Ok(history)
    }

    /// Run batch `batch`: training rollouts at the ramped rate, then test
    /// rollouts at the fixed test rate.
    pub fn run_batch<H>(&mut self, batch: usize, hook: &H) -> Result<BatchMetrics, TrainError>
    where
        H: StepHook<E> + Sync + ?Sized,
    {
        let rate = ExploitRate::ramp(batch, self.config.num_batches);
        let seeds: Vec<u64> = (0..self.config.num_train_episodes)
            .map(|_| self.rng.next_seed())
            .collect();

        if let Some(pool) = &self.pool {
            let traces = self.record_traces(pool, &seeds, rate, hook)?;
            for trace in traces {
                self.policy.table_mut().merge_trace(trace);
            }
        } else {
            for seed in seeds {
                let mut episode = Episode::new((self.factory)(), rate);
                episode.run(
                    &mut self.policy,
                    hook,
                    &mut RolloutRng::new(seed),
                    self.config.max_steps,
                )?;
            }
        }

        let num_test = self.config.num_test_episodes;
        let mut wins = 0;
        let mut total_steps = 0;
        let mut total_max_reward = 0.0;
        for _ in 0..num_test {
            let mut rng = RolloutRng::new(self.rng.next_seed());
            let mut episode = Episode::new((self.factory)(), self.test_rate);
            total_steps += episode.run(&mut self.policy, hook, &mut rng, self.config.max_steps)?;

            let env = episode.into_env();
            if env.is_win_state() {
                wins += 1;
            }
            total_max_reward += self.policy.max_reward(&env.state());
        }

        let mean = |total: f64| {
            if num_test == 0 {
                0.0
            } else {
                total / num_test as f64
            }
        };
        Ok(BatchMetrics {
            batch,
            exploit_rate: rate.value(),
            wins,
            win_rate: mean(wins as f64),
            avg_steps: mean(total_steps as f64),
            avg_max_reward: mean(total_max_reward),
            known_states: self.policy.num_known_states(),
        })
    }

    /// Run one rollout per seed on the pool against the current table,
    /// returning their traces in seed order.
    fn record_traces<H>(
        &self,
        pool: &rayon::ThreadPool,
        seeds: &[u64],
        rate: ExploitRate,
        hook: &H,
    ) -> Result<Vec<Vec<Transition<E::State, E::Action>>>, EnvError>
    where
        H: StepHook<E> + Sync + ?Sized,
    {
        let table = self.policy.table();
        let rollout = |&seed: &u64| -> Result<Vec<Transition<E::State, E::Action>>, EnvError> {
            let mut recorder = TraceRecorder::new(table);
            let mut episode = Episode::new((self.factory)(), rate);
            episode.run(
                &mut recorder,
                hook,
                &mut RolloutRng::new(seed),
                self.config.max_steps,
            )?;
            Ok(recorder.into_trace())
        };

        pool.install(|| seeds.par_iter().map(rollout).collect())
    }
}

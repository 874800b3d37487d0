// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-seat philosopher task
//!
//! Each seat cycles `HUNGRY -> EATING -> THINKING` for the configured
//! number of iterations, then ends in `DONE`. Only the acquire/release
//! steps differ between strategies; the loop itself is shared.

use crate::arena::ForkArena;
use crate::cancel::CancelToken;
use crate::config::SimulationConfig;
use std::thread;

/// Verbose progress events are emitted for this many leading iterations
/// per seat, then suppressed to keep log volume bounded.
pub const VERBOSE_WINDOW: usize = 10;

/// Logical state of a philosopher task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhilosopherState {
    Thinking,
    Hungry,
    Eating,
    Done,
}

impl PhilosopherState {
    pub fn name(self) -> &'static str {
        match self {
            PhilosopherState::Thinking => "thinking",
            PhilosopherState::Hungry => "hungry",
            PhilosopherState::Eating => "eating",
            PhilosopherState::Done => "done",
        }
    }
}

impl std::fmt::Display for PhilosopherState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// `DONE` is a terminal state and is always reported in verbose mode;
/// the window cap only bounds the per-iteration states.
fn should_log(config: &SimulationConfig, iteration: usize, state: PhilosopherState) -> bool {
    config.verbose && (state == PhilosopherState::Done || iteration < VERBOSE_WINDOW)
}

fn progress(config: &SimulationConfig, seat: usize, iteration: usize, state: PhilosopherState) {
    if should_log(config, iteration, state) {
        tracing::info!(seat, iteration = iteration + 1, state = state.name(), "philosopher");
    }
}

/// Run one seat to completion. Returns the number of full eat/think
/// cycles finished, which is less than `config.iterations` only when the
/// token fired mid-run.
pub(crate) fn run_seat(
    seat: usize,
    arena: &ForkArena,
    config: &SimulationConfig,
    cancel: &CancelToken,
) -> usize {
    #[cfg(test)]
    if config.poisoned_seat == Some(seat) {
        panic!("poisoned seat {seat}");
    }

    let mut rng = rand::rng();

    for iteration in 0..config.iterations {
        if cancel.is_cancelled() {
            return iteration;
        }

        progress(config, seat, iteration, PhilosopherState::Hungry);
        if !config
            .strategy
            .acquire_forks(arena, seat, &config.backoff, &mut rng, cancel)
        {
            return iteration;
        }

        progress(config, seat, iteration, PhilosopherState::Eating);
        thread::sleep(config.eat.sample(&mut rng));
        config.strategy.release_forks(arena, seat);

        if cancel.is_cancelled() {
            // The cycle's critical section finished; count it.
            return iteration + 1;
        }

        progress(config, seat, iteration, PhilosopherState::Thinking);
        thread::sleep(config.think.sample(&mut rng));
    }

    progress(config, seat, config.iterations.saturating_sub(1), PhilosopherState::Done);
    config.iterations
}

#[cfg(test)]
#[path = "philosopher_tests.rs"]
mod tests;

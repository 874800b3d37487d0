// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulation driver
//!
//! Fans out one OS thread per seat, runs the configured strategy in each,
//! and joins them all before reporting. A panic inside a seat is caught
//! at its join handle: it is logged and counted, and sibling seats keep
//! running to completion, so one broken task can never wedge the join
//! phase.

use crate::arena::ForkArena;
use crate::cancel::CancelToken;
use crate::config::SimulationConfig;
use crate::philosopher::run_seat;
use contend_core::ConfigError;
use std::thread;
use std::time::{Duration, Instant};

/// Outcome of one philosophers run.
#[derive(Clone, Copy, Debug)]
pub struct SimulationReport {
    /// Wall-clock time from first spawn to last join.
    pub elapsed: Duration,
    /// Every seat finished every iteration with no failures and no
    /// cancellation.
    pub completed: bool,
    /// Seats whose thread panicked.
    pub failed_tasks: usize,
    /// Seats spawned.
    pub total_tasks: usize,
}

impl SimulationReport {
    pub fn elapsed_micros(&self) -> u128 {
        self.elapsed.as_micros()
    }
}

/// Run a full simulation with a token nobody cancels.
pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationReport, ConfigError> {
    run_simulation_with_cancel(config, &CancelToken::new())
}

/// Run a full simulation, checking `cancel` at every think/eat boundary.
pub fn run_simulation_with_cancel(
    config: &SimulationConfig,
    cancel: &CancelToken,
) -> Result<SimulationReport, ConfigError> {
    config.validate()?;

    let arena = ForkArena::new(config.seats);
    let started = Instant::now();
    let mut failed_tasks = 0;
    let mut finished_cycles = 0;

    thread::scope(|s| {
        let handles: Vec<_> = (0..config.seats)
            .map(|seat| {
                let arena = &arena;
                let cancel = cancel.clone();
                s.spawn(move || run_seat(seat, arena, config, &cancel))
            })
            .collect();

        for (seat, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(cycles) => finished_cycles += cycles,
                Err(_) => {
                    tracing::error!(seat, "philosopher task panicked");
                    failed_tasks += 1;
                }
            }
        }
    });

    let expected_cycles = config.seats * config.iterations;
    let completed = failed_tasks == 0 && finished_cycles == expected_cycles;
    let report = SimulationReport {
        elapsed: started.elapsed(),
        completed,
        failed_tasks,
        total_tasks: config.seats,
    };

    if failed_tasks > 0 {
        tracing::warn!(
            failed = failed_tasks,
            total = config.seats,
            "simulation finished with failed tasks"
        );
    }
    tracing::debug!(
        strategy = config.strategy.name(),
        seats = config.seats,
        iterations = config.iterations,
        completed = report.completed,
        elapsed_us = report.elapsed_micros() as u64,
        "simulation complete"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;

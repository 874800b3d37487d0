// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulation configuration

use crate::strategy::Strategy;
use contend_core::ConfigError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Inclusive bounds for a randomized delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayRange {
    #[serde(with = "humantime_serde")]
    pub min: Duration,
    #[serde(with = "humantime_serde")]
    pub max: Duration,
}

impl DelayRange {
    pub const ZERO: DelayRange = DelayRange {
        min: Duration::ZERO,
        max: Duration::ZERO,
    };

    pub const fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    pub const fn from_millis(min: u64, max: u64) -> Self {
        Self {
            min: Duration::from_millis(min),
            max: Duration::from_millis(max),
        }
    }

    /// Draw a duration uniformly from the range.
    pub fn sample(&self, rng: &mut impl Rng) -> Duration {
        if self.max <= self.min {
            return self.min;
        }
        self.min + (self.max - self.min).mul_f64(rng.random::<f64>())
    }
}

/// Parameters for one philosophers run.
///
/// Default delay distributions match the reference workload: thinking
/// 50-200 ms, eating 100-300 ms, try-backoff retry delay 10-50 ms.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Seats at the table; one philosopher thread and one fork each.
    pub seats: usize,
    /// Eat/think cycles per philosopher.
    pub iterations: usize,
    /// Acquisition strategy every seat runs.
    pub strategy: Strategy,
    /// Emit per-iteration progress events (capped to the first few
    /// iterations per seat).
    pub verbose: bool,
    /// Thinking-phase delay bounds.
    pub think: DelayRange,
    /// Eating-phase delay bounds.
    pub eat: DelayRange,
    /// Retry delay bounds for the try-backoff strategy.
    pub backoff: DelayRange,
    /// Seat whose task panics on entry, to exercise the driver's
    /// failed-task accounting.
    #[cfg(test)]
    #[serde(skip)]
    pub(crate) poisoned_seat: Option<usize>,
}

impl SimulationConfig {
    pub fn new(strategy: Strategy, seats: usize, iterations: usize) -> Self {
        Self {
            seats,
            iterations,
            strategy,
            verbose: false,
            think: DelayRange::from_millis(50, 200),
            eat: DelayRange::from_millis(100, 300),
            backoff: DelayRange::from_millis(10, 50),
            #[cfg(test)]
            poisoned_seat: None,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_think(mut self, think: DelayRange) -> Self {
        self.think = think;
        self
    }

    pub fn with_eat(mut self, eat: DelayRange) -> Self {
        self.eat = eat;
        self
    }

    pub fn with_backoff(mut self, backoff: DelayRange) -> Self {
        self.backoff = backoff;
        self
    }

    #[cfg(test)]
    pub(crate) fn with_poisoned_seat(mut self, seat: usize) -> Self {
        self.poisoned_seat = Some(seat);
        self
    }

    /// Reject configurations no strategy can make progress under. Called
    /// by the driver before spawning anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seats < 2 {
            return Err(ConfigError::TooFewSeats(self.seats));
        }
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

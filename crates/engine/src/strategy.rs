// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deadlock-avoidance strategies
//!
//! Five interchangeable protocols for taking both forks adjacent to a
//! seat. They differ only in how `HUNGRY -> EATING` (acquire) and
//! `EATING -> THINKING` (release) are performed; the philosopher loop is
//! strategy-agnostic.
//!
//! Why each one is deadlock-free:
//! - **LockOrdered / SemaphoreOrdered**: even seats take left-then-right,
//!   odd seats right-then-left. The asymmetry at the 0 / N-1 boundary
//!   means a full cycle of blocked holders cannot form (N >= 2).
//! - **TryBackoff**: non-blocking attempts cannot hold-and-wait; the
//!   blocking fallback after the retry budget re-uses the parity order,
//!   so it inherits the ordered argument instead of reintroducing the
//!   cycle.
//! - **Arbitrator**: both forks are granted atomically under one global
//!   critical section; nobody ever holds one fork while waiting for the
//!   other.
//! - **Hierarchy**: every seat takes its lower-numbered fork first, a
//!   strict global total order over resources; a wait-for cycle would
//!   need some seat to violate that order.

use crate::arena::ForkArena;
use crate::cancel::CancelToken;
use crate::config::DelayRange;
use contend_core::sync::RawLock;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::thread;
use thiserror::Error;

/// Failed try-acquire rounds before the try-backoff strategy falls back
/// to a blocking parity-ordered acquire.
pub const RETRY_LIMIT: u32 = 100;

/// Acquisition protocol run by every seat in a simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Parity-ordered blocking locks.
    LockOrdered,
    /// Parity-ordered binary semaphores.
    SemaphoreOrdered,
    /// Optimistic try-acquire with randomized backoff and a blocking
    /// fallback after [`RETRY_LIMIT`] failed rounds.
    TryBackoff,
    /// Centralized arbitrator granting fork pairs atomically.
    Arbitrator,
    /// Global resource hierarchy: lower-numbered fork first.
    Hierarchy,
}

impl Strategy {
    /// All strategies, in presentation order.
    pub const ALL: [Strategy; 5] = [
        Strategy::LockOrdered,
        Strategy::SemaphoreOrdered,
        Strategy::TryBackoff,
        Strategy::Arbitrator,
        Strategy::Hierarchy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::LockOrdered => "lock-ordered",
            Strategy::SemaphoreOrdered => "semaphore-ordered",
            Strategy::TryBackoff => "try-backoff",
            Strategy::Arbitrator => "arbitrator",
            Strategy::Hierarchy => "hierarchy",
        }
    }

    /// Take both forks for `seat`.
    ///
    /// Returns `false` only when `cancel` fired before the forks were
    /// taken (currently possible in the try-backoff retry loop); the
    /// caller must not release in that case. All other paths block until
    /// both forks are held and return `true`.
    pub fn acquire_forks(
        self,
        arena: &ForkArena,
        seat: usize,
        backoff: &DelayRange,
        rng: &mut impl Rng,
        cancel: &CancelToken,
    ) -> bool {
        let left = arena.left(seat);
        let right = arena.right(seat);

        match self {
            Strategy::LockOrdered => {
                let (first, second) = parity_order(seat, left, right);
                arena.fork(first).acquire();
                arena.fork(second).acquire();
                true
            }
            Strategy::SemaphoreOrdered => {
                let (first, second) = parity_order(seat, left, right);
                arena.sem_fork(first).acquire();
                arena.sem_fork(second).acquire();
                true
            }
            Strategy::TryBackoff => {
                let mut attempts = 0;
                while attempts < RETRY_LIMIT {
                    if cancel.is_cancelled() {
                        return false;
                    }
                    attempts += 1;

                    if arena.fork(left).try_acquire() {
                        if arena.fork(right).try_acquire() {
                            return true;
                        }
                        // Never hold-and-wait: give the left fork back
                        // before backing off.
                        arena.fork(left).release();
                    }
                    thread::sleep(backoff.sample(rng));
                }

                // Retry budget exhausted; fall back to a blocking acquire
                // in the same parity order as LockOrdered so the ordered
                // deadlock-freedom argument still applies.
                tracing::debug!(seat, attempts, "try-backoff falling back to blocking acquire");
                let (first, second) = parity_order(seat, left, right);
                arena.fork(first).acquire();
                arena.fork(second).acquire();
                true
            }
            Strategy::Arbitrator => {
                arena.table().acquire_pair(left, right);
                true
            }
            Strategy::Hierarchy => {
                let first = left.min(right);
                let second = left.max(right);
                arena.fork(first).acquire();
                arena.fork(second).acquire();
                true
            }
        }
    }

    /// Release both forks taken by [`acquire_forks`].
    pub fn release_forks(self, arena: &ForkArena, seat: usize) {
        let left = arena.left(seat);
        let right = arena.right(seat);

        match self {
            Strategy::LockOrdered | Strategy::TryBackoff => {
                arena.fork(left).release();
                arena.fork(right).release();
            }
            Strategy::SemaphoreOrdered => {
                arena.sem_fork(left).release();
                arena.sem_fork(right).release();
            }
            Strategy::Arbitrator => {
                arena.table().release_pair(left, right);
            }
            Strategy::Hierarchy => {
                // Reverse of the acquisition order.
                arena.fork(left.max(right)).release();
                arena.fork(left.min(right)).release();
            }
        }
    }
}

/// Even seats go left-then-right, odd seats right-then-left.
fn parity_order(seat: usize, left: usize, right: usize) -> (usize, usize) {
    if seat % 2 == 0 {
        (left, right)
    } else {
        (right, left)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized strategy name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown strategy: {0}")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

#[cfg(test)]
#[path = "strategy_tests.rs"]
mod tests;

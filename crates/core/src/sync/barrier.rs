// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reusable rendezvous barrier
//!
//! Holds every participant until all `total` have arrived, then releases
//! the whole party and resets for the next cycle. Reusability is what
//! distinguishes this from a one-shot latch: the same barrier can fence
//! every iteration of a loop.
//!
//! Each cycle has a generation number. A thread that observed generation
//! G on arrival waits until the generation moves past G, so a spurious
//! condvar wakeup can never let it through early, and no thread can enter
//! cycle K+1 before every peer has finished cycle K.

use std::sync::{Condvar, Mutex};

#[derive(Debug)]
struct BarrierState {
    /// Arrivals still outstanding in the current cycle.
    count: usize,
    /// Monotonically increasing cycle epoch.
    generation: u64,
}

/// Cyclic rendezvous point for a fixed party size.
#[derive(Debug)]
pub struct CycleBarrier {
    total: usize,
    state: Mutex<BarrierState>,
    all_arrived: Condvar,
}

impl CycleBarrier {
    /// Create a barrier for a party of `total` threads.
    ///
    /// `total` must be at least 1; a zero-party barrier has no last
    /// arrival and every caller would wait forever.
    pub fn new(total: usize) -> Self {
        Self {
            total,
            state: Mutex::new(BarrierState {
                count: total,
                generation: 0,
            }),
            all_arrived: Condvar::new(),
        }
    }

    /// Party size this barrier was created with.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Block until all `total` threads have arrived, then proceed
    /// together. Returns `true` for exactly one caller per cycle, the
    /// last arrival that released the party.
    pub fn arrive_and_wait(&self) -> bool {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let generation = state.generation;

        state.count -= 1;
        if state.count == 0 {
            state.generation += 1;
            state.count = self.total;
            self.all_arrived.notify_all();
            true
        } else {
            while state.generation == generation {
                state = self
                    .all_arrived
                    .wait(state)
                    .unwrap_or_else(|e| e.into_inner());
            }
            false
        }
    }
}

#[cfg(test)]
#[path = "barrier_tests.rs"]
mod tests;

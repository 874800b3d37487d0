// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fork arena: the ring of contended resources
//!
//! One fork sits between each pair of adjacent seats, so seat `i`
//! contends for forks `i` (left) and `(i + 1) % seats` (right). That
//! cyclic adjacency is the structural source of deadlock the strategies
//! exist to break, and it is kept as plain index arithmetic over flat
//! vectors so every ordering argument can be checked against integers.
//!
//! The arena backs all strategies at once: an exclusive lock and a binary
//! semaphore per fork, plus the arbitrator's availability table. It is
//! built once per simulation and shared into the seat threads, never held
//! in process-wide state, so simulations stay independently testable and
//! can run in parallel.

use contend_core::sync::{ExclusiveLock, Semaphore};
use std::sync::{Condvar, Mutex};

/// Centralized admission table for the arbitrator strategy.
///
/// A single lock plus condvar guards one availability flag per fork. A
/// seat waits until both of its forks are flagged free, then claims both
/// inside the same critical section, making the two-fork acquisition
/// atomic from every other seat's perspective.
#[derive(Debug)]
pub struct ArbitratorTable {
    free: Mutex<Vec<bool>>,
    changed: Condvar,
}

impl ArbitratorTable {
    fn new(forks: usize) -> Self {
        Self {
            free: Mutex::new(vec![true; forks]),
            changed: Condvar::new(),
        }
    }

    /// Wait until forks `a` and `b` are both free, then claim both.
    pub fn acquire_pair(&self, a: usize, b: usize) {
        let mut free = self.free.lock().unwrap_or_else(|e| e.into_inner());
        while !(free[a] && free[b]) {
            free = self.changed.wait(free).unwrap_or_else(|e| e.into_inner());
        }
        free[a] = false;
        free[b] = false;
    }

    /// Return forks `a` and `b` and wake every waiter; any of them might
    /// now have both forks available.
    pub fn release_pair(&self, a: usize, b: usize) {
        let mut free = self.free.lock().unwrap_or_else(|e| e.into_inner());
        free[a] = true;
        free[b] = true;
        self.changed.notify_all();
    }

    /// Snapshot of a single fork's availability.
    pub fn is_free(&self, fork: usize) -> bool {
        self.free.lock().unwrap_or_else(|e| e.into_inner())[fork]
    }
}

/// Fixed-size ring of exclusively-owned forks shared by adjacent seats.
#[derive(Debug)]
pub struct ForkArena {
    forks: Vec<ExclusiveLock>,
    sem_forks: Vec<Semaphore>,
    table: ArbitratorTable,
}

impl ForkArena {
    /// Allocate an arena with one fork per seat.
    pub fn new(seats: usize) -> Self {
        Self {
            forks: (0..seats).map(|_| ExclusiveLock::new()).collect(),
            sem_forks: (0..seats).map(|_| Semaphore::binary()).collect(),
            table: ArbitratorTable::new(seats),
        }
    }

    pub fn seats(&self) -> usize {
        self.forks.len()
    }

    /// Index of the fork to the left of `seat`.
    pub fn left(&self, seat: usize) -> usize {
        seat
    }

    /// Index of the fork to the right of `seat`; wraps at the last seat.
    pub fn right(&self, seat: usize) -> usize {
        (seat + 1) % self.seats()
    }

    pub fn fork(&self, index: usize) -> &ExclusiveLock {
        &self.forks[index]
    }

    pub fn sem_fork(&self, index: usize) -> &Semaphore {
        &self.sem_forks[index]
    }

    pub fn table(&self) -> &ArbitratorTable {
        &self.table
    }
}

#[cfg(test)]
#[path = "arena_tests.rs"]
mod tests;

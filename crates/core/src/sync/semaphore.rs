// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Counting semaphore
//!
//! A permit count guarded by a mutex and a condvar. `acquire` waits while
//! the count is zero, then decrements; `release` increments and wakes one
//! waiter. The count is unsigned, so it cannot go negative by
//! construction. Keeping it at or below the initial capacity is the
//! caller's discipline: `release` does not track which thread it balances.
//!
//! Wake order is whatever the platform condvar queue provides, which is
//! FIFO-ish on mainstream targets; no stronger fairness is claimed.

use crate::sync::RawLock;
use std::sync::{Condvar, Mutex, MutexGuard};

/// Counting signal with a configurable number of initial permits.
#[derive(Debug)]
pub struct Semaphore {
    permits: Mutex<usize>,
    released: Condvar,
}

impl Semaphore {
    /// Create a semaphore holding `permits` initial permits.
    pub fn new(permits: usize) -> Self {
        Self {
            permits: Mutex::new(permits),
            released: Condvar::new(),
        }
    }

    /// Binary semaphore guarding a single resource.
    pub fn binary() -> Self {
        Self::new(1)
    }

    fn count(&self) -> MutexGuard<'_, usize> {
        self.permits.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Block until a permit is available, then take it.
    pub fn acquire(&self) {
        let mut permits = self.count();
        while *permits == 0 {
            permits = self
                .released
                .wait(permits)
                .unwrap_or_else(|e| e.into_inner());
        }
        *permits -= 1;
    }

    /// Take a permit without waiting. Returns `true` on success.
    pub fn try_acquire(&self) -> bool {
        let mut permits = self.count();
        if *permits == 0 {
            false
        } else {
            *permits -= 1;
            true
        }
    }

    /// Return a permit and wake one waiter.
    pub fn release(&self) {
        let mut permits = self.count();
        *permits += 1;
        self.released.notify_one();
    }

    /// Snapshot of currently available permits.
    pub fn available(&self) -> usize {
        *self.count()
    }
}

// Binary-gate view, so the workload runner can drive a capacity-1
// semaphore through the same seam as the locks.
impl RawLock for Semaphore {
    fn acquire(&self) {
        Semaphore::acquire(self);
    }

    fn try_acquire(&self) -> bool {
        Semaphore::try_acquire(self)
    }

    fn release(&self) {
        Semaphore::release(self);
    }
}

#[cfg(test)]
#[path = "semaphore_tests.rs"]
mod tests;

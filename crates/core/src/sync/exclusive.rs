// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking mutual-exclusion lock
//!
//! A boolean guarded by a std mutex plus a condvar. `acquire` parks the
//! calling thread until the lock is free; `release` frees it and wakes at
//! most one waiter. Unlike `std::sync::Mutex` there is no guard type: the
//! acquire/release pairing is the caller's obligation, which is exactly
//! what the strategy engine needs when the acquiring and releasing code
//! paths are not lexically nested.

use crate::sync::RawLock;
use std::sync::{Condvar, Mutex, MutexGuard};

/// Blocking lock with at most one holder at any instant.
#[derive(Debug, Default)]
pub struct ExclusiveLock {
    held: Mutex<bool>,
    freed: Condvar,
}

impl ExclusiveLock {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, bool> {
        self.held.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl RawLock for ExclusiveLock {
    fn acquire(&self) {
        let mut held = self.state();
        while *held {
            held = self.freed.wait(held).unwrap_or_else(|e| e.into_inner());
        }
        *held = true;
    }

    fn try_acquire(&self) -> bool {
        let mut held = self.state();
        if *held {
            false
        } else {
            *held = true;
            true
        }
    }

    /// Release the lock and wake one waiter.
    ///
    /// Calling this without holding the lock is a protocol violation; the
    /// lock is marked free regardless and mutual exclusion is lost.
    fn release(&self) {
        let mut held = self.state();
        *held = false;
        self.freed.notify_one();
    }
}

#[cfg(test)]
#[path = "exclusive_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Monitor-style single-slot gate
//!
//! Functionally equivalent to a capacity-1 semaphore, but modeled as
//! `enter`/`exit` over an availability flag to mirror classic monitor
//! semantics. `exit` flips the flag inside the critical section and
//! notifies after dropping the state lock, so the woken thread does not
//! immediately block on the mutex it was signaled under.

use crate::sync::RawLock;
use std::sync::{Condvar, Mutex, MutexGuard};

/// Single-owner gate with monitor-style entry and exit.
#[derive(Debug)]
pub struct Monitor {
    available: Mutex<bool>,
    vacated: Condvar,
}

impl Default for Monitor {
    fn default() -> Self {
        Self {
            available: Mutex::new(true),
            vacated: Condvar::new(),
        }
    }
}

impl Monitor {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, bool> {
        self.available.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Block until the monitor is vacant, then occupy it.
    pub fn enter(&self) {
        let mut available = self.state();
        while !*available {
            available = self
                .vacated
                .wait(available)
                .unwrap_or_else(|e| e.into_inner());
        }
        *available = false;
    }

    /// Occupy the monitor without waiting. Returns `true` on success.
    pub fn try_enter(&self) -> bool {
        let mut available = self.state();
        if *available {
            *available = false;
            true
        } else {
            false
        }
    }

    /// Vacate the monitor and wake one waiter.
    ///
    /// Calling this while not occupying the monitor is a protocol
    /// violation and is not detected.
    pub fn exit(&self) {
        {
            let mut available = self.state();
            *available = true;
        }
        self.vacated.notify_one();
    }
}

impl RawLock for Monitor {
    fn acquire(&self) {
        self.enter();
    }

    fn try_acquire(&self) -> bool {
        self.try_enter()
    }

    fn release(&self) {
        self.exit();
    }
}

#[cfg(test)]
#[path = "monitor_tests.rs"]
mod tests;

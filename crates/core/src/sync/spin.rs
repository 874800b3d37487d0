// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Busy-wait locks
//!
//! Both variants spin on an atomic test-and-set instead of parking the
//! thread. [`SpinLock`] stays on-core and only issues a pause hint between
//! attempts; [`YieldingSpinLock`] cedes its timeslice on every failed
//! attempt, which costs latency but stops a spinner from starving the
//! holder on an oversubscribed machine.
//!
//! Neither variant is fair: a spinning thread can lose to cache-favored
//! re-acquisition indefinitely. Use them for short critical sections only.

use crate::sync::RawLock;
use std::hint;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

/// Tight busy-wait lock.
#[derive(Debug, Default)]
pub struct SpinLock {
    locked: AtomicBool,
}

impl SpinLock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RawLock for SpinLock {
    fn acquire(&self) {
        while self.locked.swap(true, Ordering::Acquire) {
            // Spin on a plain load so contended acquires stay off the bus.
            while self.locked.load(Ordering::Relaxed) {
                hint::spin_loop();
            }
        }
    }

    fn try_acquire(&self) -> bool {
        !self.locked.swap(true, Ordering::Acquire)
    }

    fn release(&self) {
        self.locked.store(false, Ordering::Release);
    }
}

/// Busy-wait lock that yields the processor on each failed attempt.
#[derive(Debug, Default)]
pub struct YieldingSpinLock {
    locked: AtomicBool,
}

impl YieldingSpinLock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RawLock for YieldingSpinLock {
    fn acquire(&self) {
        while self.locked.swap(true, Ordering::Acquire) {
            thread::yield_now();
        }
    }

    fn try_acquire(&self) -> bool {
        !self.locked.swap(true, Ordering::Acquire)
    }

    fn release(&self) {
        self.locked.store(false, Ordering::Release);
    }
}

#[cfg(test)]
#[path = "spin_tests.rs"]
mod tests;

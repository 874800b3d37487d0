// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hand-built synchronization primitives
//!
//! This module provides:
//! - **ExclusiveLock** - blocking mutual exclusion over a condvar
//! - **SpinLock** / **YieldingSpinLock** - busy-wait mutual exclusion
//! - **Semaphore** - counting signal with configurable initial permits
//! - **CycleBarrier** - reusable rendezvous point with epoch tracking
//! - **Monitor** - single-slot gate with monitor-style enter/exit
//!
//! Blocking and busy-wait locks share the [`RawLock`] seam so callers can
//! stay generic over the acquisition style, but they are distinct types:
//! a blocked thread is parked by the scheduler while a spinning thread
//! burns its timeslice, and the two behave very differently under
//! contention.

pub mod barrier;
pub mod exclusive;
pub mod monitor;
pub mod semaphore;
pub mod spin;

pub use barrier::CycleBarrier;
pub use exclusive::ExclusiveLock;
pub use monitor::Monitor;
pub use semaphore::Semaphore;
pub use spin::{SpinLock, YieldingSpinLock};

/// Minimal lock protocol shared by every mutual-exclusion primitive here.
///
/// Callers must pair each successful `acquire` (or `try_acquire` returning
/// `true`) with exactly one `release` from the same logical owner. Releasing
/// a lock that is not held is a protocol violation with unspecified results;
/// none of the implementations detect it at runtime.
pub trait RawLock: Send + Sync {
    /// Block (or spin) until the lock is held by the caller.
    fn acquire(&self);

    /// Attempt to take the lock without waiting. Returns `true` on success.
    fn try_acquire(&self) -> bool;

    /// Release the lock, waking at most one waiter.
    fn release(&self);
}

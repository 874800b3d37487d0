// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! contend-core: hand-built synchronization primitives and the contended
//! workload they are measured against
//!
//! This crate provides:
//! - Blocking and busy-wait mutual-exclusion locks behind one `RawLock` seam
//! - A counting semaphore, a reusable rendezvous barrier, and a monitor gate
//! - A shared-accumulator workload runner that drives N threads through a
//!   chosen primitive and reports elapsed time and an operation count

pub mod error;
pub mod sync;
pub mod workload;

// Re-exports
pub use error::ConfigError;
pub use sync::{
    CycleBarrier, ExclusiveLock, Monitor, RawLock, Semaphore, SpinLock, YieldingSpinLock,
};
pub use workload::{run_workload, PrimitiveKind, UnknownPrimitive, WorkloadReport};

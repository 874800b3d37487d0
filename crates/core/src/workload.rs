// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Contended workload runner
//!
//! Drives N worker threads through a chosen primitive, each performing a
//! fixed number of critical sections over a shared accumulator. The unit
//! of work folds a random printable ASCII byte into the accumulator, so
//! the checksum varies run to run while the operation count is exact:
//! every configured iteration bumps the counter exactly once, which is
//! the property the mutual-exclusion suites assert on.

use crate::error::ConfigError;
use crate::sync::{
    CycleBarrier, ExclusiveLock, Monitor, RawLock, Semaphore, SpinLock, YieldingSpinLock,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Which primitive a workload run contends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrimitiveKind {
    /// Blocking `ExclusiveLock`.
    Mutex,
    /// Binary `Semaphore`.
    Semaphore,
    /// `CycleBarrier` fencing every iteration.
    Barrier,
    /// Tight `SpinLock`.
    SpinLock,
    /// `YieldingSpinLock`.
    SpinYield,
    /// `Monitor` gate.
    Monitor,
}

impl PrimitiveKind {
    /// All benchmarked primitives, in presentation order.
    pub const ALL: [PrimitiveKind; 6] = [
        PrimitiveKind::Mutex,
        PrimitiveKind::Semaphore,
        PrimitiveKind::Barrier,
        PrimitiveKind::SpinLock,
        PrimitiveKind::SpinYield,
        PrimitiveKind::Monitor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Mutex => "mutex",
            PrimitiveKind::Semaphore => "semaphore",
            PrimitiveKind::Barrier => "barrier",
            PrimitiveKind::SpinLock => "spin-lock",
            PrimitiveKind::SpinYield => "spin-yield",
            PrimitiveKind::Monitor => "monitor",
        }
    }
}

impl std::fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized primitive name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown primitive: {0}")]
pub struct UnknownPrimitive(pub String);

impl FromStr for PrimitiveKind {
    type Err = UnknownPrimitive;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownPrimitive(s.to_string()))
    }
}

/// Outcome of one workload run.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct WorkloadReport {
    /// Wall-clock time from first spawn to last join.
    pub elapsed: Duration,
    /// Completed critical sections; always `threads * iterations`.
    pub ops: u64,
    /// Aggregate of the per-iteration random contributions.
    pub checksum: u64,
}

impl WorkloadReport {
    pub fn elapsed_micros(&self) -> u128 {
        self.elapsed.as_micros()
    }
}

/// One unit of simulated work: a random printable ASCII byte scaled by
/// the iteration index, folded down to a byte-sized contribution.
fn race_step(rng: &mut impl Rng, iteration: usize) -> u64 {
    let ch: u32 = rng.random_range(33..=126);
    u64::from(ch * (iteration as u32 % 256) % 256)
}

fn run_locked<L: RawLock>(lock: &L, threads: usize, iterations: usize) -> (u64, u64) {
    let checksum = AtomicU64::new(0);
    let ops = AtomicU64::new(0);

    thread::scope(|s| {
        for _ in 0..threads {
            s.spawn(|| {
                let mut rng = rand::rng();
                for i in 0..iterations {
                    lock.acquire();
                    checksum.fetch_add(race_step(&mut rng, i), Ordering::Relaxed);
                    ops.fetch_add(1, Ordering::Relaxed);
                    lock.release();
                }
            });
        }
    });

    (checksum.into_inner(), ops.into_inner())
}

fn run_fenced(threads: usize, iterations: usize) -> (u64, u64) {
    let barrier = CycleBarrier::new(threads);
    let checksum = AtomicU64::new(0);
    let ops = AtomicU64::new(0);

    thread::scope(|s| {
        for _ in 0..threads {
            s.spawn(|| {
                let mut rng = rand::rng();
                for i in 0..iterations {
                    checksum.fetch_add(race_step(&mut rng, i), Ordering::Relaxed);
                    ops.fetch_add(1, Ordering::Relaxed);
                    barrier.arrive_and_wait();
                }
            });
        }
    });

    (checksum.into_inner(), ops.into_inner())
}

/// Run `threads` workers, each performing `iterations` critical sections
/// under the chosen primitive, and report elapsed time, operation count,
/// and checksum.
///
/// Counts are validated before any thread is spawned; the core performs
/// no range clamping beyond rejecting zeroes (that is the frontend's
/// job).
pub fn run_workload(
    kind: PrimitiveKind,
    threads: usize,
    iterations: usize,
) -> Result<WorkloadReport, ConfigError> {
    if threads == 0 {
        return Err(ConfigError::ZeroThreads);
    }
    if iterations == 0 {
        return Err(ConfigError::ZeroIterations);
    }

    let started = Instant::now();
    let (checksum, ops) = match kind {
        PrimitiveKind::Mutex => run_locked(&ExclusiveLock::new(), threads, iterations),
        PrimitiveKind::Semaphore => run_locked(&Semaphore::binary(), threads, iterations),
        PrimitiveKind::Barrier => run_fenced(threads, iterations),
        PrimitiveKind::SpinLock => run_locked(&SpinLock::new(), threads, iterations),
        PrimitiveKind::SpinYield => run_locked(&YieldingSpinLock::new(), threads, iterations),
        PrimitiveKind::Monitor => run_locked(&Monitor::new(), threads, iterations),
    };

    let report = WorkloadReport {
        elapsed: started.elapsed(),
        ops,
        checksum,
    };
    tracing::debug!(
        kind = kind.name(),
        threads,
        iterations,
        ops = report.ops,
        elapsed_us = report.elapsed_micros() as u64,
        "workload complete"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "workload_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration error types shared across the workspace

use thiserror::Error;

/// Rejected configuration, reported before any thread is spawned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("thread count must be at least 1")]
    ZeroThreads,
    #[error("iteration count must be at least 1")]
    ZeroIterations,
    #[error("philosopher count must be at least 2, got {0}")]
    TooFewSeats(usize),
}

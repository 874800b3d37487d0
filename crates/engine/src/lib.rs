// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! contend-engine: dining-philosophers resource-acquisition engine
//!
//! This crate provides:
//! - A per-simulation fork arena (the contended resource ring)
//! - Five interchangeable deadlock-avoidance strategies
//! - A simulation driver that fans out one thread per seat and joins them

pub mod arena;
pub mod cancel;
pub mod config;
pub mod driver;
pub mod philosopher;
pub mod strategy;

// Re-exports
pub use arena::{ArbitratorTable, ForkArena};
pub use cancel::CancelToken;
pub use config::{DelayRange, SimulationConfig};
pub use contend_core::ConfigError;
pub use driver::{run_simulation, run_simulation_with_cancel, SimulationReport};
pub use philosopher::PhilosopherState;
pub use strategy::{Strategy, UnknownStrategy};

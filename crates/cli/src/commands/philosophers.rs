// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single dining-philosophers simulation command

use crate::commands::clamp_with_note;
use anyhow::{bail, Result};
use contend_engine::{
    run_simulation_with_cancel, CancelToken, DelayRange, SimulationConfig, Strategy,
};
use std::time::Duration;

#[derive(clap::Args)]
pub struct PhilosophersArgs {
    /// Acquisition strategy
    #[arg(long, default_value = "hierarchy")]
    pub strategy: Strategy,

    /// Seats at the table (supported range 2-20)
    #[arg(long, default_value_t = 5)]
    pub seats: usize,

    /// Eat/think cycles per philosopher (supported range 1-100)
    #[arg(long, default_value_t = 10)]
    pub iterations: usize,

    /// Log per-philosopher progress for the leading iterations
    #[arg(long)]
    pub verbose: bool,

    /// Minimum thinking delay
    #[arg(long, value_parser = humantime::parse_duration, default_value = "50ms")]
    pub think_min: Duration,

    /// Maximum thinking delay
    #[arg(long, value_parser = humantime::parse_duration, default_value = "200ms")]
    pub think_max: Duration,

    /// Minimum eating delay
    #[arg(long, value_parser = humantime::parse_duration, default_value = "100ms")]
    pub eat_min: Duration,

    /// Maximum eating delay
    #[arg(long, value_parser = humantime::parse_duration, default_value = "300ms")]
    pub eat_max: Duration,
}

pub fn handle(args: PhilosophersArgs) -> Result<()> {
    let seats = clamp_with_note("seats", args.seats, 2, 20);
    let iterations = clamp_with_note("iterations", args.iterations, 1, 100);

    let config = SimulationConfig::new(args.strategy, seats, iterations)
        .with_verbose(args.verbose)
        .with_think(DelayRange::new(args.think_min, args.think_max))
        .with_eat(DelayRange::new(args.eat_min, args.eat_max));

    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || {
        eprintln!("\nCancelling simulation...");
        handler_token.cancel();
    })?;

    println!("Dining philosophers");
    println!(
        "  strategy: {}, seats: {seats}, iterations per seat: {iterations}",
        config.strategy
    );

    let report = run_simulation_with_cancel(&config, &cancel)?;
    if report.completed {
        println!("Simulation completed in {} us", report.elapsed_micros());
    } else if report.failed_tasks > 0 {
        bail!(
            "{} of {} tasks failed (elapsed {} us)",
            report.failed_tasks,
            report.total_tasks,
            report.elapsed_micros()
        );
    } else {
        println!("Simulation cancelled after {} us", report.elapsed_micros());
    }
    Ok(())
}

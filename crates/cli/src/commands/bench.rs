// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Strategy sweep benchmark command

use crate::commands::clamp_with_note;
use crate::report::{self, Row};
use anyhow::Result;
use contend_engine::{run_simulation, DelayRange, SimulationConfig, Strategy};
use std::time::Duration;

#[derive(clap::Args)]
pub struct BenchArgs {
    /// Table sizes to sweep
    #[arg(long, value_delimiter = ',', default_values_t = vec![5_usize, 10, 20])]
    pub seats: Vec<usize>,

    /// Eat/think cycles per philosopher (supported range 1-100)
    #[arg(long, default_value_t = 10)]
    pub iterations: usize,

    /// Maximum eating delay (thinking scales with it)
    #[arg(long, value_parser = humantime::parse_duration, default_value = "300ms")]
    pub eat_max: Duration,
}

pub fn handle(args: BenchArgs) -> Result<()> {
    let iterations = clamp_with_note("iterations", args.iterations, 1, 100);

    println!("Dining philosophers strategy sweep");
    println!("  iterations per seat: {iterations}");
    println!();

    // Scale both phases down together when the user shrinks eat_max, so
    // quick sweeps stay quick end to end.
    let eat = DelayRange::new(args.eat_max / 3, args.eat_max);
    let think = DelayRange::new(args.eat_max / 6, args.eat_max * 2 / 3);

    let mut rows = Vec::new();
    for &seats in &args.seats {
        let seats = clamp_with_note("seats", seats, 2, 20);
        for strategy in Strategy::ALL {
            let config = SimulationConfig::new(strategy, seats, iterations)
                .with_think(think)
                .with_eat(eat);
            let report = run_simulation(&config)?;
            let status = if report.completed { "" } else { " (incomplete)" };
            rows.push(Row {
                name: format!("{seats} seats / {strategy}{status}"),
                micros: report.elapsed_micros(),
            });
        }
    }

    report::print_table("Strategy comparison", &rows);
    report::print_statistics(&rows);
    Ok(())
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! contend - comparative concurrency laboratory CLI

mod commands;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{bench, philosophers, primitives};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "contend",
    version,
    about = "Benchmark synchronization primitives and dining-philosophers strategies"
)]
struct Cli {
    /// Default log filter when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Benchmark the synchronization primitives over a shared counter
    Primitives(primitives::PrimitivesArgs),
    /// Run one dining-philosophers simulation
    Philosophers(philosophers::PhilosophersArgs),
    /// Sweep every strategy across table sizes
    Bench(bench::BenchArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli);

    match cli.command {
        Commands::Primitives(args) => primitives::handle(args),
        Commands::Philosophers(args) => philosophers::handle(args),
        Commands::Bench(args) => bench::handle(args),
    }
}

fn setup_logging(cli: &Cli) {
    // Verbose philosopher progress arrives as info-level events; surface
    // them without requiring the user to also set a log filter.
    let default = match &cli.command {
        Commands::Philosophers(args) if args.verbose => "info",
        _ => cli.log_level.as_str(),
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

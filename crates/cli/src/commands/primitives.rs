// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Primitive workload benchmark command

use crate::commands::clamp_with_note;
use crate::report::{self, Row};
use anyhow::Result;
use contend_core::{run_workload, PrimitiveKind};

#[derive(clap::Args)]
pub struct PrimitivesArgs {
    /// Primitive to benchmark (default: all six)
    #[arg(long)]
    pub kind: Option<PrimitiveKind>,

    /// Worker threads (supported range 1-16)
    #[arg(long, default_value_t = 4)]
    pub threads: usize,

    /// Iterations per thread (supported range 100-10000)
    #[arg(long, default_value_t = 1000)]
    pub iterations: usize,
}

pub fn handle(args: PrimitivesArgs) -> Result<()> {
    let threads = clamp_with_note("threads", args.threads, 1, 16);
    let iterations = clamp_with_note("iterations", args.iterations, 100, 10_000);
    let kinds: Vec<PrimitiveKind> = match args.kind {
        Some(kind) => vec![kind],
        None => PrimitiveKind::ALL.to_vec(),
    };

    println!("Synchronization primitive benchmark");
    println!(
        "  threads: {threads}, iterations per thread: {iterations}, total operations: {}",
        threads * iterations
    );
    println!();

    let mut rows = Vec::with_capacity(kinds.len());
    for kind in kinds {
        let report = run_workload(kind, threads, iterations)?;
        tracing::debug!(kind = kind.name(), ops = report.ops, checksum = report.checksum, "run done");
        rows.push(Row {
            name: kind.to_string(),
            micros: report.elapsed_micros(),
        });
    }

    report::print_table("Primitive comparison", &rows);
    if rows.len() > 1 {
        report::print_statistics(&rows);
    }
    Ok(())
}

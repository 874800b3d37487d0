// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Result-table rendering for benchmark output

/// One benchmark measurement.
pub struct Row {
    pub name: String,
    pub micros: u128,
}

/// Print an aligned name/time table.
pub fn print_table(title: &str, rows: &[Row]) {
    println!("{title}");
    println!("{:-<48}", "");
    println!("{:<32}{:>16}", "test", "time (us)");
    println!("{:-<48}", "");
    for row in rows {
        println!("{:<32}{:>16}", row.name, row.micros);
    }
    println!("{:-<48}", "");
}

/// Print fastest/slowest/mean across the measurements.
pub fn print_statistics(rows: &[Row]) {
    let Some(fastest) = rows.iter().min_by_key(|r| r.micros) else {
        return;
    };
    let Some(slowest) = rows.iter().max_by_key(|r| r.micros) else {
        return;
    };
    let mean = rows.iter().map(|r| r.micros).sum::<u128>() / rows.len() as u128;

    println!();
    println!("fastest: {} ({} us)", fastest.name, fastest.micros);
    println!("slowest: {} ({} us)", slowest.name, slowest.micros);
    println!("mean:    {mean} us");
    if fastest.micros > 0 {
        let spread = slowest.micros as f64 / fastest.micros as f64;
        println!("spread:  {spread:.2}x");
    }
}

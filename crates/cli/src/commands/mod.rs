// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI subcommands

pub mod bench;
pub mod philosophers;
pub mod primitives;

/// Clamp a numeric flag into its supported range, telling the user when
/// their value was adjusted. Range validation is a frontend concern; the
/// core crates only reject outright-invalid zeroes.
pub(crate) fn clamp_with_note(name: &str, value: usize, min: usize, max: usize) -> usize {
    let clamped = value.clamp(min, max);
    if clamped != value {
        eprintln!("note: {name} clamped to {clamped} (supported range {min}-{max})");
    }
    clamped
}

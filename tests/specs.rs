//! Behavioral specifications for the contend CLI.
//!
//! These tests are black-box: they invoke the CLI binary and verify
//! stdout, stderr, and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

#[path = "specs/help.rs"]
mod help;

#[path = "specs/errors.rs"]
mod errors;

#[path = "specs/run.rs"]
mod run;

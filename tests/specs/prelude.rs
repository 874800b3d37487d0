//! Shared helpers for CLI specs

use assert_cmd::Command;

/// Fresh invocation of the contend binary.
pub fn contend() -> Command {
    Command::cargo_bin("contend").unwrap()
}

/// Philosopher-run arguments with near-zero delays so specs finish fast.
pub const FAST_DELAYS: [&str; 8] = [
    "--think-min", "0ms", "--think-max", "1ms", "--eat-min", "0ms", "--eat-max", "1ms",
];

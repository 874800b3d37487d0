use crate::prelude::{contend, FAST_DELAYS};
use predicates::prelude::*;

#[test]
fn primitives_single_kind_prints_its_row() {
    contend()
        .args(["primitives", "--kind", "spin-lock", "--threads", "2", "--iterations", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("spin-lock"));
}

#[test]
fn primitives_full_comparison_prints_statistics() {
    contend()
        .args(["primitives", "--threads", "2", "--iterations", "100"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Primitive comparison")
                .and(predicate::str::contains("fastest:")),
        );
}

#[test]
fn philosophers_quick_run_completes() {
    contend()
        .args(["philosophers", "--strategy", "hierarchy", "--seats", "3", "--iterations", "2"])
        .args(FAST_DELAYS)
        .assert()
        .success()
        .stdout(predicate::str::contains("Simulation completed"));
}

#[test]
fn philosophers_clamps_out_of_range_seats() {
    contend()
        .args(["philosophers", "--seats", "1", "--iterations", "1"])
        .args(FAST_DELAYS)
        .assert()
        .success()
        .stderr(predicate::str::contains("clamped"));
}

#[test]
fn bench_sweeps_every_strategy() {
    contend()
        .args(["bench", "--seats", "2", "--iterations", "1", "--eat-max", "3ms"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Strategy comparison")
                .and(predicate::str::contains("arbitrator"))
                .and(predicate::str::contains("hierarchy")),
        );
}

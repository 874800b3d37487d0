use crate::prelude::contend;
use predicates::prelude::*;

#[test]
fn unknown_strategy_is_rejected() {
    contend()
        .args(["philosophers", "--strategy", "chandy-misra"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown strategy"));
}

#[test]
fn unknown_primitive_is_rejected() {
    contend()
        .args(["primitives", "--kind", "futex"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown primitive"));
}

#[test]
fn malformed_duration_is_rejected() {
    contend()
        .args(["philosophers", "--eat-max", "fast"])
        .assert()
        .failure();
}

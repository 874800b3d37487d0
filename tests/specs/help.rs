use crate::prelude::contend;
use predicates::prelude::*;

#[test]
fn help_lists_all_subcommands() {
    contend()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("primitives")
                .and(predicate::str::contains("philosophers"))
                .and(predicate::str::contains("bench")),
        );
}

#[test]
fn version_flag_reports_binary() {
    contend()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("contend"));
}

#[test]
fn no_subcommand_shows_usage() {
    contend()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_f1_results"))
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("seasons"))
        .stdout(predicate::str::contains("explore"));
}

#[test]
fn shows_version() {
    bin().arg("--version").assert().success().stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    bin().assert().code(2);
}

#[test]
fn invalid_range_is_a_usage_error() {
    bin()
        .args(["results", "2023", "--positions", "5..1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("minimum above its maximum"));
}

#[test]
fn pre_championship_season_is_a_usage_error() {
    bin().args(["results", "1949"]).assert().code(2);
}

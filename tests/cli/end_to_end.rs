use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{FakeApi, start_two_race_season};

fn bin(api: &FakeApi) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_f1_results"));
    cmd.env_remove("RUST_LOG")
        .env_remove("F1_RESULTS_TIMEOUT")
        .args(["--base-url", api.base_url(), "--page-size", "3"]);
    cmd
}

#[test]
fn results_paginate_and_filter() {
    let api = start_two_race_season();
    let output = bin(&api)
        .args(["results", "2023", "--positions", "1..2", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["driver"], "Max Verstappen");
    assert_eq!(rows[0]["round"], 1);
    assert_eq!(rows[3]["race"], "Saudi Arabian Grand Prix");
    assert_eq!(api.hits(), 2);
}

#[test]
fn csv_output_leaves_absent_positions_empty() {
    let api = start_two_race_season();
    bin(&api)
        .args(["results", "2023", "--positions", "..", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("round,race,date,driver,constructor,position,points,status\n"))
        .stdout(predicate::str::contains("2,Saudi Arabian Grand Prix,2023-03-19,Lando Norris,McLaren,17,0,+1 Lap"));
}

#[test]
fn empty_filter_result_exits_with_no_data() {
    let api = start_two_race_season();
    bin(&api)
        .args(["results", "2023", "--points", "100..200"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No data matches the selected filters"));
}

#[test]
fn season_without_races_exits_with_no_data() {
    let api = start_two_race_season();
    bin(&api)
        .args(["summary", "2024"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No results available for season 2024"));
}

#[test]
fn unreachable_api_yields_no_data_not_a_crash() {
    let api = FakeApi::start(Default::default());
    bin(&api).args(["results", "2023"]).assert().code(3);
}

#[test]
fn seasons_are_listed_newest_first() {
    let api = start_two_race_season();
    bin(&api)
        .args(["seasons", "--format", "csv"])
        .assert()
        .success()
        .stdout("season\n2023\n2022\n2021\n");
}

#[test]
fn seasons_fall_back_when_api_fails() {
    let api = FakeApi::start(Default::default());
    bin(&api).args(["seasons", "--format", "csv"]).assert().success().stdout("season\n2023\n");
}

#[test]
fn summary_reports_leader_and_standings() {
    let api = start_two_race_season();
    let output = bin(&api).args(["summary", "2023", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["kpi"]["races"], 2);
    assert_eq!(summary["kpi"]["points_leader"]["driver"], "Max Verstappen");
    assert_eq!(summary["kpi"]["points_leader"]["points"], 44.0);
    assert_eq!(summary["constructor_standings"][0]["name"], "Red Bull");
    assert_eq!(summary["wins"].as_array().unwrap().len(), 2);
}

#[test]
fn head_to_head_needs_two_drivers() {
    let api = start_two_race_season();
    bin(&api)
        .args(["compare", "2023", "--driver", "Max Verstappen"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("exactly two drivers"));

    let output = bin(&api)
        .args(["compare", "2023", "--driver", "Max Verstappen", "--driver", "Sergio Perez", "--format", "json"])
        .output()
        .unwrap();
    let comparison: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(comparison[0]["wins"], 1);
    assert_eq!(comparison[1]["podiums"], 2);
    assert_eq!(comparison[1]["avg_position"], 1.5);
}

#[test]
fn constructor_comparison_without_drivers() {
    let api = start_two_race_season();
    bin(&api)
        .args(["compare", "2023", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("McLaren,0,0,17,17,1"));
}

#[test]
fn export_writes_default_named_csv() {
    let api = start_two_race_season();
    let dir = tempfile::tempdir().unwrap();
    bin(&api).current_dir(dir.path()).args(["export", "2023", "--constructor", "Red Bull"]).assert().success();

    let csv = fs::read_to_string(dir.path().join("f1_2023_filtered_data.csv")).unwrap();
    assert_eq!(csv.lines().count(), 5);
    assert!(!csv.contains("McLaren"));
}

#[test]
fn snapshot_writes_raw_page() {
    let api = start_two_race_season();
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("data.json");
    bin(&api)
        .args(["snapshot", "--limit", "3", "--output"])
        .arg(&target)
        .assert()
        .success();

    let text = fs::read_to_string(&target).unwrap();
    assert!(text.starts_with("{\n    \"MRData\""));
    let body: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(body["MRData"]["total"], "6");
}

#[test]
fn explore_reads_commands_from_stdin() {
    let api = start_two_race_season();
    bin(&api)
        .args(["explore", "2023"])
        .write_stdin("constructor McLaren\nshow\npositions 1 3\nshow\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("constructor 'McLaren' selected"))
        .stdout(predicate::str::contains("Lando Norris"))
        .stdout(predicate::str::contains("No data matches the selected filters"));
}

#[test]
fn config_file_supplies_base_url() {
    let api = start_two_race_season();
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("f1.yaml");
    fs::write(&config, format!("base_url: {}\npage_size: 3\n", api.base_url())).unwrap();

    Command::new(env!("CARGO_BIN_EXE_f1_results"))
        .env_remove("F1_RESULTS_BASE_URL")
        .arg("--config")
        .arg(&config)
        .args(["seasons", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2022"));
}

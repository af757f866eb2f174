use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_run_defaults_prints_summary() {
    let mut cmd = Command::cargo_bin("project-sim").unwrap();
    cmd.arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Completion Time: 10.0"))
        .stdout(predicate::str::contains("Final Work Accomplished: 1000"))
        .stdout(predicate::str::contains("Complete"));
}

#[test]
fn test_run_slow_flow_not_completed() {
    let mut cmd = Command::cargo_bin("project-sim").unwrap();
    cmd.arg("run")
        .arg("--work-flow")
        .arg("50")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not completed"))
        .stdout(predicate::str::contains("Work Remaining: 250"))
        .stdout(predicate::str::contains("In Progress"));
}

#[test]
fn test_run_csv_output() {
    let mut cmd = Command::cargo_bin("project-sim").unwrap();
    cmd.args([
        "run",
        "--initial-work",
        "100",
        "--work-flow",
        "10",
        "--simulation-time",
        "10",
        "--dt",
        "1",
        "--format",
        "csv",
    ])
    .assert()
    .success()
    .stdout(predicate::str::starts_with(
        "time,workAccomplished,workRemaining,workFlow,projectIsDone",
    ))
    .stdout(predicate::str::contains("10,100,0,0,1"))
    .stdout(predicate::str::contains("16,100,0,0,1"));
}

#[test]
fn test_run_from_config_file() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("params.json");
    fs::write(&config, r#"{"baseWorkFlow": 50, "simulationTime": 30}"#).unwrap();

    let mut cmd = Command::cargo_bin("project-sim").unwrap();
    cmd.arg("run")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Completion Time: 20.0"));
}

#[test]
fn test_flag_overrides_config_file() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("params.json");
    fs::write(&config, r#"{"baseWorkFlow": 50}"#).unwrap();

    let mut cmd = Command::cargo_bin("project-sim").unwrap();
    cmd.arg("run")
        .arg("--config")
        .arg(&config)
        .arg("--work-flow")
        .arg("100")
        .assert()
        .success()
        .stdout(predicate::str::contains("Completion Time: 10.0"));
}

#[test]
fn test_run_rejects_zero_dt() {
    let mut cmd = Command::cargo_bin("project-sim").unwrap();
    cmd.args(["run", "--dt", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid parameter 'dt'"));
}

#[test]
fn test_run_rejects_excessive_step_count() {
    let mut cmd = Command::cargo_bin("project-sim").unwrap();
    cmd.args(["run", "--max-steps", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Non-terminating configuration"));
}

#[test]
fn test_defaults_prints_config_json() {
    let mut cmd = Command::cargo_bin("project-sim").unwrap();
    cmd.arg("defaults")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"initialProjectDefinition\": 1000.0"))
        .stdout(predicate::str::contains("\"dt\": 0.1"));
}

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_run_defaults() {
    let mut cmd = Command::cargo_bin("fizzbuzz").unwrap();
    cmd.arg("run");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("FizzBuzz:"))
        .stdout(predicate::str::contains(
            "1 2 fizz 4 buzz fizz 7 8 fizz buzz 11 fizz 13 14 fizzbuzz 16 17 fizz 19 buzz",
        ));
}

#[test]
fn test_cli_run_raw_with_luck() {
    let mut cmd = Command::cargo_bin("fizzbuzz").unwrap();
    cmd.arg("run")
        .arg("--from")
        .arg("1")
        .arg("--to")
        .arg("23")
        .arg("--luck")
        .arg("--raw");

    cmd.assert().success().stdout(
        "1 2 luck 4 buzz fizz 7 8 fizz buzz 11 fizz luck 14 fizzbuzz 16 17 fizz 19 buzz fizz 22 luck\n",
    );
}

#[test]
fn test_cli_run_with_statistics() {
    let mut cmd = Command::cargo_bin("fizzbuzz").unwrap();
    cmd.args(["run", "--luck", "--stats", "--raw"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("buzz: 3\nfizz: 4\nfizzbuzz: 1\nluck: 2\nnumber: 10"));
}

#[test]
fn test_cli_run_json() {
    let mut cmd = Command::cargo_bin("fizzbuzz").unwrap();
    cmd.args(["run", "-f", "1", "-t", "5", "--json", "--stats"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["from"], 1);
    assert_eq!(value["to"], 5);
    assert_eq!(value["tokens"][2], "fizz");
    assert_eq!(value["statistics"]["number"], 3);
}

#[test]
fn test_cli_run_rejects_zero() {
    let mut cmd = Command::cargo_bin("fizzbuzz").unwrap();
    cmd.args(["run", "--from", "0", "--to", "5"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Inputs must be positive - from(0) to(5)"));
}

#[test]
fn test_cli_run_rejects_negative() {
    let mut cmd = Command::cargo_bin("fizzbuzz").unwrap();
    cmd.args(["run", "--from", "-3"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("must be positive"));
}

#[test]
fn test_cli_run_rejects_descending_range() {
    let mut cmd = Command::cargo_bin("fizzbuzz").unwrap();
    cmd.args(["run", "--from", "10", "--to", "5"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("from(10) cannot be bigger than to(5)"));
}

#[test]
fn test_cli_raw_conflicts_with_json() {
    let mut cmd = Command::cargo_bin("fizzbuzz").unwrap();
    cmd.args(["run", "--raw", "--json"]);

    cmd.assert().failure();
}

#[test]
fn test_cli_rules() {
    let mut cmd = Command::cargo_bin("fizzbuzz").unwrap();
    cmd.args(["rules", "--luck"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("luck"))
        .stdout(predicate::str::contains("contains the digit 3"))
        .stdout(predicate::str::contains("fizzbuzz"))
        .stdout(predicate::str::contains("divisible by 3 and 5"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("fizzbuzz").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("fizzbuzz"));
}

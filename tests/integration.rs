// Integration tests for the cgpa CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the cgpa binary.
fn cgpa() -> Command {
    Command::cargo_bin("cgpa").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    cgpa()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cgpa"));
}

#[test]
fn cli_help_flag() {
    cgpa()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("CGPA calculator"));
}

#[test]
fn validate_requires_value() {
    cgpa()
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn calculate_rejects_file_with_positional_scores() {
    cgpa()
        .args(["calculate", "--file", "scores.toml", "8.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    cgpa()
        .args(["-q", "-v", "programs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn programs_lists_every_degree() {
    cgpa()
        .arg("programs")
        .assert()
        .success()
        .stdout(predicate::str::contains("4-year"))
        .stdout(predicate::str::contains("3-year"))
        .stdout(predicate::str::contains("2-year"))
        .stdout(predicate::str::contains("1-year"))
        .stdout(predicate::str::contains("lateral-entry"))
        .stdout(predicate::str::contains(
            "CGPA = (YGPA2 + 1.5×YGPA3 + 1.5×YGPA4) / 4",
        ));
}

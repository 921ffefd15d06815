//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

const DB_VARS: [&str; 5] = [
    "POSTGRES_DB",
    "POSTGRES_USER",
    "POSTGRES_PASSWORD",
    "DB_HOST",
    "DB_PORT",
];

fn gradebook_without_db() -> Command {
    let mut cmd = Command::cargo_bin("gradebook").unwrap();
    for var in DB_VARS {
        cmd.env_remove(var);
    }
    // Keep stray .env files out of the way.
    cmd.current_dir(std::env::temp_dir()).env("HOME", std::env::temp_dir());
    cmd
}

// === Help Tests ===

#[test]
fn test_demo_help() {
    let mut cmd = Command::cargo_bin("gradebook").unwrap();
    cmd.arg("demo").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Number of synthetic students"));
}

#[test]
fn test_sorted_help() {
    let mut cmd = Command::cargo_bin("gradebook").unwrap();
    cmd.arg("sorted").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Column to sort by"));
}

#[test]
fn test_top_level_lists_commands() {
    let mut cmd = Command::cargo_bin("gradebook").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("delete-group"))
        .stdout(predicate::str::contains("clear"));
}

// === Configuration Tests ===

#[test]
fn test_missing_configuration_is_reported_together() {
    let mut cmd = gradebook_without_db();
    cmd.arg("demo");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("POSTGRES_DB"))
        .stderr(predicate::str::contains("DB_PORT"));
}

#[test]
fn test_bad_port_is_rejected() {
    let mut cmd = gradebook_without_db();
    cmd.env("POSTGRES_DB", "homework")
        .env("POSTGRES_USER", "postgres")
        .env("POSTGRES_PASSWORD", "secret")
        .env("DB_HOST", "localhost")
        .env("DB_PORT", "fifty")
        .arg("group")
        .arg("8");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid port 'fifty'"));
}

#[test]
fn test_group_requires_number() {
    let mut cmd = Command::cargo_bin("gradebook").unwrap();
    cmd.arg("group").arg("eight");

    cmd.assert().failure();
}

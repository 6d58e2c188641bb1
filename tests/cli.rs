use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

fn mpp_styles() -> Command {
    let mut cmd = Command::cargo_bin("mpp-styles").unwrap();
    // keep a developer's own override document out of the way
    cmd.env_remove("MPP_STYLES");
    cmd.env("XDG_CONFIG_HOME", std::env::temp_dir().join("mpp-styles-test-none"));
    cmd
}

#[test]
fn cli_shows_help() {
    mpp_styles()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mpp-styles"));
}

#[test]
fn keys_lists_builtin_criteria() {
    mpp_styles()
        .arg("keys")
        .assert()
        .success()
        .stdout(predicate::str::contains("std.code.complexity.cyclomatic"))
        .stdout(predicate::str::contains("miext.maintainability.MIwoc"));
}

#[test]
fn show_prints_record_as_json() {
    mpp_styles()
        .args(["show", "miext.halstead.H_Volume", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"backgroundColor\": \"lightblue\""))
        .stdout(predicate::str::contains("\"borderColor\": \"blue\""));
}

#[test]
fn show_unknown_criteria_fails() {
    mpp_styles()
        .args(["show", "nonexistent.key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown criteria"));
}

#[test]
fn export_then_use_as_override() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("styles.csv");
    mpp_styles()
        .args(["export", "--out"])
        .arg(&out)
        .assert()
        .success();
    let text = std::fs::read_to_string(&out).unwrap();
    assert_eq!(text.lines().count(), 6);

    let edited = text.replace("cyclomatic complexity", "McCabe complexity");
    std::fs::write(&out, edited).unwrap();
    mpp_styles()
        .arg("--styles")
        .arg(&out)
        .args(["show", "std.code.complexity.cyclomatic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("McCabe complexity"));
}

#[test]
fn missing_override_document_fails() {
    let dir = tempdir().unwrap();
    mpp_styles()
        .arg("--styles")
        .arg(dir.path().join("absent.json"))
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load style overrides"));
}

#[test]
fn show_ignores_surrounding_whitespace() {
    mpp_styles()
        .args(["show", "  std.code.lines.total "])
        .assert()
        .success()
        .stdout(predicate::str::contains("total lines per file"));
}

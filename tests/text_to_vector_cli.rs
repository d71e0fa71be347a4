use assert_cmd::Command;
use predicates::prelude::*;

// None of these tests load a model: argument and catalog validation both run
// before any weights are touched.

#[test]
fn missing_arguments_print_usage_and_exit_1() {
    Command::cargo_bin("text-to-vector")
        .unwrap()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn one_argument_is_not_enough() {
    Command::cargo_bin("text-to-vector")
        .unwrap()
        .arg("some content")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn empty_content_is_a_usage_error() {
    Command::cargo_bin("text-to-vector")
        .unwrap()
        .args(["", "nomic-ai/nomic-embed-text-v1.5"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn unknown_model_fails_and_lists_supported_models() {
    Command::cargo_bin("text-to-vector")
        .unwrap()
        .args(["hello", "no-such/model"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown embedding model"))
        .stderr(predicate::str::contains("supported:"));
}

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn missing_arguments_print_usage_and_exit_1() {
    Command::cargo_bin("audio-to-text")
        .unwrap()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn one_argument_is_not_enough() {
    Command::cargo_bin("audio-to-text")
        .unwrap()
        .arg("clip.wav")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn empty_model_argument_is_a_usage_error() {
    Command::cargo_bin("audio-to-text")
        .unwrap()
        .args(["clip.wav", "  "])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn nonexistent_model_path_fails_with_context() {
    Command::cargo_bin("audio-to-text")
        .unwrap()
        .args(["clip.wav", "models/does-not-exist.bin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load model"));
}

use assert_cmd::Command;
use predicates::prelude::*;

// These tests only exercise argument validation and local file handling;
// nothing here talks to a model server.

#[test]
fn image_missing_arguments_print_usage_and_exit_1() {
    Command::cargo_bin("image-to-text")
        .unwrap()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn image_two_arguments_are_not_enough() {
    Command::cargo_bin("image-to-text")
        .unwrap()
        .args(["photo.jpg", "llava"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn image_empty_prompt_is_a_usage_error() {
    Command::cargo_bin("image-to-text")
        .unwrap()
        .args(["photo.jpg", "llava", ""])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn image_missing_file_fails_before_any_request() {
    Command::cargo_bin("image-to-text")
        .unwrap()
        .args(["no-such-photo.jpg", "llava", "describe this"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn video_missing_arguments_print_usage_and_exit_1() {
    Command::cargo_bin("video-to-text")
        .unwrap()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn video_empty_model_is_a_usage_error() {
    Command::cargo_bin("video-to-text")
        .unwrap()
        .args(["clip.mp4", "", "describe this"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn missing_arguments_print_usage_and_exit_1() {
    Command::cargo_bin("html-to-markdown")
        .unwrap()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn empty_path_argument_is_a_usage_error() {
    Command::cargo_bin("html-to-markdown")
        .unwrap()
        .arg("")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn extra_arguments_are_a_usage_error() {
    Command::cargo_bin("html-to-markdown")
        .unwrap()
        .args(["a.html", "b.html"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn converts_an_html_file_to_markdown() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("page.html");
    std::fs::write(
        &path,
        "<html><body><h1>Release notes</h1><p>Now with <em>tables</em>.</p></body></html>",
    )?;

    Command::cargo_bin("html-to-markdown")?
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Release notes"))
        .stdout(predicate::str::contains("*tables*"));

    Ok(())
}

#[test]
fn missing_file_fails_with_context() {
    Command::cargo_bin("html-to-markdown")
        .unwrap()
        .arg("definitely-not-here.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

/// Runs the renderer in an empty directory so no stray `mmrag.toml` is picked up.
fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mmrag-render").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn renders_default_page_as_html() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .assert()
        .success()
        .stdout(contains("<title>Multi-Modal RAG</title>"))
        .stdout(contains("<h1>Multi-Modal Retrieval-Augmented Generation (RAG)</h1>"))
        .stdout(contains("Document Question Answering"));
}

#[test]
fn renders_markdown_with_front_matter() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("---\ntitle: \"Multi-Modal RAG\""))
        .stdout(contains("# Multi-Modal Retrieval-Augmented Generation (RAG)"));
}

#[test]
fn events_are_emitted_in_render_order() {
    let dir = TempDir::new().unwrap();
    let output = cmd(&dir).args(["--format", "events"]).output().unwrap();
    assert!(output.status.success());

    let events: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let kinds: Vec<_> = events.as_array().unwrap().iter().map(|e| e["event"].clone()).collect();
    assert_eq!(kinds, ["page_configured", "title", "static_content"]);
    assert_eq!(events[0]["payload"]["title"], "Multi-Modal RAG");
}

#[test]
fn config_file_and_environment_are_applied() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "heading = \"Ask your documents\"\n[page]\nlayout = \"centered\"\n").unwrap();

    cmd(&dir)
        .args(["--config", config.to_str().unwrap(), "--format", "events"])
        .env("MMRAG__PAGE__TITLE", "From Env")
        .assert()
        .success()
        .stdout(contains("\"title\": \"From Env\""))
        .stdout(contains("\"layout\": \"centered\""))
        .stdout(contains("Ask your documents"));
}

#[test]
fn writes_output_file() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("page.html");

    cmd(&dir).args(["--output", target.to_str().unwrap()]).assert().success().stdout("");
    assert!(fs::read_to_string(&target).unwrap().contains("<!DOCTYPE html>"));
}

#[test]
fn invalid_configuration_fails_without_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("mmrag.toml"), "[page]\nicon = \"not an icon\"\n").unwrap();

    cmd(&dir).assert().failure().stdout("").stderr(contains("icon"));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    cmd(&dir).args(["--config", "nope.toml"]).assert().failure();
}

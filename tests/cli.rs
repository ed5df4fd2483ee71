use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

const FIGURE: &str = r#"{"layout":{"title":{"text":"CLI"}},"data":[{"x":[1.0,2.0],"type":"histogram","opacity":0.5}]}"#;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("tplot").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("tplot"))
        .stdout(predicate::str::contains("normalize"));
}

#[test]
fn normalize_prints_canonical_json() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("fig.json");
    fs::write(&input, FIGURE).unwrap();

    let mut cmd = Command::cargo_bin("tplot").unwrap();
    cmd.args(["normalize", "--input"]).arg(&input);
    cmd.assert().success().stdout(predicate::str::diff(
        "{\"data\":[{\"type\":\"histogram\",\"opacity\":0.5,\"x\":[1.0,2.0]}],\"layout\":{\"title\":{\"text\":\"CLI\"}}}\n",
    ));
}

#[test]
fn normalize_rejects_bad_flags() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("fig.json");
    fs::write(&input, r#"{"data":[{"type":"surface","hoverinfo":"x+all"}]}"#).unwrap();

    let mut cmd = Command::cargo_bin("tplot").unwrap();
    cmd.args(["normalize", "--input"]).arg(&input);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown hoverinfo flag `all`"));
}

#[test]
fn normalize_rejects_misspelled_keys() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("fig.json");
    let out = dir.path().join("out.json");
    fs::write(&input, r#"{"data":[{"type":"histogram","opacty":0.5}]}"#).unwrap();

    let mut cmd = Command::cargo_bin("tplot").unwrap();
    cmd.args(["normalize", "--input"]).arg(&input).arg("--out").arg(&out);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown field `opacty`"));
    assert!(!out.exists());
}

#[test]
fn render_writes_html_with_overrides() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("fig.json");
    let out = dir.path().join("fig.html");
    let config = dir.path().join("html.json");
    fs::write(&input, FIGURE).unwrap();
    fs::write(&config, r#"{"div_id": "chart", "mathjax": "exclude"}"#).unwrap();

    let mut cmd = Command::cargo_bin("tplot").unwrap();
    cmd.args(["render", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .arg("--config")
        .arg(&config)
        .args(["--plotly-url", "https://example.test/plotly.js"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Wrote 1 trace(s)"));

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<script src="https://example.test/plotly.js"></script>"#));
    assert!(!html.contains("mathjax"));
    assert!(html.contains(r#"<div id="chart"></div>"#));
}

#[test]
fn render_fragment_without_plotly() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("fig.json");
    let out = dir.path().join("fig.html");
    fs::write(&input, FIGURE).unwrap();

    let mut cmd = Command::cargo_bin("tplot").unwrap();
    cmd.args(["render", "--no-plotly", "--fragment", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(&out);
    cmd.assert().success();

    let html = fs::read_to_string(&out).unwrap();
    assert!(!html.contains("<html>"));
    assert!(!html.contains("cdn.plot.ly"));
    assert!(html.contains("Plotly.newPlot("));
}

#[test]
fn missing_input_fails_with_context() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("tplot").unwrap();
    cmd.args(["render", "--input"])
        .arg(dir.path().join("missing.json"))
        .arg("--out")
        .arg(dir.path().join("out.html"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("reading figure"));
}

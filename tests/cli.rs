mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("archive-front").unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn build_writes_populated_landing_page() {
    let archive = common::full_archive();
    let home = TempDir::new().unwrap();
    let config = common::write_config(home.path(), archive.path());
    let out = home.path().join("index.html");

    cmd(&home)
        .arg("--config")
        .arg(&config)
        .arg("build")
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let html = std::fs::read_to_string(out).unwrap();
    assert!(html.contains("<title>Field Archive</title>"));
    assert!(html.contains("data-count=\"1204\">1,204</span>"));
    assert!(html.contains("1,204 articles indexed"));
    assert!(html.contains("<span class=\"topic-name\">Science</span><span class=\"topic-count\">400 articles</span>"));
    assert!(html.contains("<span class=\"topic-name\">History</span><span class=\"topic-count\">\u{2014} articles</span>"));
    assert!(html.contains("<h3 class=\"article-title\">Old Maps</h3>"));
    assert!(html.contains("92% Confidence"));
    assert!(html.contains("article.html?slug=old-maps"));
}

#[test]
fn build_to_stdout_with_source_override() {
    let archive = common::full_archive();
    let home = TempDir::new().unwrap();
    let config = common::write_config(home.path(), std::path::Path::new("/nonexistent"));

    cmd(&home)
        .arg("--config")
        .arg(&config)
        .arg("--source")
        .arg(archive.path())
        .args(["build", "--out", "-"])
        .assert()
        .success()
        .stdout(contains("<!DOCTYPE html>"))
        .stdout(contains("Old Maps"));
}

#[test]
fn unreachable_archive_still_builds_skeleton() {
    let home = TempDir::new().unwrap();
    let config = common::write_config(home.path(), &home.path().join("missing"));

    cmd(&home)
        .arg("--config")
        .arg(&config)
        .args(["build", "--out", "-"])
        .assert()
        .success()
        .stdout(contains("id=\"featuredArticle\""))
        .stdout(contains("article-title").not());
}

#[test]
fn search_prints_first_hit_and_escaping_is_html_only() {
    let archive = common::full_archive();
    let home = TempDir::new().unwrap();
    let config = common::write_config(home.path(), archive.path());

    cmd(&home)
        .arg("--config")
        .arg(&config)
        .args(["search", "ETHICS"])
        .assert()
        .success()
        .stdout(contains("<script>alert('x')</script>"))
        .stdout(contains("Found 1 result"));
}

#[test]
fn search_without_hits_reports_query() {
    let archive = common::full_archive();
    let home = TempDir::new().unwrap();
    let config = common::write_config(home.path(), archive.path());

    cmd(&home)
        .arg("--config")
        .arg(&config)
        .args(["search", "volcano"])
        .assert()
        .success()
        .stdout(contains("No results for \"volcano\""));
}

#[test]
fn shell_runs_suggestions_and_opens_featured() {
    let archive = common::full_archive();
    let home = TempDir::new().unwrap();
    let config = common::write_config(home.path(), archive.path());

    cmd(&home)
        .arg("--config")
        .arg(&config)
        .arg("shell")
        .write_stdin(":s 1\n:open\n:q\n")
        .assert()
        .success()
        .stdout(contains("Found 1 result"))
        .stdout(contains("open "))
        .stdout(contains("article.html?slug=tide-tables"));
}

#[test]
fn missing_explicit_config_fails() {
    let home = TempDir::new().unwrap();

    cmd(&home)
        .args(["--config", "/nonexistent/archive-front.toml", "show"])
        .assert()
        .failure()
        .stderr(contains("does not exist"));
}

#[test]
fn every_command_has_help() {
    let home = TempDir::new().unwrap();
    for args in [vec![], vec!["build"], vec!["show"], vec!["search"], vec!["shell"]] {
        cmd(&home).args(&args).arg("--help").assert().success();
    }
}

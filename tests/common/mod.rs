#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const INDEX_JSON: &str = r#"{
  "articles": [
    {"slug": "tide-tables", "title": "Reading Tide Tables", "excerpt": "Harbour records from 1890.", "category": "Science", "confidence_score": 0.5, "source_count": 3},
    {"slug": "ai-ethics", "title": "<script>alert('x')</script> AI Ethics", "excerpt": "Debates on machine judgement.", "category": "Technology", "confidence_score": 0.92, "source_count": 12},
    {"slug": "old-maps", "title": "Old Maps", "category": "History", "confidence_score": 92, "source_count": 4}
  ]
}"#;

pub const STATS_JSON: &str = r#"{
  "article_count": 1204,
  "source_count": 87,
  "categories": [
    {"category": "Science", "count": 400},
    {"category": "History", "count": 0}
  ]
}"#;

/// Writes a static archive with `api/articles/index.json` and `api/stats.json`.
pub fn archive_dir(index: Option<&str>, stats: Option<&str>) -> TempDir {
    let dir = TempDir::new().expect("temp archive");
    let api = dir.path().join("api");
    fs::create_dir_all(api.join("articles")).expect("api dirs");
    if let Some(index) = index {
        fs::write(api.join("articles").join("index.json"), index).expect("index.json");
    }
    if let Some(stats) = stats {
        fs::write(api.join("stats.json"), stats).expect("stats.json");
    }
    dir
}

pub fn full_archive() -> TempDir {
    archive_dir(Some(INDEX_JSON), Some(STATS_JSON))
}

/// Writes a config file with topic cards and suggestion chips.
pub fn write_config(dir: &Path, source: &Path) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    let contents = format!(
        r#"source = "{}"
title = "Field Archive"
animate_counters = false
topics = ["Science", "History", "Art"]

[[suggestions]]
label = "Tides"
query = "tide"
"#,
        source.display()
    );
    fs::write(&path, contents).expect("config.toml");
    path
}

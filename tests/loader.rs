mod common;

use archive_front::loader::{load_archive, try_load_archive, DirectorySource, ResourcePaths};
use archive_front::ArchiveError;
use common::{archive_dir, full_archive, INDEX_JSON, STATS_JSON};

#[tokio::test]
async fn loads_snapshot_from_directory() {
    let dir = full_archive();
    let source = DirectorySource::new(dir.path());
    let snapshot = load_archive(&source, &ResourcePaths::default())
        .await
        .expect("snapshot");

    assert_eq!(snapshot.articles.len(), 3);
    assert_eq!(snapshot.stats.article_count, 1204);
    assert_eq!(snapshot.stats.category_count, 0);
    assert_eq!(snapshot.featured().map(|a| a.slug.as_str()), Some("old-maps"));
}

#[tokio::test]
async fn missing_stats_leaves_page_unpopulated() {
    let dir = archive_dir(Some(INDEX_JSON), None);
    let source = DirectorySource::new(dir.path());
    assert!(load_archive(&source, &ResourcePaths::default()).await.is_none());
}

#[tokio::test]
async fn missing_index_leaves_page_unpopulated() {
    let dir = archive_dir(None, Some(STATS_JSON));
    let source = DirectorySource::new(dir.path());
    assert!(load_archive(&source, &ResourcePaths::default()).await.is_none());
}

#[tokio::test]
async fn malformed_json_is_a_parse_error() {
    let dir = archive_dir(Some("{\"articles\": ["), Some(STATS_JSON));
    let source = DirectorySource::new(dir.path());

    let err = try_load_archive(&source, &ResourcePaths::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ArchiveError::Parse { .. }));
    assert!(load_archive(&source, &ResourcePaths::default()).await.is_none());
}

#[tokio::test]
async fn custom_paths_are_honoured() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("i.json"), INDEX_JSON).unwrap();
    std::fs::write(dir.path().join("s.json"), STATS_JSON).unwrap();
    let paths = ResourcePaths {
        index: "i.json".into(),
        stats: "s.json".into(),
    };
    let source = DirectorySource::new(dir.path());
    assert!(load_archive(&source, &paths).await.is_some());
}

#[tokio::test]
async fn null_and_float_fields_still_load_with_defaults() {
    let index = r#"{"articles": [
        {"slug": "a", "title": "Alpha", "category": "Science", "confidence_score": 0.4, "source_count": 2},
        {"slug": "b", "title": null, "category": null, "excerpt": null, "confidence_score": null, "source_count": 3.0},
        {"title": "No slug", "source_count": null}
    ]}"#;
    let stats = r#"{"article_count": 3.0, "source_count": null, "category_count": null, "categories": [{"category": "Science", "count": null}]}"#;
    let dir = archive_dir(Some(index), Some(stats));
    let source = DirectorySource::new(dir.path());

    let snapshot = load_archive(&source, &ResourcePaths::default())
        .await
        .expect("snapshot");

    assert_eq!(snapshot.articles.len(), 3);
    let b = &snapshot.articles[1];
    assert_eq!(b.title, "");
    assert_eq!(b.category, "");
    assert_eq!(b.raw_score(), 0.0);
    assert_eq!(b.source_count, 3);
    assert_eq!(snapshot.articles[2].slug, "");
    assert_eq!(snapshot.articles[2].source_count, 0);
    assert_eq!(snapshot.stats.article_count, 3);
    assert_eq!(snapshot.stats.source_count, 0);
    assert_eq!(snapshot.stats.categories[0].count, 0);
    assert_eq!(snapshot.featured().map(|a| a.slug.as_str()), Some("a"));
}

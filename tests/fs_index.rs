//! Filesystem Integration Tests
//!
//! Asset discovery on a real directory tree and manual content loading,
//! end to end through `Works::load`.

use std::fs;
use std::path::Path;

use portfolio::config::SiteSettings;
use portfolio::library::{AssetIndex, ContentError, FsIndex, ManualContent, Works};
use tempfile::TempDir;

fn touch(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_fs_index_resolves_urls_and_text() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "designs/Poster/fest.png", "png-bytes");
    touch(temp.path(), "quotes/stoic.txt", "\"Waste no more time.\"\n");

    let index = FsIndex::new(temp.path(), "/assets");

    let designs = index.find("designs/*/*.*");
    assert_eq!(designs.len(), 1);
    assert_eq!(designs[0].path, "designs/Poster/fest.png");
    assert_eq!(designs[0].reference, "/assets/designs/Poster/fest.png");

    let quotes = index.find("quotes/*.*");
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].reference, "\"Waste no more time.\"\n");
}

#[test]
fn test_fs_index_sorted_and_skips_directories() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "blogs/zeta.png", "");
    touch(temp.path(), "blogs/alpha.jpg", "");
    fs::create_dir_all(temp.path().join("blogs/folder.with.dots")).unwrap();

    let index = FsIndex::new(temp.path(), "/static/");
    let paths: Vec<_> = index.find("blogs/*.*").into_iter().map(|a| a.path).collect();

    assert_eq!(paths, vec!["blogs/alpha.jpg", "blogs/zeta.png"]);
}

#[test]
fn test_text_outside_quotes_resolves_to_url() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "designs/Poster/notes.txt", "private draft notes");
    touch(temp.path(), "blogs/draft.txt", "unpublished");

    let index = FsIndex::new(temp.path(), "/assets");

    let designs = index.find("designs/*/*.*");
    assert_eq!(designs.len(), 1);
    assert_eq!(designs[0].reference, "/assets/designs/Poster/notes.txt");

    let blogs = index.find("blogs/*.*");
    assert_eq!(blogs[0].reference, "/assets/blogs/draft.txt");
}

#[test]
fn test_fs_index_skips_dotfiles() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "certificates/Cloud/.DS_Store", "");
    touch(temp.path(), "designs/Poster/._fest.png", "");
    touch(temp.path(), "designs/Poster/fest.png", "");
    touch(temp.path(), "quotes/.keep.txt", "not a quote");

    let index = FsIndex::new(temp.path(), "/assets");

    assert!(index.find("certificates/*/*.*").is_empty());
    let designs: Vec<_> = index.find("designs/*/*.*").into_iter().map(|a| a.path).collect();
    assert_eq!(designs, vec!["designs/Poster/fest.png"]);
    assert!(index.find("quotes/*.*").is_empty());
}

#[test]
fn test_missing_asset_root_yields_nothing() {
    let temp = TempDir::new().unwrap();
    let index = FsIndex::new(temp.path().join("does-not-exist"), "/assets");

    assert!(index.find("certificates/*/*.*").is_empty());
}

#[test]
fn test_missing_manual_file_is_empty() {
    let temp = TempDir::new().unwrap();
    let manual = ManualContent::load(&temp.path().join("content.yaml")).unwrap();

    assert_eq!(manual, ManualContent::default());
}

#[test]
fn test_malformed_manual_file_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("content.yaml");
    fs::write(&path, "certificates: [not: [closed").unwrap();

    match ManualContent::load(&path) {
        Err(ContentError::Parse { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_works_end_to_end() {
    let temp = TempDir::new().unwrap();
    let assets = temp.path().join("assets");
    touch(&assets, "certificates/Cloud/azure-ds.jpg", "");
    touch(&assets, "certificates/Data_Science/pandas.png", "");
    touch(&assets, "designs/Poster/fest.png", "");
    touch(&assets, "blogs/why-rust.jpg", "");
    touch(&assets, "quotes/q1.txt", "Ignored: manual q1 exists");
    touch(&assets, "quotes/q2.txt", "  \"Be curious.\" ");

    let content = temp.path().join("content.yaml");
    fs::write(
        &content,
        r#"
certificates:
  - id: azure-ds
    title: Azure Data Scientist Associate
    issuer: Microsoft
    date: "2024"
    category: Cloud & AI
    imageUrl: https://picsum.photos/seed/azure/400/300
quotes:
  - id: q1
    type: text
    content: Simplicity is prerequisite for reliability.
    author: Edsger Dijkstra
"#,
    )
    .unwrap();

    let site = SiteSettings {
        default_quote_author: "Site Owner".to_string(),
        blog_base_url: "https://medium.com/@someone/".to_string(),
        ..Default::default()
    };
    let mut sources = ManualContent::load(&content).unwrap().into_sources(&site);
    sources.certificates.default_date = Some("2025".to_string());

    let index = FsIndex::new(&assets, site.asset_url_prefix.clone());
    let works = Works::load(&index, &sources);

    assert_eq!(works.certificates.len(), 2);
    assert_eq!(works.certificates[0].issuer, "Microsoft");
    assert_eq!(
        works.certificates[0].image_url,
        "/assets/certificates/Cloud/azure-ds.jpg"
    );
    assert_eq!(works.certificates[1].title, "Pandas");
    assert_eq!(works.certificates[1].category, "Data Science");

    assert_eq!(works.designs[0].category, "Poster");
    assert_eq!(works.blogs[0].url, "https://medium.com/@someone/why-rust");

    assert_eq!(works.quotes.len(), 2);
    assert_eq!(works.quotes[0].author(), "Edsger Dijkstra");
    assert_eq!(works.quotes[1].content(), "Be curious.");
    assert_eq!(works.quotes[1].author(), "Site Owner");

    let json = serde_json::to_value(&works).unwrap();
    assert_eq!(json["quotes"][1]["type"], "text");
    assert_eq!(
        json["certificates"][1]["imageUrl"],
        "/assets/certificates/Data_Science/pandas.png"
    );
}

//! Asset discovery.
//!
//! Loaders never touch the filesystem directly. They ask an [`AssetIndex`]
//! for every asset matching a glob pattern and get back the logical path
//! plus an already-resolved reference (a servable URL for most files, the
//! raw contents for quote text files). Dotfiles are never returned.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::{debug, warn};

use super::error::ContentError;

/// Image extensions picked up as artwork
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

/// Extensions resolved to their raw contents instead of a URL
pub const TEXT_EXTENSIONS: &[&str] = &["txt"];

/// Top-level directories whose text files resolve to raw contents
pub const RAW_TEXT_DIRS: &[&str] = &["quotes"];

/// `*` must not cross directory boundaries or match a leading dot
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// One discovered asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedAsset {
    /// Logical path relative to the asset root, `/`-separated
    pub path: String,

    /// Resolved reference (URL or raw text)
    pub reference: String,
}

impl IndexedAsset {
    pub fn new(path: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reference: reference.into(),
        }
    }
}

/// Source of discovered assets
pub trait AssetIndex {
    /// All assets whose logical path matches `pattern`, ordered by path
    fn find(&self, pattern: &str) -> Vec<IndexedAsset>;
}

pub fn is_image_ext(ext: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext))
}

pub fn is_text_ext(ext: &str) -> bool {
    TEXT_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext))
}

/// Dotfiles such as `.DS_Store` and `._name.png` are never assets.
///
/// `*.*` still matches them through its literal dot, so the match options
/// alone are not enough.
pub fn is_hidden(path: &str) -> bool {
    path.split('/').any(|segment| segment.starts_with('.'))
}

fn compile(pattern: &str) -> Result<Pattern, ContentError> {
    Ok(Pattern::new(pattern)?)
}

/// In-memory index keyed by logical path
#[derive(Debug, Clone, Default)]
pub struct MemoryIndex {
    assets: BTreeMap<String, String>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asset
    pub fn with(mut self, path: impl Into<String>, reference: impl Into<String>) -> Self {
        self.insert(path, reference);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, reference: impl Into<String>) {
        self.assets.insert(path.into(), reference.into());
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl FromIterator<(String, String)> for MemoryIndex {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            assets: iter.into_iter().collect(),
        }
    }
}

impl AssetIndex for MemoryIndex {
    fn find(&self, pattern: &str) -> Vec<IndexedAsset> {
        let pattern = match compile(pattern) {
            Ok(p) => p,
            Err(e) => {
                warn!("Skipping asset lookup: {}", e);
                return Vec::new();
            }
        };

        self.assets
            .iter()
            .filter(|(path, _)| !is_hidden(path) && pattern.matches_with(path, MATCH_OPTIONS))
            .map(|(path, reference)| IndexedAsset::new(path.clone(), reference.clone()))
            .collect()
    }
}

/// Index over an asset directory on disk
#[derive(Debug, Clone)]
pub struct FsIndex {
    root: PathBuf,
    url_prefix: String,
    text_dirs: Vec<String>,
}

impl FsIndex {
    /// Index `root`, serving images under `url_prefix`
    pub fn new(root: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            url_prefix: url_prefix.into(),
            text_dirs: RAW_TEXT_DIRS.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Replace the directories whose `.txt` files are read as raw text
    pub fn with_text_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.text_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Public URL for a logical asset path
    pub fn url_for(&self, logical: &str) -> String {
        format!("{}/{}", self.url_prefix.trim_end_matches('/'), logical)
    }

    /// Text files under a raw-text directory resolve to their contents;
    /// everything else is served by URL
    fn resolves_raw(&self, logical: &str, ext: &str) -> bool {
        let top = logical.split('/').next().unwrap_or_default();
        is_text_ext(ext) && self.text_dirs.iter().any(|d| d == top)
    }

    fn scan(&self, pattern: &str) -> Result<Vec<IndexedAsset>, ContentError> {
        // Glob results must share a prefix with the root for strip_prefix
        let root = self.root.canonicalize()?;
        let full = format!("{}/{}", Pattern::escape(&root.to_string_lossy()), pattern);

        let mut assets = Vec::new();
        for entry in glob::glob_with(&full, MATCH_OPTIONS)? {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    warn!("Unreadable asset entry: {}", e);
                    continue;
                }
            };
            if !path.is_file() {
                continue;
            }

            let Some(logical) = logical_path(&root, &path) else {
                continue;
            };
            if is_hidden(&logical) {
                continue;
            }
            let ext = path
                .extension()
                .map(|e| e.to_string_lossy().to_string())
                .unwrap_or_default();

            let reference = if self.resolves_raw(&logical, &ext) {
                match std::fs::read_to_string(&path) {
                    Ok(text) => text,
                    Err(e) => {
                        warn!("Skipping unreadable text asset {}: {}", path.display(), e);
                        continue;
                    }
                }
            } else {
                self.url_for(&logical)
            };

            assets.push(IndexedAsset::new(logical, reference));
        }

        assets.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(assets)
    }
}

fn logical_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let segments: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    Some(segments.join("/"))
}

impl AssetIndex for FsIndex {
    fn find(&self, pattern: &str) -> Vec<IndexedAsset> {
        if !self.root.exists() {
            debug!("Asset root {} does not exist", self.root.display());
            return Vec::new();
        }

        match self.scan(pattern) {
            Ok(assets) => assets,
            Err(e) => {
                warn!("Asset scan for '{}' failed: {}", pattern, e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_classes() {
        assert!(is_image_ext("png"));
        assert!(is_image_ext("JPEG"));
        assert!(is_image_ext("gif"));
        assert!(!is_image_ext("txt"));
        assert!(is_text_ext("txt"));
        assert!(is_text_ext("TXT"));
        assert!(!is_text_ext("md"));
    }

    #[test]
    fn test_memory_index_star_stays_in_one_dir() {
        let index = MemoryIndex::new()
            .with("blogs/intro.png", "/a")
            .with("blogs/nested/deep.png", "/b")
            .with("designs/Poster/p.png", "/c");

        let blogs = index.find("blogs/*.*");
        assert_eq!(blogs.len(), 1);
        assert_eq!(blogs[0].path, "blogs/intro.png");

        let designs = index.find("designs/*/*.*");
        assert_eq!(designs, vec![IndexedAsset::new("designs/Poster/p.png", "/c")]);
    }

    #[test]
    fn test_memory_index_orders_by_path() {
        let index: MemoryIndex = [
            ("quotes/zeta.txt".to_string(), "z".to_string()),
            ("quotes/alpha.txt".to_string(), "a".to_string()),
        ]
        .into_iter()
        .collect();

        let found: Vec<_> = index.find("quotes/*.txt").into_iter().map(|a| a.path).collect();
        assert_eq!(found, vec!["quotes/alpha.txt", "quotes/zeta.txt"]);
    }

    #[test]
    fn test_memory_index_skips_dotfiles() {
        let index = MemoryIndex::new()
            .with("certificates/Cloud/.DS_Store", "/ds")
            .with("designs/Poster/._fest.png", "/apple-double")
            .with("designs/.cache/p.png", "/cached")
            .with("designs/Poster/fest.png", "/fest");

        assert!(index.find("certificates/*/*.*").is_empty());
        assert_eq!(
            index.find("designs/*/*.*"),
            vec![IndexedAsset::new("designs/Poster/fest.png", "/fest")]
        );
    }

    #[test]
    fn test_is_hidden() {
        assert!(is_hidden("quotes/.keep"));
        assert!(is_hidden(".git/config"));
        assert!(!is_hidden("quotes/keep.txt"));
        assert!(!is_hidden("designs/Poster/fest.v2.png"));
    }

    #[test]
    fn test_raw_text_only_under_text_dirs() {
        let index = FsIndex::new("/srv/assets", "/assets");
        assert!(index.resolves_raw("quotes/stoic.txt", "txt"));
        assert!(!index.resolves_raw("quotes/sunrise.png", "png"));
        assert!(!index.resolves_raw("designs/Poster/notes.txt", "txt"));
        assert!(!index.resolves_raw("blogs/draft.txt", "txt"));

        let index = index.with_text_dirs(["notes"]);
        assert!(index.resolves_raw("notes/a.txt", "txt"));
        assert!(!index.resolves_raw("quotes/stoic.txt", "txt"));
    }

    #[test]
    fn test_invalid_pattern_yields_nothing() {
        let index = MemoryIndex::new().with("blogs/a.png", "/a");
        assert!(index.find("blogs/[").is_empty());
    }

    #[test]
    fn test_url_for_trims_trailing_slash() {
        let index = FsIndex::new("/srv/assets", "/assets/");
        assert_eq!(index.url_for("blogs/a.png"), "/assets/blogs/a.png");
    }
}

//! Category loaders.
//!
//! Each loader combines a hand-authored list with the assets discovered
//! under its directory:
//!
//! ```text
//! certificates/<Category>/<file>   -> Certificate
//! designs/<Category>/<file>        -> DesignItem
//! blogs/<file>                     -> BlogItem
//! quotes/<file>.{png,jpg,...,txt}  -> QuoteItem
//! ```
//!
//! Manual entries always come first, in authored order, and are never
//! dropped. Discovered assets follow in scan order. Identifiers never repeat
//! within one list.
//!
//! For certificates, designs and blogs a discovered file whose id matches an
//! existing entry replaces that entry's image reference and leaves every
//! other field alone. Quotes differ: a matching id means the file is skipped.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use super::index::{is_image_ext, is_text_ext, AssetIndex, IndexedAsset};
use super::path::{format_title, parse_asset_path, AssetPath};
use crate::domain::{BlogItem, Certificate, DesignItem, Identified, QuoteItem};

pub const CERTIFICATES_PATTERN: &str = "certificates/*/*.*";
pub const DESIGNS_PATTERN: &str = "designs/*/*.*";
pub const BLOGS_PATTERN: &str = "blogs/*.*";
pub const QUOTES_PATTERN: &str = "quotes/*.*";

/// Issuer given to certificates found only on disk
pub const DEFAULT_ISSUER: &str = "Self Paced";

/// Inputs for [`load_certificates`]
#[derive(Debug, Clone)]
pub struct CertificateSource {
    pub manual: Vec<Certificate>,
    pub default_issuer: String,

    /// Date label for discovered certificates; current year when unset
    pub default_date: Option<String>,
}

impl Default for CertificateSource {
    fn default() -> Self {
        Self {
            manual: Vec::new(),
            default_issuer: DEFAULT_ISSUER.to_string(),
            default_date: None,
        }
    }
}

/// Inputs for [`load_designs`]
#[derive(Debug, Clone, Default)]
pub struct DesignSource {
    pub manual: Vec<DesignItem>,
}

/// Inputs for [`load_blogs`]
#[derive(Debug, Clone, Default)]
pub struct BlogSource {
    pub manual: Vec<BlogItem>,

    /// Prefix joined with an id to form the article URL
    pub base_url: String,
}

/// Inputs for [`load_quotes`]
#[derive(Debug, Clone, Default)]
pub struct QuoteSource {
    pub manual: Vec<QuoteItem>,
    pub default_author: String,
}

/// Everything the loaders need, one source per content type
#[derive(Debug, Clone, Default)]
pub struct ContentSources {
    pub certificates: CertificateSource,
    pub designs: DesignSource,
    pub blogs: BlogSource,
    pub quotes: QuoteSource,
}

/// Fully merged content for the Works section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Works {
    pub certificates: Vec<Certificate>,
    pub designs: Vec<DesignItem>,
    pub blogs: Vec<BlogItem>,
    pub quotes: Vec<QuoteItem>,
}

impl Works {
    /// Run every loader against the same index
    pub fn load(index: &dyn AssetIndex, sources: &ContentSources) -> Self {
        Self {
            certificates: load_certificates(index, &sources.certificates),
            designs: load_designs(index, &sources.designs),
            blogs: load_blogs(index, &sources.blogs),
            quotes: load_quotes(index, &sources.quotes),
        }
    }
}

/// Manual list with duplicate ids removed (first one wins)
fn dedupe_manual<T: Identified + Clone>(manual: &[T], kind: &str) -> Vec<T> {
    let mut seen = HashSet::new();
    manual
        .iter()
        .filter(|item| {
            let fresh = seen.insert(item.id().to_string());
            if !fresh {
                warn!("Dropping duplicate manual {} '{}'", kind, item.id());
            }
            fresh
        })
        .cloned()
        .collect()
}

/// Shared merge: enrich matches in place, append the rest
fn merge<T, M, S>(
    manual: &[T],
    assets: Vec<IndexedAsset>,
    kind: &str,
    mut on_match: M,
    mut synthesize: S,
) -> Vec<T>
where
    T: Identified + Clone,
    M: FnMut(&mut T, &AssetPath, &IndexedAsset),
    S: FnMut(&AssetPath, IndexedAsset) -> T,
{
    let mut merged = dedupe_manual(manual, kind);
    let manual_count = merged.len();
    let discovered = assets.len();

    let mut positions: HashMap<String, usize> = merged
        .iter()
        .enumerate()
        .map(|(i, item)| (item.id().to_string(), i))
        .collect();

    for asset in assets {
        let parsed = parse_asset_path(&asset.path);

        if let Some(&pos) = positions.get(&parsed.id) {
            on_match(&mut merged[pos], &parsed, &asset);
        } else {
            positions.insert(parsed.id.clone(), merged.len());
            merged.push(synthesize(&parsed, asset));
        }
    }

    debug!(
        kind,
        manual = manual_count,
        discovered,
        merged = merged.len(),
        "Merged content list"
    );

    merged
}

fn current_year() -> String {
    Utc::now().year().to_string()
}

/// Certificates: manual entries plus `certificates/<Category>/<file>`
pub fn load_certificates(index: &dyn AssetIndex, source: &CertificateSource) -> Vec<Certificate> {
    let date = source.default_date.clone().unwrap_or_else(current_year);

    merge(
        &source.manual,
        index.find(CERTIFICATES_PATTERN),
        "certificate",
        |cert, _, asset| cert.image_url = asset.reference.clone(),
        |parsed, asset| Certificate {
            id: parsed.id.clone(),
            title: format_title(&parsed.id),
            issuer: source.default_issuer.clone(),
            date: date.clone(),
            category: format_title(&parsed.category),
            image_url: asset.reference,
            link: None,
        },
    )
}

/// Designs: manual entries plus `designs/<Category>/<file>`
pub fn load_designs(index: &dyn AssetIndex, source: &DesignSource) -> Vec<DesignItem> {
    merge(
        &source.manual,
        index.find(DESIGNS_PATTERN),
        "design",
        |design, _, asset| design.image_url = asset.reference.clone(),
        |parsed, asset| DesignItem {
            id: parsed.id.clone(),
            title: format_title(&parsed.id),
            description: String::new(),
            image_url: asset.reference,
            category: format_title(&parsed.category),
            link: None,
        },
    )
}

/// Blogs: manual entries plus `blogs/<file>` cover images
pub fn load_blogs(index: &dyn AssetIndex, source: &BlogSource) -> Vec<BlogItem> {
    let blog_url = |id: &str| format!("{}{}", source.base_url, id);

    merge(
        &source.manual,
        index.find(BLOGS_PATTERN),
        "blog",
        |blog, parsed, asset| {
            blog.image_url = asset.reference.clone();
            if blog.url.is_empty() {
                blog.url = blog_url(&parsed.id);
            }
        },
        |parsed, asset| BlogItem {
            id: parsed.id.clone(),
            title: format_title(&parsed.id),
            subtitle: String::new(),
            date: String::new(),
            read_time: String::new(),
            url: blog_url(&parsed.id),
            image_url: asset.reference,
        },
    )
}

/// Strip surrounding whitespace and one pair of literal double quotes
pub fn clean_quote_text(raw: &str) -> String {
    let text = raw.trim();
    let text = text.strip_prefix('"').unwrap_or(text);
    let text = text.strip_suffix('"').unwrap_or(text);
    text.to_string()
}

/// Quotes: manual entries, then image quotes, then text quotes.
///
/// One seen-set spans all three, so the first claimant of an id keeps it.
pub fn load_quotes(index: &dyn AssetIndex, source: &QuoteSource) -> Vec<QuoteItem> {
    let mut merged = dedupe_manual(&source.manual, "quote");
    let mut seen: HashSet<String> = merged.iter().map(|q| q.id.clone()).collect();
    let manual_count = merged.len();

    let (images, texts): (Vec<_>, Vec<_>) = index
        .find(QUOTES_PATTERN)
        .into_iter()
        .map(|asset| (parse_asset_path(&asset.path), asset))
        .filter(|(parsed, _)| is_image_ext(&parsed.ext) || is_text_ext(&parsed.ext))
        .partition(|(parsed, _)| is_image_ext(&parsed.ext));

    for (parsed, asset) in images {
        if seen.insert(parsed.id.clone()) {
            merged.push(QuoteItem::image(
                parsed.id,
                asset.reference,
                source.default_author.clone(),
            ));
        } else {
            debug!("Quote image {} already claimed", asset.path);
        }
    }

    for (parsed, asset) in texts {
        if seen.insert(parsed.id.clone()) {
            merged.push(QuoteItem::text(
                parsed.id,
                clean_quote_text(&asset.reference),
                source.default_author.clone(),
            ));
        } else {
            debug!("Quote text {} already claimed", asset.path);
        }
    }

    debug!(
        kind = "quote",
        manual = manual_count,
        merged = merged.len(),
        "Merged content list"
    );

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::index::MemoryIndex;

    fn cert(id: &str, title: &str, image_url: &str) -> Certificate {
        Certificate {
            id: id.to_string(),
            title: title.to_string(),
            issuer: "Microsoft".to_string(),
            date: "2024".to_string(),
            category: "Cloud & AI".to_string(),
            image_url: image_url.to_string(),
            link: None,
        }
    }

    #[test]
    fn test_clean_quote_text() {
        assert_eq!(clean_quote_text("\"Hello\""), "Hello");
        assert_eq!(clean_quote_text("Hello"), "Hello");
        assert_eq!(clean_quote_text("  \"Stay hungry\"\n"), "Stay hungry");
        assert_eq!(clean_quote_text("\"Half open"), "Half open");
        assert_eq!(clean_quote_text("\"\"Double\"\""), "\"Double\"");
        assert_eq!(clean_quote_text("\""), "");
        assert_eq!(clean_quote_text(""), "");
    }

    #[test]
    fn test_manual_duplicates_collapse_to_first() {
        let source = CertificateSource {
            manual: vec![cert("c1", "First", "a"), cert("c1", "Second", "b")],
            ..Default::default()
        };

        let certs = load_certificates(&MemoryIndex::new(), &source);
        assert_eq!(certs.len(), 1);
        assert_eq!(certs[0].title, "First");
    }

    #[test]
    fn test_same_id_in_two_categories_is_not_duplicated() {
        let index = MemoryIndex::new()
            .with("certificates/Cloud/azure.jpg", "/cloud/azure.jpg")
            .with("certificates/Data/azure.png", "/data/azure.png");
        let source = CertificateSource {
            default_date: Some("2025".to_string()),
            ..Default::default()
        };

        let certs = load_certificates(&index, &source);
        assert_eq!(certs.len(), 1);
        assert_eq!(certs[0].category, "Cloud");
        assert_eq!(certs[0].image_url, "/data/azure.png");
    }

    #[test]
    fn test_discovered_certificate_without_default_date_uses_current_year() {
        let index = MemoryIndex::new().with("certificates/Cloud/aws.jpg", "/aws.jpg");
        let certs = load_certificates(&index, &CertificateSource::default());

        assert_eq!(certs[0].date, Utc::now().year().to_string());
        assert_eq!(certs[0].issuer, DEFAULT_ISSUER);
    }

    #[test]
    fn test_works_load_runs_every_loader() {
        let index = MemoryIndex::new()
            .with("certificates/Cloud/aws.jpg", "/c.jpg")
            .with("designs/Poster/fest.png", "/d.png")
            .with("blogs/intro.png", "/b.png")
            .with("quotes/q.txt", "Be kind");

        let works = Works::load(&index, &ContentSources::default());
        assert_eq!(works.certificates.len(), 1);
        assert_eq!(works.designs.len(), 1);
        assert_eq!(works.blogs.len(), 1);
        assert_eq!(works.quotes.len(), 1);
    }
}

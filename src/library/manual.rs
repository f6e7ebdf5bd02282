//! Hand-authored content.
//!
//! Manual entries live in a single YAML file (JSON is accepted too, being
//! valid YAML). An entry only needs an `id`; anything else left out stays
//! empty. Dropping a file with the same id into the asset directory
//! supplies its artwork.
//!
//! ```yaml
//! certificates:
//!   - id: azure-ds
//!     title: Azure Data Scientist Associate
//!     issuer: Microsoft
//!     date: "2024"
//!     category: Cloud & AI
//! quotes:
//!   - id: q1
//!     type: text
//!     content: Simplicity is prerequisite for reliability.
//!     author: Edsger Dijkstra
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::ContentError;
use super::loader::{BlogSource, CertificateSource, ContentSources, DesignSource, QuoteSource};
use crate::config::SiteSettings;
use crate::domain::{BlogItem, Certificate, DesignItem, QuoteItem};

/// All manual entries, grouped by content type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManualContent {
    pub certificates: Vec<Certificate>,
    pub designs: Vec<DesignItem>,
    pub blogs: Vec<BlogItem>,
    pub quotes: Vec<QuoteItem>,
}

impl ManualContent {
    /// Load manual content; a missing file means no manual entries
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        if !path.exists() {
            info!("No manual content at {}, using discovered assets only", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let manual = Self::parse(&content).map_err(|e| ContentError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        debug!(
            certificates = manual.certificates.len(),
            designs = manual.designs.len(),
            blogs = manual.blogs.len(),
            quotes = manual.quotes.len(),
            "Loaded manual content from {}",
            path.display()
        );

        Ok(manual)
    }

    /// Parse manual content from a YAML (or JSON) string
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Build loader inputs, taking defaults from the site settings
    pub fn into_sources(self, site: &SiteSettings) -> ContentSources {
        ContentSources {
            certificates: CertificateSource {
                manual: self.certificates,
                default_issuer: site.default_issuer.clone(),
                default_date: None,
            },
            designs: DesignSource {
                manual: self.designs,
            },
            blogs: BlogSource {
                manual: self.blogs,
                base_url: site.blog_base_url.clone(),
            },
            quotes: QuoteSource {
                manual: self.quotes,
                default_author: site.default_quote_author.clone(),
            },
        }
    }
}

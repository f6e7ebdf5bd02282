//! Records shown in the "Works" section of the site.
//!
//! Every record is an immutable value: built once by a loader, then only
//! read by the presentation layer. Field names use camelCase on the wire so
//! manual content can be authored in the same shape the front end consumes.

use serde::{Deserialize, Serialize};

/// Anything with a stable identifier within its content list
pub trait Identified {
    fn id(&self) -> &str;
}

/// Records that can be grouped under a filter category
pub trait Categorized {
    fn category(&self) -> &str;
}

/// A certificate of completion or accreditation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certificate {
    /// Identifier (file name without extension for discovered files)
    pub id: String,

    pub title: String,

    /// Issuing organization
    pub issuer: String,

    /// Free-form date label, usually a year
    pub date: String,

    pub category: String,

    /// Resolved image location
    pub image_url: String,

    /// Optional verification link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A design piece in the gallery
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesignItem {
    pub id: String,
    pub title: String,

    /// Empty for discovered items; the UI hides it
    pub description: String,

    pub image_url: String,
    pub category: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A blog post card linking out to the blog host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogItem {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub read_time: String,

    /// Target article URL (base URL + id when not authored)
    pub url: String,

    /// Cover image location
    pub image_url: String,
}

/// A quote, either literal text or an image of one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "QuoteRecord", into = "QuoteRecord")]
pub struct QuoteItem {
    pub id: String,
    pub kind: QuoteKind,
}

/// The two interpretations of a quote's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteKind {
    /// Literal quote text
    Text { content: String, author: String },

    /// Resolvable reference to an image of the quote
    Image { reference: String, author: String },
}

impl QuoteItem {
    pub fn text(id: impl Into<String>, content: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: QuoteKind::Text {
                content: content.into(),
                author: author.into(),
            },
        }
    }

    pub fn image(
        id: impl Into<String>,
        reference: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: QuoteKind::Image {
                reference: reference.into(),
                author: author.into(),
            },
        }
    }

    /// Quote text or image reference, depending on the kind
    pub fn content(&self) -> &str {
        match &self.kind {
            QuoteKind::Text { content, .. } => content,
            QuoteKind::Image { reference, .. } => reference,
        }
    }

    pub fn author(&self) -> &str {
        match &self.kind {
            QuoteKind::Text { author, .. } | QuoteKind::Image { author, .. } => author,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self.kind, QuoteKind::Image { .. })
    }
}

/// Wire tag for a quote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum QuoteType {
    #[default]
    Text,
    Image,
}

/// Flat wire shape: `{ id, type, content, author }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct QuoteRecord {
    id: String,
    #[serde(rename = "type")]
    kind: QuoteType,
    content: String,
    author: String,
}

impl From<QuoteRecord> for QuoteItem {
    fn from(record: QuoteRecord) -> Self {
        match record.kind {
            QuoteType::Text => QuoteItem::text(record.id, record.content, record.author),
            QuoteType::Image => QuoteItem::image(record.id, record.content, record.author),
        }
    }
}

impl From<QuoteItem> for QuoteRecord {
    fn from(item: QuoteItem) -> Self {
        let (kind, content, author) = match item.kind {
            QuoteKind::Text { content, author } => (QuoteType::Text, content, author),
            QuoteKind::Image { reference, author } => (QuoteType::Image, reference, author),
        };
        QuoteRecord {
            id: item.id,
            kind,
            content,
            author,
        }
    }
}

impl Identified for Certificate {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for DesignItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for BlogItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for QuoteItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Categorized for Certificate {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Categorized for DesignItem {
    fn category(&self) -> &str {
        &self.category
    }
}

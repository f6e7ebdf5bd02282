//! Content library for the Works section.
//!
//! Merges hand-authored records with assets discovered on disk into one
//! de-duplicated list per content type.
//!
//! # Asset Layout
//!
//! ```text
//! assets/
//! ├── certificates/
//! │   └── <Category>/<id>.<ext>   # image; category from the folder name
//! ├── designs/
//! │   └── <Category>/<id>.<ext>
//! ├── blogs/
//! │   └── <id>.<ext>              # cover image; URL = blog base + id
//! └── quotes/
//!     ├── <id>.png|jpg|jpeg|webp|gif
//!     └── <id>.txt                # quote text, surrounding quotes stripped
//! ```

pub mod categories;
pub mod error;
pub mod index;
pub mod loader;
pub mod manual;
pub mod path;

pub use categories::{categories, filter_by_category, ALL_CATEGORIES};
pub use error::ContentError;
pub use index::{AssetIndex, FsIndex, IndexedAsset, MemoryIndex};
pub use loader::{
    clean_quote_text, load_blogs, load_certificates, load_designs, load_quotes, BlogSource,
    CertificateSource, ContentSources, DesignSource, QuoteSource, Works,
};
pub use manual::ManualContent;
pub use path::{category_from_path, format_title, parse_asset_path, AssetPath};

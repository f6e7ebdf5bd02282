//! portfolio - content engine for a personal portfolio site
//!
//! Builds the "Works" section of the site (certificates, designs, blog
//! posts, quotes) by merging hand-authored records with asset files found
//! on disk, and fetches the public repository list from GitHub.
//!
//! # Architecture
//!
//! The merge is a pure, synchronous computation over two inputs:
//! - Manual content: records authored in a YAML file, keyed by id
//! - An asset index: every discovered file with its resolved reference
//!
//! Loaders take both explicitly, so they can run against an in-memory
//! index in tests and a real directory in production.
//!
//! # Modules
//!
//! - `adapters`: External system integrations (GitHub)
//! - `config`: Config file discovery and defaults
//! - `domain`: Data structures (Certificate, DesignItem, BlogItem, QuoteItem, GitHubRepo)
//! - `library`: Asset discovery, path parsing, the loaders and category filters
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Merged certificates in one category
//! portfolio certificates --category Cloud
//!
//! # Everything, as JSON for the front end
//! portfolio works > works.json
//!
//! # Public repositories (falls back to an empty list on failure)
//! PORTFOLIO_GITHUB_USER=someone portfolio repos --language Rust
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod library;

// Re-export main types at crate root for convenience
pub use adapters::GitHubClient;
pub use domain::{BlogItem, Certificate, DesignItem, GitHubRepo, QuoteItem, QuoteKind};
pub use library::{AssetIndex, ContentSources, FsIndex, ManualContent, MemoryIndex, Works};

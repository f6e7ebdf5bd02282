//! Domain types for the portfolio.
//!
//! This module contains the core data structures:
//! - Works: certificates, designs, blog posts and quotes
//! - Repo: public repositories fetched from GitHub

pub mod repo;
pub mod works;

// Re-export commonly used types
pub use repo::{filter_by_language, languages, GitHubRepo, ALL_LANGUAGES};
pub use works::{
    BlogItem, Categorized, Certificate, DesignItem, Identified, QuoteItem, QuoteKind,
};

//! Adapters for external systems.
//!
//! The only remote dependency is the GitHub REST API, used for the
//! repository list on the portfolio page.

pub mod github;

pub use github::GitHubClient;

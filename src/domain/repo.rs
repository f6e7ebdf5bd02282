//! Public code repositories listed on the portfolio page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Filter value that matches every repository
pub const ALL_LANGUAGES: &str = "All";

/// A repository as returned by the GitHub REST API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,

    /// Primary language, if GitHub detected one
    pub language: Option<String>,

    #[serde(default)]
    pub stargazers_count: u64,

    pub updated_at: DateTime<Utc>,

    #[serde(default)]
    pub topics: Vec<String>,
}

/// "All" followed by each distinct language, in first-seen order
pub fn languages(repos: &[GitHubRepo]) -> Vec<String> {
    let mut langs = vec![ALL_LANGUAGES.to_string()];
    for lang in repos.iter().filter_map(|r| r.language.as_deref()) {
        if !langs.iter().any(|l| l == lang) {
            langs.push(lang.to_string());
        }
    }
    langs
}

/// Repositories written in `language` ("All" keeps everything)
pub fn filter_by_language<'a>(repos: &'a [GitHubRepo], language: &str) -> Vec<&'a GitHubRepo> {
    repos
        .iter()
        .filter(|r| language == ALL_LANGUAGES || r.language.as_deref() == Some(language))
        .collect()
}

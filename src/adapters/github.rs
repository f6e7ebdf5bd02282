//! GitHub REST adapter for the repository list on the portfolio page.
//!
//! Endpoint: GET /users/{username}/repos?sort=updated&per_page=100
//! Auth: none (public, rate limited)

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::GitHubSettings;
use crate::domain::GitHubRepo;

/// GitHub rejects requests without a User-Agent
const USER_AGENT: &str = concat!("portfolio/", env!("CARGO_PKG_VERSION"));

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Client for listing a user's public repositories
pub struct GitHubClient {
    api_base: String,
    username: String,
    client: reqwest::Client,
}

impl GitHubClient {
    /// Create a new client
    pub fn new(api_base: impl Into<String>, username: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            api_base: api_base.into(),
            username: username.into(),
            client,
        })
    }

    /// Create from config; fails when no username is configured
    pub fn from_settings(settings: &GitHubSettings) -> Result<Self> {
        let username = settings
            .username
            .clone()
            .context("GitHub username not configured (set github.username or PORTFOLIO_GITHUB_USER)")?;
        Self::new(settings.api_base.clone(), username)
    }

    /// Build the repository list URL
    fn repos_url(&self) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&per_page=100",
            self.api_base.trim_end_matches('/'),
            self.username
        )
    }

    /// Fetch repositories, surfacing every failure
    pub async fn try_fetch_repos(&self) -> Result<Vec<GitHubRepo>> {
        let url = self.repos_url();

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("GitHub API error ({}): {}", status, text);
        }

        response
            .json()
            .await
            .context("Failed to parse GitHub repository list")
    }

    /// Fetch repositories; any failure is logged and yields an empty list
    pub async fn fetch_repos(&self) -> Vec<GitHubRepo> {
        match self.try_fetch_repos().await {
            Ok(repos) => {
                info!("Fetched {} repositories for {}", repos.len(), self.username);
                repos
            }
            Err(e) => {
                warn!("Error fetching repos: {:#}", e);
                Vec::new()
            }
        }
    }
}

//! Configuration for the portfolio content engine.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (PORTFOLIO_ASSETS, PORTFOLIO_CONTENT,
//!    PORTFOLIO_GITHUB_USER)
//! 2. Config file (.portfolio/config.yaml)
//! 3. Defaults (./assets, ./content.yaml)
//!
//! Config file discovery:
//! - Searches current directory and parents for .portfolio/config.yaml
//! - Paths in config file are relative to the directory holding .portfolio/

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::library::loader::DEFAULT_ISSUER;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const DEFAULT_CONTENT_FILE: &str = "content.yaml";
pub const DEFAULT_ASSET_URL_PREFIX: &str = "/assets";
pub const DEFAULT_BLOG_BASE_URL: &str = "https://medium.com/@";
pub const DEFAULT_GITHUB_API: &str = "https://api.github.com";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub site: Option<SiteConfig>,
    #[serde(default)]
    pub github: Option<GitHubConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// Asset root directory (relative to project root)
    pub assets: Option<String>,
    /// Manual content file (relative to project root)
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub asset_url_prefix: Option<String>,
    pub default_quote_author: Option<String>,
    pub default_issuer: Option<String>,
    pub blog_base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubConfig {
    pub username: Option<String>,
    pub api_base: Option<String>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Asset root scanned for certificates, designs, blogs and quotes
    pub assets: PathBuf,
    /// Manual content file
    pub content: PathBuf,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    pub site: SiteSettings,
    pub github: GitHubSettings,
}

/// Site-wide defaults fed into the loaders
#[derive(Debug, Clone)]
pub struct SiteSettings {
    /// URL prefix under which the asset root is served
    pub asset_url_prefix: String,
    pub default_quote_author: String,
    pub default_issuer: String,
    /// Blog links for discovered posts are this + id
    pub blog_base_url: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            asset_url_prefix: DEFAULT_ASSET_URL_PREFIX.to_string(),
            default_quote_author: String::new(),
            default_issuer: DEFAULT_ISSUER.to_string(),
            blog_base_url: DEFAULT_BLOG_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GitHubSettings {
    pub username: Option<String>,
    pub api_base: String,
}

impl Default for GitHubSettings {
    fn default() -> Self {
        Self {
            username: None,
            api_base: DEFAULT_GITHUB_API.to_string(),
        }
    }
}

impl SiteSettings {
    fn from_file(site: Option<SiteConfig>) -> Self {
        let defaults = Self::default();
        let Some(site) = site else {
            return defaults;
        };

        Self {
            asset_url_prefix: site.asset_url_prefix.unwrap_or(defaults.asset_url_prefix),
            default_quote_author: site
                .default_quote_author
                .unwrap_or(defaults.default_quote_author),
            default_issuer: site.default_issuer.unwrap_or(defaults.default_issuer),
            blog_base_url: site.blog_base_url.unwrap_or(defaults.blog_base_url),
        }
    }
}

impl GitHubSettings {
    fn from_file(github: Option<GitHubConfig>) -> Self {
        let defaults = Self::default();
        let Some(github) = github else {
            return defaults;
        };

        Self {
            username: github.username,
            api_base: github.api_base.unwrap_or(defaults.api_base),
        }
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".portfolio").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Resolve everything from an optional config file and the defaults
fn resolve(config_path: Option<&Path>, config: Option<ConfigFile>) -> ResolvedConfig {
    // Project root is the parent of .portfolio/
    let base_dir = config_path
        .and_then(|p| p.parent())
        .and_then(|p| p.parent())
        .unwrap_or(Path::new("."))
        .to_path_buf();

    let (paths, site, github) = match config {
        Some(config) => (config.paths, config.site, config.github),
        None => (PathsConfig::default(), None, None),
    };

    ResolvedConfig {
        assets: resolve_path(&base_dir, paths.assets.as_deref().unwrap_or(DEFAULT_ASSETS_DIR)),
        content: resolve_path(
            &base_dir,
            paths.content.as_deref().unwrap_or(DEFAULT_CONTENT_FILE),
        ),
        config_file: config_path.map(Path::to_path_buf),
        site: SiteSettings::from_file(site),
        github: GitHubSettings::from_file(github),
    }
}

/// Environment overrides, applied on top of the file and defaults
fn apply_env_overrides(
    mut config: ResolvedConfig,
    var: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    if let Some(assets) = var("PORTFOLIO_ASSETS") {
        config.assets = PathBuf::from(assets);
    }
    if let Some(content) = var("PORTFOLIO_CONTENT") {
        config.content = PathBuf::from(content);
    }
    if let Some(user) = var("PORTFOLIO_GITHUB_USER") {
        config.github.username = Some(user);
    }
    config
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let resolved = match find_config_file() {
        Some(config_path) => {
            let config = load_config_file(&config_path)?;
            resolve(Some(&config_path), Some(config))
        }
        None => resolve(None, None),
    };

    Ok(apply_env_overrides(resolved, |key| std::env::var(key).ok()))
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

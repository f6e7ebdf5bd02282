//! Command-line interface for the portfolio content engine.
//!
//! Loads manual content and the asset directory, runs the merge, and prints
//! the result as a listing or as JSON ready for the front end.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::adapters::GitHubClient;
use crate::config::{self, ResolvedConfig};
use crate::domain::{filter_by_language, languages, ALL_LANGUAGES};
use crate::library::{
    categories, filter_by_category, load_blogs, load_certificates, load_designs, load_quotes,
    ContentSources, FsIndex, ManualContent, Works, ALL_CATEGORIES,
};

/// portfolio - content engine for a personal portfolio site
#[derive(Parser, Debug)]
#[command(name = "portfolio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List certificates
    Certificates {
        /// Only show this category
        #[arg(short, long, default_value = ALL_CATEGORIES)]
        category: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List design pieces
    Designs {
        /// Only show this category
        #[arg(short, long, default_value = ALL_CATEGORIES)]
        category: String,

        #[arg(long)]
        json: bool,
    },

    /// List blog posts
    Blogs {
        #[arg(long)]
        json: bool,
    },

    /// List quotes
    Quotes {
        #[arg(long)]
        json: bool,
    },

    /// Show filter categories for a gallery
    Categories {
        #[arg(value_enum)]
        gallery: Gallery,
    },

    /// Print all merged Works content as one JSON document
    Works,

    /// List public GitHub repositories
    Repos {
        /// Only show repositories in this language
        #[arg(short, long, default_value = ALL_LANGUAGES)]
        language: String,

        #[arg(long)]
        json: bool,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Galleries that carry categories
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Gallery {
    Certificates,
    Designs,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Certificates { category, json } => list_certificates(&category, json),
            Commands::Designs { category, json } => list_designs(&category, json),
            Commands::Blogs { json } => list_blogs(json),
            Commands::Quotes { json } => list_quotes(json),
            Commands::Categories { gallery } => show_categories(gallery),
            Commands::Works => print_works(),
            Commands::Repos { language, json } => list_repos(&language, json).await,
            Commands::Config => show_config(),
        }
    }
}

/// Resolved config, asset index and loader inputs
fn prepare() -> Result<(FsIndex, ContentSources)> {
    prepare_from(config::config()?)
}

fn prepare_from(cfg: &ResolvedConfig) -> Result<(FsIndex, ContentSources)> {
    let manual = ManualContent::load(&cfg.content)
        .with_context(|| format!("Failed to load manual content: {}", cfg.content.display()))?;

    let index = FsIndex::new(&cfg.assets, cfg.site.asset_url_prefix.clone());
    Ok((index, manual.into_sources(&cfg.site)))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

fn list_certificates(category: &str, json: bool) -> Result<()> {
    let (index, sources) = prepare()?;
    let certs = load_certificates(&index, &sources.certificates);
    let shown = filter_by_category(&certs, category);

    if json {
        return print_json(&shown);
    }
    if shown.is_empty() {
        println!("No certificates found");
        return Ok(());
    }

    println!("{:<24} {:<36} {:<20} {:<8}", "ID", "TITLE", "CATEGORY", "DATE");
    println!("{}", "-".repeat(90));
    for cert in shown {
        println!(
            "{:<24} {:<36} {:<20} {:<8}",
            truncate(&cert.id, 24),
            truncate(&cert.title, 36),
            truncate(&cert.category, 20),
            cert.date
        );
    }

    Ok(())
}

fn list_designs(category: &str, json: bool) -> Result<()> {
    let (index, sources) = prepare()?;
    let designs = load_designs(&index, &sources.designs);
    let shown = filter_by_category(&designs, category);

    if json {
        return print_json(&shown);
    }
    if shown.is_empty() {
        println!("No designs found");
        return Ok(());
    }

    println!("{:<24} {:<36} {:<20}", "ID", "TITLE", "CATEGORY");
    println!("{}", "-".repeat(82));
    for design in shown {
        println!(
            "{:<24} {:<36} {:<20}",
            truncate(&design.id, 24),
            truncate(&design.title, 36),
            truncate(&design.category, 20)
        );
    }

    Ok(())
}

fn list_blogs(json: bool) -> Result<()> {
    let (index, sources) = prepare()?;
    let blogs = load_blogs(&index, &sources.blogs);

    if json {
        return print_json(&blogs);
    }
    if blogs.is_empty() {
        println!("No blog posts found");
        return Ok(());
    }

    for blog in &blogs {
        println!("{}", blog.title);
        if !blog.subtitle.is_empty() {
            println!("  {}", blog.subtitle);
        }
        println!("  {}", blog.url);
    }

    Ok(())
}

fn list_quotes(json: bool) -> Result<()> {
    let (index, sources) = prepare()?;
    let quotes = load_quotes(&index, &sources.quotes);

    if json {
        return print_json(&quotes);
    }
    if quotes.is_empty() {
        println!("No quotes found");
        return Ok(());
    }

    for quote in &quotes {
        if quote.is_image() {
            println!("[image] {} ({})", quote.content(), quote.id);
        } else {
            println!("\"{}\"", quote.content());
        }
        if !quote.author().is_empty() {
            println!("  - {}", quote.author());
        }
    }

    Ok(())
}

fn show_categories(gallery: Gallery) -> Result<()> {
    let (index, sources) = prepare()?;

    let cats = match gallery {
        Gallery::Certificates => categories(&load_certificates(&index, &sources.certificates)),
        Gallery::Designs => categories(&load_designs(&index, &sources.designs)),
    };

    for cat in cats {
        println!("{}", cat);
    }

    Ok(())
}

fn print_works() -> Result<()> {
    let (index, sources) = prepare()?;
    print_json(&Works::load(&index, &sources))
}

async fn list_repos(language: &str, json: bool) -> Result<()> {
    let cfg = config::config()?;
    let client = GitHubClient::from_settings(&cfg.github)?;
    let repos = client.fetch_repos().await;
    let shown = filter_by_language(&repos, language);

    if json {
        return print_json(&shown);
    }
    if shown.is_empty() {
        println!("No repositories found");
        return Ok(());
    }

    println!("Languages: {}", languages(&repos).join(", "));
    println!();
    println!("{:<32} {:<14} {:>6}  {}", "NAME", "LANGUAGE", "STARS", "UPDATED");
    println!("{}", "-".repeat(72));
    for repo in shown {
        println!(
            "{:<32} {:<14} {:>6}  {}",
            truncate(&repo.name, 32),
            repo.language.as_deref().unwrap_or("-"),
            repo.stargazers_count,
            repo.updated_at.format("%Y-%m-%d")
        );
    }

    Ok(())
}

fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!("Portfolio Configuration");
    println!("{}", "=".repeat(40));
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Paths:");
    println!("  Assets:          {}", cfg.assets.display());
    println!("  Manual content:  {}", cfg.content.display());
    println!();
    println!("Site:");
    println!("  Asset URL prefix:     {}", cfg.site.asset_url_prefix);
    println!("  Default quote author: {}", cfg.site.default_quote_author);
    println!("  Default issuer:       {}", cfg.site.default_issuer);
    println!("  Blog base URL:        {}", cfg.site.blog_base_url);
    println!();
    println!("GitHub:");
    println!(
        "  Username: {}",
        cfg.github.username.as_deref().unwrap_or("(not set)")
    );
    println!("  API base: {}", cfg.github.api_base);

    Ok(())
}

/// Truncate to `max` characters for table output
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

//! folio: content engine for a personal portfolio and blog
//!
//! Blog posts are plain-text files with `#section` front-matter. This crate
//! parses them into [`content::Post`] records, loads the whole collection
//! newest first, and serves it (together with the résumé document) to the
//! CLI and a small JSON API.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod portfolio;
pub mod server;

use anyhow::Result;
use std::path::Path;

use content::{DirectorySource, Post, PostLoader};

/// The main site handle
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Directory holding post documents
    pub blog_dir: std::path::PathBuf,
    /// Résumé document path
    pub portfolio_path: std::path::PathBuf,
}

impl Folio {
    /// Create a new site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site instance with an explicit configuration
    pub fn with_config(base_dir: std::path::PathBuf, config: config::SiteConfig) -> Self {
        let blog_dir = base_dir.join(&config.blog_dir);
        let portfolio_path = base_dir.join(&config.portfolio_file);

        Self {
            config,
            base_dir,
            blog_dir,
            portfolio_path,
        }
    }

    /// Loader over the blog directory
    pub fn loader(&self) -> PostLoader {
        PostLoader::new(DirectorySource::new(
            &self.blog_dir,
            &self.config.post_extension,
        ))
    }

    /// Load all posts, newest first
    pub async fn load_posts(&self) -> Vec<Post> {
        self.loader().load_all().await
    }

    /// Load the résumé document
    pub fn load_portfolio(&self) -> Result<portfolio::Portfolio, portfolio::PortfolioError> {
        portfolio::Portfolio::load(&self.portfolio_path)
    }
}

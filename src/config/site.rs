//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site, exposed through /api/site
    pub title: String,
    pub description: String,
    pub author: String,
    pub url: String,

    // Content
    /// Directory holding post documents, relative to the site root
    pub blog_dir: String,
    /// Extension of post documents.
    ///
    /// Slugs only drop a trailing `.md`, so with any other extension the
    /// extension stays part of the slug (`hello.markdown` routes as
    /// `hello.markdown`).
    pub post_extension: String,
    /// Résumé document, relative to the site root
    pub portfolio_file: String,

    // Server
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            description: String::new(),
            author: String::new(),
            url: "http://localhost:4000".to_string(),

            blog_dir: "blog".to_string(),
            post_extension: "md".to_string(),
            portfolio_file: "portfolio.json".to_string(),

            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }
}

/// HTTP API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
        }
    }
}

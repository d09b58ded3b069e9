//! Document sources - where post documents come from
//!
//! The loader only sees a list of document paths and a way to read each one,
//! so posts can come from a directory scan or from an embedded manifest.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::SourceError;

/// A collection of text documents addressed by path
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// All document paths, in a stable enumeration order
    async fn entries(&self) -> Vec<String>;

    /// Read one document as raw text
    async fn read(&self, path: &str) -> Result<String, SourceError>;
}

/// Documents stored as files directly inside one directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
    extension: String,
}

impl DirectorySource {
    /// Create a source over `dir`, keeping files with the given extension
    pub fn new<P: AsRef<Path>>(dir: P, extension: &str) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    fn scan(dir: &Path, extension: &str) -> Vec<String> {
        if !dir.exists() {
            return Vec::new();
        }

        WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file() && has_extension(e.path(), extension))
            .map(|e| e.path().to_string_lossy().to_string())
            .collect()
    }
}

#[async_trait]
impl DocumentSource for DirectorySource {
    async fn entries(&self) -> Vec<String> {
        let dir = self.dir.clone();
        let extension = self.extension.clone();

        match tokio::task::spawn_blocking(move || Self::scan(&dir, &extension)).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!("Failed to scan {:?}: {}", self.dir, e);
                Vec::new()
            }
        }
    }

    async fn read(&self, path: &str) -> Result<String, SourceError> {
        let path = PathBuf::from(path);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| SourceError::Io {
                path: path.clone(),
                source,
            })?;

        String::from_utf8(bytes).map_err(|source| SourceError::Decode { path, source })
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == extension)
        .unwrap_or(false)
}

/// An embedded manifest of documents
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: Vec<(String, Result<String, String>)>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document with its raw text
    pub fn with_document(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.documents.push((path.into(), Ok(text.into())));
        self
    }

    /// Add a document whose read always fails with `reason`
    pub fn with_failure(mut self, path: impl Into<String>, reason: impl Into<String>) -> Self {
        self.documents.push((path.into(), Err(reason.into())));
        self
    }
}

#[async_trait]
impl DocumentSource for MemorySource {
    async fn entries(&self) -> Vec<String> {
        self.documents.iter().map(|(path, _)| path.clone()).collect()
    }

    async fn read(&self, path: &str) -> Result<String, SourceError> {
        let (_, document) = self
            .documents
            .iter()
            .find(|(p, _)| p == path)
            .ok_or_else(|| SourceError::NotFound(path.to_string()))?;

        document.clone().map_err(|reason| SourceError::Unavailable {
            path: path.to_string(),
            reason,
        })
    }
}

//! Content loader - loads the blog collection from a document source

use futures::future::join_all;
use std::path::Path;
use std::sync::Arc;

use super::{frontmatter, sort_newest_first, DocumentSource, Post};

/// Loads posts from a [`DocumentSource`]
///
/// Nothing is cached; every load enumerates and parses the source again.
#[derive(Clone)]
pub struct PostLoader {
    source: Arc<dyn DocumentSource>,
}

impl PostLoader {
    /// Create a new loader over a document source
    pub fn new<S: DocumentSource + 'static>(source: S) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Load all posts, newest first
    pub async fn load_all(&self) -> Vec<Post> {
        let mut posts = self.load_unsorted().await;
        sort_newest_first(&mut posts);
        posts
    }

    /// Load all posts in enumeration order.
    ///
    /// Documents are read concurrently. A document that fails to read is
    /// logged and left out; it never fails the whole load.
    pub async fn load_unsorted(&self) -> Vec<Post> {
        let paths = self.source.entries().await;
        let reads = paths.iter().map(|path| async move {
            let result = self.source.read(path).await;
            (path, result)
        });

        let mut posts = Vec::with_capacity(paths.len());
        for (path, result) in join_all(reads).await {
            match result {
                Ok(raw) => posts.push(frontmatter::parse(&raw, filename_of(path))),
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {}", path, e);
                }
            }
        }

        tracing::debug!("Loaded {} of {} posts", posts.len(), paths.len());
        posts
    }
}

/// Final path segment of a document path
fn filename_of(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
}

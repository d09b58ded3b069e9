//! Content module - parses post documents and loads the blog collection

mod error;
mod frontmatter;
pub mod loader;
mod post;
pub mod source;

pub use error::SourceError;
pub use frontmatter::{parse, FrontMatter, Section};
pub use loader::PostLoader;
pub(crate) use post::parse_post_date;
pub use post::{
    featured, find_by_slug, regular, sort_newest_first, tag_counts, Post, READ_WORDS_PER_MINUTE,
};
pub use source::{DirectorySource, DocumentSource, MemorySource};

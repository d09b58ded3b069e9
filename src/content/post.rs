//! Post model and collection queries

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::FrontMatter;

/// Reading rate used for the read time estimate
pub const READ_WORDS_PER_MINUTE: usize = 200;

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Numeric id derived from the filename
    pub id: u64,

    /// Post title
    pub title: String,

    /// Short summary shown in list views
    pub description: String,

    /// Publication date as written in the document (ISO-8601)
    pub date: String,

    /// Estimated reading time, e.g. "4 min read"
    pub read_time: String,

    /// Post tags
    pub tags: Vec<String>,

    /// Whether the post is promoted on the home page
    pub featured: bool,

    /// Slug (routing key), the filename without `.md`
    pub slug: String,

    /// Raw markdown body
    pub content: String,
}

impl Post {
    /// Build a post from parsed front-matter, its body and the source filename
    pub fn new(fm: FrontMatter, content: String, filename: &str) -> Self {
        Self {
            id: filename_id(filename),
            title: fm.title,
            description: fm.description,
            date: fm.date,
            read_time: read_time(&content),
            tags: fm.tags,
            featured: fm.featured,
            slug: slug_from_filename(filename),
            content,
        }
    }

    /// Publication timestamp used for ordering, if the date parses
    pub fn published_at(&self) -> Option<NaiveDateTime> {
        parse_post_date(&self.date)
    }

    /// Get the previous (newer) post in a list
    pub fn prev<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        if pos > 0 {
            Some(&posts[pos - 1])
        } else {
            None
        }
    }

    /// Get the next (older) post in a list
    pub fn next<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        posts.get(pos + 1)
    }
}

/// Sum of the UTF-16 code units of the filename
fn filename_id(filename: &str) -> u64 {
    filename.encode_utf16().map(u64::from).sum()
}

fn slug_from_filename(filename: &str) -> String {
    filename.strip_suffix(".md").unwrap_or(filename).to_string()
}

/// Estimate read time at [`READ_WORDS_PER_MINUTE`], rounded up, at least one minute
fn read_time(content: &str) -> String {
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(READ_WORDS_PER_MINUTE).max(1);
    format!("{} min read", minutes)
}

/// Parse a post date: a plain ISO date or a full date-time
pub(crate) fn parse_post_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Sort posts newest first.
///
/// The sort is stable, so posts sharing a date keep their relative order.
/// Posts whose date does not parse go last.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by_key(|p| std::cmp::Reverse(p.published_at()));
}

/// Posts flagged as featured, in collection order
pub fn featured(posts: &[Post]) -> Vec<&Post> {
    posts.iter().filter(|p| p.featured).collect()
}

/// Posts not flagged as featured, in collection order
pub fn regular(posts: &[Post]) -> Vec<&Post> {
    posts.iter().filter(|p| !p.featured).collect()
}

/// Look up a post by its slug
pub fn find_by_slug<'a>(posts: &'a [Post], slug: &str) -> Option<&'a Post> {
    posts.iter().find(|p| p.slug == slug)
}

/// Count posts per tag, most used first, ties by name
pub fn tag_counts(posts: &[Post]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for post in posts {
        for tag in &post.tags {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut counts: Vec<_> = counts
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

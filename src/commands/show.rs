//! Show a single post

use anyhow::Result;
use std::fmt::Write;

use crate::content::{self, Post};
use crate::helpers::format_long_date;
use crate::Folio;

/// Print one post by slug
pub async fn run(folio: &Folio, slug: &str) -> Result<()> {
    let posts = folio.load_posts().await;

    match content::find_by_slug(&posts, slug) {
        Some(post) => print!("{}", render(post)?),
        None => println!("Blog post not found: {}", slug),
    }

    Ok(())
}

/// Render a post header followed by its markdown body
pub fn render(post: &Post) -> Result<String> {
    let mut out = String::new();

    if post.featured {
        writeln!(out, "[Featured]")?;
    }
    writeln!(out, "{}", post.title)?;
    if !post.description.is_empty() {
        writeln!(out, "{}", post.description)?;
    }
    writeln!(
        out,
        "{} · {}",
        format_long_date(&post.date),
        post.read_time
    )?;
    if !post.tags.is_empty() {
        writeln!(out, "Tags: {}", post.tags.join(", "))?;
    }
    writeln!(out)?;
    out.push_str(&post.content);
    if !post.content.ends_with('\n') {
        out.push('\n');
    }

    Ok(out)
}

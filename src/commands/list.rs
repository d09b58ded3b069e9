//! List site content

use anyhow::Result;
use std::fmt::Write;

use crate::content::{self, Post};
use crate::Folio;

/// List site content by type
pub async fn run(folio: &Folio, content_type: &str) -> Result<()> {
    let posts = folio.load_posts().await;
    print!("{}", render(&posts, content_type)?);
    Ok(())
}

/// Render a listing of the loaded posts
pub fn render(posts: &[Post], content_type: &str) -> Result<String> {
    let mut out = String::new();

    match content_type {
        "post" | "posts" => {
            writeln!(out, "Posts ({}):", posts.len())?;
            for post in content::featured(posts) {
                write_post_line(&mut out, post, true)?;
            }
            for post in content::regular(posts) {
                write_post_line(&mut out, post, false)?;
            }
        }
        "featured" => {
            let featured = content::featured(posts);
            writeln!(out, "Featured ({}):", featured.len())?;
            for post in featured {
                write_post_line(&mut out, post, true)?;
            }
        }
        "tag" | "tags" => {
            let tags = content::tag_counts(posts);
            writeln!(out, "Tags ({}):", tags.len())?;
            for (tag, count) in tags {
                writeln!(out, "  {} ({})", tag, count)?;
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, featured, tag",
                content_type
            );
        }
    }

    Ok(out)
}

fn write_post_line(out: &mut String, post: &Post, featured: bool) -> std::fmt::Result {
    writeln!(
        out,
        "  {} - {} [{}] {}{}",
        post.date,
        post.title,
        post.slug,
        post.read_time,
        if featured { " *featured*" } else { "" }
    )
}

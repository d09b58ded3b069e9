//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::Section;
use crate::Folio;

/// Marker that ends the header of a post document
const BODY_MARKER: &str = "#body";

/// Options for a new post
#[derive(Debug, Clone, Default)]
pub struct NewPost<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub tags: &'a [String],
    pub featured: bool,
}

/// Create a new post document in the blog directory
pub fn create_post(folio: &Folio, post: &NewPost) -> Result<PathBuf> {
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();

    check_value_line("title", post.title)?;
    check_value_line("description", post.description)?;

    fs::create_dir_all(&folio.blog_dir)?;

    let slug = slug::slugify(post.title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from title: {:?}", post.title);
    }

    let file_path = folio
        .blog_dir
        .join(format!("{}.{}", slug, folio.config.post_extension));

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    fs::write(&file_path, scaffold(post, &date)?)?;
    tracing::debug!("Created post {:?}", file_path);

    Ok(file_path)
}

/// A header value must stay one line that the parser cannot read as a marker
fn check_value_line(field: &str, value: &str) -> Result<()> {
    let line = value.trim();
    if value.contains('\n') || value.contains('\r') {
        anyhow::bail!("The {} must be a single line: {:?}", field, value);
    }
    if Section::from_marker(line).is_some() || line.starts_with(BODY_MARKER) {
        anyhow::bail!("The {} cannot start with a section marker: {:?}", field, value);
    }
    Ok(())
}

/// Front-matter scaffold for a new post
fn scaffold(post: &NewPost, date: &str) -> Result<String> {
    Ok(format!(
        "#title\n{}\n#description\n{}\n#date\n{}\n#tags\n{}\n#featured\n{}\n#body\n",
        post.title,
        post.description,
        date,
        serde_json::to_string(post.tags)?,
        post.featured
    ))
}

/// Run the new command
pub fn run(folio: &Folio, post: &NewPost) -> Result<()> {
    let path = create_post(folio, post)?;
    println!("Created: {:?}", path);
    Ok(())
}

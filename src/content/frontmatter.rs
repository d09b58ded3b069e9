//! Front-matter parsing
//!
//! Post documents carry their metadata as `#section` markers, each followed by
//! the value on its own line, and end the header with a `#body` marker:
//!
//! ```text
//! #title
//! Hello World
//! #tags
//! ["rust", "blog"]
//! #body
//! Markdown content...
//! ```
//!
//! Parsing never fails. Missing or malformed sections fall back to defaults.

use serde::Serialize;

use super::Post;

/// Marker that ends the header; everything after its line is the body
const BODY_MARKER: &str = "#body";

/// A single-valued or list-valued header section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Title,
    Description,
    Date,
    Tags,
    Featured,
}

impl Section {
    /// Header markers, matched by prefix against the trimmed line
    const MARKERS: [(&'static str, Section); 5] = [
        ("#title", Section::Title),
        ("#description", Section::Description),
        ("#date", Section::Date),
        ("#tags", Section::Tags),
        ("#featured", Section::Featured),
    ];

    /// Find the section a marker line opens.
    ///
    /// Matching is by prefix, so `#titles` opens [`Section::Title`] as well.
    pub fn from_marker(line: &str) -> Option<Self> {
        Self::MARKERS
            .iter()
            .find(|(marker, _)| line.starts_with(marker))
            .map(|(_, section)| *section)
    }
}

/// Header fields of a post document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrontMatter {
    pub title: String,
    pub description: String,
    pub date: String,
    pub tags: Vec<String>,
    pub featured: bool,
}

impl FrontMatter {
    /// Parse the header of a document.
    /// Returns (front_matter, body); the body is empty when there is no `#body` marker.
    pub fn parse(content: &str) -> (Self, &str) {
        let mut fm = FrontMatter::default();
        let mut current: Option<Section> = None;
        let mut offset = 0;

        for raw_line in content.split_inclusive('\n') {
            offset += raw_line.len();
            let line = raw_line.trim();

            if line.starts_with(BODY_MARKER) {
                return (fm, &content[offset..]);
            }

            if let Some(section) = Section::from_marker(line) {
                current = Some(section);
                continue;
            }

            if line.is_empty() {
                continue;
            }

            if let Some(section) = current {
                fm.assign(section, line);
            }
        }

        (fm, "")
    }

    /// Store a value line under its section; later lines overwrite earlier ones
    fn assign(&mut self, section: Section, line: &str) {
        match section {
            Section::Title => self.title = line.to_string(),
            Section::Description => self.description = line.to_string(),
            Section::Date => self.date = line.to_string(),
            Section::Tags => self.tags = parse_tags(line),
            Section::Featured => self.featured = line.to_lowercase() == "true",
        }
    }
}

/// Parse a tag line, either a JSON array of strings or a comma-separated list
fn parse_tags(line: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(line) {
        Ok(tags) => tags,
        Err(_) => line
            .split(',')
            .map(|tag| tag.trim().replace('"', ""))
            .collect(),
    }
}

/// Parse a raw post document into a [`Post`]
pub fn parse(raw: &str, filename: &str) -> Post {
    let (fm, body) = FrontMatter::parse(raw);
    Post::new(fm, body.to_string(), filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_document() {
        let content = r#"#title
Building a Blog in Rust
#description
Notes from the rewrite
#date
2024-03-15
#tags
["rust", "blog"]
#featured
true
#body
# Intro

Hello there.
"#;

        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title, "Building a Blog in Rust");
        assert_eq!(fm.description, "Notes from the rewrite");
        assert_eq!(fm.date, "2024-03-15");
        assert_eq!(fm.tags, vec!["rust", "blog"]);
        assert!(fm.featured);
        assert_eq!(body, "# Intro\n\nHello there.\n");
    }

    #[test]
    fn test_sections_in_any_order() {
        let content = "#date\n2024-01-01\n#title\nSecond\n#body\n";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.title, "Second");
        assert_eq!(fm.date, "2024-01-01");
    }

    #[test]
    fn test_missing_sections_default() {
        let (fm, body) = FrontMatter::parse("just some text\nwith no markers\n");
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, "");
    }

    #[test]
    fn test_body_only() {
        let (fm, body) = FrontMatter::parse("#body\nHello");
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, "Hello");
    }

    #[test]
    fn test_body_marker_on_last_line() {
        let (_, body) = FrontMatter::parse("#title\nT\n#body");
        assert_eq!(body, "");
    }

    #[test]
    fn test_body_keeps_markers_verbatim() {
        let content = "#body\n#title\nnot a title\n";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title, "");
        assert_eq!(body, "#title\nnot a title\n");
    }

    #[test]
    fn test_later_line_overwrites() {
        let content = "#title\nFirst\n\n   \nSecond\n#body\n";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.title, "Second");
    }

    #[test]
    fn test_lines_are_trimmed() {
        let content = "  #title  \r\n   Padded Title   \r\n#body\r\nText\r\n";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title, "Padded Title");
        assert_eq!(body, "Text\r\n");
    }

    #[test]
    fn test_lines_before_any_marker_ignored() {
        let content = "orphan line\n#title\nKept\n#body\n";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.title, "Kept");
    }

    #[test]
    fn test_marker_prefix_match() {
        let content = "#titles\nPrefixed\n#body\n";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.title, "Prefixed");
        assert_eq!(Section::from_marker("#tagsx"), Some(Section::Tags));
        assert_eq!(Section::from_marker("#unknown"), None);
    }

    #[test]
    fn test_tags_json() {
        let (fm, _) = FrontMatter::parse("#tags\n[\"a\",\"b\"]\n#body\n");
        assert_eq!(fm.tags, vec!["a", "b"]);
    }

    #[test]
    fn test_tags_comma_fallback() {
        let (fm, _) = FrontMatter::parse("#tags\na, b\n#body\n");
        assert_eq!(fm.tags, vec!["a", "b"]);
    }

    #[test]
    fn test_tags_malformed_json_strips_quotes() {
        let (fm, _) = FrontMatter::parse("#tags\n\"rust\", \"async\n#body\n");
        assert_eq!(fm.tags, vec!["rust", "async"]);
    }

    #[test]
    fn test_featured_values() {
        for (value, expected) in [
            ("true", true),
            ("TRUE", true),
            ("True", true),
            ("false", false),
            ("1", false),
            ("yes", false),
            ("truee", false),
        ] {
            let content = format!("#featured\n{}\n#body\n", value);
            let (fm, _) = FrontMatter::parse(&content);
            assert_eq!(fm.featured, expected, "featured value {:?}", value);
        }

        let (fm, _) = FrontMatter::parse("#featured\n\n#body\n");
        assert!(!fm.featured);
    }

    #[test]
    fn test_parse_derives_post_fields() {
        let post = parse("#title\nHello\n#body\none two three", "hello-world.md");
        assert_eq!(post.title, "Hello");
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.content, "one two three");
        assert_eq!(post.read_time, "1 min read");
    }
}

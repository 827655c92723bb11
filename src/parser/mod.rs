//! Markdown parsing and heading extraction.
//!
//! This module scans markdown text line by line, skipping fenced and
//! indented code, and produces a [`Document`] whose headings carry
//! document-unique anchor slugs ready for TOC rendering.

mod document;
mod extract;
pub mod slug;

pub use document::{Document, Heading};

use slug::SlugTracker;
use std::path::Path;

/// Parse a markdown file and extract its heading structure.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn parse_file(path: &Path) -> std::io::Result<Document> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_markdown(&content))
}

/// Parse markdown content and extract headings with assigned slugs.
///
/// Slug collisions are resolved per document: the first occurrence keeps
/// the bare slug, later duplicates get `-1`, `-2`, and so on. An explicit
/// `{#custom-id}` override replaces derivation but still participates in
/// duplicate numbering.
///
/// # Arguments
///
/// * `content` - Markdown content as a string
///
/// # Returns
///
/// A `Document` containing the content and extracted headings.
pub fn parse_markdown(content: &str) -> Document {
    let mut tracker = SlugTracker::new();
    let headings = extract::scan_headings(content)
        .into_iter()
        .map(|raw| {
            let (text, explicit) = slug::split_explicit_anchor(&raw.text);
            let base = explicit.unwrap_or_else(|| slug::slugify(&text));
            Heading {
                level: raw.level,
                slug: tracker.assign(&base),
                text,
                line: raw.line,
            }
        })
        .collect();

    Document::new(content.to_string(), headings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_headings() {
        let md = r#"# Title
Some content

## Section 1
More content

### Subsection
Details

## Section 2
End"#;

        let doc = parse_markdown(md);
        assert_eq!(doc.headings.len(), 4);
        assert_eq!(doc.headings[0].level, 1);
        assert_eq!(doc.headings[0].text, "Title");
        assert_eq!(doc.headings[1].level, 2);
        assert_eq!(doc.headings[1].text, "Section 1");
        assert_eq!(doc.headings[1].slug, "section-1");
    }

    #[test]
    fn test_headings_store_line_indices() {
        let md = "# First\nContent here\n\n## Second\nMore content";
        let doc = parse_markdown(md);

        assert_eq!(doc.headings.len(), 2);
        assert_eq!(doc.headings[0].line, 0);
        assert_eq!(doc.headings[1].line, 3);
    }

    #[test]
    fn test_duplicate_headings_get_unique_slugs() {
        let md = "# Notes\n## Example\n## Example\n## Example\n";
        let doc = parse_markdown(md);

        let slugs: Vec<_> = doc.headings.iter().map(|h| h.slug.as_str()).collect();
        assert_eq!(slugs, ["notes", "example", "example-1", "example-2"]);
    }

    #[test]
    fn test_no_two_headings_share_a_slug() {
        let md = "# A\n## A\n## A-1\n### a\n";
        let doc = parse_markdown(md);

        for (i, a) in doc.headings.iter().enumerate() {
            for b in &doc.headings[i + 1..] {
                assert_ne!(a.slug, b.slug, "{:?} and {:?} collide", a.text, b.text);
            }
        }
    }

    #[test]
    fn test_explicit_anchor_overrides_derivation() {
        let md = "# Getting Started {#intro}\n";
        let doc = parse_markdown(md);

        assert_eq!(doc.headings[0].text, "Getting Started");
        assert_eq!(doc.headings[0].slug, "intro");
    }

    #[test]
    fn test_headings_inside_fences_are_not_extracted() {
        let md = "# Real\n```sh\n# comment in shell\n```\n";
        let doc = parse_markdown(md);

        assert_eq!(doc.headings.len(), 1);
        assert_eq!(doc.headings[0].text, "Real");
    }

    #[test]
    fn test_empty_document_yields_no_headings() {
        assert!(parse_markdown("").headings.is_empty());
        assert!(parse_markdown("just prose\nno headings\n").headings.is_empty());
    }
}

//! Document structure produced by heading extraction.

use serde::{Deserialize, Serialize};

/// One markdown heading with its derived anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level (1-6), the count of leading `#` characters.
    pub level: usize,
    /// Display text, with any explicit anchor override stripped.
    pub text: String,
    /// URL-fragment-safe anchor, unique within the document.
    pub slug: String,
    /// Zero-based line index in the source text.
    pub line: usize,
}

/// A parsed markdown document: the raw text plus its ordered headings.
///
/// The content buffer is never mutated; every transformation over it
/// returns a new string.
#[derive(Debug, Clone)]
pub struct Document {
    pub content: String,
    pub headings: Vec<Heading>,
}

impl Document {
    pub fn new(content: String, headings: Vec<Heading>) -> Self {
        Self { content, headings }
    }

    /// The document's first heading, if it has one.
    pub fn first_heading(&self) -> Option<&Heading> {
        self.headings.first()
    }

    /// Headings at exactly the given level.
    pub fn headings_at_level(&self, level: usize) -> Vec<&Heading> {
        self.headings.iter().filter(|h| h.level == level).collect()
    }

    /// Headings whose text contains `pattern`, case-insensitive.
    pub fn filter_headings(&self, pattern: &str) -> Vec<&Heading> {
        let needle = pattern.to_lowercase();
        self.headings
            .iter()
            .filter(|h| h.text.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::new(
            String::new(),
            vec![
                Heading { level: 1, text: "Title".into(), slug: "title".into(), line: 0 },
                Heading { level: 2, text: "Install".into(), slug: "install".into(), line: 2 },
                Heading { level: 2, text: "Usage".into(), slug: "usage".into(), line: 4 },
                Heading { level: 3, text: "Usage Notes".into(), slug: "usage-notes".into(), line: 6 },
            ],
        )
    }

    #[test]
    fn test_first_heading() {
        let doc = sample();
        assert_eq!(doc.first_heading().unwrap().text, "Title");
        assert!(Document::new(String::new(), vec![]).first_heading().is_none());
    }

    #[test]
    fn test_headings_at_level() {
        let doc = sample();
        let level2 = doc.headings_at_level(2);
        assert_eq!(level2.len(), 2);
        assert_eq!(level2[0].text, "Install");
    }

    #[test]
    fn test_filter_headings_case_insensitive() {
        let doc = sample();
        let matches = doc.filter_headings("usage");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[1].text, "Usage Notes");
    }
}

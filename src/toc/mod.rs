//! TOC generation: filtering options, list rendering, and idempotent
//! insertion into marker-delimited blocks.
//!
//! The whole pipeline is a pure function from (document text, options) to
//! document text; nothing in this module touches the filesystem.

mod inject;
mod render;

pub use inject::{Markers, TocBlock, find_block, inject};
pub use render::render;

use crate::parser::parse_markdown;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TocError {
    #[error("--levels must be between 1 and 6, got {0}")]
    InvalidMaxLevel(usize),
}

/// Filtering options for TOC rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct TocOptions {
    /// Deepest heading level included (1-6).
    pub max_level: usize,
    /// Whether the document's first heading (typically its title) appears
    /// in the TOC.
    pub include_first: bool,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            max_level: 3,
            include_first: false,
        }
    }
}

impl TocOptions {
    /// Reject configurations outside the valid heading-level range.
    pub fn validate(&self) -> Result<(), TocError> {
        if !(1..=6).contains(&self.max_level) {
            return Err(TocError::InvalidMaxLevel(self.max_level));
        }
        Ok(())
    }
}

/// Run the full extract → render → inject pipeline over document text.
///
/// Running the result through again with the same options is a no-op: the
/// second pass finds the existing marker block and replaces its contents
/// with identical text.
///
/// # Errors
///
/// Returns [`TocError::InvalidMaxLevel`] when `options.max_level` is
/// outside `1..=6`. Malformed or heading-free input is not an error.
pub fn generate(content: &str, options: &TocOptions, markers: &Markers) -> Result<String, TocError> {
    options.validate()?;
    let doc = parse_markdown(content);
    log::debug!("extracted {} headings", doc.headings.len());
    let body = render(&doc.headings, options);
    Ok(inject(&doc, &body, markers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = TocOptions::default();
        assert_eq!(options.max_level, 3);
        assert!(!options.include_first);
    }

    #[test]
    fn test_validate_rejects_out_of_range_levels() {
        let too_low = TocOptions { max_level: 0, ..Default::default() };
        assert_eq!(too_low.validate(), Err(TocError::InvalidMaxLevel(0)));

        let too_high = TocOptions { max_level: 7, ..Default::default() };
        assert_eq!(too_high.validate(), Err(TocError::InvalidMaxLevel(7)));

        assert!(TocOptions::default().validate().is_ok());
    }

    #[test]
    fn test_generate_spec_example() {
        let md = "# Title\n\n## A\n## B\n";
        let result = generate(md, &TocOptions::default(), &Markers::default()).unwrap();

        assert!(result.contains("- [A](#a)"));
        assert!(result.contains("- [B](#b)"));
        assert!(!result.contains("- [Title]"));
    }

    #[test]
    fn test_generate_is_idempotent() {
        let md = "# Title\n\nintro text\n\n## Install\n\n## Usage\n\n### Flags\n";
        let options = TocOptions::default();
        let markers = Markers::default();

        let once = generate(md, &options, &markers).unwrap();
        let twice = generate(&once, &options, &markers).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_generate_idempotent_with_duplicate_headings() {
        let md = "# Doc\n\n## Example\n## Example\n";
        let options = TocOptions::default();
        let markers = Markers::default();

        let once = generate(md, &options, &markers).unwrap();
        assert!(once.contains("- [Example](#example)"));
        assert!(once.contains("- [Example](#example-1)"));

        let twice = generate(&once, &options, &markers).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_generate_leaves_headingless_document_unchanged() {
        let md = "just prose\n\nmore prose\n";
        let result = generate(md, &TocOptions::default(), &Markers::default()).unwrap();
        assert_eq!(result, md);
    }

    #[test]
    fn test_generate_propagates_invalid_level() {
        let options = TocOptions { max_level: 9, ..Default::default() };
        let err = generate("# T\n", &options, &Markers::default()).unwrap_err();
        assert_eq!(err, TocError::InvalidMaxLevel(9));
    }
}

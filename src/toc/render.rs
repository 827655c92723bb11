//! Nested-list rendering of a filtered heading sequence.

use crate::parser::Heading;
use crate::toc::TocOptions;

/// Render TOC body text from the extracted heading sequence.
///
/// The first heading in document order is dropped unless
/// `options.include_first` is set, then headings deeper than
/// `options.max_level` are dropped. Each retained heading becomes a
/// `- [text](#slug)` entry indented two spaces per level below the
/// minimum retained level. Document order is preserved.
///
/// Returns an empty string when filtering leaves nothing; the injector
/// still emits a marker-delimited block around it.
pub fn render(headings: &[Heading], options: &TocOptions) -> String {
    let skip = if options.include_first { 0 } else { 1 };
    let retained: Vec<&Heading> = headings
        .iter()
        .skip(skip)
        .filter(|h| h.level <= options.max_level)
        .collect();

    let Some(min_level) = retained.iter().map(|h| h.level).min() else {
        return String::new();
    };

    retained
        .iter()
        .map(|h| {
            let indent = "  ".repeat(h.level - min_level);
            format!("{indent}- [{}](#{})", h.text, h.slug)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

//! Line-level heading scan with fenced-code awareness.
//!
//! A naive scan would treat `# comment` inside a code sample as a real
//! heading, so the scanner carries fence state across lines: a fence opened
//! by ``` only closes on ```, and a fence opened by ~~~ only closes on ~~~.

/// A heading as it appears in the source, before slug assignment.
///
/// `text` is the remainder after the `#` run, trimmed, with any explicit
/// anchor override still attached.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawHeading {
    pub level: usize,
    pub text: String,
    pub line: usize,
}

/// Tracks whether the scanner is currently inside a fenced code block.
#[derive(Debug, Default)]
struct FenceState {
    open: Option<&'static str>,
}

impl FenceState {
    /// Feed one line; returns true if the line is a fence delimiter.
    ///
    /// Fence delimiters are matched on the trimmed line, so indented fences
    /// still toggle state (matching how common renderers treat them).
    fn update(&mut self, line: &str) -> bool {
        let trimmed = line.trim_start();
        let introducer = if trimmed.starts_with("```") {
            "```"
        } else if trimmed.starts_with("~~~") {
            "~~~"
        } else {
            return false;
        };

        match self.open {
            None => {
                self.open = Some(introducer);
                true
            }
            Some(opened) if opened == introducer => {
                self.open = None;
                true
            }
            // A ~~~ line inside a ``` fence (or vice versa) is plain content.
            Some(_) => true,
        }
    }

    fn in_fence(&self) -> bool {
        self.open.is_some()
    }
}

/// Parse a heading line into its level and remainder.
///
/// A heading starts at column zero with 1-6 `#` characters followed by
/// whitespace and at least one non-whitespace character.
fn heading_line(line: &str) -> Option<(usize, &str)> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    let rest = &line[level..];
    if !rest.starts_with(|ch: char| ch.is_whitespace()) {
        return None;
    }
    let text = rest.trim();
    if text.is_empty() { None } else { Some((level, text)) }
}

/// Scan document text and collect every real heading in order.
///
/// Skips lines inside fenced code blocks and indented code (4+ spaces or a
/// tab). Malformed or empty input yields an empty vector, never an error.
pub(crate) fn scan_headings(content: &str) -> Vec<RawHeading> {
    let mut headings = Vec::new();
    let mut fence = FenceState::default();

    for (idx, line) in content.lines().enumerate() {
        if fence.update(line) || fence.in_fence() {
            continue;
        }
        if line.starts_with("    ") || line.starts_with('\t') {
            continue;
        }
        if let Some((level, text)) = heading_line(line) {
            headings.push(RawHeading {
                level,
                text: text.to_string(),
                line: idx,
            });
        }
    }

    headings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_line_levels() {
        assert_eq!(heading_line("# Title"), Some((1, "Title")));
        assert_eq!(heading_line("## Section"), Some((2, "Section")));
        assert_eq!(heading_line("###### Deep"), Some((6, "Deep")));
        assert_eq!(heading_line("####### Too many"), None);
        assert_eq!(heading_line("#NoSpace"), None);
        assert_eq!(heading_line("# "), None);
        assert_eq!(heading_line("plain text"), None);
    }

    #[test]
    fn test_scan_collects_in_order() {
        let md = "# Title\ncontent\n## A\n### B\n## C\n";
        let headings = scan_headings(md);

        assert_eq!(headings.len(), 4);
        assert_eq!(headings[0], RawHeading { level: 1, text: "Title".into(), line: 0 });
        assert_eq!(headings[2], RawHeading { level: 3, text: "B".into(), line: 3 });
        assert_eq!(headings[3].line, 4);
    }

    #[test]
    fn test_fenced_code_is_skipped() {
        let md = "```\n# not a heading\n```\n";
        assert!(scan_headings(md).is_empty());
    }

    #[test]
    fn test_tilde_fences_are_skipped() {
        let md = "~~~python\n# comment\n## another\n~~~\n# Real\n";
        let headings = scan_headings(md);

        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].text, "Real");
    }

    #[test]
    fn test_fence_closes_only_on_matching_introducer() {
        // The ~~~ lines are content inside the backtick fence.
        let md = "```\n~~~\n# hidden\n~~~\n```\n# Visible\n";
        let headings = scan_headings(md);

        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].text, "Visible");
    }

    #[test]
    fn test_indented_code_is_skipped() {
        let md = "# Title\n\n    # indented code\n\t# tab code\n## Real\n";
        let headings = scan_headings(md);

        assert_eq!(headings.len(), 2);
        assert_eq!(headings[1].text, "Real");
    }

    #[test]
    fn test_unclosed_fence_swallows_rest_of_document() {
        let md = "# Before\n```\n# inside\n## still inside\n";
        let headings = scan_headings(md);

        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].text, "Before");
    }

    #[test]
    fn test_empty_input() {
        assert!(scan_headings("").is_empty());
    }

    #[test]
    fn test_first_heading_after_fenced_lookalike() {
        let md = "intro\n```\n# fake\n```\n## First Real\n";
        let headings = scan_headings(md);
        assert_eq!(headings.first().map(|h| h.line), Some(4));
    }
}

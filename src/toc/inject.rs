//! Marker-block location and idempotent TOC insertion.

use crate::parser::Document;
use serde::{Deserialize, Serialize};

/// The comment pair delimiting the managed TOC block.
///
/// Markdown renderers ignore the markers; the tool only ever rewrites what
/// sits strictly between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Markers {
    #[serde(default = "default_open")]
    pub open: String,
    #[serde(default = "default_close")]
    pub close: String,
}

fn default_open() -> String {
    "<!-- TOC -->".to_string()
}

fn default_close() -> String {
    "<!-- /TOC -->".to_string()
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            open: default_open(),
            close: default_close(),
        }
    }
}

/// Line span of an existing TOC block: `start` and `end` are the indices of
/// the opening and closing marker lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TocBlock {
    pub start: usize,
    pub end: usize,
}

/// Locate the managed TOC block, if any.
///
/// Only the first matching pair counts: the first opening-marker line
/// followed by a closing-marker line. Any further marker pairs are plain
/// content. An opening marker with no close after it is not a block.
pub fn find_block(lines: &[&str], markers: &Markers) -> Option<TocBlock> {
    let start = lines.iter().position(|l| l.trim() == markers.open)?;
    let end = lines[start + 1..]
        .iter()
        .position(|l| l.trim() == markers.close)?;
    Some(TocBlock {
        start,
        end: start + 1 + end,
    })
}

/// Produce the final document text with the rendered TOC body inserted.
///
/// Three situations:
/// - no headings: the document is returned unchanged, there is no
///   insertion point;
/// - an existing block: only the lines strictly between the markers are
///   replaced, everything else is byte-preserved;
/// - no block: a new one is inserted after the first heading line (and its
///   trailing blank line, if any), separated by one blank line on each
///   side.
///
/// An empty `body` still produces a marker-delimited block, so a document
/// whose headings all filter out keeps a well-formed, refreshable TOC.
pub fn inject(doc: &Document, body: &str, markers: &Markers) -> String {
    let Some(first) = doc.first_heading() else {
        log::debug!("no headings found; document left unchanged");
        return doc.content.clone();
    };

    let lines: Vec<&str> = doc.content.split('\n').collect();

    if let Some(block) = find_block(&lines, markers) {
        log::debug!("replacing TOC block at lines {}..{}", block.start, block.end);
        let mut result: Vec<&str> = Vec::with_capacity(lines.len() + 2);
        result.extend_from_slice(&lines[..=block.start]);
        result.extend(body.split('\n'));
        result.extend_from_slice(&lines[block.end..]);
        return result.join("\n");
    }

    // Fresh insertion point: right after the first heading line, advancing
    // past one trailing blank line. The final element of a newline-terminated
    // split is the empty artifact of that newline, not a blank line.
    let mut insert_at = first.line + 1;
    let trailing_blank =
        insert_at + 1 < lines.len() && lines[insert_at].trim().is_empty();
    if trailing_blank {
        insert_at += 1;
    }
    log::debug!("inserting new TOC block at line {insert_at}");

    let mut result: Vec<&str> = Vec::with_capacity(lines.len() + 5);
    result.extend_from_slice(&lines[..insert_at]);
    if !trailing_blank {
        result.push("");
    }
    result.push(markers.open.as_str());
    result.extend(body.split('\n'));
    result.push(markers.close.as_str());
    if matches!(lines.get(insert_at), Some(next) if !next.trim().is_empty()) {
        result.push("");
    }
    result.extend_from_slice(&lines[insert_at..]);
    result.join("\n")
}

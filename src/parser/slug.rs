//! Slug derivation and per-document collision tracking.
//!
//! Slugs follow the convention of common markdown renderers: lowercase,
//! hyphen-separated, restricted to letters, digits, and hyphens. Duplicate
//! headings get numeric suffixes (`-1`, `-2`, ...) so anchors stay unique
//! within one document.

use indexmap::IndexMap;
use regex::Regex;
use std::sync::OnceLock;

/// Derive a URL-fragment-safe slug from heading display text.
///
/// HTML comments are removed and inline code markers are stripped (keeping
/// the code content) before normalization. Deterministic for a given input.
///
/// # Examples
///
/// ```
/// use tocmd::parser::slug::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("API: Authentication (v2)"), "api-authentication-v2");
/// assert_eq!(slugify("The `parse` function"), "the-parse-function");
/// ```
pub fn slugify(text: &str) -> String {
    static CLEANUP: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    let cleanup = CLEANUP.get_or_init(|| {
        vec![
            (Regex::new(r"<!--.*?-->").unwrap(), ""),
            (Regex::new(r"`([^`]+)`").unwrap(), "$1"),
        ]
    });

    let mut cleaned = text.to_string();
    for (pattern, replacement) in cleanup {
        cleaned = pattern.replace_all(&cleaned, *replacement).to_string();
    }

    let normalized: String = cleaned
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_alphanumeric() || *ch == '-' || ch.is_whitespace())
        .map(|ch| if ch.is_whitespace() { '-' } else { ch })
        .collect();

    // Collapse hyphen runs and trim the ends.
    normalized
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Split a trailing explicit anchor override (`{#custom-id}`) off heading
/// text.
///
/// Returns the display text (override removed, trimmed) and the override
/// identifier when present.
pub fn split_explicit_anchor(text: &str) -> (String, Option<String>) {
    static ANCHOR: OnceLock<Regex> = OnceLock::new();
    let anchor = ANCHOR.get_or_init(|| Regex::new(r"\{#([^{}\s]+)\}\s*$").unwrap());

    match anchor.captures(text) {
        Some(caps) => {
            let id = caps.get(1).map(|m| m.as_str().to_string());
            let display = anchor.replace(text, "").trim().to_string();
            (display, id)
        }
        None => (text.trim().to_string(), None),
    }
}

/// Per-document slug deduplication state.
///
/// Owned by a single extraction pass and discarded with it; never shared
/// across documents.
#[derive(Debug, Default)]
pub struct SlugTracker {
    seen: IndexMap<String, usize>,
}

impl SlugTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a unique slug for `base`.
    ///
    /// The first occurrence keeps the bare slug; later duplicates get the
    /// next free numeric suffix. Suffixed results are themselves claimed, so
    /// a literal later heading that slugifies to `base-1` still comes out
    /// unique.
    pub fn assign(&mut self, base: &str) -> String {
        let occurrences = self.seen.get(base).copied().unwrap_or(0);
        if occurrences == 0 {
            self.seen.insert(base.to_string(), 1);
            return base.to_string();
        }

        let mut suffix = occurrences;
        let mut candidate = format!("{base}-{suffix}");
        while self.seen.contains_key(&candidate) {
            suffix += 1;
            candidate = format!("{base}-{suffix}");
        }
        self.seen.insert(base.to_string(), suffix + 1);
        self.seen.insert(candidate.clone(), 1);
        candidate
    }
}

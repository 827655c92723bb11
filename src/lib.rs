//! # tocmd
//!
//! A markdown table-of-contents library: extract headings, render a nested
//! anchor list, and insert it into a marker-delimited block, idempotently.
//!
//! The pipeline is document text in, document text out. Heading extraction
//! tracks fenced-code state so `# comment` inside a code sample never
//! becomes a TOC entry, slugs are deduplicated per document the way common
//! markdown renderers do it, and re-running on already-processed output is
//! a byte-identical no-op.
//!
//! ## Example
//!
//! ```rust
//! use tocmd::{Markers, TocOptions, generate, parse_markdown};
//!
//! let markdown = "# Guide\n\n## Install\n\n## Usage\n";
//!
//! let doc = parse_markdown(markdown);
//! assert_eq!(doc.headings.len(), 3);
//! assert_eq!(doc.headings[1].slug, "install");
//!
//! let result = generate(markdown, &TocOptions::default(), &Markers::default()).unwrap();
//! assert!(result.contains("- [Install](#install)"));
//!
//! // A second run finds the existing block and changes nothing.
//! let again = generate(&result, &TocOptions::default(), &Markers::default()).unwrap();
//! assert_eq!(result, again);
//! ```

/// Configuration module for persisted TOC defaults.
///
/// Provides the config file with default depth, first-heading, and marker
/// settings.
pub mod config;

/// Input handling module for stdin and file sources.
pub mod input;

/// Output delivery module with atomic file replacement.
pub mod output;

/// Parser module for markdown documents.
///
/// Provides functions to parse markdown content into a document with
/// slug-annotated headings.
pub mod parser;

/// TOC module: rendering options, list rendering, and marker-block
/// injection.
pub mod toc;

/// File watching module for continuous TOC refresh.
pub mod watch;

// Re-export commonly used types for convenience
pub use config::Config;
pub use parser::{Document, Heading, parse_file, parse_markdown};
pub use toc::{Markers, TocError, TocOptions, generate};
pub use watch::FileWatcher;

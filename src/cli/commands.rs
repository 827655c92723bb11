use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[cfg(feature = "unstable-dynamic")]
use clap_complete::engine::{ArgValueCompleter, CompletionCandidate, ValueCompleter};

#[derive(Parser, Debug)]
#[command(name = "tocmd")]
#[command(version)]
#[command(about = "Generate and insert a table of contents into markdown files")]
#[command(
    long_about = "tocmd - Generate a table of contents from markdown headings and insert it\n\
    into a marker-delimited block, idempotently: re-running on its own output is a no-op.\n\n\
    The TOC lands between <!-- TOC --> and <!-- /TOC --> lines, placed after the document's\n\
    first heading on the first run and refreshed in place on every run after that.\n\n\
    Examples:\n  \
    tocmd README.md               # Insert or refresh the TOC in place\n  \
    tocmd --stdout README.md      # Print the result instead of writing\n  \
    tocmd -l 2 README.md          # Only include headings down to level 2\n  \
    cat doc.md | tocmd -          # Read from stdin, write to stdout\n  \
    tocmd --list README.md        # Show extracted headings and anchors\n  \
    tocmd --watch README.md       # Keep the TOC fresh on every save"
)]
pub struct Cli {
    /// Markdown file to process (.md or .markdown), or '-' for stdin
    ///
    /// With stdin input the result always goes to stdout.
    #[arg(add = markdown_file_completer())]
    pub file: Option<PathBuf>,

    /// Max heading depth included in the TOC (1-6)
    ///
    /// Headings deeper than this level are left out of the generated list.
    /// Overrides the config file default.
    #[arg(short = 'l', long = "levels", value_name = "LEVEL")]
    pub levels: Option<usize>,

    /// Include the document's first heading in the TOC
    ///
    /// By default the first heading (typically the document title) is
    /// skipped, since a TOC rarely links to the title above it.
    #[arg(long = "include-first")]
    pub include_first: bool,

    /// Print the result to stdout instead of modifying the file
    #[arg(long = "stdout")]
    pub stdout: bool,

    /// Write the result to FILE instead of modifying in place
    #[arg(short = 'o', long = "out", value_name = "FILE", conflicts_with = "stdout")]
    pub out: Option<PathBuf>,

    /// List extracted headings instead of inserting a TOC (non-destructive)
    ///
    /// Shows each heading with its level indicator and the anchor slug the
    /// TOC would link to. Combine with --filter or --level to narrow results.
    #[arg(long = "list")]
    pub list: bool,

    /// Filter listed headings by text pattern (case-insensitive)
    ///
    /// Example: --filter "install" matches "Installation" and "Installing"
    #[arg(long = "filter", value_name = "PATTERN", requires = "list")]
    pub filter: Option<String>,

    /// Show only listed headings at a specific level (1-6)
    #[arg(short = 'L', long = "level", value_name = "LEVEL", requires = "list")]
    pub level: Option<usize>,

    /// Output format for --list
    #[arg(short = 'f', long = "format", value_name = "FORMAT", default_value = "plain")]
    pub format: ListFormat,

    /// Watch the file and refresh the TOC after every change
    ///
    /// Blocks until interrupted. Saves that don't move any headings leave
    /// the file untouched.
    #[arg(long = "watch", conflicts_with_all = ["stdout", "out", "list"])]
    pub watch: bool,

    /// Enable debug logging to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ListFormat {
    /// Human-readable text
    Plain,
    /// JSON array of heading records
    Json,
}

#[cfg(feature = "unstable-dynamic")]
fn markdown_file_completer() -> ArgValueCompleter {
    use std::ffi::OsStr;
    use std::path::Path;

    struct MarkdownCompleter;

    impl ValueCompleter for MarkdownCompleter {
        fn complete(&self, current: &OsStr) -> Vec<CompletionCandidate> {
            let input = current.to_string_lossy();
            let input_path = Path::new(input.as_ref());

            // Split the partial input into the directory to search and the
            // filename prefix typed so far. parent() returns Some("") for
            // bare filenames, which must normalize to "." to read anything.
            let (search_dir, prefix) = if input.is_empty() {
                (Path::new("."), String::new())
            } else if input.ends_with('/') {
                (input_path, String::new())
            } else {
                let parent = match input_path.parent() {
                    Some(p) if !p.as_os_str().is_empty() => p,
                    _ => Path::new("."),
                };
                let prefix = input_path
                    .file_name()
                    .map(|s| s.to_string_lossy().to_lowercase())
                    .unwrap_or_default();
                (parent, prefix)
            };

            let Ok(entries) = std::fs::read_dir(search_dir) else {
                return vec![];
            };

            entries
                .filter_map(Result::ok)
                .filter_map(|entry| {
                    let path = entry.path();
                    let name = path.file_name()?.to_string_lossy().to_string();
                    if !prefix.is_empty() && !name.to_lowercase().starts_with(&prefix) {
                        return None;
                    }

                    let value = if search_dir == Path::new(".") {
                        name.clone()
                    } else {
                        search_dir.join(&name).to_string_lossy().to_string()
                    };

                    if path.is_dir() {
                        // Trailing slash so the user can keep descending.
                        Some(CompletionCandidate::new(format!("{value}/")).help(Some("directory".into())))
                    } else {
                        let ext = path.extension()?.to_string_lossy().to_lowercase();
                        (ext == "md" || ext == "markdown").then(|| CompletionCandidate::new(value))
                    }
                })
                .collect()
        }
    }

    ArgValueCompleter::new(MarkdownCompleter)
}

#[cfg(not(feature = "unstable-dynamic"))]
fn markdown_file_completer() -> clap::builder::ValueHint {
    clap::ValueHint::FilePath
}

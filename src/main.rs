//! # tocmd
//!
//! Generate and insert a table of contents into markdown files.
//!
//! ## Usage
//!
//! Insert or refresh a TOC in place:
//! ```sh
//! tocmd README.md
//! ```
//!
//! Print the result instead of writing:
//! ```sh
//! tocmd --stdout README.md
//! ```
//!
//! List the headings the TOC would link to:
//! ```sh
//! tocmd --list README.md
//! ```

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, ListFormat};
use color_eyre::Result;
use color_eyre::eyre::eyre;
use std::io::Write;
use std::path::Path;
use tocmd::input::{self, InputSource};
use tocmd::{Config, Document, FileWatcher, Markers, TocOptions, output, parser, toc};

fn main() -> Result<()> {
    color_eyre::install()?;

    // Handle dynamic shell completions
    #[cfg(feature = "unstable-dynamic")]
    clap_complete::CompleteEnv::with_factory(|| {
        use clap::CommandFactory;
        Cli::command()
    })
    .complete();

    let args = Cli::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    simple_logger::SimpleLogger::new().with_level(level).init()?;

    // CLI flags override config file defaults.
    let config = Config::load();
    let options = TocOptions {
        max_level: args.levels.unwrap_or(config.toc.max_level),
        include_first: args.include_first || config.toc.include_first,
    };
    options.validate()?;
    let markers = config.markers.clone();

    let source = input::determine_input_source(args.file.as_deref())?;

    if args.watch {
        let InputSource::File(ref path) = source else {
            return Err(eyre!("--watch requires a file path, not stdin"));
        };
        return run_watch(path, &options, &markers);
    }

    let content = input::read(&source)?;
    let doc = parser::parse_markdown(&content);

    if args.list {
        return print_headings(&args, &doc);
    }

    let body = toc::render(&doc.headings, &options);
    let result = toc::inject(&doc, &body, &markers);

    match (&args.out, &source) {
        (Some(out), _) => {
            output::write_atomic(out, &result)?;
            eprintln!("TOC written to {}", out.display());
        }
        (None, InputSource::File(path)) if !args.stdout => {
            if output::write_if_changed(path, &result, &content)? {
                eprintln!("TOC added to {}", path.display());
            } else {
                eprintln!("TOC already up to date in {}", path.display());
            }
        }
        // --stdout, or stdin input (which always goes to stdout)
        _ => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(result.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Handle --list: show extracted headings with their anchor slugs.
fn print_headings(args: &Cli, doc: &Document) -> Result<()> {
    let headings = if let Some(level) = args.level {
        doc.headings_at_level(level)
    } else if let Some(ref filter) = args.filter {
        doc.filter_headings(filter)
    } else {
        doc.headings.iter().collect()
    };

    match args.format {
        ListFormat::Plain => {
            for heading in &headings {
                let prefix = "#".repeat(heading.level);
                println!("{} {} -> #{}", prefix, heading.text, heading.slug);
            }
        }
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&headings)?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Handle --watch: refresh once, then again after every relevant change.
fn run_watch(path: &Path, options: &TocOptions, markers: &Markers) -> Result<()> {
    refresh(path, options, markers)?;

    let mut watcher = FileWatcher::new(path)?;
    eprintln!("watching {} (ctrl-c to stop)", path.display());

    while watcher.wait_for_change() {
        // Keep watching through transient failures (editors often replace
        // the file mid-save).
        if let Err(e) = refresh(path, options, markers) {
            log::warn!("refresh failed: {e}");
        }
        watcher.mark_refreshed();
    }

    Ok(())
}

fn refresh(path: &Path, options: &TocOptions, markers: &Markers) -> Result<()> {
    let content = std::fs::read_to_string(path)?;
    let result = toc::generate(&content, options, markers)?;
    if output::write_if_changed(path, &result, &content)? {
        eprintln!("TOC refreshed in {}", path.display());
    }
    Ok(())
}

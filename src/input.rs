//! Input handling for stdin and file sources.

use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    /// No file argument and stdin is a terminal, so there is nothing to read.
    #[error("no input: pass a markdown file, '-', or pipe content on stdin")]
    NoTty,

    #[error("failed to read {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),
}

/// Where document text comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

/// Resolve the file argument into an input source.
///
/// `-` means stdin explicitly; no argument falls back to stdin only when
/// something is actually piped in.
pub fn determine_input_source(file: Option<&Path>) -> Result<InputSource, InputError> {
    match file {
        Some(path) if path.as_os_str() == "-" => Ok(InputSource::Stdin),
        Some(path) => Ok(InputSource::File(path.to_path_buf())),
        None => {
            if std::io::stdin().is_terminal() {
                Err(InputError::NoTty)
            } else {
                Ok(InputSource::Stdin)
            }
        }
    }
}

/// Read the full document text from the source.
///
/// # Errors
///
/// Fails on unreadable paths or non-UTF-8 content.
pub fn read(source: &InputSource) -> Result<String, InputError> {
    match source {
        InputSource::File(path) => std::fs::read_to_string(path).map_err(|source| {
            InputError::File {
                path: path.clone(),
                source,
            }
        }),
        InputSource::Stdin => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(InputError::Stdin)?;
            Ok(buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_dash_means_stdin() {
        let source = determine_input_source(Some(Path::new("-"))).unwrap();
        assert_eq!(source, InputSource::Stdin);
    }

    #[test]
    fn test_path_means_file() {
        let source = determine_input_source(Some(Path::new("README.md"))).unwrap();
        assert_eq!(source, InputSource::File(PathBuf::from("README.md")));
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "# Title\n").unwrap();

        let source = InputSource::File(file.path().to_path_buf());
        assert_eq!(read(&source).unwrap(), "# Title\n");
    }

    #[test]
    fn test_read_missing_file_is_an_error() {
        let source = InputSource::File(PathBuf::from("/no/such/file.md"));
        let err = read(&source).unwrap_err();
        assert!(matches!(err, InputError::File { .. }));
    }
}

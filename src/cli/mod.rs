//! Command-line argument definitions.

mod commands;

pub use commands::{Cli, ListFormat};

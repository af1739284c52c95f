//! Command handlers for the `umber` CLI.
//!
//! Shared helpers (reading input, the error type) live here in the module
//! root.

use std::io::Read;

use umber_php::OptionError;

mod detect;
mod lex;

pub use detect::{detect_file, looks_like_php};
pub use lex::{lex_file, parse_lex_args, render_tokens, LexArgs};

/// Errors reported by CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot find file '{0}'")]
    NotFound(String),
    #[error("permission denied reading '{0}'")]
    PermissionDenied(String),
    #[error("'{0}' contains invalid UTF-8 data")]
    InvalidUtf8(String),
    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("error writing output: {0}")]
    Write(#[source] std::io::Error),
    #[error("malformed option '{0}' (expected key=value)")]
    MalformedOption(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("missing file path")]
    MissingPath,
    #[error(transparent)]
    Option(#[from] OptionError),
}

/// Read a source file, or standard input for `-`.
pub fn read_source(path: &str) -> Result<String, CliError> {
    let result = if path == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content).map(|_| content)
    } else {
        std::fs::read_to_string(path)
    };
    result.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CliError::NotFound(path.to_owned()),
        std::io::ErrorKind::PermissionDenied => CliError::PermissionDenied(path.to_owned()),
        std::io::ErrorKind::InvalidData => CliError::InvalidUtf8(path.to_owned()),
        _ => CliError::Read {
            path: path.to_owned(),
            source: e,
        },
    })
}

#[cfg(test)]
mod tests;

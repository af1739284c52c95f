//! `umber detect`: guess whether a file is PHP.

use umber_php::{detect, looks_like_hack, PHP};

use super::{read_source, CliError};

/// Contents that announce PHP win; otherwise a PHP file name counts unless
/// the contents are Hack.
pub fn looks_like_php(path: Option<&str>, contents: &str) -> bool {
    if detect(contents) {
        return true;
    }
    path.is_some_and(|p| PHP.matches_filename(p)) && !looks_like_hack(contents)
}

pub fn detect_file(path: &str) -> Result<bool, CliError> {
    let contents = read_source(path)?;
    let name = (path != "-").then_some(path);
    let verdict = looks_like_php(name, &contents);
    tracing::debug!(path, verdict, "detected");
    Ok(verdict)
}

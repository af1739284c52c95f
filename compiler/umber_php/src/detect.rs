//! Content sniffing: does a text look like PHP?

/// `true` for a `php` shebang or a line starting with `<?php`; `false` when
/// a line starts with `<?hh` (Hack) or nothing suggests PHP.
pub fn detect(text: &str) -> bool {
    if shebang_names(text, "php") {
        return true;
    }
    if looks_like_hack(text) {
        return false;
    }
    text.lines().any(|line| line.starts_with("<?php"))
}

/// A line starts with `<?hh`.
pub fn looks_like_hack(text: &str) -> bool {
    text.lines().any(|line| line.starts_with("<?hh"))
}

/// Whether the first line is a `#!` line running `interpreter`, e.g.
/// `#!/usr/bin/env php` or `#!/usr/bin/php -q`.
fn shebang_names(text: &str, interpreter: &str) -> bool {
    let Some(line) = text.trim_start().strip_prefix("#!") else {
        return false;
    };
    let line = line.split('\n').next().unwrap_or_default();
    line.match_indices(interpreter).any(|(at, _)| {
        let before = line[..at].chars().next_back();
        let after = line[at + interpreter.len()..].chars().next();
        !before.is_some_and(umber_lexer_core::is_word_char)
            && after.is_none_or(char::is_whitespace)
    })
}

#[cfg(test)]
mod tests;

//! Standalone scanning primitives for Umber's rule-table lexers.
//!
//! Lexer rules in Umber are ordered matchers: each one looks at the text
//! remaining after the scan position and either reports how many bytes it
//! matched or declines. [`Cursor`] is the toolkit those matchers are written
//! with. It walks a `&str` by `char`, never panics on any input, and keeps
//! every position on a UTF-8 boundary, so a match length can always be used
//! to slice the source.
//!
//! Character classes follow the conventions highlighting grammars use:
//! - identifiers start with a letter or `_` and continue with letters,
//!   numbers, or `_` ([`is_ident_start`], [`is_ident_continue`])
//! - a *word boundary* is a position not followed by a word character
//!   ([`is_word_char`])
//! - *space* is the ASCII whitespace set including vertical tab
//!   ([`is_space`])

mod cursor;

pub use cursor::Cursor;

/// Whether `c` can start an identifier: `_`, or an alphabetic character
/// that is not a letter number.
///
/// Letter numbers (`Ⅰ`, `〇`, ...) are alphabetic but not letters, so they
/// are excluded. Alphabetic combining marks still pass.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || (c.is_alphabetic() && (c.is_ascii() || !is_letter_number(c)))
}

/// General category `Nl`.
const LETTER_NUMBERS: &[(char, char)] = &[
    ('\u{16EE}', '\u{16F0}'),
    ('\u{2160}', '\u{2182}'),
    ('\u{2185}', '\u{2188}'),
    ('\u{3007}', '\u{3007}'),
    ('\u{3021}', '\u{3029}'),
    ('\u{3038}', '\u{303A}'),
    ('\u{A6E6}', '\u{A6EF}'),
    ('\u{10140}', '\u{10174}'),
    ('\u{10341}', '\u{10341}'),
    ('\u{1034A}', '\u{1034A}'),
    ('\u{103D1}', '\u{103D5}'),
    ('\u{12400}', '\u{1246E}'),
];

fn is_letter_number(c: char) -> bool {
    LETTER_NUMBERS
        .binary_search_by(|&(lo, hi)| {
            if hi < c {
                std::cmp::Ordering::Less
            } else if lo > c {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Whether `c` can continue an identifier: letters, numbers, or `_`.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Word characters for boundary tests. Same set as [`is_ident_continue`].
#[inline]
pub fn is_word_char(c: char) -> bool {
    is_ident_continue(c)
}

/// ASCII whitespace: space, tab, newline, vertical tab, form feed, CR.
#[inline]
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

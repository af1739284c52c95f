//! Hand-written matchers for the rule tables.
//!
//! Each matcher looks at the text remaining at the scan position and
//! reports how much of it the pattern covers, plus group lengths for rules
//! that tag sub-matches separately. Matchers are anchored at the start of
//! their input and never look behind it.

use memchr::memmem;
use smallvec::SmallVec;
use umber_lexer_core::{is_space, Cursor};

/// A successful pattern match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Match {
    /// Bytes covered.
    pub(crate) len: usize,
    /// Byte lengths of consecutive capture groups covering the match, for
    /// rules that emit one token per group. Empty otherwise.
    pub(crate) groups: SmallVec<[usize; 3]>,
}

impl Match {
    pub(crate) fn whole(len: usize) -> Self {
        Match {
            len,
            groups: SmallVec::new(),
        }
    }

    pub(crate) fn groups(lens: &[usize]) -> Self {
        Match {
            len: lens.iter().sum(),
            groups: SmallVec::from_slice(lens),
        }
    }
}

pub(crate) type Pattern = fn(&str) -> Option<Match>;

fn prefix(s: &str, lit: &str) -> Option<Match> {
    s.starts_with(lit).then(|| Match::whole(lit.len()))
}

fn one_of(s: &str, set: &[u8]) -> Option<Match> {
    s.as_bytes()
        .first()
        .filter(|b| set.contains(b))
        .map(|_| Match::whole(1))
}

/// Whatever the cursor consumed, if anything.
fn consumed(c: &Cursor<'_>) -> Option<Match> {
    (c.pos() > 0).then(|| Match::whole(c.pos()))
}

/// `\d[_\d]*`
fn eat_digits(c: &mut Cursor<'_>) -> bool {
    if c.eat_if(|ch| ch.is_ascii_digit()).is_none() {
        return false;
    }
    c.eat_while(|ch| ch.is_ascii_digit() || ch == '_');
    true
}

/// `id(\id)*`: stops before a `\` that no identifier follows.
fn eat_qualified_ident(c: &mut Cursor<'_>) -> bool {
    if !c.eat_ident() {
        return false;
    }
    loop {
        let save = *c;
        if !(c.eat('\\') && c.eat_ident()) {
            *c = save;
            return true;
        }
    }
}

/// `x(\S+)y` where the non-space run ends at the last `close` that leaves
/// at least one character inside. Returns the inner length.
fn delimited_non_space(s: &str, open: char, close: u8) -> Option<usize> {
    let rest = s.strip_prefix(open)?;
    let run = rest
        .char_indices()
        .find(|&(_, c)| is_space(c))
        .map_or(rest.len(), |(i, _)| i);
    let inner = memchr::memrchr(close, &rest.as_bytes()[..run])?;
    (inner > 0).then_some(inner)
}

// Root mode.

/// `\s*(?=<)`; may be empty.
pub(crate) fn space_before_tag(s: &str) -> Option<Match> {
    let mut c = Cursor::new(s);
    c.eat_while(is_space);
    (c.current() == Some('<')).then(|| Match::whole(c.pos()))
}

/// The longest non-empty `$`-free run followed by `<?php` or `<?=`.
pub(crate) fn text_before_open_tag(s: &str) -> Option<Match> {
    let limit = memchr::memchr(b'$', s.as_bytes()).unwrap_or(s.len());
    memmem::find_iter(&s.as_bytes()[..limit], b"<?")
        .filter(|&at| at > 0 && opens_code(&s[at + 2..]))
        .last()
        .map(Match::whole)
}

fn opens_code(after_tag: &str) -> bool {
    after_tag.starts_with('=') || Cursor::new(after_tag).eat_str_ignore_case("php")
}

#[allow(clippy::unnecessary_wraps, reason = "every matcher has the `Pattern` signature")]
pub(crate) fn empty(_: &str) -> Option<Match> {
    Some(Match::whole(0))
}

// Embedded host mode.

/// `<?`, `<?php` or `<?=`.
pub(crate) fn open_tag(s: &str) -> Option<Match> {
    let mut c = Cursor::new(s);
    if !c.eat_str("<?") {
        return None;
    }
    if !c.eat_str_ignore_case("php") {
        c.eat('=');
    }
    consumed(&c)
}

/// Up to the next `<?`, or everything.
#[allow(clippy::unnecessary_wraps, reason = "every matcher has the `Pattern` signature")]
pub(crate) fn host_text(s: &str) -> Option<Match> {
    let mut c = Cursor::new(s);
    c.eat_until_or_eof("<?");
    Some(Match::whole(c.pos()))
}

// Code mode.

pub(crate) fn close_tag(s: &str) -> Option<Match> {
    prefix(s, "?>")
}

/// Heredoc or nowdoc, through the terminating identifier.
pub(crate) fn heredoc(s: &str) -> Option<Match> {
    let mut c = Cursor::new(s);
    if !c.eat_str("<<<") {
        return None;
    }
    let quote = c.eat_if(|ch| ch == '"' || ch == '\'');
    let id_start = c.pos();
    if !c.eat_ident() {
        return None;
    }
    let id = c.slice_from(id_start);
    if let Some(q) = quote {
        if !c.eat(q) {
            return None;
        }
    }
    if !c.eat('\n') {
        return None;
    }
    let body = c.pos();
    memchr::memchr_iter(b'\n', &s.as_bytes()[body..]).find_map(|nl| {
        let mut end = Cursor::new(&s[body + nl + 1..]);
        end.eat_while(is_space);
        let rest = end.rest();
        let matches_id = rest
            .get(..id.len())
            .is_some_and(|candidate| candidate.eq_ignore_ascii_case(id));
        matches_id.then(|| {
            let mut len = body + nl + 1 + end.pos() + id.len();
            if s[len..].starts_with(';') {
                len += 1;
            }
            Match::whole(len)
        })
    })
}

pub(crate) fn whitespace(s: &str) -> Option<Match> {
    let mut c = Cursor::new(s);
    c.eat_while(is_space);
    consumed(&c)
}

/// `#` to end of line.
pub(crate) fn hash_comment(s: &str) -> Option<Match> {
    let mut c = Cursor::new(s);
    if !c.eat('#') {
        return None;
    }
    c.eat_until_newline_or_eof();
    consumed(&c)
}

/// `//` to end of line.
pub(crate) fn line_comment(s: &str) -> Option<Match> {
    let mut c = Cursor::new(s);
    if !c.eat_str("//") {
        return None;
    }
    c.eat_until_newline_or_eof();
    consumed(&c)
}

/// `/** ... */`, but not `/**/`.
pub(crate) fn doc_comment(s: &str) -> Option<Match> {
    let mut c = Cursor::new(s);
    if !c.eat_str("/**") || c.current() == Some('/') {
        return None;
    }
    c.eat_through("*/").then(|| Match::whole(c.pos()))
}

/// `/* ... */`
pub(crate) fn block_comment(s: &str) -> Option<Match> {
    let mut c = Cursor::new(s);
    if !c.eat_str("/*") {
        return None;
    }
    c.eat_through("*/").then(|| Match::whole(c.pos()))
}

/// `(->|::)(\s*)(id)`
pub(crate) fn member_access(s: &str) -> Option<Match> {
    let mut c = Cursor::new(s);
    if !(c.eat_str("->") || c.eat_str("::")) {
        return None;
    }
    let space = c.eat_while(is_space);
    let name_start = c.pos();
    if !c.eat_ident() {
        return None;
    }
    Some(Match::groups(&[2, space, c.pos() - name_start]))
}

// No entry is a prefix of another, so the first hit is the only candidate.
const NULLABLE_TYPES: &[&str] = &["int", "float", "bool", "string", "iterable", "self", "callable"];

/// `void`, or a scalar/pseudo type optionally marked nullable, as a whole
/// word.
pub(crate) fn type_keyword(s: &str) -> Option<Match> {
    let mut c = Cursor::new(s);
    if c.eat_str_ignore_case("void") && c.at_word_end() {
        return consumed(&c);
    }
    let mut c = Cursor::new(s);
    c.eat('?');
    (c.eat_any_ignore_case(NULLABLE_TYPES).is_some() && c.at_word_end())
        .then(|| Match::whole(c.pos()))
}

pub(crate) fn equals(s: &str) -> Option<Match> {
    prefix(s, "=")
}

/// `\{` opening a grouped `use`.
pub(crate) fn namespace_brace(s: &str) -> Option<Match> {
    s.starts_with("\\{").then(|| Match::groups(&[1, 1]))
}

pub(crate) fn statement_end(s: &str) -> Option<Match> {
    one_of(s, b";{")
}

pub(crate) fn comma(s: &str) -> Option<Match> {
    prefix(s, ",")
}

pub(crate) fn open_paren(s: &str) -> Option<Match> {
    prefix(s, "(")
}

pub(crate) fn close_paren(s: &str) -> Option<Match> {
    prefix(s, ")")
}

pub(crate) fn bracket(s: &str) -> Option<Match> {
    one_of(s, b"[]}")
}

fn word_ignore_case(s: &str, words: &[&str]) -> Option<Match> {
    words.iter().find_map(|word| {
        let mut c = Cursor::new(s);
        (c.eat_str_ignore_case(word) && c.at_word_end()).then(|| Match::whole(c.pos()))
    })
}

pub(crate) fn std_class(s: &str) -> Option<Match> {
    word_ignore_case(s, &["stdClass"])
}

pub(crate) fn literal_constant(s: &str) -> Option<Match> {
    word_ignore_case(s, &["true", "false", "null"])
}

/// `(E|PHP)(_[[:upper:]]+)+\b`, exact case.
pub(crate) fn predefined_constant(s: &str) -> Option<Match> {
    let mut c = Cursor::new(s);
    if !(c.eat('E') || c.eat_str("PHP")) {
        return None;
    }
    let mut segments = 0;
    loop {
        let save = c;
        if c.eat('_') && c.eat_while(char::is_uppercase) > 0 {
            segments += 1;
        } else {
            c = save;
            break;
        }
    }
    (segments > 0 && c.at_word_end()).then(|| Match::whole(c.pos()))
}

/// `${$$name}`
pub(crate) fn brace_variable(s: &str) -> Option<Match> {
    let mut c = Cursor::new(s);
    if !c.eat_str("${") || c.eat_while(|ch| ch == '$') == 0 || !c.eat_ident() || !c.eat('}') {
        return None;
    }
    consumed(&c)
}

/// `$name`, `$$name`, ...
pub(crate) fn variable(s: &str) -> Option<Match> {
    let mut c = Cursor::new(s);
    if c.eat_while(|ch| ch == '$') == 0 || !c.eat_ident() {
        return None;
    }
    consumed(&c)
}

/// `yield from`, as keyword, gap, keyword.
pub(crate) fn yield_from(s: &str) -> Option<Match> {
    let mut c = Cursor::new(s);
    if !c.eat_str_ignore_case("yield") {
        return None;
    }
    let gap = c.eat_while(|ch| matches!(ch, ' ' | '\n' | '\r' | '\t'));
    if gap == 0 || !c.eat_str_ignore_case("from") {
        return None;
    }
    Some(Match::groups(&[5, gap, 4]))
}

/// A possibly qualified identifier, optionally led by `\` or `?`.
pub(crate) fn name(s: &str) -> Option<Match> {
    let mut c = Cursor::new(s);
    if !c.eat('\\') {
        c.eat('?');
    }
    if !eat_qualified_ident(&mut c) {
        return None;
    }
    consumed(&c)
}

pub(crate) fn operator(s: &str) -> Option<Match> {
    let mut c = Cursor::new(s);
    c.eat_while(|ch| "~!%^&*+|:.<>/@-".contains(ch));
    consumed(&c)
}

pub(crate) fn question(s: &str) -> Option<Match> {
    prefix(s, "?")
}

/// `(\d[_\d]*)?\.(\d[_\d]*)?(e[+-]?\d[_\d]*)?`
pub(crate) fn float(s: &str) -> Option<Match> {
    let mut c = Cursor::new(s);
    eat_digits(&mut c);
    if !c.eat('.') {
        return None;
    }
    eat_digits(&mut c);
    let before_exponent = c;
    if c.eat_if(|ch| ch == 'e' || ch == 'E').is_some() {
        c.eat_if(|ch| ch == '+' || ch == '-');
        if !eat_digits(&mut c) {
            c = before_exponent;
        }
    }
    consumed(&c)
}

fn radix_literal(s: &str, marker: &[char], digit: fn(char) -> bool) -> Option<Match> {
    let mut c = Cursor::new(s);
    if !c.eat('0') {
        return None;
    }
    if !marker.is_empty() && c.eat_if(|ch| marker.contains(&ch)).is_none() {
        return None;
    }
    c.eat_if(digit)?;
    c.eat_while(|ch| digit(ch) || ch == '_');
    consumed(&c)
}

pub(crate) fn octal(s: &str) -> Option<Match> {
    radix_literal(s, &[], |ch| matches!(ch, '0'..='7'))
}

pub(crate) fn binary(s: &str) -> Option<Match> {
    radix_literal(s, &['b', 'B'], |ch| matches!(ch, '0' | '1'))
}

pub(crate) fn hex(s: &str) -> Option<Match> {
    radix_literal(s, &['x', 'X'], |ch| ch.is_ascii_hexdigit())
}

pub(crate) fn integer(s: &str) -> Option<Match> {
    let mut c = Cursor::new(s);
    eat_digits(&mut c);
    consumed(&c)
}

/// A `quote`-delimited string with backslash escapes. A backslash never
/// escapes a newline; unterminated strings do not match.
fn quoted(s: &str, quote: char) -> Option<Match> {
    let mut c = Cursor::new(s);
    if !c.eat(quote) {
        return None;
    }
    loop {
        match c.advance()? {
            '\\' => {
                c.eat_if(|ch| ch != '\n')?;
            }
            ch if ch == quote => return consumed(&c),
            _ => {}
        }
    }
}

pub(crate) fn single_quoted(s: &str) -> Option<Match> {
    quoted(s, '\'')
}

pub(crate) fn backtick(s: &str) -> Option<Match> {
    quoted(s, '`')
}

pub(crate) fn double_quote(s: &str) -> Option<Match> {
    prefix(s, "\"")
}

// Double-quoted string mode.

pub(crate) fn string_text(s: &str) -> Option<Match> {
    let mut c = Cursor::new(s);
    c.eat_while(|ch| !matches!(ch, '\\' | '{' | '$' | '"'));
    consumed(&c)
}

/// `\u{1F600}`
pub(crate) fn unicode_escape(s: &str) -> Option<Match> {
    let mut c = Cursor::new(s);
    if !c.eat_str("\\u{") || c.eat_while(|ch| ch.is_ascii_hexdigit()) == 0 || !c.eat('}') {
        return None;
    }
    consumed(&c)
}

/// `\n`, `\$`, `\101`, `\x41`, ...
pub(crate) fn escape(s: &str) -> Option<Match> {
    let mut c = Cursor::new(s);
    if !c.eat('\\') {
        return None;
    }
    if c.eat_if(|ch| "efrntv\"$\\".contains(ch)).is_some() {
        return consumed(&c);
    }
    if c.eat_if(|ch| matches!(ch, '0'..='7')).is_some() {
        for _ in 0..2 {
            c.eat_if(|ch| matches!(ch, '0'..='7'));
        }
        return consumed(&c);
    }
    if c.eat_if(|ch| ch == 'x' || ch == 'X').is_some() {
        c.eat_if(|ch| ch.is_ascii_hexdigit())?;
        c.eat_if(|ch| ch.is_ascii_hexdigit());
        return consumed(&c);
    }
    None
}

/// `$name`, `$name[...]` or `$name->prop` inside a string.
pub(crate) fn interpolated_variable(s: &str) -> Option<Match> {
    let mut c = Cursor::new(s);
    if !c.eat('$') || !c.eat_ident() {
        return None;
    }
    let base = c.pos();
    if let Some(inner) = delimited_non_space(c.rest(), '[', b']') {
        return Some(Match::whole(base + inner + 2));
    }
    let save = c;
    if !(c.eat_str("->") && c.eat_ident()) {
        c = save;
    }
    consumed(&c)
}

pub(crate) fn brace_interpolation_open(s: &str) -> Option<Match> {
    prefix(s, "{${")
}

/// `{` directly before `$`.
pub(crate) fn dollar_interpolation_open(s: &str) -> Option<Match> {
    s.starts_with("{$").then(|| Match::whole(1))
}

/// `{...}` with no whitespace inside.
pub(crate) fn simple_interpolation(s: &str) -> Option<Match> {
    let inner = delimited_non_space(s, '{', b'}')?;
    Some(Match::groups(&[1, inner, 1]))
}

pub(crate) fn string_specials(s: &str) -> Option<Match> {
    let mut c = Cursor::new(s);
    c.eat_while(|ch| matches!(ch, '$' | '{' | '\\'));
    consumed(&c)
}

// Interpolation modes.

pub(crate) fn double_close_brace(s: &str) -> Option<Match> {
    prefix(s, "}}")
}

pub(crate) fn close_brace(s: &str) -> Option<Match> {
    prefix(s, "}")
}

#[cfg(test)]
mod tests;

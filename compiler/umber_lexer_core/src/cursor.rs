//! Char-level cursor over the text remaining at a scan position.
//!
//! Positions are byte offsets relative to the start of the cursor's text and
//! always fall on `char` boundaries. Searches for fixed delimiters go through
//! `memchr`, which matters for long comments and host-language regions.

use memchr::memmem;

use crate::{is_ident_continue, is_ident_start, is_word_char};

/// Cursor over a `&str`.
///
/// Cheap to copy, so a matcher can save a cursor, try an alternative, and
/// restore the saved copy to backtrack.
#[derive(Copy, Clone, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `src`.
    #[inline]
    pub fn new(src: &'a str) -> Self {
        Cursor { src, pos: 0 }
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Text from the current position to the end.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Text from `start` to the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.src[start..self.pos]
    }

    /// The character at the current position.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume one character.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume `c` if it is the current character.
    #[inline]
    pub fn eat(&mut self, c: char) -> bool {
        if self.current() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume the current character if `pred` accepts it.
    #[inline]
    pub fn eat_if(&mut self, pred: impl Fn(char) -> bool) -> Option<char> {
        let c = self.current().filter(|&c| pred(c))?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume `s` if the remaining text starts with it.
    #[inline]
    pub fn eat_str(&mut self, s: &str) -> bool {
        if self.rest().starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    /// Consume `s` ignoring ASCII case. `s` must be ASCII.
    pub fn eat_str_ignore_case(&mut self, s: &str) -> bool {
        debug_assert!(s.is_ascii(), "case-folded literals must be ASCII");
        let rest = self.rest().as_bytes();
        if rest.len() >= s.len() && rest[..s.len()].eq_ignore_ascii_case(s.as_bytes()) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    /// Consume the first of `options` the remaining text starts with,
    /// ignoring ASCII case. Returns the index of the option taken.
    pub fn eat_any_ignore_case(&mut self, options: &[&str]) -> Option<usize> {
        options
            .iter()
            .position(|option| self.eat_str_ignore_case(option))
    }

    /// Advance while `pred` holds. Returns the number of bytes consumed.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let start = self.pos;
        let len = self
            .rest()
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(self.rest().len(), |(i, _)| i);
        self.pos += len;
        self.pos - start
    }

    /// Consume an identifier: a start character, then continue characters.
    pub fn eat_ident(&mut self) -> bool {
        if self.eat_if(is_ident_start).is_none() {
            return false;
        }
        self.eat_while(is_ident_continue);
        true
    }

    /// Whether the current position is a word boundary following a word
    /// character, i.e. the next character (if any) is not a word character.
    #[inline]
    pub fn at_word_end(&self) -> bool {
        !self.current().is_some_and(is_word_char)
    }

    /// Advance to the next `\n` (not consumed) or to EOF.
    pub fn eat_until_newline_or_eof(&mut self) {
        match memchr::memchr(b'\n', self.rest().as_bytes()) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.src.len(),
        }
    }

    /// Byte offset (relative to the current position) of the next
    /// occurrence of `needle`.
    #[inline]
    pub fn find(&self, needle: &str) -> Option<usize> {
        memmem::find(self.rest().as_bytes(), needle.as_bytes())
    }

    /// Advance past the next occurrence of `needle`. Leaves the cursor
    /// untouched and returns `false` when there is none.
    pub fn eat_through(&mut self, needle: &str) -> bool {
        match self.find(needle) {
            Some(offset) => {
                self.pos += offset + needle.len();
                true
            }
            None => false,
        }
    }

    /// Advance to the next occurrence of `needle` (not consumed), or to EOF.
    pub fn eat_until_or_eof(&mut self, needle: &str) {
        match self.find(needle) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.src.len(),
        }
    }
}

#[cfg(test)]
mod tests;

//! The scan loop.
//!
//! [`Tokens`] pulls one rule application at a time: find the first rule of
//! the current mode that matches at the cursor, let its action emit tokens
//! and update the mode stack or disambiguator, advance past the match.
//! Positions no rule matches become one-character `Error` tokens, so every
//! input scans to the end and the emitted texts concatenate back to it.

use std::collections::VecDeque;

use umber_ir::{Span, Token, TokenKind};

use crate::builtins::BuiltinSet;
use crate::context::Disambiguator;
use crate::host::HostLexer;
use crate::mode::{Mode, ModeStack};
use crate::options::StartInline;
use crate::rules;

/// Per-scan mutable state, kept between scans so a lexer can be reused.
#[derive(Clone, Debug, Default)]
pub(crate) struct ScanState {
    pub(crate) modes: ModeStack,
    pub(crate) context: Disambiguator,
}

impl ScanState {
    pub(crate) fn reset(&mut self, start: StartInline) {
        self.modes.reset();
        self.context.reset();
        match start {
            StartInline::Code => {
                self.modes.push(Mode::EmbeddedHost);
                self.modes.push(Mode::Code);
            }
            StartInline::Host => self.modes.push(Mode::EmbeddedHost),
            StartInline::Guess => {}
        }
    }
}

fn make_token(source: &str, kind: TokenKind, start: usize, end: usize) -> Token<'_> {
    Token::new(kind, &source[start..end], Span::saturating(start..end))
}

/// Iterator over the unmerged tokens of one input.
pub struct Tokens<'l, 'src> {
    source: &'src str,
    pos: usize,
    state: &'l mut ScanState,
    builtins: Option<&'l BuiltinSet>,
    host: &'l mut dyn HostLexer,
    pending: VecDeque<Token<'src>>,
}

impl<'l, 'src> Tokens<'l, 'src> {
    pub(crate) fn new(
        source: &'src str,
        state: &'l mut ScanState,
        builtins: Option<&'l BuiltinSet>,
        host: &'l mut dyn HostLexer,
    ) -> Self {
        Tokens {
            source,
            pos: 0,
            state,
            builtins,
            host,
            pending: VecDeque::new(),
        }
    }

    /// Modes active at the current position, bottom first.
    pub fn modes(&self) -> &[Mode] {
        self.state.modes.as_slice()
    }

    /// Apply one rule, or emit one `Error` character.
    fn step(&mut self) {
        let source = self.source;
        let rest = &source[self.pos..];
        let mode = self.state.modes.top();
        for rule in rules::rules_for(mode) {
            let Some(m) = (rule.pattern)(rest) else {
                continue;
            };
            let depth = self.state.modes.depth();
            let end = self.pos + m.len;
            let mut step = Step {
                source,
                end,
                cursor: self.pos,
                groups: &m.groups,
                state: &mut *self.state,
                builtins: self.builtins,
                host: &mut *self.host,
                out: &mut self.pending,
            };
            rule.action.apply(&mut step);
            step.finish();

            if m.len == 0 && depth == self.state.modes.depth() && mode == self.state.modes.top() {
                continue;
            }
            tracing::trace!(rule = rule.name, %mode, len = m.len, "rule matched");
            self.pos = end;
            return;
        }

        let len = rest.chars().next().map_or(rest.len(), char::len_utf8);
        tracing::trace!(%mode, offset = self.pos, "no rule matched");
        self.pending
            .push_back(make_token(source, TokenKind::Error, self.pos, self.pos + len));
        self.pos += len;
    }
}

impl<'src> Iterator for Tokens<'_, 'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.pos >= self.source.len() {
                return None;
            }
            self.step();
        }
    }
}

/// What a rule action sees: the match, and the state it may change.
///
/// Tokens are emitted left to right from the start of the match; whatever
/// an action leaves unemitted becomes `Text` when the step finishes.
pub(crate) struct Step<'a, 'src> {
    source: &'src str,
    end: usize,
    cursor: usize,
    groups: &'a [usize],
    state: &'a mut ScanState,
    builtins: Option<&'a BuiltinSet>,
    host: &'a mut dyn HostLexer,
    out: &'a mut VecDeque<Token<'src>>,
}

impl<'src> Step<'_, 'src> {
    /// The not yet emitted part of the match.
    pub(crate) fn text(&self) -> &'src str {
        let source = self.source;
        &source[self.cursor..self.end]
    }

    fn emit(&mut self, kind: TokenKind, len: usize) {
        let end = (self.cursor + len).min(self.end);
        if end == self.cursor {
            return;
        }
        self.out
            .push_back(make_token(self.source, kind, self.cursor, end));
        self.cursor = end;
    }

    /// The rest of the match as one token.
    pub(crate) fn token(&mut self, kind: TokenKind) {
        self.emit(kind, self.end - self.cursor);
    }

    /// One token per capture group.
    pub(crate) fn groups(&mut self, kinds: &[TokenKind]) {
        let groups = self.groups;
        for (&kind, &len) in kinds.iter().zip(groups) {
            self.emit(kind, len);
        }
    }

    /// Hand the rest of the match to the host lexer.
    pub(crate) fn delegate(&mut self) {
        let region = self.text();
        if region.is_empty() {
            return;
        }
        let source = self.source;
        let end = self.end;
        let out = &mut *self.out;
        let mut at = self.cursor;
        let mut valid = true;
        self.host.lex(region, &mut |kind, len| {
            let stop = at.saturating_add(len);
            if !valid || stop > end || !source.is_char_boundary(stop) {
                valid = false;
                return;
            }
            if len > 0 {
                out.push_back(make_token(source, kind, at, stop));
                at = stop;
            }
        });
        self.cursor = at;
    }

    pub(crate) fn push(&mut self, mode: Mode) {
        self.state.modes.push(mode);
    }

    pub(crate) fn pop(&mut self) {
        self.state.modes.pop();
    }

    pub(crate) fn context(&mut self) -> &mut Disambiguator {
        &mut self.state.context
    }

    /// Classify the matched identifier.
    pub(crate) fn classify(&mut self) -> TokenKind {
        let text = self.text();
        self.state.context.classify(text, self.builtins)
    }

    fn finish(&mut self) {
        self.token(TokenKind::Text);
    }
}

#[cfg(test)]
mod tests;

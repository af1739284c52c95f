//! Scanner modes and the mode stack.

use std::fmt;

/// A lexical mode. Each mode has its own rule table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Nothing scanned yet; decides between host text and inline code.
    Root,
    /// Host-language text outside `<?php ... ?>`.
    EmbeddedHost,
    /// PHP code.
    Code,
    /// Inside `"..."`.
    DoubleQuotedString,
    /// Inside `{${ ... }}` in a double-quoted string.
    BraceInterpolation,
    /// Inside `{$ ... }` in a double-quoted string.
    DollarInterpolation,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Root => "root",
            Mode::EmbeddedHost => "embedded-host",
            Mode::Code => "code",
            Mode::DoubleQuotedString => "double-quoted-string",
            Mode::BraceInterpolation => "brace-interpolation",
            Mode::DollarInterpolation => "dollar-interpolation",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stack of active modes. Never empty: `Root` sits at the bottom and cannot
/// be popped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModeStack {
    stack: Vec<Mode>,
}

impl Default for ModeStack {
    fn default() -> Self {
        ModeStack::new()
    }
}

impl ModeStack {
    pub fn new() -> Self {
        ModeStack {
            stack: vec![Mode::Root],
        }
    }

    /// The mode the scanner is currently in.
    pub fn top(&self) -> Mode {
        self.stack.last().copied().unwrap_or(Mode::Root)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn push(&mut self, mode: Mode) {
        tracing::trace!(from = %self.top(), to = %mode, depth = self.stack.len() + 1, "push mode");
        self.stack.push(mode);
    }

    /// Pop the top mode. Returns `None`, leaving the stack untouched, when
    /// only `Root` remains.
    pub fn pop(&mut self) -> Option<Mode> {
        if self.stack.len() <= 1 {
            tracing::trace!("pop at root ignored");
            return None;
        }
        let popped = self.stack.pop();
        tracing::trace!(popped = ?popped, to = %self.top(), "pop mode");
        popped
    }

    /// Back to just `Root`.
    pub fn reset(&mut self) {
        self.stack.truncate(1);
        if self.stack.is_empty() {
            self.stack.push(Mode::Root);
        }
    }

    pub fn as_slice(&self) -> &[Mode] {
        &self.stack
    }
}

#[cfg(test)]
mod tests;

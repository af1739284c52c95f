//! The public lexer.

use umber_ir::Token;

use crate::builtins::{BuiltinRegistry, BuiltinSet};
use crate::host::{HostLexer, PlainText};
use crate::options::LexerOptions;
use crate::scanner::{ScanState, Tokens};

/// A reusable PHP lexer.
///
/// Each call to [`tokenize`](PhpLexer::tokenize) or [`lex`](PhpLexer::lex)
/// starts from a clean state, so one lexer can serve many inputs.
pub struct PhpLexer {
    options: LexerOptions,
    builtins: Option<BuiltinSet>,
    host: Box<dyn HostLexer>,
    state: ScanState,
}

impl Default for PhpLexer {
    fn default() -> Self {
        PhpLexer::new(LexerOptions::default())
    }
}

impl std::fmt::Debug for PhpLexer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhpLexer")
            .field("options", &self.options)
            .field("builtins", &self.builtins.as_ref().map(BuiltinSet::len))
            .finish_non_exhaustive()
    }
}

impl PhpLexer {
    /// A lexer using the bundled builtin table and a plain-text host.
    pub fn new(options: LexerOptions) -> Self {
        PhpLexer::with_registry(options, BuiltinRegistry::bundled())
    }

    pub fn with_registry(options: LexerOptions, registry: &BuiltinRegistry) -> Self {
        let builtins = options
            .function_name_highlighting
            .then(|| registry.filtered(&options.disabled_modules));
        let mut state = ScanState::default();
        state.reset(options.start_inline);
        PhpLexer {
            options,
            builtins,
            host: Box::new(PlainText),
            state,
        }
    }

    /// Use `host` for text outside PHP tags.
    #[must_use]
    pub fn with_host(mut self, host: impl HostLexer + 'static) -> Self {
        self.host = Box::new(host);
        self
    }

    pub fn options(&self) -> &LexerOptions {
        &self.options
    }

    /// Forget everything from the previous input.
    pub fn reset(&mut self) {
        self.state.reset(self.options.start_inline);
        self.host.reset();
    }

    /// Unmerged tokens of `source`, produced lazily.
    pub fn lex<'l, 'src>(&'l mut self, source: &'src str) -> Tokens<'l, 'src> {
        self.reset();
        Tokens::new(
            source,
            &mut self.state,
            self.builtins.as_ref(),
            &mut *self.host,
        )
    }

    /// Tokens of `source` with adjacent same-kind tokens merged.
    pub fn tokenize<'src>(&mut self, source: &'src str) -> Vec<Token<'src>> {
        let _span = tracing::debug_span!("tokenize", len = source.len()).entered();
        let tokens: Vec<Token<'src>> = Coalesce::new(source, self.lex(source)).collect();
        tracing::debug!(len = source.len(), tokens = tokens.len(), "tokenized");
        tokens
    }

    /// Tokens of `source` exactly as the rules emitted them.
    pub fn tokenize_raw<'src>(&mut self, source: &'src str) -> Vec<Token<'src>> {
        let tokens: Vec<Token<'src>> = self.lex(source).collect();
        tracing::debug!(len = source.len(), tokens = tokens.len(), "tokenized (raw)");
        tokens
    }
}

/// Tokenize `source` with default options.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    PhpLexer::default().tokenize(source)
}

/// Merges runs of adjacent tokens of the same kind, holding back at most
/// one token.
///
/// Tokens are joined by span. A run is left unmerged when the joined span
/// does not slice `source` into exactly the two texts, so tokens that did
/// not come from `source` pass through unchanged.
pub struct Coalesce<'src, I> {
    source: &'src str,
    inner: I,
    held: Option<Token<'src>>,
}

impl<'src, I: Iterator<Item = Token<'src>>> Coalesce<'src, I> {
    pub fn new(source: &'src str, tokens: I) -> Self {
        Coalesce {
            source,
            inner: tokens,
            held: None,
        }
    }

    fn join(&self, first: &Token<'src>, second: &Token<'src>) -> Option<Token<'src>> {
        if first.kind != second.kind || !first.span.is_adjacent_to(second.span) {
            return None;
        }
        let span = first.span.merge(second.span);
        let text = self.source.get(span.to_range())?;
        let exact = text.len() == first.text.len() + second.text.len()
            && text.starts_with(first.text)
            && text.ends_with(second.text);
        exact.then(|| Token::new(first.kind, text, span))
    }
}

impl<'src, I: Iterator<Item = Token<'src>>> Iterator for Coalesce<'src, I> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        loop {
            let Some(next) = self.inner.next() else {
                return self.held.take();
            };
            let Some(held) = self.held.take() else {
                self.held = Some(next);
                continue;
            };
            if let Some(joined) = self.join(&held, &next) {
                self.held = Some(joined);
            } else {
                self.held = Some(next);
                return Some(held);
            }
        }
    }
}

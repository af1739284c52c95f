//! Identifier classification context.
//!
//! PHP identifiers mean different things depending on the statement they sit
//! in: the name after `class` is a class, the one after `function` is a
//! function unless a `(` shows the function to be anonymous, names in a `use`
//! statement are namespace paths. The [`Disambiguator`] tracks just enough of
//! the current statement to tell these apart. It is owned by one scan and
//! reset at statement boundaries.

use smallvec::SmallVec;
use umber_ir::{KeywordKind, NameKind, TokenKind};

use crate::builtins::BuiltinSet;
use crate::keywords;

/// The kind of statement whose identifiers are being classified.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StatementKind {
    #[default]
    None,
    Use,
    ClassDecl,
    Const,
    Function,
}

const OTHER: TokenKind = TokenKind::Name(NameKind::Other);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disambiguator {
    pending: StatementKind,
    default_kind: TokenKind,
    deferred: SmallVec<[TokenKind; 4]>,
}

impl Default for Disambiguator {
    fn default() -> Self {
        Disambiguator::new()
    }
}

impl Disambiguator {
    pub fn new() -> Self {
        Disambiguator {
            pending: StatementKind::None,
            default_kind: OTHER,
            deferred: SmallVec::new(),
        }
    }

    pub fn statement(&self) -> StatementKind {
        self.pending
    }

    /// Kind given to an identifier when nothing is deferred.
    pub fn default_kind(&self) -> TokenKind {
        self.default_kind
    }

    /// Deferred classifications, bottom first.
    pub fn deferred(&self) -> &[TokenKind] {
        &self.deferred
    }

    /// Forget the current statement.
    pub fn reset(&mut self) {
        if self.pending != StatementKind::None {
            tracing::trace!(from = ?self.pending, "statement reset");
        }
        self.pending = StatementKind::None;
        self.default_kind = OTHER;
        self.deferred.clear();
    }

    fn set(&mut self, statement: StatementKind, default_kind: TokenKind, deferred: &[TokenKind]) {
        tracing::trace!(from = ?self.pending, to = ?statement, "statement");
        self.pending = statement;
        self.default_kind = default_kind;
        self.deferred.clear();
        self.deferred.extend_from_slice(deferred);
    }

    pub fn push(&mut self, kind: TokenKind) {
        self.deferred.push(kind);
    }

    /// Take the most recent deferred classification, or the default.
    pub fn pop(&mut self) -> TokenKind {
        self.deferred.pop().unwrap_or(self.default_kind)
    }

    pub fn clear_deferred(&mut self) {
        self.deferred.clear();
    }

    /// `;` or `{`.
    pub fn on_statement_boundary(&mut self) {
        self.reset();
    }

    /// `,`: each item of a list starts over; a function parameter list
    /// expects a type hint next.
    pub fn on_comma(&mut self) {
        self.deferred.clear();
        if self.pending == StatementKind::Function {
            self.push(TokenKind::Name(NameKind::Class));
        }
    }

    /// `(`: a tentative function name that was never used belonged to an
    /// anonymous function; parameters may start with a type hint.
    pub fn on_open_paren(&mut self) {
        if self.pending == StatementKind::Function {
            self.pop();
            self.push(TokenKind::Name(NameKind::Class));
        }
    }

    /// `)`: a return type may follow.
    pub fn on_close_paren(&mut self) {
        if self.pending == StatementKind::Function {
            self.push(TokenKind::Name(NameKind::Class));
        }
    }

    /// `=`: a default value, not a type hint. Only a function statement
    /// carries pending hints.
    pub fn on_equals(&mut self) {
        if self.pending == StatementKind::Function {
            self.pop();
        }
    }

    /// Classify an identifier lexeme (optionally prefixed by `\` or `?`).
    ///
    /// `builtins` is `None` when function-name highlighting is off.
    pub fn classify(&mut self, lexeme: &str, builtins: Option<&BuiltinSet>) -> TokenKind {
        let name = lexeme.to_lowercase();
        match name.as_str() {
            "use" => {
                self.set(StatementKind::Use, TokenKind::Name(NameKind::Namespace), &[]);
                return TokenKind::Keyword(KeywordKind::Namespace);
            }
            n if keywords::is_declaration_keyword(n) => {
                self.set(StatementKind::ClassDecl, TokenKind::Name(NameKind::Class), &[]);
                return TokenKind::Keyword(KeywordKind::Declaration);
            }
            "const" => {
                if self.pending == StatementKind::None {
                    self.set(StatementKind::Const, TokenKind::Name(NameKind::Constant), &[]);
                } else {
                    self.push(self.deferred_for(NameKind::Constant));
                }
                return TokenKind::Keyword(KeywordKind::Plain);
            }
            "function" => {
                if self.pending == StatementKind::None {
                    self.set(
                        StatementKind::Function,
                        TokenKind::Name(NameKind::Constant),
                        &[TokenKind::Name(NameKind::Function)],
                    );
                } else {
                    self.push(self.deferred_for(NameKind::Function));
                }
                return TokenKind::Keyword(KeywordKind::Plain);
            }
            _ => {}
        }

        if keywords::is_namespace_keyword(&name) {
            TokenKind::Keyword(KeywordKind::Namespace)
        } else if keywords::is_keyword(&name) {
            TokenKind::Keyword(KeywordKind::Plain)
        } else if self.pending == StatementKind::None
            && builtins.is_some_and(|set| set.contains(&name))
        {
            TokenKind::Name(NameKind::Builtin)
        } else {
            self.pop()
        }
    }

    /// In `use function a\b;` the imported path is still a namespace path.
    fn deferred_for(&self, kind: NameKind) -> TokenKind {
        if self.pending == StatementKind::Use {
            TokenKind::Name(NameKind::Namespace)
        } else {
            TokenKind::Name(kind)
        }
    }
}

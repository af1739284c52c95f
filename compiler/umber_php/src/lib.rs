//! Umber PHP lexer.
//!
//! Splits PHP source (optionally embedded in a host document such as HTML)
//! into classified tokens for syntax highlighting. Scanning never fails:
//! every input produces tokens whose texts concatenate back to the input.
//!
//! # Architecture
//!
//! - rule tables: an ordered (pattern, action) list per mode; first match wins
//! - [`ModeStack`]: host text, code, strings and interpolations nest on an
//!   explicit stack
//! - [`Disambiguator`]: statement context that decides whether an identifier
//!   is a class, function, constant, namespace or builtin
//! - [`BuiltinRegistry`]: builtin functions by module, shared read-only
//! - [`PhpLexer`]: drives a scan and merges adjacent same-kind tokens
//!
//! ```
//! use umber_ir::{KeywordKind, NameKind, TokenKind};
//! use umber_php::{LexerOptions, PhpLexer};
//!
//! let mut lexer = PhpLexer::new(LexerOptions::default().start_inline(true));
//! let kinds: Vec<TokenKind> = lexer.tokenize("class A {}").iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Keyword(KeywordKind::Declaration),
//!         TokenKind::Text,
//!         TokenKind::Name(NameKind::Class),
//!         TokenKind::Text,
//!         TokenKind::Punctuation,
//!     ]
//! );
//! ```

mod builtins;
mod context;
mod detect;
mod host;
mod keywords;
mod lexer;
mod metadata;
mod mode;
mod options;
mod patterns;
mod rules;
mod scanner;

pub use builtins::{BuiltinRegistry, BuiltinSet, BuiltinSource, BundledBuiltins};
pub use context::{Disambiguator, StatementKind};
pub use detect::{detect, looks_like_hack};
pub use host::{HostLexer, PlainText};
pub use lexer::{tokenize, Coalesce, PhpLexer};
pub use metadata::{LexerInfo, PHP};
pub use mode::{Mode, ModeStack};
pub use options::{LexerOptions, OptionError, StartInline};
pub use scanner::Tokens;

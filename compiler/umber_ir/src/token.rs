//! Token types produced by the highlighting lexers.
//!
//! The taxonomy is closed: every lexer maps each slice of its input to one
//! of these kinds. Kinds are hierarchical (`Keyword.Declaration` is a kind of
//! `Keyword`); the hierarchy is encoded as sub-kind enums so a `match` on
//! [`TokenKind`] can stop at whichever level it cares about.

use std::fmt;

use crate::Span;

/// Comment sub-kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CommentKind {
    Single,
    Multiline,
    Doc,
    /// Preprocessor-like markers, e.g. code-region delimiters.
    Preproc,
}

/// Keyword sub-kinds. `Plain` is the bare `Keyword` category.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum KeywordKind {
    Plain,
    Namespace,
    Declaration,
    Type,
    Constant,
}

/// Name sub-kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NameKind {
    Variable,
    Function,
    Class,
    Namespace,
    Constant,
    Attribute,
    Builtin,
    /// A name no context could classify.
    Other,
}

/// Numeric literal sub-kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NumberKind {
    Integer,
    Float,
    Hex,
    Oct,
    Bin,
}

/// String literal sub-kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StringKind {
    Single,
    Double,
    Backtick,
    Heredoc,
    Escape,
    /// Interpolation markers (`{`, `}` around embedded expressions).
    Interpol,
}

/// Kind of a highlighted token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Whitespace and host-language text passed through verbatim.
    Text,
    /// A character no rule recognized.
    Error,
    Comment(CommentKind),
    Keyword(KeywordKind),
    Name(NameKind),
    Operator,
    Punctuation,
    Number(NumberKind),
    Str(StringKind),
}

impl TokenKind {
    /// Dotted, fully qualified kind name, e.g. `Keyword.Declaration`.
    pub fn qualname(self) -> &'static str {
        match self {
            TokenKind::Text => "Text",
            TokenKind::Error => "Error",
            TokenKind::Comment(kind) => match kind {
                CommentKind::Single => "Comment.Single",
                CommentKind::Multiline => "Comment.Multiline",
                CommentKind::Doc => "Comment.Doc",
                CommentKind::Preproc => "Comment.Preproc",
            },
            TokenKind::Keyword(kind) => match kind {
                KeywordKind::Plain => "Keyword",
                KeywordKind::Namespace => "Keyword.Namespace",
                KeywordKind::Declaration => "Keyword.Declaration",
                KeywordKind::Type => "Keyword.Type",
                KeywordKind::Constant => "Keyword.Constant",
            },
            TokenKind::Name(kind) => match kind {
                NameKind::Variable => "Name.Variable",
                NameKind::Function => "Name.Function",
                NameKind::Class => "Name.Class",
                NameKind::Namespace => "Name.Namespace",
                NameKind::Constant => "Name.Constant",
                NameKind::Attribute => "Name.Attribute",
                NameKind::Builtin => "Name.Builtin",
                NameKind::Other => "Name.Other",
            },
            TokenKind::Operator => "Operator",
            TokenKind::Punctuation => "Punctuation",
            TokenKind::Number(kind) => match kind {
                NumberKind::Integer => "Literal.Number.Integer",
                NumberKind::Float => "Literal.Number.Float",
                NumberKind::Hex => "Literal.Number.Hex",
                NumberKind::Oct => "Literal.Number.Oct",
                NumberKind::Bin => "Literal.Number.Bin",
            },
            TokenKind::Str(kind) => match kind {
                StringKind::Single => "Literal.String.Single",
                StringKind::Double => "Literal.String.Double",
                StringKind::Backtick => "Literal.String.Backtick",
                StringKind::Heredoc => "Literal.String.Heredoc",
                StringKind::Escape => "Literal.String.Escape",
                StringKind::Interpol => "Literal.String.Interpol",
            },
        }
    }

    /// Short CSS-class style name used by HTML formatters, e.g. `kd`.
    ///
    /// `Text` has the empty short name: formatters leave it unstyled.
    pub fn short_name(self) -> &'static str {
        match self {
            TokenKind::Text => "",
            TokenKind::Error => "err",
            TokenKind::Comment(kind) => match kind {
                CommentKind::Single => "c1",
                CommentKind::Multiline => "cm",
                CommentKind::Doc => "cd",
                CommentKind::Preproc => "cp",
            },
            TokenKind::Keyword(kind) => match kind {
                KeywordKind::Plain => "k",
                KeywordKind::Namespace => "kn",
                KeywordKind::Declaration => "kd",
                KeywordKind::Type => "kt",
                KeywordKind::Constant => "kc",
            },
            TokenKind::Name(kind) => match kind {
                NameKind::Variable => "nv",
                NameKind::Function => "nf",
                NameKind::Class => "nc",
                NameKind::Namespace => "nn",
                NameKind::Constant => "no",
                NameKind::Attribute => "na",
                NameKind::Builtin => "nb",
                NameKind::Other => "nx",
            },
            TokenKind::Operator => "o",
            TokenKind::Punctuation => "p",
            TokenKind::Number(kind) => match kind {
                NumberKind::Integer => "mi",
                NumberKind::Float => "mf",
                NumberKind::Hex => "mh",
                NumberKind::Oct => "mo",
                NumberKind::Bin => "mb",
            },
            TokenKind::Str(kind) => match kind {
                StringKind::Single => "s1",
                StringKind::Double => "s2",
                StringKind::Backtick => "sb",
                StringKind::Heredoc => "sh",
                StringKind::Escape => "se",
                StringKind::Interpol => "si",
            },
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.qualname())
    }
}

/// A token: its kind, the exact source text it covers, and where.
///
/// `text` is always `&source[span]`, so joining the texts of a token stream
/// yields the lexed source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind, text: &'src str, span: Span) -> Self {
        Token { kind, text, span }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}) @ {}", self.kind, self.text, self.span)
    }
}

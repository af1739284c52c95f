//! Per-mode rule tables.
//!
//! At each position the scanner tries the rules of the current mode in
//! order and applies the first one that matches. The interpolation modes
//! add their closer in front of the whole code table.

use umber_ir::{CommentKind, KeywordKind, NameKind, NumberKind, StringKind, TokenKind};

use crate::mode::Mode;
use crate::patterns::{self, Pattern};
use crate::scanner::Step;

/// What a matched rule does.
#[derive(Copy, Clone)]
pub(crate) enum Action {
    /// One token for the whole match.
    Token(TokenKind),
    /// One token per capture group.
    Groups(&'static [TokenKind]),
    /// One token, then enter a mode.
    Push(TokenKind, Mode),
    /// One token, then leave the current mode.
    Pop(TokenKind),
    /// Anything else.
    Run(fn(&mut Step<'_, '_>)),
}

impl Action {
    pub(crate) fn apply(self, step: &mut Step<'_, '_>) {
        match self {
            Action::Token(kind) => step.token(kind),
            Action::Groups(kinds) => step.groups(kinds),
            Action::Push(kind, mode) => {
                step.token(kind);
                step.push(mode);
            }
            Action::Pop(kind) => {
                step.token(kind);
                step.pop();
            }
            Action::Run(run) => run(step),
        }
    }
}

pub(crate) struct Rule {
    /// Shows up in trace logs.
    pub(crate) name: &'static str,
    pub(crate) pattern: Pattern,
    pub(crate) action: Action,
}

const fn rule(name: &'static str, pattern: Pattern, action: Action) -> Rule {
    Rule {
        name,
        pattern,
        action,
    }
}

/// Rules consulted in `mode`, in priority order.
pub(crate) fn rules_for(mode: Mode) -> impl Iterator<Item = &'static Rule> {
    let (own, fallback): (&'static [Rule], &'static [Rule]) = match mode {
        Mode::Root => (ROOT, &[]),
        Mode::EmbeddedHost => (HOST, &[]),
        Mode::Code => (CODE, &[]),
        Mode::DoubleQuotedString => (DOUBLE_QUOTED, &[]),
        Mode::BraceInterpolation => (BRACE_INTERPOLATION, CODE),
        Mode::DollarInterpolation => (DOLLAR_INTERPOLATION, CODE),
    };
    own.iter().chain(fallback)
}

const PREPROC: TokenKind = TokenKind::Comment(CommentKind::Preproc);
const PUNCTUATION: TokenKind = TokenKind::Punctuation;
const OPERATOR: TokenKind = TokenKind::Operator;
const DOUBLE: TokenKind = TokenKind::Str(StringKind::Double);
const INTERPOL: TokenKind = TokenKind::Str(StringKind::Interpol);
const VARIABLE: TokenKind = TokenKind::Name(NameKind::Variable);

static ROOT: &[Rule] = &[
    rule("space-before-tag", patterns::space_before_tag, Action::Run(enter_host)),
    rule("text-before-open-tag", patterns::text_before_open_tag, Action::Run(enter_host)),
    rule("inline-code", patterns::empty, Action::Run(enter_code)),
];

static HOST: &[Rule] = &[
    rule("open-tag", patterns::open_tag, Action::Push(PREPROC, Mode::Code)),
    rule("host-text", patterns::host_text, Action::Run(delegate)),
];

static CODE: &[Rule] = &[
    rule("close-tag", patterns::close_tag, Action::Run(close_tag)),
    rule(
        "heredoc",
        patterns::heredoc,
        Action::Token(TokenKind::Str(StringKind::Heredoc)),
    ),
    rule("whitespace", patterns::whitespace, Action::Token(TokenKind::Text)),
    rule(
        "hash-comment",
        patterns::hash_comment,
        Action::Token(TokenKind::Comment(CommentKind::Single)),
    ),
    rule(
        "line-comment",
        patterns::line_comment,
        Action::Token(TokenKind::Comment(CommentKind::Single)),
    ),
    rule(
        "doc-comment",
        patterns::doc_comment,
        Action::Token(TokenKind::Comment(CommentKind::Doc)),
    ),
    rule(
        "block-comment",
        patterns::block_comment,
        Action::Token(TokenKind::Comment(CommentKind::Multiline)),
    ),
    rule(
        "member-access",
        patterns::member_access,
        Action::Groups(&[OPERATOR, TokenKind::Text, TokenKind::Name(NameKind::Attribute)]),
    ),
    rule(
        "type-keyword",
        patterns::type_keyword,
        Action::Token(TokenKind::Keyword(KeywordKind::Type)),
    ),
    rule("equals", patterns::equals, Action::Run(equals)),
    rule(
        "namespace-brace",
        patterns::namespace_brace,
        Action::Groups(&[TokenKind::Name(NameKind::Namespace), PUNCTUATION]),
    ),
    rule("statement-end", patterns::statement_end, Action::Run(statement_end)),
    rule("comma", patterns::comma, Action::Run(comma)),
    rule("open-paren", patterns::open_paren, Action::Run(open_paren)),
    rule("close-paren", patterns::close_paren, Action::Run(close_paren)),
    rule("bracket", patterns::bracket, Action::Token(PUNCTUATION)),
    rule(
        "std-class",
        patterns::std_class,
        Action::Token(TokenKind::Name(NameKind::Class)),
    ),
    rule(
        "literal-constant",
        patterns::literal_constant,
        Action::Token(TokenKind::Keyword(KeywordKind::Constant)),
    ),
    rule(
        "predefined-constant",
        patterns::predefined_constant,
        Action::Token(TokenKind::Keyword(KeywordKind::Constant)),
    ),
    rule("brace-variable", patterns::brace_variable, Action::Token(VARIABLE)),
    rule("variable", patterns::variable, Action::Token(VARIABLE)),
    rule(
        "yield-from",
        patterns::yield_from,
        Action::Groups(&[
            TokenKind::Keyword(KeywordKind::Plain),
            TokenKind::Text,
            TokenKind::Keyword(KeywordKind::Plain),
        ]),
    ),
    rule("name", patterns::name, Action::Run(identifier)),
    rule("operator", patterns::operator, Action::Token(OPERATOR)),
    rule("question", patterns::question, Action::Token(OPERATOR)),
    rule(
        "float",
        patterns::float,
        Action::Token(TokenKind::Number(NumberKind::Float)),
    ),
    rule(
        "octal",
        patterns::octal,
        Action::Token(TokenKind::Number(NumberKind::Oct)),
    ),
    rule(
        "binary",
        patterns::binary,
        Action::Token(TokenKind::Number(NumberKind::Bin)),
    ),
    rule("hex", patterns::hex, Action::Token(TokenKind::Number(NumberKind::Hex))),
    rule(
        "integer",
        patterns::integer,
        Action::Token(TokenKind::Number(NumberKind::Integer)),
    ),
    rule(
        "single-quoted",
        patterns::single_quoted,
        Action::Token(TokenKind::Str(StringKind::Single)),
    ),
    rule(
        "backtick",
        patterns::backtick,
        Action::Token(TokenKind::Str(StringKind::Backtick)),
    ),
    rule(
        "double-quote",
        patterns::double_quote,
        Action::Push(DOUBLE, Mode::DoubleQuotedString),
    ),
];

static DOUBLE_QUOTED: &[Rule] = &[
    rule("close-quote", patterns::double_quote, Action::Pop(DOUBLE)),
    rule("string-text", patterns::string_text, Action::Token(DOUBLE)),
    rule(
        "unicode-escape",
        patterns::unicode_escape,
        Action::Token(TokenKind::Str(StringKind::Escape)),
    ),
    rule(
        "escape",
        patterns::escape,
        Action::Token(TokenKind::Str(StringKind::Escape)),
    ),
    rule(
        "interpolated-variable",
        patterns::interpolated_variable,
        Action::Token(VARIABLE),
    ),
    rule(
        "brace-interpolation",
        patterns::brace_interpolation_open,
        Action::Push(INTERPOL, Mode::BraceInterpolation),
    ),
    rule(
        "dollar-interpolation",
        patterns::dollar_interpolation_open,
        Action::Push(INTERPOL, Mode::DollarInterpolation),
    ),
    rule(
        "simple-interpolation",
        patterns::simple_interpolation,
        Action::Groups(&[INTERPOL, VARIABLE, INTERPOL]),
    ),
    rule("string-specials", patterns::string_specials, Action::Token(DOUBLE)),
];

static BRACE_INTERPOLATION: &[Rule] = &[rule(
    "close-brace-interpolation",
    patterns::double_close_brace,
    Action::Pop(INTERPOL),
)];

static DOLLAR_INTERPOLATION: &[Rule] = &[rule(
    "close-dollar-interpolation",
    patterns::close_brace,
    Action::Pop(INTERPOL),
)];

fn enter_host(step: &mut Step<'_, '_>) {
    step.delegate();
    step.push(Mode::EmbeddedHost);
}

fn enter_code(step: &mut Step<'_, '_>) {
    step.push(Mode::EmbeddedHost);
    step.push(Mode::Code);
}

fn delegate(step: &mut Step<'_, '_>) {
    step.delegate();
}

fn close_tag(step: &mut Step<'_, '_>) {
    step.context().reset();
    step.token(PREPROC);
    step.pop();
}

fn equals(step: &mut Step<'_, '_>) {
    step.token(OPERATOR);
    step.context().on_equals();
}

fn statement_end(step: &mut Step<'_, '_>) {
    step.token(PUNCTUATION);
    step.context().on_statement_boundary();
}

fn comma(step: &mut Step<'_, '_>) {
    step.token(PUNCTUATION);
    step.context().on_comma();
}

fn open_paren(step: &mut Step<'_, '_>) {
    step.token(PUNCTUATION);
    step.context().on_open_paren();
}

fn close_paren(step: &mut Step<'_, '_>) {
    step.token(PUNCTUATION);
    step.context().on_close_paren();
}

fn identifier(step: &mut Step<'_, '_>) {
    let kind = step.classify();
    step.token(kind);
}

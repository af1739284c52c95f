use pretty_assertions::assert_eq;
use umber_ir::{CommentKind, KeywordKind, NameKind, NumberKind};

use super::*;
use crate::host::PlainText;

const PREPROC: TokenKind = TokenKind::Comment(CommentKind::Preproc);
const TEXT: TokenKind = TokenKind::Text;

fn scan<'s>(
    source: &'s str,
    start: StartInline,
    host: &mut dyn HostLexer,
) -> Vec<(TokenKind, &'s str)> {
    let mut state = ScanState::default();
    state.reset(start);
    Tokens::new(source, &mut state, None, host)
        .map(|t| (t.kind, t.text))
        .collect()
}

/// Reports fixed lengths regardless of the region.
struct Scripted(Vec<(TokenKind, usize)>);

impl HostLexer for Scripted {
    fn lex(&mut self, _text: &str, emit: &mut dyn FnMut(TokenKind, usize)) {
        for &(kind, len) in &self.0 {
            emit(kind, len);
        }
    }
}

#[test]
fn unmatched_character_becomes_error() {
    assert_eq!(
        scan("'open", StartInline::Code, &mut PlainText),
        [(TokenKind::Error, "'"), (TokenKind::Name(NameKind::Other), "open")]
    );
}

#[test]
fn error_token_covers_a_whole_character() {
    assert_eq!(
        scan("\u{1F600}", StartInline::Code, &mut PlainText),
        [(TokenKind::Error, "\u{1F600}")]
    );
}

#[test]
fn guess_with_leading_markup() {
    assert_eq!(
        scan("<p><?php $x ?>", StartInline::Guess, &mut PlainText),
        [
            (TEXT, "<p>"),
            (PREPROC, "<?php"),
            (TEXT, " "),
            (TokenKind::Name(NameKind::Variable), "$x"),
            (TEXT, " "),
            (PREPROC, "?>"),
        ]
    );
}

#[test]
fn guess_without_tags_starts_in_code() {
    let mut state = ScanState::default();
    state.reset(StartInline::Guess);
    let mut host = PlainText;
    let mut tokens = Tokens::new("echo 1;", &mut state, None, &mut host);
    let kinds: Vec<TokenKind> = tokens.by_ref().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Keyword(KeywordKind::Plain),
            TEXT,
            TokenKind::Number(NumberKind::Integer),
            TokenKind::Punctuation,
        ]
    );
    assert_eq!(tokens.modes(), &[Mode::Root, Mode::EmbeddedHost, Mode::Code]);
}

#[test]
fn host_mode_start_needs_a_tag() {
    assert_eq!(
        scan("echo 1;", StartInline::Host, &mut PlainText),
        [(TEXT, "echo 1;")]
    );
}

#[test]
fn under_reporting_host_is_topped_up_with_text() {
    let mut host = Scripted(vec![(TokenKind::Keyword(KeywordKind::Plain), 1)]);
    assert_eq!(
        scan("ab", StartInline::Host, &mut host),
        [(TokenKind::Keyword(KeywordKind::Plain), "a"), (TEXT, "b")]
    );
}

#[test]
fn overrunning_host_report_is_ignored() {
    let mut host = Scripted(vec![
        (TokenKind::Keyword(KeywordKind::Plain), 100),
        (TokenKind::Operator, 1),
    ]);
    assert_eq!(scan("ab", StartInline::Host, &mut host), [(TEXT, "ab")]);
}

#[test]
fn host_report_splitting_a_character_is_ignored() {
    let mut host = Scripted(vec![(TokenKind::Operator, 1)]);
    assert_eq!(scan("é", StartInline::Host, &mut host), [(TEXT, "é")]);
}

#[test]
fn close_tag_resets_the_disambiguator() {
    let mut state = ScanState::default();
    state.reset(StartInline::Code);
    let mut host = PlainText;
    let count = Tokens::new("class ?>", &mut state, None, &mut host).count();
    assert_eq!(count, 3);
    assert_eq!(state.context, Disambiguator::new());
    assert_eq!(state.modes.top(), Mode::EmbeddedHost);
}

#[test]
fn state_reset_clears_everything() {
    let mut state = ScanState::default();
    state.reset(StartInline::Code);
    let mut host = PlainText;
    let _ = Tokens::new("function f(\"{$a", &mut state, None, &mut host).count();
    assert_eq!(state.modes.top(), Mode::DollarInterpolation);
    state.reset(StartInline::Host);
    assert_eq!(state.modes.as_slice(), &[Mode::Root, Mode::EmbeddedHost]);
    assert_eq!(state.context, Disambiguator::new());
}

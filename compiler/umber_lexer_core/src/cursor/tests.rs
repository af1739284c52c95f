use pretty_assertions::assert_eq;

use super::*;
use crate::is_space;

// === Basic Navigation ===

#[test]
fn new_cursor_starts_at_zero() {
    let cursor = Cursor::new("hello");
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), Some('h'));
    assert_eq!(cursor.rest(), "hello");
}

#[test]
fn empty_source_has_nothing() {
    let mut cursor = Cursor::new("");
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.advance(), None);
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn advance_tracks_multibyte_utf8() {
    let mut cursor = Cursor::new("\u{00E9}a");
    assert_eq!(cursor.advance(), Some('\u{00E9}'));
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.advance(), Some('a'));
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.rest(), "");
}

#[test]
fn eat_and_eat_if() {
    let mut cursor = Cursor::new("ab");
    assert!(!cursor.eat('b'));
    assert!(cursor.eat('a'));
    assert_eq!(cursor.eat_if(|c| c.is_ascii_digit()), None);
    assert_eq!(cursor.eat_if(|c| c == 'b'), Some('b'));
    assert_eq!(cursor.rest(), "");
}

// === Literals ===

#[test]
fn eat_str_is_case_sensitive() {
    let mut cursor = Cursor::new("<?PHP");
    assert!(!cursor.eat_str("<?php"));
    assert_eq!(cursor.pos(), 0);
    assert!(cursor.eat_str("<?"));
    assert_eq!(cursor.rest(), "PHP");
}

#[test]
fn eat_str_ignore_case_folds_ascii() {
    let mut cursor = Cursor::new("<?PhP x");
    assert!(cursor.eat_str("<?"));
    assert!(cursor.eat_str_ignore_case("php"));
    assert_eq!(cursor.rest(), " x");
}

#[test]
fn eat_str_ignore_case_rejects_short_input() {
    let mut cursor = Cursor::new("ph");
    assert!(!cursor.eat_str_ignore_case("php"));
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn eat_str_ignore_case_does_not_split_multibyte() {
    let mut cursor = Cursor::new("\u{00E9}t\u{00E9}");
    assert!(!cursor.eat_str_ignore_case("et"));
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn eat_any_takes_first_listed_option() {
    let mut cursor = Cursor::new("INTEGER");
    assert_eq!(cursor.eat_any_ignore_case(&["int", "integer"]), Some(0));
    assert_eq!(cursor.rest(), "EGER");
    assert_eq!(cursor.eat_any_ignore_case(&["x", "y"]), None);
}

// === Runs and identifiers ===

#[test]
fn eat_while_returns_bytes_consumed() {
    let mut cursor = Cursor::new("  \t\nx");
    assert_eq!(cursor.eat_while(is_space), 4);
    assert_eq!(cursor.current(), Some('x'));
    assert_eq!(cursor.eat_while(is_space), 0);
}

#[test]
fn eat_while_to_end() {
    let mut cursor = Cursor::new("aaa");
    assert_eq!(cursor.eat_while(|c| c == 'a'), 3);
    assert_eq!(cursor.rest(), "");
}

#[test]
fn ident_accepts_unicode_letters() {
    let mut cursor = Cursor::new("\u{00FC}ber_2 rest");
    assert!(cursor.eat_ident());
    assert_eq!(cursor.slice_from(0), "\u{00FC}ber_2");
}

#[test]
fn ident_start_excludes_letter_numbers() {
    let mut roman = Cursor::new("\u{2160}V");
    assert!(!roman.eat_ident());
    assert_eq!(roman.pos(), 0);

    let mut trailing = Cursor::new("x\u{2160}\u{3007} ");
    assert!(trailing.eat_ident());
    assert_eq!(trailing.rest(), " ");
}

#[test]
fn ident_rejects_leading_digit() {
    let mut cursor = Cursor::new("2abc");
    assert!(!cursor.eat_ident());
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn word_end_detection() {
    let mut cursor = Cursor::new("int_x int");
    assert!(cursor.eat_str("int"));
    assert!(!cursor.at_word_end());
    cursor.eat_while(|c| c != ' ');
    assert!(cursor.at_word_end());
    let mut tail = Cursor::new("int");
    assert!(tail.eat_str("int"));
    assert!(tail.at_word_end());
}

// === Searches ===

#[test]
fn eat_until_newline_stops_before_newline() {
    let mut cursor = Cursor::new("# comment\nnext");
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.slice_from(0), "# comment");
    assert_eq!(cursor.current(), Some('\n'));
}

#[test]
fn eat_until_newline_runs_to_eof() {
    let mut cursor = Cursor::new("// no newline");
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.rest(), "");
}

#[test]
fn eat_through_consumes_needle() {
    let mut cursor = Cursor::new("/* a */ b");
    assert!(cursor.eat_through("*/"));
    assert_eq!(cursor.rest(), " b");
}

#[test]
fn eat_through_missing_needle_leaves_cursor() {
    let mut cursor = Cursor::new("/* open");
    assert!(cursor.eat_str("/*"));
    assert!(!cursor.eat_through("*/"));
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn eat_until_or_eof() {
    let mut cursor = Cursor::new("<p>hi</p><?php");
    cursor.eat_until_or_eof("<?");
    assert_eq!(cursor.rest(), "<?php");

    let mut plain = Cursor::new("<p>hi</p>");
    plain.eat_until_or_eof("<?");
    assert_eq!(plain.rest(), "");
}

#[test]
fn copies_backtrack() {
    let mut cursor = Cursor::new("abc");
    let saved = cursor;
    cursor.advance();
    cursor.advance();
    cursor = saved;
    assert_eq!(cursor.pos(), 0);
}

// === Property Tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_cursor {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn positions_stay_on_char_boundaries(src in "\\PC{0,64}") {
            let mut cursor = Cursor::new(&src);
            while cursor.advance().is_some() {
                prop_assert!(src.is_char_boundary(cursor.pos()));
            }
            prop_assert_eq!(cursor.pos(), src.len());
        }

        #[test]
        fn eat_while_never_overruns(src in "\\PC{0,64}") {
            let mut cursor = Cursor::new(&src);
            let n = cursor.eat_while(|c| !c.is_whitespace());
            prop_assert!(n <= src.len());
            prop_assert!(src.is_char_boundary(cursor.pos()));
        }
    }
}

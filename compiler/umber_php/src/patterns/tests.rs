use super::*;

fn len(pattern: Pattern, s: &str) -> Option<usize> {
    pattern(s).map(|m| m.len)
}

fn groups(pattern: Pattern, s: &str) -> Option<Vec<usize>> {
    pattern(s).map(|m| m.groups.to_vec())
}

#[test]
fn root_space_before_tag() {
    assert_eq!(len(space_before_tag, "  \n<html>"), Some(3));
    assert_eq!(len(space_before_tag, "<?php"), Some(0));
    assert_eq!(len(space_before_tag, " x<"), None);
}

#[test]
fn root_text_before_open_tag_takes_longest_run() {
    assert_eq!(len(text_before_open_tag, "ab<?php x <?= y"), Some(10));
    assert_eq!(len(text_before_open_tag, "ab<?PHP"), Some(2));
    assert_eq!(len(text_before_open_tag, "a<?xml"), None);
    assert_eq!(len(text_before_open_tag, "<?php"), None);
    assert_eq!(len(text_before_open_tag, "a $b <?php"), None);
    assert_eq!(len(text_before_open_tag, "a <?php $b <?php"), Some(2));
}

#[test]
fn open_tags() {
    assert_eq!(len(open_tag, "<?php echo"), Some(5));
    assert_eq!(len(open_tag, "<?PhP"), Some(5));
    assert_eq!(len(open_tag, "<?= $x"), Some(3));
    assert_eq!(len(open_tag, "<? x"), Some(2));
    assert_eq!(len(open_tag, "<html"), None);
}

#[test]
fn host_text_stops_at_tag() {
    assert_eq!(len(host_text, "<p>hi</p><?php"), Some(9));
    assert_eq!(len(host_text, "no tags here"), Some(12));
    assert_eq!(len(host_text, "<?php"), Some(0));
}

#[test]
fn heredocs() {
    let doc = "<<<EOT\nline\nEOT;\nrest";
    assert_eq!(len(heredoc, doc), Some(16));
    assert_eq!(len(heredoc, "<<<'EOT'\nraw $x\n  EOT\n"), Some(21));
    assert_eq!(len(heredoc, "<<<\"EOT\"\n\nEOT"), Some(13));
    assert_eq!(len(heredoc, "<<<EOT\nEOT"), None);
    assert_eq!(len(heredoc, "<<<eot\nbody\nEOT"), Some(15));
    assert_eq!(len(heredoc, "<<<EOT\nunterminated\n"), None);
    assert_eq!(len(heredoc, "<<<\"EOT'\nx\nEOT"), None);
    assert_eq!(len(heredoc, "<<<EOT x\nEOT"), None);
}

#[test]
fn heredoc_takes_first_terminator() {
    let doc = "<<<A\nx\nA\ny\nA";
    assert_eq!(len(heredoc, doc), Some(8));
}

#[test]
fn comments() {
    assert_eq!(len(hash_comment, "# note\nx"), Some(6));
    assert_eq!(len(line_comment, "// note"), Some(7));
    assert_eq!(len(doc_comment, "/** doc */ x"), Some(10));
    assert_eq!(len(doc_comment, "/**/"), None);
    assert_eq!(len(doc_comment, "/***/"), Some(5));
    assert_eq!(len(block_comment, "/**/ x"), Some(4));
    assert_eq!(len(block_comment, "/*/ x"), None);
    assert_eq!(len(block_comment, "/* open"), None);
}

#[test]
fn member_access_groups() {
    assert_eq!(groups(member_access, "->foo("), Some(vec![2, 0, 3]));
    assert_eq!(groups(member_access, ":: \n bar"), Some(vec![2, 3, 3]));
    assert_eq!(groups(member_access, "->$x"), None);
}

#[test]
fn type_keywords() {
    assert_eq!(len(type_keyword, "int $x"), Some(3));
    assert_eq!(len(type_keyword, "?String"), Some(7));
    assert_eq!(len(type_keyword, "void)"), Some(4));
    assert_eq!(len(type_keyword, "self::"), Some(4));
    assert_eq!(len(type_keyword, "?Callable $f"), Some(9));
    assert_eq!(len(type_keyword, "iterable"), Some(8));
    assert_eq!(len(type_keyword, "integer"), None);
    assert_eq!(len(type_keyword, "?void"), None);
    assert_eq!(len(type_keyword, "voidable"), None);
}

#[test]
fn punctuation() {
    assert_eq!(groups(namespace_brace, "\\{A}"), Some(vec![1, 1]));
    assert_eq!(len(statement_end, ";"), Some(1));
    assert_eq!(len(statement_end, "{"), Some(1));
    assert_eq!(len(bracket, "}"), Some(1));
    assert_eq!(len(bracket, "("), None);
}

#[test]
fn word_constants() {
    assert_eq!(len(std_class, "STDCLASS;"), Some(8));
    assert_eq!(len(std_class, "stdClassic"), None);
    assert_eq!(len(literal_constant, "NULL)"), Some(4));
    assert_eq!(len(literal_constant, "nullable"), None);
}

#[test]
fn predefined_constants_are_case_sensitive() {
    assert_eq!(len(predefined_constant, "PHP_EOL;"), Some(7));
    assert_eq!(len(predefined_constant, "E_USER_DEPRECATED"), Some(17));
    assert_eq!(len(predefined_constant, "PHP_EOL_1"), None);
    assert_eq!(len(predefined_constant, "E_user_DEPRECATED"), None);
    assert_eq!(len(predefined_constant, "E_USER_deprecated"), None);
    assert_eq!(len(predefined_constant, "E_"), None);
    assert_eq!(len(predefined_constant, "php_EOL"), None);
}

#[test]
fn variables() {
    assert_eq!(len(variable, "$foo->"), Some(4));
    assert_eq!(len(variable, "$$foo"), Some(5));
    assert_eq!(len(variable, "$émoi"), Some(6));
    assert_eq!(len(variable, "$1"), None);
    assert_eq!(len(brace_variable, "${$name}x"), Some(8));
    assert_eq!(len(brace_variable, "${name}"), None);
}

#[test]
fn yield_from_groups() {
    assert_eq!(groups(yield_from, "yield\n from x"), Some(vec![5, 2, 4]));
    assert_eq!(groups(yield_from, "YIELD FROM"), Some(vec![5, 1, 4]));
    assert_eq!(groups(yield_from, "yield $x"), None);
    assert_eq!(groups(yield_from, "yieldfrom"), None);
}

#[test]
fn qualified_names() {
    assert_eq!(len(name, "Foo\\Bar\\baz("), Some(11));
    assert_eq!(len(name, "\\strlen("), Some(7));
    assert_eq!(len(name, "?Foo"), Some(4));
    assert_eq!(len(name, "some\\name\\{"), Some(9));
    assert_eq!(len(name, "\\?Foo"), None);
    assert_eq!(len(name, "_x1"), Some(3));
    assert_eq!(len(name, "1x"), None);
}

#[test]
fn operators() {
    assert_eq!(len(operator, "->"), Some(2));
    assert_eq!(len(operator, "&&="), Some(2));
    assert_eq!(len(operator, ".5"), Some(1));
    assert_eq!(len(operator, "=="), None);
}

#[test]
fn numbers() {
    assert_eq!(len(float, "1.5e10"), Some(6));
    assert_eq!(len(float, "1_000.0_1"), Some(9));
    assert_eq!(len(float, "2.e"), Some(2));
    assert_eq!(len(float, "3.E-2x"), Some(5));
    assert_eq!(len(float, "12"), None);
    assert_eq!(len(octal, "0755"), Some(4));
    assert_eq!(len(octal, "08"), None);
    assert_eq!(len(binary, "0B1_01"), Some(6));
    assert_eq!(len(binary, "0b2"), None);
    assert_eq!(len(hex, "0xDEAD_beef"), Some(11));
    assert_eq!(len(hex, "0x"), None);
    assert_eq!(len(integer, "1_000_000;"), Some(9));
    assert_eq!(len(integer, "_1"), None);
}

#[test]
fn quoted_strings() {
    assert_eq!(len(single_quoted, r"'it\'s' x"), Some(7));
    assert_eq!(len(single_quoted, "'a\nb'"), Some(5));
    assert_eq!(len(single_quoted, "'a\\\nb'"), None);
    assert_eq!(len(single_quoted, "'open"), None);
    assert_eq!(len(backtick, "`ls -l`"), Some(7));
}

#[test]
fn string_pieces() {
    assert_eq!(len(string_text, "abc$x"), Some(3));
    assert_eq!(len(string_text, "$x"), None);
    assert_eq!(len(unicode_escape, "\\u{1F600}"), Some(9));
    assert_eq!(len(unicode_escape, "\\u{}"), None);
    assert_eq!(len(escape, "\\n"), Some(2));
    assert_eq!(len(escape, "\\1014"), Some(4));
    assert_eq!(len(escape, "\\x4G"), Some(3));
    assert_eq!(len(escape, "\\xG"), None);
    assert_eq!(len(escape, "\\q"), None);
    assert_eq!(len(string_specials, "${\\x"), Some(3));
}

#[test]
fn interpolated_variables() {
    assert_eq!(len(interpolated_variable, "$a[0] x"), Some(5));
    assert_eq!(len(interpolated_variable, "$a[0]]\" y"), Some(6));
    assert_eq!(len(interpolated_variable, "$a[] x"), Some(2));
    assert_eq!(len(interpolated_variable, "$a->b->c"), Some(5));
    assert_eq!(len(interpolated_variable, "$a->"), Some(2));
    assert_eq!(len(interpolated_variable, "$"), None);
}

#[test]
fn interpolation_openers() {
    assert_eq!(len(brace_interpolation_open, "{${x}}"), Some(3));
    assert_eq!(len(dollar_interpolation_open, "{$x}"), Some(1));
    assert_eq!(len(dollar_interpolation_open, "{x}"), None);
    assert_eq!(groups(simple_interpolation, "{x}} y"), Some(vec![1, 2, 1]));
    assert_eq!(groups(simple_interpolation, "{} x"), None);
    assert_eq!(groups(simple_interpolation, "{ x}"), None);
}

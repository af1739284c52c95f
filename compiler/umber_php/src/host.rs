//! Host-language tokenizers for text outside `<?php ... ?>`.

use umber_ir::TokenKind;

/// Tokenizes the host document PHP is embedded in (usually HTML).
///
/// Regions arrive in document order and a host may carry state from one
/// region to the next; [`reset`](HostLexer::reset) is called before each
/// new input.
pub trait HostLexer {
    /// Tokenize `text`, reporting each token as `(kind, byte length)` in
    /// order. Text left unreported is emitted as `Text`; lengths that
    /// overrun the region or split a character end the region's reports.
    fn lex(&mut self, text: &str, emit: &mut dyn FnMut(TokenKind, usize));

    fn reset(&mut self) {}
}

/// Treats the host document as plain text.
#[derive(Copy, Clone, Debug, Default)]
pub struct PlainText;

impl HostLexer for PlainText {
    fn lex(&mut self, text: &str, emit: &mut dyn FnMut(TokenKind, usize)) {
        emit(TokenKind::Text, text.len());
    }
}

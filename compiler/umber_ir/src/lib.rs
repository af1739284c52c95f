//! Umber IR - token and span types shared by the lexers.
//!
//! This crate contains the data every Umber lexer produces and every
//! consumer (formatter, CLI, tests) reads:
//! - Spans for source locations
//! - The closed [`TokenKind`] taxonomy with qualified and short names
//! - [`Token`], a kind paired with the exact source slice it covers
//!
//! # Design Philosophy
//!
//! - **Borrow, don't copy**: tokens hold `&'src str` slices of the input, so
//!   concatenating token texts reconstructs the source byte-for-byte.
//! - **Closed taxonomy**: kinds are plain `Copy` enums, cheap to compare and
//!   to use as hash keys.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::Span;
pub use token::{
    CommentKind, KeywordKind, NameKind, NumberKind, StringKind, Token, TokenKind,
};

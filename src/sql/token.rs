//! A `TokenKind` plus the byte range it was read from.
use crate::sql::{keyword::Keyword, token_kind::TokenKind};
use std::borrow::Cow;

/// `start..end` always slices the input handed to [`tokenize`](super::tokenize).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub const fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }

    pub fn ident(&self) -> Option<&str> {
        self.kind.ident()
    }

    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.kind.is_keyword(kw)
    }

    pub fn word_lower(&self) -> Option<Cow<'static, str>> {
        self.kind.word_lower()
    }

    pub const fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}

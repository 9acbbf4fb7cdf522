//! What the lenient tokenizer recognises. Unknown characters become
//! `Other(char)`.

use crate::sql::keyword::Keyword;
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Any word that is not a clause keyword, numbers included. Casing kept.
    Ident(String),
    Keyword(Keyword),
    Comma,
    Dot,
    ParenOpen,
    ParenClose,
    Semicolon,
    Other(char),
}

impl TokenKind {
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == kw)
    }

    pub fn ident(&self) -> Option<&str> {
        match self {
            TokenKind::Ident(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Lowercased word, `None` for punctuation.
    pub fn word_lower(&self) -> Option<Cow<'static, str>> {
        match self {
            TokenKind::Ident(s) => Some(Cow::Owned(s.to_lowercase())),
            TokenKind::Keyword(k) => Some(Cow::Borrowed(k.as_str())),
            _ => None,
        }
    }
}

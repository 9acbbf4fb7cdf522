//! Seam to an external SQL tokenizer.
//!
//! The context classifier only needs one fact from a real tokenizer: the class
//! of the last non-whitespace token before the cursor. [`SqlparserClassifier`]
//! answers it with `sqlparser`'s tokenizer; tests can plug in their own
//! [`TokenClassifier`] to simulate an unavailable or failing one.

use crate::*;
use sqlparser::dialect::GenericDialect;
use sqlparser::tokenizer::{Token as SqlToken, Tokenizer};

static GENERIC: GenericDialect = GenericDialect {};

/// Lexical class of a token, as far as completion cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TokenClass {
    /// Identifier that is not a keyword (or any quoted identifier).
    #[display("name")]
    Name,
    #[display("punctuation")]
    Punctuation,
    /// `=`, `<>`, `<=`, `LIKE` and friends.
    #[display("comparison")]
    Comparison,
    #[display("other")]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastToken {
    pub value: String,
    pub class: TokenClass,
}

impl LastToken {
    pub fn new(value: impl Into<String>, class: TokenClass) -> Self {
        Self {
            value: value.into(),
            class,
        }
    }

    pub fn is_close_paren(&self) -> bool {
        self.class == TokenClass::Punctuation && self.value == ")"
    }
}

pub trait TokenClassifier {
    /// The last non-whitespace token of `sql`, or `None` for blank input.
    fn last_token(&self, sql: &str) -> Result<Option<LastToken>>;
}

/// [`TokenClassifier`] backed by `sqlparser` with the generic dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlparserClassifier;

impl TokenClassifier for SqlparserClassifier {
    fn last_token(&self, sql: &str) -> Result<Option<LastToken>> {
        let tokens = Tokenizer::new(&GENERIC, sql).tokenize()?;
        Ok(tokens
            .into_iter()
            .rev()
            .find(|t| !matches!(t, SqlToken::Whitespace(_)))
            .map(|t| LastToken {
                class: classify(&t),
                value: t.to_string(),
            }))
    }
}

fn classify(token: &SqlToken) -> TokenClass {
    match token {
        SqlToken::Word(word) if word.quote_style.is_some() => TokenClass::Name,
        SqlToken::Word(word) => {
            let lower = word.value.to_lowercase();
            if matches!(lower.as_str(), "like" | "ilike" | "rlike") {
                TokenClass::Comparison
            } else if catalog::is_keyword(&lower) {
                TokenClass::Other
            } else {
                TokenClass::Name
            }
        }
        SqlToken::Eq
        | SqlToken::DoubleEq
        | SqlToken::Neq
        | SqlToken::Lt
        | SqlToken::Gt
        | SqlToken::LtEq
        | SqlToken::GtEq
        | SqlToken::Spaceship => TokenClass::Comparison,
        SqlToken::LParen
        | SqlToken::RParen
        | SqlToken::Comma
        | SqlToken::SemiColon
        | SqlToken::Period => TokenClass::Punctuation,
        _ => TokenClass::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn last(sql: &str) -> Option<LastToken> {
        SqlparserClassifier
            .last_token(sql)
            .expect("tokenizer should accept input")
    }

    #[rstest]
    #[case("SELECT * FROM users WHERE id =", "=", TokenClass::Comparison)]
    #[case("SELECT * FROM users WHERE id <>", "<>", TokenClass::Comparison)]
    #[case("SELECT * FROM users WHERE id >=", ">=", TokenClass::Comparison)]
    #[case("SELECT * FROM users WHERE name LIKE", "LIKE", TokenClass::Comparison)]
    #[case("SELECT * FROM users WHERE name", "name", TokenClass::Name)]
    #[case(r#"SELECT * FROM users WHERE "Name""#, r#""Name""#, TokenClass::Name)]
    #[case("SELECT * FROM users WHERE", "WHERE", TokenClass::Other)]
    #[case("SELECT * FROM users WHERE lower(name)", ")", TokenClass::Punctuation)]
    #[case("SELECT * FROM users WHERE id = 5", "5", TokenClass::Other)]
    fn classifies_last_token(#[case] sql: &str, #[case] value: &str, #[case] class: TokenClass) {
        let tok = last(sql).expect("some token");
        assert_eq!(tok.value, value);
        assert_eq!(tok.class, class);
    }

    #[test]
    fn skips_trailing_whitespace_and_comments() {
        let tok = last("SELECT a FROM t WHERE b -- trailing\n").expect("some token");
        assert_eq!(tok.value, "b");
    }

    #[test]
    fn blank_input_has_no_token() {
        assert_eq!(last("   "), None);
    }

    #[test]
    fn close_paren_helper() {
        assert!(LastToken::new(")", TokenClass::Punctuation).is_close_paren());
        assert!(!LastToken::new("(", TokenClass::Punctuation).is_close_paren());
    }

    #[test]
    fn unterminated_literal_is_an_error() {
        let err = SqlparserClassifier.last_token("SELECT 'abc").unwrap_err();
        assert!(matches!(err, Error::Tokenizer(_)));
    }
}

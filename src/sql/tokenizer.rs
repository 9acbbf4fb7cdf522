use crate::sql::{keyword::Keyword, token::Token, token_kind::TokenKind};

/// Lenient SQL tokenizer producing a flat stream of `Token`s.
///
/// Behavior:
/// - Skips whitespace.
/// - Aggregates word runs (alphanumerics and `_`, Unicode aware) into
///   identifiers, preserving original case; numbers are words too.
/// - Lowercases a word once to attempt keyword classification.
/// - Emits single-character tokens for comma, dot, parentheses and semicolon;
///   everything else is `Other(char)`.
///
/// Never panics and never fails: malformed constructs still yield tokens.
/// Quotes are not understood here, so callers strip literals first.
pub fn tokenize(sql: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let mut chars = sql.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }

        if is_word_char(c) {
            let mut end = start + c.len_utf8();
            while let Some(&(i, cc)) = chars.peek() {
                if !is_word_char(cc) {
                    break;
                }
                end = i + cc.len_utf8();
                chars.next();
            }
            let text = &sql[start..end];
            let kind = Keyword::from_lower(&text.to_lowercase())
                .map(TokenKind::Keyword)
                .unwrap_or_else(|| TokenKind::Ident(text.to_string()));
            out.push(Token::new(kind, start, end));
            continue;
        }

        let kind = match c {
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '(' => TokenKind::ParenOpen,
            ')' => TokenKind::ParenClose,
            ';' => TokenKind::Semicolon,
            other => TokenKind::Other(other),
        };
        out.push(Token::new(kind, start, start + c.len_utf8()));
    }

    out
}

/// Same character class as a regex `\w`.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_select_sequence() {
        let toks = tokenize("SELECT a, b FROM t");
        assert!(toks[0].is_keyword(Keyword::Select));
        assert_eq!(toks[1].ident(), Some("a"));
        assert!(matches!(toks[2].kind, TokenKind::Comma));
        assert_eq!(toks[3].ident(), Some("b"));
        assert!(toks[4].is_keyword(Keyword::From));
        assert_eq!(toks[5].ident(), Some("t"));
    }

    #[test]
    fn preserves_case_for_identifiers() {
        let toks = tokenize("From MyTable");
        assert!(toks[0].is_keyword(Keyword::From));
        assert_eq!(toks[1].ident(), Some("MyTable"));
    }

    #[test]
    fn spans_are_byte_offsets() {
        let toks = tokenize("SELECT  naïve FROM t");
        assert_eq!(toks[1].span(), (8, 14));
        assert_eq!(toks[1].ident(), Some("naïve"));
        assert_eq!(toks[2].start, 15);
    }

    #[test]
    fn punctuation_tokens() {
        let toks = tokenize("(a.b,c);");
        let kinds: Vec<_> = toks.iter().map(|t| t.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::ParenOpen,
                TokenKind::Ident("a".into()),
                TokenKind::Dot,
                TokenKind::Ident("b".into()),
                TokenKind::Comma,
                TokenKind::Ident("c".into()),
                TokenKind::ParenClose,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn other_characters() {
        let toks = tokenize("SELECT * FROM t WHERE a >= 1");
        assert!(toks.iter().any(|t| matches!(t.kind, TokenKind::Other('*'))));
        assert!(toks.iter().any(|t| matches!(t.kind, TokenKind::Other('>'))));
        assert!(toks.iter().any(|t| matches!(t.kind, TokenKind::Other('='))));
        assert_eq!(toks.last().and_then(|t| t.ident()), Some("1"));
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t").is_empty());
    }
}

//! Clause and context keyword scanning over the lenient token stream.
use crate::sql::{Keyword, TokenKind, tokenize};
use std::borrow::Cow;

/// The clause the end of `text` belongs to: the last clause keyword by
/// position among SELECT, FROM, WHERE, GROUP BY, HAVING, ORDER BY, ON, SET
/// and the JOIN variants (all reported as [`Keyword::Join`]).
///
/// `GROUP` and `ORDER` only count when followed by `BY`.
pub fn find_current_clause(text: &str) -> Option<Keyword> {
    let tokens = tokenize(text);
    let mut clause = None;
    for (idx, tok) in tokens.iter().enumerate() {
        let TokenKind::Keyword(kw) = tok.kind else {
            continue;
        };
        match kw {
            Keyword::Group | Keyword::Order => {
                if tokens.get(idx + 1).is_some_and(|t| t.is_keyword(Keyword::By)) {
                    clause = Some(kw);
                }
            }
            Keyword::By => {}
            other => clause = Some(other),
        }
    }
    clause
}

/// The lowercased word (or `","`) that gives context to the word being typed.
///
/// When the text ends in whitespace or an opening/closing paren the user is
/// starting a new word, so the last word is the context. Otherwise the last
/// word is the partial being typed and the one before it is the context.
pub fn find_context_keyword(text: &str) -> String {
    let trimmed = text.trim_end();
    if trimmed.ends_with(',') {
        return ",".into();
    }
    let ends_with_space = trimmed.len() < text.len() || trimmed.ends_with(['(', ')']);

    let words: Vec<Cow<'static, str>> = tokenize(trimmed)
        .into_iter()
        .filter_map(|t| match t.kind {
            TokenKind::Comma => Some(Cow::Borrowed(",")),
            kind => kind.word_lower(),
        })
        .collect();

    let context = if ends_with_space || words.len() == 1 {
        words.last()
    } else {
        words.len().checked_sub(2).and_then(|idx| words.get(idx))
    };
    context.map(|w| w.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("SELECT a FROM t WHERE ", Some(Keyword::Where))]
    #[case("SELECT a FROM t ", Some(Keyword::From))]
    #[case("SELECT ", Some(Keyword::Select))]
    #[case("SELECT a FROM t LEFT JOIN o ", Some(Keyword::Join))]
    #[case("SELECT a FROM t GROUP BY ", Some(Keyword::Group))]
    #[case("SELECT a FROM t ORDER BY a, ", Some(Keyword::Order))]
    #[case("SELECT a FROM t ORDER ", Some(Keyword::From))]
    #[case("UPDATE t SET a = 1, ", Some(Keyword::Set))]
    #[case("SELECT a FROM t JOIN o ON ", Some(Keyword::On))]
    #[case("INSERT INTO t ", None)]
    #[case("", None)]
    fn detects_current_clause(#[case] sql: &str, #[case] expected: Option<Keyword>) {
        assert_eq!(find_current_clause(sql), expected, "{sql}");
    }

    #[rstest]
    #[case("SELECT * FROM ", "from")]
    #[case("SELECT * FROM us", "from")]
    #[case("SELECT a,", ",")]
    #[case("SELECT a, ", ",")]
    #[case("SELECT", "select")]
    #[case("SELECT count(", "count")]
    #[case("SELECT a FROM t WHERE name ", "name")]
    #[case("", "")]
    #[case("   ", "")]
    fn finds_context_keyword(#[case] sql: &str, #[case] expected: &str) {
        assert_eq!(find_context_keyword(sql), expected, "{sql:?}");
    }
}

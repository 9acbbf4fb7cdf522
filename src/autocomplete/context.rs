use crate::sql::{
    Keyword, SqlparserClassifier, TokenClass, TokenClassifier, find_context_keyword,
    find_current_clause, is_inside_comment,
};
use crate::*;

/// What kind of token is being typed at `cursor_offset`, without resolving
/// it against a schema. Empty when nothing should be suggested.
pub fn get_context(buffer: &str, cursor_offset: usize) -> Vec<SuggestionIntent> {
    get_context_with(buffer, Cursor::new(cursor_offset), &SqlparserClassifier)
}

/// [`get_context`] with a caller-chosen token classifier.
pub fn get_context_with(
    buffer: &str,
    cursor: Cursor,
    classifier: &dyn TokenClassifier,
) -> Vec<SuggestionIntent> {
    let before = cursor.before(buffer);
    if is_inside_unterminated_string(before) || is_inside_comment(before) {
        return vec![];
    }

    let stripped = strip_comments(&strip_string_literals(before));
    let clean = current_statement(&stripped);
    if clean.trim().is_empty() {
        return vec![];
    }

    if let Some(scope) = crate::regex!(r"(\w+)\.\w*$")
        .captures(clean)
        .and_then(|caps| caps.get(1))
    {
        return vec![SuggestionIntent::AliasColumn(scope.as_str().to_string())];
    }

    if let Some((_, intents)) = statement_context(clean) {
        return intents;
    }

    if before.ends_with([' ', '\t', '\n'])
        && let Some(intent) = operator_context(before, clean, classifier)
    {
        return vec![intent];
    }

    let intent = keyword_context(clean);
    debug!("Classified cursor {} as {intent}", cursor.offset());
    vec![intent]
}

/// Uses the last real token: after a comparison a value or column follows;
/// after a name or `)` in a condition an operator follows.
fn operator_context(
    before: &str,
    clean: &str,
    classifier: &dyn TokenClassifier,
) -> Option<SuggestionIntent> {
    let last = match classifier.last_token(before.trim_end()) {
        Ok(last) => last?,
        Err(e) => {
            debug!("Token classifier failed, falling back to keyword scan: {e}");
            return None;
        }
    };
    trace!("Last token {:?} is {}", last.value, last.class);

    if last.class == TokenClass::Comparison {
        return Some(SuggestionIntent::Column);
    }
    if (last.class == TokenClass::Name || last.is_close_paren())
        && matches!(
            find_current_clause(clean),
            Some(Keyword::Where | Keyword::Having | Keyword::On)
        )
    {
        return Some(SuggestionIntent::Operator);
    }
    None
}

fn keyword_context(clean: &str) -> SuggestionIntent {
    match find_context_keyword(clean).as_str() {
        "from" | "join" | "inner" | "left" | "right" | "outer" | "cross" | "full" | "into"
        | "update" | "table" => SuggestionIntent::Table,
        "select" | "distinct" | "where" | "and" | "or" | "on" | "having" | "set" | "when"
        | "then" | "else" | "by" => SuggestionIntent::Column,
        "order" | "group" => {
            if crate::regex!(r"(?i)\b(?:ORDER|GROUP)\s+BY\s+\w*$").is_match(clean) {
                SuggestionIntent::Column
            } else {
                SuggestionIntent::Keyword
            }
        }
        "exec" | "execute" | "call" => SuggestionIntent::Procedure,
        "," => match find_current_clause(clean) {
            Some(Keyword::From | Keyword::Join) => SuggestionIntent::Table,
            _ => SuggestionIntent::Column,
        },
        _ => SuggestionIntent::Keyword,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::LastToken;
    use SuggestionIntent::{AliasColumn, Column, Keyword, Operator, Procedure, Table};

    fn at_end(sql: &str) -> Vec<SuggestionIntent> {
        get_context(sql, sql.len())
    }

    #[rstest]
    #[case("SELECT * FROM ", Table)]
    #[case("SELECT * FROM us", Table)]
    #[case("SELECT * FROM users u LEFT JOIN ", Table)]
    #[case("INSERT INTO ", Table)]
    #[case("SELECT ", Column)]
    #[case("SELECT DISTINCT ", Column)]
    #[case("SELECT * FROM users WHERE ", Column)]
    #[case("SELECT * FROM users WHERE id = 1 AND ", Column)]
    #[case("SELECT CASE WHEN ", Column)]
    #[case("SELECT * FROM users ORDER BY ", Column)]
    #[case("SELECT * FROM users ORDER BY na", Column)]
    #[case("SELECT * FROM users ORDER ", Keyword)]
    #[case("SELECT * FROM users GROUP BY", Keyword)]
    #[case("EXEC ", Procedure)]
    #[case("SELECT id, ", Column)]
    #[case("SELECT * FROM users, ", Table)]
    #[case("SELECT * FROM users ", Keyword)]
    fn classifies_by_keyword(#[case] sql: &str, #[case] expected: SuggestionIntent) {
        assert_eq!(at_end(sql), [expected], "{sql}");
    }

    #[rstest]
    #[case("SELECT * FROM users WHERE id = ", Column)]
    #[case("SELECT * FROM users WHERE name LIKE ", Column)]
    #[case("SELECT * FROM users WHERE name ", Operator)]
    #[case("SELECT * FROM users WHERE lower(name) ", Operator)]
    #[case("SELECT * FROM users u JOIN orders o ON u.id ", Operator)]
    #[case("SELECT * FROM users u JOIN orders o ON o.user_id = u.id AND total ", Operator)]
    #[case("SELECT count(*) FROM users GROUP BY name HAVING count(*) ", Operator)]
    fn classifies_by_last_token(#[case] sql: &str, #[case] expected: SuggestionIntent) {
        assert_eq!(at_end(sql), [expected], "{sql}");
    }

    #[rstest]
    #[case("SELECT u.", "u")]
    #[case("SELECT * FROM users u WHERE u.na", "u")]
    #[case("SELECT users.", "users")]
    fn dotted_prefix_wins(#[case] sql: &str, #[case] scope: &str) {
        assert_eq!(at_end(sql), [AliasColumn(scope.into())]);
    }

    #[rstest]
    #[case("INSERT INTO users (", "users")]
    #[case("UPDATE users SET ", "users")]
    #[case("DELETE FROM users WHERE ", "users")]
    fn dml_handlers_scope_columns(#[case] sql: &str, #[case] table: &str) {
        assert_eq!(at_end(sql), [AliasColumn(table.into())]);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("SELECT 1;")]
    #[case("SELECT 1; ")]
    #[case("SELECT * FROM users WHERE name = 'jo")]
    #[case("/* nothing yet")]
    #[case("SELECT * FROM -- pick ")]
    #[case("SELECT * FROM /* users ")]
    fn nothing_to_suggest(#[case] sql: &str) {
        assert!(at_end(sql).is_empty(), "{sql:?}");
    }

    #[rstest]
    #[case("UPDATE users SET name = '';\nSELECT ", Column)]
    #[case("DELETE FROM users WHERE id = 1;\nSELECT * FROM ", Table)]
    #[case("SELECT * FROM users WHERE id = 1;\nSELECT * FROM orders ", Keyword)]
    fn earlier_statements_do_not_steer(#[case] sql: &str, #[case] expected: SuggestionIntent) {
        assert_eq!(at_end(sql), [expected], "{sql:?}");
    }

    #[test]
    fn cursor_in_the_middle_only_sees_the_prefix() {
        let sql = "SELECT * FROM users WHERE id = 1";
        assert_eq!(get_context(sql, "SELECT * FROM ".len()), [Table]);
    }

    #[test]
    fn offsets_past_the_end_are_clamped() {
        assert_eq!(get_context("SELECT * FROM ", 1_000), [Table]);
    }

    struct Failing;

    impl TokenClassifier for Failing {
        fn last_token(&self, _sql: &str) -> Result<Option<LastToken>> {
            Err(Error::Internal("tokenizer unavailable".into()))
        }
    }

    #[test]
    fn failing_classifier_degrades_to_keyword_scan() {
        let sql = "SELECT * FROM users WHERE id = ";
        // keyword scan sees "id" as the context word
        assert_eq!(get_context_with(sql, Cursor::end_of(sql), &Failing), [Keyword]);
        let sql = "SELECT * FROM users WHERE ";
        assert_eq!(get_context_with(sql, Cursor::end_of(sql), &Failing), [Column]);
    }
}

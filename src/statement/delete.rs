use crate::*;

/// Right after `WHERE`, `AND` or `OR` in `DELETE FROM t [alias] WHERE ...`:
/// columns of `t`.
///
/// After a column name the handler declines so operator detection can run.
/// It also declines inside a parenthesised subquery.
pub fn delete_context(before_cursor: &str) -> Option<Vec<SuggestionIntent>> {
    if let Some(pos) = before_cursor.to_ascii_uppercase().find("DELETE") {
        let after_delete = &before_cursor[pos..];
        let open = after_delete.matches('(').count();
        let close = after_delete.matches(')').count();
        if open > close {
            return None;
        }
    }

    let caps = crate::regex!(r"(?i)\bDELETE\s+FROM\s+(\w+)(?:\s+(\w+))?\s+WHERE\b")
        .captures(before_cursor)?;
    if !crate::regex!(r"(?i)\b(?:WHERE|AND|OR)\s+\w*$").is_match(before_cursor) {
        return None;
    }

    let table = caps.get(1)?.as_str();
    Some(vec![SuggestionIntent::AliasColumn(table.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest]
    #[case("DELETE FROM users WHERE ")]
    #[case("DELETE FROM users u WHERE na")]
    #[case("delete from users where id = 1 and ")]
    #[case("DELETE FROM users WHERE id = 1 OR em")]
    fn scopes_columns_to_target(#[case] sql: &str) {
        assert_eq!(
            delete_context(sql),
            Some(vec![SuggestionIntent::AliasColumn("users".into())])
        );
    }

    #[rstest]
    #[case("DELETE FROM users WHERE id ")]
    #[case("DELETE FROM users WHERE id IN (SELECT ")]
    #[case("DELETE FROM ")]
    #[case("SELECT * FROM users WHERE ")]
    fn declines(#[case] sql: &str) {
        assert_eq!(delete_context(sql), None);
    }
}

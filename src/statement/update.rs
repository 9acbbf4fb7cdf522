use crate::*;

/// In the SET list of `UPDATE t [alias] SET ...`: columns of `t`.
///
/// Declines once a WHERE or FROM follows the SET, leaving those clauses to
/// the generic classifier.
pub fn update_context(before_cursor: &str) -> Option<Vec<SuggestionIntent>> {
    let caps = crate::regex!(r"(?i)\bUPDATE\s+(\w+)(?:\s+\w+)?\s+SET\b").captures(before_cursor)?;
    let head = caps.get(0)?;
    if crate::regex!(r"(?i)\b(?:WHERE|FROM)\b").is_match(&before_cursor[head.end()..]) {
        return None;
    }

    // Something must follow the last SET, otherwise the user is still typing it.
    let set_pos = before_cursor.to_ascii_uppercase().rfind("SET")?;
    if before_cursor.len() <= set_pos + 3 {
        return None;
    }

    let table = caps.get(1)?.as_str();
    Some(vec![SuggestionIntent::AliasColumn(table.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest]
    #[case("UPDATE users SET ")]
    #[case("UPDATE users u SET na")]
    #[case("update users set name = 'x', ")]
    #[case("UPDATE users SET name = ")]
    fn scopes_columns_to_target(#[case] sql: &str) {
        assert_eq!(
            update_context(sql),
            Some(vec![SuggestionIntent::AliasColumn("users".into())])
        );
    }

    #[rstest]
    #[case("UPDATE users SET")]
    #[case("UPDATE users SET name = 'x' WHERE ")]
    #[case("UPDATE u SET total = 0 FROM orders ")]
    #[case("UPDATE users ")]
    fn declines(#[case] sql: &str) {
        assert_eq!(update_context(sql), None);
    }
}

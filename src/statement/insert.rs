use crate::*;

/// Inside the column list of `INSERT INTO t (`: columns of `t` only.
pub fn insert_context(before_cursor: &str) -> Option<Vec<SuggestionIntent>> {
    let caps = crate::regex!(r"(?i)\bINSERT\s+INTO\s+(\w+)\s*\([^)]*$").captures(before_cursor)?;
    if crate::regex!(r"(?i)\bVALUES\s*\(").is_match(before_cursor) {
        return None;
    }
    let table = caps.get(1)?.as_str();
    Some(vec![SuggestionIntent::AliasColumn(table.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest]
    #[case("INSERT INTO users (", "users")]
    #[case("insert into Users (id, na", "Users")]
    #[case("INSERT INTO orders(\n  user_id,\n  ", "orders")]
    fn scopes_columns_to_target(#[case] sql: &str, #[case] table: &str) {
        assert_eq!(
            insert_context(sql),
            Some(vec![SuggestionIntent::AliasColumn(table.to_string())])
        );
    }

    #[rstest]
    #[case("INSERT INTO users (id) VALUES (")]
    #[case("INSERT INTO users VALUES (1, ")]
    #[case("INSERT INTO users (id) ")]
    #[case("INSERT INTO ")]
    fn declines_outside_column_list(#[case] sql: &str) {
        assert_eq!(insert_context(sql), None);
    }
}

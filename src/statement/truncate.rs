use crate::*;

/// `TRUNCATE [TABLE] name` completions. Both `TABLE` and a table name are
/// valid right after `TRUNCATE`.
pub fn truncate_completions(before_cursor: &str, schema: &SchemaSnapshot) -> Option<Vec<String>> {
    let head = crate::regex!(r"(?i)\bTRUNCATE\s+").find(before_cursor)?;
    let after_truncate = &before_cursor[head.end()..];

    if crate::regex!(r"(?i)^TABLE\s+\w*$").is_match(after_truncate) {
        return Some(schema.tables.clone());
    }
    if super::blank_or_single_word(after_truncate) {
        return Some(
            std::iter::once("TABLE".to_string())
                .chain(schema.tables.iter().cloned())
                .collect(),
        );
    }

    None
}

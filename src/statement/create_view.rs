use crate::*;

/// `CREATE [OR REPLACE] VIEW name AS SELECT ...` completions.
///
/// Once `AS SELECT` is typed the handler declines for good and the generic
/// SELECT machinery completes the view body.
pub fn create_view_completions(before_cursor: &str, _schema: &SchemaSnapshot) -> Option<Vec<String>> {
    let head = crate::regex!(r"(?i)\bCREATE\s+(?:OR\s+REPLACE\s+)?VIEW\b").find(before_cursor)?;
    let after_view = &before_cursor[head.end()..];

    if crate::regex!(r"(?i)\bAS\s+SELECT\b").is_match(after_view) {
        return None;
    }
    if crate::regex!(r"(?i)\bAS\s+\w*$").is_match(after_view) {
        return Some(vec!["SELECT".to_string()]);
    }
    if crate::regex!(r"^\s+\w+\s+\w*$").is_match(after_view) {
        return Some(vec!["AS".to_string()]);
    }

    None
}

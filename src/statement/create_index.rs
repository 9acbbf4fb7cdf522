use crate::*;

/// `CREATE [UNIQUE] INDEX name ON table (col, ...)` completions.
pub fn create_index_completions(before_cursor: &str, schema: &SchemaSnapshot) -> Option<Vec<String>> {
    if !crate::regex!(r"(?i)\bCREATE\s+(?:UNIQUE\s+)?INDEX\b").is_match(before_cursor) {
        return None;
    }

    if let Some(caps) =
        crate::regex!(r"(?i)\bON\s+(\w+)\s*\(\s*(?:[\w\s,]*,\s*)?\w*$").captures(before_cursor)
    {
        return Some(schema.columns_of(caps.get(1)?.as_str()).to_vec());
    }
    if crate::regex!(r"(?i)\bON\s+\w*$").is_match(before_cursor) {
        return Some(schema.tables.clone());
    }
    if crate::regex!(r"(?i)\bCREATE\s+(?:UNIQUE\s+)?INDEX\s+\w+\s+\w*$").is_match(before_cursor) {
        return Some(vec!["ON".to_string()]);
    }

    None
}

use super::{after_data_type, owned};
use crate::*;

/// Completions inside the column list of `CREATE TABLE [IF NOT EXISTS]
/// [schema.]name (`. Declines outside those parentheses.
pub fn create_table_completions(before_cursor: &str, schema: &SchemaSnapshot) -> Option<Vec<String>> {
    let inside = crate::regex!(
        r"(?is)\bCREATE\s+TABLE\s+(?:IF\s+NOT\s+EXISTS\s+)?(?:\w+\.)?\w+\s*\((.*)$"
    )
    .captures(before_cursor)?
    .get(1)?
    .as_str();

    if let Some(caps) = crate::regex!(r"(?i)\bREFERENCES\s+(\w+)\s*\(\s*\w*$").captures(inside) {
        return Some(schema.columns_of(caps.get(1)?.as_str()).to_vec());
    }
    if crate::regex!(r"(?i)\bREFERENCES\s+\w*$").is_match(inside) {
        return Some(schema.tables.clone());
    }
    if after_data_type(inside) {
        return Some(owned(catalog::SQL_CONSTRAINTS));
    }
    if crate::regex!(r"(?i),\s*(?:PRIMARY|FOREIGN|UNIQUE|CHECK|CONSTRAINT)\s+\w*$").is_match(inside) {
        return Some(owned(catalog::SQL_TABLE_CONSTRAINTS));
    }
    if crate::regex!(r"(?:^|,)\s*\w+\s+\w*$").is_match(inside) {
        return Some(owned(catalog::SQL_DATA_TYPES));
    }
    // A new column name is the user's to invent.
    if inside.trim().is_empty() || crate::regex!(r"(?:^|,)\s*\w*$").is_match(inside) {
        return Some(vec![]);
    }

    None
}

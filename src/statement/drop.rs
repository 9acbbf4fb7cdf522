use super::owned;
use crate::*;

/// `DROP <kind> [IF EXISTS] name` completions.
///
/// Views share the table list since the snapshot does not track them apart.
/// Kinds the snapshot knows nothing about (INDEX, SCHEMA, ...) are declined.
pub fn drop_completions(before_cursor: &str, schema: &SchemaSnapshot) -> Option<Vec<String>> {
    let head = crate::regex!(r"(?i)\bDROP\s+").find(before_cursor)?;
    let after_drop = &before_cursor[head.end()..];

    if crate::regex!(r"(?i)^(?:TABLE|VIEW)\s+(?:IF\s+EXISTS\s+)?\w*$").is_match(after_drop) {
        return Some(schema.tables.clone());
    }
    if crate::regex!(r"(?i)^(?:PROCEDURE|FUNCTION)\s+(?:IF\s+EXISTS\s+)?\w*$").is_match(after_drop) {
        return Some(schema.procedures().to_vec());
    }
    if super::blank_or_single_word(after_drop) {
        return Some(owned(catalog::DROP_OBJECTS));
    }

    None
}

use super::{after_data_type, blank_or_single_word, owned};
use crate::*;

/// `ALTER TABLE` completions.
///
/// - no table yet, or typing one: tables
/// - `name `: the operation vocabulary
/// - `DROP [COLUMN]`, `ALTER|MODIFY [COLUMN]`, `RENAME [COLUMN]`: the table's columns
/// - `ADD [COLUMN] col `: data types, then constraints after a data type
/// - `REFERENCES `: tables, `REFERENCES t (`: columns of `t`
pub fn alter_table_completions(before_cursor: &str, schema: &SchemaSnapshot) -> Option<Vec<String>> {
    let head = crate::regex!(r"(?i)\bALTER\s+TABLE\s+").find(before_cursor)?;
    let after_alter = &before_cursor[head.end()..];

    if after_alter.trim().is_empty() || crate::regex!(r"^\w+$").is_match(after_alter) {
        return Some(schema.tables.clone());
    }

    let table_caps = crate::regex!(r"^(\w+)\s*").captures(after_alter)?;
    let table = table_caps.get(1)?.as_str();
    let rest = &after_alter[table_caps.get(0)?.end()..];
    let columns = || schema.columns_of(table).to_vec();

    if crate::regex!(r"(?i)\bDROP\s+COLUMN\s+\w*$").is_match(rest) {
        return Some(columns());
    }
    if let Some(word) = crate::regex!(r"(?i)\bDROP\s+(\w*)$")
        .captures(rest)
        .and_then(|caps| caps.get(1))
    {
        let word = word.as_str().to_ascii_uppercase();
        let names_other_object = ["COLUMN", "CONSTRAINT", "PRIMARY", "INDEX"]
            .iter()
            .any(|kw| word.starts_with(kw));
        if !names_other_object {
            return Some(columns());
        }
    }

    if crate::regex!(r"(?i)\b(?:ALTER|MODIFY)\s+(?:COLUMN\s+)?\w*$").is_match(rest)
        || crate::regex!(r"(?i)\bRENAME\s+(?:COLUMN\s+)?\w*$").is_match(rest)
    {
        return Some(columns());
    }

    if blank_or_single_word(rest) {
        return Some(owned(catalog::ALTER_OPERATIONS));
    }

    if crate::regex!(r"(?i)\bADD\s+(?:COLUMN\s+)?\w+\s+\w*$").is_match(rest) {
        return Some(owned(catalog::SQL_DATA_TYPES));
    }
    if after_data_type(rest) {
        return Some(owned(catalog::SQL_CONSTRAINTS));
    }

    if crate::regex!(r"(?i)\bREFERENCES\s+\w*$").is_match(rest) {
        return Some(schema.tables.clone());
    }
    if let Some(caps) = crate::regex!(r"(?i)\bREFERENCES\s+(\w+)\s*\(\s*\w*$").captures(rest) {
        return Some(schema.columns_of(caps.get(1)?.as_str()).to_vec());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest]
    #[case("ALTER TABLE ")]
    #[case("ALTER TABLE us")]
    #[case("alter table ")]
    fn suggests_tables_before_a_name(sample_schema: SchemaSnapshot, #[case] sql: &str) {
        assert_eq!(
            alter_table_completions(sql, &sample_schema),
            Some(sample_schema.tables.clone())
        );
    }

    #[rstest]
    #[case("ALTER TABLE users ")]
    #[case("ALTER TABLE users AD")]
    fn suggests_operations_after_name(sample_schema: SchemaSnapshot, #[case] sql: &str) {
        let out = alter_table_completions(sql, &sample_schema).expect("claimed");
        assert_eq!(out, catalog::ALTER_OPERATIONS);
    }

    #[rstest]
    #[case("ALTER TABLE users DROP COLUMN ")]
    #[case("ALTER TABLE users DROP COLUMN na")]
    #[case("ALTER TABLE users DROP ")]
    #[case("ALTER TABLE users DROP na")]
    #[case("ALTER TABLE users ALTER COLUMN ")]
    #[case("ALTER TABLE users MODIFY ")]
    #[case("ALTER TABLE users RENAME COLUMN ")]
    #[case("ALTER TABLE USERS RENAME ")]
    fn suggests_existing_columns(sample_schema: SchemaSnapshot, #[case] sql: &str) {
        let out = alter_table_completions(sql, &sample_schema).expect("claimed");
        assert_eq!(out, ["id", "name", "email"], "{sql}");
    }

    #[rstest]
    fn unknown_table_yields_no_columns(sample_schema: SchemaSnapshot) {
        let out = alter_table_completions("ALTER TABLE ghost DROP COLUMN ", &sample_schema);
        assert_eq!(out, Some(vec![]));
    }

    #[rstest]
    fn drop_constraint_is_not_a_column_drop(sample_schema: SchemaSnapshot) {
        let out = alter_table_completions("ALTER TABLE users DROP CONSTRAINT fk_", &sample_schema);
        assert_ne!(out, Some(sample_schema.columns_of("users").to_vec()));
    }

    #[rstest]
    #[case("ALTER TABLE users ADD age ")]
    #[case("ALTER TABLE users ADD COLUMN age ")]
    #[case("ALTER TABLE users ADD COLUMN age IN")]
    fn suggests_data_types_for_new_column(sample_schema: SchemaSnapshot, #[case] sql: &str) {
        let out = alter_table_completions(sql, &sample_schema).expect("claimed");
        assert_eq!(out, catalog::SQL_DATA_TYPES);
    }

    #[rstest]
    #[case("ALTER TABLE users ADD COLUMN age INT DEFAULT 0 NOT NULL, nick VARCHAR(20) ")]
    #[case("ALTER TABLE users ALTER COLUMN age TYPE BIGINT ")]
    fn suggests_constraints_after_data_type(sample_schema: SchemaSnapshot, #[case] sql: &str) {
        let out = alter_table_completions(sql, &sample_schema).expect("claimed");
        assert_eq!(out, catalog::SQL_CONSTRAINTS);
    }

    #[rstest]
    fn references_suggest_tables_then_columns(sample_schema: SchemaSnapshot) {
        let tables = alter_table_completions(
            "ALTER TABLE orders ADD FOREIGN KEY (user_id) REFERENCES ",
            &sample_schema,
        );
        assert_eq!(tables, Some(sample_schema.tables.clone()));

        let columns = alter_table_completions(
            "ALTER TABLE orders ADD FOREIGN KEY (user_id) REFERENCES users (",
            &sample_schema,
        );
        assert_eq!(columns, Some(sample_schema.columns_of("users").to_vec()));
    }

    #[rstest]
    fn other_statements_are_declined(sample_schema: SchemaSnapshot) {
        assert_eq!(alter_table_completions("SELECT * FROM ", &sample_schema), None);
    }
}

//! Static vocabularies: keywords, functions, operators, data types and the
//! DDL word lists the statement handlers offer.
//!
//! Everything here is immutable. Flattened views are built once on first use.

use itertools::Itertools;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Comparison operators and condition keywords offered after a name in a
/// WHERE/HAVING/ON clause.
pub const SQL_OPERATORS: &[&str] = &[
    "=",
    "!=",
    "<>",
    "<",
    ">",
    "<=",
    ">=",
    "IS NULL",
    "IS NOT NULL",
    "IN",
    "NOT IN",
    "LIKE",
    "NOT LIKE",
    "ILIKE",
    "NOT ILIKE",
    "BETWEEN",
    "NOT BETWEEN",
    "EXISTS",
    "NOT EXISTS",
];

/// Keywords grouped by category, in presentation order.
pub const SQL_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "dml",
        &[
            "SELECT", "FROM", "WHERE", "JOIN", "LEFT", "RIGHT", "INNER", "OUTER", "CROSS", "FULL",
            "ON", "AND", "OR", "NOT", "IN", "EXISTS", "BETWEEN", "LIKE", "IS", "NULL", "ORDER",
            "BY", "ASC", "DESC", "GROUP", "HAVING", "LIMIT", "OFFSET", "TOP", "DISTINCT", "AS",
            "UNION", "INTERSECT", "EXCEPT", "ALL", "INSERT", "INTO", "VALUES", "UPDATE", "SET",
            "DELETE", "MERGE", "USING", "MATCHED",
        ],
    ),
    (
        "ddl",
        &[
            "CREATE", "ALTER", "DROP", "TRUNCATE", "INDEX", "VIEW", "TABLE", "DATABASE", "SCHEMA",
            "CONSTRAINT", "PRIMARY", "KEY", "FOREIGN", "REFERENCES", "UNIQUE", "CHECK", "DEFAULT",
        ],
    ),
    (
        "control",
        &[
            "CASE", "WHEN", "THEN", "ELSE", "END", "IF", "BEGIN", "COMMIT", "ROLLBACK",
            "TRANSACTION",
        ],
    ),
    (
        "types",
        &[
            "INT", "INTEGER", "BIGINT", "SMALLINT", "TINYINT", "DECIMAL", "NUMERIC", "FLOAT",
            "REAL", "DOUBLE", "VARCHAR", "CHAR", "TEXT", "NVARCHAR", "NCHAR", "DATE", "TIME",
            "DATETIME", "TIMESTAMP", "BOOLEAN", "BIT", "BLOB", "CLOB", "UUID", "JSON", "XML",
        ],
    ),
];

/// Built-in functions grouped by category.
pub const SQL_FUNCTIONS: &[(&str, &[&str])] = &[
    (
        "aggregate",
        &[
            "COUNT", "SUM", "AVG", "MIN", "MAX", "GROUP_CONCAT", "STRING_AGG", "ARRAY_AGG",
            "LISTAGG",
        ],
    ),
    (
        "string",
        &[
            "CONCAT", "SUBSTRING", "SUBSTR", "LEFT", "RIGHT", "TRIM", "LTRIM", "RTRIM", "UPPER",
            "LOWER", "LENGTH", "LEN", "CHARINDEX", "POSITION", "REPLACE", "REVERSE", "SPLIT_PART",
            "STUFF",
        ],
    ),
    (
        "numeric",
        &[
            "ABS", "ROUND", "FLOOR", "CEILING", "CEIL", "POWER", "SQRT", "MOD", "SIGN", "RAND",
            "RANDOM",
        ],
    ),
    (
        "datetime",
        &[
            "NOW", "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP", "GETDATE", "GETUTCDATE",
            "SYSDATETIME", "DATEADD", "DATEDIFF", "DATEPART", "YEAR", "MONTH", "DAY", "HOUR",
            "MINUTE", "SECOND", "EXTRACT", "DATE_TRUNC", "TO_DATE", "TO_CHAR", "FORMAT",
        ],
    ),
    (
        "conversion",
        &["CAST", "CONVERT", "TRY_CAST", "TRY_CONVERT", "PARSE", "TRY_PARSE"],
    ),
    (
        "null_handling",
        &["COALESCE", "NULLIF", "ISNULL", "IFNULL", "NVL", "NVL2"],
    ),
    ("conditional", &["IIF", "CHOOSE", "DECODE"]),
    (
        "window",
        &[
            "ROW_NUMBER", "RANK", "DENSE_RANK", "NTILE", "LAG", "LEAD", "FIRST_VALUE",
            "LAST_VALUE", "OVER", "PARTITION",
        ],
    ),
];

/// Lowercase words that can never be a bare table alias.
pub const RESERVED_WORDS: &[&str] = &[
    "select", "from", "where", "join", "inner", "outer", "left", "right", "cross", "full", "on",
    "and", "or", "not", "in", "as", "order", "by", "group", "having", "union", "intersect",
    "except", "limit", "offset", "insert", "into", "values", "update", "set", "delete", "create",
    "alter", "drop", "table", "index", "view", "case", "when", "then", "else", "end", "null", "is",
    "like", "between", "exists", "distinct", "all", "top", "with", "asc", "desc", "natural",
    "using",
];

/// Column data types for CREATE TABLE, ALTER TABLE ADD and CAST.
pub const SQL_DATA_TYPES: &[&str] = &[
    // numeric
    "INT",
    "INTEGER",
    "BIGINT",
    "SMALLINT",
    "TINYINT",
    "DECIMAL",
    "NUMERIC",
    "FLOAT",
    "REAL",
    "DOUBLE",
    "DOUBLE PRECISION",
    "MONEY",
    "SMALLMONEY",
    // string
    "VARCHAR",
    "CHAR",
    "TEXT",
    "NVARCHAR",
    "NCHAR",
    "NTEXT",
    // binary
    "BINARY",
    "VARBINARY",
    "BLOB",
    "BYTEA",
    // date/time
    "DATE",
    "TIME",
    "DATETIME",
    "DATETIME2",
    "DATETIMEOFFSET",
    "SMALLDATETIME",
    "TIMESTAMP",
    "TIMESTAMPTZ",
    "INTERVAL",
    // boolean
    "BOOLEAN",
    "BOOL",
    "BIT",
    // other
    "UUID",
    "UNIQUEIDENTIFIER",
    "JSON",
    "JSONB",
    "XML",
    "CLOB",
    "SERIAL",
    "BIGSERIAL",
    "SMALLSERIAL",
    "IDENTITY",
];

/// Constraints that may follow a column's data type.
pub const SQL_CONSTRAINTS: &[&str] = &[
    "PRIMARY KEY",
    "NOT NULL",
    "NULL",
    "UNIQUE",
    "DEFAULT",
    "CHECK",
    "REFERENCES",
    "AUTO_INCREMENT",
    "AUTOINCREMENT",
    "GENERATED",
];

/// Constraints declared at table level inside CREATE TABLE.
pub const SQL_TABLE_CONSTRAINTS: &[&str] = &[
    "PRIMARY KEY",
    "FOREIGN KEY",
    "UNIQUE",
    "CHECK",
    "CONSTRAINT",
    "INDEX",
];

/// What may follow `ALTER TABLE name`.
pub const ALTER_OPERATIONS: &[&str] = &[
    "ADD",
    "ADD COLUMN",
    "DROP",
    "DROP COLUMN",
    "ALTER",
    "ALTER COLUMN",
    "MODIFY",
    "MODIFY COLUMN",
    "RENAME",
    "RENAME COLUMN",
    "RENAME TO",
    "ADD CONSTRAINT",
    "DROP CONSTRAINT",
    "ADD PRIMARY KEY",
    "DROP PRIMARY KEY",
    "ADD FOREIGN KEY",
    "ADD INDEX",
    "DROP INDEX",
    "ADD UNIQUE",
    "SET DEFAULT",
    "DROP DEFAULT",
    "SET NOT NULL",
    "DROP NOT NULL",
];

/// Object kinds that may follow `DROP`.
pub const DROP_OBJECTS: &[&str] = &[
    "TABLE",
    "VIEW",
    "INDEX",
    "DATABASE",
    "SCHEMA",
    "PROCEDURE",
    "FUNCTION",
    "TRIGGER",
    "SEQUENCE",
    "TYPE",
    "CONSTRAINT",
];

/// Extra tokens offered while typing a SELECT list.
pub const SELECT_CLAUSE_KEYWORDS: &[&str] = &["*", "DISTINCT", "TOP", "ALL"];

static ALL_KEYWORDS: LazyLock<Vec<&'static str>> = LazyLock::new(|| flatten(SQL_KEYWORDS));
static ALL_FUNCTIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| flatten(SQL_FUNCTIONS));
static KEYWORD_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    ALL_KEYWORDS
        .iter()
        .map(|k| k.to_lowercase())
        .chain(RESERVED_WORDS.iter().map(|w| w.to_string()))
        .collect()
});

fn flatten(groups: &[(&'static str, &'static [&'static str])]) -> Vec<&'static str> {
    groups
        .iter()
        .flat_map(|(_, words)| words.iter().copied())
        .unique()
        .collect()
}

/// Every keyword once, in category order.
pub fn all_keywords() -> &'static [&'static str] {
    &ALL_KEYWORDS
}

/// Every function name once, in category order.
pub fn all_functions() -> &'static [&'static str] {
    &ALL_FUNCTIONS
}

/// True if `word` (any case) is a keyword or reserved word.
pub fn is_keyword(word: &str) -> bool {
    KEYWORD_SET.contains(&word.to_lowercase())
}

/// True if `word` (any case) cannot be a bare alias.
pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn flattened_lists_have_no_duplicates() {
        assert_eq!(all_keywords().iter().unique().count(), all_keywords().len());
        assert_eq!(all_functions().iter().unique().count(), all_functions().len());
    }

    #[test]
    fn flattened_lists_keep_category_order() {
        assert_eq!(all_keywords().first(), Some(&"SELECT"));
        assert_eq!(all_functions().first(), Some(&"COUNT"));
        assert!(all_functions().contains(&"ROW_NUMBER"));
    }

    #[rstest]
    #[case("AND", true)]
    #[case("natural", true)]
    #[case("Using", true)]
    #[case("u", false)]
    #[case("orders", false)]
    fn reserved_words(#[case] word: &str, #[case] expected: bool) {
        assert_eq!(is_reserved(word), expected);
    }

    #[rstest]
    #[case("where", true)]
    #[case("VARCHAR", true)]
    #[case("with", true)]
    #[case("email", false)]
    fn keyword_lookup(#[case] word: &str, #[case] expected: bool) {
        assert_eq!(is_keyword(word), expected);
    }

    #[test]
    fn vocabularies_are_uppercase() {
        for word in SQL_DATA_TYPES
            .iter()
            .chain(SQL_CONSTRAINTS)
            .chain(ALTER_OPERATIONS)
            .chain(DROP_OBJECTS)
        {
            assert_eq!(word.to_uppercase(), *word);
        }
    }
}

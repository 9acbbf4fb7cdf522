//! One-shot scanners for constructs whose next token does not depend on the
//! enclosing clause.
use crate::statement::owned;
use crate::*;

/// What a scanner gets to look at.
#[derive(Debug, Clone, Copy)]
pub struct ScanInput<'a> {
    /// The cursor's statement up to the cursor, literals emptied and comments
    /// removed.
    pub clean_before: &'a str,
    /// The whole buffer, for table references after the cursor.
    pub buffer: &'a str,
    pub schema: &'a SchemaSnapshot,
}

pub type Scanner = fn(&ScanInput) -> Option<Vec<String>>;

/// Scanners in priority order. The first `Some` wins.
pub const SCANNERS: [(&str, Scanner); 12] = [
    ("set operation", set_operation),
    ("join condition", join_condition),
    ("cast type", cast_type),
    ("returning", returning),
    ("function arguments", function_arguments),
    ("schema qualified table", schema_qualified_table),
    ("subquery", subquery),
    ("grouping sets", grouping_sets),
    ("order by modifier", order_by_modifier),
    ("nulls order", nulls_order),
    ("case", case_when),
    ("window", window),
];

pub fn special_completions(input: &ScanInput) -> Option<(&'static str, Vec<String>)> {
    SCANNERS.iter().find_map(|(name, scanner)| {
        let out = scanner(input)?;
        debug!("Special scanner '{name}' fired with {} candidates", out.len());
        Some((*name, out))
    })
}

fn set_operation(input: &ScanInput) -> Option<Vec<String>> {
    crate::regex!(r"(?i)\b(?:UNION|INTERSECT|EXCEPT)(?:\s+ALL)?\s+\w*$")
        .is_match(input.clean_before)
        .then(|| owned(&["SELECT", "ALL"]))
}

fn join_condition(input: &ScanInput) -> Option<Vec<String>> {
    let text = input.clean_before;
    if !crate::regex!(r"(?i)\bJOIN\s+\w+(?:\s+(?:AS\s+)?\w+)?\s+\w*$").is_match(text)
        || crate::regex!(r"(?i)\bJOIN\s+\w*$").is_match(text)
    {
        return None;
    }
    // CROSS and NATURAL joins take no join condition.
    if crate::regex!(r"(?i)\b(?:CROSS|NATURAL)\s+JOIN\b").is_match(text) {
        Some(owned(&["WHERE", "ORDER", "GROUP", "LIMIT", "UNION"]))
    } else {
        Some(owned(&["ON", "USING"]))
    }
}

fn cast_type(input: &ScanInput) -> Option<Vec<String>> {
    crate::regex!(r"(?i)\bCAST\s*\([^)]+\s+AS\s+\w*$")
        .is_match(input.clean_before)
        .then(|| owned(catalog::SQL_DATA_TYPES))
}

/// Columns of the INSERT/UPDATE/DELETE target. Declines when the target is
/// unknown so the generic path can still offer something.
fn returning(input: &ScanInput) -> Option<Vec<String>> {
    let text = input.clean_before;
    if !crate::regex!(r"(?i)\bRETURNING\s+(?:\w+\s*,\s*)*\w*$").is_match(text) {
        return None;
    }
    let table = crate::regex!(r"(?i)\b(?:INSERT\s+INTO|UPDATE|DELETE\s+FROM)\s+(\w+)")
        .captures(text)?
        .get(1)?
        .as_str();
    input
        .schema
        .has_columns_for(table)
        .then(|| input.schema.columns_of(table).to_vec())
}

fn referenced_columns_in(input: &ScanInput) -> Option<Vec<String>> {
    let columns = referenced_columns(&extract_table_refs(input.buffer), input.schema);
    (!columns.is_empty()).then_some(columns)
}

fn function_arguments(input: &ScanInput) -> Option<Vec<String>> {
    let pattern = crate::regex!(concat!(
        r"(?i)\b(?:COUNT|SUM|AVG|MAX|MIN|COALESCE|NULLIF|ISNULL|IFNULL|NVL|NVL2|",
        r"GROUP_CONCAT|STRING_AGG|ARRAY_AGG|CAST|",
        r"TRIM|LTRIM|RTRIM|UPPER|LOWER|LENGTH|LEN|SUBSTR|SUBSTRING|REPLACE|",
        r"CONCAT|LEFT|RIGHT|LPAD|RPAD|REVERSE|",
        r"ABS|ROUND|CEIL|CEILING|FLOOR|SIGN|SQRT|POWER|MOD|",
        r"DATE|YEAR|MONTH|DAY|HOUR|MINUTE|SECOND|",
        r"TO_CHAR|TO_DATE|TO_NUMBER|FORMAT)\s*\(\s*\w*$"
    ));
    if !pattern.is_match(input.clean_before) {
        return None;
    }
    referenced_columns_in(input)
}

fn schema_qualified_table(input: &ScanInput) -> Option<Vec<String>> {
    crate::regex!(r"(?i)\b(?:FROM|JOIN)\s+\w+\.\w*$")
        .is_match(input.clean_before)
        .then(|| input.schema.tables.clone())
}

/// `ANY|ALL|SOME|[NOT] IN|[NOT] EXISTS (` opens a subquery.
fn subquery(input: &ScanInput) -> Option<Vec<String>> {
    crate::regex!(r"(?i)\b(?:ANY|ALL|SOME|IN|EXISTS)\s*\(\s*\w*$")
        .is_match(input.clean_before)
        .then(|| owned(&["SELECT"]))
}

fn grouping_sets(input: &ScanInput) -> Option<Vec<String>> {
    if !crate::regex!(r"(?i)\b(?:GROUPING\s+SETS|CUBE|ROLLUP)\s*\(\s*\w*$")
        .is_match(input.clean_before)
    {
        return None;
    }
    referenced_columns_in(input)
}

/// After an ORDER BY item: direction and the rest of the clause. After an
/// explicit direction only what may follow it.
fn order_by_modifier(input: &ScanInput) -> Option<Vec<String>> {
    let text = input.clean_before;
    let item_done = crate::regex!(
        r"(?i)\bORDER\s+BY\s+(?:\w+(?:\s+(?:ASC|DESC))?\s*,\s*)*\w+(?:\s+(?:ASC|DESC))?\s+\w*$"
    );
    if !item_done.is_match(text)
        || crate::regex!(r"(?i)\bORDER\s+BY\s+\w*$").is_match(text)
    {
        return None;
    }
    if crate::regex!(r"(?i)\b(?:ASC|DESC)\s+\w*$").is_match(text) {
        Some(owned(&["NULLS", ",", "LIMIT", "OFFSET", "FETCH"]))
    } else {
        Some(owned(&["ASC", "DESC", "NULLS", ",", "LIMIT"]))
    }
}

fn nulls_order(input: &ScanInput) -> Option<Vec<String>> {
    crate::regex!(r"(?i)\bNULLS\s+\w*$")
        .is_match(input.clean_before)
        .then(|| owned(&["FIRST", "LAST"]))
}

/// `CASE ` or `CASE expr ` but not `CASE WHEN `.
fn case_when(input: &ScanInput) -> Option<Vec<String>> {
    let word = crate::regex!(r"(?i)\bCASE\s+(\w*)\s*$")
        .captures(input.clean_before)?
        .get(1)?;
    (!word.as_str().eq_ignore_ascii_case("when")).then(|| owned(&["WHEN"]))
}

fn window(input: &ScanInput) -> Option<Vec<String>> {
    crate::regex!(r"(?i)\bOVER\s*\(\s*\w*$")
        .is_match(input.clean_before)
        .then(|| owned(&["PARTITION", "ORDER", "ROWS", "RANGE"]))
}

//! Table references, aliases and CTE names pulled out of raw SQL text.
use crate::*;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Bare word, or an identifier quoted with `"..."`, `` `...` `` or `[...]`.
const IDENT: &str = r#"(?:"([^"]+)"|`([^`]+)`|\[([^\]]+)\]|(\w+))"#;

static FROM_JOIN: LazyLock<Regex> = LazyLock::new(|| reference_pattern(r"\b(?:FROM|JOIN)"));
static UPDATE: LazyLock<Regex> = LazyLock::new(|| reference_pattern(r"\bUPDATE"));

fn reference_pattern(lead: &str) -> Regex {
    let pattern = format!(r"(?i){lead}\s+(?:{IDENT}\.)?{IDENT}(?:\s+(?:AS\s+)?(\w+))?");
    Regex::new(&pattern).expect("valid regex")
}

/// Every FROM/JOIN target, plus `UPDATE name [alias]` when a `SET` follows,
/// in order of appearance. Self-joins yield one entry per occurrence.
///
/// A bare alias that is a reserved word is not an alias: `FROM users JOIN
/// orders` yields `users` and `orders`, neither aliased.
pub fn extract_table_refs(sql: &str) -> Vec<TableRef> {
    let mut found = scan(&FROM_JOIN, sql);
    found.extend(
        scan(&UPDATE, sql)
            .into_iter()
            .filter(|(end, _)| crate::regex!(r"(?i)\bSET\b").is_match(&sql[*end..])),
    );
    found.sort_by_key(|(end, _)| *end);
    trace!("Extracted {} table refs", found.len());
    found.into_iter().map(|(_, r)| r).collect()
}

/// Matches of a reference pattern as (end of table name, ref).
fn scan(re: &Regex, sql: &str) -> Vec<(usize, TableRef)> {
    let mut out = Vec::new();
    let mut pos = 0;
    while let Some(caps) = re.captures_at(sql, pos) {
        let Some(table) = first_group(&caps, 5..=8) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };
        pos = whole.end();

        let mut table_ref = TableRef::new(table.as_str());
        if let Some(schema) = first_group(&caps, 1..=4) {
            table_ref = table_ref.with_schema(schema.as_str());
        }
        match caps.get(9) {
            // The reserved word may open the next clause; rescan from it.
            Some(alias) if catalog::is_reserved(alias.as_str()) => pos = alias.start(),
            Some(alias) => table_ref = table_ref.with_alias(alias.as_str()),
            None => {}
        }
        out.push((table.end(), table_ref));
    }
    out
}

fn first_group<'h>(
    caps: &Captures<'h>,
    mut range: std::ops::RangeInclusive<usize>,
) -> Option<regex::Match<'h>> {
    range.find_map(|i| caps.get(i))
}

/// Names declared in a leading `WITH a AS (...), b (x, y) AS (...) SELECT`
/// list. CTE bodies are skipped by balanced parentheses, so a `SELECT` inside
/// one does not end the list. Nothing is returned until the list is closed by
/// the main `SELECT`.
pub fn extract_cte_names(sql: &str) -> Vec<String> {
    let text = strip_comments(&strip_string_literals(sql));
    let Some(head) = crate::regex!(r"(?i)\bWITH\s+(?:RECURSIVE\s+)?").find(&text) else {
        return vec![];
    };

    let mut names = Vec::new();
    let mut rest = &text[head.end()..];
    while let Some(caps) =
        crate::regex!(r"(?i)^\s*(\w+)(?:\s*\([^)]*\))?\s+AS\s*\(").captures(rest)
    {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        names.push(name.as_str().to_string());
        let body = &rest[whole.end()..];
        let Some(close) = closing_paren(body) else {
            return vec![];
        };
        rest = body[close + 1..].trim_start();
        match rest.strip_prefix(',') {
            Some(next) => rest = next,
            None => break,
        }
    }

    if crate::regex!(r"(?i)^\s*SELECT\b").is_match(rest) {
        names
    } else {
        vec![]
    }
}

/// Byte index of the `)` closing a paren opened just before `text`.
fn closing_paren(text: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (idx, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

/// Lowercased alias to table name, for refs whose table the caller knows.
pub fn build_alias_map(refs: &[TableRef], known_tables: &[String]) -> AliasMap {
    refs.iter()
        .filter(|r| known_tables.iter().any(|t| t.eq_ignore_ascii_case(&r.name)))
        .filter_map(|r| {
            r.alias
                .as_ref()
                .map(|alias| (alias.to_lowercase(), r.name.clone()))
        })
        .collect()
}

/// Columns of every referenced table the snapshot knows, in ref order.
/// A table referenced twice contributes its columns twice.
pub fn referenced_columns(refs: &[TableRef], schema: &SchemaSnapshot) -> Vec<String> {
    refs.iter()
        .flat_map(|r| schema.columns_of(&r.name).iter().cloned())
        .collect()
}

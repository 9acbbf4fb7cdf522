//! Statement handlers.
//!
//! Each handler looks at the text before the cursor and either owns the
//! position (returning `Some`) or declines with `None` so the next one gets a
//! turn. DDL handlers answer with final completion lists; the DML handlers
//! answer with a [`SuggestionIntent`] for the context classifier.
use crate::*;
use regex::Regex;
use std::sync::LazyLock;

crate::reexport!(alter_table);
crate::reexport!(create_index);
crate::reexport!(create_table);
crate::reexport!(create_view);
crate::reexport!(delete);
crate::reexport!(drop);
crate::reexport!(insert);
crate::reexport!(truncate);
crate::reexport!(update);

/// Decides final completions for one DDL statement shape.
pub type StatementHandler = fn(&str, &SchemaSnapshot) -> Option<Vec<String>>;

/// Decides the intent for one DML statement shape.
pub type ContextHandler = fn(&str) -> Option<Vec<SuggestionIntent>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StatementKind {
    #[display("CREATE TABLE")]
    CreateTable,
    #[display("ALTER TABLE")]
    AlterTable,
    #[display("CREATE INDEX")]
    CreateIndex,
    #[display("CREATE VIEW")]
    CreateView,
    #[display("DROP")]
    Drop,
    #[display("TRUNCATE")]
    Truncate,
    #[display("INSERT")]
    Insert,
    #[display("UPDATE")]
    Update,
    #[display("DELETE")]
    Delete,
}

/// DDL handlers in priority order. The first `Some` wins.
pub const DDL_HANDLERS: [(StatementKind, StatementHandler); 6] = [
    (StatementKind::CreateTable, create_table_completions),
    (StatementKind::AlterTable, alter_table_completions),
    (StatementKind::CreateIndex, create_index_completions),
    (StatementKind::CreateView, create_view_completions),
    (StatementKind::Drop, drop_completions),
    (StatementKind::Truncate, truncate_completions),
];

/// DML handlers consulted by the context classifier, in priority order.
pub const DML_HANDLERS: [(StatementKind, ContextHandler); 3] = [
    (StatementKind::Insert, insert_context),
    (StatementKind::Update, update_context),
    (StatementKind::Delete, delete_context),
];

/// Run the DDL handlers against the statement the cursor is in. Earlier
/// statements, up to the last top-level `;`, are not seen.
pub fn complete_statement(
    before_cursor: &str,
    schema: &SchemaSnapshot,
) -> Option<(StatementKind, Vec<String>)> {
    let before_cursor = current_statement(before_cursor);
    DDL_HANDLERS.iter().find_map(|(kind, handler)| {
        let out = handler(before_cursor, schema)?;
        debug!("{kind} handler claimed the cursor with {} candidates", out.len());
        Some((*kind, out))
    })
}

/// Run the DML handlers against the statement the cursor is in.
pub fn statement_context(before_cursor: &str) -> Option<(StatementKind, Vec<SuggestionIntent>)> {
    let before_cursor = current_statement(before_cursor);
    DML_HANDLERS.iter().find_map(|(kind, handler)| {
        let intents = handler(before_cursor)?;
        debug!("{kind} context handler claimed the cursor");
        Some((*kind, intents))
    })
}

static AFTER_DATA_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    let types = catalog::SQL_DATA_TYPES
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{types})(?:\s*\([^)]*\))?\s+\w*$")).expect("valid regex")
});

/// True right after a data type (with optional size) and a space, i.e. where
/// a column constraint goes.
pub(crate) fn after_data_type(text: &str) -> bool {
    AFTER_DATA_TYPE.is_match(text)
}

/// Nothing typed yet, or a single word being typed.
pub(crate) fn blank_or_single_word(text: &str) -> bool {
    let text = text.trim();
    text.is_empty() || crate::regex!(r"^\w*$").is_match(text)
}

pub(crate) fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

use crate::sql::{Keyword, SqlparserClassifier, TokenClassifier, find_current_clause, is_inside_comment};
use crate::*;
use itertools::Itertools;

/// Which static vocabularies may be mixed into the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionOptions {
    pub include_keywords: bool,
    pub include_functions: bool,
}

impl Default for CompletionOptions {
    /// Taken from the environment backed [`config()`].
    fn default() -> Self {
        Self::from(config())
    }
}

impl From<&Config> for CompletionOptions {
    fn from(config: &Config) -> Self {
        Self {
            include_keywords: config.include_keywords,
            include_functions: config.include_functions,
        }
    }
}

/// One completion call. Nothing survives it.
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub buffer: &'a str,
    pub cursor: Cursor,
    pub schema: &'a SchemaSnapshot,
    pub options: CompletionOptions,
}

impl<'a> CompletionRequest<'a> {
    pub fn new(buffer: &'a str, cursor: impl Into<Cursor>, schema: &'a SchemaSnapshot) -> Self {
        Self {
            buffer,
            cursor: cursor.into(),
            schema,
            options: CompletionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CompletionOptions) -> Self {
        self.options = options;
        self
    }
}

/// Ranked completions for the word at `cursor_offset` (a byte offset,
/// clamped to the buffer). Never fails: an empty list means nothing to
/// suggest.
pub fn get_completions(
    buffer: &str,
    cursor_offset: usize,
    schema: &SchemaSnapshot,
    options: CompletionOptions,
) -> Vec<String> {
    complete(&CompletionRequest::new(buffer, cursor_offset, schema).with_options(options))
}

pub fn complete(request: &CompletionRequest) -> Vec<String> {
    complete_with(request, &SqlparserClassifier)
}

/// [`complete`] with a caller-chosen token classifier.
pub fn complete_with(request: &CompletionRequest, classifier: &dyn TokenClassifier) -> Vec<String> {
    let span = span!(tracing::Level::DEBUG, "complete", cursor = request.cursor.offset());
    let _enter = span.enter();

    let buffer = request.buffer;
    let before = request.cursor.before(buffer);
    let partial = current_word(buffer, before.len());

    if is_inside_unterminated_string(before) || before.trim().is_empty() || is_inside_comment(before) {
        return vec![];
    }

    let stripped = strip_comments(&strip_string_literals(before));
    let clean_before = current_statement(&stripped);

    if let Some((_, out)) = complete_statement(clean_before, request.schema) {
        return finish(partial, out);
    }

    let scan = ScanInput {
        clean_before,
        buffer,
        schema: request.schema,
    };
    if let Some((_, out)) = special_completions(&scan) {
        return finish(partial, out);
    }

    let intents = get_context_with(buffer, request.cursor, classifier);
    if intents.is_empty() {
        return vec![];
    }

    let resolver = Resolver::new(request, clean_before, partial);
    let mut candidates = Vec::new();
    for intent in &intents {
        resolver.resolve(intent, &mut candidates);
    }
    let mut candidates = dedup(candidates);

    if resolver.prefers_from(&intents) {
        candidates.retain(|c| c != "*" && !c.eq_ignore_ascii_case("from"));
        candidates.insert(0, "FROM".to_string());
    }

    rank(partial, candidates)
}

/// Case-insensitive dedup, first spelling wins, then rank.
fn finish(partial: &str, candidates: Vec<String>) -> Vec<String> {
    rank(partial, dedup(candidates))
}

fn dedup(candidates: Vec<String>) -> Vec<String> {
    candidates
        .into_iter()
        .unique_by(|c| c.to_lowercase())
        .collect()
}

/// Turns intents into candidate names for one request.
struct Resolver<'a> {
    schema: &'a SchemaSnapshot,
    options: CompletionOptions,
    clean_before: &'a str,
    partial: &'a str,
    refs: Vec<TableRef>,
    aliases: AliasMap,
    ctes: Vec<String>,
}

impl<'a> Resolver<'a> {
    fn new(request: &CompletionRequest<'a>, clean_before: &'a str, partial: &'a str) -> Self {
        let refs = extract_table_refs(request.buffer);
        let aliases = build_alias_map(&refs, &request.schema.tables);
        Self {
            schema: request.schema,
            options: request.options,
            clean_before,
            partial,
            ctes: extract_cte_names(request.buffer),
            refs,
            aliases,
        }
    }

    fn in_select(&self) -> bool {
        find_current_clause(self.clean_before) == Some(Keyword::Select)
    }

    fn resolve(&self, intent: &SuggestionIntent, out: &mut Vec<String>) {
        let before = out.len();
        match intent {
            SuggestionIntent::Table => {
                out.extend(self.schema.tables.iter().cloned());
                out.extend(self.ctes.iter().cloned());
            }
            SuggestionIntent::Column => {
                let in_select = self.in_select();
                if in_select {
                    out.extend(crate::statement::owned(catalog::SELECT_CLAUSE_KEYWORDS));
                }
                out.extend(referenced_columns(&self.refs, self.schema));
                // Outside SELECT a qualified `table.column` is likely.
                if !in_select {
                    out.extend(self.schema.tables.iter().cloned());
                }
                if self.options.include_functions {
                    out.extend(functions());
                }
            }
            SuggestionIntent::AliasColumn(scope) => {
                let table = self
                    .aliases
                    .get(&scope.to_lowercase())
                    .map(String::as_str)
                    .unwrap_or(scope.as_str());
                out.extend(self.schema.columns_of(table).iter().cloned());
            }
            SuggestionIntent::Keyword => {
                if self.options.include_keywords {
                    out.extend(catalog::all_keywords().iter().map(|k| k.to_string()));
                }
                if self.options.include_functions {
                    out.extend(functions());
                }
            }
            SuggestionIntent::Function => out.extend(functions()),
            SuggestionIntent::Operator => out.extend(crate::statement::owned(catalog::SQL_OPERATORS)),
            SuggestionIntent::Procedure => out.extend(self.schema.procedures().iter().cloned()),
        }
        debug!("Resolved {intent} to {} candidates", out.len() - before);
    }

    /// Right after `SELECT *` the wildcard is done; offer FROM instead of
    /// repeating it.
    fn prefers_from(&self, intents: &[SuggestionIntent]) -> bool {
        intents.contains(&SuggestionIntent::Column)
            && self.in_select()
            && crate::regex!(r"(?i)\bSELECT\s+\*(?:\s+\w*)?\s*$").is_match(self.clean_before)
            && (self.partial.is_empty() || "from".starts_with(&self.partial.to_lowercase()))
    }
}

fn functions() -> impl Iterator<Item = String> {
    catalog::all_functions().iter().map(|f| f.to_string())
}

use std::collections::HashMap;

/// Tables, columns and procedures known to the caller at request time.
///
/// The engine only reads it. Column lists are keyed by lowercased table name;
/// [`SchemaSnapshot::columns_of`] also tolerates keys inserted with other
/// casing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaSnapshot {
    pub tables: Vec<String>,
    pub columns: HashMap<String, Vec<String>>,
    pub procedures: Option<Vec<String>>,
}

impl SchemaSnapshot {
    pub fn new(tables: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            tables: tables.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Add (or overwrite) the ordered column list of `table`.
    pub fn with_columns(
        mut self,
        table: impl AsRef<str>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.columns.insert(
            table.as_ref().to_lowercase(),
            columns.into_iter().map(Into::into).collect(),
        );
        self
    }

    pub fn with_procedures(mut self, procedures: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.procedures = Some(procedures.into_iter().map(Into::into).collect());
        self
    }

    /// Columns of `table` (any case), empty when the table is unknown.
    pub fn columns_of(&self, table: &str) -> &[String] {
        let key = table.to_lowercase();
        self.columns
            .get(&key)
            .or_else(|| {
                self.columns
                    .iter()
                    .find(|(name, _)| name.to_lowercase() == key)
                    .map(|(_, cols)| cols)
            })
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn has_columns_for(&self, table: &str) -> bool {
        !self.columns_of(table).is_empty()
    }

    pub fn has_table(&self, name: &str) -> bool {
        self.tables.iter().any(|t| t.eq_ignore_ascii_case(name))
    }

    pub fn procedures(&self) -> &[String] {
        self.procedures.as_deref().unwrap_or_default()
    }
}

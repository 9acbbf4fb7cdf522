/// What kind of token the user is typing, before it is resolved against the
/// schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SuggestionIntent {
    #[display("table")]
    Table,
    #[display("column")]
    Column,
    /// Columns of one table, named directly or through an alias.
    #[display("column of {_0}")]
    AliasColumn(String),
    #[display("keyword")]
    Keyword,
    #[display("function")]
    Function,
    #[display("operator")]
    Operator,
    #[display("procedure")]
    Procedure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(SuggestionIntent::Table.to_string(), "table");
        assert_eq!(
            SuggestionIntent::AliasColumn("u".into()).to_string(),
            "column of u"
        );
    }
}

#![cfg(test)]
crate::reexport!(fixtures);
pub use rstest::*;

pub(crate) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer()
            .init();
    });
}

mod fixture_tests {
    use super::{super::*, *};

    #[rstest]
    fn sample_schema_is_complete(sample_schema: SchemaSnapshot) {
        assert_eq!(sample_schema.tables, ["users", "orders", "products"]);
        assert_eq!(sample_schema.columns_of("users"), ["id", "name", "email"]);
        assert_eq!(sample_schema.procedures(), ["sp_refresh", "sp_cleanup"]);
    }

    #[rstest]
    fn empty_schema_has_nothing(empty_schema: SchemaSnapshot) {
        assert!(empty_schema.tables.is_empty());
        assert!(empty_schema.columns_of("users").is_empty());
        assert!(empty_schema.procedures().is_empty());
    }
}

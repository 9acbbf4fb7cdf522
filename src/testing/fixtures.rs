use crate::*;

/// Three related tables plus two procedures.
#[fixture]
pub fn sample_schema() -> SchemaSnapshot {
    super::common_init();
    SchemaSnapshot::new(["users", "orders", "products"])
        .with_columns("users", ["id", "name", "email"])
        .with_columns("orders", ["id", "user_id", "total", "created_at"])
        .with_columns("products", ["id", "title", "price"])
        .with_procedures(["sp_refresh", "sp_cleanup"])
}

#[fixture]
pub fn empty_schema() -> SchemaSnapshot {
    super::common_init();
    SchemaSnapshot::default()
}

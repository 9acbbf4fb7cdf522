//! What the caller knows about the database, handed in on every request.
crate::reexport!(snapshot);
crate::reexport!(table_ref);

//! Completion engine: context classification, special-case scanners,
//! intent resolution and fuzzy ranking.
//!
//! Data flow: buffer + cursor → statement handlers (early return) or special
//! scanners (early return) or context classifier → intents resolved against
//! the [`SchemaSnapshot`] → dedup → [`rank`].
crate::reexport!(intent);
crate::reexport!(fuzzy);
crate::reexport!(context);
crate::reexport!(special);
crate::reexport!(completion);
crate::reexport!(completion_tests, test);

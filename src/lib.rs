//! Heuristic, cursor-aware SQL completion.
//!
//! Given the text of an editor buffer and a cursor offset, the engine works out
//! what kind of token is being typed and returns a ranked list of completions
//! drawn from a caller supplied [`SchemaSnapshot`] and the static [`catalog`].
//!
//! ```rust
//! use sqlcomplete::{CompletionOptions, SchemaSnapshot, get_completions};
//!
//! let schema = SchemaSnapshot::new(["users", "orders"]);
//! let sql = "SELECT * FROM ";
//! let out = get_completions(sql, sql.len(), &schema, CompletionOptions::default());
//! assert!(out.contains(&"users".to_string()));
//! ```
reexport!(testing, test);
reexport!(error);
reexport!(config);
reexport!(metadata);
reexport!(references);
reexport!(statement);
reexport!(autocomplete);
pub mod catalog;
pub mod sql;

pub use sql::{
    Cursor, current_statement, current_word, is_inside_unterminated_string, strip_comments,
    strip_string_literals,
};

#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}

/// Compiles a pattern once and hands out a `&'static Regex`.
#[macro_export]
#[doc(hidden)]
macro_rules! regex {
    ($pattern:expr) => {{
        static RE: ::std::sync::LazyLock<::regex::Regex> =
            ::std::sync::LazyLock::new(|| ::regex::Regex::new($pattern).expect("valid regex"));
        &*RE
    }};
}

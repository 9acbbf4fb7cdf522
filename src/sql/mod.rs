//! Lenient lexical layer for completion.
//!
//! Everything here works on incomplete, possibly invalid SQL typed into an
//! editor. Nothing in this module fails: malformed input still yields tokens
//! and the heuristics above it decide what to make of them.
//!
//! Modules:
//! - `keyword`    : clause keywords the heuristics reason about.
//! - `token_kind` : classification of lexical atoms.
//! - `token`      : a `TokenKind` plus its byte span.
//! - `tokenizer`  : single pass tokenizer producing a `Vec<Token>`.
//! - `cursor`     : byte offset caret, clamped to the buffer.
//! - `lexical`    : quote/comment helpers and the word under the cursor.
//! - `clause`     : current clause and context keyword scanning.
//! - `classifier` : last-token classification through `sqlparser`.
//!
//! ```rust
//! use sqlcomplete::sql::prelude::*;
//!
//! let tokens = tokenize("SELECT a, b FROM my_table");
//! assert!(tokens.iter().any(|t| t.is_keyword(Keyword::Select)));
//! assert!(tokens.iter().any(|t| t.ident() == Some("my_table")));
//! assert_eq!(find_current_clause("SELECT a FROM my_table WHERE "), Some(Keyword::Where));
//! ```

pub mod classifier;
pub mod clause;
pub mod cursor;
pub mod keyword;
pub mod lexical;
pub mod token;
pub mod token_kind;
pub mod tokenizer;

pub use classifier::{LastToken, SqlparserClassifier, TokenClass, TokenClassifier};
pub use clause::{find_context_keyword, find_current_clause};
pub use cursor::Cursor;
pub use keyword::Keyword;
pub use lexical::{
    current_statement, current_word, is_inside_comment, is_inside_unterminated_string,
    strip_comments, strip_string_literals,
};
pub use token::Token;
pub use token_kind::TokenKind;
pub use tokenizer::tokenize;

/// `use sqlcomplete::sql::prelude::*;`
pub mod prelude {
    pub use super::{
        Cursor, Keyword, Token, TokenKind, find_context_keyword, find_current_clause, tokenize,
    };
}

//! Quote, comment and word level helpers shared by every completion stage.
use crate::sql::tokenizer::is_word_char;

/// True when the scan of `text` ends inside an open `'...'` or `"..."` literal.
///
/// A doubled quote (`''` / `""`) inside a literal is an escaped quote, not a
/// terminator. A quote of the other style inside a literal is plain text.
pub fn is_inside_unterminated_string(text: &str) -> bool {
    let mut in_single = false;
    let mut in_double = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' if !in_double => {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    continue;
                }
                in_single = !in_single;
            }
            '"' if !in_single => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    continue;
                }
                in_double = !in_double;
            }
            _ => {}
        }
    }

    in_single || in_double
}

/// Empties every closed `'...'` and `"..."` span, keeping the quotes.
///
/// Keywords inside literals can no longer be mistaken for clause keywords;
/// the relative order of everything outside literals is preserved.
pub fn strip_string_literals(text: &str) -> String {
    let single = crate::regex!(r"'[^']*'").replace_all(text, "''");
    crate::regex!(r#""[^"]*""#)
        .replace_all(&single, "\"\"")
        .into_owned()
}

fn comment_pattern() -> &'static regex::Regex {
    crate::regex!(r"(?s)--[^\n]*|/\*.*?(?:\*/|\z)")
}

/// Removes `-- ...` line comments and `/* ... */` block comments.
///
/// An unterminated block comment runs to the end of the text.
pub fn strip_comments(text: &str) -> String {
    comment_pattern().replace_all(text, "").into_owned()
}

/// True when the end of `text` sits inside a comment: an open block comment
/// or a `--` comment on the last line.
pub fn is_inside_comment(text: &str) -> bool {
    let text = strip_string_literals(text);
    comment_pattern()
        .find_iter(&text)
        .last()
        .is_some_and(|m| {
            m.end() == text.len()
                && (m.as_str().starts_with("--") || !m.as_str().ends_with("*/") || m.len() < 4)
        })
}

/// The statement the end of `text` belongs to: everything after the last `;`
/// outside parentheses. Expects literals and comments already stripped.
pub fn current_statement(text: &str) -> &str {
    let mut depth = 0usize;
    let mut start = 0;
    for (idx, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ';' if depth == 0 => start = idx + 1,
            _ => {}
        }
    }
    &text[start..]
}

/// The word being typed: the maximal run of word characters ending at the
/// cursor. After `alias.` this is the text following the dot.
pub fn current_word(text: &str, cursor: usize) -> &str {
    let before = super::Cursor::new(cursor).before(text);
    let start = before
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_word_char(*c))
        .last()
        .map(|(i, _)| i)
        .unwrap_or(before.len());
    &before[start..]
}

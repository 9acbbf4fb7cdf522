/// A caret position in an editor buffer, as a byte offset.
///
/// Offsets coming from an editor are untrusted: [`Cursor::index_in`] pins them to
/// the buffer length and backs off to the previous UTF-8 character boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::From)]
pub struct Cursor {
    offset: usize,
}

impl Cursor {
    pub fn new(offset: usize) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// A valid slice index into `text` no greater than the raw offset.
    pub fn index_in(&self, text: &str) -> usize {
        let mut idx = self.offset.min(text.len());
        while !text.is_char_boundary(idx) {
            idx -= 1;
        }
        idx
    }

    /// Everything left of the caret.
    pub fn before<'a>(&self, text: &'a str) -> &'a str {
        &text[..self.index_in(text)]
    }

    /// The caret at the end of `text`.
    pub fn end_of(text: &str) -> Self {
        Self::new(text.len())
    }
}

//! Source location metadata for parsed clues
//!
//! Clues are single-line strings, so a `Span` only needs byte offsets and
//! the 1-based column of its start.

/// Span representing a fragment of clue text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub col: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            col: start + 1,
        }
    }

    pub fn from_pest_span(span: pest::Span) -> Self {
        let (_, col) = span.start_pos().line_col();
        Self {
            start: span.start(),
            end: span.end(),
            col,
        }
    }

    /// Span covering the whole of `text`
    pub fn whole(text: &str) -> Self {
        Self::new(0, text.len())
    }
}

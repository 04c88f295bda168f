use super::utf16::byte_to_utf16;

/// A byte range `[start, end)` into a single line.
///
/// Regex matches are recorded as spans and only converted to editor columns
/// when a [`crate::Range`] is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Spans from the start of `self` to the end of `other`.
    #[must_use]
    pub fn to(self, other: Span) -> Span {
        Span {
            start: self.start,
            end: other.end,
        }
    }

    /// Converts the byte span into `(start, end)` UTF-16 columns of `line`.
    #[must_use]
    pub fn columns(self, line: &str) -> (usize, usize) {
        (byte_to_utf16(line, self.start), byte_to_utf16(line, self.end))
    }
}

impl From<regex::Match<'_>> for Span {
    fn from(m: regex::Match<'_>) -> Self {
        Span {
            start: m.start(),
            end: m.end(),
        }
    }
}

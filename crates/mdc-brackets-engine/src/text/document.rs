use std::borrow::Cow;

/// Errors raised by a [`TextDocument`] when a line cannot be produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("Line {line} is out of range (document has {line_count} lines)")]
    LineOutOfRange { line: usize, line_count: usize },
    #[error("Document unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Read-only, line-oriented view of a document.
///
/// Implementations must return stable content for the duration of a query;
/// the matcher reads some lines more than once.
pub trait TextDocument {
    /// Returns the text of the zero-based `line`, without its line terminator.
    fn line(&self, line: usize) -> Result<Cow<'_, str>, DocumentError>;

    /// Total number of lines.
    fn line_count(&self) -> usize;
}

impl<S: AsRef<str>> TextDocument for [S] {
    fn line(&self, line: usize) -> Result<Cow<'_, str>, DocumentError> {
        self.get(line)
            .map(|text| Cow::Borrowed(text.as_ref()))
            .ok_or(DocumentError::LineOutOfRange {
                line,
                line_count: self.len(),
            })
    }

    fn line_count(&self) -> usize {
        self.len()
    }
}

impl<S: AsRef<str>> TextDocument for Vec<S> {
    fn line(&self, line: usize) -> Result<Cow<'_, str>, DocumentError> {
        self.as_slice().line(line)
    }

    fn line_count(&self) -> usize {
        self.len()
    }
}

impl<S: AsRef<str>, const N: usize> TextDocument for [S; N] {
    fn line(&self, line: usize) -> Result<Cow<'_, str>, DocumentError> {
        self.as_slice().line(line)
    }

    fn line_count(&self) -> usize {
        N
    }
}

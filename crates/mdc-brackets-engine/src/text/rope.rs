use std::borrow::Cow;

use xi_rope::Rope;

use super::{
    document::{DocumentError, TextDocument},
    span::Span,
};

/// A [`TextDocument`] backed by an `xi_rope::Rope`.
///
/// Line spans are computed once on construction so that `line` is a slice
/// lookup. A trailing newline yields a final empty line, matching how
/// editors number lines.
#[derive(Clone)]
pub struct RopeDocument {
    rope: Rope,
    /// Byte span of each line, excluding its terminator.
    lines: Vec<Span>,
}

impl RopeDocument {
    pub fn new(rope: Rope) -> Self {
        let lines = line_spans(&rope);
        Self { rope, lines }
    }
}

impl From<&str> for RopeDocument {
    fn from(text: &str) -> Self {
        Self::new(Rope::from(text))
    }
}

impl From<Rope> for RopeDocument {
    fn from(rope: Rope) -> Self {
        Self::new(rope)
    }
}

impl TextDocument for RopeDocument {
    fn line(&self, line: usize) -> Result<Cow<'_, str>, DocumentError> {
        let sp = self
            .lines
            .get(line)
            .copied()
            .ok_or(DocumentError::LineOutOfRange {
                line,
                line_count: self.lines.len(),
            })?;
        Ok(self.rope.slice_to_cow(sp.start..sp.end))
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Computes content spans for every line, stripping `\n` and `\r\n`.
///
/// Uses `lines_raw` so offsets account for the terminators.
fn line_spans(rope: &Rope) -> Vec<Span> {
    let mut offset = 0usize;
    let mut ends_with_newline = true;
    let mut spans: Vec<Span> = rope
        .lines_raw(..)
        .map(|line| {
            let start = offset;
            offset += line.len();
            let content = line.trim_end_matches(['\r', '\n']);
            ends_with_newline = content.len() != line.len();
            Span {
                start,
                end: start + content.len(),
            }
        })
        .collect();

    if ends_with_newline {
        spans.push(Span {
            start: offset,
            end: offset,
        });
    }
    spans
}

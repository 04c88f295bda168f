/// A cursor position: zero-based line and zero-based UTF-16 column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A rectangular text span, zero-based with an exclusive end column.
///
/// Ranges produced by the matcher always sit on a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl Range {
    /// A range covering columns `start..end` of `line`.
    pub const fn on_line(line: usize, start: usize, end: usize) -> Self {
        Self {
            start_line: line,
            start_column: start,
            end_line: line,
            end_column: end,
        }
    }

    pub const fn start(&self) -> Position {
        Position::new(self.start_line, self.start_column)
    }

    pub const fn end(&self) -> Position {
        Position::new(self.end_line, self.end_column)
    }

    #[must_use]
    pub const fn is_single_line(&self) -> bool {
        self.start_line == self.end_line
    }
}

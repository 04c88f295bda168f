use crate::text::{DocumentError, TextDocument};

use super::{
    ScanOptions,
    fence::{CodeFence, FenceState},
    patterns::{match_closing, match_opening},
    token::DelimiterToken,
};

/// Line-by-line state machine turning a document into delimiter tokens.
///
/// Lines must be pushed in ascending order; the matcher relies on tokens
/// coming out sorted by line.
pub struct DocumentScanner {
    options: ScanOptions,
    fence: FenceState,
    out: Vec<DelimiterToken>,
}

impl DocumentScanner {
    pub fn new(options: ScanOptions) -> Self {
        Self {
            options,
            fence: FenceState::Outside,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: usize, text: &str) {
        let trimmed = text.trim();

        if let Some(sig) = CodeFence::sig(trimmed) {
            self.fence = self.fence.step(self.options.fence_mode, sig);
            return;
        }

        if self.fence.is_inside() {
            return;
        }

        // Precedence: an opening beats a closing.
        if let Some(parts) = match_opening(trimmed) {
            let name = &trimmed[parts.name.start..parts.name.end];
            self.out
                .push(DelimiterToken::opening(line, parts.colons.len(), name));
            return;
        }

        if let Some(colons) = match_closing(trimmed) {
            self.out.push(DelimiterToken::closing(line, colons.len()));
        }
    }

    pub fn finish(self) -> Vec<DelimiterToken> {
        self.out
    }
}

/// Scans every line of `document` with the default options.
pub fn scan<D: TextDocument + ?Sized>(document: &D) -> Result<Vec<DelimiterToken>, DocumentError> {
    scan_with(document, &ScanOptions::default())
}

pub fn scan_with<D: TextDocument + ?Sized>(
    document: &D,
    options: &ScanOptions,
) -> Result<Vec<DelimiterToken>, DocumentError> {
    let mut scanner = DocumentScanner::new(*options);
    for line in 0..document.line_count() {
        scanner.push(line, &document.line(line)?);
    }
    let tokens = scanner.finish();
    log::trace!(
        "scanned {} lines into {} delimiter tokens",
        document.line_count(),
        tokens.len()
    );
    Ok(tokens)
}

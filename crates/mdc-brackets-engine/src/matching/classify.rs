use super::{
    patterns::{match_closing, match_opening},
    token::Role,
};

/// A cursor found on a delimiter of the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified {
    pub colon_count: usize,
    pub role: Role,
}

/// Decides whether a cursor column sits on a delimiter.
///
/// Only the cursor's own line is inspected. There is no fence awareness here;
/// a hit only means a document scan is worth running.
pub struct PositionClassifier;

impl PositionClassifier {
    /// Classifies `column` (UTF-16 units) within `line_text`.
    ///
    /// An opening qualifies from its first colon through the last name
    /// character. A closing qualifies anywhere within its colon run or on
    /// either boundary. A line that looks like an opening is never
    /// considered as a closing.
    pub fn classify(&self, line_text: &str, column: usize) -> Option<Classified> {
        if let Some(parts) = match_opening(line_text) {
            let (start, end) = parts.full().columns(line_text);
            return (start..end).contains(&column).then_some(Classified {
                colon_count: parts.colons.len(),
                role: Role::Opening,
            });
        }

        let colons = match_closing(line_text)?;
        let (start, end) = colons.columns(line_text);
        (start..=end).contains(&column).then_some(Classified {
            colon_count: colons.len(),
            role: Role::Closing,
        })
    }
}

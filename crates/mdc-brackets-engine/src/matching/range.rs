use crate::{
    position::Range,
    text::{DocumentError, TextDocument, utf16_len},
};

use super::{
    patterns::{match_closing_tail, match_opening},
    token::{DelimiterToken, Role},
};

/// Computes the on-screen range of `token` by re-reading its line.
///
/// Openings cover colons and name; closings cover the colon run only. Leading
/// indentation is excluded. If the delimiter can no longer be found on the
/// line, the whole line is returned.
pub fn range_of<D: TextDocument + ?Sized>(
    document: &D,
    token: &DelimiterToken,
) -> Result<Range, DocumentError> {
    let text = document.line(token.line)?;

    let span = match token.role {
        Role::Opening => match_opening(&text).map(|parts| parts.full()),
        Role::Closing => match_closing_tail(&text),
    };

    let range = match span {
        Some(sp) => {
            let (start, end) = sp.columns(&text);
            Range::on_line(token.line, start, end)
        }
        None => {
            log::trace!(
                "delimiter missing from line {} on re-read, using whole line",
                token.line
            );
            Range::on_line(token.line, 0, utf16_len(&text))
        }
    };
    Ok(range)
}

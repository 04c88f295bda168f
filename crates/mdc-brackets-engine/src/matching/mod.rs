//! # Delimiter Matching
//!
//! Finds the partner of a colon delimiter (`::name` ... `::`) under the
//! cursor, the way an editor highlights matching brackets.
//!
//! ## Query Phases
//!
//! 1. **Classification** (`classify`): The cursor's line alone decides whether
//!    the cursor is on a delimiter. A miss ends the query without scanning.
//! 2. **Scanning** (`scanner`): A `DocumentScanner` sweeps every line,
//!    skipping fenced code, and emits `DelimiterToken`s in line order
//! 3. **Pairing** (`matcher`): A colon-count-aware stack walk from the
//!    cursor's token finds its partner
//! 4. **Ranges** (`range`): Both tokens are re-read from their lines and
//!    turned into UTF-16 column ranges
//!
//! ## Modules
//!
//! - **`patterns`**: Regexes for opening, closing and fence lines
//! - **`fence`**: `CodeFence` detection and the inside/outside `FenceState`
//! - **`token`**: `DelimiterToken` and its `Role`
//! - **`classify`**: `PositionClassifier`
//! - **`scanner`**: `DocumentScanner`, `scan`, `scan_with`
//! - **`matcher`**: `find_partner`
//! - **`range`**: `range_of`
//!
//! ## Key Invariants
//!
//! - An opening of N colons only pairs with a closing of exactly N colons
//! - Lines inside fenced code never produce tokens
//! - Every query rescans the whole document; nothing is cached

pub mod classify;
pub mod fence;
pub mod matcher;
pub mod patterns;
pub mod range;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod tests;

pub use classify::{Classified, PositionClassifier};
pub use fence::{CodeFence, FenceMode, FenceSig, FenceState};
pub use matcher::find_partner;
pub use range::range_of;
pub use scanner::{DocumentScanner, scan, scan_with};
pub use token::{DelimiterToken, Role};

use crate::{
    position::{Position, Range},
    text::{DocumentError, TextDocument},
};

/// Options that change how documents are scanned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    pub fence_mode: FenceMode,
}

/// A matched delimiter pair.
///
/// `opening` is always the textually earlier delimiter, whichever one the
/// cursor was on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BracketMatch {
    pub opening: Range,
    pub closing: Range,
    pub colon_count: usize,
}

/// Faults that abort a query. Never surfaced by the public query functions.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("Line {line} changed between classification and scan")]
    StaleLine { line: usize },
}

/// Finds the delimiter paired with the one under `position`.
///
/// Returns `None` when the cursor is not on a delimiter, the delimiter is
/// unmatched, or anything goes wrong while reading the document.
pub fn find_matching_brackets<D: TextDocument + ?Sized>(
    document: &D,
    position: Position,
) -> Option<BracketMatch> {
    find_matching_brackets_with(document, position, &ScanOptions::default())
}

pub fn find_matching_brackets_with<D: TextDocument + ?Sized>(
    document: &D,
    position: Position,
    options: &ScanOptions,
) -> Option<BracketMatch> {
    match try_find_matching_brackets(document, position, options) {
        Ok(found) => found,
        Err(err) => {
            log::debug!(
                "no bracket match at {}:{}: {err}",
                position.line,
                position.column
            );
            None
        }
    }
}

fn try_find_matching_brackets<D: TextDocument + ?Sized>(
    document: &D,
    position: Position,
    options: &ScanOptions,
) -> Result<Option<BracketMatch>, MatchError> {
    let line = document.line(position.line)?;
    let Some(classified) = PositionClassifier.classify(&line, position.column) else {
        return Ok(None);
    };

    let tokens = scan_with(document, options)?;
    let Some(current) = tokens.iter().position(|t| t.line == position.line) else {
        return Ok(None);
    };

    let token = &tokens[current];
    if token.role != classified.role || token.colon_count != classified.colon_count {
        return Err(MatchError::StaleLine {
            line: position.line,
        });
    }

    let Some(partner) = find_partner(&tokens, current) else {
        log::trace!(
            "{}-colon delimiter on line {} is unmatched",
            token.colon_count,
            token.line
        );
        return Ok(None);
    };

    pair(document, token, &tokens[partner]).map(Some)
}

/// Every pair that resolves the same way from both of its delimiters, in
/// order of the opening line.
///
/// Each returned pair equals what [`find_matching_brackets_with`] reports for
/// a cursor on either delimiter.
pub fn find_all_pairs<D: TextDocument + ?Sized>(
    document: &D,
    options: &ScanOptions,
) -> Vec<BracketMatch> {
    match try_find_all_pairs(document, options) {
        Ok(pairs) => pairs,
        Err(err) => {
            log::debug!("pair listing abandoned: {err}");
            vec![]
        }
    }
}

fn try_find_all_pairs<D: TextDocument + ?Sized>(
    document: &D,
    options: &ScanOptions,
) -> Result<Vec<BracketMatch>, MatchError> {
    let tokens = scan_with(document, options)?;
    let mut pairs = vec![];

    for (index, token) in tokens.iter().enumerate() {
        if !token.is_opening() {
            continue;
        }
        let Some(partner) = find_partner(&tokens, index) else {
            continue;
        };
        if find_partner(&tokens, partner) != Some(index) {
            continue;
        }
        pairs.push(pair(document, token, &tokens[partner])?);
    }
    Ok(pairs)
}

fn pair<D: TextDocument + ?Sized>(
    document: &D,
    current: &DelimiterToken,
    partner: &DelimiterToken,
) -> Result<BracketMatch, MatchError> {
    let (opening, closing) = if current.line <= partner.line {
        (current, partner)
    } else {
        (partner, current)
    };

    Ok(BracketMatch {
        opening: range_of(document, opening)?,
        closing: range_of(document, closing)?,
        colon_count: current.colon_count,
    })
}

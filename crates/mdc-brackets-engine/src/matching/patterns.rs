//! Line patterns for colon delimiters, compiled once.
//!
//! All patterns tolerate leading whitespace so they can run against either a
//! raw line or its trimmed form.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::text::Span;

/// `::name`: capture 1 is the colon run, capture 2 the component name.
pub fn opening() -> &'static Regex {
    static OPENING_REGEX: OnceLock<Regex> = OnceLock::new();
    OPENING_REGEX.get_or_init(|| {
        Regex::new(r"^\s*(:{2,})([A-Za-z0-9_-]+)").expect("Invalid opening delimiter regex")
    })
}

/// A line holding nothing but a colon run.
pub fn closing() -> &'static Regex {
    static CLOSING_REGEX: OnceLock<Regex> = OnceLock::new();
    CLOSING_REGEX.get_or_init(|| {
        Regex::new(r"^\s*(:{2,})\s*$").expect("Invalid closing delimiter regex")
    })
}

/// Right-anchored colon run, used to locate a closing delimiter in its line.
pub fn closing_tail() -> &'static Regex {
    static CLOSING_TAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    CLOSING_TAIL_REGEX
        .get_or_init(|| Regex::new(r"(:{2,})\s*$").expect("Invalid closing tail regex"))
}

/// Colon run and name of an opening delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningParts {
    pub colons: Span,
    pub name: Span,
}

impl OpeningParts {
    fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        Some(Self {
            colons: caps.get(1)?.into(),
            name: caps.get(2)?.into(),
        })
    }

    /// Span of the whole delimiter, colons through name.
    pub fn full(&self) -> Span {
        self.colons.to(self.name)
    }
}

pub fn match_opening(text: &str) -> Option<OpeningParts> {
    opening()
        .captures(text)
        .and_then(|caps| OpeningParts::from_captures(&caps))
}

/// Colon run of a line that is a closing delimiter.
pub fn match_closing(text: &str) -> Option<Span> {
    closing().captures(text)?.get(1).map(Span::from)
}

/// Colon run ending the line, wherever it starts.
pub fn match_closing_tail(text: &str) -> Option<Span> {
    closing_tail().captures(text)?.get(1).map(Span::from)
}

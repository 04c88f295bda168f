//! End-to-end tests for bracket matching.
//!
//! Uses snapshot testing with YAML format for readability.
//! Fixtures (.md) and snapshots (.snap) are co-located in `fixtures/`.


use std::{borrow::Cow, cell::Cell};

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    matching::{
        BracketMatch, FenceMode, ScanOptions, find_all_pairs, find_matching_brackets,
        find_matching_brackets_with, scan_with,
    },
    position::{Position, Range},
    text::{DocumentError, RopeDocument, TextDocument},
};

// Fixture-based snapshot tests

#[test]
fn fixture_nested_same_count() {
    assert_fixture("nested_same_count");
}

#[test]
fn fixture_fenced_example() {
    assert_fixture("fenced_example");
}

#[test]
fn fixture_mixed_colon_counts() {
    assert_fixture("mixed_colon_counts");
}

#[test]
fn fixture_unbalanced() {
    assert_fixture("unbalanced");
}

#[test]
fn fixture_crossed_counts() {
    assert_fixture("crossed_counts");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!(
        "{}/src/matching/tests/fixtures",
        env!("CARGO_MANIFEST_DIR")
    );
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let doc = RopeDocument::from(md.as_str());
    let options = ScanOptions::default();

    let tokens = scan_with(&doc, &options).unwrap();
    let pairs = find_all_pairs(&doc, &options);
    invariants::check(&doc, &options, &pairs);

    let snap = normalize::normalize(&tokens, &pairs);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_yaml_snapshot!(name, snap);
    });
}

// Query scenarios

fn pair(open: (usize, usize, usize), close: (usize, usize, usize), colons: usize) -> BracketMatch {
    BracketMatch {
        opening: Range::on_line(open.0, open.1, open.2),
        closing: Range::on_line(close.0, close.1, close.2),
        colon_count: colons,
    }
}

#[test]
fn minimal_pair_matches_from_every_opening_column() {
    let doc = ["::name", "text", "::"];
    for column in 0..6 {
        assert_eq!(
            find_matching_brackets(&doc, Position::new(0, column)),
            Some(pair((0, 0, 6), (2, 0, 2), 2)),
            "column {column}"
        );
    }
}

#[test]
fn nested_same_count_pairs_resolve_by_depth() {
    let doc = ["::outer", "::inner", "content", "::", "::"];
    assert_eq!(
        find_matching_brackets(&doc, Position::new(1, 0)),
        Some(pair((1, 0, 7), (3, 0, 2), 2))
    );
    assert_eq!(
        find_matching_brackets(&doc, Position::new(0, 0)),
        Some(pair((0, 0, 7), (4, 0, 2), 2))
    );
}

#[test]
fn fenced_delimiters_are_ignored() {
    let doc = ["::component", "```", "::fake", "::", "```", "::"];
    assert_eq!(
        find_matching_brackets(&doc, Position::new(0, 0)),
        Some(pair((0, 0, 11), (5, 0, 2), 2))
    );
}

#[test]
fn cursor_on_fenced_delimiter_finds_nothing() {
    let doc = ["::component", "```", "::fake", "::", "```", "::"];
    assert_eq!(find_matching_brackets(&doc, Position::new(2, 1)), None);
    assert_eq!(find_matching_brackets(&doc, Position::new(3, 1)), None);
}

#[test]
fn missing_closing_leaves_outer_unmatched() {
    let doc = ["::outer", "::inner", "::"];
    assert_eq!(find_matching_brackets(&doc, Position::new(0, 0)), None);
    assert_eq!(
        find_matching_brackets(&doc, Position::new(2, 0)),
        Some(pair((1, 0, 7), (2, 0, 2), 2))
    );
}

#[rstest]
#[case(&[":::warning", "text", "::"])]
#[case(&["::warning", "text", ":::"])]
fn colon_counts_must_agree(#[case] doc: &[&str]) {
    assert_eq!(find_matching_brackets(doc, Position::new(0, 0)), None);
    assert_eq!(find_matching_brackets(doc, Position::new(2, 0)), None);
}

#[test]
fn inner_pairs_nest_inside_wider_fence() {
    let doc = [":::grid", "::card", "a", "::", "::card", "b", "::", ":::"];
    assert_eq!(
        find_matching_brackets(&doc, Position::new(0, 2)),
        Some(pair((0, 0, 7), (7, 0, 3), 3))
    );
    assert_eq!(
        find_matching_brackets(&doc, Position::new(4, 3)),
        Some(pair((4, 0, 6), (6, 0, 2), 2))
    );
    assert_eq!(
        find_matching_brackets(&doc, Position::new(3, 2)),
        Some(pair((1, 0, 6), (3, 0, 2), 2))
    );
}

#[test]
fn query_from_either_end_gives_same_match() {
    let doc = ["  ::callout{icon=i}", "  body", "  ::  "];
    let from_opening = find_matching_brackets(&doc, Position::new(0, 4));
    let from_closing = find_matching_brackets(&doc, Position::new(2, 3));
    assert_eq!(from_opening, Some(pair((0, 2, 11), (2, 2, 4), 2)));
    assert_eq!(from_opening, from_closing);
}

#[test]
fn repeated_queries_are_identical() {
    let doc = RopeDocument::from(":::tabs\n::tab\none\n::\n:::\n");
    let first = find_matching_brackets(&doc, Position::new(0, 1));
    for _ in 0..3 {
        assert_eq!(find_matching_brackets(&doc, Position::new(0, 1)), first);
    }
    assert!(first.is_some());
}

#[rstest]
#[case(Position::new(0, 7))]
#[case(Position::new(1, 0))]
#[case(Position::new(2, 1))]
#[case(Position::new(2, 5))]
fn positions_off_delimiters_find_nothing(#[case] position: Position) {
    let doc = ["::note", "prose with :: inside", "  ::  "];
    assert_eq!(find_matching_brackets(&doc, position), None);
}

#[test]
fn extra_closing_is_unmatched() {
    let doc = ["::", "::note", "::"];
    assert_eq!(find_matching_brackets(&doc, Position::new(0, 0)), None);
}

#[test]
fn utf16_columns_in_ranges() {
    let doc = ["\u{3000}::card", "🦀 crab", "\u{3000}::"];
    assert_eq!(
        find_matching_brackets(&doc, Position::new(2, 1)),
        Some(pair((0, 1, 7), (2, 1, 3), 2))
    );
}

#[test]
fn strict_fences_need_matching_marker() {
    let doc = ["```", "~~~", "::b", "::", "```"];
    let strict = ScanOptions {
        fence_mode: FenceMode::MatchKind,
    };
    assert_eq!(
        find_matching_brackets(&doc, Position::new(2, 0)),
        Some(pair((2, 0, 3), (3, 0, 2), 2))
    );
    assert_eq!(
        find_matching_brackets_with(&doc, Position::new(2, 0), &strict),
        None
    );
}

#[test]
fn position_past_document_end_is_none() {
    let doc = ["::note", "::"];
    assert_eq!(find_matching_brackets(&doc, Position::new(9, 0)), None);
}

/// A document whose reads fail after the cursor line has been served.
struct FlakyDocument {
    lines: Vec<&'static str>,
    fail_on: usize,
}

impl TextDocument for FlakyDocument {
    fn line(&self, line: usize) -> Result<Cow<'_, str>, DocumentError> {
        if line == self.fail_on {
            return Err(DocumentError::Unavailable {
                reason: "buffer closed".into(),
            });
        }
        self.lines.line(line)
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }
}

#[test]
fn accessor_failure_degrades_to_no_match() {
    let doc = FlakyDocument {
        lines: vec!["::note", "body", "::"],
        fail_on: 1,
    };
    assert_eq!(find_matching_brackets(&doc, Position::new(0, 0)), None);
    assert!(find_all_pairs(&doc, &ScanOptions::default()).is_empty());
}

/// Returns `first` for line 0 on the first read and `later` on every read after.
struct ShiftingDocument {
    first: &'static str,
    later: &'static str,
    rest: Vec<&'static str>,
    reads: Cell<usize>,
}

impl TextDocument for ShiftingDocument {
    fn line(&self, line: usize) -> Result<Cow<'_, str>, DocumentError> {
        if line > 0 {
            return self.rest.line(line - 1);
        }
        let reads = self.reads.get();
        self.reads.set(reads + 1);
        Ok(Cow::Borrowed(if reads == 0 { self.first } else { self.later }))
    }

    fn line_count(&self) -> usize {
        self.rest.len() + 1
    }
}

#[test]
fn line_edited_during_query_degrades_to_no_match() {
    let doc = ShiftingDocument {
        first: "::note",
        later: ":::note",
        rest: vec![":::"],
        reads: Cell::new(0),
    };
    // Classified as `::` but scanned as `:::`, which would otherwise pair with line 1.
    assert_eq!(find_matching_brackets(&doc, Position::new(0, 0)), None);
    assert!(doc.reads.get() >= 2);
}

#[test]
fn empty_document_has_no_pairs() {
    let doc = RopeDocument::from("");
    assert!(find_all_pairs(&doc, &ScanOptions::default()).is_empty());
    assert_eq!(find_matching_brackets(&doc, Position::new(0, 0)), None);
}

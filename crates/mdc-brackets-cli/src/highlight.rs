use mdc_brackets_engine::{BracketMatch, Range, TextDocument, text::utf16_to_byte};

/// The decoration set for a match: one range per delimiter, opening first.
///
/// Replacing the previous set with this one on every cursor move is the
/// caller's job; nothing here remembers earlier matches.
pub fn highlight_ranges(found: &BracketMatch) -> [Range; 2] {
    [found.opening, found.closing]
}

/// 1-based `line:column-line:column` form of a range, as editors show it.
pub fn describe(range: Range) -> String {
    format!(
        "{}:{}-{}:{}",
        range.start_line + 1,
        range.start_column + 1,
        range.end_line + 1,
        range.end_column + 1
    )
}

/// `line_text` followed by a marker line with `^` under `range`.
///
/// Tabs before the range are kept so the markers line up in a terminal.
pub fn underline(line_text: &str, range: Range) -> String {
    let start = utf16_to_byte(line_text, range.start_column);
    let end = utf16_to_byte(line_text, range.end_column).max(start);
    let pad: String = line_text[..start]
        .chars()
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();
    let marks = "^".repeat(line_text[start..end].chars().count().max(1));
    format!("{line_text}\n{pad}{marks}")
}

/// Renders a match as text: colon count, then each delimiter with its range
/// and an underlined copy of its line.
pub fn render_match<D: TextDocument + ?Sized>(
    document: &D,
    found: &BracketMatch,
) -> anyhow::Result<String> {
    let mut out = format!("colons {}\n", found.colon_count);
    for (label, range) in ["opening", "closing"].into_iter().zip(highlight_ranges(found)) {
        let text = document.line(range.start_line)?;
        out.push_str(&format!(
            "{label} {}\n{}\n",
            describe(range),
            underline(&text, range)
        ));
    }
    Ok(out)
}

//! Heuristic text-to-table segmentation.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::Row;

/// Cell delimiters, as a single combined pattern: a run of two-or-more
/// whitespace characters, a tab, or a comma. Any one of these shapes ends a
/// cell; this is one split pass, not a priority cascade.
fn delimiter() -> &'static Regex {
    static DELIMITER: OnceLock<Regex> = OnceLock::new();
    DELIMITER.get_or_init(|| Regex::new(r"\s{2,}|\t|,").expect("valid delimiter pattern"))
}

/// Segment a block of raw text into rows of cell strings.
///
/// Each input line produces exactly one [`Row`]: lines where the delimiter
/// pattern matches split into multiple cells; lines without a delimiter
/// become a one-cell row holding the trimmed line verbatim. An empty line
/// becomes a one-cell row with an empty string, so the emitted row count
/// always equals the input line count.
///
/// Pure function; cannot fail.
pub fn segment(raw_text: &str) -> Vec<Row> {
    // split('\n') rather than lines(): a trailing newline is a final empty
    // line and must still produce a row.
    raw_text
        .split('\n')
        .map(|line| {
            let line = line.trim();
            let cells: Vec<String> = delimiter().split(line).map(str::to_string).collect();
            if cells.len() > 1 {
                Row::new(cells)
            } else {
                Row::single(line)
            }
        })
        .collect()
}

//! Parsing of free-text roster input.
//!
//! Roster sources (a pasted list, a spreadsheet column) hand over raw text.
//! These helpers normalize it into the shapes the scheduler expects.

use std::collections::{BTreeSet, HashSet};

use crate::models::Day;

/// One name per line: trimmed, blanks dropped, duplicates removed.
///
/// First occurrence wins, so roster order is preserved.
pub fn parse_staff_names(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    text.lines()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

/// Parses a list of day tokens such as `"Mon, wed; Saturday"`.
///
/// Tokens are split on commas, semicolons and whitespace and matched by
/// their first three letters, ignoring case. Unknown tokens are skipped.
pub fn parse_unavailable_days(text: &str) -> BTreeSet<Day> {
    text.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .filter_map(Day::from_prefix)
        .collect()
}

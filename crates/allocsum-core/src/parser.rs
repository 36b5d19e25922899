//! Free-form record parsing.
//!
//! Turns a pasted block of text into one [`AllocationLabel`] per
//! non-blank line. The parser never fails: a line that carries no
//! usable digit sequence degrades to [`AllocationLabel::Unknown`].

use regex::Regex;

use crate::models::AllocationLabel;

/// Parse raw multi-line input into an ordered sequence of labels.
///
/// Each non-blank trimmed line yields exactly one label, in input
/// order:
///
/// 1. split the line on one-or-more whitespace characters or hyphens
///    (a single delimiter class, so `"0244-20GB"` and `"0244 20GB"`
///    split identically),
/// 2. take the second field (empty when fewer than two fields exist),
/// 3. strip every non-digit character from that field,
/// 4. a non-empty digit run becomes `Known(n)`, otherwise `Unknown`.
///
/// The second-field convention assumes the first field is an
/// identifier and the second a human-entered size descriptor
/// (`"20GB"`, `"50 GB"`, `"10-GB"`). Unit suffixes are discarded
/// entirely, so `"20MB"` and `"20GB"` land in the same bucket.
///
/// # Examples
///
/// ```
/// use allocsum_core::models::AllocationLabel;
/// use allocsum_core::parser::parse;
///
/// let labels = parse("02444XXXX 20GB\n0244-20GB\njustoneword");
/// assert_eq!(
///     labels,
///     vec![
///         AllocationLabel::Known(20),
///         AllocationLabel::Known(20),
///         AllocationLabel::Unknown,
///     ]
/// );
/// ```
pub fn parse(raw: &str) -> Vec<AllocationLabel> {
    let delimiter = Regex::new(r"[\s-]+").expect("regex is valid");

    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| extract_label(line, &delimiter))
        .collect()
}

/// Number of non-blank trimmed lines in `raw`.
///
/// Drives the live "records detected" readout, which updates on every
/// input edit regardless of whether processing has been triggered.
pub fn count_records(raw: &str) -> usize {
    raw.lines().filter(|line| !line.trim().is_empty()).count()
}

/// Extract the label for a single non-blank trimmed line.
fn extract_label(line: &str, delimiter: &Regex) -> AllocationLabel {
    let field = delimiter.split(line).nth(1).unwrap_or("");

    let digits: String = field.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        AllocationLabel::Unknown
    } else {
        // Digit runs longer than a u64 saturate rather than fail; the
        // parser must produce a label for every line.
        AllocationLabel::Known(digits.parse().unwrap_or(u64::MAX))
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};
use std::fmt;

/// The normalized bucket identifier assigned to one input record.
///
/// A record either carries an extractable digit sequence in its second
/// field (`Known`) or it does not (`Unknown`). The display string
/// (`"<n> GB"` / `"Unknown"`) is produced only here, at the
/// presentation boundary; everything upstream works with the typed key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllocationLabel {
    /// The numeric allocation magnitude extracted from the record.
    Known(u64),
    /// No digit sequence was found in the expected field.
    Unknown,
}

impl fmt::Display for AllocationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationLabel::Known(n) => write!(f, "{} GB", n),
            AllocationLabel::Unknown => write!(f, "Unknown"),
        }
    }
}

/// One `(label, count)` pair in the aggregated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    /// The bucket this entry counts.
    pub label: AllocationLabel,
    /// Number of records that fell into the bucket, always ≥ 1.
    pub count: u64,
}

/// The aggregated result of one processing pass.
///
/// Entries are unique by label and ordered by the first occurrence of
/// each label in the parsed input. A `Summary` is replaced wholesale on
/// every trigger; it is never merged with a previous result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// One entry per distinct label, in first-occurrence order.
    pub entries: Vec<SummaryEntry>,
}

impl Summary {
    /// Sum of all entry counts, equal to the number of parsed records.
    pub fn total_entries(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Share of the total represented by `count`, as a raw percentage.
    ///
    /// Returns `0.0` when the summary is empty so callers never divide
    /// by zero.
    pub fn percentage_of(&self, count: u64) -> f64 {
        let total = self.total_entries();
        if total == 0 {
            return 0.0;
        }
        (count as f64 / total as f64) * 100.0
    }

    /// Whether any records have been aggregated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── AllocationLabel ────────────────────────────────────────────────────

    #[test]
    fn test_label_display_known() {
        assert_eq!(AllocationLabel::Known(20).to_string(), "20 GB");
        assert_eq!(AllocationLabel::Known(0).to_string(), "0 GB");
        assert_eq!(AllocationLabel::Known(1024).to_string(), "1024 GB");
    }

    #[test]
    fn test_label_display_unknown() {
        assert_eq!(AllocationLabel::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_label_display_matches_pattern() {
        // Every rendered label is either "Unknown" or digits + " GB".
        for label in [
            AllocationLabel::Known(7),
            AllocationLabel::Known(u64::MAX),
            AllocationLabel::Unknown,
        ] {
            let s = label.to_string();
            let well_formed = s == "Unknown"
                || (s.ends_with(" GB")
                    && !s[..s.len() - 3].is_empty()
                    && s[..s.len() - 3].bytes().all(|b| b.is_ascii_digit()));
            assert!(well_formed, "malformed label: {s}");
        }
    }

    #[test]
    fn test_label_equality_and_hash_key() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(AllocationLabel::Known(20), 1u64);
        *map.entry(AllocationLabel::Known(20)).or_insert(0) += 1;
        assert_eq!(map[&AllocationLabel::Known(20)], 2);
        assert_ne!(AllocationLabel::Known(20), AllocationLabel::Unknown);
    }

    // ── Summary ────────────────────────────────────────────────────────────

    fn make_summary() -> Summary {
        Summary {
            entries: vec![
                SummaryEntry {
                    label: AllocationLabel::Known(20),
                    count: 2,
                },
                SummaryEntry {
                    label: AllocationLabel::Known(50),
                    count: 1,
                },
                SummaryEntry {
                    label: AllocationLabel::Unknown,
                    count: 1,
                },
            ],
        }
    }

    #[test]
    fn test_summary_total_entries() {
        assert_eq!(make_summary().total_entries(), 4);
    }

    #[test]
    fn test_summary_percentage_of() {
        let summary = make_summary();
        assert!((summary.percentage_of(2) - 50.0).abs() < 1e-9);
        assert!((summary.percentage_of(1) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_empty_percentage_is_zero() {
        // Degenerate case: no entries must not divide by zero.
        let summary = Summary::default();
        assert_eq!(summary.total_entries(), 0);
        assert_eq!(summary.percentage_of(0), 0.0);
        assert!(summary.is_empty());
    }

    // ── serde ──────────────────────────────────────────────────────────────

    #[test]
    fn test_summary_serde_round_trip() {
        let summary = make_summary();
        let json = serde_json::to_string(&summary).unwrap();
        let back: Summary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}

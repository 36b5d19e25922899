//! Frequency aggregation of parsed allocation labels.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{AllocationLabel, Summary, SummaryEntry};

/// Stateless helper that counts label occurrences.
pub struct SummaryAggregator;

impl SummaryAggregator {
    /// Count occurrences of each distinct label in a single pass.
    ///
    /// Entries are emitted in the order each label was first seen, so
    /// the table and chart render in input order. Guarantees: the sum
    /// of counts equals `labels.len()`, no label appears twice, every
    /// count is ≥ 1.
    pub fn aggregate(labels: &[AllocationLabel]) -> Summary {
        let mut entries: Vec<SummaryEntry> = Vec::new();
        let mut index: HashMap<AllocationLabel, usize> = HashMap::new();

        for &label in labels {
            match index.get(&label) {
                Some(&slot) => entries[slot].count += 1,
                None => {
                    index.insert(label, entries.len());
                    entries.push(SummaryEntry { label, count: 1 });
                }
            }
        }

        debug!(
            "Aggregated {} records into {} buckets",
            labels.len(),
            entries.len()
        );

        Summary { entries }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

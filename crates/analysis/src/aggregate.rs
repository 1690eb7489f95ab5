//! Count aggregation for the dashboard charts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use skillgap_model::{Priority, RecommendationRecord, Skill};

/// Label reserved for skills without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// One slice of the category chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Category label, or [`UNCATEGORIZED`].
    pub category: String,
    pub count: u64,
}

/// Counts skills per category, in first-occurrence order.
///
/// Missing and empty category strings fold into [`UNCATEGORIZED`]. The
/// output order is the order categories first appear in the input, which
/// drives the chart legend. Every input skill is counted exactly once, so
/// the counts always sum to the input length.
pub fn count_by_category(skills: &[Skill]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for skill in skills {
        let category = match skill.category.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => UNCATEGORIZED,
        };
        match index.get(category) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(category.to_string(), counts.len());
                counts.push(CategoryCount {
                    category: category.to_string(),
                    count: 1,
                });
            }
        }
    }

    counts
}

/// Recommendation counts per priority, all three slots always present.
///
/// Built zero-filled and incremented per matching record, so the chart
/// axis shows {High, Medium, Low} even when a bucket is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityCount {
    pub high: u64,
    pub medium: u64,
    pub low: u64,
}

impl PriorityCount {
    /// Count for one priority bucket.
    pub fn get(&self, priority: Priority) -> u64 {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }

    /// Sum across all buckets. At most the length of the counted input;
    /// records with non-canonical labels are not counted anywhere.
    pub fn total(&self) -> u64 {
        self.high + self.medium + self.low
    }

    /// Buckets in fixed {High, Medium, Low} order for charting.
    pub fn as_slices(&self) -> [(Priority, u64); 3] {
        [
            (Priority::High, self.high),
            (Priority::Medium, self.medium),
            (Priority::Low, self.low),
        ]
    }
}

/// Counts recommendations per priority bucket.
///
/// Only records whose priority string is exactly one of the canonical
/// capitalized labels are counted; anything else is silently skipped.
/// That exclusion is the upstream contract, not a defect: labels outside
/// the vocabulary neither error nor inflate a bucket.
pub fn count_by_priority(records: &[RecommendationRecord]) -> PriorityCount {
    let mut counts = PriorityCount::default();
    for record in records {
        match Priority::from_exact(&record.priority) {
            Some(Priority::High) => counts.high += 1,
            Some(Priority::Medium) => counts.medium += 1,
            Some(Priority::Low) => counts.low += 1,
            None => {}
        }
    }
    counts
}

use serde::{Deserialize, Serialize};

/// Urgency classification for a gap or training recommendation.
///
/// The upstream API emits exactly the capitalized labels `"High"`,
/// `"Medium"`, and `"Low"`. Gap and recommendation records keep their
/// priority as a raw string on the wire so unrecognized labels survive
/// deserialization; this enum is the closed vocabulary the aggregation
/// layer maps those strings into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Significant deficit, address first.
    High,
    /// Moderate deficit.
    Medium,
    /// Minor deficit.
    Low,
}

impl Priority {
    /// All priorities in display order (high to low).
    ///
    /// Charts and counters iterate this so output order is fixed
    /// regardless of input order.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Parses a label matching only the canonical capitalized spellings.
    ///
    /// Returns `None` for anything else, including case variants. The
    /// priority aggregator uses this: records carrying a non-canonical
    /// label are deliberately left uncounted rather than coerced or
    /// rejected.
    ///
    /// ```
    /// use skillgap_model::Priority;
    ///
    /// assert_eq!(Priority::from_exact("High"), Some(Priority::High));
    /// assert_eq!(Priority::from_exact("high"), None);
    /// assert_eq!(Priority::from_exact("Unknown"), None);
    /// ```
    pub fn from_exact(label: &str) -> Option<Priority> {
        match label {
            "High" => Some(Priority::High),
            "Medium" => Some(Priority::Medium),
            "Low" => Some(Priority::Low),
            _ => None,
        }
    }

    /// Parses a label case-insensitively.
    ///
    /// The display classifier uses this so `"HIGH"` still picks up
    /// high-priority styling even though the aggregator would not count it.
    pub fn from_label(label: &str) -> Option<Priority> {
        if label.eq_ignore_ascii_case("high") {
            Some(Priority::High)
        } else if label.eq_ignore_ascii_case("medium") {
            Some(Priority::Medium)
        } else if label.eq_ignore_ascii_case("low") {
            Some(Priority::Low)
        } else {
            None
        }
    }

    /// Returns the canonical wire label.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_case_sensitive() {
        assert_eq!(Priority::from_exact("High"), Some(Priority::High));
        assert_eq!(Priority::from_exact("Medium"), Some(Priority::Medium));
        assert_eq!(Priority::from_exact("Low"), Some(Priority::Low));
        assert_eq!(Priority::from_exact("HIGH"), None);
        assert_eq!(Priority::from_exact("low"), None);
        assert_eq!(Priority::from_exact(""), None);
        assert_eq!(Priority::from_exact("Critical"), None);
    }

    #[test]
    fn label_match_ignores_case() {
        assert_eq!(Priority::from_label("high"), Some(Priority::High));
        assert_eq!(Priority::from_label("MEDIUM"), Some(Priority::Medium));
        assert_eq!(Priority::from_label("Low"), Some(Priority::Low));
        assert_eq!(Priority::from_label("urgent"), None);
        assert_eq!(Priority::from_label(""), None);
    }

    #[test]
    fn serde_uses_canonical_labels() {
        let json = serde_json::to_string(&Priority::High).unwrap();
        assert_eq!(json, "\"High\"");
        let parsed: Priority = serde_json::from_str("\"Medium\"").unwrap();
        assert_eq!(parsed, Priority::Medium);
    }

    #[test]
    fn all_is_ordered_high_to_low() {
        assert_eq!(
            Priority::ALL,
            [Priority::High, Priority::Medium, Priority::Low]
        );
    }
}

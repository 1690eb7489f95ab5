use skillgap_model::Priority;

/// Display category for a priority label.
///
/// This is what the view layer keys its styling on. `None` is a real
/// category ("no special styling"), not a missing value: the classifier
/// is total and an unrecognized label degrades there instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityStyle {
    /// High-priority styling.
    High,
    /// Medium-priority styling.
    Medium,
    /// Low-priority styling.
    Low,
    /// No special styling.
    None,
}

impl PriorityStyle {
    /// Stable class name for this style; empty for [`PriorityStyle::None`].
    pub fn class_name(&self) -> &'static str {
        match self {
            PriorityStyle::High => "high-priority",
            PriorityStyle::Medium => "medium-priority",
            PriorityStyle::Low => "low-priority",
            PriorityStyle::None => "",
        }
    }
}

impl From<Priority> for PriorityStyle {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::High => PriorityStyle::High,
            Priority::Medium => PriorityStyle::Medium,
            Priority::Low => PriorityStyle::Low,
        }
    }
}

/// Maps a raw priority label to its display category, case-insensitively.
///
/// ```
/// use skillgap_analysis::{priority_style, PriorityStyle};
///
/// assert_eq!(priority_style("High"), PriorityStyle::High);
/// assert_eq!(priority_style("LOW"), PriorityStyle::Low);
/// assert_eq!(priority_style("whenever"), PriorityStyle::None);
/// assert_eq!(priority_style(""), PriorityStyle::None);
/// ```
pub fn priority_style(label: &str) -> PriorityStyle {
    match Priority::from_label(label) {
        Some(priority) => priority.into(),
        None => PriorityStyle::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_labels_map_to_styles() {
        assert_eq!(priority_style("High"), PriorityStyle::High);
        assert_eq!(priority_style("Medium"), PriorityStyle::Medium);
        assert_eq!(priority_style("Low"), PriorityStyle::Low);
    }

    #[test]
    fn classification_ignores_case() {
        assert_eq!(priority_style("high"), PriorityStyle::High);
        assert_eq!(priority_style("mEdIuM"), PriorityStyle::Medium);
        assert_eq!(priority_style("LOW"), PriorityStyle::Low);
    }

    #[test]
    fn unrecognized_labels_degrade_to_none() {
        assert_eq!(priority_style(""), PriorityStyle::None);
        assert_eq!(priority_style("Critical"), PriorityStyle::None);
        assert_eq!(priority_style("high "), PriorityStyle::None);
    }

    #[test]
    fn class_names_match_display_vocabulary() {
        assert_eq!(PriorityStyle::High.class_name(), "high-priority");
        assert_eq!(PriorityStyle::Medium.class_name(), "medium-priority");
        assert_eq!(PriorityStyle::Low.class_name(), "low-priority");
        assert_eq!(PriorityStyle::None.class_name(), "");
    }
}

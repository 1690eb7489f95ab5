//! Summary view-models for the analysis section and dashboard tiles.

use serde::{Deserialize, Serialize};
use skillgap_model::{
    GapAnalysisResponse, GapRecord, Priority, RecommendationRecord, RecommendationsResponse,
};

/// Shaped result of a gap-analysis run.
///
/// The raw analyzed/total figures travel through unchanged; `deficits`
/// narrows the record list to the pairs actually requiring attention.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GapSummary {
    /// How many employees the upstream run covered.
    pub analyzed_employees: u64,
    /// Deficit count the upstream reported for the whole run.
    pub total_gaps_found: u64,
    /// Records with a negative gap score, in upstream order.
    pub deficits: Vec<GapRecord>,
}

impl GapSummary {
    /// Builds a summary from a gap-analysis payload, or the zero summary
    /// when no analysis has run yet.
    ///
    /// Filtering preserves input order and is idempotent: a record lands
    /// in `deficits` exactly when its gap score is negative.
    pub fn from_report(report: Option<&GapAnalysisResponse>) -> Self {
        let Some(report) = report else {
            return Self::default();
        };
        Self {
            analyzed_employees: report.analyzed_employees,
            total_gaps_found: report.total_gaps_found,
            deficits: report
                .results
                .iter()
                .filter(|record| record.is_deficit())
                .cloned()
                .collect(),
        }
    }

    /// Number of records requiring attention.
    pub fn deficit_count(&self) -> usize {
        self.deficits.len()
    }
}

/// Shaped result of a recommendation request.
///
/// Passthrough grouping: the record sequence is kept unchanged for detail
/// rendering and the three aggregate totals come straight from upstream.
/// This type's only job is presence validation with zero defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationSummary {
    pub employees_needing_training: u64,
    pub training_hours: f64,
    pub estimated_cost: f64,
    /// Full recommendation list in upstream order.
    pub recommendations: Vec<RecommendationRecord>,
}

impl RecommendationSummary {
    /// Builds a summary from a recommendations payload, or the zero
    /// summary (0 employees, 0.0 hours, 0.0 cost, no records) when the
    /// upstream summary is absent.
    pub fn from_response(response: Option<&RecommendationsResponse>) -> Self {
        let Some(response) = response else {
            return Self::default();
        };
        Self {
            employees_needing_training: response.total_employees_needing_training,
            training_hours: response.total_training_hours,
            estimated_cost: response.total_estimated_cost,
            recommendations: response.recommendations.clone(),
        }
    }
}

/// The two headline gap counters on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapMetrics {
    /// Total recommendation records.
    pub skill_gaps: u64,
    /// Records whose priority is exactly `"High"`.
    pub high_priority_gaps: u64,
}

impl GapMetrics {
    /// Projects the headline counters from a recommendations payload.
    ///
    /// Same zero-default policy as the summary builders: an absent
    /// payload renders both counters as 0.
    pub fn project(response: Option<&RecommendationsResponse>) -> Self {
        let Some(response) = response else {
            return Self::default();
        };
        let high_priority_gaps = response
            .recommendations
            .iter()
            .filter(|record| Priority::from_exact(&record.priority) == Some(Priority::High))
            .count() as u64;
        Self {
            skill_gaps: response.recommendations.len() as u64,
            high_priority_gaps,
        }
    }
}

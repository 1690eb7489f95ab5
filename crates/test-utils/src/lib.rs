//! Shared test fixtures for skillgap crates.
//!
//! Canned records and payload envelopes with the shapes the upstream API
//! produces, plus guards for tests that mutate process-global state.

use std::collections::HashSet;
use std::sync::{LazyLock, Mutex, MutexGuard};

use skillgap_model::{
    Employee, GapAnalysisResponse, GapRecord, RecommendationRecord, RecommendationsResponse, Skill,
};

/// Serialize tests that mutate process-global state (env vars, cwd, etc).
///
/// Acquire this guard at the start of any test that modifies environment
/// variables to prevent race conditions between parallel tests.
pub fn env_guard() -> MutexGuard<'static, ()> {
    static TEST_SERIAL: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));
    TEST_SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// RAII guard for environment variables - restores original value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(v) = &self.previous {
            std::env::set_var(self.key, v);
        } else {
            std::env::remove_var(self.key);
        }
    }
}

/// Set an environment variable and return a guard that restores the original on drop.
pub fn set_env_var(key: &'static str, value: Option<&str>) -> EnvVarGuard {
    let previous = std::env::var(key).ok();
    if let Some(val) = value {
        std::env::set_var(key, val);
    } else {
        std::env::remove_var(key);
    }
    EnvVarGuard { key, previous }
}

/// A skill with just a name and optional category.
pub fn skill(name: &str, category: Option<&str>) -> Skill {
    Skill {
        id: None,
        name: name.to_string(),
        description: None,
        category: category.map(str::to_string),
        created_at: None,
    }
}

/// An employee with the required identifying fields filled in.
pub fn employee(employee_id: &str, first_name: &str, last_name: &str) -> Employee {
    Employee {
        id: None,
        employee_id: employee_id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}.{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        department: None,
        hire_date: None,
        role: None,
    }
}

/// A gap record comparing `current` against `required` levels.
///
/// The gap score is current minus required, matching the upstream
/// computation, so `current < required` produces a deficit.
pub fn gap(
    employee_name: &str,
    skill_name: &str,
    current: u8,
    required: u8,
    priority: &str,
) -> GapRecord {
    let gap_score = i32::from(current) - i32::from(required);
    GapRecord {
        employee_id: None,
        employee_name: employee_name.to_string(),
        skill_id: None,
        skill_name: skill_name.to_string(),
        current_level: current,
        required_level: required,
        gap_score,
        priority: priority.to_string(),
        predicted_training_time: if gap_score < 0 {
            Some(f64::from(gap_score.unsigned_abs()) * 20.0)
        } else {
            None
        },
    }
}

/// A recommendation record with plausible cost and duration estimates.
pub fn recommendation(
    employee_name: &str,
    skill_name: &str,
    priority: &str,
) -> RecommendationRecord {
    RecommendationRecord {
        employee_id: None,
        employee_name: employee_name.to_string(),
        skill_id: None,
        skill_name: skill_name.to_string(),
        skill_category: None,
        current_level: 2,
        target_level: 4,
        gap_size: 2,
        priority: priority.to_string(),
        training_recommendations: vec![
            format!("Intermediate {skill_name} workshop series"),
            format!("Online {skill_name} course with practical projects"),
        ],
        estimated_duration: 40.0,
        cost_estimate: 2000.0,
    }
}

/// Wraps gap records into the envelope `POST /analysis/gaps` returns,
/// deriving the run totals the way the upstream does.
pub fn gap_report(results: Vec<GapRecord>) -> GapAnalysisResponse {
    let analyzed: HashSet<&str> = results
        .iter()
        .map(|record| record.employee_name.as_str())
        .collect();
    let total_gaps_found = results.iter().filter(|record| record.is_deficit()).count() as u64;
    GapAnalysisResponse {
        message: Some("Skill gap analysis completed".to_string()),
        analyzed_employees: analyzed.len() as u64,
        total_gaps_found,
        results,
    }
}

/// Wraps recommendations into the envelope `POST /analysis/recommendations`
/// returns, deriving the three aggregate totals the way the upstream does.
pub fn recommendations_response(
    recommendations: Vec<RecommendationRecord>,
) -> RecommendationsResponse {
    let employees: HashSet<&str> = recommendations
        .iter()
        .map(|record| record.employee_name.as_str())
        .collect();
    RecommendationsResponse {
        total_employees_needing_training: employees.len() as u64,
        total_training_hours: recommendations
            .iter()
            .map(|record| record.estimated_duration)
            .sum(),
        total_estimated_cost: recommendations
            .iter()
            .map(|record| record.cost_estimate)
            .sum(),
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_env_var_sets_and_restores() {
        let _g = env_guard();

        const KEY: &str = "SKILLGAP_TEST_UTILS_TEST_VAR";
        std::env::remove_var(KEY);

        {
            let _guard = set_env_var(KEY, Some("test_value"));
            assert_eq!(std::env::var(KEY).ok(), Some("test_value".to_string()));
        }
        assert!(std::env::var(KEY).is_err());
    }

    #[test]
    fn gap_score_matches_level_comparison() {
        let deficit = gap("Ada Lovelace", "Rust", 2, 4, "High");
        assert_eq!(deficit.gap_score, -2);
        assert!(deficit.is_deficit());
        assert_eq!(deficit.predicted_training_time, Some(40.0));

        let met = gap("Ada Lovelace", "SQL", 3, 3, "Low");
        assert_eq!(met.gap_score, 0);
        assert!(!met.is_deficit());
        assert_eq!(met.predicted_training_time, None);
    }

    #[test]
    fn gap_report_derives_run_totals() {
        let report = gap_report(vec![
            gap("Ada Lovelace", "Rust", 2, 4, "High"),
            gap("Ada Lovelace", "SQL", 3, 3, "Low"),
            gap("Grace Hopper", "COBOL", 1, 3, "High"),
        ]);
        assert_eq!(report.analyzed_employees, 2);
        assert_eq!(report.total_gaps_found, 2);
        assert_eq!(report.results.len(), 3);
    }

    #[test]
    fn recommendations_response_sums_totals() {
        let response = recommendations_response(vec![
            recommendation("Ada Lovelace", "Rust", "High"),
            recommendation("Ada Lovelace", "SQL", "Medium"),
        ]);
        assert_eq!(response.total_employees_needing_training, 1);
        assert_eq!(response.total_training_hours, 80.0);
        assert_eq!(response.total_estimated_cost, 4000.0);
    }
}

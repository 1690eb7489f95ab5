//! Request bodies and response envelopes, one per upstream endpoint.

use serde::{Deserialize, Serialize};

use crate::records::{
    Employee, GapRecord, RecommendationRecord, Skill, SkillAssessment, SkillPrediction,
};

/// `GET /employees`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeesResponse {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub count: u64,
}

/// `GET /skills`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillsResponse {
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub count: u64,
}

/// `GET /skills/categories`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryListResponse {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub count: u64,
}

/// `GET /employees/{id}/skills`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeSkillsResponse {
    #[serde(default)]
    pub employee_id: Option<u64>,
    #[serde(default)]
    pub skills: Vec<SkillAssessment>,
}

/// `POST /analysis/gaps`, the full gap-analysis run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GapAnalysisResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// How many employees the run covered.
    #[serde(default)]
    pub analyzed_employees: u64,
    /// Deficits found across the run (records with a negative gap score).
    #[serde(default)]
    pub total_gaps_found: u64,
    /// Every compared employee/skill pair, deficit or not.
    #[serde(default)]
    pub results: Vec<GapRecord>,
}

/// `GET /analysis/gaps/{employee_id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeGapsResponse {
    #[serde(default)]
    pub employee_id: Option<u64>,
    #[serde(default)]
    pub employee_name: String,
    #[serde(default)]
    pub skill_gaps: Vec<GapRecord>,
    #[serde(default)]
    pub total_gaps: u64,
    #[serde(default)]
    pub high_priority_gaps: u64,
}

/// `POST /analysis/recommendations`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    #[serde(default)]
    pub recommendations: Vec<RecommendationRecord>,
    #[serde(default)]
    pub total_employees_needing_training: u64,
    #[serde(default)]
    pub total_training_hours: f64,
    #[serde(default)]
    pub total_estimated_cost: f64,
}

/// `GET /analysis/predictions/{employee_id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionsResponse {
    #[serde(default)]
    pub employee_id: Option<u64>,
    #[serde(default)]
    pub employee_name: String,
    #[serde(default)]
    pub predictions: Vec<SkillPrediction>,
    #[serde(default)]
    pub total_training_hours: u64,
    #[serde(default)]
    pub average_success_probability: f64,
}

/// `GET /` at the server root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployee {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<u64>,
}

/// Body for `POST /skills`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSkill {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Body for `POST /employees/{id}/skills`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSkillAssessment {
    pub skill_id: u64,
    /// Assessed proficiency, 0-5.
    pub proficiency_level: u8,
}

/// Body for `POST /analysis/gaps`. An empty body analyzes everyone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<u64>,
}

/// Body for `POST /analysis/recommendations`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<u64>,
    /// Priority filter ("high", "medium", "low"). Absent means all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_decodes_to_zeroed_envelopes() {
        let gaps: GapAnalysisResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(gaps.analyzed_employees, 0);
        assert_eq!(gaps.total_gaps_found, 0);
        assert!(gaps.results.is_empty());

        let recs: RecommendationsResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(recs.total_employees_needing_training, 0);
        assert_eq!(recs.total_training_hours, 0.0);
        assert_eq!(recs.total_estimated_cost, 0.0);
        assert!(recs.recommendations.is_empty());
    }

    #[test]
    fn analyze_request_serializes_minimally() {
        let body = serde_json::to_string(&AnalyzeRequest::default()).unwrap();
        assert_eq!(body, "{}");

        let scoped = serde_json::to_string(&AnalyzeRequest {
            employee_id: Some(7),
        })
        .unwrap();
        assert_eq!(scoped, r#"{"employee_id":7}"#);
    }

    #[test]
    fn recommendations_envelope_decodes_totals() {
        let json = r#"{
            "recommendations": [],
            "total_employees_needing_training": 3,
            "total_training_hours": 120.0,
            "total_estimated_cost": 6000.0
        }"#;
        let response: RecommendationsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total_employees_needing_training, 3);
        assert_eq!(response.total_training_hours, 120.0);
        assert_eq!(response.total_estimated_cost, 6000.0);
    }
}

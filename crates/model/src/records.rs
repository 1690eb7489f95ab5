use serde::{Deserialize, Serialize};

/// A skill tracked by the upstream catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    /// Database id; absent on records we are about to create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Unique skill name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-form grouping, e.g. "Technical" or "Soft Skills". Skills
    /// without one are shown under "Uncategorized".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// A job role with required skill levels (required levels live upstream).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// An employee as returned by the employees endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Human-assigned badge id, distinct from the database id.
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl Employee {
    /// Display name, first then last.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One assessed skill on an employee, with proficiency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillAssessment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_id: Option<u64>,
    pub skill_name: String,
    /// Assessed proficiency, 0-5.
    pub proficiency_level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessed_date: Option<String>,
}

/// One employee/skill pair's comparison of current vs. required level,
/// as computed upstream by the gap analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<u64>,
    pub employee_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_id: Option<u64>,
    pub skill_name: String,
    /// Current proficiency, 0-5.
    pub current_level: u8,
    /// Level the role requires, 0-5.
    pub required_level: u8,
    /// Current minus required. Negative means the employee is below the
    /// required level (a deficit).
    pub gap_score: i32,
    /// Raw priority label from upstream. Kept as a string so labels
    /// outside the {High, Medium, Low} vocabulary still decode.
    pub priority: String,
    /// Upstream's training-time estimate in hours, when it sends one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_training_time: Option<f64>,
}

impl GapRecord {
    /// True when the required level exceeds the current level.
    pub fn is_deficit(&self) -> bool {
        self.gap_score < 0
    }
}

/// A suggested training action for a specific employee/skill deficit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<u64>,
    pub employee_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_id: Option<u64>,
    pub skill_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_category: Option<String>,
    /// Current proficiency, 0-5.
    pub current_level: u8,
    /// Level to train towards.
    pub target_level: u8,
    /// Levels behind, always non-negative.
    pub gap_size: u32,
    /// Raw priority label from upstream (see [`GapRecord::priority`]).
    pub priority: String,
    /// Suggested resources, most specific first.
    #[serde(default)]
    pub training_recommendations: Vec<String>,
    /// Estimated training duration in hours.
    pub estimated_duration: f64,
    /// Estimated cost in currency units.
    pub cost_estimate: f64,
}

/// Skill development prediction for one employee/skill pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillPrediction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_id: Option<u64>,
    pub skill_name: String,
    pub current_level: u8,
    pub target_level: u8,
    pub predicted_training_hours: u64,
    /// Estimated probability of closing the gap, 0.0-1.0.
    pub success_probability: f64,
    pub estimated_completion_weeks: u64,
    pub priority: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_record_deficit_follows_sign() {
        let json = r#"{
            "employee_name": "Ada Lovelace",
            "skill_name": "Rust",
            "current_level": 2,
            "required_level": 4,
            "gap_score": -2,
            "priority": "High"
        }"#;
        let record: GapRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_deficit());
        assert_eq!(record.predicted_training_time, None);

        let met = GapRecord {
            gap_score: 0,
            ..record.clone()
        };
        assert!(!met.is_deficit());
        let exceeded = GapRecord {
            gap_score: 1,
            ..record
        };
        assert!(!exceeded.is_deficit());
    }

    #[test]
    fn unknown_priority_label_still_decodes() {
        let json = r#"{
            "employee_name": "Grace Hopper",
            "skill_name": "COBOL",
            "current_level": 5,
            "required_level": 3,
            "gap_score": 2,
            "priority": "Somewhat Urgent"
        }"#;
        let record: GapRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.priority, "Somewhat Urgent");
    }

    #[test]
    fn recommendation_defaults_missing_training_list() {
        let json = r#"{
            "employee_name": "Ada Lovelace",
            "skill_name": "Rust",
            "current_level": 2,
            "target_level": 4,
            "gap_size": 2,
            "priority": "High",
            "estimated_duration": 40.0,
            "cost_estimate": 2000.0
        }"#;
        let record: RecommendationRecord = serde_json::from_str(json).unwrap();
        assert!(record.training_recommendations.is_empty());
        assert_eq!(record.skill_category, None);
    }

    #[test]
    fn employee_full_name_joins_parts() {
        let employee = Employee {
            id: Some(1),
            employee_id: "EMP001".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            department: None,
            hire_date: None,
            role: None,
        };
        assert_eq!(employee.full_name(), "Ada Lovelace");
    }
}

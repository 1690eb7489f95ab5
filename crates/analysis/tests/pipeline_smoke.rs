use skillgap_analysis::{
    count_by_category, count_by_priority, priority_style, GapMetrics, GapSummary, PriorityStyle,
    RecommendationSummary,
};
use skillgap_model::{GapAnalysisResponse, RecommendationsResponse, SkillsResponse};

// End-to-end: decode raw API payloads and shape everything the dashboard
// shows from them.
#[test]
fn shapes_a_full_load_from_raw_payloads() {
    let skills: SkillsResponse = serde_json::from_str(
        r#"{
            "skills": [
                {"id": 1, "name": "Rust", "category": "Programming"},
                {"id": 2, "name": "Python", "category": "Programming"},
                {"id": 3, "name": "Facilitation"}
            ],
            "count": 3
        }"#,
    )
    .unwrap();

    let report: GapAnalysisResponse = serde_json::from_str(
        r#"{
            "message": "Skill gap analysis completed",
            "analyzed_employees": 2,
            "total_gaps_found": 1,
            "results": [
                {"employee_name": "Ada Lovelace", "skill_name": "Rust",
                 "current_level": 2, "required_level": 4, "gap_score": -2,
                 "priority": "High", "predicted_training_time": 40},
                {"employee_name": "Grace Hopper", "skill_name": "Python",
                 "current_level": 4, "required_level": 3, "gap_score": 1,
                 "priority": "Low"}
            ]
        }"#,
    )
    .unwrap();

    let recommendations: RecommendationsResponse = serde_json::from_str(
        r#"{
            "recommendations": [
                {"employee_name": "Ada Lovelace", "skill_name": "Rust",
                 "current_level": 2, "target_level": 4, "gap_size": 2,
                 "priority": "High",
                 "training_recommendations": ["Intermediate Rust workshop series"],
                 "estimated_duration": 40, "cost_estimate": 2000}
            ],
            "total_employees_needing_training": 1,
            "total_training_hours": 40,
            "total_estimated_cost": 2000
        }"#,
    )
    .unwrap();

    let categories = count_by_category(&skills.skills);
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].category, "Programming");
    assert_eq!(categories[0].count, 2);
    assert_eq!(categories[1].category, "Uncategorized");
    assert_eq!(categories[1].count, 1);

    let gap_summary = GapSummary::from_report(Some(&report));
    assert_eq!(gap_summary.analyzed_employees, 2);
    assert_eq!(gap_summary.deficit_count(), 1);
    assert_eq!(gap_summary.deficits[0].employee_name, "Ada Lovelace");

    let rec_summary = RecommendationSummary::from_response(Some(&recommendations));
    assert_eq!(rec_summary.employees_needing_training, 1);
    assert_eq!(rec_summary.training_hours, 40.0);
    assert_eq!(rec_summary.estimated_cost, 2000.0);

    let metrics = GapMetrics::project(Some(&recommendations));
    assert_eq!(metrics.skill_gaps, 1);
    assert_eq!(metrics.high_priority_gaps, 1);

    let counts = count_by_priority(&recommendations.recommendations);
    assert_eq!(counts.as_slices().map(|(_, count)| count), [1, 0, 0]);

    assert_eq!(
        priority_style(&gap_summary.deficits[0].priority),
        PriorityStyle::High
    );
}

// Nothing analyzed yet: every derived value degrades to zero/empty.
#[test]
fn shapes_the_no_data_state_without_errors() {
    let gap_summary = GapSummary::from_report(None);
    assert_eq!(gap_summary.analyzed_employees, 0);
    assert_eq!(gap_summary.total_gaps_found, 0);
    assert!(gap_summary.deficits.is_empty());

    let rec_summary = RecommendationSummary::from_response(None);
    assert_eq!(rec_summary.employees_needing_training, 0);
    assert!(rec_summary.recommendations.is_empty());

    let metrics = GapMetrics::project(None);
    assert_eq!(metrics.skill_gaps, 0);
    assert_eq!(metrics.high_priority_gaps, 0);

    let counts = count_by_priority(&[]);
    assert_eq!(counts.total(), 0);
    assert_eq!(counts.as_slices().len(), 3);
}

//! Subcommand dispatch and text rendering.

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use skillgap_analysis::{count_by_priority, GapSummary};
use skillgap_client::ApiClient;
use skillgap_dashboard::format::{currency, hours};
use skillgap_model::{
    CategoryListResponse, EmployeesResponse, GapAnalysisResponse, PredictionsResponse,
    RecommendationRequest, RecommendationsResponse, SkillsResponse,
};

use crate::cli::{Cli, Commands, OutputFormat};
use crate::config;

pub fn run() -> Result<()> {
    config::apply_config_to_env();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let client = match cli.api_base.as_deref() {
        Some(base) => ApiClient::new(base),
        None => ApiClient::from_env(),
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(dispatch(cli.command.unwrap_or(Commands::Dash), client))
}

async fn dispatch(command: Commands, client: ApiClient) -> Result<()> {
    match command {
        Commands::Dash => skillgap_dashboard::run(client).await,
        Commands::Employees { format } => {
            let response = client.employees().await?;
            emit(format, &response, render_employees_text)
        }
        Commands::Skills { category, format } => {
            let response = client.skills(category.as_deref()).await?;
            emit(format, &response, render_skills_text)
        }
        Commands::Categories { format } => {
            let response = client.skill_categories().await?;
            emit(format, &response, render_categories_text)
        }
        Commands::Analyze {
            employee_id,
            format,
        } => {
            let report = client.analyze_gaps(employee_id).await?;
            emit(format, &report, render_analysis_text)
        }
        Commands::Recommend {
            employee_id,
            priority,
            format,
        } => {
            let request = RecommendationRequest {
                employee_id,
                priority: priority.map(|p| p.as_request_value().to_string()),
            };
            let response = client.recommendations(&request).await?;
            emit(format, &response, render_recommendations_text)
        }
        Commands::Predictions {
            employee_id,
            format,
        } => {
            let response = client.predictions(employee_id).await?;
            emit(format, &response, render_predictions_text)
        }
        Commands::Health => {
            let health = client.health().await?;
            let label = health
                .message
                .or(health.status)
                .unwrap_or_else(|| "ok".to_string());
            println!("API reachable at {}: {label}", client.base_url());
            Ok(())
        }
    }
}

/// Prints a payload as JSON, or through its text renderer.
fn emit<T: Serialize>(
    format: OutputFormat,
    payload: &T,
    text: impl FnOnce(&T) -> String,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(payload)?),
        OutputFormat::Text => print!("{}", text(payload)),
    }
    Ok(())
}

fn render_employees_text(response: &EmployeesResponse) -> String {
    let mut out = format!("{} employees\n", response.count);
    for employee in &response.employees {
        out.push_str(&format!(
            "{:<10} {:<24} {:<32} {:<16} {}\n",
            employee.employee_id,
            employee.full_name(),
            employee.email,
            employee.department.as_deref().unwrap_or("-"),
            employee
                .role
                .as_ref()
                .map(|role| role.title.as_str())
                .unwrap_or("-"),
        ));
    }
    out
}

fn render_skills_text(response: &SkillsResponse) -> String {
    let mut out = format!("{} skills\n", response.count);
    for skill in &response.skills {
        let category = match skill.category.as_deref() {
            Some(category) if !category.is_empty() => category,
            _ => "Uncategorized",
        };
        out.push_str(&format!(
            "{:<26} {:<18} {}\n",
            skill.name,
            category,
            skill.description.as_deref().unwrap_or("-"),
        ));
    }
    out
}

fn render_categories_text(response: &CategoryListResponse) -> String {
    let mut out = format!("{} categories\n", response.count);
    for category in &response.categories {
        out.push_str(&format!("  {category}\n"));
    }
    out
}

fn render_analysis_text(report: &GapAnalysisResponse) -> String {
    let summary = GapSummary::from_report(Some(report));
    let mut out = format!(
        "Analysis completed! Found {} skill gaps across {} employees.\n",
        summary.total_gaps_found, summary.analyzed_employees
    );
    if summary.deficits.is_empty() {
        out.push_str("No skill gaps found! All employees meet their role requirements.\n");
        return out;
    }
    out.push_str("\nSkill gaps requiring attention:\n");
    for gap in &summary.deficits {
        out.push_str(&format!(
            "  {} - {} [{}]  current {}/5, required {}/5\n",
            gap.employee_name, gap.skill_name, gap.priority, gap.current_level, gap.required_level,
        ));
    }
    out
}

fn render_recommendations_text(response: &RecommendationsResponse) -> String {
    let counts = count_by_priority(&response.recommendations);
    let mut out = format!(
        "Employees needing training: {}\nTotal training hours: {}\nEstimated cost: {}\nGaps by priority: High {} · Medium {} · Low {}\n",
        response.total_employees_needing_training,
        hours(response.total_training_hours),
        currency(response.total_estimated_cost),
        counts.high,
        counts.medium,
        counts.low,
    );
    if response.recommendations.is_empty() {
        out.push_str("No training recommendations needed at this time.\n");
        return out;
    }
    out.push_str("\nDetailed recommendations:\n");
    for rec in &response.recommendations {
        out.push_str(&format!(
            "  {} - {} [{}]  {}/5 -> {}/5, {} h, {}\n",
            rec.employee_name,
            rec.skill_name,
            rec.priority,
            rec.current_level,
            rec.target_level,
            hours(rec.estimated_duration),
            currency(rec.cost_estimate),
        ));
        for suggestion in &rec.training_recommendations {
            out.push_str(&format!("      - {suggestion}\n"));
        }
    }
    out
}

fn render_predictions_text(response: &PredictionsResponse) -> String {
    let mut out = format!(
        "Predictions for {} ({} training hours total, {:.0}% average success)\n",
        response.employee_name,
        response.total_training_hours,
        response.average_success_probability * 100.0,
    );
    for prediction in &response.predictions {
        out.push_str(&format!(
            "  {} [{}]  {}/5 -> {}/5, ~{} h over ~{} weeks, {:.0}% success\n",
            prediction.skill_name,
            prediction.priority,
            prediction.current_level,
            prediction.target_level,
            prediction.predicted_training_hours,
            prediction.estimated_completion_weeks,
            prediction.success_probability * 100.0,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillgap_model::SkillPrediction;
    use skillgap_test_utils::{
        employee, gap, gap_report, recommendation, recommendations_response, skill,
    };

    #[test]
    fn employees_text_lists_names_and_roles() {
        let response = EmployeesResponse {
            employees: vec![
                employee("EMP001", "Ada", "Lovelace"),
                employee("EMP002", "Grace", "Hopper"),
            ],
            count: 2,
        };
        let text = render_employees_text(&response);
        assert!(text.starts_with("2 employees"));
        assert!(text.contains("Ada Lovelace"));
        assert!(text.contains("grace.hopper@example.com"));
    }

    #[test]
    fn skills_text_folds_missing_category() {
        let response = SkillsResponse {
            skills: vec![skill("Rust", Some("Programming")), skill("Mystery", None)],
            count: 2,
        };
        let text = render_skills_text(&response);
        assert!(text.contains("Programming"));
        assert!(text.contains("Uncategorized"));
    }

    #[test]
    fn analysis_text_reports_only_deficits() {
        let report = gap_report(vec![
            gap("Ada Lovelace", "Rust", 2, 4, "High"),
            gap("Grace Hopper", "COBOL", 5, 3, "Low"),
        ]);
        let text = render_analysis_text(&report);
        assert!(text.contains("Found 1 skill gaps across 2 employees"));
        assert!(text.contains("Ada Lovelace - Rust [High]"));
        assert!(!text.contains("COBOL"));
    }

    #[test]
    fn analysis_text_celebrates_no_deficits() {
        let report = gap_report(vec![gap("Ada Lovelace", "Rust", 4, 4, "Low")]);
        let text = render_analysis_text(&report);
        assert!(text.contains("No skill gaps found!"));
    }

    #[test]
    fn recommendations_text_includes_totals_and_priority_counts() {
        let response = recommendations_response(vec![
            recommendation("Ada Lovelace", "Rust", "High"),
            recommendation("Grace Hopper", "COBOL", "Low"),
            recommendation("Grace Hopper", "Fortran", "Unknown"),
        ]);
        let text = render_recommendations_text(&response);
        assert!(text.contains("Employees needing training: 2"));
        assert!(text.contains("Total training hours: 120"));
        assert!(text.contains("Estimated cost: $6,000"));
        // Non-canonical label is not counted in any bucket.
        assert!(text.contains("High 1 · Medium 0 · Low 1"));
        assert!(text.contains("Intermediate Rust workshop series"));
    }

    #[test]
    fn empty_recommendations_text_has_zero_totals() {
        let response = recommendations_response(vec![]);
        let text = render_recommendations_text(&response);
        assert!(text.contains("Employees needing training: 0"));
        assert!(text.contains("Total training hours: 0"));
        assert!(text.contains("Estimated cost: $0"));
        assert!(text.contains("No training recommendations needed"));
    }

    #[test]
    fn predictions_text_shows_probability_as_percentage() {
        let response = PredictionsResponse {
            employee_id: Some(7),
            employee_name: "Ada Lovelace".into(),
            predictions: vec![SkillPrediction {
                skill_id: Some(3),
                skill_name: "Rust".into(),
                current_level: 2,
                target_level: 4,
                predicted_training_hours: 40,
                success_probability: 0.8,
                estimated_completion_weeks: 5,
                priority: "High".into(),
            }],
            total_training_hours: 40,
            average_success_probability: 0.8,
        };
        let text = render_predictions_text(&response);
        assert!(text.contains("Predictions for Ada Lovelace"));
        assert!(text.contains("80% success"));
        assert!(text.contains("~40 h over ~5 weeks"));
    }
}

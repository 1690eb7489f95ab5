//! Background data loads for the dashboard sections.
//!
//! Each load runs as a tokio task holding a cloned [`ApiClient`] and
//! reports back over an mpsc channel. Every event carries the request
//! generation it was issued under; the app discards results whose
//! generation is no longer current, so the latest request always wins no
//! matter the order responses arrive in.

use skillgap_analysis::{count_by_category, count_by_priority, CategoryCount, GapMetrics, PriorityCount};
use skillgap_client::{ApiClient, ApiError};
use skillgap_model::{
    EmployeesResponse, GapAnalysisResponse, RecommendationRequest, RecommendationsResponse,
    SkillsResponse,
};
use tokio::sync::mpsc::Sender;

/// Everything the dashboard section shows, computed off the raw payloads.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub employee_count: u64,
    pub skill_count: u64,
    /// Category chart slices, first-occurrence order.
    pub categories: Vec<CategoryCount>,
    /// Headline gap counters.
    pub metrics: GapMetrics,
    /// Priority chart buckets.
    pub priorities: PriorityCount,
}

/// A completed load, tagged with the generation it was issued under.
#[derive(Debug)]
pub enum LoadEvent {
    Dashboard {
        generation: u64,
        result: Result<DashboardData, ApiError>,
    },
    Employees {
        generation: u64,
        result: Result<EmployeesResponse, ApiError>,
    },
    Skills {
        generation: u64,
        result: Result<SkillsResponse, ApiError>,
    },
    Analysis {
        generation: u64,
        result: Result<GapAnalysisResponse, ApiError>,
    },
    Recommendations {
        generation: u64,
        result: Result<RecommendationsResponse, ApiError>,
    },
}

async fn fetch_dashboard(client: &ApiClient) -> Result<DashboardData, ApiError> {
    let (employees, skills) = tokio::join!(client.employees(), client.skills(None));
    let employees = employees?;
    let skills = skills?;

    // No recommendations yet is a normal state (nothing analyzed), so a
    // failure here degrades the gap tiles to zero instead of erroring.
    let recommendations = match client
        .recommendations(&RecommendationRequest::default())
        .await
    {
        Ok(response) => Some(response),
        Err(err) => {
            tracing::debug!(target: "skillgap::dashboard", %err, "no gap analysis data available yet");
            None
        }
    };

    let priorities = count_by_priority(
        recommendations
            .as_ref()
            .map(|r| r.recommendations.as_slice())
            .unwrap_or(&[]),
    );
    Ok(DashboardData {
        employee_count: employees.count,
        skill_count: skills.count,
        categories: count_by_category(&skills.skills),
        metrics: GapMetrics::project(recommendations.as_ref()),
        priorities,
    })
}

/// Spawns the dashboard load (counts, charts, headline metrics).
pub fn spawn_dashboard(client: ApiClient, tx: Sender<LoadEvent>, generation: u64) {
    tokio::spawn(async move {
        let result = fetch_dashboard(&client).await;
        let _ = tx.send(LoadEvent::Dashboard { generation, result }).await;
    });
}

/// Spawns the employee-table load.
pub fn spawn_employees(client: ApiClient, tx: Sender<LoadEvent>, generation: u64) {
    tokio::spawn(async move {
        let result = client.employees().await;
        let _ = tx.send(LoadEvent::Employees { generation, result }).await;
    });
}

/// Spawns the skill-table load.
pub fn spawn_skills(client: ApiClient, tx: Sender<LoadEvent>, generation: u64) {
    tokio::spawn(async move {
        let result = client.skills(None).await;
        let _ = tx.send(LoadEvent::Skills { generation, result }).await;
    });
}

/// Spawns a gap-analysis run.
pub fn spawn_analysis(client: ApiClient, tx: Sender<LoadEvent>, generation: u64) {
    tokio::spawn(async move {
        let result = client.analyze_gaps(None).await;
        let _ = tx.send(LoadEvent::Analysis { generation, result }).await;
    });
}

/// Spawns a training-recommendations request.
pub fn spawn_recommendations(client: ApiClient, tx: Sender<LoadEvent>, generation: u64) {
    tokio::spawn(async move {
        let result = client
            .recommendations(&RecommendationRequest::default())
            .await;
        let _ = tx
            .send(LoadEvent::Recommendations { generation, result })
            .await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillgap_client::ApiClient;
    use tokio::sync::mpsc;

    // Unroutable address: loads must deliver an error event, not hang the
    // channel or panic.
    #[tokio::test]
    async fn failed_load_still_reports_back() {
        let client = ApiClient::new("http://127.0.0.1:1/api");
        let (tx, mut rx) = mpsc::channel(4);

        spawn_employees(client, tx, 3);

        match rx.recv().await {
            Some(LoadEvent::Employees { generation, result }) => {
                assert_eq!(generation, 3);
                assert!(result.is_err());
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}

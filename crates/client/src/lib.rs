//! HTTP client for the Skills Gap Analyzer API.
//!
//! A thin async wrapper over the upstream REST surface: employees and
//! skills CRUD, the category list, gap-analysis runs, per-employee gaps,
//! skill predictions, and training recommendations. All computation
//! happens server-side; this crate only moves JSON and normalizes
//! failures into [`ApiError`].

#![deny(unsafe_code)]

mod error;

pub use error::{ApiError, Result};
pub use reqwest::StatusCode;

use serde::de::DeserializeOwned;
use serde::Serialize;
use skillgap_model::{
    AnalyzeRequest, CategoryListResponse, Employee, EmployeeGapsResponse, EmployeeSkillAssessment,
    EmployeeSkillsResponse, EmployeesResponse, GapAnalysisResponse, HealthResponse, NewEmployee,
    NewSkill, PredictionsResponse, RecommendationRequest, RecommendationsResponse, Skill,
    SkillsResponse,
};

/// Default API base when neither the CLI nor the environment overrides it.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Returns the configured API base URL.
///
/// `SKILLGAP_API_BASE` overrides the default; the CLI's `--api-base` flag
/// overrides both by constructing the client explicitly.
pub fn api_base_from_env() -> String {
    std::env::var("SKILLGAP_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
}

/// Async client for the Skills Gap Analyzer API.
///
/// Cheap to clone; clones share the underlying connection pool, which is
/// what the dashboard's per-section load tasks rely on.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a client against an explicit base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Creates a client from `SKILLGAP_API_BASE` or the default base.
    pub fn from_env() -> Self {
        Self::new(api_base_from_env())
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &body));
        }
        Ok(response.json().await?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!(target: "skillgap::client", %path, "GET");
        let response = self
            .http
            .get(format!("{}{path}", self.base_url))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        tracing::debug!(target: "skillgap::client", %path, "GET");
        let response = self
            .http
            .get(format!("{}{path}", self.base_url))
            .query(query)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        tracing::debug!(target: "skillgap::client", %path, "POST");
        let response = self
            .http
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        tracing::debug!(target: "skillgap::client", %path, "PUT");
        let response = self
            .http
            .put(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        tracing::debug!(target: "skillgap::client", %path, "DELETE");
        let response = self
            .http
            .delete(format!("{}{path}", self.base_url))
            .send()
            .await?;
        let _: serde_json::Value = Self::decode(response).await?;
        Ok(())
    }

    // --- Employees ---

    /// Lists all employees.
    pub async fn employees(&self) -> Result<EmployeesResponse> {
        self.get_json("/employees").await
    }

    /// Fetches one employee by database id.
    pub async fn employee(&self, id: u64) -> Result<Employee> {
        self.get_json(&format!("/employees/{id}")).await
    }

    /// Creates an employee, returning the stored record.
    pub async fn create_employee(&self, employee: &NewEmployee) -> Result<Employee> {
        self.post_json("/employees", employee).await
    }

    /// Updates an employee, returning the stored record.
    pub async fn update_employee(&self, id: u64, employee: &NewEmployee) -> Result<Employee> {
        self.put_json(&format!("/employees/{id}"), employee).await
    }

    /// Deletes an employee.
    pub async fn delete_employee(&self, id: u64) -> Result<()> {
        self.delete(&format!("/employees/{id}")).await
    }

    /// Lists an employee's assessed skills.
    pub async fn employee_skills(&self, id: u64) -> Result<EmployeeSkillsResponse> {
        self.get_json(&format!("/employees/{id}/skills")).await
    }

    /// Records a skill assessment for an employee.
    pub async fn add_employee_skill(
        &self,
        id: u64,
        assessment: &EmployeeSkillAssessment,
    ) -> Result<EmployeeSkillsResponse> {
        self.post_json(&format!("/employees/{id}/skills"), assessment)
            .await
    }

    // --- Skills ---

    /// Lists skills, optionally filtered to one category.
    pub async fn skills(&self, category: Option<&str>) -> Result<SkillsResponse> {
        match category {
            Some(category) => {
                self.get_json_with_query("/skills", &[("category", category)])
                    .await
            }
            None => self.get_json("/skills").await,
        }
    }

    /// Fetches one skill by id.
    pub async fn skill(&self, id: u64) -> Result<Skill> {
        self.get_json(&format!("/skills/{id}")).await
    }

    /// Creates a skill, returning the stored record.
    pub async fn create_skill(&self, skill: &NewSkill) -> Result<Skill> {
        self.post_json("/skills", skill).await
    }

    /// Updates a skill, returning the stored record.
    pub async fn update_skill(&self, id: u64, skill: &NewSkill) -> Result<Skill> {
        self.put_json(&format!("/skills/{id}"), skill).await
    }

    /// Deletes a skill.
    pub async fn delete_skill(&self, id: u64) -> Result<()> {
        self.delete(&format!("/skills/{id}")).await
    }

    /// Lists the distinct skill categories.
    pub async fn skill_categories(&self) -> Result<CategoryListResponse> {
        self.get_json("/skills/categories").await
    }

    // --- Analysis ---

    /// Runs the gap analysis, for one employee or for everyone.
    pub async fn analyze_gaps(&self, employee_id: Option<u64>) -> Result<GapAnalysisResponse> {
        self.post_json("/analysis/gaps", &AnalyzeRequest { employee_id })
            .await
    }

    /// Fetches the stored gap analysis for one employee.
    pub async fn employee_gaps(&self, employee_id: u64) -> Result<EmployeeGapsResponse> {
        self.get_json(&format!("/analysis/gaps/{employee_id}")).await
    }

    /// Fetches skill development predictions for one employee.
    pub async fn predictions(&self, employee_id: u64) -> Result<PredictionsResponse> {
        self.get_json(&format!("/analysis/predictions/{employee_id}"))
            .await
    }

    /// Requests training recommendations, optionally scoped by employee
    /// and priority.
    pub async fn recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationsResponse> {
        self.post_json("/analysis/recommendations", request).await
    }

    // --- Health ---

    /// Pings the server root (one level above the API base).
    pub async fn health(&self) -> Result<HealthResponse> {
        let root = self
            .base_url
            .strip_suffix("/api")
            .unwrap_or(&self.base_url);
        tracing::debug!(target: "skillgap::client", path = "/", "GET");
        let response = self.http.get(format!("{root}/")).send().await?;
        Self::decode(response).await
    }
}

//! Wire and domain types for the skillgap dashboard.
//!
//! Everything the remote Skills Gap API sends or receives is modeled here:
//! - Core records (employees, skills, gap records, recommendations).
//! - Response envelopes, one per endpoint.
//! - Request bodies for the mutating endpoints.
//!
//! Deserialization is deliberately forgiving: fields the upstream may omit
//! are `Option` or defaulted, so a sparse payload decodes instead of
//! failing. Required identifying fields (names, levels, scores) stay
//! required; the upstream owns those invariants.

#![deny(unsafe_code)]

mod payloads;
mod priority;
mod records;

pub use payloads::{
    AnalyzeRequest, CategoryListResponse, EmployeeGapsResponse, EmployeeSkillAssessment,
    EmployeeSkillsResponse, EmployeesResponse, GapAnalysisResponse, HealthResponse, NewEmployee,
    NewSkill, PredictionsResponse, RecommendationRequest, RecommendationsResponse, SkillsResponse,
};
pub use priority::Priority;
pub use records::{
    Employee, GapRecord, RecommendationRecord, Role, Skill, SkillAssessment, SkillPrediction,
};

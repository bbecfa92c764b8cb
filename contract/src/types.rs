//! Wire DTOs for the six backend endpoints.
//!
//! DESIGN
//! ======
//! Outbound types (`StudentProfile`) are strict: the client only ever sends
//! validated values. Inbound types are lenient (`#[serde(default)]`) because
//! the backend assembles them from LLM output and fallback templates, and any
//! field may be absent.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Job role a student is assessed against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Frontend,
    Backend,
    DataAnalyst,
    Fullstack,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Frontend, Role::Backend, Role::DataAnalyst, Role::Fullstack];

    /// Wire value, e.g. `"data_analyst"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::DataAnalyst => "data_analyst",
            Self::Fullstack => "fullstack",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend Developer",
            Self::Backend => "Backend Developer",
            Self::DataAnalyst => "Data Analyst",
            Self::Fullstack => "Full Stack Developer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s.trim())
            .ok_or_else(|| format!("unknown role: {s}"))
    }
}

/// Self-reported experience level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 3] = [SkillLevel::Beginner, SkillLevel::Intermediate, SkillLevel::Advanced];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Beginner => "New to the field",
            Self::Intermediate => "Some experience",
            Self::Advanced => "Experienced professional",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s.trim())
            .ok_or_else(|| format!("unknown skill level: {s}"))
    }
}

/// Student identity and target profile sent with every generation/submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    /// Caller-chosen identifier; may be empty.
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    pub skill_level: SkillLevel,
}

/// Student data echoed back inside a simulation result.
///
/// Kept as plain strings because the backend echoes whatever it received.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub skill_level: String,
}

/// A generated job-simulation task.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub id: String,
    pub title: String,
    pub task: String,
    pub role: String,
    pub difficulty: String,
    pub context: String,
    pub requirements: Vec<String>,
    pub deliverables: Vec<String>,
    pub criteria: Vec<String>,
    pub time_limit: Option<String>,
}

/// Response body of `POST /generate-scenarios`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateScenariosResponse {
    pub scenarios: Vec<Scenario>,
    pub count: usize,
}

/// Response body of both CSV upload endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadResponse {
    pub message: String,
    pub count: usize,
}

/// Response body of `GET /health`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Server-computed scores for one submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Evaluation {
    pub id: String,
    /// Criterion name to points (each criterion is scored out of 25).
    pub scores: BTreeMap<String, f64>,
    /// Criterion name to feedback text; `general` carries the overall remark.
    pub feedback: BTreeMap<String, String>,
    pub total_score: f64,
    pub max_score: f64,
    pub percentage: Option<f64>,
    pub grade: String,
}

impl Default for Evaluation {
    fn default() -> Self {
        Self {
            id: String::new(),
            scores: BTreeMap::new(),
            feedback: BTreeMap::new(),
            total_score: 0.0,
            max_score: 100.0,
            percentage: None,
            grade: String::new(),
        }
    }
}

impl Evaluation {
    /// Reported percentage, or `total / max * 100` when the server omitted it.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        self.percentage.unwrap_or_else(|| {
            if self.max_score > 0.0 {
                self.total_score / self.max_score * 100.0
            } else {
                0.0
            }
        })
    }
}

/// Skill deficiencies derived from an evaluation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GapAnalysis {
    pub id: String,
    pub technical_gaps: Vec<String>,
    pub conceptual_gaps: Vec<String>,
    pub process_gaps: Vec<String>,
    pub total_gaps: usize,
    pub priority_areas: Vec<String>,
    pub improvement_urgency: String,
    pub error: Option<String>,
}

/// A single recommended learning resource.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingResource {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub url: String,
    /// Space-separated skill tags.
    pub skills: String,
}

/// One phase of the personalized learning path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningPhase {
    pub phase: u32,
    pub title: String,
    pub duration: String,
    pub goal: String,
    pub description: Option<String>,
    pub resources: Vec<TrainingResource>,
}

/// Recommendations and the learning path built from them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingRecommendations {
    pub id: String,
    pub student_role: String,
    /// Category (`immediate`, `foundational`, `practical`, `advanced`) to resources.
    pub recommendations: BTreeMap<String, Vec<TrainingResource>>,
    pub learning_path: Vec<LearningPhase>,
    pub estimated_duration: String,
    pub urgency: String,
    pub priority_order: Vec<String>,
    pub note: Option<String>,
}

/// Statistics the backend computed about the submitted text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseSummary {
    pub id: String,
    pub word_count: usize,
    pub has_code: bool,
}

/// Full outcome of `POST /submit-response`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationResult {
    pub simulation_id: Option<String>,
    pub status: String,
    pub error: Option<String>,
    pub student: StudentSummary,
    pub scenario: Option<Scenario>,
    pub response: Option<ResponseSummary>,
    pub evaluation: Evaluation,
    pub gap_analysis: GapAnalysis,
    pub training_recommendations: TrainingRecommendations,
    pub timestamp: Option<String>,
}

impl SimulationResult {
    /// Whether the backend reported the pipeline as failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.status == "failed"
    }

    /// Error text shown on the failure card.
    #[must_use]
    pub fn failure_message(&self) -> &str {
        self.error
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or("Unable to process your submission")
    }
}

/// Outcome of `GET /simulation-results/{id}`.
///
/// The backend may answer with a full result or with a placeholder message
/// while stored-result retrieval is unavailable.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultsLookup {
    Completed(Box<SimulationResult>),
    Pending { simulation_id: String, message: String },
}

impl ResultsLookup {
    /// Classify a raw lookup body.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the body carries an `evaluation` that does
    /// not decode as a [`SimulationResult`].
    pub fn from_json(requested_id: &str, body: Value) -> Result<Self, serde_json::Error> {
        if body.get("evaluation").is_some() || body.get("status").and_then(Value::as_str) == Some("failed") {
            let result: SimulationResult = serde_json::from_value(body)?;
            return Ok(Self::Completed(Box::new(result)));
        }
        let simulation_id = body
            .get("simulation_id")
            .and_then(Value::as_str)
            .unwrap_or(requested_id)
            .to_owned();
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("No stored results for this simulation")
            .to_owned();
        Ok(Self::Pending { simulation_id, message })
    }
}

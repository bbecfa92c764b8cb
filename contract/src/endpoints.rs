//! Backend endpoint paths.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

pub const HEALTH: &str = "/health";
pub const UPLOAD_SCENARIOS: &str = "/upload-scenarios";
pub const UPLOAD_TRAINING_RESOURCES: &str = "/upload-training-resources";
pub const GENERATE_SCENARIOS: &str = "/generate-scenarios";
pub const SUBMIT_RESPONSE: &str = "/submit-response";

/// Multipart field names for `POST /submit-response`.
pub mod submit_fields {
    pub const STUDENT_DATA: &str = "student_data";
    pub const SCENARIO_ID: &str = "scenario_id";
    pub const RESPONSE_CONTENT: &str = "response_content";
    pub const FILES: &str = "files";
}

/// Multipart field name for both CSV upload endpoints.
pub const UPLOAD_FILE_FIELD: &str = "file";

/// Which CSV dataset an upload feeds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadKind {
    #[default]
    Scenarios,
    TrainingResources,
}

impl UploadKind {
    pub const ALL: [UploadKind; 2] = [UploadKind::Scenarios, UploadKind::TrainingResources];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Scenarios => UPLOAD_SCENARIOS,
            Self::TrainingResources => UPLOAD_TRAINING_RESOURCES,
        }
    }

    /// Stable identifier used for form values and CLI arguments.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scenarios => "scenarios",
            Self::TrainingResources => "training",
        }
    }

    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Scenarios => "Scenarios CSV",
            Self::TrainingResources => "Training Resources CSV",
        }
    }

    /// Header columns the backend expects in the CSV.
    #[must_use]
    pub fn required_columns(self) -> &'static [&'static str] {
        match self {
            Self::Scenarios => &["role", "title", "task", "difficulty", "context"],
            Self::TrainingResources => &["title", "type", "description", "url", "skills"],
        }
    }
}

/// Path for `GET /simulation-results/{id}`.
#[must_use]
pub fn simulation_results(simulation_id: &str) -> String {
    format!("/simulation-results/{}", simulation_id.trim())
}

/// Join a base URL and an absolute endpoint path.
#[must_use]
pub fn join(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

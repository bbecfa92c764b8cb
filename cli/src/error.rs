#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::path::PathBuf;

use contract::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Please select a valid CSV file: {}", .0.display())]
    NotCsv(PathBuf),
    #[error("Please provide a response before submitting")]
    EmptyResponse,
    #[error("student name is required")]
    MissingName,
    #[error("backend returned no scenarios")]
    NoScenarios,
    #[error("scenario {index} out of range (1-{available})")]
    ScenarioIndex { index: usize, available: usize },
}

impl CliError {
    /// Line printed to stderr before exiting non-zero.
    pub fn exit_message(&self) -> String {
        format!("Error: {self}")
    }
}

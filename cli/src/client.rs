//! HTTP client for the assessment backend.
//!
//! Every call returns a [`Reply`] with both the raw JSON body (for `--json`)
//! and its decoded form. Non-2xx responses become [`ApiError::Server`] using
//! the same detail rules as the browser client.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::path::{Path, PathBuf};

use contract::endpoints::{self, submit_fields};
use contract::{
    ApiError, GenerateScenariosResponse, HealthResponse, RequestKind, ResultsLookup, SimulationResult,
    StudentProfile, UploadKind, UploadResponse,
};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::CliError;

/// Decoded response body plus the raw JSON it came from.
#[derive(Debug, Clone)]
pub struct Reply<T> {
    pub raw: Value,
    pub body: T,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.into() }
    }

    fn url(&self, path: &str) -> String {
        endpoints::join(&self.base_url, path)
    }

    pub async fn health(&self) -> Result<Reply<HealthResponse>, CliError> {
        let request = self.http.get(self.url(endpoints::HEALTH));
        self.send(request, RequestKind::Json).await
    }

    /// Upload a CSV dataset. Only files with a `.csv` extension are accepted.
    pub async fn upload_csv(&self, kind: UploadKind, path: &Path) -> Result<Reply<UploadResponse>, CliError> {
        if !is_csv_path(path) {
            return Err(CliError::NotCsv(path.to_path_buf()));
        }
        let part = file_part(path).await?.mime_str("text/csv")?;
        let form = Form::new().part(endpoints::UPLOAD_FILE_FIELD, part);
        let request = self.http.post(self.url(kind.path())).multipart(form);
        self.send(request, RequestKind::Upload).await
    }

    pub async fn generate_scenarios(
        &self,
        student: &StudentProfile,
    ) -> Result<Reply<GenerateScenariosResponse>, CliError> {
        let request = self.http.post(self.url(endpoints::GENERATE_SCENARIOS)).json(student);
        self.send(request, RequestKind::Json).await
    }

    pub async fn submit_response(
        &self,
        student: &StudentProfile,
        scenario_id: &str,
        response_content: &str,
        attachments: &[PathBuf],
    ) -> Result<Reply<SimulationResult>, CliError> {
        if response_content.trim().is_empty() {
            return Err(CliError::EmptyResponse);
        }
        let mut form = Form::new()
            .text(submit_fields::STUDENT_DATA, serde_json::to_string(student)?)
            .text(submit_fields::SCENARIO_ID, scenario_id.to_owned())
            .text(submit_fields::RESPONSE_CONTENT, response_content.to_owned());
        for path in attachments {
            form = form.part(submit_fields::FILES, file_part(path).await?);
        }
        let request = self.http.post(self.url(endpoints::SUBMIT_RESPONSE)).multipart(form);
        self.send(request, RequestKind::Upload).await
    }

    pub async fn simulation_results(&self, simulation_id: &str) -> Result<Reply<ResultsLookup>, CliError> {
        let request = self.http.get(self.url(&endpoints::simulation_results(simulation_id)));
        let raw = self.send_raw(request, RequestKind::Json).await?;
        let body = ResultsLookup::from_json(simulation_id, raw.clone())?;
        Ok(Reply { raw, body })
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        kind: RequestKind,
    ) -> Result<Reply<T>, CliError> {
        let raw = self.send_raw(request, kind).await?;
        let body = serde_json::from_value(raw.clone())?;
        Ok(Reply { raw, body })
    }

    async fn send_raw(&self, request: reqwest::RequestBuilder, kind: RequestKind) -> Result<Value, CliError> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), &text, kind).into());
        }
        Ok(serde_json::from_str(&text)?)
    }
}

/// Whether `path` names a CSV file by extension.
pub fn is_csv_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

async fn file_part(path: &Path) -> Result<Part, CliError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| CliError::Io { path: path.to_path_buf(), source })?;
    let file_name = path
        .file_name()
        .map_or_else(|| "upload".to_owned(), |name| name.to_string_lossy().into_owned());
    Ok(Part::bytes(bytes).file_name(file_name))
}

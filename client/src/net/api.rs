//! REST helpers for the external assessment backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, multipart bodies via
//! `web_sys::FormData`.
//! Server-side (SSR): stubs returning an error since the backend is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; the error's display text is what
//! the calling component shows. Failures are also logged to the browser
//! console. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use contract::endpoints;

use super::types::{
    ApiError, GenerateScenariosResponse, HealthResponse, ResultsLookup, SimulationResult, StudentProfile, UploadKind,
    UploadResponse,
};
use crate::util::files::FileSelection;

#[cfg(not(feature = "hydrate"))]
const NOT_AVAILABLE: &str = "not available on server";

/// Backend base URL, fixed at build time via `READINESS_API_URL`.
pub fn api_base_url() -> &'static str {
    option_env!("READINESS_API_URL").unwrap_or(contract::DEFAULT_API_URL)
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint_url(path: &str) -> String {
    endpoints::join(api_base_url(), path)
}

/// Check backend liveness via `GET /health`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the backend is unreachable or unhealthy.
pub async fn health_check() -> Result<HealthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint_url(endpoints::HEALTH))
            .send()
            .await
            .map_err(transport)?;
        logged(read_json(resp, contract::RequestKind::Json).await)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Transport(NOT_AVAILABLE.to_owned()))
    }
}

/// Upload the first file in `selection` as a scenarios or training-resources CSV.
///
/// # Errors
///
/// Returns [`ApiError::Invalid`] when nothing is selected, otherwise any
/// transport or server failure.
pub async fn upload_csv(kind: UploadKind, selection: FileSelection) -> Result<UploadResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let Some(file) = selection.handles().into_iter().next() else {
            return Err(ApiError::Invalid("Please select a file first".to_owned()));
        };
        let form = new_form()?;
        form.append_with_blob_and_filename(endpoints::UPLOAD_FILE_FIELD, &file, &file.name())
            .map_err(js_error)?;
        let resp = gloo_net::http::Request::post(&endpoint_url(kind.path()))
            .body(form)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        logged(read_json(resp, contract::RequestKind::Upload).await)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (kind, selection);
        Err(ApiError::Transport(NOT_AVAILABLE.to_owned()))
    }
}

/// Request personalized scenarios via `POST /generate-scenarios`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, server or decode failure.
pub async fn generate_scenarios(student: &StudentProfile) -> Result<GenerateScenariosResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint_url(endpoints::GENERATE_SCENARIOS))
            .json(student)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        logged(read_json(resp, contract::RequestKind::Json).await)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = student;
        Err(ApiError::Transport(NOT_AVAILABLE.to_owned()))
    }
}

/// Submit a response and run the full evaluation via `POST /submit-response`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, server or decode failure.
pub async fn submit_response(
    student: &StudentProfile,
    scenario_id: &str,
    response_content: &str,
    files: FileSelection,
) -> Result<SimulationResult, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use endpoints::submit_fields;

        let student_json = serde_json::to_string(student).map_err(|e| ApiError::Invalid(e.to_string()))?;
        let form = new_form()?;
        form.append_with_str(submit_fields::STUDENT_DATA, &student_json)
            .map_err(js_error)?;
        form.append_with_str(submit_fields::SCENARIO_ID, scenario_id)
            .map_err(js_error)?;
        form.append_with_str(submit_fields::RESPONSE_CONTENT, response_content)
            .map_err(js_error)?;
        for file in files.handles() {
            form.append_with_blob_and_filename(submit_fields::FILES, &file, &file.name())
                .map_err(js_error)?;
        }

        let resp = gloo_net::http::Request::post(&endpoint_url(endpoints::SUBMIT_RESPONSE))
            .body(form)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        logged(read_json(resp, contract::RequestKind::Upload).await)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (student, scenario_id, response_content, files);
        Err(ApiError::Transport(NOT_AVAILABLE.to_owned()))
    }
}

/// Look up stored results via `GET /simulation-results/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, server or decode failure.
pub async fn fetch_simulation_results(simulation_id: &str) -> Result<ResultsLookup, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint_url(&endpoints::simulation_results(simulation_id));
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(transport)?;
        let body: serde_json::Value = logged(read_json(resp, contract::RequestKind::Json).await)?;
        ResultsLookup::from_json(simulation_id, body).map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = simulation_id;
        Err(ApiError::Transport(NOT_AVAILABLE.to_owned()))
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
    kind: contract::RequestKind,
) -> Result<T, ApiError> {
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_response(resp.status(), &body, kind));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn logged<T>(result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(e) = &result {
        log::error!("API request failed: {e}");
    }
    result
}

#[cfg(feature = "hydrate")]
fn new_form() -> Result<web_sys::FormData, ApiError> {
    web_sys::FormData::new().map_err(js_error)
}

#[cfg(feature = "hydrate")]
fn transport(e: gloo_net::Error) -> ApiError {
    let err = ApiError::Transport(e.to_string());
    log::error!("API request failed: {err}");
    err
}

#[cfg(feature = "hydrate")]
fn js_error(e: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Invalid(e.as_string().unwrap_or_else(|| format!("{e:?}")))
}

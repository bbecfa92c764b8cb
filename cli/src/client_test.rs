use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Path as AxumPath, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use contract::{Role, SkillLevel};
use serde_json::json;

use super::*;

// =============================================================================
// Mock backend
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Field {
    name: String,
    file_name: Option<String>,
    text: String,
}

#[derive(Debug, Clone, PartialEq)]
enum Seen {
    Multipart { path: &'static str, fields: Vec<Field> },
    Json { path: &'static str, body: Value },
}

type Log = Arc<Mutex<Vec<Seen>>>;

async fn read_fields(mut multipart: Multipart) -> Vec<Field> {
    let mut fields = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_owned();
        let file_name = field.file_name().map(str::to_owned);
        let text = field.text().await.unwrap();
        fields.push(Field { name, file_name, text });
    }
    fields
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "message": "Industry-Readiness API is running" }))
}

async fn upload_scenarios(State(log): State<Log>, multipart: Multipart) -> Json<Value> {
    let fields = read_fields(multipart).await;
    log.lock().unwrap().push(Seen::Multipart { path: endpoints::UPLOAD_SCENARIOS, fields });
    Json(json!({ "message": "Uploaded 2 scenarios", "count": 2 }))
}

async fn upload_training(State(log): State<Log>, multipart: Multipart) -> Json<Value> {
    let fields = read_fields(multipart).await;
    log.lock().unwrap().push(Seen::Multipart { path: endpoints::UPLOAD_TRAINING_RESOURCES, fields });
    Json(json!({ "message": "Uploaded 5 training resources", "count": 5 }))
}

async fn generate(State(log): State<Log>, Json(body): Json<Value>) -> Json<Value> {
    log.lock().unwrap().push(Seen::Json { path: endpoints::GENERATE_SCENARIOS, body });
    Json(json!({
        "scenarios": [
            { "id": "sc-1", "title": "Build a REST API", "role": "backend", "difficulty": "intermediate",
              "requirements": ["auth", "pagination", "docs"] },
            { "id": "sc-2", "title": "Fix a slow query", "role": "backend" }
        ],
        "count": 2
    }))
}

async fn submit(State(log): State<Log>, multipart: Multipart) -> Json<Value> {
    let fields = read_fields(multipart).await;
    let scenario_id = fields
        .iter()
        .find(|f| f.name == submit_fields::SCENARIO_ID)
        .map(|f| f.text.clone())
        .unwrap_or_default();
    log.lock().unwrap().push(Seen::Multipart { path: endpoints::SUBMIT_RESPONSE, fields });
    Json(json!({
        "simulation_id": "sim-1",
        "status": "completed",
        "student": { "name": "Ada" },
        "scenario": { "id": scenario_id, "title": "Build a REST API" },
        "evaluation": { "scores": { "clarity": 20 }, "total_score": 80, "grade": "B" },
        "gap_analysis": { "total_gaps": 0, "improvement_urgency": "Low" },
        "training_recommendations": { "estimated_duration": "1 week" }
    }))
}

async fn results(AxumPath(id): AxumPath<String>) -> Json<Value> {
    Json(json!({ "simulation_id": id, "message": "Results retrieval not implemented yet" }))
}

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/")
}

async fn spawn_backend() -> (ApiClient, Log) {
    let log = Log::default();
    let router = Router::new()
        .route(endpoints::HEALTH, get(health))
        .route(endpoints::UPLOAD_SCENARIOS, post(upload_scenarios))
        .route(endpoints::UPLOAD_TRAINING_RESOURCES, post(upload_training))
        .route(endpoints::GENERATE_SCENARIOS, post(generate))
        .route(endpoints::SUBMIT_RESPONSE, post(submit))
        .route("/simulation-results/{id}", get(results))
        .with_state(log.clone());
    (ApiClient::new(spawn(router).await), log)
}

async fn temp_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("readiness-cli-{}", uuid::Uuid::new_v4()));
    tokio::fs::create_dir_all(&dir).await.unwrap();
    let path = dir.join(name);
    tokio::fs::write(&path, contents).await.unwrap();
    path
}

fn student() -> StudentProfile {
    StudentProfile {
        id: "student-1".to_owned(),
        name: "Ada".to_owned(),
        email: String::new(),
        role: Role::Backend,
        skill_level: SkillLevel::Intermediate,
    }
}

fn last(log: &Log) -> Seen {
    log.lock().unwrap().last().cloned().unwrap()
}

// =============================================================================
// Happy paths
// =============================================================================

#[tokio::test]
async fn health_decodes_status() {
    let (api, _) = spawn_backend().await;
    let reply = api.health().await.unwrap();
    assert_eq!(reply.body.status, "healthy");
    assert_eq!(reply.raw["message"], "Industry-Readiness API is running");
}

#[tokio::test]
async fn upload_sends_file_field_to_kind_path() {
    let (api, log) = spawn_backend().await;
    let path = temp_file("scenarios.csv", "role,title\nbackend,API\n").await;

    let reply = api.upload_csv(UploadKind::Scenarios, &path).await.unwrap();
    assert_eq!(reply.body.message, "Uploaded 2 scenarios");
    assert_eq!(reply.body.count, 2);
    assert_eq!(
        last(&log),
        Seen::Multipart {
            path: endpoints::UPLOAD_SCENARIOS,
            fields: vec![Field {
                name: "file".to_owned(),
                file_name: Some("scenarios.csv".to_owned()),
                text: "role,title\nbackend,API\n".to_owned(),
            }],
        }
    );

    let path = temp_file("resources.CSV", "title,type\n").await;
    api.upload_csv(UploadKind::TrainingResources, &path).await.unwrap();
    assert!(matches!(last(&log), Seen::Multipart { path: endpoints::UPLOAD_TRAINING_RESOURCES, .. }));
}

#[tokio::test]
async fn generate_posts_student_json() {
    let (api, log) = spawn_backend().await;
    let reply = api.generate_scenarios(&student()).await.unwrap();

    assert_eq!(reply.body.count, 2);
    assert_eq!(reply.body.scenarios[1].title, "Fix a slow query");
    assert!(reply.body.scenarios[1].requirements.is_empty());
    assert_eq!(
        last(&log),
        Seen::Json {
            path: endpoints::GENERATE_SCENARIOS,
            body: json!({
                "id": "student-1",
                "name": "Ada",
                "email": "",
                "role": "backend",
                "skill_level": "intermediate"
            }),
        }
    );
}

#[tokio::test]
async fn submit_sends_all_multipart_fields() {
    let (api, log) = spawn_backend().await;
    let notes = temp_file("notes.md", "# notes").await;
    let schema = temp_file("schema.sql", "create table t();").await;

    let reply = api
        .submit_response(&student(), "sc-1", "fn main() {}", &[notes, schema])
        .await
        .unwrap();
    assert_eq!(reply.body.simulation_id.as_deref(), Some("sim-1"));
    assert_eq!(reply.body.evaluation.grade, "B");
    assert_eq!(reply.body.scenario.unwrap().id, "sc-1");

    let Seen::Multipart { path, fields } = last(&log) else { panic!("expected multipart") };
    assert_eq!(path, endpoints::SUBMIT_RESPONSE);
    let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["student_data", "scenario_id", "response_content", "files", "files"]);
    let student_data: Value = serde_json::from_str(&fields[0].text).unwrap();
    assert_eq!(student_data["role"], "backend");
    assert_eq!(fields[2].text, "fn main() {}");
    assert_eq!(fields[3].file_name.as_deref(), Some("notes.md"));
    assert_eq!(fields[4].text, "create table t();");
}

#[tokio::test]
async fn results_lookup_reports_pending_placeholder() {
    let (api, _) = spawn_backend().await;
    let reply = api.simulation_results(" sim-7 ").await.unwrap();
    assert_eq!(
        reply.body,
        ResultsLookup::Pending {
            simulation_id: "sim-7".to_owned(),
            message: "Results retrieval not implemented yet".to_owned(),
        }
    );
}

// =============================================================================
// Validation and errors
// =============================================================================

#[tokio::test]
async fn upload_rejects_non_csv_without_request() {
    let (api, log) = spawn_backend().await;
    let path = temp_file("scenarios.txt", "x").await;
    let err = api.upload_csv(UploadKind::Scenarios, &path).await.unwrap_err();
    assert!(matches!(err, CliError::NotCsv(_)));
    assert!(err.to_string().starts_with("Please select a valid CSV file"));
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn upload_reports_missing_file() {
    let (api, _) = spawn_backend().await;
    let err = api
        .upload_csv(UploadKind::Scenarios, std::path::Path::new("/nonexistent/scenarios.csv"))
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::Io { .. }));
}

#[tokio::test]
async fn submit_rejects_blank_response() {
    let (api, log) = spawn_backend().await;
    let err = api.submit_response(&student(), "sc-1", "  \n", &[]).await.unwrap_err();
    assert!(matches!(err, CliError::EmptyResponse));
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn server_detail_string_is_surfaced() {
    let router = Router::new().route(
        endpoints::GENERATE_SCENARIOS,
        post(|| async { (StatusCode::BAD_REQUEST, Json(json!({ "detail": "No scenarios uploaded" }))) }),
    );
    let api = ApiClient::new(spawn(router).await);
    let err = api.generate_scenarios(&student()).await.unwrap_err();
    assert_eq!(err.to_string(), "No scenarios uploaded");
    assert!(matches!(err, CliError::Api(ApiError::Server { status: 400, .. })));
}

#[tokio::test]
async fn upload_failure_without_detail_uses_status_fallback() {
    let router = Router::new().route(
        endpoints::UPLOAD_TRAINING_RESOURCES,
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))) }),
    );
    let api = ApiClient::new(spawn(router).await);
    let path = temp_file("resources.csv", "title\n").await;
    let err = api.upload_csv(UploadKind::TrainingResources, &path).await.unwrap_err();
    assert_eq!(err.to_string(), "Upload failed: 500");
}

#[tokio::test]
async fn upload_failure_with_empty_body_is_generic() {
    let router = Router::new().route(
        endpoints::UPLOAD_TRAINING_RESOURCES,
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let api = ApiClient::new(spawn(router).await);
    let path = temp_file("resources.csv", "title\n").await;
    let err = api.upload_csv(UploadKind::TrainingResources, &path).await.unwrap_err();
    assert_eq!(err.to_string(), "Upload failed");
}

#[tokio::test]
async fn json_failure_without_detail_uses_http_fallback() {
    let router = Router::new().route(
        endpoints::HEALTH,
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "status": "down" }))) }),
    );
    let api = ApiClient::new(spawn(router).await);
    let err = api.health().await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP error! status: 503");
}

#[tokio::test]
async fn json_failure_with_html_body_is_unknown_error() {
    let router = Router::new().route(
        endpoints::HEALTH,
        get(|| async { (StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>") }),
    );
    let api = ApiClient::new(spawn(router).await);
    let err = api.health().await.unwrap_err();
    assert_eq!(err.to_string(), "Unknown error");
    assert!(matches!(err, CliError::Api(ApiError::Server { status: 502, .. })));
}

#[test]
fn csv_path_check_is_case_insensitive() {
    assert!(is_csv_path(std::path::Path::new("data/Scenarios.CSV")));
    assert!(!is_csv_path(std::path::Path::new("data/scenarios.csv.bak")));
    assert!(!is_csv_path(std::path::Path::new("csv")));
}

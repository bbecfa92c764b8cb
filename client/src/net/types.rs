//! Wire DTOs for the client/backend boundary.
//!
//! The schema lives in the `contract` crate so the CLI decodes exactly the
//! same shapes as the browser.

pub use contract::{
    ApiError, Evaluation, GapAnalysis, GenerateScenariosResponse, HealthResponse, LearningPhase, RequestKind,
    ResultsLookup, Role, Scenario, SimulationResult, SkillLevel, StudentProfile, TrainingRecommendations,
    TrainingResource, UploadKind, UploadResponse,
};

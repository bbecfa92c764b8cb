//! Form rules for the profile and response steps.
//!
//! Only the checks the backend relies on are enforced here: a student needs a
//! name, role and skill level; a response needs non-blank text.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::{Role, SkillLevel, StudentProfile};

/// Message shown when submitting without any response text.
pub const EMPTY_RESPONSE_MESSAGE: &str = "Please provide a response before submitting";

/// In-progress student form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
    pub skill_level: Option<SkillLevel>,
}

impl StudentDraft {
    pub fn can_generate(&self, loading: bool) -> bool {
        !loading && !self.name.trim().is_empty() && self.role.is_some() && self.skill_level.is_some()
    }

    /// Build the wire profile, assigning a fresh id when none was entered.
    ///
    /// Returns `None` while required fields are missing.
    pub fn to_profile(&self) -> Option<StudentProfile> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        let id = match self.id.trim() {
            "" => uuid::Uuid::new_v4().to_string(),
            id => id.to_owned(),
        };
        Some(StudentProfile {
            id,
            name: name.to_owned(),
            email: self.email.trim().to_owned(),
            role: self.role?,
            skill_level: self.skill_level?,
        })
    }

    /// Profile reflecting the current draft, keeping `generated`'s id when no
    /// id was entered. An incomplete draft leaves `generated` unchanged.
    pub fn refresh_profile(&self, generated: &StudentProfile) -> StudentProfile {
        let draft = if self.id.trim().is_empty() {
            Self { id: generated.id.clone(), ..self.clone() }
        } else {
            self.clone()
        };
        draft.to_profile().unwrap_or_else(|| generated.clone())
    }
}

/// Textarea placeholder tuned to the scenario's role.
pub fn response_placeholder(role: &str) -> &'static str {
    match role.parse::<Role>() {
        Ok(Role::Frontend | Role::Fullstack) => "Paste your code here (HTML, CSS, JavaScript, React, etc.)...",
        Ok(Role::Backend) => "Paste your code here (API endpoints, database schemas, server logic, etc.)...",
        Ok(Role::DataAnalyst) => "Provide your analysis, findings, and conclusions here...",
        Err(_) => "Enter your solution here...",
    }
}

pub fn can_submit(text: &str, loading: bool) -> bool {
    !loading && !text.trim().is_empty()
}

/// # Errors
///
/// Returns the user-facing message when `text` is blank.
pub fn validate_response(text: &str) -> Result<(), &'static str> {
    if text.trim().is_empty() { Err(EMPTY_RESPONSE_MESSAGE) } else { Ok(()) }
}

pub fn character_count(text: &str) -> String {
    format!("{} characters", text.chars().count())
}

pub fn format_time_limit(limit: Option<&str>) -> String {
    match limit.map(str::trim) {
        Some(limit) if !limit.is_empty() => limit.to_owned(),
        _ => "No time limit".to_owned(),
    }
}

/// Visual class of a status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Error,
    Info,
}

impl StatusTone {
    /// Classify a status message by its wording.
    pub fn classify(message: &str) -> Self {
        let lower = message.to_ascii_lowercase();
        if lower.contains("successfully") || lower.starts_with("success") {
            Self::Success
        } else if lower.contains("failed") || lower.starts_with("error") || lower.starts_with("please") {
            Self::Error
        } else {
            Self::Info
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "status status--success",
            Self::Error => "status status--error",
            Self::Info => "status status--info",
        }
    }
}

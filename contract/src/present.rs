//! Presentation rules for evaluation results.
//!
//! Both the web dashboard and the terminal report derive badges, bar colors
//! and summary counts from these functions so the two surfaces agree.

#[cfg(test)]
#[path = "present_test.rs"]
mod present_test;

use std::collections::BTreeMap;

use crate::types::{SimulationResult, TrainingResource};

/// Points available per scoring criterion.
pub const CRITERION_MAX_SCORE: f64 = 25.0;

/// Display order for the well-known criteria; unknown ones follow, `general` last.
const CRITERION_ORDER: [&str; 4] = ["clarity", "relevance", "correctness", "scalability"];
const CATEGORY_ORDER: [&str; 4] = ["immediate", "foundational", "practical", "advanced"];

/// Five-step quality scale used for grade badges and score bars.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Excellent,
    Good,
    Fair,
    Weak,
    Poor,
}

impl Tone {
    /// Short modifier name, used for CSS class suffixes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Weak => "weak",
            Self::Poor => "poor",
        }
    }
}

/// Tone for a letter grade; unknown grades are treated like `F`.
#[must_use]
pub fn grade_tone(grade: &str) -> Tone {
    match grade.trim() {
        "A" => Tone::Excellent,
        "B" => Tone::Good,
        "C" => Tone::Fair,
        "D" => Tone::Weak,
        _ => Tone::Poor,
    }
}

/// Render a point value without a trailing `.0` for whole numbers.
#[must_use]
pub fn format_points(points: f64) -> String {
    if points.fract() == 0.0 { format!("{points:.0}") } else { format!("{points:.1}") }
}

/// Percentage of the per-criterion maximum.
#[must_use]
pub fn criterion_percent(score: f64) -> f64 {
    score / CRITERION_MAX_SCORE * 100.0
}

/// Bar tone for a criterion score out of `max_score`.
#[must_use]
pub fn score_tone(score: f64, max_score: f64) -> Tone {
    let percentage = if max_score > 0.0 { score / max_score * 100.0 } else { 0.0 };
    if percentage >= 88.0 {
        Tone::Excellent
    } else if percentage >= 72.0 {
        Tone::Good
    } else if percentage >= 60.0 {
        Tone::Fair
    } else if percentage >= 40.0 {
        Tone::Weak
    } else {
        Tone::Poor
    }
}

/// Improvement urgency parsed from the backend's free-text label
/// (e.g. `"High - Significant improvement needed"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Urgency {
    Critical,
    High,
    Medium,
    Low,
}

impl Urgency {
    #[must_use]
    pub fn classify(text: &str) -> Self {
        if text.contains("Critical") {
            Self::Critical
        } else if text.contains("High") {
            Self::High
        } else if text.contains("Medium") {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Critical and high urgency render as destructive badges.
    #[must_use]
    pub fn is_severe(self) -> bool {
        matches!(self, Self::Critical | Self::High)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Human label for a criterion or category key (`best_practices` → `best practices`).
#[must_use]
pub fn criterion_label(key: &str) -> String {
    key.replace('_', " ")
}

/// Order criterion entries for display.
#[must_use]
pub fn ordered_criteria<V>(map: &BTreeMap<String, V>) -> Vec<(&str, &V)> {
    let mut entries: Vec<(&str, &V)> = map.iter().map(|(k, v)| (k.as_str(), v)).collect();
    entries.sort_by_key(|(key, _)| criterion_rank(key));
    entries
}

fn criterion_rank(key: &str) -> usize {
    CRITERION_ORDER
        .iter()
        .position(|known| *known == key)
        .unwrap_or(if key == "general" { usize::MAX } else { CRITERION_ORDER.len() })
}

/// Order recommendation categories for display, unknown categories last.
#[must_use]
pub fn ordered_categories<V>(map: &BTreeMap<String, V>) -> Vec<(&str, &V)> {
    let mut entries: Vec<(&str, &V)> = map.iter().map(|(k, v)| (k.as_str(), v)).collect();
    entries.sort_by_key(|(key, _)| {
        CATEGORY_ORDER
            .iter()
            .position(|known| known == key)
            .unwrap_or(CATEGORY_ORDER.len())
    });
    entries
}

/// First three skill tags joined with commas.
#[must_use]
pub fn format_skills(skills: &str) -> String {
    skills.split_whitespace().take(3).collect::<Vec<_>>().join(", ")
}

/// Whether a resource URL points somewhere real (the backend uses `#` as a placeholder).
#[must_use]
pub fn is_linkable(url: &str) -> bool {
    let url = url.trim();
    !url.is_empty() && url != "#"
}

/// Split a list into the first `limit` items and the count of hidden ones.
#[must_use]
pub fn requirements_preview(items: &[String], limit: usize) -> (&[String], usize) {
    let shown = items.len().min(limit);
    (&items[..shown], items.len() - shown)
}

/// Total resources across every recommendation category.
#[must_use]
pub fn total_resources(recommendations: &BTreeMap<String, Vec<TrainingResource>>) -> usize {
    recommendations.values().map(Vec::len).sum()
}

/// Headline counts shown at the bottom of the results view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultSummary {
    pub total_gaps: usize,
    pub learning_phases: usize,
    pub resources: usize,
}

impl ResultSummary {
    #[must_use]
    pub fn of(result: &SimulationResult) -> Self {
        let recs = &result.training_recommendations;
        Self {
            total_gaps: result.gap_analysis.total_gaps,
            learning_phases: recs.learning_path.len(),
            resources: total_resources(&recs.recommendations),
        }
    }
}

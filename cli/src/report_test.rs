use std::collections::BTreeMap;

use contract::{Evaluation, GapAnalysis, LearningPhase, TrainingRecommendations};

use super::*;

fn scenario(requirements: &[&str]) -> Scenario {
    Scenario {
        id: "sc-1".to_owned(),
        title: "Build a REST API".to_owned(),
        task: "Design endpoints".to_owned(),
        role: "backend".to_owned(),
        difficulty: "intermediate".to_owned(),
        requirements: requirements.iter().map(|r| (*r).to_owned()).collect(),
        ..Scenario::default()
    }
}

fn completed_result() -> SimulationResult {
    let mut scores = BTreeMap::new();
    scores.insert("general".to_owned(), 0.0);
    scores.insert("scalability".to_owned(), 15.0);
    scores.insert("clarity".to_owned(), 22.0);
    let mut feedback = BTreeMap::new();
    feedback.insert("general".to_owned(), "Solid start".to_owned());

    let mut recommendations = BTreeMap::new();
    recommendations.insert(
        "foundational".to_owned(),
        vec![TrainingResource {
            title: "Rust Book".to_owned(),
            kind: "book".to_owned(),
            url: "https://doc.rust-lang.org/book/".to_owned(),
            skills: "rust ownership lifetimes traits".to_owned(),
            ..TrainingResource::default()
        }],
    );

    SimulationResult {
        simulation_id: Some("sim-9".to_owned()),
        status: "completed".to_owned(),
        scenario: Some(scenario(&[])),
        evaluation: Evaluation {
            scores,
            feedback,
            total_score: 74.0,
            grade: "B".to_owned(),
            ..Evaluation::default()
        },
        gap_analysis: GapAnalysis {
            technical_gaps: vec!["error handling".to_owned()],
            total_gaps: 1,
            improvement_urgency: "High - targeted practice".to_owned(),
            ..GapAnalysis::default()
        },
        training_recommendations: TrainingRecommendations {
            recommendations,
            learning_path: vec![LearningPhase {
                phase: 1,
                title: "Foundations".to_owned(),
                duration: "2 weeks".to_owned(),
                ..LearningPhase::default()
            }],
            estimated_duration: "2 weeks".to_owned(),
            ..TrainingRecommendations::default()
        },
        ..SimulationResult::default()
    }
}

#[test]
fn scenarios_list_previews_two_requirements() {
    let text = render_scenarios(&[scenario(&["auth", "pagination", "rate limits", "docs"])]);
    assert!(text.starts_with("1. Build a REST API [backend / intermediate]"));
    assert!(text.contains("   - auth\n   - pagination\n"));
    assert!(!text.contains("rate limits"));
    assert!(text.contains("+2 more..."));
    assert!(text.contains("id: sc-1"));
}

#[test]
fn failed_result_shows_error() {
    let result = SimulationResult {
        status: "failed".to_owned(),
        error: Some("evaluator offline".to_owned()),
        ..SimulationResult::default()
    };
    assert_eq!(render_result(&result), "Evaluation Failed\nevaluator offline\n");
}

#[test]
fn failed_result_without_error_uses_fallback() {
    let result = SimulationResult { status: "failed".to_owned(), ..SimulationResult::default() };
    assert!(render_result(&result).contains("Unable to process your submission"));
}

#[test]
fn completed_result_renders_scores_in_display_order() {
    let text = render_result(&completed_result());
    assert!(text.contains("Score: 74/100 (74.0%)  Grade: B [good]"));
    let clarity = text.find("clarity").unwrap();
    let scalability = text.find("scalability").unwrap();
    let general = text.find("general").unwrap();
    assert!(clarity < scalability && scalability < general);
}

#[test]
fn completed_result_renders_gaps_and_resources() {
    let text = render_result(&completed_result());
    assert!(text.contains("Improvement Priority: High - targeted practice [high]"));
    assert!(text.contains("Technical Skills:\n  - error handling"));
    assert!(!text.contains("Great job!"));
    assert!(text.contains("Phase 1: Foundations (2 weeks)"));
    assert!(text.contains("No specific resources available for this phase."));
    assert!(text.contains("* Rust Book (book) skills: rust, ownership, lifetimes <https://doc.rust-lang.org/book/>"));
    assert!(text.contains("Total Gaps Identified: 1  Learning Phases: 1  Recommended Resources: 1"));
}

#[test]
fn recommendation_categories_follow_learning_sequence() {
    let mut result = completed_result();
    let resource = |title: &str| TrainingResource { title: title.to_owned(), ..TrainingResource::default() };
    let recs = &mut result.training_recommendations.recommendations;
    recs.insert("advanced".to_owned(), vec![resource("Distributed Systems")]);
    recs.insert("immediate".to_owned(), vec![resource("Error Handling Drill")]);

    let text = render_result(&result);
    let immediate = text.find("immediate Resources:").unwrap();
    let foundational = text.find("foundational Resources:").unwrap();
    let advanced = text.find("advanced Resources:").unwrap();
    assert!(immediate < foundational && foundational < advanced);
}

#[test]
fn pending_lookup_shows_message() {
    let lookup = ResultsLookup::Pending { simulation_id: "sim-3".to_owned(), message: "not stored".to_owned() };
    assert_eq!(render_lookup(&lookup), "Simulation sim-3: not stored\n");
}

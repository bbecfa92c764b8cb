use super::*;
use crate::net::types::{Role, SkillLevel};

fn student() -> StudentProfile {
    StudentProfile {
        id: "s-1".to_owned(),
        name: "Ada".to_owned(),
        email: String::new(),
        role: Role::Backend,
        skill_level: SkillLevel::Intermediate,
    }
}

fn scenario() -> Scenario {
    Scenario { id: "sc-1".to_owned(), title: "Build an API".to_owned(), ..Scenario::default() }
}

fn result() -> SimulationResult {
    SimulationResult { simulation_id: Some("sim-1".to_owned()), ..SimulationResult::default() }
}

#[test]
fn step_titles_and_numbers() {
    let titles: Vec<_> = Step::ALL.iter().map(|s| s.title()).collect();
    assert_eq!(titles, ["Profile Setup", "Complete Scenario", "View Results"]);
    let numbers: Vec<_> = Step::ALL.iter().map(|s| s.number()).collect();
    assert_eq!(numbers, [1, 2, 3]);
}

#[test]
fn step_status_relative_to_current() {
    assert_eq!(StepStatus::of(Step::Profile, Step::Scenario), StepStatus::Completed);
    assert_eq!(StepStatus::of(Step::Scenario, Step::Scenario), StepStatus::Active);
    assert_eq!(StepStatus::of(Step::Results, Step::Scenario), StepStatus::Pending);
}

#[test]
fn selecting_scenario_advances_to_step_two() {
    let mut state = SimulatorState::default();
    state.select_scenario(student(), scenario());
    assert_eq!(state.step, Step::Scenario);
    assert_eq!(state.scenario.as_ref().map(|s| s.id.as_str()), Some("sc-1"));
    assert_eq!(state.student.as_ref().map(|s| s.name.as_str()), Some("Ada"));
    assert_eq!(state.status_of(Step::Profile), StepStatus::Completed);
}

#[test]
fn completing_submission_advances_to_results() {
    let mut state = SimulatorState::default();
    state.select_scenario(student(), scenario());
    state.complete_submission(result());
    assert_eq!(state.step, Step::Results);
    assert!(state.result.is_some());
}

#[test]
fn submission_without_scenario_is_ignored() {
    let mut state = SimulatorState::default();
    state.complete_submission(result());
    assert_eq!(state.step, Step::Profile);
    assert!(state.result.is_none());
}

#[test]
fn start_new_resets_all_state() {
    let mut state = SimulatorState::default();
    state.select_scenario(student(), scenario());
    state.complete_submission(result());
    state.start_new();
    assert_eq!(state.step, Step::Profile);
    assert!(state.student.is_none());
    assert!(state.scenario.is_none());
    assert!(state.result.is_none());
}

//! Simulator workflow state: profile, selected scenario, evaluation result.
//!
//! DESIGN
//! ======
//! The simulator is a three-step linear flow. Steps only advance through the
//! transition methods below so the step indicator and the stored data never
//! disagree (for example, `Results` always has a `result`).

#[cfg(test)]
#[path = "simulator_test.rs"]
mod simulator_test;

use crate::net::types::{Scenario, SimulationResult, StudentProfile};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    Profile,
    Scenario,
    Results,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Profile, Step::Scenario, Step::Results];

    pub fn number(self) -> u8 {
        match self {
            Self::Profile => 1,
            Self::Scenario => 2,
            Self::Results => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Profile => "Profile Setup",
            Self::Scenario => "Complete Scenario",
            Self::Results => "View Results",
        }
    }
}

/// Indicator state of one step relative to the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

impl StepStatus {
    pub fn of(step: Step, current: Step) -> Self {
        match step.number().cmp(&current.number()) {
            std::cmp::Ordering::Less => Self::Completed,
            std::cmp::Ordering::Equal => Self::Active,
            std::cmp::Ordering::Greater => Self::Pending,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Completed => "step step--completed",
            Self::Active => "step step--active",
            Self::Pending => "step step--pending",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SimulatorState {
    pub step: Step,
    pub student: Option<StudentProfile>,
    pub scenario: Option<Scenario>,
    pub result: Option<SimulationResult>,
}

impl SimulatorState {
    /// Record the chosen scenario and move to the response step.
    pub fn select_scenario(&mut self, student: StudentProfile, scenario: Scenario) {
        self.student = Some(student);
        self.scenario = Some(scenario);
        self.result = None;
        self.step = Step::Scenario;
    }

    /// Store the evaluation and move to the results step.
    ///
    /// Ignored unless a scenario is in progress.
    pub fn complete_submission(&mut self, result: SimulationResult) {
        if self.step != Step::Scenario {
            return;
        }
        self.result = Some(result);
        self.step = Step::Results;
    }

    /// Reset everything for a new assessment.
    pub fn start_new(&mut self) {
        *self = Self::default();
    }

    pub fn status_of(&self, step: Step) -> StepStatus {
        StepStatus::of(step, self.step)
    }
}

//! Assessment simulator page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns `SimulatorState` for the route and swaps the step component as the
//! workflow advances. Leaving the page drops all simulator state.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::progress_steps::ProgressSteps;
use crate::components::response_submission::ResponseSubmission;
use crate::components::results_dashboard::ResultsDashboard;
use crate::components::scenario_selector::ScenarioSelector;
use crate::net::types::{Scenario, SimulationResult, StudentProfile};
use crate::state::connection::ConnectionState;
use crate::state::simulator::{SimulatorState, Step};

#[component]
pub fn SimulatorPage() -> impl IntoView {
    let connection = expect_context::<RwSignal<ConnectionState>>();
    let simulator = RwSignal::new(SimulatorState::default());
    let navigate = use_navigate();

    let on_back = move |_| {
        connection.update(ConnectionState::clear_error);
        navigate("/", NavigateOptions::default());
    };

    let on_select = move |(student, scenario): (StudentProfile, Scenario)| {
        simulator.update(|s| s.select_scenario(student, scenario));
    };
    let on_complete = move |result: SimulationResult| simulator.update(|s| s.complete_submission(result));
    let on_start_new = move |()| simulator.update(SimulatorState::start_new);

    // Re-render only when the step changes, not on every state write.
    let step = Memo::new(move |_| simulator.with(|s| s.step));

    view! {
        <div class="simulator">
            <div class="simulator__header">
                <button class="button button--ghost" on:click=on_back>
                    "Back to Home"
                </button>
                <div>
                    <h1>"Assessment Simulator"</h1>
                    <p class="muted">"Complete your industry readiness assessment"</p>
                </div>
            </div>

            <ProgressSteps simulator=simulator />

            <div class="simulator__content">
                {move || match step.get() {
                    Step::Profile => view! { <ScenarioSelector on_select=on_select /> }.into_any(),
                    Step::Scenario => {
                        let state = simulator.get_untracked();
                        match (state.scenario, state.student) {
                            (Some(scenario), Some(student)) => {
                                view! {
                                    <ResponseSubmission scenario=scenario student=student on_complete=on_complete />
                                }
                                    .into_any()
                            }
                            _ => ().into_any(),
                        }
                    }
                    Step::Results => {
                        simulator
                            .get_untracked()
                            .result
                            .map(|result| {
                                view! { <ResultsDashboard result=result on_start_new=on_start_new /> }.into_any()
                            })
                            .unwrap_or_else(|| ().into_any())
                    }
                }}
            </div>
        </div>
    }
}

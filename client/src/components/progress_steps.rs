use leptos::prelude::*;

use crate::state::simulator::{SimulatorState, Step, StepStatus};

/// Three-step progress indicator for the simulator.
#[component]
pub fn ProgressSteps(simulator: RwSignal<SimulatorState>) -> impl IntoView {
    view! {
        <div class="card progress">
            <h3 class="card__title">"Assessment Progress"</h3>
            <ol class="progress__steps">
                {Step::ALL
                    .into_iter()
                    .map(|step| {
                        let status = move || simulator.get().status_of(step);
                        view! {
                            <li class=move || status().class()>
                                <span class="step__marker">
                                    {move || match status() {
                                        StepStatus::Completed => "✓".to_owned(),
                                        _ => step.number().to_string(),
                                    }}
                                </span>
                                <span class="step__title">{step.title()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </div>
    }
}

//! Step 2: scenario detail plus response editor with optional attachments.

use leptos::prelude::*;

use crate::net::types::{Scenario, SimulationResult, StudentProfile};
use crate::state::request::RequestState;
use crate::util::files::FileSelection;
use crate::util::form::{self, StatusTone};

#[component]
pub fn ResponseSubmission(
    scenario: Scenario,
    student: StudentProfile,
    #[prop(into)] on_complete: Callback<SimulationResult>,
) -> impl IntoView {
    let content = RwSignal::new(String::new());
    let attachments = FileSelection::new();
    let status = RwSignal::new(String::new());
    let request = RwSignal::new(RequestState::default());
    let placeholder = form::response_placeholder(student.role.as_str());
    let scenario_id = scenario.id.clone();

    let on_files_change = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::Event| {
                use wasm_bindgen::JsCast;

                if let Some(input) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                {
                    attachments.replace_from_input(&input);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::Event| {}
        }
    };

    let on_submit = move |_| {
        let text = content.get_untracked();
        if let Err(message) = form::validate_response(&text) {
            status.set(message.to_owned());
            return;
        }
        if !request.try_update(RequestState::begin).unwrap_or(false) {
            return;
        }
        status.set("Submitting response...".to_owned());
        let student = student.clone();
        let scenario_id = scenario_id.clone();

        leptos::task::spawn_local(async move {
            match crate::net::api::submit_response(&student, &scenario_id, &text, attachments).await {
                Ok(result) => {
                    request.update(RequestState::succeed);
                    status.set("Response submitted successfully!".to_owned());
                    on_complete.run(result);
                }
                Err(e) => {
                    let message = e.to_string();
                    request.update(|r| r.fail(message.clone()));
                    status.set(format!("Submission failed: {message}"));
                }
            }
        });
    };

    let time_limit = form::format_time_limit(scenario.time_limit.as_deref());

    view! {
        <div class="response-submission">
            <div class="card">
                <div class="card__header">
                    <div>
                        <h3 class="card__title">{scenario.title.clone()}</h3>
                        <p class="card__description">{scenario.task.clone()}</p>
                    </div>
                    <span class="response-submission__time">{time_limit}</span>
                </div>
                <div class="scenario-card__badges">
                    <span class="badge badge--secondary">{scenario.role.clone()}</span>
                    <span class="badge badge--outline">{scenario.difficulty.clone()}</span>
                </div>
                {(!scenario.context.is_empty())
                    .then(|| view! { <p class="response-submission__context">{scenario.context.clone()}</p> })}
                <BulletList title="Requirements:" items=scenario.requirements.clone() />
                <BulletList title="Expected Deliverables:" items=scenario.deliverables.clone() />
            </div>

            <div class="card">
                <h3 class="card__title">"Your Response"</h3>
                <p class="card__description">"Provide your solution to the scenario above"</p>

                <label class="form-field">
                    <span>"Solution"</span>
                    <textarea
                        class="response-submission__editor"
                        rows="12"
                        placeholder=placeholder
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="muted">{move || form::character_count(&content.get())}</div>

                <label class="form-field">
                    <span>"Additional Files (Optional)"</span>
                    <input type="file" multiple=true on:change=on_files_change />
                </label>
                <Show when=move || !attachments.is_empty()>
                    <div class="attachments">
                        <div class="attachments__title">"Selected Files:"</div>
                        {move || {
                            attachments
                                .metas()
                                .into_iter()
                                .enumerate()
                                .map(|(index, meta)| {
                                    view! {
                                        <div class="attachments__item">
                                            <span>{meta.name.clone()}</span>
                                            <span class="badge">{meta.size_label()}</span>
                                            <button
                                                class="button button--ghost"
                                                on:click=move |_| attachments.remove(index)
                                            >
                                                "Remove"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>

                <button
                    class="button button--primary button--wide"
                    disabled=move || !form::can_submit(&content.get(), request.get().loading)
                    on:click=on_submit
                >
                    {move || if request.get().loading { "Processing Submission..." } else { "Submit Response" }}
                </button>

                <Show when=move || !status.get().is_empty()>
                    <div class=move || StatusTone::classify(&status.get()).class()>{move || status.get()}</div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn BulletList(title: &'static str, items: Vec<String>) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <div class="bullet-list">
                <h4>{title}</h4>
                <ul>{items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}</ul>
            </div>
        }
    })
}

//! Step 1: student profile form and generated scenario list.

use leptos::prelude::*;

use crate::net::types::{Role, Scenario, SkillLevel, StudentProfile};
use crate::state::request::RequestState;
use crate::util::form::StudentDraft;

/// Requirements shown per scenario card before collapsing into "+N more...".
const REQUIREMENT_PREVIEW: usize = 2;

#[component]
pub fn ScenarioSelector(#[prop(into)] on_select: Callback<(StudentProfile, Scenario)>) -> impl IntoView {
    let draft = RwSignal::new(StudentDraft::default());
    let profile = RwSignal::new(None::<StudentProfile>);
    let scenarios = RwSignal::new(Vec::<Scenario>::new());
    let selected_id = RwSignal::new(None::<String>);
    let request = RwSignal::new(RequestState::default());

    let on_generate = move |_| {
        let Some(student) = draft.get_untracked().to_profile() else {
            return;
        };
        if !request.try_update(RequestState::begin).unwrap_or(false) {
            return;
        }
        profile.set(Some(student.clone()));

        leptos::task::spawn_local(async move {
            match crate::net::api::generate_scenarios(&student).await {
                Ok(resp) => {
                    request.update(RequestState::succeed);
                    selected_id.set(None);
                    scenarios.set(resp.scenarios);
                }
                Err(e) => request.update(|r| r.fail(e.to_string())),
            }
        });
    };

    let choose = Callback::new(move |scenario: Scenario| {
        let Some(generated) = profile.get_untracked() else {
            return;
        };
        let student = draft.get_untracked().refresh_profile(&generated);
        selected_id.set(Some(scenario.id.clone()));
        on_select.run((student, scenario));
    });

    view! {
        <div class="scenario-selector">
            <div class="card">
                <h3 class="card__title">"Student Information"</h3>
                <p class="card__description">"Enter your details to get personalized scenarios"</p>

                <div class="form-grid">
                    <label class="form-field">
                        <span>"Name"</span>
                        <input
                            type="text"
                            placeholder="Enter your name"
                            prop:value=move || draft.get().name
                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span>"Email (Optional)"</span>
                        <input
                            type="email"
                            placeholder="your.email@example.com"
                            prop:value=move || draft.get().email
                            on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                        />
                    </label>
                </div>

                <div class="form-grid">
                    <label class="form-field">
                        <span>"Role"</span>
                        <select on:change=move |ev| {
                            let role = event_target_value(&ev).parse::<Role>().ok();
                            draft.update(|d| d.role = role);
                        }>
                            <option value="" selected=move || draft.get().role.is_none()>
                                "Select your role"
                            </option>
                            {Role::ALL
                                .into_iter()
                                .map(|role| {
                                    view! {
                                        <option
                                            value=role.as_str()
                                            selected=move || draft.get().role == Some(role)
                                        >
                                            {role.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="form-field">
                        <span>"Skill Level"</span>
                        <select on:change=move |ev| {
                            let level = event_target_value(&ev).parse::<SkillLevel>().ok();
                            draft.update(|d| d.skill_level = level);
                        }>
                            <option value="" selected=move || draft.get().skill_level.is_none()>
                                "Select skill level"
                            </option>
                            {SkillLevel::ALL
                                .into_iter()
                                .map(|level| {
                                    view! {
                                        <option
                                            value=level.as_str()
                                            selected=move || draft.get().skill_level == Some(level)
                                        >
                                            {format!("{} ({})", level.label(), level.description())}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                </div>

                <button
                    class="button button--primary button--wide"
                    disabled=move || !draft.get().can_generate(request.get().loading)
                    on:click=on_generate
                >
                    {move || if request.get().loading { "Generating Scenarios..." } else { "Generate Scenarios" }}
                </button>

                {move || {
                    request
                        .get()
                        .error
                        .map(|message| view! { <div class="status status--error">{format!("Error: {message}")}</div> })
                }}
            </div>

            <Show when=move || !scenarios.get().is_empty()>
                <div class="card">
                    <h3 class="card__title">"Available Scenarios"</h3>
                    <p class="card__description">"Choose a scenario to start your assessment"</p>
                    <div class="scenario-list">
                        {move || {
                            scenarios
                                .get()
                                .into_iter()
                                .map(|scenario| view! { <ScenarioCard scenario=scenario selected_id=selected_id on_choose=choose /> })
                                .collect_view()
                        }}
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ScenarioCard(
    scenario: Scenario,
    selected_id: RwSignal<Option<String>>,
    on_choose: Callback<Scenario>,
) -> impl IntoView {
    let id = scenario.id.clone();
    let card_class = move || {
        if selected_id.get().as_deref() == Some(id.as_str()) {
            "scenario-card scenario-card--selected"
        } else {
            "scenario-card"
        }
    };
    let (shown, hidden) = contract::present::requirements_preview(&scenario.requirements, REQUIREMENT_PREVIEW);
    let shown = shown.to_vec();
    let has_requirements = !scenario.requirements.is_empty();
    let picked = scenario.clone();

    view! {
        <div class=card_class on:click=move |_| on_choose.run(picked.clone())>
            <h4 class="scenario-card__title">{scenario.title}</h4>
            <p class="scenario-card__task">{scenario.task}</p>
            <div class="scenario-card__badges">
                <span class="badge badge--secondary">{scenario.role}</span>
                <span class="badge badge--outline">{scenario.difficulty}</span>
            </div>
            {has_requirements
                .then(|| {
                    view! {
                        <div class="scenario-card__requirements">
                            <p>"Requirements:"</p>
                            <ul>
                                {shown.into_iter().map(|req| view! { <li>{req}</li> }).collect_view()}
                                {(hidden > 0)
                                    .then(|| view! { <li class="muted">{format!("+{hidden} more...")}</li> })}
                            </ul>
                        </div>
                    }
                })}
        </div>
    }
}

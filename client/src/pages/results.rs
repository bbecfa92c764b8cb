//! Stored-results lookup page for `/results/:id`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::results_dashboard::ResultsDashboard;
use crate::net::types::ResultsLookup;
use crate::state::request::RequestState;

#[component]
pub fn ResultsPage() -> impl IntoView {
    let params = use_params_map();
    let request = RwSignal::new(RequestState::default());
    let lookup = RwSignal::new(None::<ResultsLookup>);

    let simulation_id = move || params.with(|p| p.get("id").unwrap_or_default());

    Effect::new(move || {
        let id = simulation_id();
        if id.trim().is_empty() {
            return;
        }
        let Some(generation) = request.try_update(RequestState::restart) else {
            return;
        };
        lookup.set(None);

        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_simulation_results(&id).await {
                Ok(found) => {
                    if request.try_update(|r| r.succeed_current(generation)).unwrap_or(false) {
                        lookup.set(Some(found));
                    }
                }
                Err(e) => {
                    request.update(|r| {
                        r.fail_current(generation, e.to_string());
                    });
                }
            }
        });
    });

    view! {
        <div class="results-page">
            <h1>{move || format!("Simulation {}", simulation_id())}</h1>
            <Show when=move || request.get().loading>
                <p class="muted">"Loading results..."</p>
            </Show>
            {move || request.get().error.map(|e| view! { <div class="status status--error">{format!("Error: {e}")}</div> })}
            {move || {
                lookup
                    .get()
                    .map(|found| match found {
                        ResultsLookup::Completed(result) => {
                            view! { <ResultsDashboard result=*result /> }.into_any()
                        }
                        ResultsLookup::Pending { message, .. } => {
                            view! { <p class="status status--info">{message}</p> }.into_any()
                        }
                    })
            }}
        </div>
    }
}

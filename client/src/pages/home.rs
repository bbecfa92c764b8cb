//! Landing page: feature overview, CSV setup, and assessment entry point.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::file_upload::FileUpload;
use crate::net::types::UploadKind;
use crate::state::connection::ConnectionState;
use crate::state::uploads::UploadProgress;

const FEATURES: [(&str, &str); 4] = [
    ("AI-Powered Scenarios", "Generate realistic job scenarios using advanced AI and industry data"),
    ("Personalized Assessment", "Get evaluated based on your role and skill level with detailed feedback"),
    ("Gap Analysis", "Identify specific skill gaps and areas for improvement"),
    ("Learning Recommendations", "Receive personalized training paths to enhance your skills"),
];

const HOW_IT_WORKS: [(&str, &str); 3] = [
    ("Select Your Profile", "Choose your role and skill level to get personalized scenarios"),
    ("Complete Scenarios", "Work on realistic job scenarios adapted to your level"),
    ("Get Feedback", "Receive detailed evaluation and personalized improvement plan"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let connection = expect_context::<RwSignal<ConnectionState>>();
    let uploads = RwSignal::new(UploadProgress::default());
    let navigate = use_navigate();

    let on_start = move |_| {
        if !uploads.get_untracked().can_start() || !connection.get_untracked().is_connected() {
            return;
        }
        navigate("/simulator", NavigateOptions::default());
    };

    view! {
        <div class="home">
            <header class="home__header">
                <h1>"Industry-Readiness Combat Simulator"</h1>
                <p>
                    "Test your job readiness with AI-powered scenarios, get detailed feedback, "
                    "and receive personalized training recommendations to boost your career prospects."
                </p>
            </header>

            <div class="feature-grid">
                {FEATURES
                    .into_iter()
                    .map(|(title, description)| {
                        view! {
                            <div class="card feature">
                                <h3>{title}</h3>
                                <p>{description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card setup">
                <h3 class="card__title">"Setup Required"</h3>
                <p class="card__description">
                    "Upload your CSV data files to get started with personalized scenarios"
                </p>
                <div class="setup__grid">
                    <FileUpload on_uploaded=move |kind: UploadKind| uploads.update(|u| u.mark(kind)) />
                    <div class="requirements">
                        <h3>"Data Requirements"</h3>
                        {UploadKind::ALL
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <div class="requirements__item">
                                        <span class=move || {
                                            if uploads.get().is_uploaded(kind) {
                                                "check check--done"
                                            } else {
                                                "check"
                                            }
                                        }></span>
                                        <span class="requirements__name">{kind.label()}</span>
                                        <div class="muted">
                                            {format!("Required columns: {}", kind.required_columns().join(", "))}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                        <div class="requirements__note">
                            <h4>"Sample Data Format"</h4>
                            <p>
                                "Make sure your CSV files have headers and properly formatted data. "
                                "Each row should represent one scenario or training resource."
                            </p>
                        </div>
                    </div>
                </div>
            </div>

            <div class="home__start">
                <button
                    class="button button--primary button--large"
                    disabled=move || !uploads.get().can_start()
                    on:click=on_start
                >
                    {move || uploads.get().start_label()}
                </button>
                <Show when=move || !uploads.get().can_start()>
                    <p class="muted">"Please upload both scenarios and training resources CSV files to begin"</p>
                </Show>
            </div>

            <section class="how-it-works">
                <h2>"How It Works"</h2>
                <div class="how-it-works__grid">
                    {HOW_IT_WORKS
                        .into_iter()
                        .enumerate()
                        .map(|(index, (title, description))| {
                            view! {
                                <div class="how-it-works__step">
                                    <div class="how-it-works__number">{index + 1}</div>
                                    <h3>{title}</h3>
                                    <p>{description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}

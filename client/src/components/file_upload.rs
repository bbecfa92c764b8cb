//! CSV upload card for the scenarios and training-resources datasets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on the home page. A successful upload reports its `UploadKind`
//! through `on_uploaded` so the page can unlock the assessment.

use leptos::prelude::*;

use crate::net::types::UploadKind;
use crate::state::request::RequestState;
use crate::util::files::FileSelection;
use crate::util::form::StatusTone;

const INVALID_FILE_MESSAGE: &str = "Please select a valid CSV file";
const MISSING_FILE_MESSAGE: &str = "Please select a file first";

#[component]
pub fn FileUpload(#[prop(into)] on_uploaded: Callback<UploadKind>) -> impl IntoView {
    let kind = RwSignal::new(UploadKind::default());
    let selection = FileSelection::new();
    let status = RwSignal::new(String::new());
    let request = RwSignal::new(RequestState::default());

    let on_file_change = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::Event| {
                use wasm_bindgen::JsCast;

                let Some(input) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                else {
                    return;
                };
                selection.replace_from_input(&input);
                let first_is_csv = selection.metas_untracked().first().is_some_and(|m| m.is_csv());
                if first_is_csv {
                    status.set(String::new());
                } else {
                    selection.clear();
                    status.set(INVALID_FILE_MESSAGE.to_owned());
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::Event| {}
        }
    };

    let on_upload = move |_| {
        if selection.is_empty() {
            status.set(MISSING_FILE_MESSAGE.to_owned());
            return;
        }
        if !request.try_update(RequestState::begin).unwrap_or(false) {
            return;
        }
        let upload_kind = kind.get_untracked();

        leptos::task::spawn_local(async move {
            match crate::net::api::upload_csv(upload_kind, selection).await {
                Ok(resp) => {
                    request.update(RequestState::succeed);
                    status.set(format!("Success: {}", resp.message));
                    selection.clear();
                    on_uploaded.run(upload_kind);
                }
                Err(e) => {
                    let message = e.to_string();
                    request.update(|r| r.fail(message.clone()));
                    status.set(format!("Error: {message}"));
                }
            }
        });
    };

    let button_label = move || {
        if request.get().loading {
            "Uploading...".to_owned()
        } else {
            match kind.get() {
                UploadKind::Scenarios => "Upload Scenarios".to_owned(),
                UploadKind::TrainingResources => "Upload Training Resources".to_owned(),
            }
        }
    };

    view! {
        <div class="card file-upload">
            <h3 class="card__title">"Upload CSV Data"</h3>
            <p class="card__description">"Upload scenario data or training resources from CSV files"</p>

            <div class="file-upload__kinds">
                {UploadKind::ALL
                    .into_iter()
                    .map(|option| {
                        let label = match option {
                            UploadKind::Scenarios => "Scenarios",
                            UploadKind::TrainingResources => "Training Resources",
                        };
                        view! {
                            <button
                                class=move || {
                                    if kind.get() == option {
                                        "file-upload__kind file-upload__kind--active"
                                    } else {
                                        "file-upload__kind"
                                    }
                                }
                                on:click=move |_| kind.set(option)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <input
                class="file-upload__input"
                type="file"
                accept=".csv"
                disabled=move || request.get().loading
                on:change=on_file_change
            />
            {move || {
                selection
                    .metas()
                    .into_iter()
                    .next()
                    .map(|meta| {
                        view! {
                            <div class="file-upload__selected">
                                <span>{meta.name.clone()}</span>
                                <span class="badge">{meta.size_label()}</span>
                            </div>
                        }
                    })
            }}

            <button
                class="button button--primary"
                disabled=move || selection.metas().is_empty() || request.get().loading
                on:click=on_upload
            >
                {button_label}
            </button>

            <Show when=move || !status.get().is_empty()>
                <div class=move || StatusTone::classify(&status.get()).class()>{move || status.get()}</div>
            </Show>
        </div>
    }
}

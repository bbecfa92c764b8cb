//! App-level backend connectivity banner and error alert.

use leptos::prelude::*;

use crate::state::connection::{ConnectionState, ConnectionStatus};

#[component]
pub fn ConnectionBanner() -> impl IntoView {
    let connection = expect_context::<RwSignal<ConnectionState>>();

    let banner_class = move || match connection.get().status {
        ConnectionStatus::Disconnected => "connection-banner connection-banner--failed",
        _ => "connection-banner connection-banner--checking",
    };

    view! {
        {move || {
            connection
                .get()
                .banner_label()
                .map(|label| view! { <div class=banner_class role="status">{label}</div> })
        }}
        {move || {
            connection
                .get()
                .error
                .map(|message| {
                    view! {
                        <div class="alert alert--error" role="alert">
                            <span>{message}</span>
                            <button
                                class="alert__dismiss"
                                on:click=move |_| connection.update(ConnectionState::clear_error)
                            >
                                "Dismiss"
                            </button>
                        </div>
                    }
                })
        }}
    }
}

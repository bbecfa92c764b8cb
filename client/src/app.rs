//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::connection_banner::ConnectionBanner;
use crate::pages::{home::HomePage, results::ResultsPage, simulator::SimulatorPage};
use crate::state::connection::ConnectionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the backend connection state and checks backend health once on
/// mount; every page reads it from context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let connection = RwSignal::new(ConnectionState::default());
    provide_context(connection);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match crate::net::api::health_check().await {
                Ok(_) => connection.update(ConnectionState::mark_connected),
                Err(_) => connection.update(ConnectionState::mark_failed),
            }
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/readiness-simulator.css"/>
        <Title text="Industry-Readiness Combat Simulator"/>

        <ConnectionBanner/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("simulator") view=SimulatorPage/>
                <Route path=(StaticSegment("results"), ParamSegment("id")) view=ResultsPage/>
            </Routes>
        </Router>
    }
}

use client::auth::{now_ms, session};
use client::ApiClient;
use dioxus::prelude::*;
use shared_types::SessionStatus;
use shared_ui::ToastProvider;

mod auth;
mod routes;
mod session_listener;

use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let api = use_context_provider(|| ApiClient::from_config(client::config::load()));
    let mut auth = use_context_provider(AuthState::new);

    // Session status starts as Loading; the stored token is read once after
    // the first render so guards show a spinner instead of redirecting.
    use_effect(move || {
        let restored = session::restore(api.token_store().as_ref(), now_ms());
        match &restored {
            Some(s) => tracing::info!(username = %s.username, "Restored session"),
            None => tracing::debug!("No stored session"),
        }
        auth.status.set(SessionStatus::from_session(restored));
    });

    rsx! {
        document::Title { "Employee Console" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ToastProvider {
            Router::<Route> {}
        }
    }
}

use client::ApiEvent;
use dioxus::prelude::*;
use shared_ui::{use_toast, ToastOptions};
use tokio::sync::broadcast::error::RecvError;

use crate::auth::{use_api, use_auth};
use crate::routes::Route;

/// Headless component that ends the session when the API rejects the token.
///
/// The client has already cleared the stored token by the time the event
/// arrives; this clears the in-memory session and sends the user to login.
/// Mount once inside `AppLayout` so it runs on every authenticated page.
#[component]
pub fn SessionListener() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let toast = use_toast();

    use_coroutine(move |_: UnboundedReceiver<()>| {
        let mut events = api.subscribe();
        async move {
            loop {
                match events.recv().await {
                    Ok(ApiEvent::Unauthorized) => {
                        if !auth.is_authenticated() {
                            continue;
                        }
                        tracing::info!("Session expired, returning to login");
                        auth.clear_auth();
                        toast.error(
                            "Session expired. Please sign in again.".to_string(),
                            ToastOptions::new(),
                        );
                        navigator().replace(Route::Login {});
                    }
                    // Missed events still mean the session is gone; the
                    // next one will arrive normally.
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Session listener lagged");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        }
    });

    // Headless, renders nothing
    rsx! {}
}

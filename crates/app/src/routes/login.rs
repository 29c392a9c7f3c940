use crate::auth::{use_api, use_auth};
use crate::routes::Route;
use client::auth::session::{login_failure_message, sign_in};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdUsers;
use dioxus_free_icons::Icon;
use shared_types::LoginRequest;
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Form, Input, ToastOptions,
};

/// Username/password sign-in.
#[component]
pub fn Login() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let toast = use_toast();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    // Already signed in: nothing to do here.
    use_effect(move || {
        if auth.is_authenticated() {
            navigator().replace(Route::Dashboard {});
        }
    });

    let handle_submit = move |_: FormEvent| {
        if loading() {
            return;
        }
        let api = api.clone();
        let request = LoginRequest {
            username: username.peek().trim().to_string(),
            password: password.peek().clone(),
        };
        spawn(async move {
            loading.set(true);
            match sign_in(&api, request).await {
                Ok(session) => {
                    auth.set_session(session);
                    toast.success("Login successful".to_string(), ToastOptions::new());
                    navigator().replace(Route::Dashboard {});
                }
                Err(err) => {
                    tracing::info!(error = %err, "Sign-in failed");
                    toast.error(login_failure_message(&err), ToastOptions::new());
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }
        document::Title { "Sign In | Employee Console" }

        div { class: "login-page",
            Card { class: "login-card",
                CardHeader {
                    div { class: "login-brand",
                        Icon::<LdUsers> { icon: LdUsers, width: 32, height: 32 }
                    }
                    CardTitle { "Employee Console" }
                    CardDescription { "Sign in to manage your organization" }
                }
                CardContent {
                    Form { onsubmit: handle_submit,
                        Input {
                            id: "username",
                            label: "Username",
                            placeholder: "Enter your username",
                            value: username(),
                            disabled: loading(),
                            on_input: move |evt: FormEvent| username.set(evt.value()),
                        }
                        Input {
                            id: "password",
                            label: "Password",
                            input_type: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            disabled: loading(),
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            loading: loading(),
                            disabled: loading(),
                            class: "login-submit",
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }
            }
        }
    }
}

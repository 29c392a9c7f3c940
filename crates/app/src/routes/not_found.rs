use crate::routes::Route;
use dioxus::prelude::*;

/// 404 page for any unmatched path.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }
        document::Title { "Not Found | Employee Console" }

        div { class: "not-found",
            h1 { class: "not-found-code", "404" }
            p { class: "not-found-message", "Page not found" }
            p { class: "not-found-path", "{path}" }
            Link { to: Route::Dashboard {}, class: "not-found-link",
                "Back to Dashboard"
            }
        }
    }
}

use dioxus::prelude::*;

/// A native select for forms and filters.
///
/// Children should be `option { value: "...", "Label" }` elements.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    #[props(default)] onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)] label: String,
    #[props(default)] id: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] required: bool,
    #[props(default)] error: Option<String>,
    children: Element,
) -> Element {
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", r#for: "{id}",
                    "{label}"
                    if required {
                        span { class: "form-select-required", " *" }
                    }
                }
            }
            select {
                id: "{id}",
                class: "form-select",
                value: value,
                disabled: disabled,
                "aria-invalid": if invalid { "true" } else { "false" },
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
            if let Some(message) = error {
                p { class: "form-select-error", role: "alert", "{message}" }
            }
        }
    }
}

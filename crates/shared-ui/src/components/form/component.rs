use dioxus::prelude::*;

use dioxus_primitives::merge_attributes;

/// Form wrapper that prevents the browser's default submission.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = merge_attributes(vec![vec![Attribute::new("class", "form", None, false)], attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            novalidate: true,
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// Two-column grid for form fields, collapsing to one column on narrow screens.
#[component]
pub fn FormGrid(children: Element) -> Element {
    rsx! {
        div { class: "form-grid", {children} }
    }
}

/// Right-aligned row of form buttons.
#[component]
pub fn FormActions(children: Element) -> Element {
    rsx! {
        div { class: "form-actions", {children} }
    }
}

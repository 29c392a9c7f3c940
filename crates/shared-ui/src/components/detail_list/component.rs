use dioxus::prelude::*;

/// A container for label/value rows in a detail view.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        dl { class: "detail-list", {children} }
    }
}

/// A single label/value row inside a `DetailList`.
///
/// Pass `value` for plain text, or children for rich content such as badges.
#[component]
pub fn DetailItem(
    label: &'static str,
    #[props(default)] value: String,
    children: Element,
) -> Element {
    let has_children = children != Ok(VNode::placeholder());

    rsx! {
        div { class: "detail-item",
            dt { class: "detail-item-label", "{label}" }
            dd { class: "detail-item-value",
                if has_children {
                    {children}
                } else {
                    "{value}"
                }
            }
        }
    }
}

/// Muted footer line for identifiers.
#[component]
pub fn DetailFooter(children: Element) -> Element {
    rsx! {
        div { class: "detail-footer", {children} }
    }
}

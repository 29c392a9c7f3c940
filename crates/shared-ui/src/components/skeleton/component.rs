use dioxus::prelude::*;

use dioxus_primitives::merge_attributes;

/// Loading placeholder with an animated pulse.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let merged = merge_attributes(vec![vec![Attribute::new("class", "skeleton", None, false)], attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..merged }
    }
}

/// `rows` stacked skeleton lines, used while a table loads.
#[component]
pub fn SkeletonRows(#[props(default = 5)] rows: usize) -> Element {
    rsx! {
        div { class: "skeleton-rows", "aria-busy": "true",
            for i in 0..rows {
                Skeleton { key: "{i}" }
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdSearch, LdX};
use dioxus_free_icons::Icon;

/// Search box that reports every keystroke, with a clear button once
/// something has been typed.
#[component]
pub fn SearchBar(
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "Search...".to_string())] placeholder: String,
    children: Element,
) -> Element {
    let has_value = !value.is_empty();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar",
            div { class: "search-field",
                span { class: "search-icon",
                    Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                }
                input {
                    class: "search-input",
                    r#type: "search",
                    value: value,
                    placeholder: placeholder,
                    "aria-label": "Search",
                    oninput: move |evt: FormEvent| on_input.call(evt.value()),
                }
                if has_value {
                    button {
                        class: "search-clear",
                        r#type: "button",
                        "aria-label": "Clear search",
                        onclick: move |_| on_input.call(String::new()),
                        Icon::<LdX> { icon: LdX, width: 14, height: 14 }
                    }
                }
            }
            {children}
        }
    }
}

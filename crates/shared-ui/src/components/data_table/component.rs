use dioxus::prelude::*;

/// Scrollable table wrapper with co-located styles.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table { {children} }
        }
    }
}

/// Table header section, wraps `th` elements in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

/// Column header cell. With `onclick` set it becomes a sort control and
/// shows `indicator` (an arrow) next to the label when present.
#[component]
pub fn DataTableColumn(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(default)] indicator: Option<String>,
    children: Element,
) -> Element {
    let sortable = onclick.is_some();
    let arrow = indicator.clone().unwrap_or_default();
    let aria_sort = match indicator.as_deref() {
        Some("↑") => "ascending",
        Some("↓") => "descending",
        _ => "none",
    };

    rsx! {
        th {
            class: if sortable { "data-table-column sortable" } else { "data-table-column" },
            "aria-sort": aria_sort,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
            if !arrow.is_empty() {
                span { class: "sort-indicator", "{arrow}" }
            }
        }
    }
}

/// Table row, clickable when `onclick` is set.
#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let has_click = onclick.is_some();
    rsx! {
        tr {
            class: if has_click { "data-table-row clickable" } else { "data-table-row" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// Right-aligned cell for row actions. Clicks inside it do not reach the row.
#[component]
pub fn DataTableActions(children: Element) -> Element {
    rsx! {
        td {
            class: "data-table-actions",
            onclick: move |evt: MouseEvent| evt.stop_propagation(),
            {children}
        }
    }
}

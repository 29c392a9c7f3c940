use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdPencil, LdPlus, LdTrash2};
use dioxus_free_icons::Icon;
use shared_types::{Employee, Role};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, DataTable, DataTableActions,
    DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, PageActions,
    PageHeader, PageSubtitle, PageTitle, SearchBar, SkeletonRows,
};
use std::collections::HashSet;

use client::list_view::{EmployeeListView, SortField};
use client::EmployeeApi;

use super::{delete_with_feedback, report_failure, ConfirmDelete};
use crate::auth::{use_api, use_auth};
use crate::routes::Route;

#[component]
pub fn EmployeeListPage() -> Element {
    let api = use_api();
    let auth = use_auth();
    let toast = use_toast();
    let is_admin = auth.has_any_role(&[Role::Admin]);

    let mut view = use_signal(EmployeeListView::default);
    let mut loading = use_signal(|| true);
    // Ids with a delete request outstanding.
    let mut deleting = use_signal(HashSet::<i64>::new);
    let mut pending_delete = use_signal(|| Option::<Employee>::None);

    let fetch_api = api.clone();
    use_future(move || {
        let api = fetch_api.clone();
        async move {
            match api.list_employees().await {
                Ok(all) => view.write().set_all(all),
                Err(err) => report_failure(toast, &err, "Failed to load employees"),
            }
            loading.set(false);
        }
    });

    let confirm_delete = move |_: ()| {
        let Some(employee) = pending_delete.take() else {
            return;
        };
        let id = employee.id;
        if !deleting.write().insert(id) {
            return;
        }
        let api = api.clone();
        spawn(async move {
            if delete_with_feedback(&api, toast, id).await {
                view.write().remove(id);
            }
            deleting.write().remove(&id);
        });
    };

    let rows = view.read().rows();
    let shown = rows.len();
    let total = view.read().all().len();
    let search = view.read().search().to_string();
    let sort = view.read().sort();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./employees.css") }

        div { class: "employees-page",
            PageHeader {
                div {
                    PageTitle { "Employees" }
                    PageSubtitle { "Showing {shown} of {total}" }
                }
                if is_admin {
                    PageActions {
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| {
                                navigator().push(Route::EmployeeCreate {});
                            },
                            Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                            "Add Employee"
                        }
                    }
                }
            }

            SearchBar {
                value: search,
                placeholder: "Search by name, email, or department...",
                on_input: move |term: String| view.write().set_search(term),
            }

            if loading() {
                Card {
                    CardContent { SkeletonRows { rows: 5 } }
                }
            } else if rows.is_empty() {
                Card {
                    CardContent {
                        p { class: "employees-empty", "No employees found." }
                    }
                }
            } else {
                DataTable {
                    DataTableHeader {
                        for field in SortField::ALL {
                            DataTableColumn {
                                key: "{field.label()}",
                                indicator: sort.indicator(field).map(str::to_string),
                                onclick: move |_| view.write().toggle_sort(field),
                                "{field.label()}"
                            }
                        }
                        DataTableColumn { "Actions" }
                    }
                    DataTableBody {
                        for employee in rows.iter().cloned() {
                            EmployeeRow {
                                key: "{employee.id}",
                                deleting: deleting.read().contains(&employee.id),
                                is_admin,
                                on_delete: move |e: Employee| pending_delete.set(Some(e)),
                                employee,
                            }
                        }
                    }
                }
            }

            ConfirmDelete {
                name: pending_delete.read().as_ref().map(|e| e.name.clone()),
                on_confirm: confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}

#[component]
fn EmployeeRow(
    employee: Employee,
    deleting: bool,
    is_admin: bool,
    on_delete: EventHandler<Employee>,
) -> Element {
    let id = employee.id;
    let target = employee.clone();

    rsx! {
        DataTableRow {
            onclick: move |_| {
                navigator().push(Route::EmployeeDetail { id });
            },
            DataTableCell { span { class: "employees-name", "{employee.name}" } }
            DataTableCell { "{employee.department}" }
            DataTableCell { "{employee.email}" }
            DataTableCell { "{employee.phone}" }
            DataTableCell { "{employee.reporting_manager}" }
            DataTableActions {
                Button {
                    variant: ButtonVariant::Ghost,
                    title: "View",
                    onclick: move |_| {
                        navigator().push(Route::EmployeeDetail { id });
                    },
                    Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
                }
                if is_admin {
                    Button {
                        variant: ButtonVariant::Ghost,
                        title: "Edit",
                        onclick: move |_| {
                            navigator().push(Route::EmployeeEdit { id });
                        },
                        Icon::<LdPencil> { icon: LdPencil, width: 16, height: 16 }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        title: "Delete",
                        class: "employees-delete",
                        loading: deleting,
                        disabled: deleting,
                        onclick: move |_| on_delete.call(target.clone()),
                        Icon::<LdTrash2> { icon: LdTrash2, width: 16, height: 16 }
                    }
                }
            }
        }
    }
}

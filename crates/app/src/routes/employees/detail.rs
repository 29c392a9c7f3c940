use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdPencil, LdTrash2};
use dioxus_free_icons::Icon;
use shared_types::{Employee, Role};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader,
    CardTitle, DetailFooter, DetailItem, DetailList, PageActions, PageHeader, PageTitle,
    SkeletonRows,
};

use client::EmployeeApi;

use super::{delete_with_feedback, report_failure, ConfirmDelete};
use crate::auth::{use_api, use_auth};
use crate::routes::Route;

/// One employee's full record.
#[component]
pub fn EmployeeDetailPage(id: i64) -> Element {
    let api = use_api();
    let auth = use_auth();
    let toast = use_toast();
    let is_admin = auth.has_any_role(&[Role::Admin]);

    let mut employee = use_signal(|| Option::<Employee>::None);
    let mut confirm_open = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    let fetch_api = api.clone();
    use_future(move || {
        let api = fetch_api.clone();
        async move {
            match api.get_employee(id).await {
                Ok(found) => employee.set(Some(found)),
                // The session listener takes over on a 401.
                Err(err) if err.is_unauthorized() => {}
                Err(err) => {
                    report_failure(toast, &err, "Failed to load employee details");
                    navigator().replace(Route::EmployeeList {});
                }
            }
        }
    });

    let confirm_delete = move |_: ()| {
        confirm_open.set(false);
        if deleting() {
            return;
        }
        deleting.set(true);
        let api = api.clone();
        spawn(async move {
            if delete_with_feedback(&api, toast, id).await {
                navigator().replace(Route::EmployeeList {});
            }
            deleting.set(false);
        });
    };

    let stylesheet = rsx! {
        document::Link { rel: "stylesheet", href: asset!("./employees.css") }
    };

    let Some(record) = employee() else {
        return rsx! {
            {stylesheet}
            DetailLoading {}
        };
    };

    rsx! {
        {stylesheet}

        div { class: "employees-page",
            PageHeader {
                div { class: "employees-detail-title",
                    PageTitle { "{record.name}" }
                    Badge { variant: BadgeVariant::Secondary, "{record.department}" }
                }
                PageActions {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            navigator().push(Route::EmployeeList {});
                        },
                        Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
                        "Back"
                    }
                    if is_admin {
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| {
                                navigator().push(Route::EmployeeEdit { id });
                            },
                            Icon::<LdPencil> { icon: LdPencil, width: 16, height: 16 }
                            "Edit"
                        }
                        Button {
                            variant: ButtonVariant::Destructive,
                            loading: deleting(),
                            disabled: deleting(),
                            onclick: move |_| confirm_open.set(true),
                            Icon::<LdTrash2> { icon: LdTrash2, width: 16, height: 16 }
                            "Delete"
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Employee Information" }
                }
                CardContent {
                    DetailList {
                        DetailItem { label: "Name", value: record.name.clone() }
                        DetailItem { label: "Department", value: record.department.clone() }
                        DetailItem { label: "Email",
                            a { href: "mailto:{record.email}", "{record.email}" }
                        }
                        DetailItem { label: "Phone", value: record.phone.clone() }
                        DetailItem { label: "Reporting Manager", value: record.reporting_manager.clone() }
                    }
                    DetailFooter { "Employee ID: {record.id}" }
                }
            }

            ConfirmDelete {
                name: confirm_open().then(|| record.name.clone()),
                on_confirm: confirm_delete,
                on_cancel: move |_| confirm_open.set(false),
            }
        }
    }
}

#[component]
fn DetailLoading() -> Element {
    rsx! {
        div { class: "employees-page",
            Card {
                CardContent { SkeletonRows { rows: 5 } }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_state_keeps_page_layout() {
        let html = dioxus_ssr::render_element(rsx! { DetailLoading {} });
        assert!(html.contains(r#"class="employees-page""#), "{html}");
        assert!(html.contains("skeleton-rows"), "{html}");
    }
}

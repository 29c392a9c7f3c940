use crate::auth::{use_api, use_auth};
use crate::routes::Route;
use client::list_view::department_headcount;
use client::EmployeeApi;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdUser, LdUserPlus, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::Role;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    PageHeader, PageSubtitle, PageTitle, Skeleton,
};

/// Number of skeleton bars shown while the overview loads.
const SKELETON_COUNT: usize = 4;

/// Share of `total` as a percentage, 0 when there is nothing to divide.
fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64 * 100.0).min(100.0)
}

/// Landing page: role-aware shortcuts and, for staff, a headcount overview.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let username = auth.session().map(|s| s.username).unwrap_or_default();
    let is_staff = auth.has_any_role(&[Role::Admin, Role::Hr]);
    let is_admin = auth.has_any_role(&[Role::Admin]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            PageHeader {
                div {
                    PageTitle { "Welcome back, {username}!" }
                    PageSubtitle { "Here is what you can do today." }
                }
            }

            div { class: "dashboard-cards",
                if is_staff {
                    ShortcutCard {
                        title: "Employee Directory",
                        description: "Browse, search and sort everyone in the organization.",
                        action: "View Employees",
                        to: Route::EmployeeList {},
                        Icon::<LdUsers> { icon: LdUsers, width: 24, height: 24 }
                    }
                }
                if is_admin {
                    ShortcutCard {
                        title: "Add New Employee",
                        description: "Create a record for a new hire.",
                        action: "Add Employee",
                        to: Route::EmployeeCreate {},
                        Icon::<LdUserPlus> { icon: LdUserPlus, width: 24, height: 24 }
                    }
                }
                ShortcutCard {
                    title: "My Profile",
                    description: "See your username and roles.",
                    action: "View Profile",
                    to: Route::Profile {},
                    Icon::<LdUser> { icon: LdUser, width: 24, height: 24 }
                }
            }

            if is_staff {
                DepartmentOverview {}
            }
        }
    }
}

#[component]
fn ShortcutCard(
    title: &'static str,
    description: &'static str,
    action: &'static str,
    to: Route,
    children: Element,
) -> Element {
    rsx! {
        Card { class: "dashboard-card",
            CardHeader {
                div { class: "dashboard-card-icon", {children} }
                CardTitle { "{title}" }
                CardDescription { "{description}" }
            }
            CardFooter {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        navigator().push(to.clone());
                    },
                    "{action}"
                }
            }
        }
    }
}

/// Headcount per department, computed from the live employee list.
#[component]
fn DepartmentOverview() -> Element {
    let api = use_api();
    let mut employees = use_resource(move || {
        let api = api.clone();
        async move { api.list_employees().await }
    });

    rsx! {
        Card { class: "dashboard-overview",
            CardHeader {
                CardTitle { "Department Overview" }
                CardDescription { "Current headcount by department" }
            }
            CardContent {
                match &*employees.read() {
                    None => rsx! {
                        for i in 0..SKELETON_COUNT {
                            Skeleton { key: "{i}", class: "dashboard-bar-skeleton" }
                        }
                    },
                    Some(Err(err)) => rsx! {
                        p { class: "dashboard-error-text", "{err.friendly_message()}" }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| employees.restart(),
                            "Retry"
                        }
                    },
                    Some(Ok(list)) if list.is_empty() => rsx! {
                        p { class: "dashboard-empty", "No employees yet." }
                    },
                    Some(Ok(list)) => {
                        let total = list.len();
                        let rows: Vec<(&str, usize, String)> = department_headcount(list)
                            .into_iter()
                            .map(|(dept, count)| {
                                (dept, count, format!("width: {:.0}%", percentage(count, total)))
                            })
                            .collect();
                        rsx! {
                            ul { class: "dashboard-departments",
                                for (dept, count, width) in rows {
                                    li { key: "{dept}", class: "dashboard-department",
                                        div { class: "dashboard-department-label",
                                            span { "{dept}" }
                                            span { class: "dashboard-department-count", "{count}" }
                                        }
                                        div { class: "dashboard-bar",
                                            div {
                                                class: "dashboard-bar-fill",
                                                style: "{width}",
                                            }
                                        }
                                    }
                                }
                            }
                            p { class: "dashboard-total", "{total} employees in total" }
                        }
                    }
                }
            }
        }
    }
}

pub mod dashboard;
pub mod employees;
pub mod login;
pub mod not_found;
pub mod profile;

use crate::auth::{logout, use_api, use_auth};
use crate::session_listener::SessionListener;
use client::auth::gate::{authorize, Access};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLayoutDashboard, LdLoader, LdLogOut, LdMenu, LdUser, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::Role;
use shared_ui::{
    Sidebar, SidebarFooter, SidebarHeader, SidebarInset, SidebarMenu, SidebarMenuItem,
    SidebarProvider, SidebarTrigger,
};

use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;
use profile::Profile;

const STAFF: &[Role] = &[Role::Admin, Role::Hr];
const ADMIN: &[Role] = &[Role::Admin];

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/employees")]
    EmployeeList {},
    #[route("/employees/new")]
    EmployeeCreate {},
    #[route("/employees/edit/:id")]
    EmployeeEdit { id: i64 },
    #[route("/employees/:id")]
    EmployeeDetail { id: i64 },
    #[route("/profile")]
    Profile {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Roles that may open this route. Empty means any signed-in user.
    /// Public routes never reach the guard.
    pub fn required_roles(&self) -> &'static [Role] {
        match self {
            Route::EmployeeList {} => STAFF,
            Route::EmployeeCreate {} | Route::EmployeeEdit { .. } => ADMIN,
            Route::Login {}
            | Route::Dashboard {}
            | Route::EmployeeDetail { .. }
            | Route::Profile {}
            | Route::NotFound { .. } => &[],
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login {} => "Sign In",
            Route::Dashboard {} => "Dashboard",
            Route::EmployeeList {} => "Employees",
            Route::EmployeeCreate {} => "Add Employee",
            Route::EmployeeEdit { .. } => "Edit Employee",
            Route::EmployeeDetail { .. } => "Employee Details",
            Route::Profile {} => "My Profile",
            Route::NotFound { .. } => "Not Found",
        }
    }

    fn is_employee_section(&self) -> bool {
        matches!(
            self,
            Route::EmployeeList {}
                | Route::EmployeeCreate {}
                | Route::EmployeeEdit { .. }
                | Route::EmployeeDetail { .. }
        )
    }
}

/// Runs the access gate for the current route before rendering anything
/// behind it.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let route: Route = use_route();

    let access = authorize(&auth.status.read(), route.required_roles());
    match access {
        Access::Allow => rsx! { Outlet::<Route> {} },
        Access::Pending => rsx! {
            div { class: "auth-guard-loading",
                Icon::<LdLoader> { icon: LdLoader, width: 28, height: 28, class: "spin" }
                p { "Loading..." }
            }
        },
        Access::RedirectToLogin => {
            tracing::debug!(route = %route, "No session, redirecting to login");
            navigator().replace(Route::Login {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        Access::RedirectToHome => {
            tracing::info!(route = %route, "Missing role for route, redirecting home");
            navigator().replace(Route::Dashboard {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
    }
}

/// Main app layout with sidebar and top bar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let api = use_api();
    let mut auth = use_auth();

    let title = route.title();
    let username = auth.session().map(|s| s.username).unwrap_or_default();
    let show_employees = auth.has_any_role(STAFF);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        document::Title { "{title} | Employee Console" }

        SidebarProvider { default_open: false,
            SessionListener {}
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 }
                        span { class: "sidebar-brand-name", "Employee Console" }
                    }
                }

                SidebarMenu {
                    SidebarMenuItem { active: matches!(route, Route::Dashboard {}),
                        Link { to: Route::Dashboard {},
                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                            "Dashboard"
                        }
                    }
                    if show_employees {
                        SidebarMenuItem { active: route.is_employee_section(),
                            Link { to: Route::EmployeeList {},
                                Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                                "Employees"
                            }
                        }
                    }
                    SidebarMenuItem { active: matches!(route, Route::Profile {}),
                        Link { to: Route::Profile {},
                            Icon::<LdUser> { icon: LdUser, width: 18, height: 18 }
                            "My Profile"
                        }
                    }
                }

                SidebarFooter {
                    button {
                        class: "sidebar-logout",
                        r#type: "button",
                        onclick: move |_| {
                            logout(&api, &mut auth);
                            navigator().replace(Route::Login {});
                        },
                        Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                        "Logout"
                    }
                }
            }

            SidebarInset {
                header { class: "app-topbar",
                    SidebarTrigger {
                        Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                    }
                    h1 { class: "app-topbar-title", "{title}" }
                    div { class: "app-topbar-user",
                        Icon::<LdUser> { icon: LdUser, width: 16, height: 16 }
                        span { "{username}" }
                    }
                }
                div { class: "app-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

// Thin wrappers so the router can hand route params to the page modules.

#[component]
fn EmployeeList() -> Element {
    rsx! { employees::list::EmployeeListPage {} }
}

#[component]
fn EmployeeCreate() -> Element {
    rsx! { employees::form::EmployeeFormPage { id: None } }
}

#[component]
fn EmployeeEdit(id: i64) -> Element {
    // Keyed so moving between records remounts the form with fresh state.
    rsx! { employees::form::EmployeeFormPage { key: "{id}", id: Some(id) } }
}

#[component]
fn EmployeeDetail(id: i64) -> Element {
    rsx! { employees::detail::EmployeeDetailPage { key: "{id}", id } }
}

use crate::auth::use_auth;
use dioxus::prelude::*;
use shared_types::Role;
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, DetailItem,
    DetailList, PageHeader, PageSubtitle, PageTitle,
};

fn role_variant(role: Role) -> BadgeVariant {
    match role {
        Role::Admin => BadgeVariant::Destructive,
        Role::Hr => BadgeVariant::Primary,
        Role::Employee => BadgeVariant::Secondary,
    }
}

#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let Some(session) = auth.session() else {
        return rsx! {};
    };

    rsx! {
        PageHeader {
            div {
                PageTitle { "My Profile" }
                PageSubtitle { "Your account details" }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Account Information" }
                CardDescription { "Taken from your current sign-in" }
            }
            CardContent {
                DetailList {
                    DetailItem { label: "Username", value: session.username.clone() }
                    DetailItem { label: "Roles",
                        div { class: "badge-row",
                            if session.roles.is_empty() {
                                span { "No roles assigned" }
                            }
                            for role in session.roles.iter().copied() {
                                Badge { key: "{role}", variant: role_variant(role), "{role}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

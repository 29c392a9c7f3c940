pub mod detail;
pub mod form;
pub mod list;

use client::{ApiClient, EmployeeApi};
use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{
    AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, ToastOptions, Toasts,
};

/// Toast a page-level failure. A 401 is left to the session listener, which
/// already tells the user their session ended.
pub(crate) fn report_failure(toast: Toasts, err: &AppError, message: &str) {
    if err.is_unauthorized() {
        return;
    }
    tracing::warn!(error = %err, "{message}");
    toast.error(message.to_string(), ToastOptions::new());
}

/// Delete one employee and report the outcome. Returns whether it is gone.
pub(crate) async fn delete_with_feedback(api: &ApiClient, toast: Toasts, id: i64) -> bool {
    match api.delete_employee(id).await {
        Ok(()) => {
            toast.success("Employee deleted successfully".to_string(), ToastOptions::new());
            true
        }
        Err(err) => {
            report_failure(toast, &err, "Failed to delete employee");
            false
        }
    }
}

/// Confirmation step before a delete. `name` is `None` while closed.
#[component]
pub(crate) fn ConfirmDelete(
    name: Option<String>,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let open = name.is_some();
    let name = name.unwrap_or_default();

    rsx! {
        AlertDialogRoot {
            open,
            on_open_change: move |is_open: bool| {
                if !is_open {
                    on_cancel.call(());
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "Delete employee?" }
                AlertDialogDescription {
                    "This permanently removes {name} from the directory. This cannot be undone."
                }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction {
                        on_click: move |_| on_confirm.call(()),
                        "Delete"
                    }
                }
            }
        }
    }
}

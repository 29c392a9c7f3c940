use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdArrowLeft;
use dioxus_free_icons::Icon;
use shared_types::{FormField, DEPARTMENTS};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, Form, FormActions, FormGrid, FormSelect,
    Input, PageActions, PageHeader, PageTitle, SkeletonRows, ToastOptions,
};

use client::form::{EmployeeForm, FormMode};
use client::EmployeeApi;

use super::report_failure;
use crate::auth::use_api;
use crate::routes::Route;

/// Create or edit an employee. `id` selects edit mode.
#[component]
pub fn EmployeeFormPage(id: Option<i64>) -> Element {
    let api = use_api();
    let toast = use_toast();
    let mode = FormMode::from_route(id);

    let mut form = use_signal(|| EmployeeForm::new(mode));
    let mut prefetching = use_signal(|| mode.is_edit());
    let mut in_flight = use_signal(|| false);

    let fetch_api = api.clone();
    use_future(move || {
        let api = fetch_api.clone();
        async move {
            let FormMode::Edit(id) = mode else {
                return;
            };
            match api.get_employee(id).await {
                Ok(employee) => {
                    form.write().load(&employee);
                    prefetching.set(false);
                }
                Err(err) if err.is_unauthorized() => {}
                Err(err) => {
                    report_failure(toast, &err, "Failed to load employee data");
                    navigator().replace(Route::EmployeeList {});
                }
            }
        }
    });

    let handle_submit = move |_: FormEvent| {
        if in_flight() {
            return;
        }
        // Invalid input stays on the page with inline errors.
        let Ok(submission) = form.write().prepare() else {
            return;
        };
        in_flight.set(true);
        let api = api.clone();
        spawn(async move {
            match submission.send(&api).await {
                Ok(saved) => {
                    tracing::info!(id = saved.id, "Employee saved");
                    toast.success(submission.mode.success_message().to_string(), ToastOptions::new());
                    navigator().push(Route::EmployeeList {});
                }
                Err(err) => report_failure(toast, &err, submission.mode.failure_message()),
            }
            in_flight.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./employees.css") }

        div { class: "employees-page",
            PageHeader {
                PageTitle { "{mode.title()}" }
                PageActions {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            navigator().push(Route::EmployeeList {});
                        },
                        Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
                        "Back to list"
                    }
                }
            }

            Card {
                CardContent {
                    if prefetching() {
                        SkeletonRows { rows: 5 }
                    } else {
                        Form { onsubmit: handle_submit,
                            FormGrid {
                                TextField { form, field: FormField::Name, placeholder: "Full name" }
                                DepartmentField { form }
                                TextField {
                                    form,
                                    field: FormField::Email,
                                    input_type: "email",
                                    placeholder: "name@company.com",
                                }
                                TextField {
                                    form,
                                    field: FormField::Phone,
                                    input_type: "tel",
                                    placeholder: "555-0100",
                                }
                                TextField {
                                    form,
                                    field: FormField::ReportingManager,
                                    placeholder: "Manager's name",
                                }
                            }
                            FormActions {
                                Button {
                                    variant: ButtonVariant::Outline,
                                    disabled: in_flight(),
                                    onclick: move |_| {
                                        navigator().push(Route::EmployeeList {});
                                    },
                                    "Cancel"
                                }
                                Button {
                                    variant: ButtonVariant::Primary,
                                    button_type: "submit",
                                    loading: in_flight(),
                                    "{mode.submit_label()}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TextField(
    form: Signal<EmployeeForm>,
    field: FormField,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
) -> Element {
    let mut form = form;
    let value = form.read().value(field).to_string();
    let error = form.read().error(field).map(str::to_string);

    rsx! {
        Input {
            id: field.as_str().to_string(),
            label: field.label().to_string(),
            input_type,
            placeholder,
            required: true,
            value,
            error,
            on_input: move |evt: FormEvent| form.write().set_field(field, evt.value()),
        }
    }
}

#[component]
fn DepartmentField(form: Signal<EmployeeForm>) -> Element {
    let mut form = form;
    let field = FormField::Department;
    let value = form.read().value(field).to_string();
    let error = form.read().error(field).map(str::to_string);

    rsx! {
        FormSelect {
            id: field.as_str().to_string(),
            label: field.label().to_string(),
            required: true,
            value: value.clone(),
            error,
            onchange: move |evt: FormEvent| form.write().set_field(field, evt.value()),
            option { value: "", disabled: true, selected: value.is_empty(), "Select department" }
            for dept in DEPARTMENTS.iter().copied() {
                option { key: "{dept}", value: dept, selected: value == dept, "{dept}" }
            }
        }
    }
}

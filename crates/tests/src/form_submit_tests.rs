use client::form::{EmployeeForm, FormMode};
use client::EmployeeApi;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, FormField};

use crate::common::{self, employee};

fn fill(form: &mut EmployeeForm, name: &str) {
    form.set_field(FormField::Name, name);
    form.set_field(FormField::Department, "Engineering");
    form.set_field(FormField::Email, "new@corp.io");
    form.set_field(FormField::Phone, "555-0199");
    form.set_field(FormField::ReportingManager, "Dana");
}

#[tokio::test]
async fn test_empty_name_sends_nothing() {
    let mock = common::mock_api(vec![]).await;
    let api = mock.signed_in_client();
    let mut form = EmployeeForm::new(FormMode::Create);
    fill(&mut form, "");

    let err = form.submit(&api).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(form.error(FormField::Name), Some("Name is required"));
    assert_eq!(mock.state.requests(), 0);
}

#[tokio::test]
async fn test_bad_email_sends_nothing() {
    let mock = common::mock_api(vec![]).await;
    let api = mock.signed_in_client();
    let mut form = EmployeeForm::new(FormMode::Create);
    fill(&mut form, "Nia");
    form.set_field(FormField::Email, "not-an-email");

    assert!(form.submit(&api).await.is_err());
    assert_eq!(form.error(FormField::Email), Some("Email is invalid"));
    assert_eq!(mock.state.requests(), 0);
}

#[tokio::test]
async fn test_create_form_posts() {
    let mock = common::mock_api(vec![]).await;
    let api = mock.signed_in_client();
    let mut form = EmployeeForm::new(FormMode::Create);
    fill(&mut form, "Nia");

    let created = form.submit(&api).await.unwrap();
    assert_eq!(created.name, "Nia");
    assert_eq!(mock.state.employees(), vec![created]);
}

#[tokio::test]
async fn test_edit_form_loads_then_puts() {
    let mock = common::mock_api(vec![employee(5, "Bob", "Sales")]).await;
    let api = mock.signed_in_client();

    let mut form = EmployeeForm::new(FormMode::from_route(Some(5)));
    form.load(&api.get_employee(5).await.unwrap());
    assert_eq!(form.value(FormField::Department), "Sales");

    form.set_field(FormField::Phone, "555-7777");
    let updated = form.submit(&api).await.unwrap();
    assert_eq!(updated.id, 5);
    assert_eq!(mock.state.employees()[0].phone, "555-7777");
    assert_eq!(mock.state.employees().len(), 1);
}

use client::EmployeeApi;
use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use crate::common::{self, employee, form_data};

#[tokio::test]
async fn test_create_assigns_id() {
    let mock = common::mock_api(vec![employee(1, "Bob", "Sales")]).await;

    let created = mock
        .signed_in_client()
        .create_employee(&form_data("Eve"))
        .await
        .unwrap();
    assert_eq!(created.id, 2);
    assert_eq!(created.email, "eve@corp.io");
    assert_eq!(mock.state.employees().len(), 2);
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let mock = common::mock_api(vec![employee(4, "Bob", "Sales")]).await;
    let mut data = form_data("Robert");
    data.department = "Marketing".to_string();

    let updated = mock.signed_in_client().update_employee(4, &data).await.unwrap();
    assert_eq!(updated.id, 4);
    assert_eq!(updated.name, "Robert");
    assert_eq!(mock.state.employees()[0].department, "Marketing");
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let mock = common::mock_api(vec![]).await;
    let err = mock
        .signed_in_client()
        .update_employee(3, &form_data("Ghost"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[tokio::test]
async fn test_delete_removes_record() {
    let mock = common::mock_api(vec![
        employee(1, "Bob", "Sales"),
        employee(2, "Amy", "Engineering"),
    ])
    .await;

    mock.signed_in_client().delete_employee(2).await.unwrap();
    let remaining: Vec<i64> = mock.state.employees().iter().map(|e| e.id).collect();
    assert_eq!(remaining, vec![1]);
}

#[tokio::test]
async fn test_second_delete_is_not_found() {
    let mock = common::mock_api(vec![employee(1, "Bob", "Sales")]).await;
    let api = mock.signed_in_client();

    api.delete_employee(1).await.unwrap();
    let err = api.delete_employee(1).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

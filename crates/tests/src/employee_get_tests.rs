use client::EmployeeApi;
use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use crate::common::{self, employee, Failure};

#[tokio::test]
async fn test_list_returns_records_in_server_order() {
    let mock = common::mock_api(vec![
        employee(1, "Bob", "Sales"),
        employee(2, "Amy", "Engineering"),
    ])
    .await;

    let employees = mock.signed_in_client().list_employees().await.unwrap();
    let ids: Vec<i64> = employees.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(employees[1], employee(2, "Amy", "Engineering"));
}

#[tokio::test]
async fn test_get_by_id() {
    let mock = common::mock_api(vec![employee(7, "Carl", "Finance")]).await;
    let found = mock.signed_in_client().get_employee(7).await.unwrap();
    assert_eq!(found.name, "Carl");
    assert_eq!(found.reporting_manager, "Dana");
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let mock = common::mock_api(vec![]).await;
    let api = mock.signed_in_client();

    let err = api.get_employee(99).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    // Only a 401 ends the session.
    assert!(api.token_store().get().is_some());
}

#[tokio::test]
async fn test_server_error_is_request_failed() {
    let mock = common::mock_api(vec![employee(1, "Bob", "Sales")]).await;
    mock.state.fail_with(Failure::ServerError);

    let err = mock.signed_in_client().list_employees().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::RequestFailed);
    assert!(err.message.contains("500"), "unexpected message: {}", err.message);
}

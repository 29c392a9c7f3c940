use client::{ApiEvent, EmployeeApi};
use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use crate::common::{self, employee, Failure};

#[tokio::test]
async fn test_missing_token_is_rejected() {
    let mock = common::mock_api(vec![employee(1, "Bob", "Sales")]).await;
    let api = mock.client();
    let mut events = api.subscribe();

    let err = api.list_employees().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(events.recv().await.unwrap(), ApiEvent::Unauthorized);
}

#[tokio::test]
async fn test_rejected_token_is_cleared_and_announced() {
    let mock = common::mock_api(vec![employee(1, "Bob", "Sales")]).await;
    let api = mock.signed_in_client();
    let mut events = api.subscribe();
    mock.state.fail_with(Failure::Unauthorized);

    let err = api.get_employee(1).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(api.token_store().get(), None);
    assert_eq!(events.recv().await.unwrap(), ApiEvent::Unauthorized);
}

#[tokio::test]
async fn test_every_clone_hears_the_event() {
    let mock = common::mock_api(vec![]).await;
    let api = mock.signed_in_client();
    let shell_side = api.clone();
    let mut events = shell_side.subscribe();
    mock.state.fail_with(Failure::Unauthorized);

    let _ = api.delete_employee(1).await;
    assert_eq!(events.recv().await.unwrap(), ApiEvent::Unauthorized);
    assert_eq!(shell_side.token_store().get(), None);
}

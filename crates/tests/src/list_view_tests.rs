use client::list_view::{EmployeeListView, SortField};
use client::EmployeeApi;
use pretty_assertions::assert_eq;

use crate::common::{self, employee};

fn names(view: &EmployeeListView) -> Vec<String> {
    view.rows().into_iter().map(|e| e.name).collect()
}

#[tokio::test]
async fn test_fetched_list_sorts_by_name() {
    let mock = common::mock_api(vec![
        employee(1, "Bob", "Sales"),
        employee(2, "Amy", "Engineering"),
    ])
    .await;
    let api = mock.signed_in_client();

    let view = EmployeeListView::new(api.list_employees().await.unwrap());
    assert_eq!(names(&view), vec!["Amy", "Bob"]);
}

#[tokio::test]
async fn test_delete_drops_row_without_refetch() {
    let mock = common::mock_api(vec![
        employee(1, "Bob", "Sales"),
        employee(2, "Amy", "Engineering"),
    ])
    .await;
    let api = mock.signed_in_client();
    let mut view = EmployeeListView::new(api.list_employees().await.unwrap());

    api.delete_employee(2).await.unwrap();
    view.remove(2);

    assert!(view.rows().iter().all(|e| e.id != 2));
    // One list call and one delete; no second list.
    assert_eq!(mock.state.requests(), 2);
}

#[tokio::test]
async fn test_search_then_sort_descending() {
    let mock = common::mock_api(vec![
        employee(1, "Bob", "Sales"),
        employee(2, "Amy", "Engineering"),
        employee(3, "Zoe", "Engineering"),
    ])
    .await;
    let api = mock.signed_in_client();
    let mut view = EmployeeListView::new(api.list_employees().await.unwrap());

    view.set_search("engineering");
    view.toggle_sort(SortField::Name);
    assert_eq!(names(&view), vec!["Zoe", "Amy"]);
}

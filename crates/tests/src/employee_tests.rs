use pretty_assertions::assert_eq;
use shared_types::{CreateEmployeeRequest, Role};

use crate::common;

fn employee(email: &str, name: &str) -> CreateEmployeeRequest {
    CreateEmployeeRequest {
        email: email.to_string(),
        full_name: name.to_string(),
        password: "password".to_string(),
        joining_date: "2024-03-01".to_string(),
        department_id: "dep-1".to_string(),
        designation: "Engineer".to_string(),
        manager_user_id: String::new(),
    }
}

#[tokio::test]
async fn created_employee_appears_in_next_fetch() {
    let (base_url, _backend) = common::spawn_backend().await;
    let hr = common::client_for(&base_url, Role::Hr).await;

    hr.create_employee(&employee("dev@example.com", "Devon Dev"))
        .await
        .expect("create");

    let employees = hr.list_employees().await.expect("list");
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].full_name, "Devon Dev");
    assert_eq!(employees[0].email, "dev@example.com");
    assert_eq!(employees[0].department_id.as_deref(), Some("dep-1"));
    // empty manager field submits as-is and comes back absent
    assert_eq!(employees[0].manager_user_id, None);
}

#[tokio::test]
async fn deleted_employee_disappears_from_next_fetch() {
    let (base_url, _backend) = common::spawn_backend().await;
    let hr = common::client_for(&base_url, Role::Hr).await;

    hr.create_employee(&employee("a@example.com", "A"))
        .await
        .expect("create a");
    hr.create_employee(&employee("b@example.com", "B"))
        .await
        .expect("create b");

    let employees = hr.list_employees().await.expect("list");
    assert_eq!(employees.len(), 2);
    let doomed = employees[0].user_id.clone();

    hr.delete_employee(&doomed).await.expect("delete");

    let remaining = hr.list_employees().await.expect("list after delete");
    assert_eq!(remaining.len(), 1);
    assert!(remaining.iter().all(|e| e.user_id != doomed));
}

#[tokio::test]
async fn deleting_an_unknown_id_leaves_the_list_unchanged() {
    let (base_url, _backend) = common::spawn_backend().await;
    let hr = common::client_for(&base_url, Role::Hr).await;

    hr.create_employee(&employee("a@example.com", "A"))
        .await
        .expect("create");

    hr.delete_employee("no-such-user").await.expect("delete is permissive");

    let employees = hr.list_employees().await.expect("list");
    assert_eq!(employees.len(), 1);
}

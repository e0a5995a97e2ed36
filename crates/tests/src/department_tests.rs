use pretty_assertions::assert_eq;
use shared_types::{CreateDepartmentRequest, Role};

use crate::common;

#[tokio::test]
async fn created_department_appears_in_next_fetch() {
    let (base_url, _backend) = common::spawn_backend().await;
    let hr = common::client_for(&base_url, Role::Hr).await;

    hr.create_department(&CreateDepartmentRequest {
        name: "Engineering".into(),
        description: "Builds things".into(),
        manager_id: "mgr-7".into(),
    })
    .await
    .expect("create");

    let departments = hr.list_departments().await.expect("list");
    assert_eq!(departments.len(), 1);
    assert_eq!(departments[0].name, "Engineering");
    assert_eq!(departments[0].manager_id.as_deref(), Some("mgr-7"));
}

#[tokio::test]
async fn department_without_manager_round_trips_as_absent() {
    let (base_url, _backend) = common::spawn_backend().await;
    let hr = common::client_for(&base_url, Role::Hr).await;

    hr.create_department(&CreateDepartmentRequest {
        name: "Sales".into(),
        description: String::new(),
        manager_id: String::new(),
    })
    .await
    .expect("create");

    let departments = hr.list_departments().await.expect("list");
    assert_eq!(departments.len(), 1);
    assert_eq!(departments[0].manager_id, None);
}

#[tokio::test]
async fn departments_accumulate_across_creates() {
    let (base_url, _backend) = common::spawn_backend().await;
    let hr = common::client_for(&base_url, Role::Hr).await;

    for name in ["One", "Two", "Three"] {
        hr.create_department(&CreateDepartmentRequest {
            name: name.into(),
            description: String::new(),
            manager_id: String::new(),
        })
        .await
        .expect("create");
    }

    let departments = hr.list_departments().await.expect("list");
    let names: Vec<&str> = departments.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["One", "Two", "Three"]);
}

use pretty_assertions::assert_eq;
use shared_types::{CreateLeaveRequest, LeaveAction, Role};

use crate::common;

fn sick_leave() -> CreateLeaveRequest {
    CreateLeaveRequest {
        start_date: "2024-01-01".to_string(),
        end_date: "2024-01-03".to_string(),
        leave_type: "Sick".to_string(),
        reason: "flu".to_string(),
    }
}

#[tokio::test]
async fn submitted_leave_shows_up_pending_with_submitted_fields() {
    let (base_url, _backend) = common::spawn_backend().await;
    let employee = common::client_for(&base_url, Role::Employee).await;

    employee.submit_leave(&sick_leave()).await.expect("submit");

    let history = employee.list_leaves().await.expect("history");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].leave_type, "Sick");
    assert_eq!(history[0].start_date, "2024-01-01");
    assert_eq!(history[0].end_date, "2024-01-03");
    assert_eq!(history[0].reason, "flu");
    assert_eq!(history[0].status, "Pending");
}

#[tokio::test]
async fn history_is_scoped_to_the_caller() {
    let (base_url, _backend) = common::spawn_backend().await;
    let first = common::client_for(&base_url, Role::Employee).await;
    let second = common::client_for(&base_url, Role::Employee).await;

    first.submit_leave(&sick_leave()).await.expect("submit");

    assert_eq!(first.list_leaves().await.expect("first history").len(), 1);
    assert_eq!(second.list_leaves().await.expect("second history").len(), 0);
}

#[tokio::test]
async fn approving_removes_from_the_pending_filter() {
    let (base_url, _backend) = common::spawn_backend().await;
    let employee = common::client_for(&base_url, Role::Employee).await;
    let manager = common::client_for(&base_url, Role::Manager).await;

    employee.submit_leave(&sick_leave()).await.expect("submit");

    let pending = manager.list_pending_leaves().await.expect("pending");
    assert_eq!(pending.len(), 1);
    let id = pending[0].id.clone();

    manager
        .leave_action(&id, LeaveAction::Approve)
        .await
        .expect("approve");

    let pending = manager.list_pending_leaves().await.expect("pending after");
    assert_eq!(pending.len(), 0);

    let history = employee.list_leaves().await.expect("history");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status, "Approved");
}

#[tokio::test]
async fn repeating_an_action_does_not_duplicate_the_entry() {
    let (base_url, _backend) = common::spawn_backend().await;
    let employee = common::client_for(&base_url, Role::Employee).await;
    let manager = common::client_for(&base_url, Role::Manager).await;

    employee.submit_leave(&sick_leave()).await.expect("submit");
    let id = manager.list_pending_leaves().await.expect("pending")[0].id.clone();

    manager
        .leave_action(&id, LeaveAction::Approve)
        .await
        .expect("first approve");
    manager
        .leave_action(&id, LeaveAction::Approve)
        .await
        .expect("second approve");

    assert_eq!(manager.list_pending_leaves().await.expect("pending").len(), 0);
    assert_eq!(employee.list_leaves().await.expect("history").len(), 1);
}

#[tokio::test]
async fn rejection_is_reflected_in_history() {
    let (base_url, _backend) = common::spawn_backend().await;
    let employee = common::client_for(&base_url, Role::Employee).await;
    let manager = common::client_for(&base_url, Role::Manager).await;

    employee.submit_leave(&sick_leave()).await.expect("submit");
    let id = manager.list_pending_leaves().await.expect("pending")[0].id.clone();

    manager
        .leave_action(&id, LeaveAction::Reject)
        .await
        .expect("reject");

    let history = employee.list_leaves().await.expect("history");
    assert_eq!(history[0].status, "Rejected");
}

#[tokio::test]
async fn empty_dates_are_submitted_verbatim() {
    // the form performs no validation; empty strings are the backend's problem
    let (base_url, _backend) = common::spawn_backend().await;
    let employee = common::client_for(&base_url, Role::Employee).await;

    employee
        .submit_leave(&CreateLeaveRequest {
            start_date: String::new(),
            end_date: String::new(),
            leave_type: "Annual".to_string(),
            reason: String::new(),
        })
        .await
        .expect("submit");

    let history = employee.list_leaves().await.expect("history");
    assert_eq!(history[0].start_date, "");
    assert_eq!(history[0].leave_type, "Annual");
}

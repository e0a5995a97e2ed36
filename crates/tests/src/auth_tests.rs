use api_client::{Authenticator, HrmsClient};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, Role, SeedUserRequest};

use crate::common;

#[tokio::test]
async fn login_success_maps_payload_and_produces_bearer_header() {
    let (base_url, _backend) = common::spawn_backend().await;
    let anon = HrmsClient::new(&base_url);

    anon.seed_user(&SeedUserRequest {
        email: "hr@example.com".into(),
        full_name: "Alex HR".into(),
        role: Role::Hr.as_str().into(),
        password: "password".into(),
    })
    .await
    .expect("seed");

    let login = anon
        .login("hr@example.com".into(), "password".into())
        .await
        .expect("login");

    assert_eq!(login.full_name, "Alex HR");
    assert_eq!(login.role, "HR");
    assert!(!login.user_id.is_empty());
    assert!(!login.token.is_empty());

    let authed = HrmsClient::new(&base_url).with_token(login.token.clone());
    assert_eq!(
        authed.authorization(),
        Some(format!("Bearer {}", login.token))
    );
}

#[tokio::test]
async fn login_failure_yields_login_failed_and_no_session_material() {
    let (base_url, _backend) = common::spawn_backend().await;
    let anon = HrmsClient::new(&base_url);

    anon.seed_user(&SeedUserRequest {
        email: "hr@example.com".into(),
        full_name: "Alex HR".into(),
        role: Role::Hr.as_str().into(),
        password: "password".into(),
    })
    .await
    .expect("seed");

    let err = anon
        .login("hr@example.com".into(), "wrong".into())
        .await
        .expect_err("wrong password must fail");

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Login failed");
    // the anonymous client still carries no credentials
    assert_eq!(anon.authorization(), None);
}

#[tokio::test]
async fn unknown_account_fails_login() {
    let (base_url, _backend) = common::spawn_backend().await;
    let anon = HrmsClient::new(&base_url);

    let err = anon
        .login("nobody@example.com".into(), "password".into())
        .await
        .expect_err("unknown account must fail");
    assert_eq!(err.message, "Login failed");
}

#[tokio::test]
async fn protected_endpoints_reject_missing_token() {
    let (base_url, _backend) = common::spawn_backend().await;
    let anon = HrmsClient::new(&base_url);

    let err = anon.list_departments().await.expect_err("no token");
    assert_eq!(err.kind, AppErrorKind::Unauthorized);

    let err = anon.list_leaves().await.expect_err("no token");
    assert_eq!(err.kind, AppErrorKind::Unauthorized);

    let err = anon.list_notifications().await.expect_err("no token");
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}

#[tokio::test]
async fn stale_token_is_rejected() {
    let (base_url, _backend) = common::spawn_backend().await;
    let bogus = HrmsClient::new(&base_url).with_token("token-never-issued");

    let err = bogus.list_departments().await.expect_err("bogus token");
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}

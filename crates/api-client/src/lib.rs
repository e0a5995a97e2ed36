//! Typed client for the HRMS backend.
//!
//! One method per endpoint of the wire contract. Every call returns an
//! explicit `Result` so call sites decide visibly what to do with failures.
//! Mutation endpoints ignore the response body: the caller is expected to
//! reload the affected list afterwards.

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{
    AppError, CreateDepartmentRequest, CreateEmployeeRequest, CreateLeaveRequest, Department,
    Employee, LeaveAction, LeaveActionRequest, LeaveRequest, LoginRequest, LoginResponse,
    Notification, SeedUserRequest, SeedUserResponse,
};
use std::future::Future;

/// Something that can exchange credentials for a login payload.
///
/// Implemented by [`HrmsClient`]; tests substitute a fake so session logic
/// can be exercised without a backend.
pub trait Authenticator {
    fn login(
        &self,
        email: String,
        password: String,
    ) -> impl Future<Output = Result<LoginResponse, AppError>>;
}

/// HTTP client for the HRMS backend, carrying an optional bearer token.
///
/// Cheap to clone and rebuild; the views construct one per call cycle from
/// the session store so it always carries the current token.
#[derive(Debug, Clone)]
pub struct HrmsClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HrmsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Attach a bearer token to every subsequent authenticated request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// The `Authorization` header value, or `None` when no token is held.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn apply_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.authorization() {
            Some(value) => req.header(reqwest::header::AUTHORIZATION, value),
            None => req,
        }
    }

    /// Turn a non-success response into an `AppError` of the matching kind.
    async fn check(res: reqwest::Response) -> Result<reqwest::Response, AppError> {
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }
        let body = res.text().await.unwrap_or_default();
        let message = if body.is_empty() {
            format!("request failed with status {}", status.as_u16())
        } else {
            body
        };
        Err(AppError::from_status(status.as_u16(), message))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let res = self
            .apply_auth(self.http.get(self.url(path)))
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;
        Self::check(res)
            .await?
            .json::<T>()
            .await
            .map_err(|e| AppError::network(e.to_string()))
    }

    async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, AppError> {
        let res = self
            .apply_auth(self.http.post(self.url(path)).json(body))
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;
        Self::check(res).await
    }

    /// `POST /seed/user`, creating a demo user of the given role.
    pub async fn seed_user(&self, req: &SeedUserRequest) -> Result<SeedUserResponse, AppError> {
        self.post_json("/seed/user", req)
            .await?
            .json::<SeedUserResponse>()
            .await
            .map_err(|e| AppError::network(e.to_string()))
    }

    /// `GET /departments`
    pub async fn list_departments(&self) -> Result<Vec<Department>, AppError> {
        self.get_json("/departments").await
    }

    /// `POST /departments`. Response body ignored.
    pub async fn create_department(&self, req: &CreateDepartmentRequest) -> Result<(), AppError> {
        self.post_json("/departments", req).await.map(|_| ())
    }

    /// `GET /employees`
    pub async fn list_employees(&self) -> Result<Vec<Employee>, AppError> {
        self.get_json("/employees").await
    }

    /// `POST /employees`. Response body ignored.
    pub async fn create_employee(&self, req: &CreateEmployeeRequest) -> Result<(), AppError> {
        self.post_json("/employees", req).await.map(|_| ())
    }

    /// `DELETE /employees/{user_id}`. Response body ignored.
    pub async fn delete_employee(&self, user_id: &str) -> Result<(), AppError> {
        let res = self
            .apply_auth(self.http.delete(self.url(&format!("/employees/{user_id}"))))
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;
        Self::check(res).await.map(|_| ())
    }

    /// `GET /leaves`, the caller's own leave history.
    pub async fn list_leaves(&self) -> Result<Vec<LeaveRequest>, AppError> {
        self.get_json("/leaves").await
    }

    /// `GET /leaves?status=Pending`, pending requests in the manager's scope.
    pub async fn list_pending_leaves(&self) -> Result<Vec<LeaveRequest>, AppError> {
        self.get_json("/leaves?status=Pending").await
    }

    /// `POST /leaves`. Response body ignored.
    pub async fn submit_leave(&self, req: &CreateLeaveRequest) -> Result<(), AppError> {
        self.post_json("/leaves", req).await.map(|_| ())
    }

    /// `POST /leaves/{id}/action`, approve or reject. Response body ignored.
    pub async fn leave_action(&self, id: &str, action: LeaveAction) -> Result<(), AppError> {
        self.post_json(
            &format!("/leaves/{id}/action"),
            &LeaveActionRequest { action },
        )
        .await
        .map(|_| ())
    }

    /// `GET /notifications`
    pub async fn list_notifications(&self) -> Result<Vec<Notification>, AppError> {
        self.get_json("/notifications").await
    }
}

impl Authenticator for HrmsClient {
    /// `POST /auth/login`, sent without an auth header.
    ///
    /// Any non-success response collapses to an Unauthorized "Login failed",
    /// the only error message the login view surfaces.
    async fn login(&self, email: String, password: String) -> Result<LoginResponse, AppError> {
        let res = self
            .http
            .post(self.url("/auth/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "login request failed to send");
                AppError::unauthorized("Login failed")
            })?;
        if !res.status().is_success() {
            return Err(AppError::unauthorized("Login failed"));
        }
        res.json::<LoginResponse>()
            .await
            .map_err(|e| AppError::network(e.to_string()))
    }
}

use serde::{Deserialize, Serialize};

/// Request DTO for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response payload of a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user_id: String,
    pub full_name: String,
    pub role: String,
    pub token: String,
}

/// Request DTO for `POST /seed/user`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedUserRequest {
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub password: String,
}

/// Response of the seed endpoint; `id` is absent when the backend elides it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedUserResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Request DTO for `POST /departments`.
///
/// `manager_id` is submitted as-is, including the empty string; the
/// backend owns any validation of its existence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDepartmentRequest {
    pub name: String,
    pub description: String,
    pub manager_id: String,
}

/// Request DTO for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub joining_date: String,
    pub department_id: String,
    pub designation: String,
    pub manager_user_id: String,
}

/// Request DTO for `POST /leaves`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLeaveRequest {
    pub start_date: String,
    pub end_date: String,
    #[serde(rename = "type")]
    pub leave_type: String,
    pub reason: String,
}

/// Decision posted to `POST /leaves/{id}/action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveAction {
    Approve,
    Reject,
}

impl LeaveAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveAction::Approve => "Approve",
            LeaveAction::Reject => "Reject",
        }
    }
}

/// Request DTO for `POST /leaves/{id}/action`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveActionRequest {
    pub action: LeaveAction,
}

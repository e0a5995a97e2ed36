use serde::{Deserialize, Serialize};

/// Roles the backend can assign to an authenticated user.
///
/// The server reports the role as a free-form string; anything that does not
/// parse stays visible to the UI as an unknown role rather than silently
/// mapping to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Hr,
    Manager,
    Employee,
}

impl Role {
    /// All roles, in the order the seeder offers them.
    pub const ALL: [Role; 3] = [Role::Hr, Role::Manager, Role::Employee];

    /// Parse a server role string. Case-insensitive; unknown values are `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hr" => Some(Role::Hr),
            "manager" => Some(Role::Manager),
            "employee" => Some(Role::Employee),
            _ => None,
        }
    }

    /// The exact string the wire contract uses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Hr => "HR",
            Role::Manager => "Manager",
            Role::Employee => "Employee",
        }
    }
}

/// The authenticated identity held by the session store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub user_id: String,
    pub full_name: String,
    /// Role string exactly as the server reported it.
    pub role: String,
}

/// A department record as returned by `GET /departments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
}

/// An employee record as returned by `GET /employees`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_user_id: Option<String>,
}

/// Leave categories offered by the request form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LeaveType {
    #[default]
    Annual,
    Sick,
    Casual,
    Unpaid,
    Other,
}

impl LeaveType {
    /// All types, in the order the form offers them.
    pub const ALL: [LeaveType; 5] = [
        LeaveType::Annual,
        LeaveType::Sick,
        LeaveType::Casual,
        LeaveType::Unpaid,
        LeaveType::Other,
    ];

    /// Parse a wire string. Unknown values default to Annual.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "Sick" => LeaveType::Sick,
            "Casual" => LeaveType::Casual,
            "Unpaid" => LeaveType::Unpaid,
            "Other" => LeaveType::Other,
            _ => LeaveType::Annual,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Annual => "Annual",
            LeaveType::Sick => "Sick",
            LeaveType::Casual => "Casual",
            LeaveType::Unpaid => "Unpaid",
            LeaveType::Other => "Other",
        }
    }
}

/// Display classification of a leave status string.
///
/// The raw status is passed through verbatim; this only decides which of the
/// three visual states a history entry gets. Anything unrecognised renders
/// as pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "Approved" => LeaveStatus::Approved,
            "Rejected" => LeaveStatus::Rejected,
            _ => LeaveStatus::Pending,
        }
    }
}

/// A leave request as returned by `GET /leaves`.
///
/// Dates travel as plain strings: the form submits native date-input values
/// verbatim, empty permitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub reason: String,
    pub status: String,
}

/// A notification as returned by `GET /notifications`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub message: String,
}

//! Wire DTOs for the client/server auth boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Username/password pair submitted to the login endpoint.
///
/// Sent form-urlencoded, not JSON, so this type carries no serde derives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

/// Token pair issued by a successful login exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// Account role. Registration defaults to `Student`; `Teacher` and
/// `Admin` require a privileged access code checked server-side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    #[default]
    Student,
    Teacher,
    Admin,
}

impl Role {
    /// Parse a form select value; unknown values fall back to `Student`.
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "user" => Self::User,
            "teacher" => Self::Teacher,
            "admin" => Self::Admin,
            _ => Self::Student,
        }
    }
}

/// Registration fields submitted as JSON to the register endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterForm {
    pub nickname: String,
    pub login: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    /// Privileged-registration code, only sent for non-student roles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_code: Option<String>,
}

/// The authenticated user as returned by the current-user endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// Display name shown in the header and on the profile page.
    pub nickname: String,
    /// Sign-in identifier.
    pub login: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
    /// Avatar image URL, if the account has one selected.
    #[serde(default)]
    pub avatar: Option<String>,
}

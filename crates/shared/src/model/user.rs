use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Instructor,
    Admin,
}

impl Role {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Instructor => "instructor",
            Role::Admin => "admin",
        }
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed in user's profile as returned by the backend
///
/// Only `role` is looked at by the client, everything else is carried along
/// untouched so the record round trips through storage unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl User {
    pub fn with_role<R: AsRef<str>>(role: R) -> Self {
        Self { role: Some(role.as_ref().to_string()), fields: Map::new() }
    }

    /// Case insensitive role check. A user without a role has none of them
    pub fn has_role<R: AsRef<str>>(&self, role: R) -> bool {
        self.role
            .as_deref()
            .map_or(false, |r| r.to_lowercase() == role.as_ref().to_lowercase())
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}
